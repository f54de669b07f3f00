//! Random input generation.

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::error::RotateError;
use crate::sequence::Sequence;

/// Mixing constant separating seeded streams (2^64 / golden ratio).
const STREAM_MIX: u64 = 0x9E37_79B9_7F4A_7C15;

/// Where benchmark input comes from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SequenceSource {
    /// Fresh OS entropy for every generated sequence.
    #[default]
    Entropy,
    /// Deterministic generation from a fixed seed.
    Seeded(u64),
}

impl SequenceSource {
    /// Build from an optional seed.
    #[must_use]
    pub fn from_seed(seed: Option<u64>) -> Self {
        seed.map_or(Self::Entropy, Self::Seeded)
    }

    /// The seed, when generation is deterministic.
    #[must_use]
    pub fn seed(self) -> Option<u64> {
        match self {
            Self::Entropy => None,
            Self::Seeded(seed) => Some(seed),
        }
    }

    /// RNG for one independent stream.
    ///
    /// Seeded sources derive a distinct generator per `stream`; entropy
    /// sources ignore `stream` since every call is already independent.
    #[must_use]
    pub fn rng(self, stream: u64) -> StdRng {
        match self {
            Self::Entropy => StdRng::from_os_rng(),
            Self::Seeded(seed) => StdRng::seed_from_u64(seed ^ stream.wrapping_mul(STREAM_MIX)),
        }
    }

    /// Generate a sequence of `requested` elements from stream `stream`.
    pub fn generate(self, requested: i64, stream: u64) -> Result<Sequence, RotateError> {
        let mut rng = self.rng(stream);
        Sequence::random(requested, &mut rng)
    }
}
