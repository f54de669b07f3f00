//! Benchmark options and interactive resolution of missing values.

use rotbench_core::constants::{DEFAULT_PREVIEW_LEN, DEFAULT_SHIFT, DEFAULT_SIZE, DEFAULT_THREADS};
use rotbench_core::error::RotateError;
use rotbench_core::generator::SequenceSource;

use crate::interfaces::InputSource;

/// Options for one benchmark run.
#[derive(Debug, Clone)]
pub struct BenchmarkOptions {
    /// Requested sequence length. Must be positive.
    pub size: i64,
    /// Raw shift amount; any sign.
    pub shift: i64,
    /// Requested worker count. Must be positive.
    pub workers: i64,
    /// Where input sequences come from.
    pub source: SequenceSource,
    /// Cross-check both strategies on identical input.
    pub verify: bool,
    /// Number of leading elements to show (0 = default).
    pub preview_len: usize,
}

impl Default for BenchmarkOptions {
    fn default() -> Self {
        Self {
            size: DEFAULT_SIZE,
            shift: DEFAULT_SHIFT,
            workers: DEFAULT_THREADS,
            source: SequenceSource::Entropy,
            verify: false,
            preview_len: DEFAULT_PREVIEW_LEN,
        }
    }
}

impl BenchmarkOptions {
    /// Normalize options, applying defaults where values are zero.
    #[must_use]
    pub fn normalize(mut self) -> Self {
        if self.preview_len == 0 {
            self.preview_len = DEFAULT_PREVIEW_LEN;
        }
        self
    }

    /// Fill in size, shift, and workers, prompting for any not already given.
    ///
    /// Prompts run in the fixed order size, shift, threads. Values are not
    /// validated here; the driver rejects bad sizes and worker counts.
    pub fn resolve(
        size: Option<i64>,
        shift: Option<i64>,
        workers: Option<i64>,
        input: &mut dyn InputSource,
    ) -> Result<Self, RotateError> {
        let size = match size {
            Some(v) => v,
            None => input.read_integer("vector size", DEFAULT_SIZE)?,
        };
        let shift = match shift {
            Some(v) => v,
            None => input.read_integer("shift amount", DEFAULT_SHIFT)?,
        };
        let workers = match workers {
            Some(v) => v,
            None => input.read_integer("number of threads", DEFAULT_THREADS)?,
        };
        Ok(Self {
            size,
            shift,
            workers,
            ..Self::default()
        })
    }
}
