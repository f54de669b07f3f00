//! Owned integer sequences.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::constants::ELEMENT_BOUND;
use crate::engine::RotationEngine;
use crate::error::RotateError;
use crate::partition::WorkerCount;

/// A fixed-length sequence of integers, indexed `0..N`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Sequence {
    elements: Vec<i32>,
}

impl Sequence {
    /// Validate a requested length, rejecting zero and negatives.
    pub fn checked_len(requested: i64) -> Result<usize, RotateError> {
        match usize::try_from(requested) {
            Ok(len) if len > 0 => Ok(len),
            _ => Err(RotateError::InvalidArgument(requested)),
        }
    }

    /// Generate `requested` elements uniformly in `[0, ELEMENT_BOUND)`.
    pub fn random<R: Rng>(requested: i64, rng: &mut R) -> Result<Self, RotateError> {
        let len = Self::checked_len(requested)?;
        let elements = (0..len)
            .map(|_| rng.random_range(0..ELEMENT_BOUND))
            .collect();
        Ok(Self { elements })
    }

    /// Number of elements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Whether the sequence has no elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[i32] {
        &self.elements
    }

    pub fn as_mut_slice(&mut self) -> &mut [i32] {
        &mut self.elements
    }

    /// The first `min(n, len)` elements.
    #[must_use]
    pub fn preview(&self, n: usize) -> &[i32] {
        &self.elements[..n.min(self.elements.len())]
    }

    /// Copy of this sequence rotated with the sequential strategy.
    #[must_use]
    pub fn rotated_sequential(&self, engine: &RotationEngine, shift: i64) -> Self {
        let mut out = self.clone();
        engine.rotate_sequential(&mut out.elements, shift);
        out
    }

    /// Copy of this sequence rotated with the partitioned strategy.
    #[must_use]
    pub fn rotated_parallel(
        &self,
        engine: &RotationEngine,
        shift: i64,
        workers: WorkerCount,
    ) -> Self {
        let mut out = self.clone();
        engine.rotate_parallel(&mut out.elements, shift, workers);
        out
    }

    /// First index at which two sequences differ, if any.
    ///
    /// A length difference counts as a difference at the shorter length.
    #[must_use]
    pub fn first_difference(&self, other: &Self) -> Option<usize> {
        self.elements
            .iter()
            .zip(&other.elements)
            .position(|(a, b)| a != b)
            .or_else(|| (self.len() != other.len()).then(|| self.len().min(other.len())))
    }
}

impl From<Vec<i32>> for Sequence {
    fn from(elements: Vec<i32>) -> Self {
        Self { elements }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn checked_len_rejects_non_positive() {
        assert_eq!(Sequence::checked_len(0), Err(RotateError::InvalidArgument(0)));
        assert_eq!(
            Sequence::checked_len(-5),
            Err(RotateError::InvalidArgument(-5))
        );
        assert_eq!(Sequence::checked_len(12), Ok(12));
    }

    #[test]
    fn random_elements_in_bounds() {
        let mut rng = StdRng::seed_from_u64(7);
        let seq = Sequence::random(1_000, &mut rng).unwrap();
        assert_eq!(seq.len(), 1_000);
        assert!(seq.as_slice().iter().all(|&v| (0..ELEMENT_BOUND).contains(&v)));
    }

    #[test]
    fn random_rejects_zero() {
        let mut rng = StdRng::seed_from_u64(7);
        assert!(matches!(
            Sequence::random(0, &mut rng),
            Err(RotateError::InvalidArgument(0))
        ));
    }

    #[test]
    fn preview_truncates() {
        let seq = Sequence::from((0..25).collect::<Vec<i32>>());
        assert_eq!(seq.preview(10), &[0, 1, 2, 3, 4, 5, 6, 7, 8, 9]);
        let short = Sequence::from(vec![4, 5, 6]);
        assert_eq!(short.preview(10), &[4, 5, 6]);
    }

    #[test]
    fn rotated_copies_leave_original() {
        let engine = RotationEngine::new();
        let seq = Sequence::from(vec![1, 2, 3, 4, 5]);
        let seq_out = seq.rotated_sequential(&engine, 2);
        let par_out = seq.rotated_parallel(&engine, 2, WorkerCount::new(2).unwrap());
        assert_eq!(seq.as_slice(), &[1, 2, 3, 4, 5]);
        assert_eq!(seq_out.as_slice(), &[4, 5, 1, 2, 3]);
        assert_eq!(par_out, seq_out);
    }

    #[test]
    fn first_difference() {
        let a = Sequence::from(vec![1, 2, 3]);
        assert_eq!(a.first_difference(&a.clone()), None);
        assert_eq!(a.first_difference(&Sequence::from(vec![1, 9, 3])), Some(1));
        assert_eq!(a.first_difference(&Sequence::from(vec![1, 2])), Some(2));
    }

    #[test]
    fn serde_transparent() {
        let seq: Sequence = serde_json::from_str("[3, 1, 2]").unwrap();
        assert_eq!(seq.as_slice(), &[3, 1, 2]);
    }
}
