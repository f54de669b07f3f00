//! Work partitioning for the parallel strategy.
//!
//! `[0, N)` is split into `K` contiguous source ranges. All but the last
//! hold `N / K` indices and the last absorbs the remainder, so the ranges
//! tile `[0, N)` exactly. Only non-empty ranges are ever built. Under a rotation, each source range maps onto at
//! most two contiguous destination runs.

use std::num::NonZeroUsize;
use std::ops::Range;

use serde::{Deserialize, Serialize};

use crate::error::RotateError;
use crate::shift::NormalizedShift;

/// A validated, non-zero number of workers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WorkerCount(NonZeroUsize);

impl WorkerCount {
    /// Validate a requested worker count.
    ///
    /// Counts of zero or below are rejected rather than clamped.
    pub fn new(requested: i64) -> Result<Self, RotateError> {
        usize::try_from(requested)
            .ok()
            .and_then(NonZeroUsize::new)
            .map(Self)
            .ok_or(RotateError::DegenerateConcurrency(requested))
    }

    /// Number of workers.
    #[must_use]
    pub fn get(self) -> usize {
        self.0.get()
    }
}

/// A half-open range `[start, end)` of source indices owned by one worker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Partition {
    /// First source index (inclusive).
    pub start: usize,
    /// One past the last source index.
    pub end: usize,
}

/// A contiguous stretch of the rotation: `len` source indices starting at
/// `source_start` land on destinations starting at `dest_start`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Run {
    /// First source index of the run.
    pub source_start: usize,
    /// Destination of `source_start`.
    pub dest_start: usize,
    /// Number of indices in the run.
    pub len: usize,
}

impl Partition {
    /// Number of indices in this partition.
    #[must_use]
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Whether this partition owns no indices.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// The owned indices as a range.
    #[must_use]
    pub fn range(&self) -> Range<usize> {
        self.start..self.end
    }

    /// Destination runs written by this partition under `shift`.
    ///
    /// Yields nothing for an empty partition, one run when the mapped range
    /// does not wrap, and two runs when it crosses the end of the buffer.
    pub fn destination_runs(&self, shift: NormalizedShift) -> impl Iterator<Item = Run> {
        let mut runs = [None, None];
        if !self.is_empty() {
            let dest_start = shift.destination(self.start);
            let head = self.len().min(shift.modulus() - dest_start);
            runs[0] = Some(Run {
                source_start: self.start,
                dest_start,
                len: head,
            });
            if head < self.len() {
                runs[1] = Some(Run {
                    source_start: self.start + head,
                    dest_start: 0,
                    len: self.len() - head,
                });
            }
        }
        runs.into_iter().flatten()
    }
}

/// The `index`-th of `workers` contiguous partitions of `[0, len)`.
///
/// Partitions `0..K-1` have `len / K` indices; the last one spans to `len`.
/// When `K > len` every partition except the last is empty.
#[must_use]
pub fn partition(len: usize, workers: WorkerCount, index: usize) -> Partition {
    let k = workers.get();
    debug_assert!(index < k);
    let base = len / k;
    // base > 0 implies k <= len, so index * base cannot exceed len.
    let start = index * base;
    let end = if index == k - 1 { len } else { start + base };
    Partition { start, end }
}

/// The non-empty partitions of `[0, len)`, each with its worker index.
///
/// Empty partitions own nothing and are never materialized, so the cost
/// is bounded by `min(workers, len)` regardless of the requested count.
#[must_use]
pub fn active_partitions(len: usize, workers: WorkerCount) -> Vec<(usize, Partition)> {
    let k = workers.get();
    if len == 0 {
        return Vec::new();
    }
    if len < k {
        // Only the last partition is non-empty.
        return vec![(k - 1, Partition { start: 0, end: len })];
    }
    (0..k).map(|i| (i, partition(len, workers, i))).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn workers(k: i64) -> WorkerCount {
        WorkerCount::new(k).unwrap()
    }

    fn all_partitions(len: usize, k: i64) -> Vec<Partition> {
        let w = workers(k);
        (0..w.get()).map(|i| partition(len, w, i)).collect()
    }

    #[test]
    fn worker_count_rejects_non_positive() {
        assert_eq!(
            WorkerCount::new(0),
            Err(RotateError::DegenerateConcurrency(0))
        );
        assert_eq!(
            WorkerCount::new(-4),
            Err(RotateError::DegenerateConcurrency(-4))
        );
        assert_eq!(workers(3).get(), 3);
    }

    #[test]
    fn seven_over_three() {
        assert_eq!(
            all_partitions(7, 3),
            vec![
                Partition { start: 0, end: 2 },
                Partition { start: 2, end: 4 },
                Partition { start: 4, end: 7 },
            ]
        );
        assert_eq!(
            active_partitions(7, workers(3)),
            vec![
                (0, Partition { start: 0, end: 2 }),
                (1, Partition { start: 2, end: 4 }),
                (2, Partition { start: 4, end: 7 }),
            ]
        );
    }

    #[test]
    fn more_workers_than_elements() {
        let parts = all_partitions(3, 5);
        assert_eq!(parts.len(), 5);
        assert!(parts[..4].iter().all(Partition::is_empty));
        assert_eq!(parts[4], Partition { start: 0, end: 3 });
        assert_eq!(
            active_partitions(3, workers(5)),
            vec![(4, Partition { start: 0, end: 3 })]
        );
    }

    #[test]
    fn huge_worker_count_is_not_materialized() {
        let k = workers(i64::MAX);
        let active = active_partitions(5, k);
        assert_eq!(active, vec![(k.get() - 1, Partition { start: 0, end: 5 })]);
        assert!(partition(5, k, 0).is_empty());
        assert_eq!(partition(5, k, k.get() - 1), Partition { start: 0, end: 5 });
    }

    #[test]
    fn empty_sequence() {
        assert!(all_partitions(0, 4).iter().all(Partition::is_empty));
        assert!(active_partitions(0, workers(4)).is_empty());
    }

    #[test]
    fn partitions_tile_range() {
        for len in 0..50usize {
            for k in 1..=(len as i64 + 2) {
                let parts = all_partitions(len, k);
                let mut expected_start = 0;
                for p in &parts {
                    if p.is_empty() {
                        continue;
                    }
                    assert_eq!(p.start, expected_start, "gap at len={len} k={k}");
                    expected_start = p.end;
                }
                assert_eq!(expected_start, len);

                let active: Vec<Partition> = active_partitions(len, workers(k))
                    .into_iter()
                    .map(|(i, p)| {
                        assert_eq!(p, parts[i]);
                        p
                    })
                    .collect();
                let non_empty: Vec<Partition> =
                    parts.into_iter().filter(|p| !p.is_empty()).collect();
                assert_eq!(active, non_empty, "len={len} k={k}");
            }
        }
    }

    #[test]
    fn runs_split_on_wrap() {
        let shift = NormalizedShift::new(3, 7).unwrap();
        let runs: Vec<Run> = Partition { start: 2, end: 6 }
            .destination_runs(shift)
            .collect();
        assert_eq!(
            runs,
            vec![
                Run {
                    source_start: 2,
                    dest_start: 5,
                    len: 2
                },
                Run {
                    source_start: 4,
                    dest_start: 0,
                    len: 2
                },
            ]
        );
    }

    #[test]
    fn runs_cover_destinations_once() {
        for len in 1..30usize {
            for raw in 1..len as i64 {
                let shift = NormalizedShift::new(raw, len).unwrap();
                for k in 1..=(len as i64 + 2) {
                    let mut hits = vec![0u32; len];
                    for (_, p) in active_partitions(len, workers(k)) {
                        for run in p.destination_runs(shift) {
                            for j in 0..run.len {
                                assert_eq!(
                                    shift.destination(run.source_start + j),
                                    run.dest_start + j
                                );
                                hits[run.dest_start + j] += 1;
                            }
                        }
                    }
                    assert!(hits.iter().all(|&h| h == 1), "len={len} raw={raw} k={k}");
                }
            }
        }
    }

    #[test]
    fn empty_partition_has_no_runs() {
        let shift = NormalizedShift::new(1, 4).unwrap();
        assert_eq!(Partition { start: 0, end: 0 }.destination_runs(shift).count(), 0);
    }
}
