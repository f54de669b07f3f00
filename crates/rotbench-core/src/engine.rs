//! The rotation engine: sequential and partitioned fork-join strategies.
//!
//! Both strategies normalize the shift the same way and scatter every source
//! element to `(i + k) mod N` in an auxiliary buffer, which is then copied
//! back over the source.
//!
//! The parallel strategy hands each worker the destination cells its source
//! partition maps to. Those cells are carved out of the auxiliary buffer as
//! disjoint `&mut` sub-slices before the fork, so the bijection that keeps
//! workers from colliding is checked by construction instead of by locks.
//! The rayon join is the only barrier; the copy-back happens after it.

use rayon::prelude::*;
use tracing::{debug, trace};

use crate::constants::MAX_POOL_THREADS;
use crate::error::RotateError;
use crate::partition::{active_partitions, Partition, WorkerCount};
use crate::shift::NormalizedShift;

/// Executes rotations, optionally on a dedicated rayon pool.
pub struct RotationEngine {
    pool: Option<rayon::ThreadPool>,
}

impl Default for RotationEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl RotationEngine {
    /// Engine that runs parallel work on rayon's global pool.
    #[must_use]
    pub fn new() -> Self {
        Self { pool: None }
    }

    /// Engine with a dedicated pool of `threads` OS threads.
    ///
    /// The pool is capped at [`MAX_POOL_THREADS`]; partition count is not.
    pub fn with_threads(threads: WorkerCount) -> Result<Self, RotateError> {
        let num_threads = threads.get().min(MAX_POOL_THREADS);
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(num_threads)
            .thread_name(|i| format!("rotbench-worker-{i}"))
            .build()
            .map_err(|e| RotateError::ThreadPool(e.to_string()))?;
        debug!(num_threads, "built rotation thread pool");
        Ok(Self { pool: Some(pool) })
    }

    /// Number of threads parallel work can use.
    #[must_use]
    pub fn current_num_threads(&self) -> usize {
        self.pool
            .as_ref()
            .map_or_else(rayon::current_num_threads, rayon::ThreadPool::current_num_threads)
    }

    /// Rotate `data` in place by `shift`, single-threaded.
    pub fn rotate_sequential(&self, data: &mut [i32], shift: i64) {
        let Some(k) = NormalizedShift::new(shift, data.len()) else {
            debug!(len = data.len(), shift, "sequential rotation is a no-op");
            return;
        };
        debug!(len = data.len(), shift, offset = k.offset(), "sequential rotation");

        let mut temp = vec![0; data.len()];
        for (i, &value) in data.iter().enumerate() {
            temp[k.destination(i)] = value;
        }
        data.copy_from_slice(&temp);
    }

    /// Rotate `data` in place by `shift`, split across `workers` partitions.
    ///
    /// Produces exactly what [`rotate_sequential`](Self::rotate_sequential)
    /// produces for the same input.
    pub fn rotate_parallel(&self, data: &mut [i32], shift: i64, workers: WorkerCount) {
        let Some(k) = NormalizedShift::new(shift, data.len()) else {
            debug!(len = data.len(), shift, "parallel rotation is a no-op");
            return;
        };
        debug!(
            len = data.len(),
            shift,
            offset = k.offset(),
            workers = workers.get(),
            "parallel rotation"
        );

        let mut temp = vec![0; data.len()];
        {
            let source: &[i32] = data;
            let plans = plan_workers(&mut temp, k, workers);
            self.install(|| {
                plans
                    .into_par_iter()
                    .with_max_len(1)
                    .for_each(|plan| plan.execute(source, k));
            });
        }
        // Every worker has joined; the buffer is complete.
        data.copy_from_slice(&temp);
    }

    fn install<OP, R>(&self, op: OP) -> R
    where
        OP: FnOnce() -> R + Send,
        R: Send,
    {
        match &self.pool {
            Some(pool) => pool.install(op),
            None => op(),
        }
    }
}

/// Destination cells owned by one worker, starting at `dest_start`.
struct Segment<'a> {
    source_start: usize,
    dest_start: usize,
    cells: &'a mut [i32],
}

/// A worker's source partition and the destination cells it writes.
struct WorkerPlan<'a> {
    worker: usize,
    partition: Partition,
    segments: Vec<Segment<'a>>,
}

impl WorkerPlan<'_> {
    fn execute(mut self, source: &[i32], shift: NormalizedShift) {
        trace!(
            worker = self.worker,
            start = self.partition.start,
            end = self.partition.end,
            "worker scatter"
        );
        for seg in &mut self.segments {
            let sources = seg.source_start..seg.source_start + seg.cells.len();
            for i in sources {
                seg.cells[shift.destination(i) - seg.dest_start] = source[i];
            }
        }
    }
}

/// Split `temp` into the disjoint destination segments of each partition.
///
/// Only non-empty partitions get a plan, so a worker count far above the
/// length costs nothing extra. Runs from all partitions are ordered by destination and peeled off the
/// front of the buffer in turn. Because the mapping is a bijection the runs
/// tile the buffer exactly; any overlap or gap would fail the split.
fn plan_workers(
    temp: &mut [i32],
    shift: NormalizedShift,
    workers: WorkerCount,
) -> Vec<WorkerPlan<'_>> {
    let parts = active_partitions(temp.len(), workers);

    let mut runs: Vec<_> = parts
        .iter()
        .enumerate()
        .flat_map(|(slot, (_, p))| p.destination_runs(shift).map(move |run| (slot, run)))
        .collect();
    runs.sort_unstable_by_key(|(_, run)| run.dest_start);

    let mut plans: Vec<WorkerPlan<'_>> = parts
        .into_iter()
        .map(|(worker, partition)| WorkerPlan {
            worker,
            partition,
            segments: Vec::with_capacity(2),
        })
        .collect();

    let mut rest = temp;
    let mut cursor = 0;
    for (slot, run) in runs {
        assert_eq!(run.dest_start, cursor, "destination runs must tile the buffer");
        let (cells, tail) = std::mem::take(&mut rest).split_at_mut(run.len);
        rest = tail;
        cursor += run.len;
        plans[slot].segments.push(Segment {
            source_start: run.source_start,
            dest_start: run.dest_start,
            cells,
        });
    }
    debug_assert!(rest.is_empty());

    plans
}
