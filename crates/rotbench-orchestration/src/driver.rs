//! The benchmark driver: generate, rotate, time, compare.

use std::time::Instant;

use tracing::{debug, info};

use rotbench_core::engine::RotationEngine;
use rotbench_core::error::RotateError;
use rotbench_core::partition::WorkerCount;
use rotbench_core::sequence::Sequence;
use rotbench_core::shift::effective_offset;

use crate::interfaces::{BenchmarkReport, ResultPresenter, RunResult, Speedup, Strategy};
use crate::options::BenchmarkOptions;

/// Stream of the sequential run's input.
const SEQUENTIAL_STREAM: u64 = 0;
/// Stream of the parallel run's independently generated input.
const PARALLEL_STREAM: u64 = 1;

/// Runs the sequential and parallel strategies over independent inputs.
pub struct BenchmarkDriver {
    options: BenchmarkOptions,
    len: usize,
    workers: WorkerCount,
    engine: RotationEngine,
}

impl BenchmarkDriver {
    /// Validate options and build a thread pool sized to the worker count.
    ///
    /// Fails before any work if the size or worker count is not positive.
    pub fn new(options: BenchmarkOptions) -> Result<Self, RotateError> {
        let options = options.normalize();
        let len = Sequence::checked_len(options.size)?;
        let workers = WorkerCount::new(options.workers)?;
        let engine = RotationEngine::with_threads(workers)?;
        debug!(
            workers = workers.get(),
            threads = engine.current_num_threads(),
            "benchmark driver ready"
        );
        Ok(Self {
            options,
            len,
            workers,
            engine,
        })
    }

    /// Run both strategies, reporting through `presenter` as results arrive.
    pub fn run(&self, presenter: &dyn ResultPresenter) -> Result<BenchmarkReport, RotateError> {
        let opts = &self.options;
        let preview_len = opts.preview_len;

        let mut input = opts.source.generate(opts.size, SEQUENTIAL_STREAM)?;
        let initial_preview = input.preview(preview_len).to_vec();
        presenter.present_initial(&initial_preview);

        let start = Instant::now();
        self.engine.rotate_sequential(input.as_mut_slice(), opts.shift);
        let sequential = RunResult {
            strategy: Strategy::Sequential,
            duration: start.elapsed(),
            preview: input.preview(preview_len).to_vec(),
        };
        debug!(elapsed = ?sequential.duration, "sequential run complete");
        presenter.present_run(&sequential);

        let mut input = opts.source.generate(opts.size, PARALLEL_STREAM)?;
        let start = Instant::now();
        self.engine.rotate_parallel(input.as_mut_slice(), opts.shift, self.workers);
        let parallel = RunResult {
            strategy: Strategy::Parallel,
            duration: start.elapsed(),
            preview: input.preview(preview_len).to_vec(),
        };
        debug!(elapsed = ?parallel.duration, "parallel run complete");
        presenter.present_run(&parallel);

        let speedup = Speedup::from_durations(sequential.duration, parallel.duration);
        presenter.present_speedup(speedup);

        if opts.verify {
            let original = opts.source.generate(opts.size, SEQUENTIAL_STREAM)?;
            verify_strategies(&self.engine, &original, opts.shift, self.workers)?;
            info!("sequential and parallel strategies agree");
        }

        Ok(BenchmarkReport {
            size: self.len,
            shift: opts.shift,
            normalized_shift: effective_offset(opts.shift, self.len),
            workers: self.workers.get(),
            seed: opts.source.seed(),
            initial_preview,
            sequential,
            parallel,
            speedup,
            verified: opts.verify,
        })
    }
}

/// Run a benchmark with the given options.
pub fn run_benchmark(
    options: &BenchmarkOptions,
    presenter: &dyn ResultPresenter,
) -> Result<BenchmarkReport, RotateError> {
    BenchmarkDriver::new(options.clone())?.run(presenter)
}

/// Rotate `input` with both strategies and check the outputs agree.
pub fn verify_strategies(
    engine: &RotationEngine,
    input: &Sequence,
    shift: i64,
    workers: WorkerCount,
) -> Result<(), RotateError> {
    let expected = input.rotated_sequential(engine, shift);
    let actual = input.rotated_parallel(engine, shift, workers);
    match expected.first_difference(&actual) {
        None => Ok(()),
        Some(index) => Err(RotateError::Mismatch { index }),
    }
}
