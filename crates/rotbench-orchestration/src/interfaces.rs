//! Orchestration interfaces and result types.

use std::time::Duration;

use serde::{Serialize, Serializer};

use rotbench_core::error::RotateError;

/// Trait for presenting benchmark progress to the user.
///
/// The driver calls these in output order, outside of any timed section.
pub trait ResultPresenter: Send + Sync {
    /// Present the freshly generated input.
    fn present_initial(&self, preview: &[i32]);

    /// Present one completed, timed rotation.
    fn present_run(&self, run: &RunResult);

    /// Present the speedup of the parallel run over the sequential one.
    fn present_speedup(&self, speedup: Speedup);
}

/// Trait for reading configuration values interactively.
pub trait InputSource {
    /// Read one integer for `field`.
    ///
    /// Implementations return `default` when input is exhausted and
    /// `RotateError::InvalidInput` when a line cannot be parsed.
    fn read_integer(&mut self, field: &str, default: i64) -> Result<i64, RotateError>;
}

/// Which strategy produced a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
    Sequential,
    Parallel,
}

impl Strategy {
    /// Human-readable label used in output.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Sequential => "single-threaded",
            Self::Parallel => "multi-threaded",
        }
    }
}

/// Outcome of one timed rotation.
#[derive(Debug, Clone, Serialize)]
pub struct RunResult {
    /// Strategy used.
    pub strategy: Strategy,
    /// Wall-clock time of the rotation alone.
    #[serde(rename = "elapsed_ms", serialize_with = "serialize_millis")]
    pub duration: Duration,
    /// Leading elements of the rotated sequence.
    pub preview: Vec<i32>,
}

impl RunResult {
    /// Elapsed time in fractional milliseconds.
    #[must_use]
    pub fn millis(&self) -> f64 {
        self.duration.as_secs_f64() * 1000.0
    }
}

fn serialize_millis<S: Serializer>(d: &Duration, s: S) -> Result<S::Ok, S::Error> {
    s.serialize_f64(d.as_secs_f64() * 1000.0)
}

/// Ratio of sequential to parallel time.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(into = "Option<f64>")]
pub enum Speedup {
    /// `sequential / parallel`.
    Ratio(f64),
    /// The parallel run finished below timer resolution.
    Undefined,
}

impl Speedup {
    /// Compute the speedup; a zero parallel time yields `Undefined`.
    #[must_use]
    pub fn from_durations(sequential: Duration, parallel: Duration) -> Self {
        if parallel.is_zero() {
            Self::Undefined
        } else {
            Self::Ratio(sequential.as_secs_f64() / parallel.as_secs_f64())
        }
    }

    /// The ratio, if defined.
    #[must_use]
    pub fn ratio(self) -> Option<f64> {
        match self {
            Self::Ratio(r) => Some(r),
            Self::Undefined => None,
        }
    }
}

impl From<Speedup> for Option<f64> {
    fn from(speedup: Speedup) -> Self {
        speedup.ratio()
    }
}

/// Everything measured in one benchmark.
#[derive(Debug, Clone, Serialize)]
pub struct BenchmarkReport {
    /// Length of both generated sequences.
    pub size: usize,
    /// Shift as requested.
    pub shift: i64,
    /// Shift actually applied, in `[0, size)`.
    pub normalized_shift: usize,
    /// Number of partitions used by the parallel run.
    pub workers: usize,
    /// Seed, when generation was deterministic.
    pub seed: Option<u64>,
    /// Leading elements of the sequential run's input.
    pub initial_preview: Vec<i32>,
    pub sequential: RunResult,
    pub parallel: RunResult,
    pub speedup: Speedup,
    /// Whether the strategies were cross-checked on identical input.
    pub verified: bool,
}

/// Presenter that discards everything.
pub struct NullPresenter;

impl ResultPresenter for NullPresenter {
    fn present_initial(&self, _preview: &[i32]) {}
    fn present_run(&self, _run: &RunResult) {}
    fn present_speedup(&self, _speedup: Speedup) {}
}
