//! # rotbench-orchestration
//!
//! Benchmark driver: input generation, timed strategy runs, and speedup analysis.

pub mod driver;
pub mod interfaces;
pub mod options;

pub use driver::{run_benchmark, verify_strategies, BenchmarkDriver};
pub use interfaces::{
    BenchmarkReport, InputSource, ResultPresenter, RunResult, Speedup, Strategy,
};
pub use options::BenchmarkOptions;
