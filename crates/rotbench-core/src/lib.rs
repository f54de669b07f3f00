//! # rotbench-core
//!
//! Core library for rotbench: cyclic rotation of integer sequences with a
//! sequential strategy and a partitioned fork-join strategy that share the
//! same shift normalization and index mapping.

pub mod constants;
pub mod engine;
pub mod error;
pub mod generator;
pub mod partition;
pub mod sequence;
pub mod shift;

// Re-exports
pub use constants::{
    exit_codes, DEFAULT_PREVIEW_LEN, DEFAULT_SHIFT, DEFAULT_SIZE, DEFAULT_THREADS, ELEMENT_BOUND,
    MAX_POOL_THREADS,
};
pub use engine::RotationEngine;
pub use error::RotateError;
pub use generator::SequenceSource;
pub use partition::{active_partitions, partition, Partition, WorkerCount};
pub use sequence::Sequence;
pub use shift::NormalizedShift;

