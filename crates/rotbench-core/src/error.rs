//! Error type shared across the workspace.

/// Errors raised while building sequences, planning work, or running a benchmark.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RotateError {
    /// A sequence was requested with a non-positive length.
    #[error("invalid argument: size must be greater than zero (got {0})")]
    InvalidArgument(i64),

    /// A worker count below one was requested.
    #[error("invalid worker count: {0} (must be at least 1)")]
    DegenerateConcurrency(i64),

    /// Terminal input could not be parsed.
    #[error("invalid input for {field}: {value:?} is not an integer")]
    InvalidInput {
        /// Which value was being read.
        field: String,
        /// The offending text, trimmed.
        value: String,
    },

    /// The dedicated thread pool could not be created.
    #[error("thread pool error: {0}")]
    ThreadPool(String),

    /// Reading or writing the terminal failed.
    #[error("I/O error: {0}")]
    Io(String),

    /// The two strategies produced different output for the same input.
    #[error("result mismatch between sequential and parallel rotation at index {index}")]
    Mismatch {
        /// First index at which the outputs differ.
        index: usize,
    },
}
