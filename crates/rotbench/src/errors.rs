//! Error handling and exit codes.

use rotbench_core::constants::exit_codes;
use rotbench_core::error::RotateError;

/// Map a rotation error to its exit code.
pub fn handle_error(err: &RotateError) -> i32 {
    match err {
        RotateError::InvalidInput { .. } => exit_codes::ERROR_INPUT,
        RotateError::InvalidArgument(_)
        | RotateError::DegenerateConcurrency(_)
        | RotateError::ThreadPool(_) => exit_codes::ERROR_CONFIG,
        RotateError::Mismatch { .. } => exit_codes::ERROR_MISMATCH,
        RotateError::Io(_) => exit_codes::ERROR_GENERIC,
    }
}

/// Exit code for any application error.
pub fn exit_code(err: &anyhow::Error) -> i32 {
    err.downcast_ref::<RotateError>()
        .map_or(exit_codes::ERROR_GENERIC, handle_error)
}
