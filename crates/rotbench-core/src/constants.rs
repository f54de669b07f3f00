//! Constants for sequence generation, defaults, and exit codes.

/// Exclusive upper bound of randomly generated elements. Values lie in `[0, 100)`.
pub const ELEMENT_BOUND: i32 = 100;

/// Number of leading elements shown in a preview.
pub const DEFAULT_PREVIEW_LEN: usize = 10;

/// Vector size used when the size prompt hits end of input.
pub const DEFAULT_SIZE: i64 = 30;

/// Shift amount used when the shift prompt hits end of input.
pub const DEFAULT_SHIFT: i64 = 20;

/// Worker count used when the threads prompt hits end of input.
pub const DEFAULT_THREADS: i64 = 2;

/// Upper bound on threads in a dedicated pool.
///
/// Larger worker counts still split the work that many ways; the
/// partitions are multiplexed onto fewer OS threads.
pub const MAX_POOL_THREADS: usize = 256;

/// Process exit codes.
pub mod exit_codes {
    /// Successful execution.
    pub const SUCCESS: i32 = 0;
    /// Generic error.
    pub const ERROR_GENERIC: i32 = 1;
    /// Unparsable terminal input.
    pub const ERROR_INPUT: i32 = 2;
    /// Sequential and parallel strategies disagreed during cross-checking.
    pub const ERROR_MISMATCH: i32 = 3;
    /// Invalid configuration (size, worker count, thread pool).
    pub const ERROR_CONFIG: i32 = 4;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        assert!(DEFAULT_SIZE > 0);
        assert!(DEFAULT_THREADS > 0);
        assert!(DEFAULT_PREVIEW_LEN > 0);
        assert!(MAX_POOL_THREADS >= 1);
    }

    #[test]
    fn exit_codes_distinct() {
        let codes = [
            exit_codes::SUCCESS,
            exit_codes::ERROR_GENERIC,
            exit_codes::ERROR_INPUT,
            exit_codes::ERROR_MISMATCH,
            exit_codes::ERROR_CONFIG,
        ];
        for (i, a) in codes.iter().enumerate() {
            for b in &codes[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }
}
