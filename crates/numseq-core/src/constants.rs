//! Constants for algorithm dispatch and process exit codes.

/// Index at which the dispatcher switches from iteration to fast doubling.
///
/// Below this value the O(n) loop of additions beats fast doubling, whose
/// multiplications only pay off once the operands are a few hundred bits
/// wide. Re-derive it with `numseq calibrate` on new hardware.
pub const DEFAULT_DOUBLING_THRESHOLD: u64 = 440;

/// Largest index the exponential recursive reference will accept.
pub const MAX_RECURSIVE_INDEX: u64 = 30;

/// The perfect numbers that fit in an `i32`.
pub const PERFECT_NUMBERS_I32: [i32; 5] = [6, 28, 496, 8128, 33_550_336];

/// Process exit codes used by the `numseq` binary.
pub mod exit_codes {
    /// Successful execution.
    pub const SUCCESS: i32 = 0;
    /// Generic error.
    pub const ERROR_GENERIC: i32 = 1;
    /// Non-positive index or malformed range.
    pub const ERROR_INVALID_INPUT: i32 = 2;
    /// Algorithm results did not match during evaluation.
    pub const ERROR_MISMATCH: i32 = 3;
    /// Invalid configuration.
    pub const ERROR_CONFIG: i32 = 4;
}
