//! Error type shared by the Fibonacci engine and the perfect-number finder.

/// Error type for numseq computations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NumError {
    /// Fibonacci index was zero or negative.
    #[error("index must be a positive integer, got {0}")]
    NonPositiveIndex(i64),

    /// Range had `begin > end` or `end < 1`.
    #[error("invalid range [{begin}, {end}]: expected begin <= end and end >= 1")]
    InvalidRange {
        /// Start of the requested range.
        begin: i32,
        /// End of the requested range.
        end: i32,
    },

    /// Configuration error (unknown algorithm, out-of-bounds option).
    #[error("configuration error: {0}")]
    Config(String),
}
