//! Threshold dispatch between iteration and fast doubling.

use num_bigint::BigUint;
use tracing::debug;

use crate::error::NumError;
use crate::fastdoubling::fibonacci_fast_doubling;
use crate::iterative::fibonacci_iterative;
use crate::options::Options;

/// Check that a signed Fibonacci index is positive.
pub fn validate_index(n: i64) -> Result<u64, NumError> {
    u64::try_from(n)
        .ok()
        .filter(|&n| n > 0)
        .ok_or(NumError::NonPositiveIndex(n))
}

/// Compute F(n) for n >= 1 with the default threshold.
///
/// # Example
/// ```
/// assert_eq!(numseq_core::fibonacci(10).unwrap().to_string(), "55");
/// assert!(numseq_core::fibonacci(0).is_err());
/// ```
pub fn fibonacci(n: i64) -> Result<BigUint, NumError> {
    fibonacci_with_options(n, &Options::default())
}

/// Compute F(n) for n >= 1, choosing the algorithm from `opts`.
///
/// Indices below `opts.doubling_threshold` run the iterative loop, the rest
/// run fast doubling. Both return the same value for every index.
pub fn fibonacci_with_options(n: i64, opts: &Options) -> Result<BigUint, NumError> {
    let n = validate_index(n)?;

    let (algorithm, value) = if opts.uses_fast_doubling(n) {
        ("FastDoubling", fibonacci_fast_doubling(n))
    } else {
        ("Iterative", fibonacci_iterative(n))
    };

    debug!(
        n,
        algorithm,
        threshold = opts.doubling_threshold,
        bits = value.bits(),
        "computed Fibonacci number"
    );
    Ok(value)
}
