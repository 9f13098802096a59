//! Perfect-number search.
//!
//! A perfect number equals the sum of its proper divisors. Even perfect
//! numbers have the Euclid-Euler form 2^(p-1) * (2^p - 1) with 2^p - 1 a
//! Mersenne prime, which lets the range search generate candidates instead
//! of scanning every integer.
//!
//! The predicate only ever accepts even numbers. Whether odd perfect numbers
//! exist is open, and the range search never generates odd candidates, so
//! both halves stay consistent with each other.

use num_integer::Integer;
use tracing::{debug, trace};

use crate::error::NumError;
use crate::primality::is_probable_prime;

/// Sum of the proper divisors of `number` (0 for non-positive input).
///
/// Tests every integer in `1..=number/2`, O(number).
#[must_use]
pub fn aliquot_sum(number: i32) -> i64 {
    if number < 1 {
        return 0;
    }
    (1..=number / 2)
        .filter(|d| number.is_multiple_of(d))
        .map(i64::from)
        .sum()
}

/// Whether `number` is an even perfect number.
///
/// # Example
/// ```
/// use numseq_core::perfect::is_perfect;
/// assert!(is_perfect(28));
/// assert!(!is_perfect(27));
/// ```
#[must_use]
pub fn is_perfect(number: i32) -> bool {
    number >= 1 && number.is_even() && aliquot_sum(number) == i64::from(number)
}

/// Exponents tried by the range search: 2, 3, 5, 7, 9, ...
///
/// 2^p - 1 is composite for every even p > 2, so only 2 and the odd
/// exponents are produced.
pub fn candidate_exponents() -> impl Iterator<Item = u32> {
    std::iter::once(2).chain((3..).step_by(2))
}

/// The Euclid-Euler value 2^(p-1) * (2^p - 1), or `None` if it overflows `i64`.
#[must_use]
pub fn euclid_euler_candidate(exponent: u32) -> Option<i64> {
    if exponent == 0 {
        return None;
    }
    let mersenne = 2i64.checked_pow(exponent)?.checked_sub(1)?;
    2i64.checked_pow(exponent - 1)?.checked_mul(mersenne)
}

/// All perfect numbers in `[begin, end]`, ascending.
///
/// Fails with [`NumError::InvalidRange`] if `begin > end` or `end < 1`.
///
/// # Example
/// ```
/// use numseq_core::perfect::find_perfect_in_range;
/// assert_eq!(find_perfect_in_range(1, 500).unwrap(), vec![6, 28, 496]);
/// ```
pub fn find_perfect_in_range(begin: i32, end: i32) -> Result<Vec<i32>, NumError> {
    if begin > end || end < 1 {
        return Err(NumError::InvalidRange { begin, end });
    }

    let range = i64::from(begin)..=i64::from(end);
    let mut found = Vec::new();

    for exponent in candidate_exponents() {
        let Some(candidate) = euclid_euler_candidate(exponent) else {
            break;
        };

        // Cheap checks first; the divisor sum is linear in the candidate.
        if range.contains(&candidate) && is_probable_prime(u64::from(exponent)) {
            if let Ok(value) = i32::try_from(candidate) {
                if is_perfect(value) {
                    trace!(exponent, value, "accepted perfect number");
                    found.push(value);
                }
            }
        }

        if candidate >= i64::from(end) {
            break;
        }
    }

    debug!(begin, end, count = found.len(), "perfect-number search done");
    Ok(found)
}
