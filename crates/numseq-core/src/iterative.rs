//! Iterative and recursive Fibonacci algorithms.
//!
//! The iterative loop is what the dispatcher uses for small indices. The
//! recursive version is exponential and only exists as a reference for
//! differential tests and the evaluation harness.

use num_bigint::BigUint;
use num_traits::One;

/// Compute F(n) with n big-integer additions. F(0) = 0.
///
/// # Example
/// ```
/// use numseq_core::iterative::fibonacci_iterative;
/// assert_eq!(fibonacci_iterative(10).to_string(), "55");
/// ```
#[must_use]
pub fn fibonacci_iterative(n: u64) -> BigUint {
    let mut a = BigUint::ZERO;
    let mut b = BigUint::one();

    for _ in 0..n {
        let next = &a + &b;
        a = std::mem::replace(&mut b, next);
    }

    a
}

/// Compute F(n) by naive recursion, O(phi^n).
///
/// Keep n small (see [`crate::constants::MAX_RECURSIVE_INDEX`]).
#[must_use]
pub fn fibonacci_recursive(n: u64) -> BigUint {
    match n {
        0 => BigUint::ZERO,
        1 | 2 => BigUint::one(),
        _ => fibonacci_recursive(n - 1) + fibonacci_recursive(n - 2),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FIRST_SIXTEEN: [u32; 16] = [
        1, 1, 2, 3, 5, 8, 13, 21, 34, 55, 89, 144, 233, 377, 610, 987,
    ];

    #[test]
    fn iterative_first_sixteen() {
        for (i, &expected) in FIRST_SIXTEEN.iter().enumerate() {
            let n = i as u64 + 1;
            assert_eq!(fibonacci_iterative(n), BigUint::from(expected), "F({n})");
        }
    }

    #[test]
    fn iterative_zero() {
        assert_eq!(fibonacci_iterative(0), BigUint::ZERO);
    }

    #[test]
    fn iterative_f93_fits_u64() {
        assert_eq!(
            fibonacci_iterative(93),
            BigUint::from(12_200_160_415_121_876_738u64)
        );
    }

    #[test]
    fn recursive_first_sixteen() {
        for (i, &expected) in FIRST_SIXTEEN.iter().enumerate() {
            let n = i as u64 + 1;
            assert_eq!(fibonacci_recursive(n), BigUint::from(expected), "F({n})");
        }
    }

    #[test]
    fn recursive_matches_iterative() {
        for n in 0..=25 {
            assert_eq!(fibonacci_recursive(n), fibonacci_iterative(n), "F({n})");
        }
    }
}
