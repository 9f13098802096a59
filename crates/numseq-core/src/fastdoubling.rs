//! Fast Doubling algorithm for Fibonacci computation.
//!
//! Uses the doubling identities:
//!   F(2k)   = F(k) * (2*F(k+1) - F(k))
//!   F(2k+1) = F(k+1)^2 + F(k)^2
//!
//! Iterates over the bits of n from MSB to LSB, O(log n) multiplications.

use num_bigint::BigUint;
use num_traits::One;

/// Compute F(n) with fast doubling. F(0) = 0.
///
/// Callable on its own so timing harnesses can bypass the dispatcher.
///
/// # Example
/// ```
/// use numseq_core::fastdoubling::fibonacci_fast_doubling;
/// assert_eq!(fibonacci_fast_doubling(100).to_string(), "354224848179261915075");
/// ```
#[must_use]
pub fn fibonacci_fast_doubling(n: u64) -> BigUint {
    let num_bits = 64 - n.leading_zeros();

    // (fk, fk1) = (F(k), F(k+1)), starting at k = 0
    let mut fk = BigUint::ZERO;
    let mut fk1 = BigUint::one();
    let mut t = BigUint::ZERO;

    for i in (0..num_bits).rev() {
        // t = (fk1 << 1) - fk, never negative since F(k+1) >= F(k)
        t.clone_from(&fk1);
        t <<= 1;
        t -= &fk;

        let f2k = &fk * &t;
        let f2k1 = &fk * &fk + &fk1 * &fk1;
        fk = f2k;
        fk1 = f2k1;

        if (n >> i) & 1 == 1 {
            // (F(2k), F(2k+1)) -> (F(2k+1), F(2k+2))
            std::mem::swap(&mut fk, &mut fk1);
            fk1 += &fk;
        }
    }

    fk
}
