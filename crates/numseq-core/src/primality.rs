//! Probable-prime test for Mersenne exponents.
//!
//! Miller-Rabin over a fixed witness set. With the first twelve primes as
//! witnesses the test has no false positives below 3.3 * 10^24, so it is
//! exact for every `u64`.

const WITNESSES: [u64; 12] = [2, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37];

/// Whether `n` is prime.
///
/// # Example
/// ```
/// use numseq_core::primality::is_probable_prime;
/// assert!(is_probable_prime(13));
/// assert!(!is_probable_prime(15));
/// ```
#[must_use]
pub fn is_probable_prime(n: u64) -> bool {
    if n < 2 {
        return false;
    }
    for &p in &WITNESSES {
        if n == p {
            return true;
        }
        if n % p == 0 {
            return false;
        }
    }

    // n - 1 = d * 2^s with d odd
    let s = (n - 1).trailing_zeros();
    let d = (n - 1) >> s;

    WITNESSES.iter().all(|&a| passes_round(n, d, s, a))
}

/// One Miller-Rabin round with witness `a`.
fn passes_round(n: u64, d: u64, s: u32, a: u64) -> bool {
    let mut x = mod_pow(a, d, n);
    if x == 1 || x == n - 1 {
        return true;
    }
    for _ in 1..s {
        x = mul_mod(x, x, n);
        if x == n - 1 {
            return true;
        }
    }
    false
}

#[allow(clippy::cast_possible_truncation)]
fn mul_mod(a: u64, b: u64, m: u64) -> u64 {
    ((u128::from(a) * u128::from(b)) % u128::from(m)) as u64
}

fn mod_pow(mut base: u64, mut exp: u64, m: u64) -> u64 {
    let mut result = 1;
    base %= m;
    while exp > 0 {
        if exp & 1 == 1 {
            result = mul_mod(result, base, m);
        }
        base = mul_mod(base, base, m);
        exp >>= 1;
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    fn trial_division(n: u64) -> bool {
        n >= 2 && (2..).take_while(|i| i * i <= n).all(|i| n % i != 0)
    }

    #[test]
    fn small_numbers_match_trial_division() {
        for n in 0..5000 {
            assert_eq!(is_probable_prime(n), trial_division(n), "n={n}");
        }
    }

    #[test]
    fn mersenne_exponents() {
        for p in [2, 3, 5, 7, 13, 17, 19, 31, 61, 89, 107, 127] {
            assert!(is_probable_prime(p), "{p} should be prime");
        }
        for c in [9, 11 * 11, 15, 21, 25] {
            assert!(!is_probable_prime(c), "{c} should be composite");
        }
    }

    #[test]
    fn strong_pseudoprimes_rejected() {
        // Strong pseudoprime to base 2
        assert!(!is_probable_prime(2047));
        // Carmichael number
        assert!(!is_probable_prime(561));
        // Largest prime below 2^64
        assert!(is_probable_prime(18_446_744_073_709_551_557));
    }

    #[test]
    fn mod_pow_basics() {
        assert_eq!(mod_pow(2, 10, 1000), 24);
        assert_eq!(mod_pow(3, 0, 7), 1);
        assert_eq!(mod_pow(u64::MAX, 2, 13), mul_mod(u64::MAX, u64::MAX, 13));
    }
}
