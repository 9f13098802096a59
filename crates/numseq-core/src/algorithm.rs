//! Algorithm selection by name.
//!
//! Lets callers (the CLI, the evaluation harness) pick a specific algorithm
//! instead of going through the threshold dispatcher.

use std::fmt;
use std::str::FromStr;

use num_bigint::BigUint;
use serde::{Deserialize, Serialize};

use crate::constants::MAX_RECURSIVE_INDEX;
use crate::dispatch::{fibonacci_with_options, validate_index};
use crate::error::NumError;
use crate::fastdoubling::fibonacci_fast_doubling;
use crate::iterative::{fibonacci_iterative, fibonacci_recursive};
use crate::options::Options;

/// A Fibonacci algorithm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Algorithm {
    /// Threshold dispatch between `Iterative` and `FastDoubling`.
    Auto,
    /// O(n) additions.
    Iterative,
    /// O(log n) multiplications.
    FastDoubling,
    /// Exponential reference recursion.
    Recursive,
}

impl Algorithm {
    /// Every algorithm, dispatcher first.
    pub const ALL: [Algorithm; 4] = [
        Algorithm::Auto,
        Algorithm::Iterative,
        Algorithm::FastDoubling,
        Algorithm::Recursive,
    ];

    /// Display name.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Algorithm::Auto => "Auto",
            Algorithm::Iterative => "Iterative",
            Algorithm::FastDoubling => "FastDoubling",
            Algorithm::Recursive => "Recursive",
        }
    }

    /// The algorithm that actually runs for index `n`.
    ///
    /// `Auto` resolves through the threshold in `opts`; the others are fixed.
    #[must_use]
    pub fn resolve(self, n: u64, opts: &Options) -> Algorithm {
        match self {
            Algorithm::Auto if opts.uses_fast_doubling(n) => Algorithm::FastDoubling,
            Algorithm::Auto => Algorithm::Iterative,
            other => other,
        }
    }

    /// Validate `n` and compute F(n) with this algorithm.
    pub fn compute(self, n: i64, opts: &Options) -> Result<BigUint, NumError> {
        match self {
            Algorithm::Auto => fibonacci_with_options(n, opts),
            Algorithm::Iterative => validate_index(n).map(fibonacci_iterative),
            Algorithm::FastDoubling => validate_index(n).map(fibonacci_fast_doubling),
            Algorithm::Recursive => {
                let n = validate_index(n)?;
                if n > MAX_RECURSIVE_INDEX {
                    return Err(NumError::Config(format!(
                        "recursive algorithm is limited to n <= {MAX_RECURSIVE_INDEX}, got {n}"
                    )));
                }
                Ok(fibonacci_recursive(n))
            }
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = NumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "auto" => Ok(Algorithm::Auto),
            "iter" | "iterative" => Ok(Algorithm::Iterative),
            "fast" | "doubling" | "fastdoubling" => Ok(Algorithm::FastDoubling),
            "rec" | "recursive" => Ok(Algorithm::Recursive),
            other => Err(NumError::Config(format!("unknown algorithm: {other}"))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_names() {
        assert_eq!("auto".parse::<Algorithm>().unwrap(), Algorithm::Auto);
        assert_eq!("iter".parse::<Algorithm>().unwrap(), Algorithm::Iterative);
        assert_eq!("Fast".parse::<Algorithm>().unwrap(), Algorithm::FastDoubling);
        assert_eq!(" rec ".parse::<Algorithm>().unwrap(), Algorithm::Recursive);
        assert!(matches!(
            "matrix".parse::<Algorithm>(),
            Err(NumError::Config(_))
        ));
    }

    #[test]
    fn display_round_trips_through_from_str() {
        for algo in Algorithm::ALL {
            assert_eq!(algo.to_string().parse::<Algorithm>().unwrap(), algo);
        }
    }

    #[test]
    fn all_algorithms_agree_on_small_n() {
        let opts = Options::default();
        for n in 1..=20 {
            let expected = Algorithm::Iterative.compute(n, &opts).unwrap();
            for algo in Algorithm::ALL {
                assert_eq!(algo.compute(n, &opts).unwrap(), expected, "{algo} F({n})");
            }
        }
    }

    #[test]
    fn every_algorithm_rejects_non_positive() {
        let opts = Options::default();
        for algo in Algorithm::ALL {
            assert_eq!(algo.compute(0, &opts), Err(NumError::NonPositiveIndex(0)));
            assert_eq!(algo.compute(-5, &opts), Err(NumError::NonPositiveIndex(-5)));
        }
    }

    #[test]
    fn auto_resolves_through_threshold() {
        let opts = Options::default();
        assert_eq!(Algorithm::Auto.resolve(439, &opts), Algorithm::Iterative);
        assert_eq!(Algorithm::Auto.resolve(440, &opts), Algorithm::FastDoubling);
        assert_eq!(
            Algorithm::Auto.resolve(10, &Options::with_threshold(1)),
            Algorithm::FastDoubling
        );
        assert_eq!(Algorithm::Recursive.resolve(10_000, &opts), Algorithm::Recursive);
        assert_eq!(Algorithm::Iterative.resolve(10_000, &opts), Algorithm::Iterative);
    }

    #[test]
    fn recursive_rejects_large_n() {
        let opts = Options::default();
        let result = Algorithm::Recursive.compute(31, &opts);
        assert!(matches!(result, Err(NumError::Config(_))));
    }
}
