//! Side-by-side evaluation of the Fibonacci algorithms.
//!
//! For every n in `1..=max_n` the evaluation times fast doubling and the
//! iterative loop (and optionally the recursive reference), checks the
//! results agree, and records the timings for threshold estimation.

use num_bigint::BigUint;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use numseq_core::constants::MAX_RECURSIVE_INDEX;
use numseq_core::fastdoubling::fibonacci_fast_doubling;
use numseq_core::iterative::{fibonacci_iterative, fibonacci_recursive};
use numseq_core::Algorithm;

use crate::runner::{as_nanos_u64, time_min};

/// Results with at least this many bits are summarized by bit length.
pub const ANSWER_BIT_LIMIT: u64 = 1000;

/// Upper bound on the samples reserved up front.
const PREALLOC_SAMPLES: u64 = 4096;

/// What to evaluate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvaluationConfig {
    /// Largest index evaluated.
    pub max_n: u64,
    /// Timed runs per algorithm and index; the fastest is kept.
    pub repetitions: u32,
    /// Also time the recursive reference (only up to `MAX_RECURSIVE_INDEX`).
    pub include_recursive: bool,
}

impl Default for EvaluationConfig {
    fn default() -> Self {
        Self {
            max_n: 450,
            repetitions: 1,
            include_recursive: false,
        }
    }
}

/// Timings for one index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sample {
    pub n: u64,
    pub fast_doubling_ns: u64,
    pub iterative_ns: u64,
    pub recursive_ns: Option<u64>,
    pub bit_length: u64,
    /// Decimal value of F(n), omitted at `ANSWER_BIT_LIMIT` bits and above.
    pub value: Option<String>,
}

impl Sample {
    /// Whether fast doubling was at least as fast as iteration.
    #[must_use]
    pub fn fast_doubling_wins(&self) -> bool {
        self.fast_doubling_ns <= self.iterative_ns
    }
}

/// An index where an algorithm disagreed with fast doubling.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Mismatch {
    pub n: u64,
    pub algorithm: Algorithm,
}

/// Summed timings over the whole evaluation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Totals {
    pub fast_doubling_ns: u64,
    pub iterative_ns: u64,
    pub recursive_ns: Option<u64>,
}

/// Output of [`evaluate`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EvaluationReport {
    pub config: EvaluationConfig,
    pub samples: Vec<Sample>,
    pub totals: Totals,
    pub mismatches: Vec<Mismatch>,
}

impl EvaluationReport {
    /// Whether every algorithm agreed at every index.
    #[must_use]
    pub fn is_consistent(&self) -> bool {
        self.mismatches.is_empty()
    }
}

/// Evaluate the algorithms for every n in `1..=config.max_n`.
///
/// `on_progress` is called after each index with `(n, max_n)`.
pub fn evaluate<P>(config: &EvaluationConfig, mut on_progress: P) -> EvaluationReport
where
    P: FnMut(u64, u64),
{
    let reps = config.repetitions;
    let reserve = usize::try_from(config.max_n.min(PREALLOC_SAMPLES)).unwrap_or(0);
    let mut samples = Vec::with_capacity(reserve);
    let mut totals = Totals::default();
    let mut mismatches = Vec::new();

    for n in 1..=config.max_n {
        let (fast, fast_time) = time_min(reps, || fibonacci_fast_doubling(n));
        let (iter, iter_time) = time_min(reps, || fibonacci_iterative(n));

        if fast != iter {
            warn!(n, "iterative result differs from fast doubling");
            mismatches.push(Mismatch {
                n,
                algorithm: Algorithm::Iterative,
            });
        }

        let recursive_ns = if config.include_recursive && n <= MAX_RECURSIVE_INDEX {
            let (rec, rec_time) = time_min(reps, || fibonacci_recursive(n));
            if rec != fast {
                warn!(n, "recursive result differs from fast doubling");
                mismatches.push(Mismatch {
                    n,
                    algorithm: Algorithm::Recursive,
                });
            }
            Some(as_nanos_u64(rec_time))
        } else {
            None
        };

        let sample = Sample {
            n,
            fast_doubling_ns: as_nanos_u64(fast_time),
            iterative_ns: as_nanos_u64(iter_time),
            recursive_ns,
            bit_length: fast.bits(),
            value: short_value(&fast),
        };

        totals.fast_doubling_ns = totals.fast_doubling_ns.saturating_add(sample.fast_doubling_ns);
        totals.iterative_ns = totals.iterative_ns.saturating_add(sample.iterative_ns);
        if let Some(ns) = sample.recursive_ns {
            totals.recursive_ns = Some(totals.recursive_ns.unwrap_or(0).saturating_add(ns));
        }

        samples.push(sample);
        on_progress(n, config.max_n);
    }

    debug!(
        max_n = config.max_n,
        mismatches = mismatches.len(),
        fast_doubling_ns = totals.fast_doubling_ns,
        iterative_ns = totals.iterative_ns,
        "evaluation finished"
    );

    EvaluationReport {
        config: *config,
        samples,
        totals,
        mismatches,
    }
}

fn short_value(value: &BigUint) -> Option<String> {
    (value.bits() < ANSWER_BIT_LIMIT).then(|| value.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn evaluate_small_range() {
        let config = EvaluationConfig {
            max_n: 50,
            repetitions: 2,
            include_recursive: false,
        };
        let report = evaluate(&config, |_, _| {});
        assert_eq!(report.samples.len(), 50);
        assert!(report.is_consistent());
        assert_eq!(report.samples[0].n, 1);
        assert_eq!(report.samples[9].value.as_deref(), Some("55"));
        assert!(report.samples.iter().all(|s| s.recursive_ns.is_none()));
        assert_eq!(report.totals.recursive_ns, None);
    }

    #[test]
    fn recursive_only_up_to_limit() {
        let config = EvaluationConfig {
            max_n: MAX_RECURSIVE_INDEX + 5,
            repetitions: 1,
            include_recursive: true,
        };
        let report = evaluate(&config, |_, _| {});
        assert!(report.is_consistent());
        for s in &report.samples {
            assert_eq!(s.recursive_ns.is_some(), s.n <= MAX_RECURSIVE_INDEX, "n={}", s.n);
        }
        assert!(report.totals.recursive_ns.is_some());
    }

    #[test]
    fn large_values_are_summarized() {
        let config = EvaluationConfig {
            max_n: 1500,
            ..EvaluationConfig::default()
        };
        let report = evaluate(&config, |_, _| {});
        let last = report.samples.last().unwrap();
        assert!(last.bit_length >= ANSWER_BIT_LIMIT);
        assert!(last.value.is_none());
        assert!(report.samples[99].value.is_some());
    }

    #[test]
    fn progress_reported_per_index() {
        let mut seen = Vec::new();
        let config = EvaluationConfig {
            max_n: 10,
            ..EvaluationConfig::default()
        };
        evaluate(&config, |n, max| seen.push((n, max)));
        assert_eq!(seen.len(), 10);
        assert_eq!(seen.last(), Some(&(10, 10)));
    }

    #[test]
    fn zero_max_n_is_empty() {
        let config = EvaluationConfig {
            max_n: 0,
            ..EvaluationConfig::default()
        };
        let report = evaluate(&config, |_, _| {});
        assert!(report.samples.is_empty());
        assert_eq!(report.totals, Totals::default());
    }

    #[test]
    fn huge_max_n_starts_without_reserving() {
        let config = EvaluationConfig {
            max_n: u64::MAX,
            ..EvaluationConfig::default()
        };
        let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            evaluate(&config, |n, _| {
                if n == 3 {
                    panic!("reached n=3");
                }
            })
        }));
        let payload = result.expect_err("evaluation should have been stopped");
        assert_eq!(payload.downcast_ref::<&str>(), Some(&"reached n=3"));
    }

    #[test]
    fn sample_win_comparison() {
        let sample = Sample {
            n: 500,
            fast_doubling_ns: 10,
            iterative_ns: 20,
            recursive_ns: None,
            bit_length: 347,
            value: None,
        };
        assert!(sample.fast_doubling_wins());
    }
}
