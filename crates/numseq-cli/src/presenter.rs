//! CLI result presenter.

use std::time::Duration;

use num_bigint::BigUint;

use numseq_calibration::evaluation::EvaluationReport;
use numseq_calibration::CalibrationProfile;

use crate::output::{
    format_bit_summary, format_duration, format_list, format_nanos, format_number, format_result,
};
use crate::ui::{print_error, print_header, print_success, print_warning};

/// CLI result presenter.
pub struct CliPresenter {
    verbose: bool,
    quiet: bool,
}

impl CliPresenter {
    #[must_use]
    pub fn new(verbose: bool, quiet: bool) -> Self {
        Self { verbose, quiet }
    }

    /// Present F(n).
    pub fn present_fibonacci(&self, algorithm: &str, n: u64, value: &BigUint, duration: Duration) {
        if self.quiet {
            println!("{value}");
            return;
        }

        println!("Algorithm: {algorithm}");
        println!("N: {}", format_number(n));
        println!("Duration: {}", format_duration(duration));

        if self.verbose {
            println!("Result bits: {}", value.bits());
            println!("Result digits: {}", value.to_string().len());
        }

        println!(
            "F({}) = {}",
            format_number(n),
            format_result(value, self.verbose)
        );
    }

    /// Present the perfect numbers found in `[begin, end]`.
    pub fn present_perfect(&self, begin: i32, end: i32, found: &[i32], duration: Duration) {
        if self.quiet {
            println!("{}", format_list(found));
            return;
        }

        println!("Range: [{begin}, {end}]");
        println!("Duration: {}", format_duration(duration));
        println!("Perfect numbers: {}", format_list(found));
    }

    /// Present whether a single number is perfect.
    pub fn present_is_perfect(&self, number: i32, perfect: bool) {
        if self.quiet {
            println!("{perfect}");
        } else {
            println!("{number} is perfect: {perfect}");
        }
    }

    /// Present an evaluation: per-index lines when verbose, then totals.
    pub fn present_evaluation(&self, report: &EvaluationReport) {
        if self.quiet {
            return;
        }

        if self.verbose {
            for s in &report.samples {
                println!("Input: {}", s.n);
                println!("  Fast doubling: {}", format_nanos(s.fast_doubling_ns));
                println!("  Iterative: {}", format_nanos(s.iterative_ns));
                if let Some(ns) = s.recursive_ns {
                    println!("  Recursive: {}", format_nanos(ns));
                }
                println!(
                    "  Answer: {}",
                    format_bit_summary(s.value.as_deref(), s.bit_length)
                );
            }
            println!();
        }

        print_header("Overall time");
        println!(
            "  {:<16} {:>12}",
            "FastDoubling",
            format_nanos(report.totals.fast_doubling_ns)
        );
        println!(
            "  {:<16} {:>12}",
            "Iterative",
            format_nanos(report.totals.iterative_ns)
        );
        if let Some(ns) = report.totals.recursive_ns {
            println!("  {:<16} {:>12}", "Recursive", format_nanos(ns));
        }

        if report.is_consistent() {
            print_success("all results agree");
        } else {
            for m in &report.mismatches {
                print_error(&format!("{} disagrees with FastDoubling at n={}", m.algorithm, m.n));
            }
        }
    }

    /// Present a calibration profile.
    pub fn present_calibration(&self, profile: &CalibrationProfile) {
        if self.quiet {
            println!("{}", profile.doubling_threshold);
            return;
        }

        println!("Calibration complete:");
        let source = if profile.estimated {
            "measured"
        } else {
            "default"
        };
        println!(
            "  Doubling threshold: {} ({source})",
            profile.doubling_threshold
        );
        println!(
            "  At threshold: iterative {}, fast doubling {}",
            format_nanos(profile.iterative_at_threshold_ns),
            format_nanos(profile.fast_doubling_at_threshold_ns)
        );
        if !profile.estimated {
            print_warning(&format!(
                "no crossover found up to n={}, kept the default threshold",
                profile.max_n
            ));
        }
        if self.verbose {
            println!("  Indices timed: 1..={}", profile.max_n);
            println!("  Repetitions: {}", profile.repetitions);
            println!("  CPU: {} ({} cores)", profile.cpu_model, profile.num_cores);
        }
    }

    /// Present an error.
    pub fn present_error(&self, error: &str) {
        print_error(error);
    }
}
