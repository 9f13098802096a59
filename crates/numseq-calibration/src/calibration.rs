//! Calibration engine.

use std::hint::black_box;

use tracing::{info, warn};

use numseq_core::constants::DEFAULT_DOUBLING_THRESHOLD;
use numseq_core::fastdoubling::fibonacci_fast_doubling;
use numseq_core::iterative::fibonacci_iterative;

use crate::evaluation::{evaluate, EvaluationConfig};
use crate::profile::{self, CalibrationProfile};
use crate::runner::{as_nanos_u64, benchmark_detailed};
use crate::threshold::estimate_threshold;

/// Mode of calibration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CalibrationMode {
    /// Time every index up to 1000, five runs each.
    Full,
    /// Time every index up to 600, one run each.
    Quick,
}

impl CalibrationMode {
    /// Evaluation settings for this mode.
    #[must_use]
    pub fn evaluation_config(self) -> EvaluationConfig {
        match self {
            CalibrationMode::Full => EvaluationConfig {
                max_n: 1000,
                repetitions: 5,
                include_recursive: false,
            },
            CalibrationMode::Quick => EvaluationConfig {
                max_n: 600,
                repetitions: 1,
                include_recursive: false,
            },
        }
    }

    /// Fraction of wins required after the crossover.
    #[must_use]
    pub fn dominance(self) -> f64 {
        match self {
            CalibrationMode::Full => 0.9,
            CalibrationMode::Quick => 0.8,
        }
    }
}

/// Progress callback for calibration.
pub type ProgressCallback = Box<dyn Fn(CalibrationProgress) + Send>;

/// Progress information during calibration.
#[derive(Debug, Clone)]
pub struct CalibrationProgress {
    /// Current step name.
    pub step: String,
    /// Current step number (1-based).
    pub current: usize,
    /// Total number of steps.
    pub total: usize,
}

/// Calibration engine that re-derives the dispatch threshold.
pub struct CalibrationEngine {
    mode: CalibrationMode,
    progress_cb: Option<ProgressCallback>,
}

impl CalibrationEngine {
    /// Create a new calibration engine.
    #[must_use]
    pub fn new(mode: CalibrationMode) -> Self {
        Self {
            mode,
            progress_cb: None,
        }
    }

    /// Set a progress callback.
    #[must_use]
    pub fn with_progress(mut self, cb: ProgressCallback) -> Self {
        self.progress_cb = Some(cb);
        self
    }

    fn report_progress(&self, step: &str, current: usize, total: usize) {
        if let Some(cb) = &self.progress_cb {
            cb(CalibrationProgress {
                step: step.to_string(),
                current,
                total,
            });
        }
    }

    /// Run calibration and produce a profile.
    #[must_use]
    pub fn calibrate(&self) -> CalibrationProfile {
        let total_steps = 3;
        let config = self.mode.evaluation_config();

        // Step 1: time both algorithms at every index
        self.report_progress("Timing iterative and fast doubling", 1, total_steps);
        let report = evaluate(&config, |_, _| {});
        if !report.is_consistent() {
            warn!(
                mismatches = report.mismatches.len(),
                "algorithms disagreed during calibration"
            );
        }

        // Step 2: find the crossover
        self.report_progress("Estimating crossover threshold", 2, total_steps);
        let estimate = estimate_threshold(&report.samples, self.mode.dominance());
        let doubling_threshold = estimate.unwrap_or_else(|| {
            warn!(
                max_n = config.max_n,
                "no crossover found, keeping default threshold"
            );
            DEFAULT_DOUBLING_THRESHOLD
        });

        // Step 3: confirm timings at the chosen threshold
        self.report_progress("Measuring at threshold", 3, total_steps);
        let reps = config.repetitions.max(3);
        let iterative = benchmark_detailed(1, reps, || {
            black_box(fibonacci_iterative(black_box(doubling_threshold)));
        })
        .with_name("iterative");
        let fast = benchmark_detailed(1, reps, || {
            black_box(fibonacci_fast_doubling(black_box(doubling_threshold)));
        })
        .with_name("fast_doubling");

        info!(
            doubling_threshold,
            estimated = estimate.is_some(),
            "calibration complete"
        );

        CalibrationProfile {
            version: profile::PROFILE_VERSION,
            doubling_threshold,
            estimated: estimate.is_some(),
            max_n: config.max_n,
            repetitions: config.repetitions,
            mismatches: report.mismatches.len(),
            iterative_at_threshold_ns: as_nanos_u64(iterative.median),
            fast_doubling_at_threshold_ns: as_nanos_u64(fast.median),
            cpu_model: profile::cpu_model(),
            num_cores: profile::num_cores(),
            timestamp: profile::current_timestamp(),
        }
    }
}
