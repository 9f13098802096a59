//! # numseq-calibration
//!
//! Times the iterative and fast doubling algorithms side by side, checks that
//! they agree, and estimates where fast doubling starts to win.

pub mod calibration;
pub mod evaluation;
pub mod profile;
pub mod runner;
pub mod threshold;

pub use calibration::{CalibrationEngine, CalibrationMode};
pub use evaluation::{evaluate, EvaluationConfig, EvaluationReport};
pub use profile::CalibrationProfile;
