//! Calibration profile (serializable).

use serde::{Deserialize, Serialize};

use numseq_core::constants::DEFAULT_DOUBLING_THRESHOLD;

/// Current profile format version.
pub const PROFILE_VERSION: u32 = 1;

/// Result of a calibration run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalibrationProfile {
    /// Profile format version.
    pub version: u32,
    /// Recommended dispatch threshold.
    pub doubling_threshold: u64,
    /// Whether the threshold came from measurements (false = default fallback).
    pub estimated: bool,
    /// Largest index timed.
    pub max_n: u64,
    /// Timed runs per index.
    pub repetitions: u32,
    /// Number of algorithm disagreements seen while timing.
    pub mismatches: usize,
    /// Median iterative time at the recommended threshold.
    pub iterative_at_threshold_ns: u64,
    /// Median fast doubling time at the recommended threshold.
    pub fast_doubling_at_threshold_ns: u64,
    /// CPU model used for calibration.
    pub cpu_model: String,
    /// Number of CPU cores.
    pub num_cores: usize,
    /// Calibration timestamp.
    pub timestamp: String,
}

impl Default for CalibrationProfile {
    fn default() -> Self {
        Self {
            version: PROFILE_VERSION,
            doubling_threshold: DEFAULT_DOUBLING_THRESHOLD,
            estimated: false,
            max_n: 0,
            repetitions: 0,
            mismatches: 0,
            iterative_at_threshold_ns: 0,
            fast_doubling_at_threshold_ns: 0,
            cpu_model: String::new(),
            num_cores: num_cpus(),
            timestamp: String::new(),
        }
    }
}

impl CalibrationProfile {
    /// A usable profile has a positive threshold and no disagreements.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.doubling_threshold > 0 && self.mismatches == 0
    }
}

fn num_cpus() -> usize {
    std::thread::available_parallelism()
        .map(std::num::NonZero::get)
        .unwrap_or(1)
}

/// Get the current CPU model string.
#[must_use]
pub fn cpu_model() -> String {
    use sysinfo::System;
    let sys = System::new_all();
    sys.cpus()
        .first()
        .map(|cpu| cpu.brand().to_string())
        .unwrap_or_default()
}

/// Number of logical cores.
#[must_use]
pub fn num_cores() -> usize {
    num_cpus()
}

/// Get the current timestamp as seconds since the Unix epoch.
#[must_use]
pub fn current_timestamp() -> String {
    let dur = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap_or_default();
    format!("unix:{}", dur.as_secs())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn profile_serialization() {
        let profile = CalibrationProfile::default();
        let json = serde_json::to_string_pretty(&profile).unwrap();
        let deserialized: CalibrationProfile = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized.doubling_threshold, profile.doubling_threshold);
        assert_eq!(deserialized.version, PROFILE_VERSION);
    }

    #[test]
    fn profile_validation() {
        let profile = CalibrationProfile::default();
        assert!(profile.is_valid());

        let bad = CalibrationProfile {
            mismatches: 2,
            ..CalibrationProfile::default()
        };
        assert!(!bad.is_valid());

        let zero = CalibrationProfile {
            doubling_threshold: 0,
            ..CalibrationProfile::default()
        };
        assert!(!zero.is_valid());
    }

    #[test]
    fn current_timestamp_nonempty() {
        let ts = current_timestamp();
        assert!(ts.starts_with("unix:"));
    }
}
