//! Dispatch options.

use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_DOUBLING_THRESHOLD;

/// Options for Fibonacci dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Options {
    /// Indices at or above this value use fast doubling, below it iteration.
    pub doubling_threshold: u64,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            doubling_threshold: DEFAULT_DOUBLING_THRESHOLD,
        }
    }
}

impl Options {
    /// Create options with an explicit threshold.
    #[must_use]
    pub fn with_threshold(doubling_threshold: u64) -> Self {
        Self { doubling_threshold }
    }

    /// Normalize options, applying defaults where values are zero.
    #[must_use]
    pub fn normalize(mut self) -> Self {
        if self.doubling_threshold == 0 {
            self.doubling_threshold = DEFAULT_DOUBLING_THRESHOLD;
        }
        self
    }

    /// Whether index `n` is routed to fast doubling.
    #[must_use]
    pub fn uses_fast_doubling(&self, n: u64) -> bool {
        n >= self.doubling_threshold
    }
}
