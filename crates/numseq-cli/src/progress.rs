//! Progress bar for long evaluations.

use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};

/// Progress bar fed by the evaluation callback.
pub struct EvaluationProgress {
    bar: ProgressBar,
}

impl EvaluationProgress {
    /// Create a bar for `total` indices. Hidden when `hidden` is set.
    #[must_use]
    pub fn new(total: u64, hidden: bool) -> Self {
        let bar = if hidden {
            ProgressBar::with_draw_target(Some(total), ProgressDrawTarget::hidden())
        } else {
            ProgressBar::new(total)
        };
        if let Ok(style) =
            ProgressStyle::with_template("{spinner} [{bar:40}] n={pos}/{len} ({eta})")
        {
            bar.set_style(style.progress_chars("=> "));
        }
        Self { bar }
    }

    /// Record that index `n` is done.
    pub fn update(&self, n: u64, total: u64) {
        if self.bar.length() != Some(total) {
            self.bar.set_length(total);
        }
        self.bar.set_position(n);
    }

    /// Remove the bar from the terminal.
    pub fn finish(&self) {
        self.bar.finish_and_clear();
    }
}
