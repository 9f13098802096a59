//! Crossover estimation from evaluation samples.

use crate::evaluation::Sample;

/// Shortest tail of samples a crossover is allowed to rest on.
pub const MIN_TAIL: usize = 8;

/// Smallest n from which fast doubling wins in at least `dominance` of the
/// remaining samples.
///
/// Single-run timings are noisy near the crossover, so the tail is allowed
/// to contain a few losses. Returns `None` when no tail of at least
/// [`MIN_TAIL`] samples qualifies.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn estimate_threshold(samples: &[Sample], dominance: f64) -> Option<u64> {
    let dominance = dominance.clamp(0.0, 1.0);

    // wins[i] = number of fast doubling wins in samples[i..]
    let mut wins = vec![0usize; samples.len() + 1];
    for (i, sample) in samples.iter().enumerate().rev() {
        wins[i] = wins[i + 1] + usize::from(sample.fast_doubling_wins());
    }

    (0..samples.len())
        .take_while(|&i| samples.len() - i >= MIN_TAIL)
        .find(|&i| wins[i] as f64 >= dominance * (samples.len() - i) as f64)
        .map(|i| samples[i].n)
}
