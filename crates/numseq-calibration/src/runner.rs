//! Timing helpers.

use std::time::{Duration, Instant};

/// Run `f` once and return its result with the elapsed time.
pub fn time_once<T, F>(f: F) -> (T, Duration)
where
    F: FnOnce() -> T,
{
    let start = Instant::now();
    let value = f();
    (value, start.elapsed())
}

/// Run `f` `repetitions` times (at least once), returning the last result
/// and the fastest run.
pub fn time_min<T, F>(repetitions: u32, mut f: F) -> (T, Duration)
where
    F: FnMut() -> T,
{
    let (mut value, mut best) = time_once(&mut f);
    for _ in 1..repetitions {
        let (v, elapsed) = time_once(&mut f);
        value = v;
        best = best.min(elapsed);
    }
    (value, best)
}

/// Run a benchmark with a warmup phase, returning (median, min, max).
pub fn benchmark_detailed<F>(warmup_iters: u32, measure_iters: u32, mut f: F) -> BenchmarkResult
where
    F: FnMut(),
{
    let measure_iters = measure_iters.max(1);

    for _ in 0..warmup_iters {
        f();
    }

    let mut durations = Vec::with_capacity(measure_iters as usize);
    for _ in 0..measure_iters {
        let ((), elapsed) = time_once(&mut f);
        durations.push(elapsed);
    }

    durations.sort();
    let min = durations.first().copied().unwrap_or_default();
    let max = durations.last().copied().unwrap_or_default();
    let median = if durations.len() % 2 == 1 {
        durations[durations.len() / 2]
    } else {
        let mid = durations.len() / 2;
        (durations[mid - 1] + durations[mid]) / 2
    };
    let total: Duration = durations.iter().sum();
    let mean = total / measure_iters;

    BenchmarkResult {
        name: String::new(),
        mean,
        median,
        min,
        max,
        iterations: measure_iters,
    }
}

/// Result of a single benchmark run.
#[derive(Debug, Clone)]
pub struct BenchmarkResult {
    pub name: String,
    pub mean: Duration,
    pub median: Duration,
    pub min: Duration,
    pub max: Duration,
    pub iterations: u32,
}

impl BenchmarkResult {
    /// Create a named result.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }
}

/// Saturating conversion of a duration to whole nanoseconds.
#[must_use]
pub fn as_nanos_u64(d: Duration) -> u64 {
    u64::try_from(d.as_nanos()).unwrap_or(u64::MAX)
}
