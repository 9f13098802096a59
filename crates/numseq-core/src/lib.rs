//! # numseq-core
//!
//! Core library for numseq: the Fibonacci engine and the perfect-number finder.
//!
//! The engine computes F(n) with either an O(n) iterative loop or O(log n)
//! fast doubling, picking between them with a threshold on n. Each algorithm
//! is also public on its own so benchmarks can time them side by side.

pub mod algorithm;
pub mod constants;
pub mod dispatch;
pub mod error;
pub mod fastdoubling;
pub mod iterative;
pub mod options;
pub mod perfect;
pub mod primality;

// Re-exports
pub use algorithm::Algorithm;
pub use constants::{exit_codes, DEFAULT_DOUBLING_THRESHOLD, MAX_RECURSIVE_INDEX};
pub use dispatch::{fibonacci, fibonacci_with_options};
pub use error::NumError;
pub use fastdoubling::fibonacci_fast_doubling;
pub use iterative::{fibonacci_iterative, fibonacci_recursive};
pub use options::Options;
pub use perfect::{find_perfect_in_range, is_perfect};
