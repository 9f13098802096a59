#![no_main]

use libfuzzer_sys::fuzz_target;

use numseq_core::{
    fibonacci_fast_doubling, fibonacci_iterative, fibonacci_with_options, NumError, Options,
};

fuzz_target!(|data: &[u8]| {
    if data.len() < 6 {
        return;
    }
    // First 4 bytes pick n (capped for speed), next 2 the threshold
    let raw = i32::from_le_bytes([data[0], data[1], data[2], data[3]]);
    let threshold = u64::from(u16::from_le_bytes([data[4], data[5]]));
    let opts = Options::with_threshold(threshold).normalize();

    let n = i64::from(raw % 5_000);
    if n <= 0 {
        assert_eq!(
            fibonacci_with_options(n, &opts),
            Err(NumError::NonPositiveIndex(n))
        );
        return;
    }

    let index = n.unsigned_abs();
    let fast = fibonacci_fast_doubling(index);
    assert_eq!(fibonacci_iterative(index), fast, "Iterative != FastDoubling at n={n}");
    assert_eq!(
        fibonacci_with_options(n, &opts).ok(),
        Some(fast),
        "dispatch mismatch at n={n}, threshold={threshold}"
    );
});
