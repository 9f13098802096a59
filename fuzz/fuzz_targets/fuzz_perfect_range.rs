#![no_main]

use libfuzzer_sys::fuzz_target;

use numseq_core::find_perfect_in_range;

const KNOWN: [i32; 5] = [6, 28, 496, 8128, 33_550_336];

fuzz_target!(|data: &[u8]| {
    if data.len() < 8 {
        return;
    }
    let begin = i32::from_le_bytes([data[0], data[1], data[2], data[3]]);
    let end = i32::from_le_bytes([data[4], data[5], data[6], data[7]]);

    match find_perfect_in_range(begin, end) {
        Ok(found) => {
            assert!(begin <= end && end >= 1);
            let expected: Vec<i32> = KNOWN
                .into_iter()
                .filter(|p| (begin..=end).contains(p))
                .collect();
            assert_eq!(found, expected, "range [{begin}, {end}]");
        }
        Err(_) => assert!(begin > end || end < 1),
    }
});
