//! CLI output formatting.

use std::time::Duration;

use num_bigint::BigUint;

/// Format a `BigUint` for display, truncating past 100 digits unless verbose.
#[must_use]
pub fn format_result(value: &BigUint, verbose: bool) -> String {
    let s = value.to_string();
    if !verbose && s.len() > 100 {
        format!("{}...{} ({} digits)", &s[..50], &s[s.len() - 50..], s.len())
    } else {
        s
    }
}

/// Format an evaluated answer: its digits, or its size once it is too long.
#[must_use]
pub fn format_bit_summary(value: Option<&str>, bit_length: u64) -> String {
    match value {
        Some(digits) => digits.to_string(),
        None => format!("({bit_length} bits long)"),
    }
}

/// Format a duration for display.
#[must_use]
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]
pub fn format_duration(d: Duration) -> String {
    let secs = d.as_secs_f64();
    if secs < 0.001 {
        format!("{:.2}µs", secs * 1_000_000.0)
    } else if secs < 1.0 {
        format!("{:.2}ms", secs * 1000.0)
    } else if secs < 60.0 {
        format!("{secs:.3}s")
    } else {
        let mins = (secs / 60.0).floor() as u64;
        let remaining = secs - (mins as f64 * 60.0);
        format!("{mins}m{remaining:.1}s")
    }
}

/// Format a nanosecond count for display.
#[must_use]
pub fn format_nanos(ns: u64) -> String {
    format_duration(Duration::from_nanos(ns))
}

/// Format a number with thousand separators.
#[must_use]
pub fn format_number(n: u64) -> String {
    let s = n.to_string();
    let mut result = String::new();
    for (i, c) in s.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }
    result.chars().rev().collect()
}

/// Format a list of perfect numbers as `[a, b, c]`.
#[must_use]
pub fn format_list(values: &[i32]) -> String {
    let items: Vec<String> = values.iter().map(ToString::to_string).collect();
    format!("[{}]", items.join(", "))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_duration_micro() {
        let s = format_duration(Duration::from_nanos(500));
        assert!(s.contains("µs"));
    }

    #[test]
    fn format_duration_milli() {
        let s = format_duration(Duration::from_millis(42));
        assert!(s.contains("ms"));
    }

    #[test]
    fn format_duration_minutes() {
        let s = format_duration(Duration::from_secs(90));
        assert_eq!(s, "1m30.0s");
    }

    #[test]
    fn format_number_thousands() {
        assert_eq!(format_number(1_000_000), "1,000,000");
        assert_eq!(format_number(42), "42");
        assert_eq!(format_number(1234), "1,234");
    }

    #[test]
    fn format_result_short() {
        let value = BigUint::from(12345u64);
        assert_eq!(format_result(&value, false), "12345");
    }

    #[test]
    fn format_result_truncates_long_values() {
        let value = BigUint::from(10u32).pow(150);
        let s = format_result(&value, false);
        assert!(s.contains("..."));
        assert!(s.ends_with("(151 digits)"));
        assert_eq!(format_result(&value, true).len(), 151);
    }

    #[test]
    fn bit_summary() {
        assert_eq!(format_bit_summary(Some("55"), 6), "55");
        assert_eq!(format_bit_summary(None, 1041), "(1041 bits long)");
    }

    #[test]
    fn list_formatting() {
        assert_eq!(format_list(&[6, 28, 496]), "[6, 28, 496]");
        assert_eq!(format_list(&[]), "[]");
    }
}
