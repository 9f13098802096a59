//! UI helpers for CLI display.

use console::style;

/// Check if color output is disabled via `NO_COLOR` env var.
#[must_use]
pub fn is_color_disabled() -> bool {
    std::env::var_os("NO_COLOR").is_some()
}

/// Render a header line.
#[must_use]
pub fn header(text: &str) -> String {
    let plain = format!("=== {text} ===");
    if is_color_disabled() {
        plain
    } else {
        style(plain).bold().cyan().to_string()
    }
}

/// Render a status tag such as `[OK]`.
#[must_use]
pub fn tag(label: &str, ok: bool) -> String {
    let plain = format!("[{label}]");
    if is_color_disabled() {
        plain
    } else if ok {
        style(plain).green().bold().to_string()
    } else {
        style(plain).red().bold().to_string()
    }
}

/// Print a styled header.
pub fn print_header(text: &str) {
    println!("{}", header(text));
}

/// Print a success message.
pub fn print_success(text: &str) {
    println!("{} {text}", tag("OK", true));
}

/// Print a warning message to stderr.
pub fn print_warning(text: &str) {
    if is_color_disabled() {
        eprintln!("[WARN] {text}");
    } else {
        eprintln!("{} {text}", style("[WARN]").yellow().bold());
    }
}

/// Print an error message to stderr.
pub fn print_error(text: &str) {
    eprintln!("{} {text}", tag("ERROR", false));
}
