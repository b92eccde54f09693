//! UI helpers for CLI display.

use console::style;

/// Check if color output is disabled via `NO_COLOR` env var.
#[must_use]
pub fn is_color_disabled() -> bool {
    std::env::var_os("NO_COLOR").is_some()
}

/// A styled section header.
#[must_use]
pub fn header(text: &str) -> String {
    let plain = format!("===== {text} =====");
    if is_color_disabled() {
        plain
    } else {
        style(plain).bold().cyan().to_string()
    }
}

/// A styled error message.
#[must_use]
pub fn error(text: &str) -> String {
    if is_color_disabled() {
        format!("[ERROR] {text}")
    } else {
        format!("{} {text}", style("[ERROR]").red().bold())
    }
}

/// Print an error message to stderr.
pub fn print_error(text: &str) {
    eprintln!("{}", error(text));
}
