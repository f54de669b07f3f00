//! UI helpers for CLI display.

use console::style;

/// Check if color output is disabled via `NO_COLOR` env var.
#[must_use]
pub fn is_color_disabled() -> bool {
    std::env::var("NO_COLOR").is_ok()
}

/// Render a section heading, bold when color is enabled.
#[must_use]
pub fn heading(text: &str) -> String {
    if is_color_disabled() {
        text.to_string()
    } else {
        style(text).bold().to_string()
    }
}

/// Print an error message to stderr.
pub fn print_error(text: &str) {
    if is_color_disabled() {
        eprintln!("Error: {text}");
    } else {
        eprintln!("{} {text}", style("Error:").for_stderr().red().bold());
    }
}
