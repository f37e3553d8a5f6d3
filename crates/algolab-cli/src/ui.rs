//! UI helpers for CLI display.

use console::style;

/// Check if color output is disabled via `NO_COLOR` env var.
#[must_use]
pub fn is_color_disabled() -> bool {
    std::env::var("NO_COLOR").is_ok()
}

/// Section header line, e.g. `=== Fibonacci ===`.
#[must_use]
pub fn header_line(text: &str, color: bool) -> String {
    let plain = format!("=== {text} ===");
    if color {
        style(plain).bold().cyan().to_string()
    } else {
        plain
    }
}

/// Numbered step line, e.g. `3. Linear search - O(n)`.
#[must_use]
pub fn step_line(index: usize, text: &str, color: bool) -> String {
    if color {
        format!("{} {text}", style(format!("{index}.")).bold())
    } else {
        format!("{index}. {text}")
    }
}

/// Print a styled header.
pub fn print_header(text: &str) {
    println!("\n{}", header_line(text, !is_color_disabled()));
}

/// Print a numbered step.
pub fn print_step(index: usize, text: &str) {
    println!("\n{}", step_line(index, text, !is_color_disabled()));
}

/// Print a success message.
pub fn print_success(text: &str) {
    if is_color_disabled() {
        println!("[OK] {text}");
    } else {
        println!("{} {text}", style("[OK]").green().bold());
    }
}

/// Print an error message.
pub fn print_error(text: &str) {
    if is_color_disabled() {
        eprintln!("[ERROR] {text}");
    } else {
        eprintln!("{} {text}", style("[ERROR]").red().bold());
    }
}
