//! Styled terminal messages.

use console::style;

/// Check if color output is disabled via `NO_COLOR` env var.
#[must_use]
pub fn is_color_disabled() -> bool {
    std::env::var_os("NO_COLOR").is_some()
}

/// `=== text ===`, bold cyan unless colors are off.
#[must_use]
pub fn header(text: &str) -> String {
    let plain = format!("=== {text} ===");
    if is_color_disabled() {
        plain
    } else {
        style(plain).bold().cyan().to_string()
    }
}

/// `[ERROR] text`, with a red tag unless colors are off.
#[must_use]
pub fn error_line(text: &str) -> String {
    if is_color_disabled() {
        format!("[ERROR] {text}")
    } else {
        format!("{} {text}", style("[ERROR]").red().bold())
    }
}

/// `[WARN] text`, with a yellow tag unless colors are off.
#[must_use]
pub fn warning_line(text: &str) -> String {
    if is_color_disabled() {
        format!("[WARN] {text}")
    } else {
        format!("{} {text}", style("[WARN]").yellow().bold())
    }
}

pub fn print_header(text: &str) {
    println!("{}", header(text));
}

pub fn print_error(text: &str) {
    eprintln!("{}", error_line(text));
}

pub fn print_warning(text: &str) {
    eprintln!("{}", warning_line(text));
}
