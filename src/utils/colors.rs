/// ANSI color helper utilities for terminal output.
pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";
pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";
pub const YELLOW: &str = "\x1b[33m";
pub const CYAN: &str = "\x1b[36m";

/// Green for recorded entries, yellow for the ones still to report.
pub fn color_for_recorded(recorded: bool) -> &'static str {
    if recorded { GREEN } else { YELLOW }
}

/// Grey out empty optional text (name / notes).
pub fn colorize_optional(value: &str) -> String {
    if value.trim().is_empty() {
        format!("{GREY}--{RESET}")
    } else {
        value.to_string()
    }
}

/// Red for negative values (possible with unvalidated imports), plain otherwise.
pub fn color_for_hours(value: f64) -> &'static str {
    if value < 0.0 { RED } else { RESET }
}
