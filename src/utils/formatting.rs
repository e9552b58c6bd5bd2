//! Formatting helpers shared by the list/summary output.

pub fn bold(s: &str) -> String {
    format!("\x1b[1m{}\x1b[0m", s)
}

/// Hours with two decimals, e.g. `7.50`.
pub fn fmt_hours(h: f64) -> String {
    format!("{:.2}", h)
}

/// Decimal hours as `HHh MMm`, e.g. `7.75` → `07h 45m`.
pub fn hours2readable(h: f64) -> String {
    let mins = (h * 60.0).round() as i64;
    let sign = if mins < 0 { "-" } else { "" };
    let abs_m = mins.abs();
    format!("{}{:02}h {:02}m", sign, abs_m / 60, abs_m % 60)
}

pub fn yes_no(b: bool) -> &'static str {
    if b { "yes" } else { "no" }
}

/// Shorten `s` to `max` characters, ending with `…` when cut.
pub fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        return s.to_string();
    }
    let mut out: String = s.chars().take(max.saturating_sub(1)).collect();
    out.push('…');
    out
}
