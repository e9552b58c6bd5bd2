use chrono::{Datelike, NaiveDate};

pub const ISO_FORMAT: &str = "%Y-%m-%d";

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

pub fn current_year() -> i32 {
    today().year()
}

pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), ISO_FORMAT).ok()
}

/// Parse a user supplied date. Accepts `today`, `yesterday` and `YYYY-MM-DD`.
pub fn parse_user_date(s: &str) -> Option<NaiveDate> {
    match s.trim().to_ascii_lowercase().as_str() {
        "today" => Some(today()),
        "yesterday" => today().pred_opt(),
        other => parse_date(other),
    }
}

pub fn to_iso(d: NaiveDate) -> String {
    d.format(ISO_FORMAT).to_string()
}

/// `YYYY-MM` bucket of an ISO date string, or `None` if it does not parse.
pub fn month_key(date: &str) -> Option<String> {
    parse_date(date).map(|d| d.format("%Y-%m").to_string())
}

pub fn month_last_day(y: i32, m: u32) -> Option<u32> {
    match m {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => Some(31),
        4 | 6 | 9 | 11 => Some(30),
        2 => {
            let leap = (y % 4 == 0 && y % 100 != 0) || (y % 400 == 0);
            Some(if leap { 29 } else { 28 })
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn month_key_truncates_valid_dates_only() {
        assert_eq!(month_key("2025-02-28").as_deref(), Some("2025-02"));
        assert_eq!(month_key("2025-13-01"), None);
        assert_eq!(month_key("yesterday"), None);
    }

    #[test]
    fn leap_february() {
        assert_eq!(month_last_day(2024, 2), Some(29));
        assert_eq!(month_last_day(1900, 2), Some(28));
        assert_eq!(month_last_day(2025, 13), None);
    }
}
