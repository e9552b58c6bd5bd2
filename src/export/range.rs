// src/export/range.rs

use crate::errors::{AppError, AppResult};
use crate::utils::date::{ISO_FORMAT, month_last_day, to_iso};
use chrono::NaiveDate;

/// Inclusive date interval used by `--period` / `--range`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    /// True when the ISO date string falls within the range.
    /// Unparsable dates never match.
    pub fn contains(&self, iso_date: &str) -> bool {
        NaiveDate::parse_from_str(iso_date.trim(), ISO_FORMAT)
            .map(|d| d >= self.start && d <= self.end)
            .unwrap_or(false)
    }

    pub fn describe(&self) -> String {
        if self.start == self.end {
            to_iso(self.start)
        } else {
            format!("{} → {}", to_iso(self.start), to_iso(self.end))
        }
    }
}

fn bad(msg: &str, input: &str) -> AppError {
    AppError::InvalidRange(format!("{msg}: '{input}'"))
}

/// First and last day covered by a single `YYYY`, `YYYY-MM` or `YYYY-MM-DD`.
fn bounds(part: &str) -> AppResult<(NaiveDate, NaiveDate)> {
    match part.len() {
        4 => {
            let y: i32 = part.parse().map_err(|_| bad("invalid year", part))?;
            let d1 = NaiveDate::from_ymd_opt(y, 1, 1).ok_or_else(|| bad("invalid year", part))?;
            let d2 = NaiveDate::from_ymd_opt(y, 12, 31).ok_or_else(|| bad("invalid year", part))?;
            Ok((d1, d2))
        }
        7 => {
            let (ys, ms) = part.split_once('-').ok_or_else(|| bad("invalid month", part))?;
            let y: i32 = ys.parse().map_err(|_| bad("invalid year", part))?;
            let m: u32 = ms.parse().map_err(|_| bad("invalid month", part))?;
            let last = month_last_day(y, m).ok_or_else(|| bad("invalid month", part))?;
            let d1 = NaiveDate::from_ymd_opt(y, m, 1).ok_or_else(|| bad("invalid month", part))?;
            let d2 =
                NaiveDate::from_ymd_opt(y, m, last).ok_or_else(|| bad("invalid month", part))?;
            Ok((d1, d2))
        }
        10 => {
            let d = NaiveDate::parse_from_str(part, ISO_FORMAT)
                .map_err(|_| bad("invalid date", part))?;
            Ok((d, d))
        }
        _ => Err(bad("unsupported range format", part)),
    }
}

/// Parse a range expression:
/// - `YYYY`, `YYYY-MM`, `YYYY-MM-DD`
/// - `start:end` where both sides use the same one of those shapes
pub fn parse_range(r: &str) -> AppResult<DateRange> {
    let r = r.trim();

    let (start, end) = match r.split_once(':') {
        Some((s, e)) => {
            let (s, e) = (s.trim(), e.trim());
            if s.len() != e.len() {
                return Err(bad("start and end must have the same format", r));
            }
            (bounds(s)?.0, bounds(e)?.1)
        }
        None => bounds(r)?,
    };

    if start > end {
        return Err(bad("start is after end", r));
    }

    Ok(DateRange { start, end })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, ISO_FORMAT).unwrap()
    }

    #[test]
    fn single_shapes() {
        assert_eq!(
            parse_range("2024").unwrap(),
            DateRange { start: d("2024-01-01"), end: d("2024-12-31") }
        );
        assert_eq!(parse_range("2024-02").unwrap().end, d("2024-02-29"));
        assert_eq!(parse_range("2024-02-10").unwrap().start, d("2024-02-10"));
    }

    #[test]
    fn intervals() {
        let r = parse_range("2024-11:2025-01").unwrap();
        assert_eq!(r.start, d("2024-11-01"));
        assert_eq!(r.end, d("2025-01-31"));
        assert!(r.contains("2024-12-24"));
        assert!(!r.contains("2025-02-01"));
        assert!(!r.contains("garbage"));
    }

    #[test]
    fn rejects_malformed() {
        assert!(parse_range("2024:2024-05").is_err());
        assert!(parse_range("2024-13").is_err());
        assert!(parse_range("2025:2024").is_err());
        assert!(parse_range("last week").is_err());
    }
}
