//! Aggregations over the full entry set. Everything here is a pure
//! function of the slice it is given.

use crate::errors::{AppError, AppResult};
use crate::models::{Entry, MonthlyRow, Summary};
use crate::utils::date::{month_key, parse_date};
use chrono::Datelike;
use std::collections::BTreeMap;

/// Per-type totals, grand totals and the recorded/unrecorded split.
/// An empty slice yields zeroed totals.
pub fn summarize(entries: &[Entry]) -> Summary {
    let mut s = Summary::default();

    for e in entries {
        s.by_type
            .entry(e.entry_type.clone())
            .or_default()
            .add(e.hours, e.travel_time);
        s.grand.add(e.hours, e.travel_time);

        if e.recorded {
            s.recorded.add(e.hours, e.travel_time);
        } else {
            s.unrecorded.add(e.hours, e.travel_time);
        }
    }

    s.entry_count = entries.len();
    s
}

/// Monthly totals (hours + travel) and entry counts, oldest month first.
/// Fails on the first date that is not `YYYY-MM-DD`.
pub fn monthly_rollup(entries: &[Entry]) -> AppResult<Vec<MonthlyRow>> {
    let mut months: BTreeMap<String, MonthlyRow> = BTreeMap::new();

    for e in entries {
        let key = month_key(&e.date).ok_or_else(|| AppError::InvalidDate(e.date.clone()))?;
        let row = months.entry(key.clone()).or_insert_with(|| MonthlyRow {
            month: key,
            total: 0.0,
            count: 0,
        });
        row.total += e.total();
        row.count += 1;
    }

    Ok(months.into_values().collect())
}

/// Hours including travel for entries dated in `year`.
pub fn year_to_date(entries: &[Entry], year: i32) -> AppResult<f64> {
    let mut total = 0.0;
    for e in entries {
        let d = parse_date(&e.date).ok_or_else(|| AppError::InvalidDate(e.date.clone()))?;
        if d.year() == year {
            total += e.total();
        }
    }
    Ok(total)
}
