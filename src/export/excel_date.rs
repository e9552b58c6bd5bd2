// src/export/excel_date.rs

use crate::utils::date::parse_date;
use chrono::NaiveDate;

/// Excel serial day number (1900 date system) for an ISO date string.
pub(crate) fn iso_to_excel_serial(s: &str) -> Option<f64> {
    let d = parse_date(s)?;
    let epoch = NaiveDate::from_ymd_opt(1899, 12, 30)?;
    Some((d - epoch).num_days() as f64)
}
