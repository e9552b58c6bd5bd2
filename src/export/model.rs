// src/export/model.rs

use crate::models::Entry;

/// CSV columns. The first five are the import contract; `Name` and
/// `Notes` are only written in the extended variant.
pub(crate) const CSV_HEADERS: [&str; 5] = ["Date", "Type", "Hours", "Travel", "Recorded"];
pub(crate) const CSV_EXTENDED_HEADERS: [&str; 2] = ["Name", "Notes"];

/// Columns of the `Hours` worksheet.
pub(crate) const SHEET_HEADERS: [&str; 8] = [
    "Date", "Name", "Type", "Hours", "Travel", "Total", "Recorded", "Notes",
];

pub(crate) fn csv_headers(extended: bool) -> Vec<&'static str> {
    let mut h = CSV_HEADERS.to_vec();
    if extended {
        h.extend(CSV_EXTENDED_HEADERS);
    }
    h
}

pub(crate) fn entry_to_csv_row(e: &Entry, extended: bool) -> Vec<String> {
    let mut row = vec![
        e.date.clone(),
        e.entry_type.clone(),
        e.hours.to_string(),
        e.travel_time.to_string(),
        if e.recorded { "1" } else { "0" }.to_string(),
    ];
    if extended {
        row.push(e.name.clone());
        row.push(e.notes.clone());
    }
    row
}
