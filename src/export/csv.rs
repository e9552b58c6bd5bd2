// src/export/csv.rs

use crate::errors::{AppError, AppResult};
use crate::export::model::{csv_headers, entry_to_csv_row};
use crate::models::{Entry, NewEntry};
use crate::utils::date::{parse_date, to_iso};
use csv::{ReaderBuilder, StringRecord, Trim, WriterBuilder};
use std::fs;
use std::io::Read;
use std::path::Path;

/// Rows read from a CSV file, ready to be inserted.
#[derive(Debug, Default)]
pub struct ImportBatch {
    pub entries: Vec<NewEntry>,
    /// Data rows ignored because they had fewer than four columns.
    pub skipped: usize,
}

/// Render entries as CSV bytes (header included).
pub(crate) fn render_csv(entries: &[Entry], extended: bool) -> AppResult<Vec<u8>> {
    let mut wtr = WriterBuilder::new().flexible(false).from_writer(Vec::new());

    wtr.write_record(csv_headers(extended))?;
    for e in entries {
        wtr.write_record(entry_to_csv_row(e, extended))?;
    }

    wtr.into_inner()
        .map_err(|e| AppError::Export(format!("CSV flush error: {e}")))
}

/// Write the CSV file in one go, after the whole document has been rendered.
pub fn write_csv(entries: &[Entry], path: &Path, extended: bool) -> AppResult<()> {
    let bytes = render_csv(entries, extended)?;
    fs::write(path, bytes)?;
    Ok(())
}

fn parse_number(rec: &StringRecord, idx: usize, field: &str, line: u64) -> AppResult<f64> {
    let raw = rec.get(idx).unwrap_or("");
    if raw.is_empty() && field == "travel" {
        return Ok(0.0);
    }

    match raw.replace(',', ".").parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(v),
        _ => Err(AppError::Import {
            line,
            message: format!("{field} is not a number: '{raw}'"),
        }),
    }
}

fn parse_flag(raw: Option<&str>) -> bool {
    matches!(
        raw.map(|s| s.to_ascii_lowercase()).as_deref(),
        Some("1" | "true" | "yes" | "y")
    )
}

fn record_to_entry(rec: &StringRecord, line: u64) -> AppResult<NewEntry> {
    let raw_date = rec.get(0).unwrap_or("");
    let date = parse_date(raw_date).ok_or_else(|| AppError::Import {
        line,
        message: format!("invalid date '{raw_date}' (expected YYYY-MM-DD)"),
    })?;

    Ok(NewEntry {
        date: to_iso(date),
        entry_type: rec.get(1).unwrap_or("").to_string(),
        hours: parse_number(rec, 2, "hours", line)?,
        travel_time: parse_number(rec, 3, "travel", line)?,
        recorded: parse_flag(rec.get(4)),
        name: rec.get(5).unwrap_or("").to_string(),
        notes: rec.get(6).unwrap_or("").to_string(),
    })
}

/// Parse CSV content. The first row is always treated as a header.
/// Rows with fewer than four columns are skipped; any other bad row
/// fails the whole parse.
pub fn parse_csv<R: Read>(reader: R) -> AppResult<ImportBatch> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(reader);

    let mut batch = ImportBatch::default();

    for result in rdr.records() {
        let rec = result?;
        let line = rec.position().map(|p| p.line()).unwrap_or(0);

        if rec.len() < 4 {
            batch.skipped += 1;
            continue;
        }

        batch.entries.push(record_to_entry(&rec, line)?);
    }

    Ok(batch)
}

pub fn read_csv(path: &Path) -> AppResult<ImportBatch> {
    let file = fs::File::open(path)?;
    parse_csv(file)
}
