// src/export/xlsx.rs

use crate::core::summary::{monthly_rollup, summarize, year_to_date};
use crate::errors::AppResult;
use crate::export::excel_date::iso_to_excel_serial;
use crate::export::model::SHEET_HEADERS;
use crate::models::{Entry, MonthlyRow, Summary, Totals};
use crate::utils::formatting::yes_no;
use rust_xlsxwriter::{
    Chart, ChartType, Color, Format, FormatAlign, FormatBorder, FormatPattern, Workbook,
    Worksheet,
};
use std::path::Path;
use unicode_width::UnicodeWidthStr;

pub(crate) const HOURS_SHEET: &str = "Hours";
pub(crate) const SUMMARY_SHEET: &str = "Summary";

const BAND1: Color = Color::RGB(0xEAF3FB);
const BAND2: Color = Color::RGB(0xFFFFFF);
const HOURS_FMT: &str = "0.00";

/// Header row of the monthly table on the summary sheet.
const MONTHLY_HEADER_ROW: u32 = 1;

fn header_format() -> Format {
    Format::new()
        .set_bold()
        .set_font_color(Color::RGB(0xFFFFFF))
        .set_background_color(Color::RGB(0x2F75B5))
        .set_pattern(FormatPattern::Solid)
        .set_border(FormatBorder::Thin)
}

fn title_format() -> Format {
    Format::new().set_bold().set_font_size(13)
}

fn cell_format(bg: Color) -> Format {
    Format::new()
        .set_background_color(bg)
        .set_pattern(FormatPattern::Solid)
        .set_border(FormatBorder::Thin)
}

fn hours_format(bg: Color) -> Format {
    cell_format(bg)
        .set_num_format(HOURS_FMT)
        .set_align(FormatAlign::Right)
}

fn write_headers(ws: &mut Worksheet, row: u32, headers: &[&str]) -> AppResult<()> {
    let fmt = header_format();
    for (col, h) in headers.iter().enumerate() {
        ws.write_string_with_format(row, col as u16, *h, &fmt)?;
    }
    Ok(())
}

/// Raw entries, one per row, with a derived `Total` column.
fn hours_sheet(entries: &[Entry]) -> AppResult<Worksheet> {
    let mut ws = Worksheet::new();
    ws.set_name(HOURS_SHEET)?;

    write_headers(&mut ws, 0, &SHEET_HEADERS)?;
    ws.set_freeze_panes(1, 0)?;

    let mut col_widths: Vec<usize> = SHEET_HEADERS
        .iter()
        .map(|h| UnicodeWidthStr::width(*h))
        .collect();
    col_widths[0] = col_widths[0].max(10);

    for (i, e) in entries.iter().enumerate() {
        let row = (i + 1) as u32;
        let band = if i % 2 == 0 { BAND1 } else { BAND2 };
        let text = cell_format(band);
        let num = hours_format(band);

        match iso_to_excel_serial(&e.date) {
            Some(serial) => {
                let date_fmt = cell_format(band).set_num_format("yyyy-mm-dd");
                ws.write_number_with_format(row, 0, serial, &date_fmt)?
            }
            None => ws.write_string_with_format(row, 0, &e.date, &text)?,
        };
        ws.write_string_with_format(row, 1, &e.name, &text)?;
        ws.write_string_with_format(row, 2, &e.entry_type, &text)?;
        ws.write_number_with_format(row, 3, e.hours, &num)?;
        ws.write_number_with_format(row, 4, e.travel_time, &num)?;
        ws.write_number_with_format(row, 5, e.total(), &num)?;
        ws.write_string_with_format(row, 6, yes_no(e.recorded), &text)?;
        ws.write_string_with_format(row, 7, &e.notes, &text)?;

        for (col, v) in [(1, &e.name), (2, &e.entry_type), (7, &e.notes)] {
            col_widths[col] = col_widths[col].max(UnicodeWidthStr::width(v.as_str()));
        }
    }

    for (c, w) in col_widths.iter().enumerate() {
        ws.set_column_width(c as u16, (*w).min(60) as f64 + 2.0)?;
    }

    Ok(ws)
}

fn write_totals_row(
    ws: &mut Worksheet,
    row: u32,
    label: &str,
    t: &Totals,
    bg: Color,
) -> AppResult<()> {
    let num = hours_format(bg);
    ws.write_string_with_format(row, 0, label, &cell_format(bg))?;
    ws.write_number_with_format(row, 1, t.hours, &num)?;
    ws.write_number_with_format(row, 2, t.travel, &num)?;
    ws.write_number_with_format(row, 3, t.total(), &num)?;
    Ok(())
}

/// Monthly rollup, YTD, per-type table, recorded split and two charts.
fn summary_sheet(
    summary: &Summary,
    months: &[MonthlyRow],
    ytd: f64,
    year: i32,
) -> AppResult<Worksheet> {
    let mut ws = Worksheet::new();
    ws.set_name(SUMMARY_SHEET)?;

    // ---------------------------
    // Monthly totals
    // ---------------------------
    ws.write_string_with_format(0, 0, "Monthly totals (incl. travel)", &title_format())?;
    write_headers(
        &mut ws,
        MONTHLY_HEADER_ROW,
        &["Month", "Total hours", "Entries", "Avg hours/entry"],
    )?;

    let first_month_row = MONTHLY_HEADER_ROW + 1;
    for (i, m) in months.iter().enumerate() {
        let row = first_month_row + i as u32;
        let band = if i % 2 == 0 { BAND1 } else { BAND2 };
        let num = hours_format(band);

        ws.write_string_with_format(row, 0, &m.month, &cell_format(band))?;
        ws.write_number_with_format(row, 1, m.total, &num)?;
        ws.write_number_with_format(row, 2, m.count as f64, &cell_format(band))?;
        ws.write_number_with_format(row, 3, m.average(), &num)?;
    }

    let mut row = first_month_row + months.len() as u32 + 1;

    // ---------------------------
    // Year to date
    // ---------------------------
    ws.write_string_with_format(row, 0, format!("Year to date {year}"), &title_format())?;
    ws.write_number_with_format(row, 1, ytd, &hours_format(BAND2))?;
    row += 2;

    // ---------------------------
    // Per type
    // ---------------------------
    ws.write_string_with_format(row, 0, "Hours by type", &title_format())?;
    row += 1;
    write_headers(&mut ws, row, &["Type", "Hours", "Travel", "Total"])?;
    row += 1;

    let first_type_row = row;
    for (i, (name, t)) in summary.by_type.iter().enumerate() {
        let band = if i % 2 == 0 { BAND1 } else { BAND2 };
        write_totals_row(&mut ws, row, name, t, band)?;
        row += 1;
    }
    let last_type_row = row.saturating_sub(1);

    write_totals_row(&mut ws, row, "All types", &summary.grand, BAND2)?;
    row += 2;

    // ---------------------------
    // Recorded split
    // ---------------------------
    ws.write_string_with_format(row, 0, "Recorded status", &title_format())?;
    row += 1;
    write_headers(&mut ws, row, &["Status", "Hours", "Travel", "Total"])?;
    row += 1;
    write_totals_row(&mut ws, row, "Recorded", &summary.recorded, BAND1)?;
    write_totals_row(&mut ws, row + 1, "Not recorded", &summary.unrecorded, BAND2)?;

    ws.set_column_width(0, 30)?;
    for c in 1..4u16 {
        ws.set_column_width(c, 14)?;
    }

    // ---------------------------
    // Charts
    // ---------------------------
    if !months.is_empty() {
        let last_month_row = first_month_row + months.len() as u32 - 1;

        let mut chart = Chart::new(ChartType::Column);
        chart
            .add_series()
            .set_name("Total hours")
            .set_categories((SUMMARY_SHEET, first_month_row, 0u16, last_month_row, 0u16))
            .set_values((SUMMARY_SHEET, first_month_row, 1u16, last_month_row, 1u16));
        chart.title().set_name("Monthly hours (incl. travel)");
        chart.legend().set_hidden();
        ws.insert_chart(0, 5, &chart)?;
    }

    if !summary.by_type.is_empty() {
        let mut pie = Chart::new(ChartType::Pie);
        pie.add_series()
            .set_name("Hours")
            .set_categories((SUMMARY_SHEET, first_type_row, 0u16, last_type_row, 0u16))
            .set_values((SUMMARY_SHEET, first_type_row, 1u16, last_type_row, 1u16));
        pie.title().set_name("Hours by type (excl. travel)");
        ws.insert_chart(17, 5, &pie)?;
    }

    Ok(ws)
}

/// Build the whole workbook in memory. Fails on the first malformed date,
/// before anything touches the filesystem.
pub fn build_workbook(entries: &[Entry], year: i32) -> AppResult<Workbook> {
    let months = monthly_rollup(entries)?;
    let ytd = year_to_date(entries, year)?;
    let summary = summarize(entries);

    let mut workbook = Workbook::new();
    workbook.push_worksheet(hours_sheet(entries)?);
    workbook.push_worksheet(summary_sheet(&summary, &months, ytd, year)?);
    Ok(workbook)
}

/// Spreadsheet export. `year` selects the year-to-date total.
pub fn write_xlsx(entries: &[Entry], path: &Path, year: i32) -> AppResult<()> {
    let mut workbook = build_workbook(entries, year)?;
    workbook.save(path)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(date: &str, t: &str, hours: f64) -> Entry {
        Entry {
            id: 1,
            date: date.into(),
            name: String::new(),
            entry_type: t.into(),
            hours,
            travel_time: 0.5,
            recorded: false,
            notes: String::new(),
        }
    }

    #[test]
    fn workbook_builds_for_valid_entries() {
        let entries = vec![entry("2025-01-02", "Work", 7.0), entry("2025-02-03", "Meeting", 1.0)];
        assert!(build_workbook(&entries, 2025).is_ok());
    }

    #[test]
    fn workbook_builds_for_empty_input() {
        assert!(build_workbook(&[], 2025).is_ok());
    }

    #[test]
    fn summary_sheet_carries_year_to_date() {
        let entries = vec![entry("2025-01-02", "Other", 7.0)];
        let mut workbook = build_workbook(&entries, 2025).unwrap();
        let bytes = workbook.save_to_buffer().unwrap();

        let mut archive = zip::ZipArchive::new(std::io::Cursor::new(bytes)).unwrap();
        let mut strings = String::new();
        std::io::Read::read_to_string(
            &mut archive.by_name("xl/sharedStrings.xml").unwrap(),
            &mut strings,
        )
        .unwrap();

        assert!(strings.contains("Year to date 2025"));
        assert!(strings.contains("Hours by type"));
    }

    #[test]
    fn malformed_date_aborts_build() {
        let entries = vec![entry("2025-01-02", "Work", 7.0), entry("next tuesday", "Work", 1.0)];
        assert!(build_workbook(&entries, 2025).is_err());
    }
}
