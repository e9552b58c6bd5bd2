// src/export/mod.rs

mod csv;
mod excel_date;
mod fs_utils;
pub mod logic;
mod model;
pub mod range;
mod xlsx;

pub use self::csv::{ImportBatch, parse_csv, read_csv, write_csv};
pub use logic::{ExportLogic, ImportLogic};
pub use xlsx::{build_workbook, write_xlsx};

use crate::ui::messages::success;
use clap::ValueEnum;
use std::path::Path;

pub(crate) fn notify_export_success(label: &str, path: &Path) {
    success(format!("{label} export completed: {}", path.display()));
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    Csv,
    Xlsx,
}

impl ExportFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Xlsx => "xlsx",
        }
    }

    /// Guess the format from a file extension (`.csv`, `.xlsx`).
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "csv" => Some(ExportFormat::Csv),
            "xlsx" => Some(ExportFormat::Xlsx),
            _ => None,
        }
    }
}
