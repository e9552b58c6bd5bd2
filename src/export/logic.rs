// src/export/logic.rs

use crate::core::list::EntryFilter;
use crate::db::EntryStore;
use crate::errors::{AppError, AppResult};
use crate::export::csv::{read_csv, write_csv};
use crate::export::fs_utils::ensure_writable;
use crate::export::range::parse_range;
use crate::export::xlsx::write_xlsx;
use crate::export::{ExportFormat, notify_export_success};
use crate::ui::messages::{info, success, warning};
use crate::utils::date::current_year;
use crate::utils::path::expand_tilde;

/// High-level logic for the `export` command.
pub struct ExportLogic;

impl ExportLogic {
    /// Export entries to CSV or XLSX.
    ///
    /// - `format`: taken from the file extension when `None`
    /// - `range`: `None`, `"all"` or a range expression (`YYYY`, `YYYY-MM`,
    ///   `YYYY-MM-DD`, or `start:end` of the same shape)
    /// - `extended`: also write `Name`/`Notes` (CSV only)
    ///
    /// Returns the number of exported entries.
    pub fn export(
        store: &EntryStore,
        format: Option<ExportFormat>,
        file: &str,
        range: &Option<String>,
        extended: bool,
        force: bool,
    ) -> AppResult<usize> {
        let path = expand_tilde(file);

        let format = format
            .or_else(|| ExportFormat::from_path(&path))
            .ok_or_else(|| {
                AppError::Export(format!(
                    "cannot infer format from '{}'; use --format csv|xlsx",
                    path.display()
                ))
            })?;

        let filter = EntryFilter {
            range: match range {
                None => None,
                Some(r) if r.eq_ignore_ascii_case("all") => None,
                Some(r) => Some(parse_range(r)?),
            },
            ..Default::default()
        };

        let entries = filter.apply(store.list_all()?);

        if entries.is_empty() {
            warning("No entries found for the selected range; nothing exported.");
            return Ok(0);
        }

        ensure_writable(&path, force)?;

        info(format!(
            "Exporting {} entries to {}: {}",
            entries.len(),
            format.as_str().to_uppercase(),
            path.display()
        ));

        match format {
            ExportFormat::Csv => write_csv(&entries, &path, extended)?,
            ExportFormat::Xlsx => write_xlsx(&entries, &path, current_year())?,
        }

        store.audit(
            "export",
            format.as_str(),
            &format!("{} entries → {}", entries.len(), path.display()),
        )?;

        notify_export_success(&format.as_str().to_uppercase(), &path);
        Ok(entries.len())
    }
}

/// High-level logic for the `import` command.
pub struct ImportLogic;

impl ImportLogic {
    /// Append every valid CSV row as a new entry.
    ///
    /// The file is parsed completely before anything is written, and the
    /// inserts share a single transaction: a bad row leaves the store as it was.
    pub fn import(store: &EntryStore, file: &str) -> AppResult<usize> {
        let path = expand_tilde(file);
        info(format!("Importing CSV: {}", path.display()));

        let batch = read_csv(&path)?;
        let ids = store.add_many(&batch.entries)?;

        store.audit(
            "import",
            &path.display().to_string(),
            &format!("{} entries imported, {} rows skipped", ids.len(), batch.skipped),
        )?;

        if batch.skipped > 0 {
            success(format!(
                "Imported {} entries ({} short rows skipped).",
                ids.len(),
                batch.skipped
            ));
        } else {
            success(format!("Imported {} entries.", ids.len()));
        }

        Ok(ids.len())
    }
}
