use crate::config::Config;
use crate::db::EntryStore;
use crate::errors::{AppError, AppResult};
use crate::models::NewEntry;
use crate::ui::messages::success;
use crate::utils::date::parse_date;

/// Input checks applied by the CLI before anything reaches the store.
/// The store itself accepts any value.
pub fn validate(entry: &NewEntry, cfg: &Config) -> AppResult<()> {
    if parse_date(&entry.date).is_none() {
        return Err(AppError::InvalidDate(entry.date.clone()));
    }

    if !entry.hours.is_finite() || entry.hours < 0.0 || entry.hours > cfg.max_hours {
        return Err(AppError::InvalidHours(format!(
            "hours must be between 0 and {}, got {}",
            cfg.max_hours, entry.hours
        )));
    }

    if !entry.travel_time.is_finite()
        || entry.travel_time < 0.0
        || entry.travel_time > cfg.max_hours
    {
        return Err(AppError::InvalidHours(format!(
            "travel time must be between 0 and {}, got {}",
            cfg.max_hours, entry.travel_time
        )));
    }

    if entry.total() == 0.0 {
        return Err(AppError::InvalidHours(
            "hours and travel time cannot both be zero".into(),
        ));
    }

    if entry.entry_type.trim().is_empty() {
        return Err(AppError::InvalidEntry("entry type must not be empty".into()));
    }

    Ok(())
}

/// High-level business logic for the `add` command.
pub struct AddLogic;

impl AddLogic {
    pub fn apply(store: &EntryStore, cfg: &Config, entry: &NewEntry) -> AppResult<i64> {
        validate(entry, cfg)?;

        let id = store.add(entry)?;

        store.audit(
            "add",
            &id.to_string(),
            &format!(
                "{} {} {:.2}h (+{:.2}h travel)",
                entry.date, entry.entry_type, entry.hours, entry.travel_time
            ),
        )?;

        success(format!(
            "Entry #{} added: {} {}, {:.2}h total",
            id,
            entry.date,
            entry.entry_type,
            entry.total()
        ));

        Ok(id)
    }
}
