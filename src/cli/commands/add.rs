use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::add::AddLogic;
use crate::db::EntryStore;
use crate::errors::{AppError, AppResult};
use crate::models::{Category, NewEntry};
use crate::ui::messages::info;
use crate::utils::date::{parse_user_date, to_iso};

/// Add a new time entry.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Add {
        date,
        entry_type,
        hours,
        travel,
        name,
        notes,
        recorded,
    } = cmd
    {
        let d = parse_user_date(date).ok_or_else(|| AppError::InvalidDate(date.to_string()))?;

        let category = Category::resolve(entry_type, &cfg.categories);
        if category.is_custom() {
            info(format!("Using custom tag '{}'", category.as_str()));
        }

        let entry = NewEntry::new(to_iso(d), category.as_str(), *hours, *travel)
            .with_name(name.clone().unwrap_or_default())
            .with_notes(notes.clone().unwrap_or_default())
            .recorded(*recorded);

        let store = EntryStore::new(cfg.database_path());
        AddLogic::apply(&store, cfg, &entry)?;
    }

    Ok(())
}
