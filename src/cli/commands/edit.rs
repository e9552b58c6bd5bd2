use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::edit::{EditLogic, EntryChanges};
use crate::db::EntryStore;
use crate::errors::{AppError, AppResult};
use crate::models::Category;
use crate::utils::date::{parse_user_date, to_iso};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Edit {
        id,
        date,
        entry_type,
        hours,
        travel,
        name,
        notes,
        recorded,
        unrecorded,
    } = cmd
    {
        let date = match date {
            Some(raw) => Some(to_iso(
                parse_user_date(raw).ok_or_else(|| AppError::InvalidDate(raw.clone()))?,
            )),
            None => None,
        };

        let changes = EntryChanges {
            date,
            name: name.clone(),
            entry_type: entry_type
                .as_deref()
                .map(|t| Category::resolve(t, &cfg.categories).as_str().to_string()),
            hours: *hours,
            travel_time: *travel,
            recorded: match (*recorded, *unrecorded) {
                (true, _) => Some(true),
                (_, true) => Some(false),
                _ => None,
            },
            notes: notes.clone(),
        };

        let store = EntryStore::new(cfg.database_path());
        EditLogic::apply(&store, cfg, *id, &changes)?;
    }

    Ok(())
}
