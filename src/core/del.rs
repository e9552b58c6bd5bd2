use crate::db::EntryStore;
use crate::errors::AppResult;
use crate::ui::messages::{success, warning};

pub struct DeleteLogic;

impl DeleteLogic {
    /// Delete one entry. A missing id is not an error; the store call
    /// is a no-op and only a warning is shown.
    pub fn apply(store: &EntryStore, id: i64) -> AppResult<bool> {
        let existing = store.get(id)?;
        store.delete(id)?;

        match existing {
            Some(e) => {
                store.audit(
                    "del",
                    &id.to_string(),
                    &format!("{} {} {:.2}h", e.date, e.entry_type, e.total()),
                )?;
                success(format!("Entry #{} ({} {}) deleted.", id, e.date, e.entry_type));
                Ok(true)
            }
            None => {
                warning(format!("No entry #{}; nothing deleted.", id));
                Ok(false)
            }
        }
    }
}
