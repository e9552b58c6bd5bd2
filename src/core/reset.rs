use crate::db::EntryStore;
use crate::errors::AppResult;
use crate::ui::messages::success;

pub struct ResetLogic;

impl ResetLogic {
    /// Remove every entry. Confirmation happens in the CLI layer.
    pub fn apply(store: &EntryStore) -> AppResult<usize> {
        let removed = store.reset_all()?;
        store.audit("reset", "entries", &format!("Deleted {} entries", removed))?;
        success(format!("All entries deleted ({} removed).", removed));
        Ok(removed)
    }
}
