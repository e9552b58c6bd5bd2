use crate::config::Config;
use crate::core::add::validate;
use crate::db::EntryStore;
use crate::errors::{AppError, AppResult};
use crate::models::{Entry, NewEntry};
use crate::ui::messages::{info, success};

/// Fields supplied on the command line. `None` keeps the stored value.
#[derive(Debug, Default, Clone)]
pub struct EntryChanges {
    pub date: Option<String>,
    pub name: Option<String>,
    pub entry_type: Option<String>,
    pub hours: Option<f64>,
    pub travel_time: Option<f64>,
    pub recorded: Option<bool>,
    pub notes: Option<String>,
}

impl EntryChanges {
    pub fn is_empty(&self) -> bool {
        self.date.is_none()
            && self.name.is_none()
            && self.entry_type.is_none()
            && self.hours.is_none()
            && self.travel_time.is_none()
            && self.recorded.is_none()
            && self.notes.is_none()
    }

    /// Complete record: the current entry with these changes applied.
    pub fn merge_into(&self, current: &Entry) -> NewEntry {
        let mut e = current.to_new();
        if let Some(d) = &self.date {
            e.date = d.clone();
        }
        if let Some(n) = &self.name {
            e.name = n.clone();
        }
        if let Some(t) = &self.entry_type {
            e.entry_type = t.clone();
        }
        if let Some(h) = self.hours {
            e.hours = h;
        }
        if let Some(t) = self.travel_time {
            e.travel_time = t;
        }
        if let Some(r) = self.recorded {
            e.recorded = r;
        }
        if let Some(n) = &self.notes {
            e.notes = n.clone();
        }
        e
    }
}

/// `edit` command: read the entry, merge the changes, write the full record back.
/// The read and the write use separate connections.
pub struct EditLogic;

impl EditLogic {
    pub fn apply(
        store: &EntryStore,
        cfg: &Config,
        id: i64,
        changes: &EntryChanges,
    ) -> AppResult<NewEntry> {
        let current = store.get(id)?.ok_or(AppError::EntryNotFound(id))?;

        let updated = changes.merge_into(&current);
        if changes.is_empty() || updated == current.to_new() {
            info(format!("Entry #{} unchanged.", id));
            return Ok(updated);
        }

        validate(&updated, cfg)?;
        store.update(id, &updated)?;

        store.audit(
            "edit",
            &id.to_string(),
            &format!(
                "{} {} {:.2}h (+{:.2}h travel) recorded={}",
                updated.date, updated.entry_type, updated.hours, updated.travel_time, updated.recorded
            ),
        )?;

        success(format!("Entry #{} updated.", id));
        Ok(updated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn merge_keeps_untouched_fields() {
        let current = Entry {
            id: 4,
            date: "2025-03-03".into(),
            name: "Site visit".into(),
            entry_type: "Work".into(),
            hours: 6.0,
            travel_time: 2.0,
            recorded: false,
            notes: "bring badge".into(),
        };
        let changes = EntryChanges {
            hours: Some(7.0),
            recorded: Some(true),
            ..Default::default()
        };

        let merged = changes.merge_into(&current);
        assert_eq!(merged.hours, 7.0);
        assert!(merged.recorded);
        assert_eq!(merged.travel_time, 2.0);
        assert_eq!(merged.name, "Site visit");
        assert_eq!(merged.notes, "bring badge");
    }
}
