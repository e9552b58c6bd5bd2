/// A time entry as stored in the `entries` table.
#[derive(Debug, Clone, PartialEq)]
pub struct Entry {
    pub id: i64,
    /// ISO-8601 calendar date (`YYYY-MM-DD`), kept as stored.
    pub date: String,
    pub name: String,
    /// Stored in the `type` column.
    pub entry_type: String,
    pub hours: f64,
    pub travel_time: f64,
    pub recorded: bool,
    pub notes: String,
}

impl Entry {
    /// Hours plus travel. Never persisted.
    pub fn total(&self) -> f64 {
        self.hours + self.travel_time
    }

    /// The full field set of this entry, without its id.
    pub fn to_new(&self) -> NewEntry {
        NewEntry {
            date: self.date.clone(),
            name: self.name.clone(),
            entry_type: self.entry_type.clone(),
            hours: self.hours,
            travel_time: self.travel_time,
            recorded: self.recorded,
            notes: self.notes.clone(),
        }
    }
}

/// Every writable field of an entry. Used for both inserts and full-record
/// updates; there is no partial patch.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct NewEntry {
    pub date: String,
    pub name: String,
    pub entry_type: String,
    pub hours: f64,
    pub travel_time: f64,
    pub recorded: bool,
    pub notes: String,
}

impl NewEntry {
    pub fn new(date: impl Into<String>, entry_type: impl Into<String>, hours: f64, travel_time: f64) -> Self {
        Self {
            date: date.into(),
            entry_type: entry_type.into(),
            hours,
            travel_time,
            ..Default::default()
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = notes.into();
        self
    }

    pub fn recorded(mut self, recorded: bool) -> Self {
        self.recorded = recorded;
        self
    }

    pub fn total(&self) -> f64 {
        self.hours + self.travel_time
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn total_is_hours_plus_travel() {
        let e = NewEntry::new("2025-03-01", "Work", 6.5, 1.25);
        assert_eq!(e.total(), 7.75);
        assert!(!e.recorded);
        assert!(e.name.is_empty());
    }
}
