use crate::export::range::DateRange;
use crate::models::Entry;

/// Optional filters for `list` and `export`.
#[derive(Debug, Default, Clone)]
pub struct EntryFilter {
    pub range: Option<DateRange>,
    pub entry_type: Option<String>,
    pub recorded: Option<bool>,
}

impl EntryFilter {
    pub fn matches(&self, e: &Entry) -> bool {
        if let Some(r) = &self.range
            && !r.contains(&e.date)
        {
            return false;
        }
        if let Some(t) = &self.entry_type
            && !t.eq_ignore_ascii_case(&e.entry_type)
        {
            return false;
        }
        if let Some(rec) = self.recorded
            && rec != e.recorded
        {
            return false;
        }
        true
    }

    /// Keep matching entries, preserving order.
    pub fn apply(&self, entries: Vec<Entry>) -> Vec<Entry> {
        entries.into_iter().filter(|e| self.matches(e)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::export::range::parse_range;

    fn entry(date: &str, t: &str, recorded: bool) -> Entry {
        Entry {
            id: 1,
            date: date.into(),
            name: String::new(),
            entry_type: t.into(),
            hours: 1.0,
            travel_time: 0.0,
            recorded,
            notes: String::new(),
        }
    }

    #[test]
    fn combines_all_filters() {
        let f = EntryFilter {
            range: Some(parse_range("2025-03").unwrap()),
            entry_type: Some("work".into()),
            recorded: Some(false),
        };

        assert!(f.matches(&entry("2025-03-10", "Work", false)));
        assert!(!f.matches(&entry("2025-04-01", "Work", false)));
        assert!(!f.matches(&entry("2025-03-10", "Meeting", false)));
        assert!(!f.matches(&entry("2025-03-10", "Work", true)));
    }

    #[test]
    fn empty_filter_keeps_everything() {
        let all = vec![entry("x", "A", true), entry("2025-01-01", "B", false)];
        assert_eq!(EntryFilter::default().apply(all).len(), 2);
    }
}
