use std::collections::BTreeMap;

/// Hours and travel summed over a group of entries.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Totals {
    pub hours: f64,
    pub travel: f64,
}

impl Totals {
    pub fn add(&mut self, hours: f64, travel: f64) {
        self.hours += hours;
        self.travel += travel;
    }

    pub fn total(&self) -> f64 {
        self.hours + self.travel
    }
}

/// Aggregates over a full entry set.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Summary {
    /// Keyed by exact `type` string, sorted by name.
    pub by_type: BTreeMap<String, Totals>,
    pub grand: Totals,
    pub recorded: Totals,
    pub unrecorded: Totals,
    pub entry_count: usize,
}

/// One row of the monthly rollup (`YYYY-MM`).
#[derive(Debug, Clone, PartialEq)]
pub struct MonthlyRow {
    pub month: String,
    /// Hours including travel.
    pub total: f64,
    pub count: usize,
}

impl MonthlyRow {
    pub fn average(&self) -> f64 {
        if self.count == 0 {
            0.0
        } else {
            self.total / self.count as f64
        }
    }
}
