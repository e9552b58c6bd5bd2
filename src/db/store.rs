//! Entry store: the only component that touches the `entries` table.
//!
//! Every call opens its own SQLite connection, runs its statement(s),
//! commits and closes. Nothing spans two calls, so a read followed by an
//! update is not atomic.

use crate::db::initialize::init_db;
use crate::db::log::audit;
use crate::db::queries;
use crate::errors::AppResult;
use crate::models::{Entry, NewEntry};
use rusqlite::Connection;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone)]
pub struct EntryStore {
    path: PathBuf,
}

impl EntryStore {
    /// Store backed by the SQLite file at `path`. Nothing is opened yet.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn connect(&self) -> AppResult<Connection> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)?;
        }
        Ok(Connection::open(&self.path)?)
    }

    /// Create or upgrade the schema. Safe to call on every startup.
    pub fn initialize(&self) -> AppResult<()> {
        let conn = self.connect()?;
        init_db(&conn)
    }

    pub fn add(&self, entry: &NewEntry) -> AppResult<i64> {
        let conn = self.connect()?;
        queries::insert_entry(&conn, entry)
    }

    /// Insert all entries in one transaction: either every row lands or none.
    pub fn add_many(&self, entries: &[NewEntry]) -> AppResult<Vec<i64>> {
        let mut conn = self.connect()?;
        let tx = conn.transaction()?;

        let mut ids = Vec::with_capacity(entries.len());
        for e in entries {
            ids.push(queries::insert_entry(&tx, e)?);
        }

        tx.commit()?;
        Ok(ids)
    }

    /// Full overwrite of entry `id`; silently does nothing if it is absent.
    pub fn update(&self, id: i64, entry: &NewEntry) -> AppResult<()> {
        let conn = self.connect()?;
        queries::update_entry(&conn, id, entry)?;
        Ok(())
    }

    /// Remove entry `id`; no-op if absent.
    pub fn delete(&self, id: i64) -> AppResult<()> {
        let conn = self.connect()?;
        queries::delete_entry(&conn, id)?;
        Ok(())
    }

    pub fn get(&self, id: i64) -> AppResult<Option<Entry>> {
        let conn = self.connect()?;
        queries::load_entry(&conn, id)
    }

    /// Every entry, newest date first. Ties have no defined order.
    pub fn list_all(&self) -> AppResult<Vec<Entry>> {
        let conn = self.connect()?;
        queries::load_entries(&conn)
    }

    /// Delete every entry. Returns how many were removed.
    pub fn reset_all(&self) -> AppResult<usize> {
        let conn = self.connect()?;
        queries::delete_all_entries(&conn)
    }

    /// Append a line to the internal log table.
    pub fn audit(&self, operation: &str, target: &str, message: &str) -> AppResult<()> {
        let conn = self.connect()?;
        audit(&conn, operation, target, message)
    }

    /// `PRAGMA integrity_check` result: `"ok"` or the first problem found.
    pub fn integrity_check(&self) -> AppResult<String> {
        let conn = self.connect()?;
        Ok(conn.query_row("PRAGMA integrity_check;", [], |row| row.get(0))?)
    }

    /// Rebuild the database file, reclaiming space left by deleted entries.
    pub fn vacuum(&self) -> AppResult<()> {
        let conn = self.connect()?;
        conn.execute_batch("VACUUM;")?;
        Ok(())
    }

    /// Open a raw connection (read-only reporting: `db --info`, `log`).
    pub fn open(&self) -> AppResult<Connection> {
        self.connect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;

    fn temp_store(name: &str) -> EntryStore {
        let mut path = env::temp_dir();
        path.push(format!("{}_store_unit_hourtracker.db", name));
        std::fs::remove_file(&path).ok();
        let store = EntryStore::new(path);
        store.initialize().unwrap();
        store
    }

    #[test]
    fn update_of_missing_id_is_silent() {
        let store = temp_store("update_missing");
        store
            .update(999, &NewEntry::new("2025-01-01", "Work", 1.0, 0.0))
            .unwrap();
        assert!(store.list_all().unwrap().is_empty());
    }

    #[test]
    fn add_many_assigns_distinct_ids() {
        let store = temp_store("add_many_ids");
        let ids = store
            .add_many(&[
                NewEntry::new("2025-01-01", "Work", 1.0, 0.0),
                NewEntry::new("2025-01-02", "Work", 2.0, 0.5),
            ])
            .unwrap();
        assert_eq!(ids.len(), 2);
        assert_ne!(ids[0], ids[1]);
        assert_eq!(store.list_all().unwrap().len(), 2);
    }

    #[test]
    fn maintenance_keeps_entries() {
        let store = temp_store("maintenance");
        store
            .add(&NewEntry::new("2025-01-01", "Work", 1.0, 0.0))
            .unwrap();
        store.reset_all().unwrap();
        store
            .add(&NewEntry::new("2025-01-02", "Admin", 0.5, 0.0))
            .unwrap();

        assert_eq!(store.integrity_check().unwrap(), "ok");
        store.vacuum().unwrap();
        assert_eq!(store.list_all().unwrap().len(), 1);
    }
}
