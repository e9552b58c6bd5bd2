use crate::db::migrate::entries_columns;
use crate::errors::AppResult;
use crate::models::{Entry, NewEntry};
use rusqlite::{Connection, OptionalExtension, Result, Row, params};

/// Columns that older databases may lack, with the SQL default used
/// when projecting them.
const OPTIONAL_COLUMNS: [(&str, &str); 3] = [("name", "''"), ("recorded", "0"), ("notes", "''")];

/// Raw `entries` row as read from SQLite. Optional columns stay `Option`
/// here and are defaulted once in `into_entry`.
struct StoredEntry {
    id: i64,
    date: String,
    entry_type: String,
    hours: Option<f64>,
    travel_time: Option<f64>,
    name: Option<String>,
    recorded: Option<i64>,
    notes: Option<String>,
}

impl StoredEntry {
    fn into_entry(self) -> Entry {
        Entry {
            id: self.id,
            date: self.date,
            name: self.name.unwrap_or_default(),
            entry_type: self.entry_type,
            hours: self.hours.unwrap_or(0.0),
            travel_time: self.travel_time.unwrap_or(0.0),
            recorded: self.recorded.unwrap_or(0) != 0,
            notes: self.notes.unwrap_or_default(),
        }
    }
}

/// Build the SELECT column list for the schema actually present,
/// substituting defaults for columns the database does not have yet.
fn entry_projection(conn: &Connection) -> Result<String> {
    let cols = entries_columns(conn)?;

    let mut parts = vec![
        "id".to_string(),
        "date".to_string(),
        "type".to_string(),
        "hours".to_string(),
        "travel_time".to_string(),
    ];

    for (col, default) in OPTIONAL_COLUMNS {
        if cols.contains(col) {
            parts.push(col.to_string());
        } else {
            parts.push(format!("{default} AS {col}"));
        }
    }

    Ok(parts.join(", "))
}

pub fn map_row(row: &Row) -> Result<Entry> {
    let stored = StoredEntry {
        id: row.get("id")?,
        date: row.get("date")?,
        entry_type: row.get("type")?,
        hours: row.get("hours")?,
        travel_time: row.get("travel_time")?,
        name: row.get("name")?,
        recorded: row.get("recorded")?,
        notes: row.get("notes")?,
    };
    Ok(stored.into_entry())
}

pub fn insert_entry(conn: &Connection, e: &NewEntry) -> AppResult<i64> {
    conn.execute(
        "INSERT INTO entries (date, name, type, hours, travel_time, recorded, notes)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
        params![
            e.date,
            e.name,
            e.entry_type,
            e.hours,
            e.travel_time,
            if e.recorded { 1 } else { 0 },
            e.notes,
        ],
    )?;
    Ok(conn.last_insert_rowid())
}

/// Overwrite every field of entry `id`. Returns the number of rows changed
/// (0 when the id does not exist).
pub fn update_entry(conn: &Connection, id: i64, e: &NewEntry) -> AppResult<usize> {
    let changed = conn.execute(
        "UPDATE entries
         SET date = ?1, name = ?2, type = ?3, hours = ?4, travel_time = ?5,
             recorded = ?6, notes = ?7
         WHERE id = ?8",
        params![
            e.date,
            e.name,
            e.entry_type,
            e.hours,
            e.travel_time,
            if e.recorded { 1 } else { 0 },
            e.notes,
            id,
        ],
    )?;
    Ok(changed)
}

pub fn delete_entry(conn: &Connection, id: i64) -> AppResult<usize> {
    Ok(conn.execute("DELETE FROM entries WHERE id = ?1", [id])?)
}

pub fn delete_all_entries(conn: &Connection) -> AppResult<usize> {
    Ok(conn.execute("DELETE FROM entries", [])?)
}

/// All entries, newest date first.
pub fn load_entries(conn: &Connection) -> AppResult<Vec<Entry>> {
    let sql = format!(
        "SELECT {} FROM entries ORDER BY date DESC, id DESC",
        entry_projection(conn)?
    );
    let mut stmt = conn.prepare(&sql)?;
    let rows = stmt.query_map([], map_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn load_entry(conn: &Connection, id: i64) -> AppResult<Option<Entry>> {
    let sql = format!(
        "SELECT {} FROM entries WHERE id = ?1",
        entry_projection(conn)?
    );
    let mut stmt = conn.prepare(&sql)?;
    Ok(stmt.query_row([id], map_row).optional()?)
}

/// Rows of the internal log table, oldest first.
pub fn load_log(conn: &Connection) -> AppResult<Vec<(i64, String, String, String, String)>> {
    let mut stmt = conn.prepare_cached(
        "SELECT id, date, operation, IFNULL(target, ''), message FROM log ORDER BY id ASC",
    )?;

    let rows = stmt.query_map([], |row| {
        Ok((
            row.get(0)?,
            row.get(1)?,
            row.get(2)?,
            row.get(3)?,
            row.get(4)?,
        ))
    })?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn legacy_conn() -> Connection {
        let conn = Connection::open_in_memory().unwrap();
        conn.execute_batch(
            "CREATE TABLE entries (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                date TEXT NOT NULL,
                type TEXT NOT NULL,
                hours REAL NOT NULL,
                travel_time REAL DEFAULT 0
            );
            INSERT INTO entries (date, type, hours, travel_time) VALUES ('2024-01-05', 'Work', 7.5, NULL);",
        )
        .unwrap();
        conn
    }

    #[test]
    fn legacy_rows_decode_with_defaults() {
        let conn = legacy_conn();
        let entries = load_entries(&conn).unwrap();

        assert_eq!(entries.len(), 1);
        let e = &entries[0];
        assert_eq!(e.date, "2024-01-05");
        assert_eq!(e.hours, 7.5);
        assert_eq!(e.travel_time, 0.0);
        assert_eq!(e.name, "");
        assert!(!e.recorded);
        assert_eq!(e.notes, "");
    }

    #[test]
    fn missing_id_is_none() {
        let conn = legacy_conn();
        assert!(load_entry(&conn, 42).unwrap().is_none());
        assert!(load_entry(&conn, 1).unwrap().is_some());
    }
}
