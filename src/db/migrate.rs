use crate::ui::messages::success;
use rusqlite::{Connection, OptionalExtension, Result, params};
use std::collections::HashSet;

/// Schema generations of the `entries` table.
///
/// `V1` databases were created before `name`, `recorded` and `notes`
/// existed; `V2` has the full column set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchemaVersion {
    V1,
    V2,
}

/// Columns added after the first release, with their DDL.
const LATER_COLUMNS: [(&str, &str, &str); 3] = [
    (
        "20240310_add_name",
        "name",
        "ALTER TABLE entries ADD COLUMN name TEXT DEFAULT ''",
    ),
    (
        "20240522_add_recorded",
        "recorded",
        "ALTER TABLE entries ADD COLUMN recorded INTEGER NOT NULL DEFAULT 0",
    ),
    (
        "20240522_add_notes",
        "notes",
        "ALTER TABLE entries ADD COLUMN notes TEXT DEFAULT ''",
    ),
];

/// Ensure that the `log` table exists.
fn ensure_log_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

/// Create the `entries` table with its first-release column set.
/// Newer columns are added by `add_missing_columns`.
fn ensure_entries_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS entries (
            id          INTEGER PRIMARY KEY AUTOINCREMENT,
            date        TEXT NOT NULL,
            type        TEXT NOT NULL,
            hours       REAL NOT NULL,
            travel_time REAL DEFAULT 0
        );

        CREATE INDEX IF NOT EXISTS idx_entries_date ON entries(date);
        "#,
    )?;
    Ok(())
}

/// Column names currently present in `entries` (empty if the table is missing).
pub fn entries_columns(conn: &Connection) -> Result<HashSet<String>> {
    let mut stmt = conn.prepare("PRAGMA table_info('entries')")?;
    let cols = stmt.query_map([], |row| row.get::<_, String>(1))?;

    let mut out = HashSet::new();
    for c in cols {
        out.insert(c?);
    }
    Ok(out)
}

pub fn detect_version(conn: &Connection) -> Result<SchemaVersion> {
    let cols = entries_columns(conn)?;
    let complete = LATER_COLUMNS.iter().all(|(_, col, _)| cols.contains(*col));
    Ok(if complete {
        SchemaVersion::V2
    } else {
        SchemaVersion::V1
    })
}

fn migration_applied(conn: &Connection, version: &str) -> Result<bool> {
    let mut chk = conn.prepare(
        "SELECT 1 FROM log
         WHERE operation = 'migration_applied' AND target = ?1
         LIMIT 1",
    )?;
    Ok(chk.query_row([version], |_| Ok(())).optional()?.is_some())
}

fn add_missing_columns(conn: &Connection) -> Result<()> {
    let cols = entries_columns(conn)?;

    for (version, column, ddl) in LATER_COLUMNS {
        if cols.contains(column) {
            continue;
        }

        conn.execute(ddl, [])?;

        if !migration_applied(conn, version)? {
            conn.execute(
                "INSERT INTO log (date, operation, target, message)
                 VALUES (datetime('now'), 'migration_applied', ?1, ?2)",
                params![version, format!("Added '{column}' column to entries")],
            )?;
        }

        success(format!(
            "Migration applied: {} → added '{}' to entries table",
            version, column
        ));
    }

    Ok(())
}

/// Public entry point: bring the schema up to date.
///
/// Idempotent; called on every startup through `db::initialize::init_db`.
pub fn run_pending_migrations(conn: &Connection) -> Result<()> {
    ensure_log_table(conn)?;
    ensure_entries_table(conn)?;
    add_missing_columns(conn)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn legacy_table_is_upgraded_once() {
        let conn = Connection::open_in_memory().unwrap();
        conn.execute_batch(
            "CREATE TABLE entries (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                date TEXT NOT NULL,
                type TEXT NOT NULL,
                hours REAL NOT NULL,
                travel_time REAL DEFAULT 0
            );",
        )
        .unwrap();
        assert_eq!(detect_version(&conn).unwrap(), SchemaVersion::V1);

        run_pending_migrations(&conn).unwrap();
        run_pending_migrations(&conn).unwrap();
        assert_eq!(detect_version(&conn).unwrap(), SchemaVersion::V2);

        let applied: i64 = conn
            .query_row(
                "SELECT COUNT(*) FROM log WHERE operation = 'migration_applied'",
                [],
                |r| r.get(0),
            )
            .unwrap();
        assert_eq!(applied, 3);
    }

    #[test]
    fn fresh_database_ends_at_latest_version() {
        let conn = Connection::open_in_memory().unwrap();
        run_pending_migrations(&conn).unwrap();
        assert_eq!(detect_version(&conn).unwrap(), SchemaVersion::V2);
    }
}
