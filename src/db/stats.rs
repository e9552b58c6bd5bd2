use crate::db::migrate::{SchemaVersion, detect_version, entries_columns};
use crate::db::store::EntryStore;
use crate::errors::AppResult;
use crate::ui::messages::warning;
use crate::utils::colors::{CYAN, GREEN, GREY, RESET, YELLOW};
use crate::utils::date::parse_date;
use rusqlite::OptionalExtension;
use std::fs;

pub fn print_db_info(store: &EntryStore) -> AppResult<()> {
    let conn = store.open()?;
    let db_path = store.path().display().to_string();

    if entries_columns(&conn)?.is_empty() {
        warning(format!(
            "{} has no entries table; run `hourtracker init` or `hourtracker db --migrate`.",
            db_path
        ));
        return Ok(());
    }

    println!();

    let file_size = fs::metadata(store.path()).map(|m| m.len()).unwrap_or(0);
    let file_kb = (file_size as f64) / 1024.0;

    println!("{}• File:{} {}{}{}", CYAN, RESET, YELLOW, db_path, RESET);
    println!("{}• Size:{} {:.1} KB", CYAN, RESET, file_kb);

    let version = match detect_version(&conn)? {
        SchemaVersion::V1 => "v1 (legacy)",
        SchemaVersion::V2 => "v2",
    };
    println!("{}• Schema:{} {}", CYAN, RESET, version);

    let count: i64 = conn.query_row("SELECT COUNT(*) FROM entries", [], |row| row.get(0))?;
    println!(
        "{}• Total entries:{} {}{}{}",
        CYAN, RESET, GREEN, count, RESET
    );

    let first_date: Option<String> = conn
        .query_row("SELECT MIN(date) FROM entries", [], |row| row.get(0))
        .optional()?
        .flatten();
    let last_date: Option<String> = conn
        .query_row("SELECT MAX(date) FROM entries", [], |row| row.get(0))
        .optional()?
        .flatten();

    println!("{}• Date range:{}", CYAN, RESET);
    println!(
        "    from: {}",
        first_date
            .clone()
            .unwrap_or_else(|| format!("{GREY}--{RESET}"))
    );
    println!(
        "    to:   {}",
        last_date
            .clone()
            .unwrap_or_else(|| format!("{GREY}--{RESET}"))
    );

    // Unparsable dates only skip the average; `db --info` must still work on them.
    if let (Some(d1), Some(d2)) = (
        first_date.as_deref().and_then(parse_date),
        last_date.as_deref().and_then(parse_date),
    ) {
        let days = (d2 - d1).num_days().max(1);
        let avg = count as f64 / days as f64;
        println!("{}• Average entries/day:{} {:.2}", CYAN, RESET, avg);
    }

    println!();
    Ok(())
}
