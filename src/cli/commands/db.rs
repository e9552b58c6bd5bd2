use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::EntryStore;
use crate::db::stats;
use crate::errors::AppResult;
use crate::ui::messages::{info, success, warning};

/// Maintenance of the entries database. Flags combine; they run in the
/// order migrate, info, check, vacuum.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Db {
        migrate,
        check,
        vacuum,
        info: show_info,
    } = cmd
    {
        let store = EntryStore::new(cfg.database_path());

        if *migrate {
            info("Upgrading schema…");
            store.initialize()?;
            success("Schema is up to date.");
        }

        if *show_info {
            stats::print_db_info(&store)?;
        }

        if *check {
            info("Running integrity check…");
            match store.integrity_check()?.as_str() {
                "ok" => success("Integrity check passed."),
                problem => warning(format!("Integrity check failed: {problem}")),
            }
        }

        if *vacuum {
            let before = file_size(&store);
            store.vacuum()?;
            success(format!(
                "Vacuum completed ({:.1} KB → {:.1} KB).",
                before,
                file_size(&store)
            ));
        }
    }

    Ok(())
}

fn file_size(store: &EntryStore) -> f64 {
    std::fs::metadata(store.path())
        .map(|m| m.len() as f64 / 1024.0)
        .unwrap_or(0.0)
}
