use crate::cli::parser::Cli;
use crate::config::Config;
use crate::db::EntryStore;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};

/// Handle the `init` command
///
/// Creates the storage directory, writes the configuration file (skipped
/// in test mode) and creates or upgrades the SQLite database.
pub fn handle(cli: &Cli) -> AppResult<()> {
    let cfg = Config::init_all(cli.db.as_deref(), cli.test)?;

    info("Initializing hourtracker…");
    if !cli.test {
        println!("📄 Config file : {}", Config::config_file().display());
    }
    println!("🗄️  Database   : {}", cfg.database);

    let store = EntryStore::new(cfg.database_path());
    store.initialize()?;
    store.audit("init", &cfg.database, "Database initialized")?;

    success(format!("Database initialized at {}", cfg.database));
    Ok(())
}
