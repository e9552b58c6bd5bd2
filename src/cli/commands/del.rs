use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::del::DeleteLogic;
use crate::db::EntryStore;
use crate::errors::AppResult;
use crate::ui::messages::{confirm, info};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Del { id, yes } = cmd {
        if !*yes && !confirm(format!("Delete entry #{}? This action is irreversible.", id)) {
            info("Operation cancelled.");
            return Ok(());
        }

        let store = EntryStore::new(cfg.database_path());
        DeleteLogic::apply(&store, *id)?;
    }

    Ok(())
}
