use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::reset::ResetLogic;
use crate::db::EntryStore;
use crate::errors::AppResult;
use crate::ui::messages::{confirm, info};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Reset { yes } = cmd {
        if !*yes && !confirm("Delete ALL entries? This action is irreversible.") {
            info("Operation cancelled.");
            return Ok(());
        }

        let store = EntryStore::new(cfg.database_path());
        ResetLogic::apply(&store)?;
    }

    Ok(())
}
