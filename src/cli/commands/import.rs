use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::EntryStore;
use crate::errors::AppResult;
use crate::export::ImportLogic;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Import { file } = cmd {
        let store = EntryStore::new(cfg.database_path());
        ImportLogic::import(&store, file)?;
    }
    Ok(())
}
