use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::EntryStore;
use crate::errors::AppResult;
use crate::export::ExportLogic;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        range,
        extended,
        force,
    } = cmd
    {
        let store = EntryStore::new(cfg.database_path());
        ExportLogic::export(
            &store,
            *format,
            file,
            range,
            *extended || cfg.csv_extended,
            *force,
        )?;
    }
    Ok(())
}

