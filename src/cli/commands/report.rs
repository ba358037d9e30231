use crate::cli::commands::{load_settings, open_store};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::export::ExportLogic;
use crate::utils::date::today;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Report { force } = cmd {
        let store = open_store(cfg);
        let settings = load_settings(cfg);
        ExportLogic::summary_report(store.labels(), &settings, *force, today())?;
    }

    Ok(())
}
