use crate::cli::parser::Cli;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};
use std::path::Path;

/// Write the configuration file (unless in test mode) and an empty log.
pub fn handle(cli: &Cli, cfg: &Config, config_path: &Path) -> AppResult<()> {
    cfg.init_all(config_path, cli.test)?;

    if !cli.test {
        success(format!("Configuration file: {}", config_path.display()));
    }
    success(format!("Log file: {}", cfg.log_path().display()));
    info(format!("Settings file: {}", cfg.settings_path().display()));

    Ok(())
}
