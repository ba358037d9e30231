use crate::cli::commands::{ask_confirmation, open_store};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, success};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Del { position, yes } = cmd {
        let mut store = open_store(cfg);

        if *position == 0 || *position > store.len() {
            return Err(AppError::InvalidIndex(*position));
        }

        let label = &store.labels()[*position - 1];
        if !*yes && !ask_confirmation(&format!("Delete entry #{position}?\n{label}")) {
            info("Operation cancelled.");
            return Ok(());
        }

        let removed = store.remove_at(*position - 1)?;
        success(format!("Log deleted successfully: {removed}"));
    }

    Ok(())
}
