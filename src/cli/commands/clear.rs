use crate::cli::commands::{ask_confirmation, load_settings, open_store};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::backup::backup_dir;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Clear { yes } = cmd {
        let mut store = open_store(cfg);

        if store.is_empty() {
            info("No logs to clear.");
            return Ok(());
        }

        if !*yes
            && !ask_confirmation(&format!(
                "Delete all {} logs? A backup will be created.",
                store.len()
            ))
        {
            info("Operation cancelled.");
            return Ok(());
        }

        // No backup, no clear
        let settings = load_settings(cfg);
        let backup = store.backup(&backup_dir(&settings.export_folder))?;
        let removed = store.clear()?;

        success(format!(
            "All {removed} logs cleared. Backup created: {}",
            backup.display()
        ));
    }

    Ok(())
}
