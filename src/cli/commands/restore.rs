use crate::cli::commands::{load_settings, open_store};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::backup::{backup_dir, resolve_in};
use crate::errors::AppResult;
use crate::ui::messages::success;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Restore { file } = cmd {
        let dir = backup_dir(&load_settings(cfg).export_folder);
        let source = resolve_in(&dir, file);

        let mut store = open_store(cfg);
        let count = store.restore(&source)?;

        success(format!(
            "Restored {count} logs from {}",
            source.display()
        ));
    }

    Ok(())
}
