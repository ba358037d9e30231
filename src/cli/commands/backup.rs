use crate::cli::commands::{load_settings, open_store};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::backup::{BackupLogic, backup_dir};
use crate::errors::AppResult;
use crate::ui::messages::success;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Backup { compress } = cmd {
        let store = open_store(cfg);
        let settings = load_settings(cfg);

        let mut path = store.backup(&backup_dir(&settings.export_folder))?;
        if *compress {
            path = BackupLogic::compress(&path)?;
        }

        success(format!(
            "Backup of {} logs created: {}",
            store.len(),
            path.display()
        ));
    }

    Ok(())
}
