use crate::cli::commands::load_settings;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::backup::{BackupLogic, backup_dir};
use crate::errors::AppResult;
use crate::ui::messages::{info, success};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Backups { delete } = cmd {
        let dir = backup_dir(&load_settings(cfg).export_folder);

        if let Some(name) = delete {
            let removed = BackupLogic::delete(&dir, name)?;
            success(format!("Backup deleted: {}", removed.display()));
            return Ok(());
        }

        let files = BackupLogic::list(&dir)?;
        if files.is_empty() {
            info(format!("No backups found in {}", dir.display()));
            return Ok(());
        }

        info(format!("Backups in {} (newest first):", dir.display()));
        for f in files {
            if let Some(name) = f.file_name() {
                println!("  {}", name.to_string_lossy());
            }
        }
    }

    Ok(())
}
