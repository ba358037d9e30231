// src/export/fs_utils.rs

use crate::config::Settings;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, warning};
use crate::utils::path::expand_tilde;
use chrono::NaiveDate;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// Check that a file may be created or overwritten.
///
/// - file does not exist → Ok
/// - file exists and `force` → Ok
/// - file exists without `force` → ask the user
pub(crate) fn ensure_writable(path: &Path, force: bool) -> AppResult<()> {
    if !path.exists() || force {
        return Ok(());
    }

    warning(format!("The file '{}' already exists.", path.display()));

    print!("Overwrite? [y/N]: ");
    io::stdout().flush().ok();

    let mut answer = String::new();
    io::stdin().read_line(&mut answer).map_err(AppError::from)?;
    let ans = answer.trim().to_ascii_lowercase();

    if ans == "y" || ans == "yes" {
        info("Existing file will be overwritten.");
        Ok(())
    } else {
        Err(AppError::Export(
            "export cancelled: existing file not overwritten".into(),
        ))
    }
}

/// Folder configured for exports (`.` when unset), created if missing.
pub fn export_folder(settings: &Settings) -> AppResult<PathBuf> {
    let folder = if settings.export_folder.trim().is_empty() {
        PathBuf::from(".")
    } else {
        expand_tilde(&settings.export_folder)
    };
    fs::create_dir_all(&folder)?;
    Ok(folder)
}

/// `<folder>/<stem>_<YYYY-MM-DD>.<ext>`
pub(crate) fn dated_path(folder: &Path, stem: &str, today: NaiveDate, ext: &str) -> PathBuf {
    folder.join(format!("{stem}_{}.{ext}", today.format("%Y-%m-%d")))
}
