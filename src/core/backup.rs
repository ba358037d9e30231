use crate::errors::{AppError, AppResult};
use chrono::NaiveDateTime;
use serde_json::Value;
use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};
use zip::{ZipArchive, ZipWriter};
use zip::write::FileOptions;

pub const BACKUP_DIR_NAME: &str = "backups";
const BACKUP_PREFIX: &str = "logs_backup_";

/// `<export_folder>/backups`, with `.` standing in for an unset folder.
pub fn backup_dir(export_folder: &str) -> PathBuf {
    let base = if export_folder.trim().is_empty() {
        PathBuf::from(".")
    } else {
        crate::utils::path::expand_tilde(export_folder)
    };
    base.join(BACKUP_DIR_NAME)
}

/// `logs_backup_<YYYY-MM-DD_HHMMSS>.json`; a `_N` suffix is added when a
/// backup with the same second already exists.
pub fn snapshot_path(dir: &Path, now: NaiveDateTime) -> PathBuf {
    let stamp = now.format("%Y-%m-%d_%H%M%S");
    let first = dir.join(format!("{BACKUP_PREFIX}{stamp}.json"));
    if !first.exists() {
        return first;
    }

    (1..)
        .map(|n| dir.join(format!("{BACKUP_PREFIX}{stamp}_{n}.json")))
        .find(|p| !p.exists())
        .unwrap_or(first)
}

/// Read a JSON file that must hold a list of strings.
pub(crate) fn read_label_file(path: &Path) -> AppResult<Vec<String>> {
    let content = fs::read_to_string(path)?;
    parse_label_list(path, &content)
}

/// Like `read_label_file`, but also accepts a `.zip` written by `BackupLogic::compress`.
pub(crate) fn read_backup_file(path: &Path) -> AppResult<Vec<String>> {
    if !is_zip(path) {
        return read_label_file(path);
    }

    let file = fs::File::open(path)?;
    let mut archive = ZipArchive::new(file).map_err(std::io::Error::other)?;
    if archive.len() == 0 {
        return Err(AppError::Format(format!("{} is an empty archive", path.display())));
    }

    let mut content = String::new();
    archive
        .by_index(0)
        .map_err(std::io::Error::other)?
        .read_to_string(&mut content)?;

    parse_label_list(path, &content)
}

fn is_zip(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext == "zip")
}

fn parse_label_list(path: &Path, content: &str) -> AppResult<Vec<String>> {
    let value: Value = serde_json::from_str(content)?;

    let Value::Array(items) = value else {
        return Err(AppError::Format(format!(
            "{} does not contain a list of labels",
            path.display()
        )));
    };

    items
        .into_iter()
        .enumerate()
        .map(|(i, item)| match item {
            Value::String(s) => Ok(s),
            other => Err(AppError::Format(format!(
                "{}: entry {} is not a string ({other})",
                path.display(),
                i + 1
            ))),
        })
        .collect()
}

pub(crate) fn write_label_file(path: &Path, labels: &[String]) -> AppResult<()> {
    let json = serde_json::to_string_pretty(labels)?;
    fs::write(path, json)?;
    Ok(())
}

pub struct BackupLogic;

impl BackupLogic {
    /// JSON and zipped backups in `dir`, newest first (names sort chronologically).
    pub fn list(dir: &Path) -> AppResult<Vec<PathBuf>> {
        if !dir.exists() {
            return Ok(Vec::new());
        }

        let mut files: Vec<PathBuf> = fs::read_dir(dir)?
            .filter_map(|entry| entry.ok().map(|e| e.path()))
            .filter(|p| p.is_file() && (p.extension().is_some_and(|ext| ext == "json") || is_zip(p)))
            .collect();

        files.sort();
        files.reverse();
        Ok(files)
    }

    /// Delete one backup file; `name` may be a bare file name inside `dir`.
    pub fn delete(dir: &Path, name: &str) -> AppResult<PathBuf> {
        let path = resolve_in(dir, name);
        if !path.is_file() {
            return Err(AppError::InvalidInput(format!(
                "backup not found: {}",
                path.display()
            )));
        }
        fs::remove_file(&path)?;
        Ok(path)
    }

    /// Compress a backup into a `.zip` next to it and remove the plain copy.
    pub fn compress(path: &Path) -> AppResult<PathBuf> {
        let zip_path = path.with_extension("zip");
        let file = fs::File::create(&zip_path)?;
        let mut zip = ZipWriter::new(file);

        let options: FileOptions<'_, ()> =
            FileOptions::default().compression_method(zip::CompressionMethod::Deflated);

        let entry_name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .ok_or_else(|| AppError::Other(format!("invalid backup path: {}", path.display())))?;

        let mut f = fs::File::open(path)?;
        zip.start_file(entry_name, options)
            .map_err(std::io::Error::other)?;

        std::io::copy(&mut f, &mut zip)?;
        zip.finish().map_err(std::io::Error::other)?;

        if let Err(e) = fs::remove_file(path) {
            tracing::warn!("failed to remove uncompressed backup {}: {e}", path.display());
        }

        Ok(zip_path)
    }
}

/// Bare names are looked up inside `dir`; anything with a path component is used as is.
pub fn resolve_in(dir: &Path, name: &str) -> PathBuf {
    let p = Path::new(name);
    if p.components().count() > 1 || p.is_absolute() {
        p.to_path_buf()
    } else {
        dir.join(p)
    }
}
