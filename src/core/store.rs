//! Record store: the ordered list of encoded labels and its JSON file.
//!
//! Insertion order is entry order (not date order). Every mutation is
//! persisted straight away; if the write fails the mutation is rolled back
//! so memory and disk keep agreeing.

use crate::core::backup::{read_backup_file, read_label_file, snapshot_path, write_label_file};
use crate::errors::{AppError, AppResult};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// What happened when the backing file was read.
#[derive(Debug)]
pub enum LoadOutcome {
    /// No file existed: an empty one was created.
    Created,
    /// The file was read; holds the number of labels.
    Loaded(usize),
    /// The file was unreadable or not a list of strings; the store is empty.
    Reset(AppError),
}

#[derive(Debug)]
pub struct RecordStore {
    path: PathBuf,
    labels: Vec<String>,
}

impl RecordStore {
    /// Empty store bound to `path`. Nothing is read or written.
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self {
            path: path.into(),
            labels: Vec::new(),
        }
    }

    /// Bind to `path` and load it.
    pub fn open<P: Into<PathBuf>>(path: P) -> (Self, LoadOutcome) {
        let mut store = Self::new(path);
        let outcome = store.load();
        (store, outcome)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Most recent entry.
    pub fn last(&self) -> Option<&str> {
        self.labels.last().map(String::as_str)
    }

    /// Never fails: a bad file leaves an empty store and the reason in the outcome.
    pub fn load(&mut self) -> LoadOutcome {
        if !self.path.exists() {
            self.labels.clear();
            return match self.save() {
                Ok(()) => {
                    info!("created empty log file {}", self.path.display());
                    LoadOutcome::Created
                }
                Err(e) => LoadOutcome::Reset(e),
            };
        }

        match read_label_file(&self.path) {
            Ok(labels) => {
                debug!("loaded {} labels from {}", labels.len(), self.path.display());
                self.labels = labels;
                LoadOutcome::Loaded(self.labels.len())
            }
            Err(e) => {
                warn!("log file {} rejected: {e}", self.path.display());
                self.labels.clear();
                LoadOutcome::Reset(e)
            }
        }
    }

    /// Overwrite the backing file with the full sequence.
    pub fn save(&self) -> AppResult<()> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }
        write_label_file(&self.path, &self.labels)
    }

    pub fn append(&mut self, label: String) -> AppResult<()> {
        self.labels.push(label);
        if let Err(e) = self.save() {
            self.labels.pop();
            return Err(e);
        }
        Ok(())
    }

    /// Remove the entry at `index` (0-based) and return it.
    pub fn remove_at(&mut self, index: usize) -> AppResult<String> {
        if index >= self.labels.len() {
            return Err(AppError::InvalidIndex(index));
        }

        let removed = self.labels.remove(index);
        if let Err(e) = self.save() {
            self.labels.insert(index, removed);
            return Err(e);
        }
        Ok(removed)
    }

    /// Drop every entry. Returns how many were removed.
    pub fn clear(&mut self) -> AppResult<usize> {
        let previous = std::mem::take(&mut self.labels);
        if let Err(e) = self.save() {
            self.labels = previous;
            return Err(e);
        }
        Ok(previous.len())
    }

    /// Write the current sequence to a new timestamped file under `dir`.
    pub fn backup(&self, dir: &Path) -> AppResult<PathBuf> {
        fs::create_dir_all(dir)?;
        let target = snapshot_path(dir, chrono::Local::now().naive_local());
        write_label_file(&target, &self.labels)?;
        info!("backup of {} labels written to {}", self.labels.len(), target.display());
        Ok(target)
    }

    /// Replace the store with the contents of `path` (JSON or zipped backup) and persist it.
    ///
    /// A file that is not a JSON list of strings empties the store (without
    /// touching the log file) and returns `Format`/`Json`.
    pub fn restore(&mut self, path: &Path) -> AppResult<usize> {
        let restored = match read_backup_file(path) {
            Ok(labels) => labels,
            Err(e) => {
                warn!("restore from {} rejected: {e}", path.display());
                self.labels.clear();
                return Err(e);
            }
        };

        let previous = std::mem::replace(&mut self.labels, restored);
        if let Err(e) = self.save() {
            self.labels = previous;
            return Err(e);
        }

        info!("restored {} labels from {}", self.labels.len(), path.display());
        Ok(self.labels.len())
    }
}
