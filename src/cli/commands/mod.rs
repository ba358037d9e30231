pub mod add;
pub mod backup;
pub mod backups;
pub mod catalog;
pub mod clear;
pub mod config;
pub mod del;
pub mod export;
pub mod init;
pub mod invoice;
pub mod list;
pub mod report;
pub mod restore;
pub mod settings;
pub mod stats;
pub mod status;

use crate::config::{Config, Settings};
use crate::core::store::{LoadOutcome, RecordStore};
use crate::ui::messages::{report, report_load, warning};
use std::fs;
use std::io::{self, Write};

/// Open the shipment log, reporting (never failing on) a missing or corrupt file.
///
/// A corrupt file is copied to `<file>.corrupt` before anything can overwrite it.
pub(crate) fn open_store(cfg: &Config) -> RecordStore {
    let (store, outcome) = RecordStore::open(cfg.log_path());
    report_load(&outcome);

    if let LoadOutcome::Reset(_) = outcome
        && store.path().exists()
    {
        let mut aside = store.path().as_os_str().to_owned();
        aside.push(".corrupt");
        match fs::copy(store.path(), &aside) {
            Ok(_) => warning(format!("Unreadable log kept as {}", aside.to_string_lossy())),
            Err(e) => tracing::warn!("could not keep a copy of the unreadable log: {e}"),
        }
    }

    store
}

/// Settings merged over defaults; a broken file is reported and ignored.
pub(crate) fn load_settings(cfg: &Config) -> Settings {
    let (settings, problem) = Settings::load(&cfg.settings_path());
    if let Some(e) = problem {
        report("Failed to load settings", &e);
    }
    settings
}

/// Ask a yes/no confirmation from the user
pub(crate) fn ask_confirmation(prompt: &str) -> bool {
    warning(prompt);
    print!("Confirm [y/N]: ");
    let _ = io::stdout().flush();

    let mut s = String::new();
    if io::stdin().read_line(&mut s).is_ok() {
        matches!(s.trim().to_lowercase().as_str(), "y" | "yes")
    } else {
        false
    }
}
