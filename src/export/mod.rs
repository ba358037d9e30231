// src/export/mod.rs

mod csv;
mod excel_date;
mod fs_utils;
pub mod logic;
mod model;
mod pdf;
mod pdf_export;
mod xlsx;

pub use fs_utils::export_folder;
pub use logic::ExportLogic;
pub use model::{ShipmentRow, rows_from_labels};

use crate::ui::messages::success;
use clap::ValueEnum;
use std::path::Path;

/// Shared completion message for every export.
pub(crate) fn notify_export_success(label: &str, path: &Path) {
    success(format!("{label} export completed: {}", path.display()));
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    Csv,
    #[value(alias = "xlsx")]
    Excel,
    /// Invoice document for the most recent entry.
    Pdf,
}

impl ExportFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Excel => "excel",
            ExportFormat::Pdf => "pdf",
        }
    }

    /// Parse the value stored in the settings document.
    pub fn from_setting(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "csv" => Some(ExportFormat::Csv),
            "excel" | "xlsx" => Some(ExportFormat::Excel),
            "pdf" => Some(ExportFormat::Pdf),
            _ => None,
        }
    }
}
