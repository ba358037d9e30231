//! Unified application error type.
//! All modules (core, config, export, cli) return AppError so failures are
//! reported the same way and never take the process down with a panic.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    // ---------------------------
    // Form input
    // ---------------------------
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Invalid date format (expected YYYY-MM-DD): {0}")]
    InvalidDate(String),

    #[error("Unknown {kind} id: {id}")]
    InvalidCatalogId { kind: &'static str, id: u32 },

    #[error("Invalid log position: {0}")]
    InvalidIndex(usize),

    // ---------------------------
    // Persisted data
    // ---------------------------
    #[error("Malformed label '{label}': {reason}")]
    MalformedLabel { label: String, reason: String },

    #[error("Invalid file format: {0}")]
    Format(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("Export error: {0}")]
    Export(String),

    // ---------------------------
    // Invoicing
    // ---------------------------
    #[error("Invoice error: {0}")]
    Gateway(String),

    // ---------------------------
    // Generic fallback
    // ---------------------------
    #[error("Internal error: {0}")]
    Other(String),
}

impl AppError {
    pub fn malformed(label: &str, reason: impl Into<String>) -> Self {
        AppError::MalformedLabel {
            label: label.to_string(),
            reason: reason.into(),
        }
    }
}

pub type AppResult<T> = Result<T, AppError>;
