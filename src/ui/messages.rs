//! User-facing status lines.

use crate::core::store::LoadOutcome;
use crate::errors::AppError;
use std::fmt;

/// ANSI colors
const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";

const FG_BLUE: &str = "\x1b[34m";
const FG_GREEN: &str = "\x1b[32m";
const FG_YELLOW: &str = "\x1b[33m";
const FG_RED: &str = "\x1b[31m";

/// Icons
const ICON_INFO: &str = "ℹ️";
const ICON_OK: &str = "✅";
const ICON_WARN: &str = "⚠️";
const ICON_ERR: &str = "❌";

pub fn info<T: fmt::Display>(msg: T) {
    println!("{}{}{} {}{}", FG_BLUE, BOLD, ICON_INFO, RESET, msg);
}

pub fn success<T: fmt::Display>(msg: T) {
    println!("{}{}{} {}{}", FG_GREEN, BOLD, ICON_OK, RESET, msg);
}

pub fn warning<T: fmt::Display>(msg: T) {
    println!("{}{}{} {}{}", FG_YELLOW, BOLD, ICON_WARN, RESET, msg);
}

pub fn error<T: fmt::Display>(msg: T) {
    eprintln!("{}{}{} {}{}", FG_RED, BOLD, ICON_ERR, RESET, msg);
}

pub fn header<T: fmt::Display>(msg: T) {
    println!("{}{}=== {} ==={}", FG_BLUE, BOLD, msg, RESET);
}

/// Report a recovered failure: printed for the user and traced.
pub fn report(context: &str, e: &AppError) {
    tracing::error!("{context}: {e}");
    error(format!("{context}: {e}"));
}

/// Tell the user how the log file was read.
pub fn report_load(outcome: &LoadOutcome) {
    match outcome {
        LoadOutcome::Created => info("No log file found, started a new one."),
        LoadOutcome::Loaded(_) => {}
        LoadOutcome::Reset(e) => report("Invalid logs format detected! Logs reset", e),
    }
}
