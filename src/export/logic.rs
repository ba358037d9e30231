// src/export/logic.rs

use crate::config::Settings;
use crate::core::aggregate::Summary;
use crate::core::codec::LabelCodec;
use crate::errors::{AppError, AppResult};
use crate::export::ExportFormat;
use crate::export::csv::export_csv;
use crate::export::fs_utils::{dated_path, ensure_writable, export_folder};
use crate::export::model::{ShipmentRow, rows_from_labels};
use crate::export::pdf_export::{export_invoice_pdf, export_summary_pdf};
use crate::export::xlsx::export_xlsx;
use crate::ui::messages::warning;
use chrono::NaiveDate;
use std::path::PathBuf;

/// High level export entry points. Output files land in the configured
/// export folder and are named after the export date.
pub struct ExportLogic;

impl ExportLogic {
    /// Export the whole log in `format`, or in the settings' default format.
    ///
    /// - `csv`   → `traceability_log_<date>.csv`
    /// - `excel` → `traceability_log_<date>.xlsx`
    /// - `pdf`   → invoice document for the most recent entry
    pub fn export(
        labels: &[String],
        settings: &Settings,
        format: Option<ExportFormat>,
        force: bool,
        today: NaiveDate,
    ) -> AppResult<PathBuf> {
        let format = match format {
            Some(f) => f,
            None => settings.export_format().ok_or_else(|| {
                AppError::Export(format!(
                    "Unknown export format: {}",
                    settings.default_export_format
                ))
            })?,
        };

        if format == ExportFormat::Pdf {
            return Self::invoice_document(labels, settings, force, today);
        }

        let rows = decoded_rows(labels)?;
        let folder = export_folder(settings)?;

        let path = match format {
            ExportFormat::Csv => dated_path(&folder, "traceability_log", today, "csv"),
            _ => dated_path(&folder, "traceability_log", today, "xlsx"),
        };
        ensure_writable(&path, force)?;

        match format {
            ExportFormat::Csv => export_csv(&rows, &path)?,
            _ => export_xlsx(&rows, &path)?,
        }

        Ok(path)
    }

    /// Summary report PDF (aggregate counts plus detail table).
    pub fn summary_report(
        labels: &[String],
        settings: &Settings,
        force: bool,
        today: NaiveDate,
    ) -> AppResult<PathBuf> {
        let rows = decoded_rows(labels)?;
        let summary = Summary::build(labels);

        let folder = export_folder(settings)?;
        let path = dated_path(&folder, "summary_report", today, "pdf");
        ensure_writable(&path, force)?;

        export_summary_pdf(&summary, &rows, &path, today)?;
        Ok(path)
    }

    /// Invoice PDF containing only the most recent entry.
    pub fn invoice_document(
        labels: &[String],
        settings: &Settings,
        force: bool,
        today: NaiveDate,
    ) -> AppResult<PathBuf> {
        let latest = labels
            .last()
            .ok_or_else(|| AppError::Export("No data to generate invoice.".into()))?;
        let row: ShipmentRow = LabelCodec::decode(latest)?.into();

        let folder = export_folder(settings)?;
        let path = dated_path(&folder, "invoice", today, "pdf");
        ensure_writable(&path, force)?;

        export_invoice_pdf(&row, &path)?;
        Ok(path)
    }
}

/// Rows for every decodable label; fails when there is nothing to export.
fn decoded_rows(labels: &[String]) -> AppResult<Vec<ShipmentRow>> {
    if labels.is_empty() {
        return Err(AppError::Export("No data to export.".into()));
    }

    let (rows, skipped) = rows_from_labels(labels);
    for bad in &skipped {
        warning(format!("Skipping malformed entry: {bad}"));
    }

    if rows.is_empty() {
        return Err(AppError::Export("No valid entries to export.".into()));
    }
    Ok(rows)
}
