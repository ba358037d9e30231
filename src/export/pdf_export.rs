// src/export/pdf_export.rs

use crate::core::aggregate::Summary;
use crate::errors::{AppError, AppResult};
use crate::export::model::{ShipmentRow, get_document_headers, rows_to_table};
use crate::export::notify_export_success;
use crate::export::pdf::{Block, PdfManager};
use crate::ui::messages::info;
use chrono::NaiveDate;
use std::path::Path;

pub(crate) const SUMMARY_TITLE: &str = "Mushroom Deliveries Summary";
pub(crate) const INVOICE_TITLE: &str = "Mushroom Traceability Invoice";

/// Summary report: export date, totals, per-type counts and the full detail table.
pub(crate) fn export_summary_pdf(
    summary: &Summary,
    rows: &[ShipmentRow],
    path: &Path,
    today: NaiveDate,
) -> AppResult<()> {
    info(format!("Exporting summary report: {}", path.display()));

    let mut blocks = vec![
        Block::Paragraph(format!("Export Date: {}", today.format("%Y-%m-%d"))),
        Block::Paragraph(format!("Total Deliveries: {}", summary.total)),
        Block::Heading("Deliveries per Mushroom Type".into()),
    ];
    blocks.extend(
        summary
            .by_mushroom
            .iter()
            .map(|(name, count)| Block::Bullet(format!("{name}: {count} deliveries"))),
    );
    blocks.push(Block::Heading("Detailed Deliveries".into()));

    let mut pdf = PdfManager::new();
    pdf.write_document(SUMMARY_TITLE, &blocks, &get_document_headers(), &rows_to_table(rows));
    pdf.save(path)
        .map_err(|e| AppError::Export(format!("PDF export error: {e}")))?;

    notify_export_success("Summary PDF", path);
    Ok(())
}

/// Invoice document holding a single record.
pub(crate) fn export_invoice_pdf(row: &ShipmentRow, path: &Path) -> AppResult<()> {
    info(format!("Exporting invoice: {}", path.display()));

    let mut pdf = PdfManager::new();
    pdf.write_document(
        INVOICE_TITLE,
        &[],
        &get_document_headers(),
        &rows_to_table(std::slice::from_ref(row)),
    );
    pdf.save(path)
        .map_err(|e| AppError::Export(format!("PDF export error: {e}")))?;

    notify_export_success("Invoice PDF", path);
    Ok(())
}
