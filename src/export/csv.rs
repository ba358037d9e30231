use crate::errors::{AppError, AppResult};
use crate::export::model::ShipmentRow;
use crate::export::notify_export_success;
use crate::ui::messages::info;
use std::io;
use std::path::Path;

/// CSV with the header row taken from the serde field names.
pub(crate) fn export_csv(rows: &[ShipmentRow], path: &Path) -> AppResult<()> {
    info(format!("Exporting to CSV: {}", path.display()));

    let mut wtr = csv::Writer::from_path(path)
        .map_err(|e| AppError::from(io::Error::other(format!("CSV open error: {e}"))))?;

    for row in rows {
        wtr.serialize(row)
            .map_err(|e| AppError::from(io::Error::other(format!("CSV write error: {e}"))))?;
    }

    wtr.flush()?;

    notify_export_success("CSV", path);
    Ok(())
}
