// src/export/model.rs

use crate::core::codec::LabelCodec;
use crate::models::Label;
use serde::Serialize;

/// Flat row shared by every export format.
#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct ShipmentRow {
    #[serde(rename = "Mushroom Type")]
    pub mushroom_type: String,
    #[serde(rename = "Box Number")]
    pub box_number: String,
    #[serde(rename = "Restaurant Name")]
    pub restaurant_name: String,
    #[serde(rename = "Packed Date")]
    pub packed_date: String,
    #[serde(rename = "Shipped Date")]
    pub shipped_date: String,
}

impl From<Label> for ShipmentRow {
    fn from(l: Label) -> Self {
        Self {
            mushroom_type: l.mushroom,
            box_number: l.box_number,
            restaurant_name: l.restaurant,
            packed_date: l.pack_date.format("%Y-%m-%d").to_string(),
            shipped_date: l.ship_date.format("%Y-%m-%d").to_string(),
        }
    }
}

/// Decode every label into a row; returns the rows and the undecodable labels.
pub fn rows_from_labels<S: AsRef<str>>(labels: &[S]) -> (Vec<ShipmentRow>, Vec<String>) {
    let mut rows = Vec::with_capacity(labels.len());
    let mut skipped = Vec::new();

    for raw in labels {
        match LabelCodec::decode(raw.as_ref()) {
            Ok(label) => rows.push(label.into()),
            Err(_) => skipped.push(raw.as_ref().to_string()),
        }
    }

    (rows, skipped)
}

/// Column headers for CSV / XLSX.
pub(crate) fn get_headers() -> Vec<&'static str> {
    vec![
        "Mushroom Type",
        "Box Number",
        "Restaurant Name",
        "Packed Date",
        "Shipped Date",
    ]
}

/// Shorter headers used by the PDF documents.
pub(crate) fn get_document_headers() -> Vec<&'static str> {
    vec!["Mushroom Type", "Box Number", "Restaurant", "Pack Date", "Ship Date"]
}

pub(crate) fn row_to_cells(r: &ShipmentRow) -> Vec<String> {
    vec![
        r.mushroom_type.clone(),
        r.box_number.clone(),
        r.restaurant_name.clone(),
        r.packed_date.clone(),
        r.shipped_date.clone(),
    ]
}

pub(crate) fn rows_to_table(rows: &[ShipmentRow]) -> Vec<Vec<String>> {
    rows.iter().map(row_to_cells).collect()
}
