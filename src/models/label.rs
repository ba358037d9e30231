use chrono::NaiveDate;
use serde::Serialize;

/// Separator between the five label segments.
pub const LABEL_SEPARATOR: &str = " - ";
pub const BOX_MARKER: &str = "BOX";
pub const PACKED_PREFIX: &str = "Packed: ";
pub const SHIPPED_PREFIX: &str = "Shipped: ";

/// Decoded view of a persisted label:
///
/// `<mushroom> - <pack_date>-BOX<nnn> - <restaurant> - Packed: <pack_date> - Shipped: <ship_date>`
///
/// Catalog ids are not part of the encoded form, only the display names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Label {
    pub mushroom: String,
    /// Box number exactly as written in the label (zero-padded, at least 3 digits).
    pub box_number: String,
    pub restaurant: String,
    pub pack_date: NaiveDate,
    pub ship_date: NaiveDate,
}

impl Label {
    pub fn tracking_number(&self) -> String {
        format!("{}-{}{}", self.pack_date, BOX_MARKER, self.box_number)
    }
}
