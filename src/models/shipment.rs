use crate::errors::{AppError, AppResult};
use crate::utils::date::parse_date;
use chrono::NaiveDate;

/// One shipment as entered in the form, before it is encoded as a label.
///
/// `ship_date` may precede `pack_date`: the ordering is not validated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShipmentRecord {
    pub mushroom_type_id: u32,
    pub box_number: u32,
    pub restaurant_id: u32,
    pub pack_date: NaiveDate,
    pub ship_date: NaiveDate,
}

impl ShipmentRecord {
    /// Build a record from raw form fields.
    pub fn parse(
        mushroom_type_id: &str,
        box_number: &str,
        restaurant_id: &str,
        pack_date: &str,
        ship_date: &str,
    ) -> AppResult<Self> {
        Ok(Self {
            mushroom_type_id: parse_number("mushroom type id", mushroom_type_id)?,
            box_number: parse_number("box number", box_number)?,
            restaurant_id: parse_number("restaurant id", restaurant_id)?,
            pack_date: parse_date(pack_date.trim())
                .ok_or_else(|| AppError::InvalidDate(pack_date.to_string()))?,
            ship_date: parse_date(ship_date.trim())
                .ok_or_else(|| AppError::InvalidDate(ship_date.to_string()))?,
        })
    }
}

fn parse_number(field: &str, raw: &str) -> AppResult<u32> {
    raw.trim()
        .parse::<u32>()
        .map_err(|_| AppError::InvalidInput(format!("{field} must be a non-negative integer, got '{raw}'")))
}
