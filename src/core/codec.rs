//! Label codec: the only place that knows the textual label layout.
//! Filter, aggregation, exports and invoicing all decode through here.

use crate::errors::{AppError, AppResult};
use crate::models::label::{BOX_MARKER, LABEL_SEPARATOR, PACKED_PREFIX, SHIPPED_PREFIX};
use crate::models::{Catalogs, Label, ShipmentRecord};
use chrono::NaiveDate;

const SEGMENTS: usize = 5;

pub struct LabelCodec<'a> {
    catalogs: &'a Catalogs,
}

impl<'a> LabelCodec<'a> {
    pub fn new(catalogs: &'a Catalogs) -> Self {
        Self { catalogs }
    }

    /// Encode a record as its persisted label.
    ///
    /// Fails with `InvalidCatalogId` when either id is missing from its catalog.
    pub fn encode(&self, record: &ShipmentRecord) -> AppResult<String> {
        let mushroom = self.catalogs.mushroom_types.name(record.mushroom_type_id)?;
        let restaurant = self.catalogs.restaurants.name(record.restaurant_id)?;

        Ok(Self::render(&Label {
            mushroom: mushroom.to_string(),
            box_number: format!("{:03}", record.box_number),
            restaurant: restaurant.to_string(),
            pack_date: record.pack_date,
            ship_date: record.ship_date,
        }))
    }

    /// Textual form of an already decoded label.
    pub fn render(label: &Label) -> String {
        format!(
            "{mushroom}{sep}{tracking}{sep}{restaurant}{sep}{PACKED_PREFIX}{pack}{sep}{SHIPPED_PREFIX}{ship}",
            mushroom = label.mushroom,
            tracking = label.tracking_number(),
            restaurant = label.restaurant,
            pack = label.pack_date.format("%Y-%m-%d"),
            ship = label.ship_date.format("%Y-%m-%d"),
            sep = LABEL_SEPARATOR,
        )
    }

    /// Catalog-independent: labels carry names, not ids.
    pub fn decode(label: &str) -> AppResult<Label> {
        let parts: Vec<&str> = label.split(LABEL_SEPARATOR).collect();
        if parts.len() != SEGMENTS {
            return Err(AppError::malformed(
                label,
                format!("expected {SEGMENTS} segments, found {}", parts.len()),
            ));
        }

        let box_number = parts[1]
            .rsplit_once(BOX_MARKER)
            .map(|(_, digits)| digits)
            .filter(|d| !d.is_empty() && d.chars().all(|c| c.is_ascii_digit()))
            .ok_or_else(|| AppError::malformed(label, "missing BOX number"))?;

        let pack_date = labeled_date(label, parts[3], PACKED_PREFIX)?;
        let ship_date = labeled_date(label, parts[4], SHIPPED_PREFIX)?;

        Ok(Label {
            mushroom: parts[0].to_string(),
            box_number: box_number.to_string(),
            restaurant: parts[2].to_string(),
            pack_date,
            ship_date,
        })
    }

    /// Pack date only; used by the date-range filter.
    ///
    /// Needs the five segments and a valid `Packed:` segment. The box number
    /// and ship date are not checked.
    pub fn pack_date(label: &str) -> AppResult<NaiveDate> {
        let parts: Vec<&str> = label.split(LABEL_SEPARATOR).collect();
        if parts.len() != SEGMENTS {
            return Err(AppError::malformed(
                label,
                format!("expected {SEGMENTS} segments, found {}", parts.len()),
            ));
        }
        labeled_date(label, parts[3], PACKED_PREFIX)
    }
}

fn labeled_date(label: &str, segment: &str, prefix: &str) -> AppResult<NaiveDate> {
    let raw = segment
        .strip_prefix(prefix)
        .ok_or_else(|| AppError::malformed(label, format!("missing '{}' marker", prefix.trim())))?;

    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .map_err(|_| AppError::malformed(label, format!("invalid date '{raw}'")))
}
