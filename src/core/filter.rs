//! Filtered view of the store: case-insensitive text match plus an optional
//! inclusive pack-date range. Recomputed from scratch on every call.

use crate::core::codec::LabelCodec;
use crate::errors::{AppError, AppResult};
use crate::utils::date::parse_date;
use chrono::NaiveDate;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Query {
    pub text: String,
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
}

/// A matching entry together with its position in the full store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilteredEntry<'a> {
    pub position: usize,
    pub label: &'a str,
}

impl Query {
    /// Build a query from raw form fields; blank bounds mean "open".
    pub fn parse(text: &str, start: Option<&str>, end: Option<&str>) -> AppResult<Self> {
        Ok(Self {
            text: text.to_string(),
            start: parse_bound(start)?,
            end: parse_bound(end)?,
        })
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty() && self.start.is_none() && self.end.is_none()
    }

    /// Entries matching the query, in store order.
    ///
    /// Labels whose pack date cannot be decoded never match.
    pub fn apply<'a>(&self, labels: &'a [String]) -> Vec<FilteredEntry<'a>> {
        let needle = self.text.to_lowercase();

        labels
            .iter()
            .enumerate()
            .filter(|(_, label)| needle.is_empty() || label.to_lowercase().contains(&needle))
            .filter(|(_, label)| match LabelCodec::pack_date(label) {
                Ok(packed) => self.in_range(packed),
                Err(_) => false,
            })
            .map(|(position, label)| FilteredEntry {
                position,
                label: label.as_str(),
            })
            .collect()
    }

    fn in_range(&self, date: NaiveDate) -> bool {
        self.start.is_none_or(|s| date >= s) && self.end.is_none_or(|e| date <= e)
    }
}

fn parse_bound(raw: Option<&str>) -> AppResult<Option<NaiveDate>> {
    match raw.map(str::trim) {
        None | Some("") => Ok(None),
        Some(s) => parse_date(s)
            .map(Some)
            .ok_or_else(|| AppError::InvalidDate(s.to_string())),
    }
}
