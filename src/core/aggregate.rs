use crate::core::codec::LabelCodec;
use chrono::NaiveDate;
use std::collections::BTreeMap;

/// Deliveries per mushroom type. Undecodable labels are ignored.
pub fn count_by_mushroom_type<S: AsRef<str>>(labels: &[S]) -> BTreeMap<String, usize> {
    let mut counts = BTreeMap::new();
    for label in labels.iter().filter_map(|l| LabelCodec::decode(l.as_ref()).ok()) {
        *counts.entry(label.mushroom).or_insert(0) += 1;
    }
    counts
}

/// Deliveries per pack date, ascending by date.
pub fn count_by_pack_date<S: AsRef<str>>(labels: &[S]) -> BTreeMap<NaiveDate, usize> {
    let mut counts = BTreeMap::new();
    for date in labels
        .iter()
        .filter_map(|l| LabelCodec::pack_date(l.as_ref()).ok())
    {
        *counts.entry(date).or_insert(0) += 1;
    }
    counts
}

/// Both tallies plus totals, as shown by `stats` and the summary report.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Summary {
    pub total: usize,
    pub skipped: usize,
    pub by_mushroom: BTreeMap<String, usize>,
    pub by_pack_date: BTreeMap<NaiveDate, usize>,
}

impl Summary {
    pub fn build<S: AsRef<str>>(labels: &[S]) -> Self {
        let decodable = labels
            .iter()
            .filter(|l| LabelCodec::decode(l.as_ref()).is_ok())
            .count();

        Self {
            total: labels.len(),
            skipped: labels.len() - decodable,
            by_mushroom: count_by_mushroom_type(labels),
            by_pack_date: count_by_pack_date(labels),
        }
    }
}
