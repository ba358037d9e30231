// src/export/excel_date.rs

use chrono::NaiveDate;

pub(crate) const EXCEL_DATE_FORMAT: &str = "yyyy-mm-dd";

/// Interpret an ISO date cell as an Excel serial (days since 1899-12-30).
pub(crate) fn parse_to_excel_date(s: &str) -> Option<f64> {
    let d = NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()?;
    let epoch = NaiveDate::from_ymd_opt(1899, 12, 30)?;
    Some((d - epoch).num_days() as f64)
}
