//! Formatting utilities used for CLI outputs.

use unicode_width::UnicodeWidthStr;

pub fn pad_right(s: &str, width: usize) -> String {
    let w = UnicodeWidthStr::width(s);
    format!("{s}{}", " ".repeat(width.saturating_sub(w)))
}

/// Horizontal text bar chart, one line per `(label, count)`.
/// Bars are scaled so the largest count spans `max_bar` cells.
pub fn bar_chart<K: AsRef<str>>(items: &[(K, usize)], max_bar: usize) -> String {
    let label_w = items
        .iter()
        .map(|(k, _)| UnicodeWidthStr::width(k.as_ref()))
        .max()
        .unwrap_or(0);
    let peak = items.iter().map(|(_, c)| *c).max().unwrap_or(0);

    let mut out = String::new();
    for (k, count) in items {
        let len = if peak == 0 {
            0
        } else {
            (count * max_bar).div_ceil(peak)
        };
        out.push_str(&format!(
            "{} | {} {}\n",
            pad_right(k.as_ref(), label_w),
            "█".repeat(len),
            count
        ));
    }
    out
}
