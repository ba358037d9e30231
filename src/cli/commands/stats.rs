use crate::cli::commands::open_store;
use crate::config::Config;
use crate::core::aggregate::Summary;
use crate::errors::AppResult;
use crate::ui::messages::{header, info, warning};
use crate::utils::formatting::bar_chart;

const BAR_WIDTH: usize = 40;

pub fn handle(cfg: &Config) -> AppResult<()> {
    let store = open_store(cfg);

    if store.is_empty() {
        warning("No entries to display charts.");
        return Ok(());
    }

    let summary = Summary::build(store.labels());

    header("Deliveries per Mushroom Type");
    let by_type: Vec<(&str, usize)> = summary
        .by_mushroom
        .iter()
        .map(|(k, v)| (k.as_str(), *v))
        .collect();
    print!("{}", bar_chart(&by_type, BAR_WIDTH));
    println!();

    header("Deliveries per Pack Date");
    let by_date: Vec<(String, usize)> = summary
        .by_pack_date
        .iter()
        .map(|(d, v)| (d.to_string(), *v))
        .collect();
    print!("{}", bar_chart(&by_date, BAR_WIDTH));
    println!();

    info(format!("Total deliveries: {}", summary.total));
    if summary.skipped > 0 {
        warning(format!("{} malformed entries were not counted.", summary.skipped));
    }

    Ok(())
}
