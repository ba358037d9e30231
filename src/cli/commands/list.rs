use crate::cli::commands::open_store;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::codec::LabelCodec;
use crate::core::filter::Query;
use crate::errors::AppResult;
use crate::models::label::{LABEL_SEPARATOR, PACKED_PREFIX, SHIPPED_PREFIX};
use crate::ui::messages::info;
use crate::utils::table::Table;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List {
        search,
        from,
        to,
        limit,
    } = cmd
    {
        let query = Query::parse(
            search.as_deref().unwrap_or(""),
            from.as_deref(),
            to.as_deref(),
        )?;

        let store = open_store(cfg);
        let matches = query.apply(store.labels());

        if matches.is_empty() {
            info("No matching entries found.");
            return Ok(());
        }

        let shown = limit.unwrap_or(matches.len()).min(matches.len());

        let mut table = Table::new(&["#", "Mushroom Type", "Tracking", "Restaurant", "Packed", "Shipped"]);
        for entry in &matches[..shown] {
            let mut row = vec![(entry.position + 1).to_string()];
            match LabelCodec::decode(entry.label) {
                Ok(l) => row.extend([
                    l.mushroom.clone(),
                    l.tracking_number(),
                    l.restaurant.clone(),
                    l.pack_date.to_string(),
                    l.ship_date.to_string(),
                ]),
                // Pack date is valid but another segment is not: show it as written
                Err(_) => row.extend(raw_segments(entry.label)),
            }
            table.add_row(row);
        }

        print!("{}", table.render());
        println!();

        if shown < matches.len() {
            info(format!("{} result(s), showing the first {shown}.", matches.len()));
        } else {
            info(format!("{} result(s).", matches.len()));
        }

        let skipped = store
            .labels()
            .iter()
            .filter(|l| LabelCodec::pack_date(l).is_err())
            .count();
        if skipped > 0 {
            tracing::warn!("{skipped} malformed entries hidden from the listing");
        }
    }

    Ok(())
}

fn raw_segments(label: &str) -> Vec<String> {
    label
        .split(LABEL_SEPARATOR)
        .map(|part| {
            part.strip_prefix(PACKED_PREFIX)
                .or_else(|| part.strip_prefix(SHIPPED_PREFIX))
                .unwrap_or(part)
                .to_string()
        })
        .collect()
}
