use crate::cli::commands::{load_settings, open_store};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::codec::LabelCodec;
use crate::errors::AppResult;
use crate::models::ShipmentRecord;
use crate::ui::messages::success;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Add {
        mushroom,
        box_number,
        pack_date,
        ship_date,
        restaurant,
    } = cmd
    {
        // Validate and encode before touching the log
        let restaurant = match restaurant {
            Some(r) => r.clone(),
            None => load_settings(cfg).default_restaurant_id.to_string(),
        };
        let record = ShipmentRecord::parse(mushroom, box_number, &restaurant, pack_date, ship_date)?;
        let label = LabelCodec::new(&cfg.catalogs).encode(&record)?;

        let mut store = open_store(cfg);
        store.append(label.clone())?;

        success(format!("Added:\n{label}"));
    }

    Ok(())
}
