use crate::config::Config;
use crate::errors::AppResult;
use crate::models::catalog::Catalog;
use crate::ui::messages::{header, warning};
use crate::utils::table::Table;
use std::collections::BTreeSet;

pub fn handle(cfg: &Config) -> AppResult<()> {
    print_catalog("Mushroom Types", &cfg.catalogs.mushroom_types);
    print_catalog("Restaurants", &cfg.catalogs.restaurants);
    Ok(())
}

fn print_catalog(title: &str, catalog: &Catalog) {
    header(title);

    let mut table = Table::new(&["Id", "Name"]);
    for (id, name) in catalog.iter() {
        table.add_row(vec![id.to_string(), name.to_string()]);
    }
    print!("{}", table.render());
    println!();

    // Labels carry names only, so shared names cannot be told apart later
    let names: BTreeSet<&str> = catalog.iter().map(|(_, n)| n).collect();
    for name in names {
        let ids = catalog.ids_for(name);
        if ids.len() > 1 {
            warning(format!("'{name}' is used by ids {ids:?}"));
        }
    }
}
