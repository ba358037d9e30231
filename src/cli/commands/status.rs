use crate::cli::commands::{load_settings, open_store};
use crate::config::Config;
use crate::core::invoice::GatewayMode;
use crate::errors::AppResult;
use crate::ui::messages::header;

pub fn handle(cfg: &Config) -> AppResult<()> {
    let store = open_store(cfg);
    let settings = load_settings(cfg);
    let mode = GatewayMode::from_config(cfg);

    header("Status");
    match mode {
        GatewayMode::Mock => println!("🧪 Mock Mode: ON"),
        GatewayMode::Live => println!("🌐 Mock Mode: OFF (live invoicing)"),
    }
    println!("Log file:       {}", store.path().display());
    println!("Entries:        {}", store.len());
    if let Some(last) = store.last() {
        println!("Latest entry:   {last}");
    }
    println!("Settings file:  {}", cfg.settings_path().display());
    println!("Theme:          {}", settings.theme);
    println!("Export format:  {}", settings.default_export_format);

    Ok(())
}
