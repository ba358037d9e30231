use crate::cli::commands::load_settings;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, success};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Settings {
        print,
        set,
        toggle_theme,
    } = cmd
    {
        let path = cfg.settings_path();
        let mut settings = load_settings(cfg);
        let mut changed = false;

        // Apply every assignment before saving so a bad one saves nothing
        for assignment in set {
            let (key, value) = assignment.split_once('=').ok_or_else(|| {
                AppError::InvalidInput(format!("expected KEY=VALUE, got '{assignment}'"))
            })?;
            settings.set(key.trim(), value.trim())?;
            changed = true;
        }

        if *toggle_theme {
            let theme = settings.toggle_theme().to_string();
            info(format!("Theme switched to {theme}"));
            changed = true;
        }

        if changed {
            settings.save(&path)?;
            success(format!("Settings saved to {}", path.display()));
        }

        if *print || !changed {
            println!("⚙️  Settings ({}):\n", path.display());
            println!("{}", serde_json::to_string_pretty(&settings)?);
        }
    }

    Ok(())
}
