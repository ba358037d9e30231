use crate::errors::{AppError, AppResult};
use crate::models::Catalogs;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

pub mod settings;

pub use settings::Settings;

/// Environment flag selecting the mock gateway ("1", the default) or the live one.
pub const ENV_USE_MOCK: &str = "USE_MOCK_SQUARE";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_log_file")]
    pub log_file: String,
    #[serde(default = "default_settings_file")]
    pub settings_file: String,
    #[serde(default = "default_use_mock")]
    pub use_mock_gateway: bool,
    #[serde(default)]
    pub square: SquareConfig,
    #[serde(default)]
    pub catalogs: Catalogs,
}

/// Credentials for the live invoicing gateway.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SquareConfig {
    pub access_token: String,
    pub location_id: String,
    pub order_id: String,
    pub customer_id: String,
    pub base_url: String,
}

impl Default for SquareConfig {
    fn default() -> Self {
        Self {
            access_token: "mock_token".to_string(),
            location_id: "mock_location".to_string(),
            order_id: "mock_order".to_string(),
            customer_id: "mock_customer".to_string(),
            base_url: "https://connect.squareup.com".to_string(),
        }
    }
}

fn default_log_file() -> String {
    Config::config_dir()
        .join("logs.json")
        .to_string_lossy()
        .to_string()
}

fn default_settings_file() -> String {
    Config::config_dir()
        .join("settings.json")
        .to_string_lossy()
        .to_string()
}

fn default_use_mock() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_file: default_log_file(),
            settings_file: default_settings_file(),
            use_mock_gateway: default_use_mock(),
            square: SquareConfig::default(),
            catalogs: Catalogs::default(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("mushtrace")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".mushtrace")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("mushtrace.conf")
    }

    /// Load configuration from `path`, or the defaults if it does not exist.
    /// Environment overrides are applied on top either way.
    pub fn load(path: &Path) -> AppResult<Self> {
        let mut cfg = if path.exists() {
            let content = fs::read_to_string(path)?;
            Self::from_yaml(&content)?
        } else {
            Self::default()
        };

        cfg.apply_env_overrides();
        Ok(cfg)
    }

    pub fn from_yaml(content: &str) -> AppResult<Self> {
        let mut cfg: Config = serde_yaml::from_str(content)?;
        cfg.catalogs = cfg.catalogs.normalized();
        Ok(cfg)
    }

    pub fn to_yaml(&self) -> AppResult<String> {
        Ok(serde_yaml::to_string(self)?)
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(v) = env::var(ENV_USE_MOCK) {
            self.use_mock_gateway = v.trim() == "1";
        }

        let overrides = [
            ("SQUARE_ACCESS_TOKEN", &mut self.square.access_token),
            ("SQUARE_LOCATION_ID", &mut self.square.location_id),
            ("SQUARE_ORDER_ID", &mut self.square.order_id),
            ("SQUARE_CUSTOMER_ID", &mut self.square.customer_id),
        ];
        for (var, slot) in overrides {
            if let Ok(v) = env::var(var)
                && !v.trim().is_empty()
            {
                *slot = v;
            }
        }
    }

    /// Write the config file at `path` and create an empty log file if missing.
    pub fn init_all(&self, path: &Path, is_test: bool) -> AppResult<()> {
        if !is_test {
            if let Some(dir) = path.parent() {
                fs::create_dir_all(dir)?;
            }
            fs::write(path, self.to_yaml()?)?;
        }

        let log_path = self.log_path();
        if let Some(dir) = log_path.parent()
            && !dir.as_os_str().is_empty()
        {
            fs::create_dir_all(dir)?;
        }
        if !log_path.exists() {
            fs::write(&log_path, "[]")?;
        }

        Ok(())
    }

    pub fn log_path(&self) -> PathBuf {
        crate::utils::path::expand_tilde(&self.log_file)
    }

    pub fn settings_path(&self) -> PathBuf {
        crate::utils::path::expand_tilde(&self.settings_file)
    }

    /// Reject a config whose catalogs cannot produce any label.
    pub fn validate(&self) -> AppResult<()> {
        if self.catalogs.mushroom_types.is_empty() {
            return Err(AppError::Config("mushroom_types catalog is empty".into()));
        }
        if self.catalogs.restaurants.is_empty() {
            return Err(AppError::Config("restaurants catalog is empty".into()));
        }
        Ok(())
    }
}
