//! User settings document (JSON), merged over hardcoded defaults.

use crate::errors::{AppError, AppResult};
use crate::export::ExportFormat;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use tracing::warn;

pub const THEME_DARK: &str = "darkly";
pub const THEME_LIGHT: &str = "flatly";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub theme: String,
    pub default_restaurant_id: u32,
    pub invoice_template: String,
    pub export_folder: String,
    pub default_export_format: String,
    pub logo_path: String,

    /// Keys this version does not know about, kept so a save does not drop them.
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            theme: THEME_DARK.to_string(),
            default_restaurant_id: 1,
            invoice_template: String::new(),
            export_folder: String::new(),
            default_export_format: ExportFormat::Csv.as_str().to_string(),
            logo_path: String::new(),
            extra: BTreeMap::new(),
        }
    }
}

impl Settings {
    /// Load settings from `path`, merged key by key over the defaults.
    ///
    /// Never fatal: a missing file gives the defaults, an unreadable one gives
    /// the defaults plus the error so the caller can report it. A key whose
    /// value has the wrong type keeps its default and is named in the error;
    /// every other key is still applied.
    pub fn load(path: &Path) -> (Self, Option<AppError>) {
        if !path.exists() {
            return (Self::default(), None);
        }

        match Self::read(path) {
            Ok((s, rejected)) if rejected.is_empty() => (s, None),
            Ok((s, rejected)) => {
                warn!("settings file {}: kept defaults for {rejected:?}", path.display());
                let e = AppError::Format(format!(
                    "{}: invalid value for {}, default kept",
                    path.display(),
                    rejected.join(", ")
                ));
                (s, Some(e))
            }
            Err(e) => {
                warn!("settings file {} ignored: {e}", path.display());
                (Self::default(), Some(e))
            }
        }
    }

    /// Merged settings plus the keys that could not be applied.
    fn read(path: &Path) -> AppResult<(Self, Vec<String>)> {
        let content = fs::read_to_string(path)?;
        let Value::Object(persisted) = serde_json::from_str::<Value>(&content)? else {
            return Err(AppError::Format(format!(
                "{} is not a JSON object",
                path.display()
            )));
        };

        let Value::Object(mut merged) = serde_json::to_value(Self::default())? else {
            return Err(AppError::Other("default settings are not an object".into()));
        };
        let mut rejected = Vec::new();

        for (key, value) in persisted {
            let mut candidate = merged.clone();
            candidate.insert(key.clone(), value);
            if serde_json::from_value::<Self>(Value::Object(candidate.clone())).is_ok() {
                merged = candidate;
            } else {
                rejected.push(key);
            }
        }

        Ok((serde_json::from_value(Value::Object(merged))?, rejected))
    }

    pub fn save(&self, path: &Path) -> AppResult<()> {
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, serde_json::to_string_pretty(self)?)?;
        Ok(())
    }

    /// Assign one key from its textual form.
    pub fn set(&mut self, key: &str, value: &str) -> AppResult<()> {
        match key {
            "theme" => self.theme = value.to_string(),
            "default_restaurant_id" => {
                self.default_restaurant_id = value.trim().parse().map_err(|_| {
                    AppError::InvalidInput(format!(
                        "default_restaurant_id must be a non-negative integer, got '{value}'"
                    ))
                })?
            }
            "invoice_template" => self.invoice_template = value.to_string(),
            "export_folder" => self.export_folder = value.to_string(),
            "default_export_format" => {
                let format = ExportFormat::from_setting(value).ok_or_else(|| {
                    AppError::InvalidInput(format!(
                        "default_export_format must be one of csv, excel, pdf (got '{value}')"
                    ))
                })?;
                self.default_export_format = format.as_str().to_string();
            }
            "logo_path" => self.logo_path = value.to_string(),
            other => {
                return Err(AppError::InvalidInput(format!("unknown setting '{other}'")));
            }
        }
        Ok(())
    }

    /// Switch between the dark and light theme; returns the new one.
    pub fn toggle_theme(&mut self) -> &str {
        self.theme = if self.theme == THEME_DARK {
            THEME_LIGHT.to_string()
        } else {
            THEME_DARK.to_string()
        };
        &self.theme
    }

    /// Export format configured as default, `None` for an unrecognised value.
    pub fn export_format(&self) -> Option<ExportFormat> {
        ExportFormat::from_setting(&self.default_export_format)
    }
}
