//! User settings for budget-pace
//!
//! Defaults applied when a new budget is created, plus display preferences.

use serde::{Deserialize, Serialize};

use super::paths::PacePaths;
use crate::error::PaceError;

/// User settings, persisted as `config.json`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Currency symbol used when printing amounts
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Whether new budgets recur into the following months
    #[serde(default = "default_auto_renew")]
    pub default_auto_renew: bool,

    /// Alert thresholds given to new budgets
    #[serde(default = "default_alert_thresholds")]
    pub default_alert_thresholds: Vec<f64>,
}

fn default_schema_version() -> u32 {
    1
}

fn default_currency() -> String {
    "$".to_string()
}

fn default_auto_renew() -> bool {
    true
}

fn default_alert_thresholds() -> Vec<f64> {
    vec![0.5, 0.8, 1.0]
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            currency_symbol: default_currency(),
            default_auto_renew: default_auto_renew(),
            default_alert_thresholds: default_alert_thresholds(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or use defaults if the file doesn't exist
    pub fn load_or_create(paths: &PacePaths) -> Result<Self, PaceError> {
        let settings_path = paths.settings_file();

        if !settings_path.exists() {
            // Don't save yet - let caller decide when to persist
            return Ok(Settings::default());
        }

        let contents = std::fs::read_to_string(&settings_path)
            .map_err(PaceError::file("read", &settings_path))?;

        serde_json::from_str(&contents)
            .map_err(|e| PaceError::Config(format!("Failed to parse settings file: {}", e)))
    }

    /// Save settings to disk
    pub fn save(&self, paths: &PacePaths) -> Result<(), PaceError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| PaceError::Config(format!("Failed to serialize settings: {}", e)))?;

        let settings_path = paths.settings_file();
        std::fs::write(&settings_path, contents)
            .map_err(PaceError::file("write", &settings_path))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.currency_symbol, "$");
        assert!(settings.default_auto_renew);
        assert_eq!(settings.default_alert_thresholds, vec![0.5, 0.8, 1.0]);
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let paths = PacePaths::with_base_dir(temp_dir.path().to_path_buf());

        let settings = Settings {
            currency_symbol: "€".into(),
            default_auto_renew: false,
            ..Settings::default()
        };
        settings.save(&paths).unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded.currency_symbol, "€");
        assert!(!loaded.default_auto_renew);
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let loaded: Settings = serde_json::from_str(r#"{"currency_symbol":"£"}"#).unwrap();
        assert_eq!(loaded.currency_symbol, "£");
        assert_eq!(loaded.schema_version, 1);
        assert!(loaded.default_auto_renew);
    }

    #[test]
    fn test_corrupt_file_is_config_error() {
        let temp_dir = TempDir::new().unwrap();
        let paths = PacePaths::with_base_dir(temp_dir.path().to_path_buf());
        std::fs::write(paths.settings_file(), "not json").unwrap();

        let err = Settings::load_or_create(&paths).unwrap_err();
        assert!(matches!(err, PaceError::Config(_)));
    }
}
