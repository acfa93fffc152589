//! Path management for budget-pace
//!
//! ## Path Resolution Order
//!
//! 1. `PACE_DATA_DIR` environment variable (if set)
//! 2. Unix (Linux/macOS): `$XDG_CONFIG_HOME/budget-pace` or `~/.config/budget-pace`
//! 3. Windows: `%APPDATA%\budget-pace`

use std::path::PathBuf;

use crate::error::PaceError;

/// Environment variable that overrides the data directory
pub const DATA_DIR_ENV: &str = "PACE_DATA_DIR";

/// Manages all paths used by budget-pace
#[derive(Debug, Clone)]
pub struct PacePaths {
    base_dir: PathBuf,
}

impl PacePaths {
    /// Resolve paths from the environment
    ///
    /// # Errors
    ///
    /// Returns an error if no home/config directory can be determined.
    pub fn new() -> Result<Self, PaceError> {
        let base_dir = match std::env::var(DATA_DIR_ENV) {
            Ok(custom) if !custom.trim().is_empty() => PathBuf::from(custom),
            _ => resolve_default_path()?,
        };

        Ok(Self { base_dir })
    }

    /// Create PacePaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the data directory (~/.config/budget-pace/data/)
    pub fn data_dir(&self) -> PathBuf {
        self.base_dir.join("data")
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Get the path to budget.json (the current budget record)
    pub fn budget_file(&self) -> PathBuf {
        self.data_dir().join("budget.json")
    }

    /// Get the path to spend.json (recorded spend entries)
    pub fn spend_file(&self) -> PathBuf {
        self.data_dir().join("spend.json")
    }

    /// Get the path to categories.json (the category registry)
    pub fn categories_file(&self) -> PathBuf {
        self.data_dir().join("categories.json")
    }

    /// Ensure the base and data directories exist
    pub fn ensure_directories(&self) -> Result<(), PaceError> {
        let data_dir = self.data_dir();
        std::fs::create_dir_all(&data_dir).map_err(PaceError::file("create", &data_dir))?;

        Ok(())
    }

    /// Check if budget-pace has been initialized (registry file exists)
    pub fn is_initialized(&self) -> bool {
        self.categories_file().exists()
    }
}

#[cfg(not(windows))]
fn resolve_default_path() -> Result<PathBuf, PaceError> {
    let config_base = match std::env::var("XDG_CONFIG_HOME") {
        Ok(xdg) if !xdg.is_empty() => PathBuf::from(xdg),
        _ => {
            let home = std::env::var("HOME")
                .map_err(|_| PaceError::Config("Could not determine HOME directory".into()))?;
            PathBuf::from(home).join(".config")
        }
    };
    Ok(config_base.join("budget-pace"))
}

#[cfg(windows)]
fn resolve_default_path() -> Result<PathBuf, PaceError> {
    let appdata = std::env::var("APPDATA")
        .map_err(|_| PaceError::Config("Could not determine APPDATA directory".into()))?;
    Ok(PathBuf::from(appdata).join("budget-pace"))
}
