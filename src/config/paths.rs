//! Path management for budget-tracker
//!
//! Resolves where the settings file and the SQLite database live.
//!
//! ## Path Resolution Order
//!
//! 1. `BUDGET_TRACKER_DATA_DIR` environment variable (if set)
//! 2. Unix (Linux/macOS): `$XDG_CONFIG_HOME/budget-tracker` or `~/.config/budget-tracker`
//! 3. Windows: `%APPDATA%\budget-tracker`

use std::path::PathBuf;

use crate::error::BudgetError;

/// Environment variable that overrides the data directory
pub const DATA_DIR_ENV: &str = "BUDGET_TRACKER_DATA_DIR";

/// Manages all paths used by budget-tracker
#[derive(Debug, Clone)]
pub struct BudgetPaths {
    /// Base directory for all budget-tracker data
    base_dir: PathBuf,
}

impl BudgetPaths {
    /// Create a new BudgetPaths instance
    ///
    /// # Errors
    ///
    /// Returns an error if no home directory can be determined.
    pub fn new() -> Result<Self, BudgetError> {
        let base_dir = match std::env::var(DATA_DIR_ENV) {
            Ok(custom) if !custom.trim().is_empty() => PathBuf::from(custom),
            _ => resolve_default_path()?,
        };

        Ok(Self { base_dir })
    }

    /// Create BudgetPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Get the path to the SQLite database
    pub fn database_file(&self) -> PathBuf {
        self.base_dir.join("budget_tracker.db")
    }

    /// Ensure the base directory exists
    pub fn ensure_directories(&self) -> Result<(), BudgetError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| BudgetError::Io(format!("Failed to create base directory: {}", e)))
    }

    /// Check if the store has been created
    pub fn is_initialized(&self) -> bool {
        self.database_file().exists()
    }
}

/// Resolve the default data directory path based on platform
#[cfg(not(windows))]
fn resolve_default_path() -> Result<PathBuf, BudgetError> {
    let config_base = match std::env::var("XDG_CONFIG_HOME") {
        Ok(xdg) => PathBuf::from(xdg),
        Err(_) => {
            let home = std::env::var("HOME").map_err(|_| {
                BudgetError::Config("HOME environment variable not set".into())
            })?;
            PathBuf::from(home).join(".config")
        }
    };
    Ok(config_base.join("budget-tracker"))
}

/// Resolve the default data directory path based on platform
#[cfg(windows)]
fn resolve_default_path() -> Result<PathBuf, BudgetError> {
    let appdata = std::env::var("APPDATA")
        .map_err(|_| BudgetError::Config("Could not determine APPDATA directory".into()))?;
    Ok(PathBuf::from(appdata).join("budget-tracker"))
}
