//! Path management for ledger-breakdown
//!
//! Provides XDG-compliant path resolution for the settings file.
//!
//! ## Path Resolution Order
//!
//! 1. `LEDGER_BREAKDOWN_DIR` environment variable (if set)
//! 2. Unix (Linux/macOS): `$XDG_CONFIG_HOME/ledger-breakdown` or `~/.config/ledger-breakdown`
//! 3. Windows: `%APPDATA%\ledger-breakdown`

use std::path::{Path, PathBuf};

use chrono::NaiveDate;

use crate::error::BreakdownError;

/// Environment variable overriding the base directory
pub const BASE_DIR_ENV: &str = "LEDGER_BREAKDOWN_DIR";

/// Manages all paths used by ledger-breakdown
#[derive(Debug, Clone)]
pub struct BreakdownPaths {
    /// Base directory for all ledger-breakdown files
    base_dir: PathBuf,
}

impl BreakdownPaths {
    /// Create a new BreakdownPaths instance
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined.
    pub fn new() -> Result<Self, BreakdownError> {
        let base_dir = if let Ok(custom) = std::env::var(BASE_DIR_ENV) {
            PathBuf::from(custom)
        } else {
            resolve_default_path()?
        };

        Ok(Self { base_dir })
    }

    /// Create BreakdownPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory (~/.config/ledger-breakdown/ or equivalent)
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Ensure the base directory exists
    pub fn ensure_directories(&self) -> Result<(), BreakdownError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| BreakdownError::Io(format!("Failed to create base directory: {}", e)))
    }

    /// Check if settings have been written (config file exists)
    pub fn is_initialized(&self) -> bool {
        self.settings_file().exists()
    }
}

/// Directory name for a bundle of exports: `Breakdown-<stem>-<date>`
pub fn export_dir_name(source: &Path, date: NaiveDate) -> String {
    let stem = source
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "ledger".to_string());
    format!("Breakdown-{}-{}", stem, date.format("%Y-%m-%d"))
}

/// Resolve the default base directory path based on platform
#[cfg(not(windows))]
fn resolve_default_path() -> Result<PathBuf, BreakdownError> {
    // Unix (Linux/macOS): Use XDG_CONFIG_HOME if set, otherwise ~/.config
    let config_base = match std::env::var("XDG_CONFIG_HOME") {
        Ok(dir) => PathBuf::from(dir),
        Err(_) => {
            let home = std::env::var("HOME").map_err(|_| {
                BreakdownError::Config("HOME environment variable not set".into())
            })?;
            PathBuf::from(home).join(".config")
        }
    };
    Ok(config_base.join("ledger-breakdown"))
}

/// Resolve the default base directory path based on platform
#[cfg(windows)]
fn resolve_default_path() -> Result<PathBuf, BreakdownError> {
    // Windows: Use APPDATA
    let appdata = std::env::var("APPDATA")
        .map_err(|_| BreakdownError::Config("Could not determine APPDATA directory".into()))?;
    Ok(PathBuf::from(appdata).join("ledger-breakdown"))
}
