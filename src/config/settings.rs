//! User settings for ledger-breakdown
//!
//! Manages the subtotal/grand-total sentinels, ledger column names and
//! display preferences.

use serde::{Deserialize, Serialize};

use super::paths::BreakdownPaths;
use crate::error::BreakdownError;
use crate::services::{ColumnMapping, Normalizer};

/// User settings for ledger-breakdown
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Period labels that mark subtotal/grand-total rows (exact match)
    #[serde(default = "default_sentinel_periods")]
    pub sentinel_periods: Vec<String>,

    /// Ledger column names
    #[serde(default)]
    pub columns: ColumnMapping,

    /// Currency symbol used in terminal output
    #[serde(default = "default_currency")]
    pub currency_symbol: String,
}

fn default_schema_version() -> u32 {
    1
}

fn default_sentinel_periods() -> Vec<String> {
    vec![
        "01 January TOTAL".to_string(),
        "02 February TOTAL".to_string(),
        "GRAND TOTAL".to_string(),
    ]
}

fn default_currency() -> String {
    "$".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            sentinel_periods: default_sentinel_periods(),
            columns: ColumnMapping::default(),
            currency_symbol: default_currency(),
        }
    }
}

impl Settings {
    /// Build the record normalizer for these settings
    pub fn normalizer(&self) -> Normalizer {
        Normalizer::new(self.sentinel_periods.iter().cloned())
    }

    /// Load settings from disk, or create default settings if file doesn't exist
    pub fn load_or_create(paths: &BreakdownPaths) -> Result<Self, BreakdownError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path).map_err(|e| {
                BreakdownError::Io(format!("Failed to read settings file: {}", e))
            })?;

            let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                BreakdownError::Config(format!("Failed to parse settings file: {}", e))
            })?;

            Ok(settings)
        } else {
            // Don't save yet - let caller decide when to persist
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &BreakdownPaths) -> Result<(), BreakdownError> {
        paths.ensure_directories()?;

        let settings_path = paths.settings_file();
        let contents = serde_json::to_string_pretty(self).map_err(|e| {
            BreakdownError::Config(format!("Failed to serialize settings: {}", e))
        })?;

        std::fs::write(&settings_path, contents).map_err(|e| {
            BreakdownError::Io(format!("Failed to write settings file: {}", e))
        })?;

        Ok(())
    }
}
