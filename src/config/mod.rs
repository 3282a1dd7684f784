//! Configuration module for ledger-breakdown
//!
//! This module provides configuration management including:
//! - XDG-compliant path resolution
//! - Settings persistence (sentinel rows, column names, currency symbol)

pub mod paths;
pub mod settings;

pub use paths::BreakdownPaths;
pub use settings::Settings;
