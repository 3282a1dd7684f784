//! Ledger Breakdown - per-person monthly ledger reports
//!
//! This library turns a flat general-ledger export (one row per booking) into
//! a per-person breakdown of cross-charge revenue, expenses grouped by
//! account category, net revenue and expense per working hour.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Core data models (money, transactions, categories, months)
//! - `services`: Import, normalization, categorization, aggregation, workdays
//! - `reports`: Breakdown report assembly and rendering
//! - `export`: JSON, YAML and CSV exports
//! - `display`: Terminal formatting helpers
//! - `cli`: Command handlers for the `breakdown` binary
//!
//! # Example
//!
//! ```rust,ignore
//! use ledger_breakdown::config::Settings;
//! use ledger_breakdown::models::ReportingMonth;
//! use ledger_breakdown::reports::BreakdownReport;
//! use ledger_breakdown::services::ImportService;
//!
//! let settings = Settings::default();
//! let records = ImportService::new(settings.columns.clone()).parse_csv_file(path)?;
//! let transactions = settings.normalizer().normalize(&records)?;
//! let report = BreakdownReport::generate(&transactions, ReportingMonth::new(2023, 3)?)?;
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod reports;
pub mod services;

pub use error::{BreakdownError, BreakdownResult};
