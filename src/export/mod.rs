//! Export module for ledger-breakdown
//!
//! Provides report and ledger export in multiple formats:
//! - CSV: the categorized ledger (spreadsheet-compatible)
//! - JSON: machine-readable report with a versioned envelope
//! - YAML: human-readable report

pub mod csv;
pub mod json;
pub mod yaml;

pub use csv::export_transactions_csv;
pub use json::{export_report_json, import_from_json, ReportExport, EXPORT_SCHEMA_VERSION};
pub use yaml::{export_report_yaml, import_from_yaml};
