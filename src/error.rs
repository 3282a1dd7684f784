//! Custom error types for ledger-breakdown
//!
//! This module defines the error hierarchy for the engine and its
//! collaborators using thiserror for ergonomic error definitions.

use thiserror::Error;

/// The main error type for ledger-breakdown operations
#[derive(Error, Debug)]
pub enum BreakdownError {
    /// Amount text that is not a decimal number once currency formatting is removed
    #[error("Malformed amount on row {row}: '{value}'")]
    MalformedAmount { row: usize, value: String },

    /// Expense account label whose top-level segment is empty
    #[error("Empty category in account label '{0}'")]
    EmptyCategory(String),

    /// Hourly rates requested over a month with no working hours
    #[error("Division by zero: reporting month has no working hours")]
    DivisionByZero,

    /// Reporting month that cannot be resolved
    #[error("Invalid period: {0}")]
    InvalidPeriod(String),

    /// Ledger file without one of the required columns
    #[error("Missing column: {0}")]
    MissingColumn(String),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// CSV reading errors
    #[error("CSV error: {0}")]
    Csv(String),

    /// Export errors
    #[error("Export error: {0}")]
    Export(String),

    /// Import errors (re-reading an exported report)
    #[error("Import error: {0}")]
    Import(String),
}

impl BreakdownError {
    /// Create a "malformed amount" error for a ledger row
    pub fn malformed_amount(row: usize, value: impl Into<String>) -> Self {
        Self::MalformedAmount {
            row,
            value: value.into(),
        }
    }

    /// Check if this is a malformed amount error
    pub fn is_malformed_amount(&self) -> bool {
        matches!(self, Self::MalformedAmount { .. })
    }

    /// Check if this is an empty category error
    pub fn is_empty_category(&self) -> bool {
        matches!(self, Self::EmptyCategory(_))
    }

    /// Check if this is a division by zero error
    pub fn is_division_by_zero(&self) -> bool {
        matches!(self, Self::DivisionByZero)
    }
}

// Implement From traits for common error types

impl From<std::io::Error> for BreakdownError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for BreakdownError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

impl From<csv::Error> for BreakdownError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err.to_string())
    }
}

/// Result type alias for ledger-breakdown operations
pub type BreakdownResult<T> = Result<T, BreakdownError>;
