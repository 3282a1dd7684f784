//! Core data models for ledger-breakdown
//!
//! This module contains the data structures the engine passes between its
//! stages: ledger rows, amounts, categories and the reporting month.

pub mod category;
pub mod money;
pub mod period;
pub mod transaction;

pub use category::ExpenseCategory;
pub use money::Money;
pub use period::ReportingMonth;
pub use transaction::{CategorizedTransaction, RawRecord, Transaction};
