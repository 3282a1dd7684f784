//! Reports module for ledger-breakdown
//!
//! Provides the per-person breakdown report: revenue, expenses by category,
//! net revenue and hourly expense rates for one month.

pub mod breakdown;

pub use breakdown::{BreakdownReport, PersonAggregate};
