//! Ledger row models
//!
//! `RawRecord` is a row as the ledger reader hands it over, every field still
//! text. `Transaction` is the validated, typed row the engine works on, and
//! `CategorizedTransaction` pairs an expense row with its top-level category.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::category::ExpenseCategory;
use super::money::Money;

/// Case-insensitive account-label marker for inter-departmental revenue
pub const CROSS_CHARGE_MARKER: &str = "cross charge";

/// A ledger row before normalization
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawRecord {
    /// 1-based data row number in the source, for diagnostics
    pub row: usize,

    /// Accounting period label (e.g. "15 March", "GRAND TOTAL")
    pub period_label: String,

    /// Person the entry is booked against
    pub person: String,

    /// Colon-delimited account hierarchy (e.g. "Travel:Airfare")
    pub account_label: String,

    /// Amount as written in the source (may carry `$` and `,`)
    pub amount: String,
}

impl RawRecord {
    /// Create a raw record
    pub fn new(
        row: usize,
        period_label: impl Into<String>,
        person: impl Into<String>,
        account_label: impl Into<String>,
        amount: impl Into<String>,
    ) -> Self {
        Self {
            row,
            period_label: period_label.into(),
            person: person.into(),
            account_label: account_label.into(),
            amount: amount.into(),
        }
    }
}

/// A normalized ledger row
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    /// Person the entry is booked against
    pub person: String,

    /// Colon-delimited account hierarchy
    pub account_label: String,

    /// Amount (positive for credits, negative for expenses)
    pub amount: Money,

    /// Accounting period label
    pub period_label: String,
}

impl Transaction {
    /// Create a new transaction
    pub fn new(
        person: impl Into<String>,
        account_label: impl Into<String>,
        amount: Money,
        period_label: impl Into<String>,
    ) -> Self {
        Self {
            person: person.into(),
            account_label: account_label.into(),
            amount,
            period_label: period_label.into(),
        }
    }

    /// Check if this row is an expense (strictly negative amount)
    pub fn is_expense(&self) -> bool {
        self.amount.is_negative()
    }

    /// Check if this row counts as revenue: a positive cross-charge entry
    pub fn is_cross_charge_revenue(&self) -> bool {
        self.amount.is_positive()
            && self
                .account_label
                .to_lowercase()
                .contains(CROSS_CHARGE_MARKER)
    }
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {}",
            self.period_label, self.person, self.account_label, self.amount
        )
    }
}

/// A transaction with its expense category resolved
///
/// Only expense rows carry a category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategorizedTransaction {
    pub transaction: Transaction,
    pub category: Option<ExpenseCategory>,
}

impl CategorizedTransaction {
    /// Borrow the underlying transaction
    pub fn transaction(&self) -> &Transaction {
        &self.transaction
    }

    /// The expense category, if this is an expense row
    pub fn category(&self) -> Option<&ExpenseCategory> {
        self.category.as_ref()
    }
}
