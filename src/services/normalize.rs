//! Record normalizer
//!
//! Turns raw ledger rows into typed transactions: subtotal and grand-total
//! rows are dropped by exact period-label match, and currency text is
//! parsed into exact amounts. A single unparsable amount aborts the run.

use std::collections::HashSet;

use tracing::debug;

use rust_decimal::Decimal;

use crate::error::{BreakdownError, BreakdownResult};
use crate::models::{Money, RawRecord, Transaction};

/// Largest accepted amount magnitude (one quadrillion)
pub const MAX_AMOUNT_UNITS: i64 = 1_000_000_000_000_000;

/// Strips sentinel rows and parses amounts
#[derive(Debug, Clone)]
pub struct Normalizer {
    sentinels: HashSet<String>,
}

impl Normalizer {
    /// Create a normalizer that discards rows whose period label equals
    /// one of `sentinels` (exact, case-sensitive)
    pub fn new<I, S>(sentinels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            sentinels: sentinels.into_iter().map(Into::into).collect(),
        }
    }

    /// Check whether a period label marks a subtotal or grand-total row
    pub fn is_sentinel(&self, period_label: &str) -> bool {
        self.sentinels.contains(period_label)
    }

    /// Normalize one record, `Ok(None)` for a sentinel row
    pub fn normalize_record(&self, record: &RawRecord) -> BreakdownResult<Option<Transaction>> {
        if self.is_sentinel(&record.period_label) {
            return Ok(None);
        }

        let amount = Money::parse(&record.amount)
            .ok()
            .filter(|m| m.abs().amount() <= Decimal::from(MAX_AMOUNT_UNITS))
            .ok_or_else(|| BreakdownError::malformed_amount(record.row, &record.amount))?;

        Ok(Some(Transaction::new(
            record.person.clone(),
            record.account_label.clone(),
            amount,
            record.period_label.clone(),
        )))
    }

    /// Normalize a whole ledger, preserving order
    pub fn normalize(&self, records: &[RawRecord]) -> BreakdownResult<Vec<Transaction>> {
        let mut transactions = Vec::with_capacity(records.len());
        for record in records {
            if let Some(txn) = self.normalize_record(record)? {
                transactions.push(txn);
            }
        }

        debug!(
            kept = transactions.len(),
            discarded = records.len() - transactions.len(),
            "Normalized ledger records"
        );
        Ok(transactions)
    }
}
