//! CSV Export functionality
//!
//! Exports the normalized, categorized ledger to CSV format.

use crate::error::{BreakdownError, BreakdownResult};
use crate::models::CategorizedTransaction;
use std::io::Write;

/// Export categorized transactions to CSV
pub fn export_transactions_csv<W: Write>(
    transactions: &[CategorizedTransaction],
    writer: &mut W,
) -> BreakdownResult<()> {
    writeln!(writer, "Period,Person,Account,Category,Kind,Amount")
        .map_err(|e| BreakdownError::Export(e.to_string()))?;

    for item in transactions {
        let txn = item.transaction();

        let kind = if txn.is_cross_charge_revenue() {
            "revenue"
        } else if txn.is_expense() {
            "expense"
        } else {
            "other"
        };

        writeln!(
            writer,
            "{},{},{},{},{},{}",
            escape_csv(&txn.period_label),
            escape_csv(&txn.person),
            escape_csv(&txn.account_label),
            escape_csv(item.category().map(|c| c.as_str()).unwrap_or("")),
            kind,
            txn.amount.to_plain_string()
        )
        .map_err(|e| BreakdownError::Export(e.to_string()))?;
    }

    Ok(())
}

/// Escape a string for CSV output
pub fn escape_csv(s: &str) -> String {
    if s.contains(',') || s.contains('"') || s.contains('\n') || s.contains('\r') {
        format!("\"{}\"", s.replace('"', "\"\""))
    } else {
        s.to_string()
    }
}
