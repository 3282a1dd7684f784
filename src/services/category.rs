//! Category extraction
//!
//! Derives the top-level expense category of each expense row.

use crate::error::{BreakdownError, BreakdownResult};
use crate::models::{CategorizedTransaction, ExpenseCategory, Transaction};

/// Extract the top-level category of an account label
///
/// Splits on `:`, takes the first segment and trims it. An empty result is
/// an error rather than an empty-named bucket.
pub fn extract_category(account_label: &str) -> BreakdownResult<ExpenseCategory> {
    ExpenseCategory::from_label(account_label)
        .ok_or_else(|| BreakdownError::EmptyCategory(account_label.to_string()))
}

/// Attach categories to expense rows
///
/// Non-expense rows pass through without a category; their labels are not
/// checked.
pub fn categorize(transactions: &[Transaction]) -> BreakdownResult<Vec<CategorizedTransaction>> {
    transactions
        .iter()
        .map(|txn| {
            let category = if txn.is_expense() {
                Some(extract_category(&txn.account_label)?)
            } else {
                None
            };
            Ok(CategorizedTransaction {
                transaction: txn.clone(),
                category,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Money;

    #[test]
    fn test_extract_category() {
        assert_eq!(
            extract_category("Travel:Airfare:International").unwrap().as_str(),
            "Travel"
        );
        assert_eq!(extract_category("Travel").unwrap().as_str(), "Travel");
        assert_eq!(extract_category(" Travel : Hotel").unwrap().as_str(), "Travel");
    }

    #[test]
    fn test_extract_empty_category() {
        let err = extract_category(":Airfare").unwrap_err();
        assert!(err.is_empty_category());
        assert!(matches!(err, BreakdownError::EmptyCategory(ref l) if l == ":Airfare"));
    }

    #[test]
    fn test_categorize_expenses_only() {
        let txns = vec![
            Transaction::new("A", "Cross Charge:Fee", Money::from_cents(10000), "15 March"),
            Transaction::new("A", "Travel:Airfare", Money::from_cents(-4000), "15 March"),
        ];

        let categorized = categorize(&txns).unwrap();
        assert_eq!(categorized.len(), 2);
        assert!(categorized[0].category().is_none());
        assert_eq!(categorized[1].category().unwrap().as_str(), "Travel");
        assert_eq!(categorized[1].transaction(), &txns[1]);
    }

    #[test]
    fn test_categorize_ignores_label_shape_of_non_expenses() {
        let txns = vec![Transaction::new("A", ":Odd", Money::from_cents(100), "15 March")];
        assert!(categorize(&txns).is_ok());
    }

    #[test]
    fn test_categorize_rejects_empty_expense_category() {
        let txns = vec![Transaction::new("A", ":Airfare", Money::from_cents(-100), "15 March")];
        assert!(categorize(&txns).unwrap_err().is_empty_category());
    }
}
