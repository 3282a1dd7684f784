//! Expense category model
//!
//! An expense category is the top-level segment of a colon-delimited account
//! label. It is never stored on its own; it is always derived from a label.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Separator between levels of an account label
pub const ACCOUNT_SEPARATOR: char = ':';

/// Top-level expense category (e.g. "Travel" for "Travel:Airfare")
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExpenseCategory(String);

impl ExpenseCategory {
    /// Derive the category from an account label
    ///
    /// Returns `None` when the first segment is empty after trimming.
    pub fn from_label(account_label: &str) -> Option<Self> {
        let head = account_label
            .split(ACCOUNT_SEPARATOR)
            .next()
            .unwrap_or_default()
            .trim();

        if head.is_empty() {
            None
        } else {
            Some(Self(head.to_string()))
        }
    }

    /// Get the category name
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume into the category name
    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for ExpenseCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for ExpenseCategory {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_label() {
        assert_eq!(
            ExpenseCategory::from_label("Travel:Airfare:International").unwrap().as_str(),
            "Travel"
        );
        assert_eq!(ExpenseCategory::from_label("Travel").unwrap().as_str(), "Travel");
        assert_eq!(ExpenseCategory::from_label("  Meals : Team").unwrap().as_str(), "Meals");
    }

    #[test]
    fn test_empty_head() {
        assert!(ExpenseCategory::from_label(":Airfare").is_none());
        assert!(ExpenseCategory::from_label("   :Airfare").is_none());
        assert!(ExpenseCategory::from_label("").is_none());
    }

    #[test]
    fn test_serializes_as_plain_string() {
        let category = ExpenseCategory::from_label("Travel:Hotel").unwrap();
        assert_eq!(serde_json::to_string(&category).unwrap(), "\"Travel\"");
    }
}
