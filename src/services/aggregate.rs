//! Per-person aggregation
//!
//! A single pass over categorized transactions that sums revenue, expenses
//! and per-category expenses for each person. Only the running totals are
//! kept, so memory grows with persons × categories, not with the ledger.

use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Serialize};

use crate::models::{CategorizedTransaction, ExpenseCategory, Money};

/// Running totals for one person
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonTotals {
    /// Sum of positive cross-charge amounts (zero if none)
    pub revenue: Money,
    /// Sum of all negative amounts
    pub expenses: Money,
    /// Number of expense rows
    pub expense_count: usize,
    /// Expenses per category; categories without expenses are absent
    pub expenses_by_category: BTreeMap<ExpenseCategory, Money>,
    /// Number of rows booked against this person
    pub transaction_count: usize,
}

impl PersonTotals {
    /// Whether this person has at least one expense row
    pub fn has_expenses(&self) -> bool {
        self.expense_count > 0
    }

    /// Revenue plus (negative) expenses
    pub fn net_revenue(&self) -> Money {
        self.revenue + self.expenses
    }
}

/// Finished aggregation over a whole ledger
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerAggregates {
    /// Every person seen, in first-seen order
    pub people: Vec<String>,
    /// Totals keyed by person
    pub totals: BTreeMap<String, PersonTotals>,
    /// Expense categories in first-seen order
    pub categories: Vec<ExpenseCategory>,
}

impl LedgerAggregates {
    /// Totals for one person
    pub fn person(&self, name: &str) -> Option<&PersonTotals> {
        self.totals.get(name)
    }

    /// Iterate persons with their totals in first-seen order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &PersonTotals)> {
        self.people
            .iter()
            .filter_map(|p| self.totals.get(p).map(|t| (p.as_str(), t)))
    }
}

/// Streaming aggregator
#[derive(Debug, Default)]
pub struct Aggregator {
    people: Vec<String>,
    totals: HashMap<String, PersonTotals>,
    categories: Vec<ExpenseCategory>,
}

impl Aggregator {
    /// Create an empty aggregator
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one transaction into the running totals
    pub fn push(&mut self, item: &CategorizedTransaction) {
        let txn = item.transaction();

        if !self.totals.contains_key(&txn.person) {
            self.people.push(txn.person.clone());
        }
        let totals = self.totals.entry(txn.person.clone()).or_default();
        totals.transaction_count += 1;

        if txn.is_cross_charge_revenue() {
            totals.revenue += txn.amount;
        }

        if txn.is_expense() {
            totals.expenses += txn.amount;
            totals.expense_count += 1;

            if let Some(category) = item.category() {
                *totals
                    .expenses_by_category
                    .entry(category.clone())
                    .or_default() += txn.amount;

                if !self.categories.contains(category) {
                    self.categories.push(category.clone());
                }
            }
        }
    }

    /// Finish aggregation
    pub fn finish(self) -> LedgerAggregates {
        LedgerAggregates {
            people: self.people,
            totals: self.totals.into_iter().collect(),
            categories: self.categories,
        }
    }
}

/// Aggregate a whole categorized ledger
pub fn aggregate(transactions: &[CategorizedTransaction]) -> LedgerAggregates {
    let mut aggregator = Aggregator::new();
    for txn in transactions {
        aggregator.push(txn);
    }
    aggregator.finish()
}
