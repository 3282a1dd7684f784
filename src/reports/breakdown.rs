//! Breakdown Report
//!
//! Assembles per-person revenue, expenses, net revenue and hourly expense
//! rates for one reporting month into a single immutable value.

use std::collections::BTreeMap;
use std::io::Write;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::display::report::{fit, format_share, rule, share_bar, share_of};
use crate::error::{BreakdownError, BreakdownResult};
use crate::export::csv::escape_csv;
use crate::models::{Money, ReportingMonth, Transaction};
use crate::services::{aggregate, categorize, LedgerAggregates};

/// Everything known about one person
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonAggregate {
    /// Person name
    pub person: String,
    /// Positive cross-charge total (zero if none)
    pub revenue: Money,
    /// Sum of expense rows (negative or zero)
    pub total_expenses: Money,
    /// Expenses per category; categories without expenses are absent
    pub expenses_by_category: BTreeMap<String, Money>,
    /// Revenue plus expenses
    pub net_revenue: Money,
    /// Absolute expenses per working hour
    pub hourly_expense: Money,
}

/// Breakdown Report
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BreakdownReport {
    /// Month the report covers
    pub month: ReportingMonth,
    /// Weekday hours in the month
    pub total_working_hours: Decimal,
    /// Every person in the ledger, first-seen order
    pub people: Vec<String>,
    /// Revenue per person; every person present, zero-filled
    pub revenue: BTreeMap<String, Money>,
    /// Expenses per person; only persons with expense rows
    pub expenses: BTreeMap<String, Money>,
    /// Category → person → expenses
    pub detailed_expenses: BTreeMap<String, BTreeMap<String, Money>>,
    /// Net revenue per person; every person present
    pub net_revenue: BTreeMap<String, Money>,
    /// Hourly expense rate per person; same keys as `expenses`
    pub hourly_expenses: BTreeMap<String, Money>,
    /// Expense categories, first-seen order
    pub expense_categories: Vec<String>,
    /// Sum of all revenue
    pub total_revenue: Money,
    /// Sum of all expenses
    pub total_expenses: Money,
    /// Total revenue plus total expenses
    pub profit_loss: Money,
}

impl BreakdownReport {
    /// Run the engine over normalized transactions for one month
    pub fn generate(transactions: &[Transaction], month: ReportingMonth) -> BreakdownResult<Self> {
        let categorized = categorize(transactions)?;
        let aggregates = aggregate(&categorized);
        let hours = month.working_hours()?;
        Self::assemble(&aggregates, month, hours)
    }

    /// Build the report from finished aggregates
    ///
    /// Refuses to build anything when `total_working_hours` is zero.
    pub fn assemble(
        aggregates: &LedgerAggregates,
        month: ReportingMonth,
        total_working_hours: Decimal,
    ) -> BreakdownResult<Self> {
        if total_working_hours.is_zero() {
            return Err(BreakdownError::DivisionByZero);
        }
        if total_working_hours < Decimal::ZERO {
            return Err(BreakdownError::InvalidPeriod(format!(
                "negative working hours: {}",
                total_working_hours
            )));
        }

        let mut revenue = BTreeMap::new();
        let mut expenses = BTreeMap::new();
        let mut net_revenue = BTreeMap::new();
        let mut hourly_expenses = BTreeMap::new();
        let mut detailed_expenses: BTreeMap<String, BTreeMap<String, Money>> = BTreeMap::new();

        for (person, totals) in aggregates.iter() {
            revenue.insert(person.to_string(), totals.revenue);
            net_revenue.insert(person.to_string(), totals.net_revenue());

            if totals.has_expenses() {
                let hourly = totals
                    .expenses
                    .abs()
                    .checked_div(total_working_hours)
                    .ok_or(BreakdownError::DivisionByZero)?;
                expenses.insert(person.to_string(), totals.expenses);
                hourly_expenses.insert(person.to_string(), hourly);
            }

            for (category, amount) in &totals.expenses_by_category {
                detailed_expenses
                    .entry(category.to_string())
                    .or_default()
                    .insert(person.to_string(), *amount);
            }
        }

        let total_revenue: Money = revenue.values().sum();
        let total_expenses: Money = expenses.values().sum();
        let profit_loss = total_revenue + total_expenses;

        info!(
            month = %month,
            people = aggregates.people.len(),
            categories = aggregates.categories.len(),
            total_revenue = %total_revenue,
            total_expenses = %total_expenses,
            "Assembled breakdown report"
        );

        Ok(Self {
            month,
            total_working_hours,
            people: aggregates.people.clone(),
            revenue,
            expenses,
            detailed_expenses,
            net_revenue,
            hourly_expenses,
            expense_categories: aggregates
                .categories
                .iter()
                .map(|c| c.to_string())
                .collect(),
            total_revenue,
            total_expenses,
            profit_loss,
        })
    }

    /// Per-person view of the report
    pub fn person(&self, name: &str) -> Option<PersonAggregate> {
        let revenue = *self.revenue.get(name)?;
        let total_expenses = self.expenses.get(name).copied().unwrap_or_default();

        let expenses_by_category = self
            .detailed_expenses
            .iter()
            .filter_map(|(category, by_person)| {
                by_person.get(name).map(|amount| (category.clone(), *amount))
            })
            .collect();

        Some(PersonAggregate {
            person: name.to_string(),
            revenue,
            total_expenses,
            expenses_by_category,
            net_revenue: self.net_revenue.get(name).copied().unwrap_or_default(),
            hourly_expense: self.hourly_expenses.get(name).copied().unwrap_or_default(),
        })
    }

    /// Verify that revenue, expense, net and hourly views agree
    pub fn check_consistency(&self) -> Result<(), String> {
        let revenue_sum: Money = self.revenue.values().sum();
        if revenue_sum != self.total_revenue {
            return Err(format!(
                "revenue sums to {} but total revenue is {}",
                revenue_sum, self.total_revenue
            ));
        }

        let expense_sum: Money = self.expenses.values().sum();
        if expense_sum != self.total_expenses {
            return Err(format!(
                "expenses sum to {} but total expenses is {}",
                expense_sum, self.total_expenses
            ));
        }

        if self.profit_loss != self.total_revenue + self.total_expenses {
            return Err(format!(
                "profit/loss {} does not equal revenue plus expenses",
                self.profit_loss
            ));
        }

        for person in &self.people {
            let revenue = self
                .revenue
                .get(person)
                .ok_or_else(|| format!("person '{}' missing from revenue", person))?;
            let expenses = self.expenses.get(person).copied().unwrap_or_default();
            let net = self
                .net_revenue
                .get(person)
                .ok_or_else(|| format!("person '{}' missing from net revenue", person))?;

            if *net != *revenue + expenses {
                return Err(format!(
                    "net revenue of '{}' is {} but revenue plus expenses is {}",
                    person,
                    net,
                    *revenue + expenses
                ));
            }
        }

        if self.revenue.len() != self.people.len() {
            return Err("revenue lists persons outside the ledger".to_string());
        }

        if self.hourly_expenses.keys().ne(self.expenses.keys()) {
            return Err("hourly expenses and expenses cover different persons".to_string());
        }

        let detailed_sum: Money = self
            .detailed_expenses
            .values()
            .flat_map(|by_person| by_person.values())
            .sum();
        if detailed_sum != self.total_expenses {
            return Err(format!(
                "category expenses sum to {} but total expenses is {}",
                detailed_sum, self.total_expenses
            ));
        }

        for category in self.detailed_expenses.keys() {
            if !self.expense_categories.contains(category) {
                return Err(format!("category '{}' missing from category list", category));
            }
        }

        Ok(())
    }

    /// Total expenses of one category across all persons
    pub fn category_total(&self, category: &str) -> Money {
        self.detailed_expenses
            .get(category)
            .map(|by_person| by_person.values().sum())
            .unwrap_or_default()
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self) -> String {
        self.format_terminal_with_symbol("$")
    }

    /// Format the report for terminal display with a currency symbol
    pub fn format_terminal_with_symbol(&self, symbol: &str) -> String {
        let money = |m: &Money| m.format_with_symbol(symbol);
        let mut output = String::new();

        // Header
        output.push_str(&format!(
            "Ledger Breakdown: {} {} ({})\n",
            self.month.month_name(),
            self.month.year,
            self.month
        ));
        output.push_str(&rule('═'));
        output.push('\n');
        if let (Some(start), Some(end)) = (self.month.start_date(), self.month.end_date()) {
            output.push_str(&format!("Period: {} to {}\n", start, end));
        }
        output.push_str(&format!("Working Hours: {}\n", self.total_working_hours));
        output.push_str(&format!("Total Revenue: {}\n", money(&self.total_revenue)));
        output.push_str(&format!("Total Expenses: {}\n", money(&self.total_expenses)));
        output.push_str(&format!("Profit/Loss: {}\n\n", money(&self.profit_loss)));

        // Per-person table
        output.push_str(&format!(
            "{:<24} {:>13} {:>13} {:>13} {:>12}\n",
            "Person", "Revenue", "Expenses", "Net", "Per Hour"
        ));
        output.push_str(&rule('─'));
        output.push('\n');

        for person in &self.people {
            let revenue = self.revenue.get(person).copied().unwrap_or_default();
            let expenses = self.expenses.get(person).copied().unwrap_or_default();
            let net = self.net_revenue.get(person).copied().unwrap_or_default();
            let hourly = self.hourly_expenses.get(person).copied().unwrap_or_default();

            output.push_str(&format!(
                "{:<24} {:>13} {:>13} {:>13} {:>12}\n",
                fit(person, 24),
                money(&revenue),
                money(&expenses),
                money(&net),
                money(&hourly)
            ));
        }

        // Categories
        if !self.expense_categories.is_empty() {
            output.push_str(&format!(
                "\n{:<24} {:>13} {:>8}  {}\n",
                "Category", "Expenses", "%", "Share"
            ));
            output.push_str(&rule('─'));
            output.push('\n');

            for category in &self.expense_categories {
                let total = self.category_total(category);
                let pct = share_of(total, self.total_expenses);

                output.push_str(&format!(
                    "{:<24} {:>13} {:>8}  {}\n",
                    fit(&category.to_uppercase(), 24),
                    money(&total),
                    format_share(pct),
                    share_bar(pct, 20)
                ));

                if let Some(by_person) = self.detailed_expenses.get(category) {
                    for person in self.people.iter().filter(|p| by_person.contains_key(*p)) {
                        output.push_str(&format!(
                            "  {:<22} {:>13}\n",
                            fit(person, 22),
                            money(&by_person[person])
                        ));
                    }
                }
            }
        }

        // Grand total
        output.push_str(&rule('─'));
        output.push('\n');
        output.push_str(&format!(
            "{:<24} {:>13} {:>13} {:>13}\n",
            "TOTAL",
            money(&self.total_revenue),
            money(&self.total_expenses),
            money(&self.profit_loss)
        ));

        output
    }

    /// Export the report to CSV format
    ///
    /// One row per (person, metric[, category]) plus ledger-wide totals with an
    /// empty Person column. Amounts are exact decimals with at least two places.
    pub fn export_csv<W: Write>(&self, writer: &mut W) -> BreakdownResult<()> {
        let export_err = |e: std::io::Error| BreakdownError::Export(e.to_string());

        writeln!(writer, "Month,Person,Metric,Category,Amount").map_err(export_err)?;

        for person in &self.people {
            let Some(view) = self.person(person) else {
                continue;
            };
            let name = escape_csv(person);

            writeln!(
                writer,
                "{},{},revenue,,{}",
                self.month,
                name,
                view.revenue.to_plain_string()
            )
            .map_err(export_err)?;
            if self.expenses.contains_key(person) {
                writeln!(
                    writer,
                    "{},{},expenses,,{}",
                    self.month,
                    name,
                    view.total_expenses.to_plain_string()
                )
                .map_err(export_err)?;
            }
            for category in &self.expense_categories {
                if let Some(amount) = view.expenses_by_category.get(category) {
                    writeln!(
                        writer,
                        "{},{},category_expenses,{},{}",
                        self.month,
                        name,
                        escape_csv(category),
                        amount.to_plain_string()
                    )
                    .map_err(export_err)?;
                }
            }
            writeln!(
                writer,
                "{},{},net_revenue,,{}",
                self.month,
                name,
                view.net_revenue.to_plain_string()
            )
            .map_err(export_err)?;
            if let Some(hourly) = self.hourly_expenses.get(person) {
                writeln!(
                    writer,
                    "{},{},hourly_expenses,,{}",
                    self.month,
                    name,
                    hourly.to_plain_string()
                )
                .map_err(export_err)?;
            }
        }

        // Ledger-wide rows leave Person empty
        let totals = [
            ("total_revenue", self.total_revenue),
            ("total_expenses", self.total_expenses),
            ("profit_loss", self.profit_loss),
        ];
        for (metric, amount) in totals {
            writeln!(writer, "{},,{},,{}", self.month, metric, amount.to_plain_string())
                .map_err(export_err)?;
        }

        Ok(())
    }
}
