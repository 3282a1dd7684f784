//! Reporting month representation
//!
//! A report always covers one calendar month. The month is either given
//! explicitly ("2024-02") or read off a ledger period label such as
//! "15 March" together with a year supplied by the caller.

use chrono::{Datelike, Duration, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// A calendar month a report is computed for
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ReportingMonth {
    pub year: i32,
    pub month: u32,
}

impl ReportingMonth {
    /// Create a reporting month, validating the month number and year range
    pub fn new(year: i32, month: u32) -> Result<Self, PeriodParseError> {
        if !(1..=12).contains(&month) {
            return Err(PeriodParseError::InvalidMonth(month));
        }
        if NaiveDate::from_ymd_opt(year, month, 1).is_none() {
            return Err(PeriodParseError::InvalidYear(year));
        }
        Ok(Self { year, month })
    }

    /// Get the current month
    pub fn current_month() -> Self {
        let today = chrono::Local::now().date_naive();
        Self {
            year: today.year(),
            month: today.month(),
        }
    }

    /// First day of the month
    pub fn start_date(&self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month, 1)
    }

    /// Last day of the month (inclusive)
    pub fn end_date(&self) -> Option<NaiveDate> {
        let next_month = if self.month == 12 {
            NaiveDate::from_ymd_opt(self.year + 1, 1, 1)
        } else {
            NaiveDate::from_ymd_opt(self.year, self.month + 1, 1)
        };
        next_month.map(|d| d - Duration::days(1))
    }

    /// English name of the month
    pub fn month_name(&self) -> &'static str {
        MONTH_NAMES
            .get((self.month as usize).wrapping_sub(1))
            .copied()
            .unwrap_or("Unknown")
    }

    /// Parse a "YYYY-MM" string
    pub fn parse(s: &str) -> Result<Self, PeriodParseError> {
        let s = s.trim();
        let (year, month) = s
            .split_once('-')
            .ok_or_else(|| PeriodParseError::InvalidFormat(s.to_string()))?;

        let year: i32 = year
            .parse()
            .map_err(|_| PeriodParseError::InvalidFormat(s.to_string()))?;
        let month: u32 = month
            .parse()
            .map_err(|_| PeriodParseError::InvalidFormat(s.to_string()))?;

        Self::new(year, month)
    }

    /// Derive the month from a ledger period label
    ///
    /// The label must contain an English month name, full ("March") or
    /// abbreviated ("Mar"), as a separate word. Matching is case-insensitive.
    pub fn from_period_label(label: &str, year: i32) -> Result<Self, PeriodParseError> {
        let month = label
            .split(|c: char| !c.is_alphabetic())
            .filter(|word| word.len() >= 3)
            .find_map(month_from_name)
            .ok_or_else(|| PeriodParseError::NoMonthInLabel(label.to_string()))?;

        Self::new(year, month)
    }
}

fn month_from_name(word: &str) -> Option<u32> {
    let word = word.to_lowercase();
    MONTH_NAMES
        .iter()
        .position(|name| {
            let name = name.to_lowercase();
            name == word || (word.len() == 3 && name.starts_with(&word))
        })
        .map(|idx| idx as u32 + 1)
}

impl fmt::Display for ReportingMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

/// Error type for reporting month parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PeriodParseError {
    InvalidFormat(String),
    InvalidMonth(u32),
    InvalidYear(i32),
    NoMonthInLabel(String),
}

impl fmt::Display for PeriodParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidFormat(s) => write!(f, "Invalid month format: {} (use YYYY-MM)", s),
            Self::InvalidMonth(m) => write!(f, "Invalid month: {} (must be 1-12)", m),
            Self::InvalidYear(y) => write!(f, "Year out of range: {}", y),
            Self::NoMonthInLabel(s) => write!(f, "No month name in period label '{}'", s),
        }
    }
}

impl std::error::Error for PeriodParseError {}

impl From<PeriodParseError> for crate::error::BreakdownError {
    fn from(err: PeriodParseError) -> Self {
        Self::InvalidPeriod(err.to_string())
    }
}
