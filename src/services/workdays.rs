//! Workday calculator
//!
//! Counts Monday–Friday days in a calendar month and converts them to
//! working hours. No holiday calendar is applied.

use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;

use crate::error::{BreakdownError, BreakdownResult};
use crate::models::ReportingMonth;

/// Hours in one standard workday
pub const WORKDAY_HOURS: u32 = 8;

/// Number of weekdays (Monday–Friday) in a month
pub fn weekday_count(year: i32, month: u32) -> BreakdownResult<u32> {
    let first = NaiveDate::from_ymd_opt(year, month, 1).ok_or_else(|| {
        BreakdownError::InvalidPeriod(format!("{:04}-{:02} is not a calendar month", year, month))
    })?;

    let count = first
        .iter_days()
        .take_while(|day| day.month() == month)
        .filter(|day| day.weekday().num_days_from_monday() < 5)
        .count();

    Ok(count as u32)
}

/// Working hours in a month: weekdays × 8
pub fn working_hours(year: i32, month: u32) -> BreakdownResult<Decimal> {
    let weekdays = weekday_count(year, month)?;
    Ok(Decimal::from(weekdays * WORKDAY_HOURS))
}

impl ReportingMonth {
    /// Working hours in this month
    pub fn working_hours(&self) -> BreakdownResult<Decimal> {
        working_hours(self.year, self.month)
    }
}
