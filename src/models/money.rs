//! Money type for representing currency amounts
//!
//! Wraps an exact decimal so sums of ledger amounts and per-hour rates never
//! pick up floating-point error. Provides arithmetic, parsing of
//! currency-formatted text and display with a currency symbol.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Neg, Sub, SubAssign};
use std::str::FromStr;

/// Represents a monetary amount in a single (unspecified) currency
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(Decimal);

impl Money {
    /// Create a Money amount from cents
    ///
    /// # Examples
    /// ```
    /// use ledger_breakdown::models::Money;
    /// let amount = Money::from_cents(1050); // $10.50
    /// assert_eq!(amount.to_string(), "$10.50");
    /// ```
    pub fn from_cents(cents: i64) -> Self {
        Self(Decimal::new(cents, 2))
    }

    /// Create a Money amount from dollars and cents
    pub fn from_dollars_cents(dollars: i64, cents: i64) -> Self {
        Self::from_cents(dollars * 100 + cents)
    }

    /// Create a Money amount from an exact decimal
    pub const fn from_decimal(amount: Decimal) -> Self {
        Self(amount)
    }

    /// Create a zero Money amount
    pub const fn zero() -> Self {
        Self(Decimal::ZERO)
    }

    /// Get the exact decimal amount
    pub const fn amount(&self) -> Decimal {
        self.0
    }

    /// Check if the amount is zero
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Check if the amount is strictly positive
    pub fn is_positive(&self) -> bool {
        self.0 > Decimal::ZERO
    }

    /// Check if the amount is strictly negative
    pub fn is_negative(&self) -> bool {
        self.0 < Decimal::ZERO
    }

    /// Get the absolute value
    pub fn abs(&self) -> Self {
        Self(self.0.abs())
    }

    /// Plain decimal text with at least two decimal places (`0.00`, `0.375`)
    pub fn to_plain_string(&self) -> String {
        let mut amount = self.0;
        if amount.scale() < 2 {
            amount.rescale(2);
        }
        amount.to_string()
    }

    /// Divide by a quantity, `None` when the divisor is zero
    pub fn checked_div(&self, divisor: Decimal) -> Option<Self> {
        self.0.checked_div(divisor).map(Self)
    }

    /// Parse a money amount from currency-formatted text
    ///
    /// Accepts formats: "10.50", "-10.50", "$10.50", "-$1,234.50", "$-10",
    /// "(40.00)" (accounting negative). Anything else is rejected, including
    /// empty text.
    pub fn parse(s: &str) -> Result<Self, MoneyParseError> {
        let original = s;
        let s = s.trim();

        // Accounting format: parentheses mean negative
        let (negative, s) = match s.strip_prefix('(').and_then(|r| r.strip_suffix(')')) {
            Some(inner) => (true, inner.trim()),
            None => (false, s),
        };

        // Sign may sit on either side of the currency symbol
        let (sign_before, s) = split_sign(s);
        let s = s.strip_prefix('$').unwrap_or(s);
        let (sign_after, s) = split_sign(s);

        if negative && (sign_before || sign_after) {
            return Err(MoneyParseError::InvalidFormat(original.to_string()));
        }
        if sign_before && sign_after {
            return Err(MoneyParseError::InvalidFormat(original.to_string()));
        }

        let digits: String = s.chars().filter(|c| *c != ',').collect();
        if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_digit() || c == '.') {
            return Err(MoneyParseError::InvalidFormat(original.to_string()));
        }

        let value = Decimal::from_str(&digits)
            .map_err(|_| MoneyParseError::InvalidFormat(original.to_string()))?;

        Ok(Self(if negative || sign_before || sign_after {
            -value
        } else {
            value
        }))
    }

    /// Format with a currency symbol, rounded to two decimal places
    pub fn format_with_symbol(&self, symbol: &str) -> String {
        let rounded = self.0.abs().round_dp(2);
        if self.is_negative() && !rounded.is_zero() {
            format!("-{}{:.2}", symbol, rounded)
        } else {
            format!("{}{:.2}", symbol, rounded)
        }
    }
}

fn split_sign(s: &str) -> (bool, &str) {
    match s.strip_prefix('-') {
        Some(rest) => (true, rest.trim_start()),
        None => (false, s.strip_prefix('+').unwrap_or(s)),
    }
}

impl Default for Money {
    fn default() -> Self {
        Self::zero()
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_with_symbol("$"))
    }
}

impl From<Decimal> for Money {
    fn from(amount: Decimal) -> Self {
        Self(amount)
    }
}

impl Add for Money {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self(self.0 + other.0)
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

impl Sub for Money {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self(self.0 - other.0)
    }
}

impl SubAssign for Money {
    fn sub_assign(&mut self, other: Self) {
        self.0 -= other.0;
    }
}

impl Neg for Money {
    type Output = Self;

    fn neg(self) -> Self {
        Self(-self.0)
    }
}

impl std::iter::Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Money::zero(), |acc, m| acc + m)
    }
}

impl<'a> std::iter::Sum<&'a Money> for Money {
    fn sum<I: Iterator<Item = &'a Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), |acc, m| acc + *m)
    }
}

/// Error type for money parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoneyParseError {
    InvalidFormat(String),
}

impl fmt::Display for MoneyParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoneyParseError::InvalidFormat(s) => write!(f, "Invalid money format: {}", s),
        }
    }
}

impl std::error::Error for MoneyParseError {}
