//! Terminal helpers for the breakdown tables
//!
//! Shares are computed on exact decimals and only rounded for display.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

use crate::models::Money;

/// Width of every table in the terminal report
pub const TABLE_WIDTH: usize = 80;

/// Percentage that `part` makes up of `whole`, by magnitude (0 when `whole` is zero)
pub fn share_of(part: Money, whole: Money) -> Decimal {
    let whole = whole.abs().amount();
    if whole.is_zero() {
        return Decimal::ZERO;
    }
    part.abs()
        .amount()
        .checked_div(whole)
        .and_then(|ratio| ratio.checked_mul(Decimal::ONE_HUNDRED))
        .unwrap_or(Decimal::ZERO)
}

/// `12.5%`, one decimal place
pub fn format_share(pct: Decimal) -> String {
    format!("{:.1}%", pct.round_dp(1))
}

/// Horizontal bar for a percentage, `width` cells wide
pub fn share_bar(pct: Decimal, width: usize) -> String {
    let pct = pct.clamp(Decimal::ZERO, Decimal::ONE_HUNDRED);
    let filled = (pct * Decimal::from(width as u64) / Decimal::ONE_HUNDRED)
        .round()
        .to_usize()
        .unwrap_or(0)
        .min(width);

    let mut bar = "█".repeat(filled);
    bar.push_str(&"░".repeat(width - filled));
    bar
}

/// A full-width rule drawn with `ch`
pub fn rule(ch: char) -> String {
    std::iter::repeat(ch).take(TABLE_WIDTH).collect()
}

/// Cut `s` to at most `width` characters, marking the cut with `…`
pub fn fit(s: &str, width: usize) -> String {
    if s.chars().count() <= width {
        return s.to_string();
    }
    let mut out: String = s.chars().take(width.saturating_sub(1)).collect();
    if width > 0 {
        out.push('…');
    }
    out
}
