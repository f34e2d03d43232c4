//! Display formatting for amounts and timestamps.
//!
//! Pure functions turning decimals and timestamps into locale-specific
//! display strings, plus the inverse parse for user-entered amount text.
//! The default [`Locale`] follows Brazilian Portuguese conventions
//! (`R$ 1.234,56`, `dd/mm/aaaa`).

use chrono::{DateTime, Utc};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use std::fmt::Write;

use crate::MovementKind;

/// Locale conventions for currency rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Locale {
    /// Currency symbol placed before the number (e.g. `R$`).
    pub currency_symbol: String,
    /// Separator between groups of three integer digits.
    pub group_separator: char,
    /// Separator between the integer and fractional parts.
    pub decimal_separator: char,
}

impl Default for Locale {
    fn default() -> Self {
        Self {
            currency_symbol: "R$".to_string(),
            group_separator: '.',
            decimal_separator: ',',
        }
    }
}

/// Format a monetary amount with currency symbol, grouping, and two
/// fractional digits.
///
/// Total over all finite decimals: rounds half-away-from-zero to two places,
/// and renders negatives with a leading minus before the symbol.
///
/// # Examples
///
/// ```
/// use saldo_core::format::{format_currency, Locale};
/// use rust_decimal_macros::dec;
///
/// let locale = Locale::default();
/// assert_eq!(format_currency(dec!(1234.56), &locale), "R$ 1.234,56");
/// assert_eq!(format_currency(dec!(-200), &locale), "-R$ 200,00");
/// ```
#[must_use]
pub fn format_currency(value: Decimal, locale: &Locale) -> String {
    let rounded = value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    let negative = rounded.is_sign_negative() && !rounded.is_zero();
    let abs = rounded.abs();

    let int_part = abs.trunc();
    // Exact after round_dp(2): always an integer in 0..=99.
    let cents = ((abs - int_part) * Decimal::ONE_HUNDRED)
        .trunc()
        .to_u32()
        .unwrap_or(0);

    let mut out = String::new();
    if negative {
        out.push('-');
    }
    out.push_str(&locale.currency_symbol);
    out.push(' ');
    out.push_str(&group_digits(&int_part.to_string(), locale.group_separator));
    out.push(locale.decimal_separator);
    write!(out, "{cents:02}").unwrap();
    out
}

/// Format a movement amount with an explicit sign prefix by kind:
/// `+ R$ 50,00` for credits, `- R$ 200,00` for debits.
#[must_use]
pub fn format_signed_currency(value: Decimal, kind: MovementKind, locale: &Locale) -> String {
    let sign = match kind {
        MovementKind::Credit => '+',
        MovementKind::Debit => '-',
    };
    format!("{sign} {}", format_currency(value, locale))
}

/// Format a timestamp as day, month, year, hour, and minute: `01/02/2026, 14:30`.
#[must_use]
pub fn format_date_time(timestamp: DateTime<Utc>) -> String {
    timestamp.format("%d/%m/%Y, %H:%M").to_string()
}

/// Format a timestamp as day, month, and year only: `01/02/2026`.
#[must_use]
pub fn format_date(timestamp: DateTime<Utc>) -> String {
    timestamp.format("%d/%m/%Y").to_string()
}

/// Parse user-entered amount text.
///
/// Accepts both `1234.56` and the locale's `1234,56`. Returns `None` for
/// empty or unparseable input; callers treat that as a skipped operation.
#[must_use]
pub fn parse_amount(input: &str) -> Option<Decimal> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.replace(',', ".").parse().ok()
}

/// Insert a group separator every three digits, counting from the right.
fn group_digits(digits: &str, separator: char) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    let len = digits.len();
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(separator);
        }
        out.push(c);
    }
    out
}
