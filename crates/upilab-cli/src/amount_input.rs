//! Text-to-amount boundary.
//!
//! The simulator only ever sees a typed [`Decimal`]. Unparseable text is
//! dealt with here: the one-shot command reports a usage error, while the
//! interactive loop substitutes [`UNPARSEABLE_AMOUNT`] so the request fails
//! amount validation like any other bad amount.
//!
//! Numbers too large for a [`Decimal`] are still numbers: they saturate to
//! [`Decimal::MAX`] (or [`Decimal::MIN`]) and fail on the ceiling or on
//! positivity, never as unparseable text.

use std::str::FromStr;

use rust_decimal::Decimal;

/// Stand-in for amount text that could not be parsed. Always fails the
/// positivity check.
pub const UNPARSEABLE_AMOUNT: Decimal = Decimal::NEGATIVE_ONE;

/// Parse user-entered amount text.
///
/// Accepts plain decimals (`500`, ` 12.50 `, `-3`) and scientific notation
/// (`1e3`). Finite numbers outside the `Decimal` range saturate. Returns
/// `None` for anything else, including `inf` and `nan`.
#[must_use]
pub fn parse_amount(text: &str) -> Option<Decimal> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }
    Decimal::from_str(text)
        .or_else(|_| Decimal::from_scientific(text))
        .ok()
        .or_else(|| from_float_text(text))
}

/// Fallback for numeric text the decimal parsers reject. Values outside
/// the `Decimal` range map onto the nearest one it can hold, keeping the
/// sign.
fn from_float_text(text: &str) -> Option<Decimal> {
    let value = f64::from_str(text).ok().filter(|v| v.is_finite())?;
    if let Ok(exact) = Decimal::try_from(value) {
        return Some(exact);
    }
    let saturated = if value.abs() >= 1.0 {
        if value.is_sign_negative() { Decimal::MIN } else { Decimal::MAX }
    } else if value.abs() < f64::MIN_POSITIVE {
        Decimal::ZERO
    } else {
        // Below 1e-28: smallest representable magnitude.
        let tiny = Decimal::new(1, 28);
        if value.is_sign_negative() { -tiny } else { tiny }
    };
    tracing::debug!(input = text, %saturated, "amount outside decimal range");
    Some(saturated)
}

/// Parse amount text, degrading failures to [`UNPARSEABLE_AMOUNT`].
#[must_use]
pub fn parse_amount_or_sentinel(text: &str) -> Decimal {
    parse_amount(text).unwrap_or_else(|| {
        tracing::debug!(input = text, "unparseable amount, using sentinel");
        UNPARSEABLE_AMOUNT
    })
}
