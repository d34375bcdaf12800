//! Amount validator.

use rust_decimal::Decimal;
use upilab_types::{Result, ValidationError, constants::DEFAULT_AMOUNT_LIMIT};

/// Validate an amount against the default ceiling (Rs 1,00,000).
///
/// # Errors
/// See [`validate_amount_with_limit`].
pub fn validate_amount(amount: Decimal) -> Result<()> {
    validate_amount_with_limit(amount, Decimal::from(DEFAULT_AMOUNT_LIMIT))
}

/// Validate an amount against an explicit inclusive ceiling.
///
/// # Errors
/// - [`ValidationError::NonPositiveAmount`] if `amount <= 0`
/// - [`ValidationError::AmountExceedsLimit`] if `amount > limit`
pub fn validate_amount_with_limit(amount: Decimal, limit: Decimal) -> Result<()> {
    if amount.is_zero() || amount.is_sign_negative() {
        return Err(ValidationError::NonPositiveAmount);
    }
    if amount > limit {
        return Err(ValidationError::AmountExceedsLimit);
    }
    Ok(())
}
