//! Error types for the UPI lab.
//!
//! Validation failures are ordinary values: they end up inside a failed
//! [`TransactionRecord`](crate::TransactionRecord) instead of being raised.
//! `Display` yields the human-readable reason only; the stable `UPI_ERR_`
//! code is available through [`ValidationError::code`] for log grepping.
//!
//! Codes are grouped by subsystem:
//! - 1xx: VPA (identifier) errors
//! - 2xx: Amount errors
//! - 9xx: General / configuration errors

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A reason a payment request was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error, Serialize, Deserialize)]
pub enum ValidationError {
    // =================================================================
    // VPA Errors (1xx)
    // =================================================================
    /// Empty input, or no `@` separator at all.
    #[error("missing or malformed separator")]
    MissingSeparator,

    /// More than one `@`, or an empty user/handle part.
    #[error("invalid format")]
    InvalidFormat,

    /// The user part is shorter than the minimum length.
    #[error("username too short")]
    UsernameTooShort,

    /// The user part contains characters outside `[a-z0-9._-]`.
    #[error("invalid characters in username")]
    InvalidUsernameChars,

    /// The handle contains characters outside `[a-z0-9]`.
    #[error("invalid handle")]
    InvalidHandle,

    // =================================================================
    // Amount Errors (2xx)
    // =================================================================
    /// Zero or negative amount.
    #[error("amount must be positive")]
    NonPositiveAmount,

    /// Amount above the configured ceiling.
    #[error("amount exceeds limit")]
    AmountExceedsLimit,
}

impl ValidationError {
    /// Stable code for this failure, e.g. `UPI_ERR_102`.
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Self::MissingSeparator => "UPI_ERR_100",
            Self::InvalidFormat => "UPI_ERR_101",
            Self::UsernameTooShort => "UPI_ERR_102",
            Self::InvalidUsernameChars => "UPI_ERR_103",
            Self::InvalidHandle => "UPI_ERR_104",
            Self::NonPositiveAmount => "UPI_ERR_200",
            Self::AmountExceedsLimit => "UPI_ERR_201",
        }
    }

    /// `true` for failures raised by the identifier validator.
    #[must_use]
    pub fn is_identifier_error(&self) -> bool {
        !self.is_amount_error()
    }

    /// `true` for failures raised by the amount validator.
    #[must_use]
    pub fn is_amount_error(&self) -> bool {
        matches!(self, Self::NonPositiveAmount | Self::AmountExceedsLimit)
    }
}

/// Configuration errors, raised when a [`SimConfig`](crate::SimConfig) is
/// built from untrusted input.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The amount ceiling must itself be a positive amount.
    #[error("UPI_ERR_900: amount limit must be positive, got {0}")]
    NonPositiveLimit(Decimal),
}

/// Crate-wide `Result` alias.
pub type Result<T> = std::result::Result<T, ValidationError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_is_bare_reason() {
        assert_eq!(
            ValidationError::UsernameTooShort.to_string(),
            "username too short"
        );
        assert_eq!(
            ValidationError::MissingSeparator.to_string(),
            "missing or malformed separator"
        );
        assert_eq!(
            ValidationError::AmountExceedsLimit.to_string(),
            "amount exceeds limit"
        );
    }

    #[test]
    fn codes_follow_subsystem_grouping() {
        let identifier = [
            ValidationError::MissingSeparator,
            ValidationError::InvalidFormat,
            ValidationError::UsernameTooShort,
            ValidationError::InvalidUsernameChars,
            ValidationError::InvalidHandle,
        ];
        for err in identifier {
            assert!(err.code().starts_with("UPI_ERR_1"), "{err:?}");
            assert!(err.is_identifier_error());
        }

        for err in [
            ValidationError::NonPositiveAmount,
            ValidationError::AmountExceedsLimit,
        ] {
            assert!(err.code().starts_with("UPI_ERR_2"), "{err:?}");
            assert!(err.is_amount_error());
        }
    }

    #[test]
    fn config_error_has_prefix() {
        let msg = ConfigError::NonPositiveLimit(Decimal::ZERO).to_string();
        assert!(msg.starts_with("UPI_ERR_900"), "Got: {msg}");
    }

    #[test]
    fn error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ValidationError>();
        assert_send_sync::<ConfigError>();
    }
}
