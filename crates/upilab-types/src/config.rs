//! Configuration for the payment simulator.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::{ConfigError, constants};

/// Business-rule configuration applied by the simulator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimConfig {
    /// Inclusive per-transaction ceiling in rupees.
    pub amount_limit: Decimal,
}

impl SimConfig {
    /// Build a config with a custom ceiling.
    ///
    /// # Errors
    /// Returns [`ConfigError::NonPositiveLimit`] if `amount_limit <= 0`,
    /// since no amount could ever pass such a ceiling.
    pub fn with_amount_limit(amount_limit: Decimal) -> Result<Self, ConfigError> {
        if amount_limit <= Decimal::ZERO {
            return Err(ConfigError::NonPositiveLimit(amount_limit));
        }
        Ok(Self { amount_limit })
    }
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            amount_limit: Decimal::from(constants::DEFAULT_AMOUNT_LIMIT),
        }
    }
}
