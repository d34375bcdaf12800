//! Payment simulation orchestrator.
//!
//! Runs the sender, receiver, and amount checks in that order. The first
//! failure produces a FAILED record; if all pass, a reference is drawn and
//! a SUCCESS record is returned. One call, one terminal outcome.
//!
//! No money moves, no external system is contacted, nothing is stored.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use upilab_types::{FailureStage, SimConfig, TransactionRecord, ValidationError};

use crate::{generate_reference, validate_amount_with_limit, validate_identifier};

/// Simulates UPI payments against a fixed set of business rules.
///
/// Holds only immutable configuration, so one instance can serve any
/// number of callers.
#[derive(Debug, Clone, Default)]
pub struct PaymentSimulator {
    config: SimConfig,
}

impl PaymentSimulator {
    /// Create a simulator with the default ceiling.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a simulator with custom rules.
    #[must_use]
    pub fn with_config(config: SimConfig) -> Self {
        Self { config }
    }

    #[must_use]
    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    /// Simulate one payment, stamped with the current time.
    pub fn simulate(&self, sender: &str, receiver: &str, amount: Decimal) -> TransactionRecord {
        self.simulate_at(sender, receiver, amount, Utc::now())
    }

    /// Simulate one payment with an explicit evaluation time.
    pub fn simulate_at(
        &self,
        sender: &str,
        receiver: &str,
        amount: Decimal,
        now: DateTime<Utc>,
    ) -> TransactionRecord {
        if let Err((stage, error)) = self.check(sender, receiver, amount) {
            tracing::debug!(
                %stage,
                code = error.code(),
                reason = %error,
                "simulated payment rejected"
            );
            return TransactionRecord::failed(sender, receiver, amount, stage, error, now);
        }

        let reference = generate_reference();
        tracing::info!(%reference, %amount, "simulated payment succeeded");
        TransactionRecord::succeeded(sender, receiver, amount, reference, now)
    }

    /// Run every rule in order, tagging the first failure with its stage.
    fn check(
        &self,
        sender: &str,
        receiver: &str,
        amount: Decimal,
    ) -> Result<(), (FailureStage, ValidationError)> {
        validate_identifier(sender).map_err(|e| (FailureStage::Sender, e))?;
        validate_identifier(receiver).map_err(|e| (FailureStage::Receiver, e))?;
        validate_amount_with_limit(amount, self.config.amount_limit)
            .map_err(|e| (FailureStage::Amount, e))?;
        Ok(())
    }
}

/// Simulate one payment with the default rules.
pub fn simulate(sender: &str, receiver: &str, amount: Decimal) -> TransactionRecord {
    PaymentSimulator::new().simulate(sender, receiver, amount)
}
