//! Simulated transaction records.
//!
//! A [`TransactionRecord`] is the immutable result of one simulation
//! attempt. It is created fresh per call and handed to the caller; nothing
//! keeps a registry of past records.
//!
//! The reference lives inside [`TxOutcome::Succeeded`], so a record carries
//! a reference if and only if it succeeded.

use std::fmt;

use chrono::{DateTime, SubsecRound, Utc};
use rust_decimal::Decimal;
use serde::{Serialize, Serializer};

use crate::{
    Reference, ValidationError,
    constants::{REFERENCE_NOT_APPLICABLE, STATUS_FAILED_PREFIX, STATUS_SUCCESS, TIMESTAMP_FORMAT},
};

/// Which check rejected a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum FailureStage {
    /// The sender VPA failed validation.
    Sender,
    /// The receiver VPA failed validation.
    Receiver,
    /// The amount failed validation.
    Amount,
}

impl fmt::Display for FailureStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Sender => write!(f, "SENDER"),
            Self::Receiver => write!(f, "RECEIVER"),
            Self::Amount => write!(f, "AMOUNT"),
        }
    }
}

/// Terminal outcome of a simulation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TxOutcome {
    /// All checks passed and a reference was issued.
    Succeeded { reference: Reference },
    /// A check failed; no reference exists.
    Failed {
        stage: FailureStage,
        error: ValidationError,
    },
}

impl TxOutcome {
    /// Human-readable status line.
    ///
    /// Identifier failures name the offending party; amount failures carry
    /// the bare reason.
    #[must_use]
    pub fn status(&self) -> String {
        match self {
            Self::Succeeded { .. } => STATUS_SUCCESS.to_string(),
            Self::Failed {
                stage: FailureStage::Sender,
                error,
            } => format!("{STATUS_FAILED_PREFIX}: Sender invalid — {error}"),
            Self::Failed {
                stage: FailureStage::Receiver,
                error,
            } => format!("{STATUS_FAILED_PREFIX}: Receiver invalid — {error}"),
            Self::Failed {
                stage: FailureStage::Amount,
                error,
            } => format!("{STATUS_FAILED_PREFIX}: {error}"),
        }
    }
}

/// Immutable record of one simulated payment attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransactionRecord {
    sender: String,
    receiver: String,
    amount: Decimal,
    outcome: TxOutcome,
    timestamp: DateTime<Utc>,
}

impl TransactionRecord {
    /// Record a successful simulation.
    #[must_use]
    pub fn succeeded(
        sender: impl Into<String>,
        receiver: impl Into<String>,
        amount: Decimal,
        reference: Reference,
        timestamp: DateTime<Utc>,
    ) -> Self {
        Self::new(
            sender.into(),
            receiver.into(),
            amount,
            TxOutcome::Succeeded { reference },
            timestamp,
        )
    }

    /// Record a rejected simulation.
    #[must_use]
    pub fn failed(
        sender: impl Into<String>,
        receiver: impl Into<String>,
        amount: Decimal,
        stage: FailureStage,
        error: ValidationError,
        timestamp: DateTime<Utc>,
    ) -> Self {
        Self::new(
            sender.into(),
            receiver.into(),
            amount,
            TxOutcome::Failed { stage, error },
            timestamp,
        )
    }

    fn new(
        sender: String,
        receiver: String,
        amount: Decimal,
        outcome: TxOutcome,
        timestamp: DateTime<Utc>,
    ) -> Self {
        Self {
            sender,
            receiver,
            amount,
            outcome,
            timestamp: timestamp.trunc_subsecs(0),
        }
    }

    /// Sender VPA exactly as submitted.
    #[must_use]
    pub fn sender(&self) -> &str {
        &self.sender
    }

    /// Receiver VPA exactly as submitted.
    #[must_use]
    pub fn receiver(&self) -> &str {
        &self.receiver
    }

    /// Amount as submitted (possibly invalid).
    #[must_use]
    pub fn amount(&self) -> Decimal {
        self.amount
    }

    #[must_use]
    pub fn outcome(&self) -> &TxOutcome {
        &self.outcome
    }

    /// Evaluation time, UTC, whole seconds.
    #[must_use]
    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    #[must_use]
    pub fn is_success(&self) -> bool {
        matches!(self.outcome, TxOutcome::Succeeded { .. })
    }

    /// The issued reference, if the simulation succeeded.
    #[must_use]
    pub fn reference(&self) -> Option<&Reference> {
        match &self.outcome {
            TxOutcome::Succeeded { reference } => Some(reference),
            TxOutcome::Failed { .. } => None,
        }
    }

    /// The reference token, or `"N/A"` on failure.
    #[must_use]
    pub fn reference_display(&self) -> &str {
        self.reference()
            .map_or(REFERENCE_NOT_APPLICABLE, Reference::as_str)
    }

    /// The validation error, if the simulation failed.
    #[must_use]
    pub fn error(&self) -> Option<ValidationError> {
        match self.outcome {
            TxOutcome::Failed { error, .. } => Some(error),
            TxOutcome::Succeeded { .. } => None,
        }
    }

    /// Human-readable status line (see [`TxOutcome::status`]).
    #[must_use]
    pub fn status(&self) -> String {
        self.outcome.status()
    }

    /// Timestamp rendered as `YYYY-MM-DD HH:MM:SS UTC`.
    #[must_use]
    pub fn timestamp_display(&self) -> String {
        self.timestamp.format(TIMESTAMP_FORMAT).to_string()
    }
}

impl fmt::Display for TransactionRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Tx[{}] {} -> {} Rs {} : {} @ {}",
            self.reference_display(),
            self.sender,
            self.receiver,
            self.amount,
            self.status(),
            self.timestamp_display(),
        )
    }
}

/// Flat wire shape: status and reference are rendered strings so that
/// consumers see the same text the console prints.
#[derive(Serialize)]
struct RecordView<'a> {
    sender: &'a str,
    receiver: &'a str,
    amount: Decimal,
    status: String,
    reference: &'a str,
    error_code: Option<&'static str>,
    timestamp: DateTime<Utc>,
}

impl Serialize for TransactionRecord {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        RecordView {
            sender: &self.sender,
            receiver: &self.receiver,
            amount: self.amount,
            status: self.status(),
            reference: self.reference_display(),
            error_code: self.error().map(|e| e.code()),
            timestamp: self.timestamp,
        }
        .serialize(serializer)
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    fn at() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 14, 9, 26, 53).unwrap()
    }

    fn success() -> TransactionRecord {
        TransactionRecord::succeeded(
            "Alice@Bank",
            "bob@bank",
            Decimal::new(500, 0),
            Reference::from_bytes([0xAB; 8]),
            at(),
        )
    }

    #[test]
    fn success_carries_reference() {
        let tx = success();
        assert!(tx.is_success());
        assert_eq!(tx.status(), "SUCCESS (SIMULATED)");
        assert_eq!(tx.reference_display(), "ABABABABABABABAB");
        assert!(tx.error().is_none());
        // Raw casing survives.
        assert_eq!(tx.sender(), "Alice@Bank");
    }

    #[test]
    fn failure_has_sentinel_reference() {
        let tx = TransactionRecord::failed(
            "al",
            "bob@bank",
            Decimal::new(500, 0),
            FailureStage::Sender,
            ValidationError::UsernameTooShort,
            at(),
        );
        assert!(!tx.is_success());
        assert!(tx.reference().is_none());
        assert_eq!(tx.reference_display(), "N/A");
        assert_eq!(tx.status(), "FAILED: Sender invalid — username too short");
        assert_eq!(tx.error(), Some(ValidationError::UsernameTooShort));
    }

    #[test]
    fn status_lines_per_stage() {
        let receiver = TxOutcome::Failed {
            stage: FailureStage::Receiver,
            error: ValidationError::InvalidHandle,
        };
        assert_eq!(receiver.status(), "FAILED: Receiver invalid — invalid handle");

        let amount = TxOutcome::Failed {
            stage: FailureStage::Amount,
            error: ValidationError::NonPositiveAmount,
        };
        assert_eq!(amount.status(), "FAILED: amount must be positive");
    }

    #[test]
    fn negative_amount_preserved() {
        let tx = TransactionRecord::failed(
            "alice@bank",
            "bob@bank",
            Decimal::NEGATIVE_ONE,
            FailureStage::Amount,
            ValidationError::NonPositiveAmount,
            at(),
        );
        assert_eq!(tx.amount(), Decimal::NEGATIVE_ONE);
    }

    #[test]
    fn timestamp_truncated_to_seconds() {
        let with_nanos = at() + chrono::Duration::milliseconds(750);
        let tx = TransactionRecord::succeeded(
            "alice@bank",
            "bob@bank",
            Decimal::ONE,
            Reference::from_bytes([0; 8]),
            with_nanos,
        );
        assert_eq!(tx.timestamp(), at());
        assert_eq!(tx.timestamp_display(), "2024-03-14 09:26:53 UTC");
    }

    #[test]
    fn display_summarizes_record() {
        let line = success().to_string();
        assert!(line.contains("ABABABABABABABAB"));
        assert!(line.contains("SUCCESS (SIMULATED)"));
        assert!(line.contains("2024-03-14 09:26:53 UTC"));
    }

    #[test]
    fn serializes_flat() {
        let json = serde_json::to_value(success()).unwrap();
        assert_eq!(json["status"], "SUCCESS (SIMULATED)");
        assert_eq!(json["reference"], "ABABABABABABABAB");
        assert_eq!(json["amount"], "500");
        assert!(json["error_code"].is_null());

        let failed = TransactionRecord::failed(
            "alice@bank",
            "bob@bank",
            Decimal::new(250_000, 0),
            FailureStage::Amount,
            ValidationError::AmountExceedsLimit,
            at(),
        );
        let json = serde_json::to_value(failed).unwrap();
        assert_eq!(json["reference"], "N/A");
        assert_eq!(json["error_code"], "UPI_ERR_201");
    }
}
