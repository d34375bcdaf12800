//! # upilab-types
//!
//! Shared types, errors, and configuration for the **UPI Lab** payment
//! simulator.
//!
//! This crate is the leaf dependency of the workspace. It defines:
//!
//! - **Identifiers**: [`Vpa`] (validated `user@handle`), [`Reference`] (UTR token)
//! - **Transaction model**: [`TransactionRecord`], [`TxOutcome`], [`FailureStage`]
//! - **Configuration**: [`SimConfig`]
//! - **Errors**: [`ValidationError`] with `UPI_ERR_` prefix codes
//! - **Constants**: limits, sentinels, and status markers

pub mod config;
pub mod constants;
pub mod error;
pub mod reference;
pub mod transaction;
pub mod vpa;

// Re-export all primary types at crate root for ergonomic imports:
//   use upilab_types::{TransactionRecord, Vpa, ValidationError, ...};

pub use config::*;
pub use error::*;
pub use reference::*;
pub use transaction::*;
pub use vpa::*;

// Constants are accessed via `upilab_types::constants::FOO`
// (not re-exported to avoid name collisions).
