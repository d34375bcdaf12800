//! # upilab-sim
//!
//! **Payment request validator & simulator** for the UPI lab.
//!
//! ## Architecture
//!
//! 1. **identifier**: VPA format checks (`user@handle`)
//! 2. **amount**: positivity and ceiling checks
//! 3. **reference**: UTR token drawn from the OS CSPRNG
//! 4. **simulator**: runs the checks in order and emits a
//!    [`TransactionRecord`](upilab_types::TransactionRecord)
//!
//! ## Request Flow
//!
//! ```text
//! simulate() → validate_identifier(sender) → validate_identifier(receiver)
//!            → validate_amount() → generate_reference() → SUCCESS record
//! ```
//!
//! The first failing check short-circuits into a FAILED record. Nothing is
//! persisted and no state survives between calls.

pub mod amount;
pub mod identifier;
pub mod reference;
pub mod simulator;

pub use amount::{validate_amount, validate_amount_with_limit};
pub use identifier::validate_identifier;
pub use reference::generate_reference;
pub use simulator::{PaymentSimulator, simulate};
