//! # upilab-crypto
//!
//! The cryptographic building blocks a UPI-style payment stack leans on,
//! wrapped for the lab's demonstrations:
//!
//! | Module | Primitive | Used for |
//! |--------|-----------|----------|
//! | [`hash`] | SHA-256 | integrity, fingerprints |
//! | [`mac`] | HMAC-SHA256 | request signing, tamper detection |
//! | [`cipher`] | AES-256-GCM | data at rest |
//! | [`token`] | OS CSPRNG | UTRs, session IDs, nonces |
//!
//! These are thin wrappers over audited crates. Nothing here handles real
//! keys or real money.

pub mod cipher;
pub mod error;
pub mod hash;
pub mod mac;
pub mod token;

pub use cipher::{SymmetricKey, decrypt, encrypt};
pub use error::{CryptoError, Result};
pub use hash::sha256_hex;
pub use mac::{hmac_sha256_hex, verify_hmac_sha256};
pub use token::{secure_token_hex, secure_token_urlsafe};
