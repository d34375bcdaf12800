//! SHA-256 hashing.
//!
//! One-way: the same input always yields the same digest and the digest
//! cannot be reversed.

use sha2::{Digest, Sha256};

/// SHA-256 of `data`, lower-case hex.
#[must_use]
pub fn sha256_hex(data: &[u8]) -> String {
    hex::encode(Sha256::digest(data))
}
