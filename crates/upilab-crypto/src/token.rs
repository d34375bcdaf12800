//! Secure random tokens for session IDs, nonces, and references.

use base64::{Engine, engine::general_purpose::URL_SAFE_NO_PAD};
use rand::{RngCore, rngs::OsRng};

fn random_bytes(n_bytes: usize) -> Vec<u8> {
    let mut bytes = vec![0u8; n_bytes];
    OsRng.fill_bytes(&mut bytes);
    bytes
}

/// `n_bytes` of OS randomness as lower-case hex (`2 * n_bytes` characters).
#[must_use]
pub fn secure_token_hex(n_bytes: usize) -> String {
    hex::encode(random_bytes(n_bytes))
}

/// `n_bytes` of OS randomness as unpadded URL-safe base64.
#[must_use]
pub fn secure_token_urlsafe(n_bytes: usize) -> String {
    URL_SAFE_NO_PAD.encode(random_bytes(n_bytes))
}
