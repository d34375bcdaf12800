//! AES-256-GCM symmetric encryption.
//!
//! Sealed format: `nonce (12 bytes) || ciphertext || tag (16 bytes)`.
//! Nonces are drawn fresh from the OS CSPRNG for every message, so the
//! same plaintext encrypts differently each time.

use std::fmt;

use aes_gcm::{
    Aes256Gcm, Key, Nonce,
    aead::{Aead, KeyInit},
};
use rand::{RngCore, rngs::OsRng};

use crate::{CryptoError, Result};

/// AES-256 key length in bytes.
pub const KEY_LEN: usize = 32;

/// GCM nonce length in bytes.
pub const NONCE_LEN: usize = 12;

/// GCM authentication tag length in bytes.
pub const TAG_LEN: usize = 16;

/// A 256-bit symmetric key. `Debug` never prints the key material.
#[derive(Clone, PartialEq, Eq)]
pub struct SymmetricKey([u8; KEY_LEN]);

impl SymmetricKey {
    /// Generate a fresh random key.
    #[must_use]
    pub fn generate() -> Self {
        let mut bytes = [0u8; KEY_LEN];
        OsRng.fill_bytes(&mut bytes);
        Self(bytes)
    }

    #[must_use]
    pub fn from_bytes(bytes: [u8; KEY_LEN]) -> Self {
        Self(bytes)
    }

    #[must_use]
    pub fn as_bytes(&self) -> &[u8; KEY_LEN] {
        &self.0
    }

    fn cipher(&self) -> Aes256Gcm {
        Aes256Gcm::new(Key::<Aes256Gcm>::from_slice(&self.0))
    }
}

impl fmt::Debug for SymmetricKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SymmetricKey(<redacted>)")
    }
}

/// Encrypt `plaintext` under `key` with a random nonce.
///
/// # Errors
/// Returns [`CryptoError::EncryptFailed`] if the AEAD rejects the input.
pub fn encrypt(key: &SymmetricKey, plaintext: &[u8]) -> Result<Vec<u8>> {
    let mut nonce_bytes = [0u8; NONCE_LEN];
    OsRng.fill_bytes(&mut nonce_bytes);

    let ciphertext = key
        .cipher()
        .encrypt(Nonce::from_slice(&nonce_bytes), plaintext)
        .map_err(|_| CryptoError::EncryptFailed)?;

    let mut sealed = Vec::with_capacity(NONCE_LEN + ciphertext.len());
    sealed.extend_from_slice(&nonce_bytes);
    sealed.extend_from_slice(&ciphertext);
    Ok(sealed)
}

/// Decrypt a message produced by [`encrypt`].
///
/// # Errors
/// - [`CryptoError::CiphertextTooShort`] if `sealed` cannot hold a nonce and tag
/// - [`CryptoError::DecryptFailed`] on a wrong key or any tampering
pub fn decrypt(key: &SymmetricKey, sealed: &[u8]) -> Result<Vec<u8>> {
    let min = NONCE_LEN + TAG_LEN;
    if sealed.len() < min {
        return Err(CryptoError::CiphertextTooShort {
            min,
            actual: sealed.len(),
        });
    }

    let (nonce_bytes, ciphertext) = sealed.split_at(NONCE_LEN);
    key.cipher()
        .decrypt(Nonce::from_slice(nonce_bytes), ciphertext)
        .map_err(|_| CryptoError::DecryptFailed)
}
