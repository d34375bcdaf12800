//! Error types for the crypto helpers.
//!
//! Kept deliberately coarse: a caller learns that an operation failed,
//! not which byte was wrong.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CryptoError {
    /// AEAD encryption failed.
    #[error("UPI_ERR_300: encryption failed")]
    EncryptFailed,

    /// Wrong key, or the sealed message was tampered with.
    #[error("UPI_ERR_301: decryption failed")]
    DecryptFailed,

    /// Sealed input shorter than a nonce plus tag.
    #[error("UPI_ERR_302: ciphertext too short: need at least {min} bytes, got {actual}")]
    CiphertextTooShort { min: usize, actual: usize },

    /// The supplied MAC tag does not match the message.
    #[error("UPI_ERR_303: MAC verification failed")]
    MacMismatch,

    /// The supplied MAC tag is not valid hex.
    #[error("UPI_ERR_304: malformed MAC tag")]
    MalformedTag,
}

/// Crate-wide `Result` alias.
pub type Result<T> = std::result::Result<T, CryptoError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_errors_have_prefix() {
        let errors = [
            CryptoError::EncryptFailed,
            CryptoError::DecryptFailed,
            CryptoError::CiphertextTooShort { min: 28, actual: 3 },
            CryptoError::MacMismatch,
            CryptoError::MalformedTag,
        ];
        for err in errors {
            let msg = err.to_string();
            assert!(msg.starts_with("UPI_ERR_3"), "Error missing prefix: {msg}");
        }
    }
}
