//! HMAC-SHA256 request signing.

use hmac::{Hmac, Mac, digest::KeyInit};
use sha2::Sha256;

use crate::{CryptoError, Result};

type HmacSha256 = Hmac<Sha256>;

fn keyed(key: &[u8]) -> HmacSha256 {
    // Keys longer than the block are hashed and shorter ones zero-padded,
    // so `InvalidLength` is never returned for HMAC.
    <HmacSha256 as KeyInit>::new_from_slice(key).expect("HMAC accepts keys of any length")
}

/// HMAC-SHA256 tag of `message` under `key`, lower-case hex.
#[must_use]
pub fn hmac_sha256_hex(key: &[u8], message: &[u8]) -> String {
    let mut mac = keyed(key);
    mac.update(message);
    hex::encode(mac.finalize().into_bytes())
}

/// Verify a hex-encoded tag in constant time.
///
/// # Errors
/// - [`CryptoError::MalformedTag`] if `tag_hex` is not hex
/// - [`CryptoError::MacMismatch`] if the tag does not match
pub fn verify_hmac_sha256(key: &[u8], message: &[u8], tag_hex: &str) -> Result<()> {
    let tag = hex::decode(tag_hex).map_err(|_| CryptoError::MalformedTag)?;
    let mut mac = keyed(key);
    mac.update(message);
    mac.verify_slice(&tag).map_err(|_| CryptoError::MacMismatch)
}

#[cfg(test)]
mod tests {
    use super::*;

    const KEY: &[u8] = b"secret_api_key_do_not_share";
    const MSG: &[u8] = b"POST /upi/collect amount=100 vpa=user@paytm";

    #[test]
    fn rfc4231_case_2() {
        assert_eq!(
            hmac_sha256_hex(b"Jefe", b"what do ya want for nothing?"),
            "5bdcc146bf60754e6a042426089575c75a003f089d2739839dec58b964ec3843"
        );
    }

    #[test]
    fn sign_then_verify() {
        let tag = hmac_sha256_hex(KEY, MSG);
        assert!(verify_hmac_sha256(KEY, MSG, &tag).is_ok());
    }

    #[test]
    fn tampered_message_fails() {
        let tag = hmac_sha256_hex(KEY, MSG);
        let tampered = b"POST /upi/collect amount=900 vpa=user@paytm";
        assert_eq!(
            verify_hmac_sha256(KEY, tampered, &tag),
            Err(CryptoError::MacMismatch)
        );
    }

    #[test]
    fn wrong_key_fails() {
        let tag = hmac_sha256_hex(KEY, MSG);
        assert_eq!(
            verify_hmac_sha256(b"another_key", MSG, &tag),
            Err(CryptoError::MacMismatch)
        );
    }

    #[test]
    fn truncated_tag_fails() {
        let tag = hmac_sha256_hex(KEY, MSG);
        assert_eq!(
            verify_hmac_sha256(KEY, MSG, &tag[..32]),
            Err(CryptoError::MacMismatch)
        );
    }

    #[test]
    fn any_key_length_is_accepted() {
        let keys: [&[u8]; 4] = [b"", b"k", &[0x5a; 64], &[0xa5; 200]];
        for key in keys {
            let tag = hmac_sha256_hex(key, MSG);
            assert_eq!(tag.len(), 64);
            assert!(verify_hmac_sha256(key, MSG, &tag).is_ok());
        }
    }

    #[test]
    fn non_hex_tag_is_malformed() {
        assert_eq!(
            verify_hmac_sha256(KEY, MSG, "not-hex"),
            Err(CryptoError::MalformedTag)
        );
    }
}
