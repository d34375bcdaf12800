//! Walkthrough of the crypto primitives behind a payment request.
//!
//! Four numbered sections: hashing, request signing, symmetric
//! encryption, secure randomness. Each section prints the inputs, the
//! result, and a one-line note.

use std::io::Write;

use anyhow::ensure;
use upilab_crypto::{
    SymmetricKey, decrypt, encrypt, hmac_sha256_hex, secure_token_hex, secure_token_urlsafe,
    sha256_hex, verify_hmac_sha256,
};
use upilab_sim::generate_reference;

const RULE_WIDTH: usize = 60;

pub const SAMPLE_PAYLOAD: &[u8] = b"UPI_TRANSACTION_1000_9876543210@paytm";
pub const SAMPLE_HMAC_KEY: &[u8] = b"secret_api_key_do_not_share";
pub const SAMPLE_REQUEST: &[u8] = b"POST /upi/collect amount=100 vpa=user@paytm";
pub const SAMPLE_SECRET: &[u8] = b"sensitive_data:account_number_12345";

fn section<W: Write>(out: &mut W, title: &str) -> std::io::Result<()> {
    let rule = "=".repeat(RULE_WIDTH);
    writeln!(out)?;
    writeln!(out, "{rule}")?;
    writeln!(out, "  {title}")?;
    writeln!(out, "{rule}")
}

/// 1. SHA-256 of a sample payment string.
pub fn demo_hash<W: Write>(out: &mut W) -> anyhow::Result<String> {
    section(out, "1. SHA-256 HASHING (One-way, used for integrity)")?;
    let digest = sha256_hex(SAMPLE_PAYLOAD);
    writeln!(out, "  Input : {}", String::from_utf8_lossy(SAMPLE_PAYLOAD))?;
    writeln!(out, "  Hash  : {digest}")?;
    writeln!(out, "  Note  : Same input always gives same hash. Cannot reverse.")?;
    Ok(digest)
}

/// 2. HMAC-SHA256 over a sample request, plus a tamper check.
pub fn demo_hmac<W: Write>(out: &mut W) -> anyhow::Result<()> {
    section(out, "2. HMAC-SHA256 (Message authentication)")?;
    let tag = hmac_sha256_hex(SAMPLE_HMAC_KEY, SAMPLE_REQUEST);
    writeln!(out, "  Key     : (hidden, {} bytes)", SAMPLE_HMAC_KEY.len())?;
    writeln!(out, "  Message : {}", String::from_utf8_lossy(SAMPLE_REQUEST))?;
    writeln!(out, "  HMAC    : {}...", &tag[..32])?;

    verify_hmac_sha256(SAMPLE_HMAC_KEY, SAMPLE_REQUEST, &tag)?;
    let tampered = b"POST /upi/collect amount=900 vpa=user@paytm";
    ensure!(
        verify_hmac_sha256(SAMPLE_HMAC_KEY, tampered, &tag).is_err(),
        "tampered request verified"
    );
    writeln!(out, "  Tamper  : amount=100 -> amount=900 REJECTED")?;
    writeln!(out, "  Note    : Server verifies with same key. Tampering changes HMAC.")?;
    Ok(())
}

/// 3. AES-256-GCM encrypt/decrypt round trip.
pub fn demo_cipher<W: Write>(out: &mut W) -> anyhow::Result<()> {
    section(out, "3. SYMMETRIC ENCRYPTION (AES-256-GCM, authenticated)")?;
    let key = SymmetricKey::generate();
    let sealed = encrypt(&key, SAMPLE_SECRET)?;
    let opened = decrypt(&key, &sealed)?;
    ensure!(opened == SAMPLE_SECRET, "decryption did not round-trip");

    let preview = &sealed[..sealed.len().min(20)];
    writeln!(out, "  Plain     : {}", String::from_utf8_lossy(SAMPLE_SECRET))?;
    writeln!(out, "  Encrypted : {}...", hex::encode(preview))?;
    writeln!(out, "  Decrypted : {}", String::from_utf8_lossy(&opened))?;
    writeln!(out, "  Note      : Same key encrypts and decrypts. Used for data at rest.")?;
    Ok(())
}

/// 4. Secure random token, nonce, and a UTR.
pub fn demo_random<W: Write>(out: &mut W) -> anyhow::Result<()> {
    section(out, "4. SECURE RANDOM (Tokens, nonces, UTR)")?;
    writeln!(out, "  Token : {}", secure_token_hex(16))?;
    writeln!(out, "  Nonce : {}", secure_token_urlsafe(8))?;
    writeln!(out, "  UTR   : {}", generate_reference())?;
    writeln!(out, "  Note  : Used for UTR, session IDs. Cryptographically secure.")?;
    Ok(())
}

/// Run all four demonstrations.
pub fn run_all<W: Write>(out: &mut W) -> anyhow::Result<()> {
    let banner = "#".repeat(RULE_WIDTH);
    writeln!(out)?;
    writeln!(out, "{banner}")?;
    writeln!(out, "#  UPI PAYMENT ENCRYPTION - EDUCATIONAL DEMO")?;
    writeln!(out, "#  These concepts are used in UPI, PhonePe, Google Pay, etc.")?;
    writeln!(out, "{banner}")?;

    demo_hash(out)?;
    demo_hmac(out)?;
    demo_cipher(out)?;
    demo_random(out)?;

    let rule = "=".repeat(RULE_WIDTH);
    writeln!(out)?;
    writeln!(out, "{rule}")?;
    writeln!(out, "  Demos complete.")?;
    writeln!(out, "{rule}")?;
    tracing::debug!("crypto demo finished");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_section_prints_digest() {
        let mut buf = Vec::new();
        let digest = demo_hash(&mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert_eq!(digest.len(), 64);
        assert!(text.contains(&format!("  Hash  : {digest}")));
    }

    #[test]
    fn hmac_section_hides_key_and_truncates_tag() {
        let mut buf = Vec::new();
        demo_hmac(&mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert!(!text.contains("secret_api_key_do_not_share"));
        assert!(text.contains("(hidden, 27 bytes)"));
        assert!(text.contains("REJECTED"));

        let full = hmac_sha256_hex(SAMPLE_HMAC_KEY, SAMPLE_REQUEST);
        assert!(text.contains(&format!("{}...", &full[..32])));
        assert!(!text.contains(&full));
    }

    #[test]
    fn run_all_has_four_sections() {
        let mut buf = Vec::new();
        run_all(&mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();
        for n in 1..=4 {
            assert!(text.contains(&format!("  {n}. ")), "section {n} missing");
        }
        assert!(text.contains("Decrypted : sensitive_data:account_number_12345"));
    }
}
