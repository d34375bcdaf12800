//! Unique Transaction Reference (UTR) token.

use std::fmt;

use serde::Serialize;

use crate::constants::{REFERENCE_BYTES, REFERENCE_LEN};

/// A UTR-like tracking token: 16 upper-case hexadecimal characters.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Ord, PartialOrd, Serialize)]
#[serde(transparent)]
pub struct Reference(String);

impl Reference {
    /// Wrap an already-rendered token.
    ///
    /// Returns `None` unless `token` is exactly [`REFERENCE_LEN`] characters
    /// of `0-9A-F`.
    #[must_use]
    pub fn parse(token: &str) -> Option<Self> {
        Self::is_well_formed(token).then(|| Self(token.to_string()))
    }

    /// Build a reference from raw random bytes (upper-case hex).
    #[must_use]
    pub fn from_bytes(bytes: [u8; REFERENCE_BYTES]) -> Self {
        Self(hex::encode_upper(bytes))
    }

    /// `true` if `token` has the shape of a reference.
    #[must_use]
    pub fn is_well_formed(token: &str) -> bool {
        token.len() == REFERENCE_LEN
            && token
                .bytes()
                .all(|b| b.is_ascii_digit() || (b'A'..=b'F').contains(&b))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Reference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
