//! Virtual Payment Address (`user@handle`).
//!
//! A [`Vpa`] only exists after a raw string has passed the identifier
//! validator in `upilab-sim`; both parts are stored lower-cased so that
//! comparison is case-insensitive. The raw, as-typed string stays on the
//! [`TransactionRecord`](crate::TransactionRecord).

use std::fmt;

use serde::Serialize;

use crate::constants::VPA_SEPARATOR;

/// A validated, normalized VPA.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Ord, PartialOrd, Serialize)]
pub struct Vpa {
    user: String,
    handle: String,
}

impl Vpa {
    /// Assemble a VPA from parts that have already been checked.
    ///
    /// Parts are lower-cased here so callers cannot construct a
    /// mixed-case value.
    #[must_use]
    pub fn from_validated_parts(user: &str, handle: &str) -> Self {
        Self {
            user: user.to_lowercase(),
            handle: handle.to_lowercase(),
        }
    }

    /// The local (user) part.
    #[must_use]
    pub fn user(&self) -> &str {
        &self.user
    }

    /// The handle (PSP) part.
    #[must_use]
    pub fn handle(&self) -> &str {
        &self.handle
    }
}

impl fmt::Display for Vpa {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{VPA_SEPARATOR}{}", self.user, self.handle)
    }
}
