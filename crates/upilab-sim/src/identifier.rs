//! VPA format validator.
//!
//! Rules run in order and the first failure wins:
//!
//! 1. non-empty with an `@` separator
//! 2. exactly two non-empty parts
//! 3. user part at least [`MIN_USERNAME_LEN`] characters
//! 4. user part in `[a-z0-9._-]`
//! 5. handle in `[a-z0-9]`
//!
//! Both parts are lower-cased before checks 3-5, which makes the rules
//! case-insensitive.

use upilab_types::{
    Result, ValidationError, Vpa,
    constants::{MIN_USERNAME_LEN, VPA_SEPARATOR},
};

/// Validate a raw `user@handle` string.
///
/// On success returns the normalized [`Vpa`].
///
/// # Errors
/// Returns the [`ValidationError`] of the first rule that fails.
pub fn validate_identifier(raw: &str) -> Result<Vpa> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::MissingSeparator);
    }

    if !trimmed.contains(VPA_SEPARATOR) {
        // A bare token is a username with no handle; a short one is
        // reported as such.
        if trimmed.chars().count() < MIN_USERNAME_LEN {
            return Err(ValidationError::UsernameTooShort);
        }
        return Err(ValidationError::MissingSeparator);
    }

    let mut parts = trimmed.split(VPA_SEPARATOR);
    let (Some(user), Some(handle), None) = (parts.next(), parts.next(), parts.next()) else {
        return Err(ValidationError::InvalidFormat);
    };

    let user = user.trim().to_lowercase();
    let handle = handle.trim().to_lowercase();
    if user.is_empty() || handle.is_empty() {
        return Err(ValidationError::InvalidFormat);
    }

    if user.chars().count() < MIN_USERNAME_LEN {
        return Err(ValidationError::UsernameTooShort);
    }

    if !user.chars().all(is_username_char) {
        return Err(ValidationError::InvalidUsernameChars);
    }

    if !handle.chars().all(is_handle_char) {
        return Err(ValidationError::InvalidHandle);
    }

    Ok(Vpa::from_validated_parts(&user, &handle))
}

fn is_username_char(c: char) -> bool {
    is_handle_char(c) || matches!(c, '.' | '_' | '-')
}

fn is_handle_char(c: char) -> bool {
    c.is_ascii_lowercase() || c.is_ascii_digit()
}
