//! Item-name validation, mirroring the store's server-side checks.
//!
//! The client validates before sending so obviously bad input never costs a
//! round-trip; the store remains the authority and applies the same rules.
//! Allowed characters: word characters, whitespace, comma, period, hyphen,
//! and the hiragana, katakana, and CJK-ideograph ranges.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::ValidationError;

/// Maximum item-name length in characters (not bytes).
pub const MAX_NAME_CHARS: usize = 100;

static ALLOWED_NAME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[\u{3040}-\u{309F}\u{30A0}-\u{30FF}\u{4E00}-\u{9FFF}\w\s,.-]*$")
        .expect("name whitelist regex is valid")
});

/// Validate a prospective item name and return its trimmed form.
///
/// Rejects names that are empty after trimming, longer than
/// [`MAX_NAME_CHARS`], or containing characters outside the whitelist.
pub fn validate_name(name: &str) -> Result<String, ValidationError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(ValidationError::Empty);
    }
    if name.chars().count() > MAX_NAME_CHARS {
        return Err(ValidationError::TooLong);
    }
    if !ALLOWED_NAME.is_match(name) {
        return Err(ValidationError::ForbiddenChars);
    }
    Ok(name.to_string())
}
