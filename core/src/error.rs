//! Error types for the shopping-list client.
//!
//! # Design
//! The taxonomy separates the three ways an operation fails: local
//! validation (never reaches the network), a structured rejection from the
//! store, and a transport-level failure with no structured message.
//! `Display` gives the technical description for logs; [`SyncError::user_message`]
//! gives the localized string the presentation layer shows — the server's
//! message verbatim when it sent one, a generic fallback otherwise.

use std::fmt;

use crate::types::ItemId;

/// Generic localized fallback shown when the store gives no usable message.
pub const GENERIC_ERROR_MESSAGE: &str = "エラーが発生しました。もう一度お試しください";

/// Errors returned by the synchronizer and client parse methods.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SyncError {
    /// The name failed local validation; no request was sent.
    Validation(ValidationError),

    /// The store returned a non-success status. `message` is the parsed
    /// `{"error"}` body when the store sent one.
    Rejected { status: u16, message: Option<String> },

    /// Network or parse failure with no structured message.
    Transport(String),

    /// A command named an id that is not in the current view; no request
    /// was sent.
    UnknownItem(ItemId),
}

impl SyncError {
    /// The user-facing message for this error.
    pub fn user_message(&self) -> &str {
        match self {
            SyncError::Validation(v) => v.user_message(),
            SyncError::Rejected {
                message: Some(msg), ..
            } => msg,
            SyncError::Rejected { message: None, .. }
            | SyncError::Transport(_)
            | SyncError::UnknownItem(_) => GENERIC_ERROR_MESSAGE,
        }
    }
}

impl fmt::Display for SyncError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SyncError::Validation(v) => write!(f, "validation failed: {v}"),
            SyncError::Rejected { status, message } => match message {
                Some(msg) => write!(f, "store rejected request (HTTP {status}): {msg}"),
                None => write!(f, "store rejected request (HTTP {status})"),
            },
            SyncError::Transport(msg) => write!(f, "transport failure: {msg}"),
            SyncError::UnknownItem(id) => write!(f, "no item with id {id} in the view"),
        }
    }
}

impl std::error::Error for SyncError {}

impl From<ValidationError> for SyncError {
    fn from(err: ValidationError) -> Self {
        SyncError::Validation(err)
    }
}

/// Local name-validation failures, mirroring the store's own checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    /// Empty (or whitespace-only) name.
    Empty,
    /// More than 100 characters.
    TooLong,
    /// Contains a character outside the allowed set.
    ForbiddenChars,
}

impl ValidationError {
    pub fn user_message(&self) -> &'static str {
        match self {
            ValidationError::Empty => "商品名は空にできません",
            ValidationError::TooLong => "商品名は100文字以内にしてください",
            ValidationError::ForbiddenChars => "商品名に使用できない文字が含まれています",
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::Empty => write!(f, "name is empty"),
            ValidationError::TooLong => write!(f, "name exceeds 100 characters"),
            ValidationError::ForbiddenChars => write!(f, "name contains forbidden characters"),
        }
    }
}

impl std::error::Error for ValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn server_message_is_surfaced_verbatim() {
        let err = SyncError::Rejected {
            status: 400,
            message: Some("商品名は必須です".to_string()),
        };
        assert_eq!(err.user_message(), "商品名は必須です");
    }

    #[test]
    fn rejection_without_message_falls_back() {
        let err = SyncError::Rejected {
            status: 500,
            message: None,
        };
        assert_eq!(err.user_message(), GENERIC_ERROR_MESSAGE);
    }

    #[test]
    fn transport_failure_falls_back() {
        let err = SyncError::Transport("connection refused".to_string());
        assert_eq!(err.user_message(), GENERIC_ERROR_MESSAGE);
    }

    #[test]
    fn validation_messages_match_store() {
        assert_eq!(
            ValidationError::TooLong.user_message(),
            "商品名は100文字以内にしてください"
        );
    }
}
