//! Client error types
//!
//! The three failure categories stay distinct at the type level:
//! validation rejections (`ValidationError`), submission failures
//! (`ClientError` surfaced through the notifier), and news-load
//! failures (`ClientError` swallowed after logging).

use crate::messages;
use thiserror::Error;

/// Rejection reasons produced by the reservation form validator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required field is empty after trimming
    #[error("required field missing")]
    MissingRequired,

    /// Email does not match the local@domain.tld shape
    #[error("email address is malformed")]
    InvalidEmail,

    /// Phone contains characters other than digits and hyphens
    #[error("phone number is malformed")]
    InvalidPhone,
}

impl ValidationError {
    /// Fixed on-screen message for this rejection
    pub fn user_message(&self) -> &'static str {
        match self {
            Self::MissingRequired => messages::REQUIRED_FIELDS,
            Self::InvalidEmail => messages::INVALID_EMAIL,
            Self::InvalidPhone => messages::INVALID_PHONE,
        }
    }
}

/// Errors from talking to the Table API.
#[derive(Debug, Error)]
pub enum ClientError {
    /// Transport-level failure (connect, timeout, body read)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The API answered with a non-success status
    #[error("unexpected status: {0}")]
    Status(reqwest::StatusCode),

    /// Serialization error
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type for client operations
pub type ClientResult<T> = Result<T, ClientError>;
