//! The normalized error taxonomy for API access.
//!
//! Every failure mode of a backend call lands in exactly one [`ApiError`]
//! variant. The HTTP status code is an explicit field rather than metadata
//! stashed on a generic error, so callers can branch on it directly
//! (404 → "not found" fallback, 400 → "duplicate" semantics) without
//! string-matching the message.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors surfaced by the API client and shared with the gateway.
#[derive(Debug, Clone, Error, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum ApiError {
    /// The network call could not complete (DNS, connection refused, ...).
    #[error("API request error occurred: {0}")]
    Transport(String),

    /// The request exceeded the configured deadline, in seconds.
    /// Kept separate from [`ApiError::Transport`] so callers can tell a
    /// slow backend from an unreachable one.
    #[error("API request timed out after {0}s")]
    Timeout(u64),

    /// The backend responded with a non-2xx status. The message is the
    /// body's `message` field when present, otherwise a generated
    /// `"API request failed: {status}"` string.
    #[error("{message}")]
    Http { status: u16, message: String },

    /// A successful response body that is not valid JSON, or does not fit
    /// the shape the caller asked for.
    #[error("Failed to decode API response: {0}")]
    Decode(String),

    /// A request payload that could not be serialized to JSON.
    #[error("Failed to encode request body: {0}")]
    Encode(String),

    /// Configuration loading or client construction failed.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl ApiError {
    /// Build an HTTP error from a status code and an optional body message.
    ///
    /// An absent or empty message falls back to the generic
    /// `"API request failed: {status}"` form.
    pub fn http(status: u16, message: Option<String>) -> Self {
        let message = message
            .filter(|m| !m.is_empty())
            .unwrap_or_else(|| format!("API request failed: {status}"));
        ApiError::Http { status, message }
    }

    /// The HTTP status code, when this error carries one.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Http { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Whether this is a 404 response. Lookup-style callers treat this as
    /// "return `None`" rather than a propagated failure.
    pub fn is_not_found(&self) -> bool {
        matches!(self, ApiError::Http { status: 404, .. })
    }
}

/// Standard Result type for API operations.
pub type ApiResult<T> = std::result::Result<T, ApiError>;
