//! Error types for Profdeck.
//!
//! This module provides a unified error handling approach using `thiserror`.

use thiserror::Error;

/// Result type alias for Profdeck operations.
pub type Result<T> = std::result::Result<T, ProfdeckError>;

/// Errors that can occur in Profdeck.
#[derive(Debug, Error)]
pub enum ProfdeckError {
    /// Transport-level HTTP failure (connection refused, reset, TLS...).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The backend answered with a non-success status.
    #[error("Unexpected status {status} from {url}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Requested URL.
        url: String,
    },

    /// The response body could not be decoded.
    #[error("Failed to decode response from {url}")]
    Decode {
        /// Requested URL.
        url: String,
        /// Underlying JSON error.
        #[source]
        source: serde_json::Error,
    },

    /// Invalid backend base URL.
    #[error("Invalid API URL '{url}': {reason}")]
    InvalidUrl {
        /// The rejected URL text.
        url: String,
        /// Why it was rejected.
        reason: String,
    },

    /// Failed to access clipboard.
    #[error("Clipboard error: {0}")]
    Clipboard(#[from] arboard::Error),
}

impl ProfdeckError {
    /// Create a Status error.
    pub fn status(status: u16, url: impl Into<String>) -> Self {
        Self::Status {
            status,
            url: url.into(),
        }
    }

    /// Create a Decode error.
    pub fn decode(url: impl Into<String>, source: serde_json::Error) -> Self {
        Self::Decode {
            url: url.into(),
            source,
        }
    }

    /// Create an InvalidUrl error.
    pub fn invalid_url(url: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidUrl {
            url: url.into(),
            reason: reason.into(),
        }
    }
}
