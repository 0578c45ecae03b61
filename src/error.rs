//! Error types for the Azure OpenAI chat client.

use std::collections::HashMap;
use thiserror::Error;

/// Errors produced by this crate.
///
/// Two kinds only: configuration problems detected before any network
/// activity, and request failures. A request failure carries whatever
/// diagnostics were available — `status`, `body` and `headers` are populated
/// when the server responded with an error, and empty when no response was
/// received at all.
#[derive(Debug, Error)]
pub enum AzureError {
    /// Missing or empty configuration. Raised synchronously, before any
    /// network attempt; not retryable.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// The HTTP call failed, either with an error response or with none.
    #[error("Request error: {message}")]
    Request {
        /// HTTP status code, when a response was received.
        status: Option<u16>,
        /// Raw response body text, when a response was received.
        body: Option<String>,
        /// Response headers, when a response was received.
        headers: Option<HashMap<String, String>>,
        /// Human-readable failure description.
        message: String,
    },
}

impl AzureError {
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration(message.into())
    }

    /// Request error for a non-success HTTP response.
    pub fn http_status(
        status: u16,
        body: String,
        headers: HashMap<String, String>,
        message: impl Into<String>,
    ) -> Self {
        Self::Request {
            status: Some(status),
            body: Some(body),
            headers: Some(headers),
            message: message.into(),
        }
    }

    /// Request error for a transport-level failure (no response received).
    pub fn transport(message: impl Into<String>) -> Self {
        Self::Request {
            status: None,
            body: None,
            headers: None,
            message: message.into(),
        }
    }

    /// HTTP status code, if the server responded with one.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::Request { status, .. } => *status,
            Self::Configuration(_) => None,
        }
    }

    pub fn is_configuration(&self) -> bool {
        matches!(self, Self::Configuration(_))
    }
}
