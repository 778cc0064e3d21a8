//! Error types for the Splunk catalog client.

use std::time::Duration;
use thiserror::Error;

/// Result type alias for client operations.
pub type Result<T> = std::result::Result<T, ClientError>;

/// Errors that can occur during Splunk catalog operations.
#[derive(Error, Debug)]
pub enum ClientError {
    /// HTTP transport error (connection refused, DNS, reset, body read failure).
    #[error("HTTP error: {0}")]
    HttpError(#[from] reqwest::Error),

    /// Request exceeded the configured timeout.
    #[error("Request timed out after {0:?}")]
    Timeout(Duration),

    /// Non-success status from Splunk.
    #[error("unexpected status code {status} at {url}: {message}")]
    ApiError {
        status: u16,
        url: String,
        message: String,
    },

    /// Response body did not have the expected shape.
    #[error("Invalid response format: {0}")]
    InvalidResponse(String),

    /// Invalid URL.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// Caller omitted a required argument.
    #[error("missing required argument: {0}")]
    MissingArgument(&'static str),

    /// Caller supplied an argument that cannot be used.
    #[error("invalid argument {name}: {message}")]
    InvalidArgument {
        name: &'static str,
        message: String,
    },

    /// The caller cancelled the operation.
    #[error("operation cancelled")]
    Cancelled,
}

impl ClientError {
    /// Check if this error came from the transport layer (network, timeout, status).
    pub fn is_transport_error(&self) -> bool {
        matches!(
            self,
            Self::HttpError(_) | Self::Timeout(_) | Self::ApiError { .. }
        )
    }

    /// Check if this error indicates a malformed or unexpected response body.
    pub fn is_decode_error(&self) -> bool {
        matches!(self, Self::InvalidResponse(_))
    }

    /// HTTP status carried by the error, if any.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::ApiError { status, .. } => Some(*status),
            Self::HttpError(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// Map a reqwest error, turning its timeout flavor into [`ClientError::Timeout`].
    pub(crate) fn from_reqwest(err: reqwest::Error, timeout: Duration) -> Self {
        if err.is_timeout() {
            Self::Timeout(timeout)
        } else {
            Self::HttpError(err)
        }
    }
}
