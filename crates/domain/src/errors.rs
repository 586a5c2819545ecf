//! Error types used throughout the client

use std::time::Duration;

use thiserror::Error;

/// Broad classes of failure, used by callers to pick a recovery policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Invalid client configuration, detected at construction
    Config,
    /// The request could not be built (bad identifier, unencodable body)
    Request,
    /// Connection failure, timeout or cancellation; never carries a status
    Transport,
    /// The service answered with a non-2xx status
    Status,
    /// The response did not match the expected wire shape
    Decode,
}

/// Main error type for adaptive metrics operations
#[derive(Error, Debug)]
pub enum AdaptiveMetricsError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Timeout after {0:?}")]
    Timeout(Duration),

    #[error("Operation cancelled")]
    Cancelled,

    #[error("{method} {path} returned status {status}: {body}")]
    Status { status: u16, method: String, path: String, body: String },

    #[error("Failed to decode response of {method} {path}: {message}")]
    Decode { method: String, path: String, message: String },
}

impl AdaptiveMetricsError {
    /// Get the error category for this error
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Config(_) => ErrorCategory::Config,
            Self::InvalidRequest(_) => ErrorCategory::Request,
            Self::Network(_) | Self::Timeout(_) | Self::Cancelled => ErrorCategory::Transport,
            Self::Status { .. } => ErrorCategory::Status,
            Self::Decode { .. } => ErrorCategory::Decode,
        }
    }

    /// HTTP status code, for errors produced by a non-2xx response
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Raw response body text, for errors produced by a non-2xx response
    pub fn body(&self) -> Option<&str> {
        match self {
            Self::Status { body, .. } => Some(body),
            _ => None,
        }
    }

    /// True for a 404 response.
    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }

    /// True when the service rejected a conditional write (stale `If-Match`).
    pub fn is_conflict(&self) -> bool {
        matches!(self.status(), Some(409 | 412))
    }

    /// True when no response was received (network, timeout, cancellation).
    pub fn is_transport(&self) -> bool {
        self.category() == ErrorCategory::Transport
    }
}

/// Result type alias for adaptive metrics operations
pub type Result<T> = std::result::Result<T, AdaptiveMetricsError>;
