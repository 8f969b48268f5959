//! Error types used throughout the client

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Main error type for the storefront client
///
/// Every operation either succeeds completely or returns one of these
/// variants. Nothing is retried.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "detail")]
pub enum StorefrontError {
    /// Token request could not be sent, was rejected, or returned an
    /// undecodable body.
    #[error("Authentication error: {0}")]
    Auth(String),

    /// The request or client was not configured correctly (for example a
    /// descriptor with no operation assigned).
    #[error("Configuration error: {0}")]
    Config(String),

    /// Network-level failure or non-success status during a resource call.
    #[error("Transport error: {message}")]
    Transport {
        message: String,
        /// HTTP status when the server answered, `None` for connection
        /// failures and timeouts.
        status: Option<u16>,
    },

    /// Response body did not match the expected envelope.
    #[error("Decode error: {0}")]
    Decode(String),

    /// Request payload could not be encoded as JSON.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl StorefrontError {
    /// Transport failure without an HTTP status.
    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport { message: message.into(), status: None }
    }

    /// HTTP status attached to a transport failure, if any.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Transport { status, .. } => *status,
            _ => None,
        }
    }
}

/// Result type alias for storefront operations
pub type Result<T> = std::result::Result<T, StorefrontError>;
