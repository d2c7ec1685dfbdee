//! Error types for the fest client.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A shared error type for the entire fest client.
///
/// This provides typed, structured error variants with automatic conversion
/// from common error types via the `From` trait. Each variant maps to one
/// recovery path in the UI: network failures render a retry block, server
/// rejections surface as toasts, 401s prompt re-authentication, and
/// validation failures never reach the network at all.
#[derive(Error, Debug, Clone, Serialize, Deserialize)]
pub enum FestError {
    /// Transport-level failure (connection refused, timeout).
    #[error("network failure: {message}")]
    Network { message: String, retryable: bool },

    /// The server answered with a non-2xx status or `{success: false}`.
    #[error("server rejected the request: {message}")]
    Server {
        status: Option<u16>,
        message: String,
    },

    /// HTTP 401. Recovery is re-authentication, not a retry.
    #[error("authentication required")]
    AuthRequired,

    /// Client-side validation failure. Blocks the network call entirely.
    #[error("{message}")]
    Validation { field: String, message: String },

    /// An in-flight request was cancelled (view torn down).
    #[error("request cancelled")]
    Cancelled,

    /// A required frontend region is missing at controller construction.
    #[error("required view region not found: '{0}'")]
    MissingBinding(String),

    /// Configuration error
    #[error("configuration error: {0}")]
    Config(String),

    /// Serialization/deserialization error
    #[error("serialization error: {format} - {message}")]
    Serialization { format: String, message: String },

    /// Internal error (should not happen in normal operation)
    #[error("internal error: {0}")]
    Internal(String),
}

impl FestError {
    // ============================================================================
    // Constructor helpers
    // ============================================================================

    /// Creates a Network error
    pub fn network(message: impl Into<String>, retryable: bool) -> Self {
        Self::Network {
            message: message.into(),
            retryable,
        }
    }

    /// Creates a Server rejection error
    pub fn server(status: Option<u16>, message: impl Into<String>) -> Self {
        Self::Server {
            status,
            message: message.into(),
        }
    }

    /// Creates a Validation error
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Validation {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Creates a MissingBinding error
    pub fn missing_binding(region: impl Into<String>) -> Self {
        Self::MissingBinding(region.into())
    }

    /// Creates a Config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Creates an Internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    // ============================================================================
    // Type checking methods
    // ============================================================================

    /// Check if this is an AuthRequired error
    pub fn is_auth_required(&self) -> bool {
        matches!(self, Self::AuthRequired)
    }

    /// Check if this is a Validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation { .. })
    }

    /// Check if this is a Cancelled error
    pub fn is_cancelled(&self) -> bool {
        matches!(self, Self::Cancelled)
    }

    /// Check if retrying the same request could plausibly succeed.
    ///
    /// Returns true only for transport-level failures that were flagged as
    /// retryable (connect errors, timeouts). Server rejections and auth
    /// failures are not retryable by repetition.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::Network { retryable: true, .. })
    }
}

// ============================================================================
// From implementations for automatic conversion
// ============================================================================

impl From<std::io::Error> for FestError {
    fn from(err: std::io::Error) -> Self {
        Self::Internal(format!("{} (kind: {:?})", err, err.kind()))
    }
}

impl From<serde_json::Error> for FestError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization {
            format: "JSON".to_string(),
            message: err.to_string(),
        }
    }
}

impl From<toml::de::Error> for FestError {
    fn from(err: toml::de::Error) -> Self {
        Self::Serialization {
            format: "TOML".to_string(),
            message: err.to_string(),
        }
    }
}

/// Conversion from anyhow::Error (transitional, should be removed eventually)
impl From<anyhow::Error> for FestError {
    fn from(err: anyhow::Error) -> Self {
        Self::Internal(err.to_string())
    }
}

/// A type alias for `Result<T, FestError>`.
pub type Result<T> = std::result::Result<T, FestError>;
