//! The `{success, message|error}` acknowledgement envelope.

use serde::Deserialize;

use fest_core::{FestError, Result};

/// Acknowledgement returned by mutating endpoints.
///
/// The backend signals failure either via HTTP status or via
/// `success: false` in a 200 body; both are treated as the same uniform
/// rejection signal.
#[derive(Debug, Clone, Deserialize)]
pub struct Ack {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

impl Ack {
    /// Converts the envelope into a result, carrying the server's success
    /// message through for the toast surface.
    pub fn into_result(self) -> Result<Option<String>> {
        if self.success {
            Ok(self.message)
        } else {
            let message = self
                .error
                .or(self.message)
                .unwrap_or_else(|| "the server rejected the request".to_string());
            Err(FestError::Server {
                status: None,
                message,
            })
        }
    }
}
