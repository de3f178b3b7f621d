//! Service error types.
//!
//! Defined here so the submission session can classify failures without
//! string matching: transport and parse errors surface their underlying
//! description, while HTTP-level failures collapse to a fixed message that
//! never echoes the response body.

use thiserror::Error;

/// Fixed message shown for non-2xx responses.
pub const GENERIC_FAILURE: &str = "failed to get prediction";

/// Errors that can occur when talking to the prediction service.
#[derive(Debug, Clone, Error)]
pub enum ServiceError {
    /// The connection could not be established or dropped mid-request.
    #[error("network error: {0}")]
    Network(String),

    /// The request exceeded the client timeout.
    #[error("request timed out after {0}s")]
    Timeout(u64),

    /// The service answered with a non-success status.
    #[error("prediction service returned HTTP {status}")]
    Http { status: u16 },

    /// The response body was not the expected JSON shape.
    #[error("failed to parse response: {0}")]
    Parse(String),
}

impl ServiceError {
    /// The message surfaced to the user.
    ///
    /// Non-2xx statuses get the fixed generic message; everything else
    /// carries the underlying failure description.
    pub fn user_message(&self) -> String {
        match self {
            ServiceError::Http { .. } => GENERIC_FAILURE.to_string(),
            other => other.to_string(),
        }
    }
}
