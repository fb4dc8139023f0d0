//! Normalized API error model.
//!
//! Every failure the HTTP layer can produce is collapsed into one
//! `{status, message}` shape before it reaches view-model logic, so pages
//! never have to distinguish transport failures from server-reported ones.

use thiserror::Error;

/// Result type used across the client layers.
pub type ApiResult<T> = Result<T, ApiError>;

/// A normalized API failure.
///
/// `status` is the HTTP status the server answered with, or a synthetic one
/// for failures where no response was received (503) or the request was never
/// sent (500).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("{message} (status {status})")]
pub struct ApiError {
    pub status: u16,
    pub message: String,
}

impl ApiError {
    pub fn new(status: u16, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    /// Server answered with a non-2xx status. The message is the body's
    /// `error` field when one was extracted, else the generic fallback.
    pub fn server(status: u16, body_error: Option<String>) -> Self {
        Self {
            status,
            message: body_error.unwrap_or_else(|| "An error occurred".to_string()),
        }
    }

    /// Request was sent but no response came back.
    pub fn unavailable() -> Self {
        Self::new(503, "Service unavailable. Please try again later.")
    }

    /// Request never left the client (setup or decode failure).
    pub fn unexpected() -> Self {
        Self::new(500, "An unexpected error occurred.")
    }

    pub fn is_unauthorized(&self) -> bool {
        self.status == 401
    }
}
