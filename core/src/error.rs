//! Error types for the employee directory.
//!
//! # Design
//! `NotFound` is kept apart from `Upstream` because callers map it to a
//! specific client-facing status. Every other non-2xx answer from the
//! employee server lands in `Upstream` with the raw status and body.

use thiserror::Error;

/// Errors returned by `DirectoryClient` and `DirectoryService`.
#[derive(Debug, Error)]
pub enum DirectoryError {
    /// The employee server answered with a non-2xx status.
    #[error("upstream returned HTTP {status}: {body}")]
    Upstream { status: u16, body: String },

    /// The response body could not be decoded into the expected shape.
    #[error("failed to decode upstream response: {0}")]
    Decode(String),

    /// Raised by the delete flow only.
    #[error("Employee not found with ID {id}")]
    NotFound { id: String },

    /// The request payload could not be serialized to JSON.
    #[error("failed to serialize request body: {0}")]
    Serialization(String),

    /// The HTTP round trip itself failed (connection refused, I/O).
    #[error("transport error: {0}")]
    Transport(String),
}

impl DirectoryError {
    /// HTTP-equivalent status for this error.
    pub fn status_code(&self) -> u16 {
        match self {
            DirectoryError::Upstream { status, .. } => *status,
            DirectoryError::NotFound { .. } => 400,
            DirectoryError::Decode(_)
            | DirectoryError::Serialization(_)
            | DirectoryError::Transport(_) => 500,
        }
    }
}

pub type DirectoryResult<T> = Result<T, DirectoryError>;
