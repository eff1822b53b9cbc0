//! The single error kind surfaced by the file storage client

use crate::types::ErrorBody;

/// Message used whenever the server did not supply a usable description
pub const RETRY_LATER_MESSAGE: &str = "Error occured, please retry later.";

/// Result alias for client operations
pub type Result<T> = std::result::Result<T, FileStorageError>;

/// Error reported by every client operation
///
/// Transport failures, unexpected statuses and server errors all collapse
/// into this type. `description` is what the user gets to see.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{description}")]
pub struct FileStorageError {
    pub description: String,
}

impl FileStorageError {
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }

    /// Generic error for failures without a server-supplied description
    pub fn retry_later() -> Self {
        Self::new(RETRY_LATER_MESSAGE)
    }
}

impl From<ErrorBody> for FileStorageError {
    fn from(body: ErrorBody) -> Self {
        Self::new(body.description)
    }
}

/// How a response status is treated
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseClass {
    /// 2xx: take the success path
    Success,
    /// 500..=600: the body carries an `ErrorBody`
    ServerError,
    /// Anything else: reported with the generic retry message
    Unexpected,
}

impl ResponseClass {
    pub fn of(status: u16) -> Self {
        match status {
            200..=299 => ResponseClass::Success,
            500..=600 => ResponseClass::ServerError,
            _ => ResponseClass::Unexpected,
        }
    }
}
