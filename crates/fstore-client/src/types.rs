//! File storage API data transfer objects
//!
//! These types mirror the JSON exchanged with the API server.

use bytes::Bytes;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// A stored file as listed by the server
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct File {
    /// Server-assigned unique id
    pub id: u64,

    /// Original file name
    pub name: String,

    /// Upload time as recorded by the server (no timezone)
    pub created_at: NaiveDateTime,
}

/// Response of `GET /count`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileCount {
    pub count: u64,
}

/// Error payload returned with 5xx responses
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    /// Always "FileStorageError"
    pub error: String,
    pub description: String,
}

impl ErrorBody {
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            error: "FileStorageError".to_string(),
            description: description.into(),
        }
    }
}

/// A file to upload as the `file` field of a multipart form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Upload {
    pub file_name: String,
    pub content: Vec<u8>,
}

impl Upload {
    pub fn new(file_name: impl Into<String>, content: impl Into<Vec<u8>>) -> Self {
        Self {
            file_name: file_name.into(),
            content: content.into(),
        }
    }
}

/// Raw content of a downloaded file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadedFile {
    /// Name announced by `Content-Disposition`, reduced to its final path component
    pub file_name: String,
    pub content: Bytes,
}
