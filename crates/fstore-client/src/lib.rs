//! File storage API client
//!
//! This crate provides a trait-based client for the file storage HTTP API.
//! Callers depend on the trait so tests can substitute an in-memory client.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────┐
//! │            FileStorageClient trait               │
//! │  - fetch_count()   GET    /count                 │
//! │  - fetch_list()    GET    /list?offset&limit     │
//! │  - upload_file()   POST   /upload                │
//! │  - delete_file()   DELETE /file/{id}             │
//! │  - download_file() GET    /file/{id}             │
//! └─────────────────────────────────────────────────┘
//!                        │
//!                        ▼
//!             ┌───────────────────────┐
//!             │ HttpFileStorageClient │
//!             │ (reqwest)             │
//!             └───────────────────────┘
//! ```
//!
//! Every failure, whatever its cause, is reported as a single
//! [`FileStorageError`] carrying a user-presentable description.
//!
//! # Example
//!
//! ```rust,no_run
//! use fstore_client::{FileStorageClient, HttpFileStorageClient};
//!
//! # async fn example() -> Result<(), fstore_client::FileStorageError> {
//! let client = HttpFileStorageClient::new("http://localhost:8181");
//! let count = client.fetch_count().await?;
//! let first_page = client.fetch_list(1, 100).await?;
//! println!("{} files, {} on the first page", count.count, first_page.len());
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod error;
pub mod http_client;
pub mod types;

pub use client::FileStorageClient;
pub use error::{FileStorageError, ResponseClass, Result, RETRY_LATER_MESSAGE};
pub use http_client::HttpFileStorageClient;
pub use types::{DownloadedFile, ErrorBody, File, FileCount, Upload};
