//! File storage client trait

use crate::error::Result;
use crate::types::{DownloadedFile, File, FileCount, Upload};
use async_trait::async_trait;

/// File storage API client trait
///
/// Every call is one-shot: no retry, no caching, no timeout beyond the
/// transport's own.
///
/// # Thread Safety
///
/// Implementations must be `Send + Sync` to allow sharing across
/// async tasks and threads.
///
/// # Example
///
/// ```rust,ignore
/// use fstore_client::{File, FileStorageClient};
///
/// async fn first_page(client: &dyn FileStorageClient) -> fstore_client::Result<Vec<File>> {
///     client.fetch_list(1, 100).await
/// }
/// ```
#[async_trait]
pub trait FileStorageClient: Send + Sync {
    /// Fetch the total number of stored files (`GET /count`)
    async fn fetch_count(&self) -> Result<FileCount>;

    /// Fetch one page of files (`GET /list?offset=N&limit=L`)
    ///
    /// `offset` is the 1-based page index, `limit` the page size.
    async fn fetch_list(&self, offset: u64, limit: u64) -> Result<Vec<File>>;

    /// Upload a file as multipart form field `file` (`POST /upload`)
    ///
    /// Returns the created file record.
    async fn upload_file(&self, upload: Upload) -> Result<File>;

    /// Delete a file by id (`DELETE /file/{id}`)
    async fn delete_file(&self, id: u64) -> Result<()>;

    /// Download the raw bytes of a file (`GET /file/{id}`)
    async fn download_file(&self, id: u64) -> Result<DownloadedFile>;
}
