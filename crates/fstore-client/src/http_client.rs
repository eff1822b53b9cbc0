//! reqwest-based file storage client
//!
//! Direct implementation of the `FileStorageClient` trait against the HTTP API.

use crate::client::FileStorageClient;
use crate::error::{FileStorageError, ResponseClass, Result};
use crate::types::{DownloadedFile, ErrorBody, File, FileCount, Upload};
use async_trait::async_trait;
use log::{debug, warn};
use reqwest::header::{CONTENT_DISPOSITION, CONTENT_TYPE};
use reqwest::multipart::{Form, Part};
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use std::path::Path;

/// File storage client talking to a single configured base URL
#[derive(Debug, Clone)]
pub struct HttpFileStorageClient {
    base_url: String,
    http: Client,
}

impl HttpFileStorageClient {
    /// Create a client for the given base URL (e.g., "http://localhost:8181")
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(base_url, Client::new())
    }

    /// Create a client reusing an existing reqwest client
    pub fn with_client(base_url: impl Into<String>, http: Client) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { base_url, http }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Direct download link for a file, as handed out to browsers
    pub fn download_url(&self, id: u64) -> String {
        self.url(&format!("/file/{}", id))
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

#[async_trait]
impl FileStorageClient for HttpFileStorageClient {
    async fn fetch_count(&self) -> Result<FileCount> {
        debug!("Fetching file count");
        let response = send(self.http.get(self.url("/count"))).await?;
        decode_json(response).await
    }

    async fn fetch_list(&self, offset: u64, limit: u64) -> Result<Vec<File>> {
        debug!("Fetching file list offset={} limit={}", offset, limit);
        let url = self.url(&format!("/list?offset={}&limit={}", offset, limit));
        let response = send(self.http.get(url)).await?;
        decode_json(response).await
    }

    async fn upload_file(&self, upload: Upload) -> Result<File> {
        debug!(
            "Uploading {} ({} bytes)",
            upload.file_name,
            upload.content.len()
        );
        let part = Part::bytes(upload.content).file_name(upload.file_name);
        let form = Form::new().part("file", part);
        let response = send(self.http.post(self.url("/upload")).multipart(form)).await?;
        decode_json(response).await
    }

    async fn delete_file(&self, id: u64) -> Result<()> {
        debug!("Deleting file {}", id);
        let request = self
            .http
            .delete(self.url(&format!("/file/{}", id)))
            .header(CONTENT_TYPE, "application/json")
            .body("{}");
        ensure_success(send(request).await?).await?;
        Ok(())
    }

    async fn download_file(&self, id: u64) -> Result<DownloadedFile> {
        debug!("Downloading file {}", id);
        let response = ensure_success(send(self.http.get(self.download_url(id))).await?).await?;

        let file_name = response
            .headers()
            .get(CONTENT_DISPOSITION)
            .and_then(|value| value.to_str().ok())
            .and_then(parse_content_disposition)
            .unwrap_or_else(|| format!("file-{}", id));

        let content = response.bytes().await.map_err(|e| {
            warn!("Failed to read download body for file {}: {}", id, e);
            FileStorageError::retry_later()
        })?;

        Ok(DownloadedFile { file_name, content })
    }
}

async fn send(request: reqwest::RequestBuilder) -> Result<Response> {
    request.send().await.map_err(|e| {
        warn!("Request failed: {}", e);
        FileStorageError::retry_later()
    })
}

/// Map a response to the success path or to the matching `FileStorageError`
async fn ensure_success(response: Response) -> Result<Response> {
    let status = response.status().as_u16();
    match ResponseClass::of(status) {
        ResponseClass::Success => Ok(response),
        ResponseClass::ServerError => {
            let error = match response.json::<ErrorBody>().await {
                Ok(body) => FileStorageError::from(body),
                Err(e) => {
                    warn!("Server error {} without readable body: {}", status, e);
                    FileStorageError::retry_later()
                }
            };
            Err(error)
        }
        ResponseClass::Unexpected => {
            warn!("Unexpected response status {}", status);
            Err(FileStorageError::retry_later())
        }
    }
}

async fn decode_json<T: DeserializeOwned>(response: Response) -> Result<T> {
    let response = ensure_success(response).await?;
    response.json::<T>().await.map_err(|e| {
        warn!("Failed to decode response body: {}", e);
        FileStorageError::retry_later()
    })
}

/// Extract the file name from a `Content-Disposition` header value
///
/// Only the final path component is kept so a hostile header cannot point
/// outside the download directory.
fn parse_content_disposition(value: &str) -> Option<String> {
    const ATTRIBUTE: &str = "filename=";
    let start = value.find(ATTRIBUTE)? + ATTRIBUTE.len();
    let raw = value[start..].split(';').next()?.trim().trim_matches('"');
    let name = Path::new(raw).file_name()?.to_str()?.to_string();
    if name.is_empty() {
        None
    } else {
        Some(name)
    }
}
