//! Shared test doubles

use async_trait::async_trait;
use bytes::Bytes;
use chrono::NaiveDate;
use fstore_client::{
    DownloadedFile, File, FileCount, FileStorageClient, FileStorageError, Result, Upload,
};
use std::sync::Mutex;

pub fn file(id: u64) -> File {
    File {
        id,
        name: format!("file_{}.txt", id),
        created_at: NaiveDate::from_ymd_opt(2019, 11, 2)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap(),
    }
}

/// In-memory server holding files with ids starting at 1
pub struct MemoryClient {
    files: Mutex<Vec<File>>,
}

impl MemoryClient {
    pub fn with_files(count: u64) -> Self {
        Self {
            files: Mutex::new((1..=count).map(file).collect()),
        }
    }
}

#[async_trait]
impl FileStorageClient for MemoryClient {
    async fn fetch_count(&self) -> Result<FileCount> {
        let count = self.files.lock().unwrap().len() as u64;
        Ok(FileCount { count })
    }

    async fn fetch_list(&self, offset: u64, limit: u64) -> Result<Vec<File>> {
        let files = self.files.lock().unwrap();
        let skip = ((offset.max(1) - 1) * limit) as usize;
        Ok(files.iter().skip(skip).take(limit as usize).cloned().collect())
    }

    async fn upload_file(&self, upload: Upload) -> Result<File> {
        let mut files = self.files.lock().unwrap();
        let next_id = files.iter().map(|file| file.id).max().unwrap_or(0) + 1;
        let mut created = file(next_id);
        created.name = upload.file_name;
        files.push(created.clone());
        Ok(created)
    }

    async fn delete_file(&self, id: u64) -> Result<()> {
        let mut files = self.files.lock().unwrap();
        let before = files.len();
        files.retain(|file| file.id != id);
        if files.len() == before {
            return Err(FileStorageError::new("File not found."));
        }
        Ok(())
    }

    async fn download_file(&self, id: u64) -> Result<DownloadedFile> {
        let files = self.files.lock().unwrap();
        let file = files
            .iter()
            .find(|file| file.id == id)
            .ok_or_else(FileStorageError::retry_later)?;
        Ok(DownloadedFile {
            file_name: file.name.clone(),
            content: Bytes::from_static(b"content"),
        })
    }
}
