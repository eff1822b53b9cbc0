//! File storage service
//!
//! Binds a [`FileStorageClient`] to the store so front ends can trigger the
//! thunks without threading the client and the store through every call.

use crate::actions::FileStorageAction;
use crate::dispatcher::Dispatch;
use crate::state::{AppState, FileStorageState};
use crate::store::StoreHandle;
use crate::thunks;
use fstore_client::{DownloadedFile, File, FileStorageClient, Upload};
use std::sync::Arc;

#[derive(Clone)]
pub struct FileStorageService {
    client: Arc<dyn FileStorageClient>,
    store: StoreHandle,
}

impl FileStorageService {
    pub fn new(client: Arc<dyn FileStorageClient>, store: StoreHandle) -> Self {
        Self { client, store }
    }

    /// Snapshot of the whole application state
    pub fn state(&self) -> AppState {
        self.store.state()
    }

    /// Snapshot of the file storage slice
    pub fn file_storage(&self) -> FileStorageState {
        self.store.state().file_storage
    }

    pub fn store(&self) -> &StoreHandle {
        &self.store
    }

    /// Load the total count and the first page
    pub async fn initialize(&self) {
        thunks::initialize_files(self.client.as_ref(), &self.store).await;
    }

    /// Load the page at `offset` and make it current
    ///
    /// Returns false without any request when `offset` is outside
    /// `1..=max(last_offset, 1)`.
    pub async fn fetch_page(&self, offset: u64) -> bool {
        let state = self.file_storage();
        if !state.has_page(offset) {
            log::debug!("Page {} is outside 1..={}", offset, state.last_offset.max(1));
            return false;
        }
        thunks::fetch_files(self.client.as_ref(), &self.store, offset).await;
        true
    }

    /// Move one page forward; returns false when already on the last page
    pub async fn next_page(&self) -> bool {
        let state = self.file_storage();
        if !state.has_next_page() {
            return false;
        }
        self.fetch_page(state.current_offset + 1).await
    }

    /// Move one page back; returns false when already on the first page
    pub async fn previous_page(&self) -> bool {
        let state = self.file_storage();
        if !state.has_previous_page() {
            return false;
        }
        self.fetch_page(state.current_offset - 1).await
    }

    /// Upload a file; returns the created file when the server accepted it
    pub async fn upload(&self, upload: Upload) -> Option<File> {
        thunks::upload_file(self.client.as_ref(), &self.store, &self.store, upload).await
    }

    /// Open the delete confirmation for a file on the current page
    ///
    /// Returns false when the file is not on the current page.
    pub fn request_delete(&self, id: u64) -> bool {
        let Some(file) = self.file_storage().file_by_id(id).cloned() else {
            log::debug!("File {} is not on the current page", id);
            return false;
        };
        self.store.dispatch(FileStorageAction::show_modal(file).into());
        true
    }

    pub fn cancel_delete(&self) {
        self.store.dispatch(FileStorageAction::hide_modal().into());
    }

    /// Delete the file targeted by the confirmation
    ///
    /// Returns `None` when no confirmation is open, otherwise whether the
    /// server accepted the delete.
    pub async fn confirm_delete(&self) -> Option<bool> {
        let modal = self.file_storage().modal_state;
        match modal.file {
            Some(file) if modal.visible => Some(self.delete(file.id).await),
            _ => None,
        }
    }

    /// Delete a file without asking for confirmation
    ///
    /// Returns whether the server accepted the delete.
    pub async fn delete(&self, id: u64) -> bool {
        thunks::delete_file(self.client.as_ref(), &self.store, &self.store, id).await
    }

    /// Download a file's content
    ///
    /// Downloads bypass the store; a failure is still reported as API_FAILED.
    pub async fn download(&self, id: u64) -> Option<DownloadedFile> {
        match self.client.download_file(id).await {
            Ok(file) => Some(file),
            Err(e) => {
                self.store
                    .dispatch(FileStorageAction::api_failed(&e).into());
                None
            }
        }
    }
}
