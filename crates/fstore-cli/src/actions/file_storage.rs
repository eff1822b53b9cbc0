//! File storage actions
//!
//! Every action carries a `type` discriminant (see [`FileStorageAction::kind`])
//! and an optional payload. Build actions through the constructor functions;
//! equality is structural.

use fstore_client::{File, FileStorageError};

/// Actions for the file storage state slice
#[derive(Debug, Clone, PartialEq, strum::IntoStaticStr)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum FileStorageAction {
    // Single-item operation boundary (upload, delete)
    BeginLoading,
    ExitLoading,

    // Full refresh boundary (count + list, page change)
    BeginRefreshLoading,
    ExitRefreshLoading,

    /// Replace the displayed page of files
    FilesUpdated(Vec<File>),
    /// Set the total count; the last offset is derived from it
    AllFilesCountUpdated { count: u64 },
    /// Set the current offset directly
    Pagenate(u64),
    /// Adjust the total count by a delta and clamp the current offset
    FixOffset(i64),

    /// Open the delete confirmation for a file
    ShowModal(File),
    HideModal,

    /// Record the last error description
    ApiFailed { description: String },
    ClearError,
}

impl FileStorageAction {
    pub fn begin_loading() -> Self {
        Self::BeginLoading
    }

    pub fn exit_loading() -> Self {
        Self::ExitLoading
    }

    pub fn begin_refresh_loading() -> Self {
        Self::BeginRefreshLoading
    }

    pub fn exit_refresh_loading() -> Self {
        Self::ExitRefreshLoading
    }

    pub fn files_updated(files: Vec<File>) -> Self {
        Self::FilesUpdated(files)
    }

    pub fn all_files_count_updated(count: u64) -> Self {
        Self::AllFilesCountUpdated { count }
    }

    pub fn pagenate(offset: u64) -> Self {
        Self::Pagenate(offset)
    }

    pub fn fix_offset(delta: i64) -> Self {
        Self::FixOffset(delta)
    }

    pub fn show_modal(file: File) -> Self {
        Self::ShowModal(file)
    }

    pub fn hide_modal() -> Self {
        Self::HideModal
    }

    pub fn api_failed(error: &FileStorageError) -> Self {
        Self::ApiFailed {
            description: error.description.clone(),
        }
    }

    pub fn clear_error() -> Self {
        Self::ClearError
    }

    /// The action's `type` discriminant, e.g. `"FILES_UPDATED"`
    pub fn kind(&self) -> &'static str {
        self.into()
    }
}
