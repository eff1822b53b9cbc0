//! File Storage Reducer
//!
//! Handles state updates for the file list, pagination, loading flags,
//! delete modal and last error.

use crate::actions::FileStorageAction;
use crate::state::{last_offset_for, FileStorageState, ModalState};

/// Reduce file storage state based on actions.
///
/// Consumes the previous state and returns the next one; fields not touched
/// by the action are moved over unchanged.
pub fn reduce(state: FileStorageState, action: &FileStorageAction) -> FileStorageState {
    match action {
        FileStorageAction::FixOffset(delta) => {
            let all_files_count = state.all_files_count.saturating_add_signed(*delta);
            let last_offset = last_offset_for(all_files_count);
            // Offsets are 1-based, even when the rounded last offset is 0
            let current_offset = if state.current_offset > last_offset {
                last_offset.max(1)
            } else {
                state.current_offset
            };
            log::debug!(
                "Fixed offset: count {} -> {}, offset {} -> {} (last {})",
                state.all_files_count,
                all_files_count,
                state.current_offset,
                current_offset,
                last_offset
            );
            FileStorageState {
                all_files_count,
                last_offset,
                current_offset,
                ..state
            }
        }

        FileStorageAction::ApiFailed { description } => FileStorageState {
            error: Some(description.clone()),
            ..state
        },

        FileStorageAction::ClearError => FileStorageState {
            error: None,
            ..state
        },

        FileStorageAction::ShowModal(file) => FileStorageState {
            modal_state: ModalState::showing(file.clone()),
            ..state
        },

        FileStorageAction::HideModal => FileStorageState {
            modal_state: ModalState::hidden(),
            ..state
        },

        FileStorageAction::AllFilesCountUpdated { count } => FileStorageState {
            all_files_count: *count,
            last_offset: last_offset_for(*count),
            ..state
        },

        FileStorageAction::BeginRefreshLoading => FileStorageState {
            all_files_refresh_loading: true,
            ..state
        },

        FileStorageAction::ExitRefreshLoading => FileStorageState {
            all_files_refresh_loading: false,
            ..state
        },

        FileStorageAction::BeginLoading => FileStorageState {
            loading: true,
            ..state
        },

        FileStorageAction::ExitLoading => FileStorageState {
            loading: false,
            ..state
        },

        FileStorageAction::FilesUpdated(files) => {
            log::debug!("Files updated: {} on page {}", files.len(), state.current_offset);
            FileStorageState {
                files: files.clone(),
                is_initial_list_fetched: true,
                ..state
            }
        }

        // No bounds check: callers only dispatch offsets they fetched successfully
        FileStorageAction::Pagenate(offset) => FileStorageState {
            current_offset: *offset,
            ..state
        },
    }
}
