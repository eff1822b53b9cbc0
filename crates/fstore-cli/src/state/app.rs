//! Application State

use super::FileStorageState;

/// Application state
#[derive(Debug, Clone, PartialEq)]
pub struct AppState {
    /// Cleared by `GlobalAction::Quit` to leave the interactive shell
    pub running: bool,
    pub file_storage: FileStorageState,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            running: true,
            file_storage: FileStorageState::default(),
        }
    }
}
