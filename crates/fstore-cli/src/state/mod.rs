//! State module
//!
//! Plain data describing everything the client shows. Only reducers produce
//! new state values.

mod app;
mod file_storage;

pub use app::AppState;
pub use file_storage::{last_offset_for, FileStorageState, ModalState, FILE_DISPLAY_LIMIT};
