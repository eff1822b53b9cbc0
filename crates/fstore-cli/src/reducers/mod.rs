//! Reducers
//!
//! Pure functions producing new state from current state + action.

pub mod app_reducer;
pub mod file_storage_reducer;
