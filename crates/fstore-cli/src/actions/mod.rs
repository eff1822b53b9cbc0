//! Actions module
//!
//! Actions are immutable records describing one state transition. They are
//! tagged by domain:
//! - `FileStorage`: the file list, pagination, loading flags, modal and error
//! - `Global`: application-wide actions (quit)

pub mod file_storage;
pub mod global;

pub use file_storage::FileStorageAction;
pub use global::GlobalAction;

/// Root action enum - tagged by domain
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// File storage slice actions
    FileStorage(FileStorageAction),
    /// Global application actions
    Global(GlobalAction),

    /// No-op action
    None,
}

impl From<FileStorageAction> for Action {
    fn from(action: FileStorageAction) -> Self {
        Action::FileStorage(action)
    }
}

impl From<GlobalAction> for Action {
    fn from(action: GlobalAction) -> Self {
        Action::Global(action)
    }
}
