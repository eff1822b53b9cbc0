//! File storage state
//!
//! The slice holding the current page of files together with its
//! pagination, loading, modal and error state.

use fstore_client::File;

/// Number of files per page
pub const FILE_DISPLAY_LIMIT: u64 = 100;

/// Highest page index for a total count: `round(count / FILE_DISPLAY_LIMIT)`
///
/// Halves round up. The result is a rounded value, not a ceiling, so a
/// partially filled last page below the half mark is not counted.
pub fn last_offset_for(count: u64) -> u64 {
    let remainder = count % FILE_DISPLAY_LIMIT;
    count / FILE_DISPLAY_LIMIT + u64::from(remainder * 2 >= FILE_DISPLAY_LIMIT)
}

/// Delete confirmation state; `visible` and `file` always change together
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ModalState {
    pub visible: bool,
    pub file: Option<File>,
}

impl ModalState {
    pub fn showing(file: File) -> Self {
        Self {
            visible: true,
            file: Some(file),
        }
    }

    pub fn hidden() -> Self {
        Self::default()
    }
}

/// State of the file list and everything around it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileStorageState {
    /// Files on the current page, in server order
    pub files: Vec<File>,
    /// Total number of files on the server
    pub all_files_count: u64,
    /// Whether the first list load has completed
    pub is_initial_list_fetched: bool,
    /// An upload or delete is in flight
    pub loading: bool,
    /// A count/list refresh is in flight
    pub all_files_refresh_loading: bool,
    /// 1-based page index currently displayed
    pub current_offset: u64,
    /// Derived from `all_files_count`, see [`last_offset_for`]
    pub last_offset: u64,
    pub modal_state: ModalState,
    /// Last error description
    pub error: Option<String>,
}

impl Default for FileStorageState {
    fn default() -> Self {
        Self {
            files: Vec::new(),
            all_files_count: 0,
            is_initial_list_fetched: false,
            loading: false,
            all_files_refresh_loading: false,
            current_offset: 1,
            last_offset: 0,
            modal_state: ModalState::hidden(),
            error: None,
        }
    }
}

impl FileStorageState {
    /// Any operation in flight
    pub fn is_busy(&self) -> bool {
        self.loading || self.all_files_refresh_loading
    }

    pub fn has_next_page(&self) -> bool {
        self.current_offset < self.last_offset
    }

    pub fn has_previous_page(&self) -> bool {
        self.current_offset > 1
    }

    /// Whether `offset` lies in `1..=max(last_offset, 1)`
    pub fn has_page(&self, offset: u64) -> bool {
        (1..=self.last_offset.max(1)).contains(&offset)
    }

    /// Find a file on the current page
    pub fn file_by_id(&self, id: u64) -> Option<&File> {
        self.files.iter().find(|file| file.id == id)
    }
}
