//! Terminal rendering of files and pagination

use crate::paginator::page_window;
use crate::state::FileStorageState;
use fstore_client::File;
use tabled::settings::Style;
use tabled::{Table, Tabled};

/// Display format of upload times
pub const DATE_FORMAT: &str = "%Y/%m/%d %H:%M:%S";

/// One table row; field names double as column headers
#[derive(Tabled)]
struct FileRow {
    id: u64,
    name: String,
    created_at: String,
}

impl From<&File> for FileRow {
    fn from(file: &File) -> Self {
        Self {
            id: file.id,
            name: file.name.clone(),
            created_at: file.created_at.format(DATE_FORMAT).to_string(),
        }
    }
}

/// Render files as a grid table
pub fn files_table(files: &[File]) -> String {
    Table::new(files.iter().map(FileRow::from))
        .with(Style::ascii())
        .to_string()
}

/// Render files as pretty JSON
pub fn files_json(files: &[File]) -> serde_json::Result<String> {
    serde_json::to_string_pretty(files)
}

/// Render one file as a table or JSON
pub fn file_output(file: &File, raw: bool) -> serde_json::Result<String> {
    if raw {
        serde_json::to_string_pretty(file)
    } else {
        Ok(files_table(std::slice::from_ref(file)))
    }
}

/// Page summary followed by the page window, e.g.
/// `page 2 of 10 (1000 files)` / `1 [2] 3 4 5 ... 10`
pub fn page_bar(state: &FileStorageState) -> String {
    let summary = format!(
        "page {} of {} ({} files)",
        state.current_offset, state.last_offset, state.all_files_count
    );
    let window = page_window(state.current_offset, state.last_offset).to_string();
    if window.is_empty() {
        summary
    } else {
        format!("{}\n{}", summary, window)
    }
}
