//! File list thunks: initial load, paging, upload and delete

use super::{failed, put, report, with_loading, with_refresh_loading, Step};
use crate::actions::FileStorageAction;
use crate::dispatcher::Dispatch;
use crate::state::FILE_DISPLAY_LIMIT;
use crate::store::GetState;
use fstore_client::{File, FileStorageClient, Upload};

/// Fetch a page and dispatch it as FILES_UPDATED
async fn refresh_page<C, D>(client: &C, dispatch: &D, offset: u64) -> Step<()>
where
    C: FileStorageClient + ?Sized,
    D: Dispatch + ?Sized,
{
    let files = client
        .fetch_list(offset, FILE_DISPLAY_LIMIT)
        .await
        .map_err(failed)?;
    put(dispatch, FileStorageAction::files_updated(files));
    Ok(())
}

/// Load the total count and the first page
///
/// A failing count skips the list request entirely.
pub async fn initialize_files<C, D>(client: &C, dispatch: &D)
where
    C: FileStorageClient + ?Sized,
    D: Dispatch + ?Sized,
{
    log::info!("Initializing file list");
    with_refresh_loading(dispatch, async {
        report(dispatch, load_count_and_first_page(client, dispatch).await);
    })
    .await;
}

async fn load_count_and_first_page<C, D>(client: &C, dispatch: &D) -> Step<()>
where
    C: FileStorageClient + ?Sized,
    D: Dispatch + ?Sized,
{
    let count = client.fetch_count().await.map_err(failed)?;
    put(dispatch, FileStorageAction::all_files_count_updated(count.count));
    refresh_page(client, dispatch, 1).await
}

/// Load the page at `offset` and make it current
///
/// On failure the current offset stays where it was.
pub async fn fetch_files<C, D>(client: &C, dispatch: &D, offset: u64)
where
    C: FileStorageClient + ?Sized,
    D: Dispatch + ?Sized,
{
    log::info!("Fetching page {}", offset);
    with_refresh_loading(dispatch, async {
        report(dispatch, load_page(client, dispatch, offset).await);
    })
    .await;
}

async fn load_page<C, D>(client: &C, dispatch: &D, offset: u64) -> Step<()>
where
    C: FileStorageClient + ?Sized,
    D: Dispatch + ?Sized,
{
    refresh_page(client, dispatch, offset).await?;
    put(dispatch, FileStorageAction::pagenate(offset));
    Ok(())
}

/// Apply a count change, then re-fetch the (possibly clamped) current page
async fn refresh_after_change<C, D, S>(
    client: &C,
    dispatch: &D,
    state: &S,
    delta: i64,
) -> Step<()>
where
    C: FileStorageClient + ?Sized,
    D: Dispatch + ?Sized,
    S: GetState + ?Sized,
{
    put(dispatch, FileStorageAction::fix_offset(delta));
    // Read after FIX_OFFSET so a vanished last page is not requested
    let offset = state.get_state().file_storage.current_offset;
    refresh_page(client, dispatch, offset).await
}

/// Upload a file, then re-fetch the current page
///
/// Returns the created file when the server accepted the upload, even if the
/// re-fetch afterwards failed.
pub async fn upload_file<C, D, S>(
    client: &C,
    dispatch: &D,
    state: &S,
    upload: Upload,
) -> Option<File>
where
    C: FileStorageClient + ?Sized,
    D: Dispatch + ?Sized,
    S: GetState + ?Sized,
{
    log::info!(
        "Uploading {} ({} bytes)",
        upload.file_name,
        upload.content.len()
    );
    with_loading(dispatch, async move {
        match client.upload_file(upload).await {
            Ok(created) => {
                log::info!("Uploaded file {} as id {}", created.name, created.id);
                report(dispatch, refresh_after_change(client, dispatch, state, 1).await);
                Some(created)
            }
            Err(e) => {
                put(dispatch, failed(e));
                None
            }
        }
    })
    .await
}

/// Delete a file, then re-fetch the current page
///
/// The delete confirmation is hidden whether or not the delete succeeded.
/// Returns whether the server accepted the delete.
pub async fn delete_file<C, D, S>(client: &C, dispatch: &D, state: &S, id: u64) -> bool
where
    C: FileStorageClient + ?Sized,
    D: Dispatch + ?Sized,
    S: GetState + ?Sized,
{
    log::info!("Deleting file {}", id);
    with_loading(dispatch, async {
        let deleted = match client.delete_file(id).await {
            Ok(()) => {
                report(dispatch, refresh_after_change(client, dispatch, state, -1).await);
                true
            }
            Err(e) => {
                put(dispatch, failed(e));
                false
            }
        };
        put(dispatch, FileStorageAction::hide_modal());
        deleted
    })
    .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actions::Action;
    use crate::state::AppState;
    use crate::store::{Store, StoreHandle};
    use async_trait::async_trait;
    use chrono::NaiveDate;
    use fstore_client::{DownloadedFile, FileCount, FileStorageError, Result};
    use std::sync::Mutex;

    fn file(id: u64) -> File {
        File {
            id,
            name: format!("file_{}.txt", id),
            created_at: NaiveDate::from_ymd_opt(2019, 11, 2)
                .unwrap()
                .and_hms_opt(12, 0, 0)
                .unwrap(),
        }
    }

    /// Mock client answering from canned results and logging each call
    struct MockClient {
        count: Result<FileCount>,
        list: Result<Vec<File>>,
        upload: Result<File>,
        delete: Result<()>,
        calls: Mutex<Vec<String>>,
    }

    impl MockClient {
        fn new() -> Self {
            Self {
                count: Ok(FileCount { count: 1000 }),
                list: Ok(vec![file(1), file(2)]),
                upload: Ok(file(3)),
                delete: Ok(()),
                calls: Mutex::new(Vec::new()),
            }
        }

        fn record(&self, call: String) {
            self.calls.lock().unwrap().push(call);
        }

        fn calls(&self) -> Vec<String> {
            self.calls.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl FileStorageClient for MockClient {
        async fn fetch_count(&self) -> Result<FileCount> {
            self.record("count".to_string());
            self.count.clone()
        }

        async fn fetch_list(&self, offset: u64, limit: u64) -> Result<Vec<File>> {
            self.record(format!("list {} {}", offset, limit));
            self.list.clone()
        }

        async fn upload_file(&self, upload: Upload) -> Result<File> {
            self.record(format!("upload {}", upload.file_name));
            self.upload.clone()
        }

        async fn delete_file(&self, id: u64) -> Result<()> {
            self.record(format!("delete {}", id));
            self.delete.clone()
        }

        async fn download_file(&self, id: u64) -> Result<DownloadedFile> {
            self.record(format!("download {}", id));
            Err(FileStorageError::retry_later())
        }
    }

    #[derive(Default)]
    struct RecordingDispatcher(Mutex<Vec<Action>>);

    impl RecordingDispatcher {
        fn actions(&self) -> Vec<Action> {
            self.0.lock().unwrap().clone()
        }
    }

    impl Dispatch for RecordingDispatcher {
        fn dispatch(&self, action: Action) {
            self.0.lock().unwrap().push(action);
        }
    }

    struct FixedState(AppState);

    impl GetState for FixedState {
        fn get_state(&self) -> AppState {
            self.0.clone()
        }
    }

    fn actions(expected: Vec<FileStorageAction>) -> Vec<Action> {
        expected.into_iter().map(Action::from).collect()
    }

    fn boom() -> FileStorageError {
        FileStorageError::new("Boom")
    }

    #[tokio::test(start_paused = true)]
    async fn test_initialize_files_success() {
        let client = MockClient::new();
        let dispatcher = RecordingDispatcher::default();

        initialize_files(&client, &dispatcher).await;

        assert_eq!(
            dispatcher.actions(),
            actions(vec![
                FileStorageAction::begin_refresh_loading(),
                FileStorageAction::all_files_count_updated(1000),
                FileStorageAction::files_updated(vec![file(1), file(2)]),
                FileStorageAction::exit_refresh_loading(),
            ])
        );
        assert_eq!(client.calls(), vec!["count", "list 1 100"]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_initialize_files_count_failure_skips_list() {
        let client = MockClient {
            count: Err(boom()),
            ..MockClient::new()
        };
        let dispatcher = RecordingDispatcher::default();

        initialize_files(&client, &dispatcher).await;

        assert_eq!(
            dispatcher.actions(),
            actions(vec![
                FileStorageAction::begin_refresh_loading(),
                FileStorageAction::api_failed(&boom()),
                FileStorageAction::exit_refresh_loading(),
            ])
        );
        assert_eq!(client.calls(), vec!["count"]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_initialize_files_list_failure_keeps_count() {
        let client = MockClient {
            list: Err(FileStorageError::retry_later()),
            ..MockClient::new()
        };
        let dispatcher = RecordingDispatcher::default();

        initialize_files(&client, &dispatcher).await;

        assert_eq!(
            dispatcher.actions(),
            actions(vec![
                FileStorageAction::begin_refresh_loading(),
                FileStorageAction::all_files_count_updated(1000),
                FileStorageAction::api_failed(&FileStorageError::retry_later()),
                FileStorageAction::exit_refresh_loading(),
            ])
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_fetch_files_paginates_after_update() {
        let client = MockClient::new();
        let dispatcher = RecordingDispatcher::default();

        fetch_files(&client, &dispatcher, 4).await;

        assert_eq!(
            dispatcher.actions(),
            actions(vec![
                FileStorageAction::begin_refresh_loading(),
                FileStorageAction::files_updated(vec![file(1), file(2)]),
                FileStorageAction::pagenate(4),
                FileStorageAction::exit_refresh_loading(),
            ])
        );
        assert_eq!(client.calls(), vec!["list 4 100"]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_fetch_files_failure_keeps_offset() {
        let client = MockClient {
            list: Err(boom()),
            ..MockClient::new()
        };
        let dispatcher = RecordingDispatcher::default();

        fetch_files(&client, &dispatcher, 4).await;

        assert_eq!(
            dispatcher.actions(),
            actions(vec![
                FileStorageAction::begin_refresh_loading(),
                FileStorageAction::api_failed(&boom()),
                FileStorageAction::exit_refresh_loading(),
            ])
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_upload_file_success() {
        let client = MockClient::new();
        let dispatcher = RecordingDispatcher::default();
        let mut state = AppState::default();
        state.file_storage.current_offset = 2;

        let created = upload_file(
            &client,
            &dispatcher,
            &FixedState(state),
            Upload::new("notes.txt", "hello"),
        )
        .await;

        assert_eq!(created, Some(file(3)));
        assert_eq!(
            dispatcher.actions(),
            actions(vec![
                FileStorageAction::begin_loading(),
                FileStorageAction::fix_offset(1),
                FileStorageAction::files_updated(vec![file(1), file(2)]),
                FileStorageAction::exit_loading(),
            ])
        );
        assert_eq!(client.calls(), vec!["upload notes.txt", "list 2 100"]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_upload_file_failure() {
        let client = MockClient {
            upload: Err(FileStorageError::retry_later()),
            ..MockClient::new()
        };
        let dispatcher = RecordingDispatcher::default();

        let created = upload_file(
            &client,
            &dispatcher,
            &FixedState(AppState::default()),
            Upload::new("notes.txt", "hello"),
        )
        .await;

        assert_eq!(created, None);
        assert_eq!(
            dispatcher.actions(),
            actions(vec![
                FileStorageAction::begin_loading(),
                FileStorageAction::api_failed(&FileStorageError::retry_later()),
                FileStorageAction::exit_loading(),
            ])
        );
        assert_eq!(client.calls(), vec!["upload notes.txt"]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_upload_refetch_failure_reports_and_exits() {
        let client = MockClient {
            list: Err(boom()),
            ..MockClient::new()
        };
        let dispatcher = RecordingDispatcher::default();

        let created = upload_file(
            &client,
            &dispatcher,
            &FixedState(AppState::default()),
            Upload::new("notes.txt", "hello"),
        )
        .await;

        assert_eq!(created, Some(file(3)));
        assert_eq!(
            dispatcher.actions(),
            actions(vec![
                FileStorageAction::begin_loading(),
                FileStorageAction::fix_offset(1),
                FileStorageAction::api_failed(&boom()),
                FileStorageAction::exit_loading(),
            ])
        );
        assert_eq!(client.calls(), vec!["upload notes.txt", "list 1 100"]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_delete_file_success() {
        let client = MockClient::new();
        let dispatcher = RecordingDispatcher::default();

        let deleted = delete_file(&client, &dispatcher, &FixedState(AppState::default()), 1).await;

        assert!(deleted);
        assert_eq!(
            dispatcher.actions(),
            actions(vec![
                FileStorageAction::begin_loading(),
                FileStorageAction::fix_offset(-1),
                FileStorageAction::files_updated(vec![file(1), file(2)]),
                FileStorageAction::hide_modal(),
                FileStorageAction::exit_loading(),
            ])
        );
        assert_eq!(client.calls(), vec!["delete 1", "list 1 100"]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_delete_file_failure_still_hides_modal() {
        let client = MockClient {
            delete: Err(boom()),
            ..MockClient::new()
        };
        let dispatcher = RecordingDispatcher::default();

        let deleted = delete_file(&client, &dispatcher, &FixedState(AppState::default()), 1).await;

        assert!(!deleted);
        assert_eq!(
            dispatcher.actions(),
            actions(vec![
                FileStorageAction::begin_loading(),
                FileStorageAction::api_failed(&boom()),
                FileStorageAction::hide_modal(),
                FileStorageAction::exit_loading(),
            ])
        );
        assert_eq!(client.calls(), vec!["delete 1"]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_delete_refetch_failure_reports_and_exits() {
        let client = MockClient {
            list: Err(boom()),
            ..MockClient::new()
        };
        let dispatcher = RecordingDispatcher::default();

        delete_file(&client, &dispatcher, &FixedState(AppState::default()), 1).await;

        assert_eq!(
            dispatcher.actions(),
            actions(vec![
                FileStorageAction::begin_loading(),
                FileStorageAction::fix_offset(-1),
                FileStorageAction::api_failed(&boom()),
                FileStorageAction::hide_modal(),
                FileStorageAction::exit_loading(),
            ])
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_delete_on_last_page_refetches_clamped_offset() {
        let client = MockClient::new();
        let store = StoreHandle::new(Store::new(AppState::default()));
        store.dispatch(FileStorageAction::all_files_count_updated(1001).into());
        store.dispatch(FileStorageAction::pagenate(11).into());
        store.dispatch(FileStorageAction::show_modal(file(1001)).into());

        delete_file(&client, &store, &store, 1001).await;

        let state = store.state().file_storage;
        assert_eq!(client.calls(), vec!["delete 1001", "list 10 100"]);
        assert_eq!(state.current_offset, 10);
        assert_eq!(state.all_files_count, 1000);
        assert!(!state.modal_state.visible);
        assert!(!state.loading);
    }
}
