//! Thunks
//!
//! Async operations against the file storage API. Each thunk is wrapped in a
//! loading advice that raises a loading flag, runs the body, waits
//! [`COMFORT_DELAY`] and lowers the flag again, whatever the body's outcome.
//! Failures never escape a thunk: they are dispatched as `API_FAILED`.

mod files;

pub use files::{delete_file, fetch_files, initialize_files, upload_file};

use crate::actions::FileStorageAction;
use crate::dispatcher::Dispatch;
use fstore_client::FileStorageError;
use std::future::Future;
use std::time::Duration;

/// Pause before lowering a loading flag so indicators never flicker
pub const COMFORT_DELAY: Duration = Duration::from_millis(300);

/// Outcome of a thunk body: the error branch carries the `API_FAILED` action
type Step<T> = Result<T, FileStorageAction>;

fn put<D: Dispatch + ?Sized>(dispatch: &D, action: FileStorageAction) {
    dispatch.dispatch(action.into());
}

fn failed(error: FileStorageError) -> FileStorageAction {
    log::debug!("File storage request failed: {}", error);
    FileStorageAction::api_failed(&error)
}

/// Dispatch the failure of a body, if any
fn report<D: Dispatch + ?Sized>(dispatch: &D, step: Step<()>) {
    if let Err(action) = step {
        put(dispatch, action);
    }
}

/// BEGIN_LOADING, body, delay, EXIT_LOADING; yields the body's output
async fn with_loading<D, F, T>(dispatch: &D, body: F) -> T
where
    D: Dispatch + ?Sized,
    F: Future<Output = T>,
{
    put(dispatch, FileStorageAction::begin_loading());
    let output = body.await;
    tokio::time::sleep(COMFORT_DELAY).await;
    put(dispatch, FileStorageAction::exit_loading());
    output
}

/// BEGIN_REFRESH_LOADING, body, delay, EXIT_REFRESH_LOADING
async fn with_refresh_loading<D, F>(dispatch: &D, body: F)
where
    D: Dispatch + ?Sized,
    F: Future<Output = ()>,
{
    put(dispatch, FileStorageAction::begin_refresh_loading());
    body.await;
    tokio::time::sleep(COMFORT_DELAY).await;
    put(dispatch, FileStorageAction::exit_refresh_loading());
}
