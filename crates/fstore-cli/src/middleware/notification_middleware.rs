//! Notification Middleware
//!
//! Shows every `API_FAILED` description to the user and immediately queues a
//! `CLEAR_ERROR`, so the stored error only lives until it has been displayed.

use crate::actions::{Action, FileStorageAction};
use crate::dispatcher::{Dispatch, Dispatcher};
use crate::middleware::Middleware;
use crate::notifier::Notifier;
use crate::state::AppState;

pub struct NotificationMiddleware {
    notifier: Box<dyn Notifier>,
}

impl NotificationMiddleware {
    pub fn new(notifier: Box<dyn Notifier>) -> Self {
        Self { notifier }
    }
}

impl Middleware for NotificationMiddleware {
    fn handle(&mut self, action: &Action, _state: &AppState, dispatcher: &Dispatcher) -> bool {
        if let Action::FileStorage(FileStorageAction::ApiFailed { description }) = action {
            log::warn!("API failed: {}", description);
            self.notifier.notify_error(description);
            dispatcher.dispatch(FileStorageAction::clear_error().into());
        }

        // The error is still recorded by the reducer before it gets cleared
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::Store;
    use fstore_client::FileStorageError;
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Default)]
    struct RecordingNotifier {
        messages: Arc<Mutex<Vec<String>>>,
    }

    impl Notifier for RecordingNotifier {
        fn notify_error(&self, message: &str) {
            self.messages.lock().unwrap().push(message.to_string());
        }
    }

    fn store_with(notifier: &RecordingNotifier) -> Store {
        let mut store = Store::new(AppState::default());
        store.add_middleware(Box::new(NotificationMiddleware::new(Box::new(
            notifier.clone(),
        ))));
        store
    }

    #[test]
    fn test_api_failed_is_shown_then_cleared() {
        let notifier = RecordingNotifier::default();
        let mut store = store_with(&notifier);

        store.dispatch(FileStorageAction::api_failed(&FileStorageError::new("Boom")).into());

        assert_eq!(*notifier.messages.lock().unwrap(), vec!["Boom"]);
        assert_eq!(store.state().file_storage.error, None);
    }

    #[test]
    fn test_other_actions_are_not_shown() {
        let notifier = RecordingNotifier::default();
        let mut store = store_with(&notifier);

        store.dispatch(FileStorageAction::begin_loading().into());
        store.dispatch(FileStorageAction::clear_error().into());

        assert!(notifier.messages.lock().unwrap().is_empty());
        assert!(store.state().file_storage.loading);
    }
}
