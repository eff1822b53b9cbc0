//! User-facing error notifications
//!
//! Errors reach the user through a [`Notifier`] owned by the notification
//! middleware. The terminal implementation prints to stderr and keeps a
//! bounded history so the binary can pick its exit code.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// Messages kept by [`TerminalNotifier`]
pub const HISTORY_LIMIT: usize = 32;

/// Displays error messages to the user
pub trait Notifier: Send {
    fn notify_error(&self, message: &str);
}

/// Prints errors to stderr
///
/// Clones share the same history.
#[derive(Clone, Debug, Default)]
pub struct TerminalNotifier {
    history: Arc<Mutex<History>>,
}

#[derive(Debug, Default)]
struct History {
    shown: usize,
    recent: VecDeque<String>,
}

impl TerminalNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    fn history(&self) -> MutexGuard<'_, History> {
        self.history.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Number of errors shown so far
    pub fn error_count(&self) -> usize {
        self.history().shown
    }

    /// Most recent errors, oldest first
    pub fn errors(&self) -> Vec<String> {
        self.history().recent.iter().cloned().collect()
    }
}

impl Notifier for TerminalNotifier {
    fn notify_error(&self, message: &str) {
        eprintln!("error: {}", message);

        let mut history = self.history();
        history.shown += 1;
        if history.recent.len() == HISTORY_LIMIT {
            history.recent.pop_front();
        }
        history.recent.push_back(message.to_string());
    }
}
