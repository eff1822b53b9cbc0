//! Dispatch capability and the middleware dispatcher
//!
//! Thunks only need something they can hand actions to, expressed by the
//! [`Dispatch`] trait. The store handle applies actions immediately, while the
//! [`Dispatcher`] given to middleware queues them: the store drains the queue
//! after the current action has been reduced, so queued actions re-enter the
//! middleware chain from the beginning.

use crate::actions::Action;
use std::sync::mpsc::Sender;

/// Anything that accepts actions
pub trait Dispatch: Send + Sync {
    fn dispatch(&self, action: Action);
}

/// Dispatcher for sending actions through the middleware chain
///
/// Actions dispatched here re-enter the middleware chain from the beginning,
/// allowing middleware to trigger other middleware handlers.
#[derive(Clone, Debug)]
pub struct Dispatcher {
    action_tx: Sender<Action>,
}

impl Dispatcher {
    /// Create a new dispatcher feeding the store's pending queue
    pub fn new(action_tx: Sender<Action>) -> Self {
        Self { action_tx }
    }
}

impl Dispatch for Dispatcher {
    fn dispatch(&self, action: Action) {
        if let Err(e) = self.action_tx.send(action) {
            log::error!("Dispatcher: failed to send action: {}", e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::mpsc;

    #[test]
    fn test_dispatcher_queues_actions() {
        let (tx, rx) = mpsc::channel();
        let dispatcher = Dispatcher::new(tx);

        dispatcher.dispatch(Action::None);

        assert_eq!(rx.try_recv(), Ok(Action::None));
    }

    #[test]
    fn test_dispatch_after_receiver_dropped_does_not_panic() {
        let (tx, rx) = mpsc::channel();
        drop(rx);
        Dispatcher::new(tx).dispatch(Action::None);
    }
}
