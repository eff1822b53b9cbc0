use crate::actions::Action;
use crate::dispatcher::{Dispatch, Dispatcher};
use crate::middleware::Middleware;
use crate::reducers::app_reducer::reduce;
use crate::state::AppState;
use std::sync::mpsc::{self, Receiver};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// Read-only access to the current state
pub trait GetState: Send + Sync {
    fn get_state(&self) -> AppState;
}

/// Store - holds application state and manages the Redux loop
pub struct Store {
    state: AppState,
    middleware: Vec<Box<dyn Middleware>>,
    dispatcher: Dispatcher,
    pending: Receiver<Action>,
}

impl Store {
    pub fn new(initial_state: AppState) -> Self {
        let (action_tx, pending) = mpsc::channel();
        Self {
            state: initial_state,
            middleware: Vec::new(),
            dispatcher: Dispatcher::new(action_tx),
            pending,
        }
    }

    /// Add middleware to the store; middleware runs in insertion order
    pub fn add_middleware(&mut self, middleware: Box<dyn Middleware>) {
        self.middleware.push(middleware);
    }

    /// Get the current state
    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Process an action through middleware chain and reducer
    pub fn dispatch(&mut self, action: Action) {
        let mut should_reduce = true;

        // Pass through middleware chain
        for middleware in &mut self.middleware {
            if !middleware.handle(&action, &self.state, &self.dispatcher) {
                should_reduce = false;
                break;
            }
        }

        if should_reduce {
            let state = std::mem::take(&mut self.state);
            self.state = reduce(state, &action);
        }

        // Process any actions dispatched by middleware
        let pending_actions: Vec<Action> = self.pending.try_iter().collect();
        for action in pending_actions {
            self.dispatch(action);
        }
    }
}

/// Shared handle to the store
///
/// Dispatching through the handle applies the action before returning, so a
/// thunk reading state right after a dispatch observes its effect. The lock
/// is never held across an await point.
#[derive(Clone)]
pub struct StoreHandle {
    inner: Arc<Mutex<Store>>,
}

impl StoreHandle {
    pub fn new(store: Store) -> Self {
        Self {
            inner: Arc::new(Mutex::new(store)),
        }
    }

    fn lock(&self) -> MutexGuard<'_, Store> {
        // A panicking middleware must not take the whole client down
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Snapshot of the current state
    pub fn state(&self) -> AppState {
        self.lock().state().clone()
    }
}

impl Dispatch for StoreHandle {
    fn dispatch(&self, action: Action) {
        self.lock().dispatch(action);
    }
}

impl GetState for StoreHandle {
    fn get_state(&self) -> AppState {
        self.state()
    }
}
