use crate::actions::Action;
use crate::dispatcher::Dispatcher;
use crate::middleware::Middleware;
use crate::state::AppState;

/// LoggingMiddleware - logs all actions passing through
#[derive(Debug, Default)]
pub struct LoggingMiddleware;

impl LoggingMiddleware {
    pub fn new() -> Self {
        Self
    }
}

impl Middleware for LoggingMiddleware {
    fn handle(&mut self, action: &Action, state: &AppState, _dispatcher: &Dispatcher) -> bool {
        match action {
            Action::None => {}
            Action::FileStorage(file_action) => log::debug!(
                "Action: {} (page {}/{})",
                file_action.kind(),
                state.file_storage.current_offset,
                state.file_storage.last_offset
            ),
            _ => log::debug!("Action: {:?}", action),
        }

        true // Always pass action through
    }
}
