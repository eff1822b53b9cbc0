use crate::actions::{Action, GlobalAction};
use crate::reducers::file_storage_reducer;
use crate::state::AppState;

/// Reducer - pure function that produces new state from current state + action
/// This is the root reducer that orchestrates all sub-reducers
pub fn reduce(mut state: AppState, action: &Action) -> AppState {
    match action {
        Action::Global(GlobalAction::Quit) => {
            state.running = false;
        }
        Action::FileStorage(file_storage_action) => {
            state.file_storage =
                file_storage_reducer::reduce(state.file_storage, file_storage_action);
        }
        Action::None => {}
    }

    state
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actions::FileStorageAction;

    #[test]
    fn test_quit_stops_running() {
        let state = reduce(AppState::default(), &Action::Global(GlobalAction::Quit));
        assert!(!state.running);
    }

    #[test]
    fn test_none_is_identity() {
        let mut before = AppState::default();
        before.file_storage.all_files_count = 321;
        before.file_storage.error = Some("error".to_string());

        let after = reduce(before.clone(), &Action::None);
        assert_eq!(after, before);
    }

    #[test]
    fn test_file_storage_actions_reach_slice() {
        let state = reduce(
            AppState::default(),
            &FileStorageAction::all_files_count_updated(1000).into(),
        );
        assert_eq!(state.file_storage.all_files_count, 1000);
        assert_eq!(state.file_storage.last_offset, 10);
        assert!(state.running);
    }

    #[test]
    fn test_global_actions_leave_file_storage_untouched() {
        let mut before = AppState::default();
        before.file_storage.current_offset = 4;

        let after = reduce(before.clone(), &Action::Global(GlobalAction::Quit));
        assert_eq!(after.file_storage, before.file_storage);
    }
}
