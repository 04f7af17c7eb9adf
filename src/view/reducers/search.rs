use std::time::Duration;

use crate::view::action::Action;
use crate::view::effects::Effect;
use crate::view::search::SearchInputOutcome;
use crate::view::state::AppState;

/// Handle network search actions
pub fn reduce_search(state: AppState, action: &Action) -> Result<(AppState, Effect), AppState> {
    match action {
        Action::SearchInput(text) => {
            let mut new_state = state;
            let effect = match new_state.search.on_input(text) {
                SearchInputOutcome::Cleared => Effect::CancelSearchDebounce,
                SearchInputOutcome::Pending(generation) => Effect::DebounceSearch {
                    generation,
                    delay: Duration::from_millis(new_state.system.config.search_debounce_ms),
                },
            };
            Ok((new_state, effect))
        }
        Action::SearchDebounced { generation } => {
            let mut new_state = state;
            let effect = match new_state.search.begin_request(*generation) {
                Some(query) => Effect::FetchSearch {
                    generation: *generation,
                    query,
                },
                None => Effect::None,
            };
            Ok((new_state, effect))
        }
        Action::SearchLoaded { generation, result } => {
            let mut new_state = state;
            new_state.search.finish(*generation, result.clone());
            Ok((new_state, Effect::None))
        }
        _ => Err(state),
    }
}
