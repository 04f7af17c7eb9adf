use tracing::debug;

use crate::view::action::Action;
use crate::view::effects::Effect;
use crate::view::state::AppState;

/// Move the matches list to loading and request it
pub(crate) fn start_load(state: AppState) -> (AppState, Effect) {
    let mut new_state = state;
    let generation = new_state.matches.begin_load();
    debug!("MATCHES: loading (generation={})", generation);
    (new_state, Effect::FetchMatches { generation })
}

/// Handle matches list actions
pub fn reduce_matches(state: AppState, action: &Action) -> Result<(AppState, Effect), AppState> {
    match action {
        Action::RefreshMatches => Ok(start_load(state)),
        Action::SetMatchesQuery(query) => {
            let mut new_state = state;
            new_state.matches.set_query(query);
            Ok((new_state, Effect::None))
        }
        Action::LoadMoreMatches => {
            let mut new_state = state;
            new_state.matches.load_more();
            Ok((new_state, Effect::None))
        }
        Action::MatchesLoaded { generation, result } => {
            let mut new_state = state;
            if new_state.matches.finish_load(*generation, result.clone()) {
                match result {
                    Ok(_) => new_state.system.clear_status_message(),
                    Err(e) => new_state
                        .system
                        .set_status_error_message(format!("Failed to load matches: {}", e)),
                }
            }
            Ok((new_state, Effect::None))
        }
        _ => Err(state),
    }
}
