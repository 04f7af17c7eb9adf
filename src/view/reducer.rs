use tracing::debug;

use super::action::Action;
use super::effects::Effect;
use super::reducers::{self, reduce_matches, reduce_ranking, reduce_search};
use super::state::AppState;

/// Pure state reducer - like Redux reducer
///
/// Takes current state and an action, returns new state and an effect.
/// No I/O happens here; all side effects are returned as `Effect` to be
/// executed by the runtime.
///
/// Ownership is passed through the sub-reducer chain to avoid cloning:
/// - Each sub-reducer returns Ok((state, effect)) if it handled the action
/// - Or Err(state) to pass ownership back for the next reducer to try
pub fn reduce(state: AppState, action: Action) -> (AppState, Effect) {
    let state = match reduce_ranking(state, &action) {
        Ok(result) => return result,
        Err(state) => state,
    };

    let state = match reduce_matches(state, &action) {
        Ok(result) => return result,
        Err(state) => state,
    };

    let state = match reduce_search(state, &action) {
        Ok(result) => return result,
        Err(state) => state,
    };

    match action {
        Action::RefreshAll => {
            let (state, ranking) = reducers::ranking::start_load(state);
            let (state, matches) = reducers::matches::start_load(state);
            (state, Effect::Batch(vec![ranking, matches]))
        }

        Action::SetStatusMessage { message, is_error } => {
            let mut new_state = state;
            if is_error {
                new_state.system.set_status_error_message(message);
            } else {
                new_state.system.set_status_message(message);
            }
            (new_state, Effect::None)
        }

        Action::Quit => {
            debug!("ACTION: Quit");
            (state, Effect::None)
        }

        _ => (state, Effect::None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;
    use crate::types::RankingCriterion;
    use crate::view::render::render_status;

    #[test]
    fn test_ranking_actions_are_handled() {
        let (state, effect) = reduce(
            AppState::default(),
            Action::SelectCriterion(RankingCriterion::Trophies),
        );
        assert_eq!(state.ranking.criterion, RankingCriterion::Trophies);
        assert!(matches!(effect, Effect::FetchRanking { .. }));
    }

    #[test]
    fn test_matches_actions_are_handled() {
        let (state, effect) = reduce(AppState::default(), Action::RefreshMatches);
        assert!(state.matches.is_loading());
        assert!(matches!(effect, Effect::FetchMatches { generation: 1 }));
    }

    #[test]
    fn test_search_actions_are_handled() {
        let (_, effect) = reduce(AppState::default(), Action::SearchInput("ana".to_string()));
        assert!(matches!(effect, Effect::DebounceSearch { generation: 1, .. }));
    }

    #[test]
    fn test_set_status_message() {
        let (state, effect) = reduce(
            AppState::default(),
            Action::SetStatusMessage {
                message: "Logged in".to_string(),
                is_error: false,
            },
        );
        assert_eq!(state.system.status_message.as_deref(), Some("Logged in"));
        assert!(!state.system.status_is_error);
        assert!(matches!(effect, Effect::None));
    }

    #[test]
    fn test_quit_action_does_nothing_to_state() {
        let (state, effect) = reduce(AppState::default(), Action::Quit);
        assert_eq!(state.ranking.criterion, RankingCriterion::Rating);
        assert!(state.ranking.list.is_loading());
        assert!(matches!(effect, Effect::None));
    }

    #[test]
    fn test_refresh_all_batches_both_fetches() {
        let (state, effect) = reduce(AppState::default(), Action::RefreshAll);
        assert!(state.ranking.list.is_loading());
        assert!(state.matches.is_loading());
        match effect {
            Effect::Batch(effects) => {
                assert_eq!(effects.len(), 2);
                assert!(matches!(effects[0], Effect::FetchRanking { generation: 1, .. }));
                assert!(matches!(effects[1], Effect::FetchMatches { generation: 1 }));
            }
            other => panic!("Expected Batch, got {:?}", other),
        }
    }

    #[test]
    fn test_status_line_clears_after_recovery() {
        let (state, _) = reduce(AppState::default(), Action::RefreshRanking);
        let (state, _) = reduce(
            state,
            Action::RankingLoaded {
                generation: 1,
                result: Err("timeout".to_string()),
            },
        );
        assert_eq!(
            render_status(&state.system).as_deref(),
            Some("Error: Failed to load rating ranking: timeout")
        );

        let (state, _) = reduce(state, Action::RefreshRanking);
        let (state, _) = reduce(
            state,
            Action::RankingLoaded {
                generation: 2,
                result: Ok(fixtures::create_ranked_entities(RankingCriterion::Rating, 5)),
            },
        );
        assert_eq!(render_status(&state.system), None);
    }

    #[test]
    fn test_views_are_independent() {
        let (state, ranking) = reduce(AppState::default(), Action::RefreshRanking);
        let (state, matches) = reduce(state, Action::RefreshMatches);
        let ranking_generation = match ranking {
            Effect::FetchRanking { generation, .. } => generation,
            other => panic!("Expected FetchRanking, got {:?}", other),
        };
        assert!(matches!(matches, Effect::FetchMatches { generation: 1 }));

        let (state, _) = reduce(
            state,
            Action::RankingLoaded {
                generation: ranking_generation,
                result: Ok(fixtures::create_ranked_entities(RankingCriterion::Rating, 5)),
            },
        );
        assert!(!state.ranking.list.is_loading());
        assert!(state.matches.is_loading());
    }
}
