use tracing::debug;

use crate::view::action::Action;
use crate::view::effects::Effect;
use crate::view::state::AppState;

/// Handle ranking list actions
///
/// Returns Ok((new_state, effect)) if the action was handled,
/// or Err(state) to pass ownership back to the caller.
pub fn reduce_ranking(state: AppState, action: &Action) -> Result<(AppState, Effect), AppState> {
    match action {
        Action::SelectCriterion(criterion) => {
            let mut new_state = state;
            if new_state.ranking.criterion == *criterion
                && new_state.ranking.list.generation() > 0
            {
                debug!("RANKING: {} already selected", criterion);
                return Ok((new_state, Effect::None));
            }
            new_state.ranking.criterion = *criterion;
            Ok(start_load(new_state))
        }
        Action::RefreshRanking => Ok(start_load(state)),
        Action::SetRankingQuery(query) => {
            let mut new_state = state;
            new_state.ranking.list.set_query(query);
            Ok((new_state, Effect::None))
        }
        Action::LoadMoreRanking => {
            let mut new_state = state;
            new_state.ranking.list.load_more();
            Ok((new_state, Effect::None))
        }
        Action::RankingLoaded { generation, result } => {
            let mut new_state = state;
            let applied = new_state
                .ranking
                .list
                .finish_load(*generation, result.clone());
            if applied {
                match result {
                    Ok(_) => new_state.system.clear_status_message(),
                    Err(e) => new_state.system.set_status_error_message(format!(
                        "Failed to load {} ranking: {}",
                        new_state.ranking.criterion, e
                    )),
                }
            }
            Ok((new_state, Effect::None))
        }
        _ => Err(state),
    }
}

/// Move the list to loading and request the current criterion
pub(crate) fn start_load(state: AppState) -> (AppState, Effect) {
    let mut new_state = state;
    let generation = new_state.ranking.list.begin_load();
    debug!(
        "RANKING: loading {} (generation={})",
        new_state.ranking.criterion, generation
    );
    let effect = Effect::FetchRanking {
        generation,
        criterion: new_state.ranking.criterion,
        limit: new_state.system.config.ranking_limit,
    };
    (new_state, effect)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;
    use crate::types::RankingCriterion;

    fn reduce(state: AppState, action: Action) -> (AppState, Effect) {
        match reduce_ranking(state, &action) {
            Ok(result) => result,
            Err(_) => panic!("action not handled: {:?}", action),
        }
    }

    fn fetched_generation(effect: &Effect) -> u64 {
        match effect {
            Effect::FetchRanking { generation, .. } => *generation,
            other => panic!("Expected FetchRanking, got {:?}", other),
        }
    }

    fn loaded(criterion: RankingCriterion, count: usize) -> AppState {
        let (state, effect) = reduce(AppState::default(), Action::SelectCriterion(criterion));
        let generation = fetched_generation(&effect);
        let (state, _) = reduce(
            state,
            Action::RankingLoaded {
                generation,
                result: Ok(fixtures::create_ranked_entities(criterion, count)),
            },
        );
        state
    }

    #[test]
    fn test_select_criterion_requests_leaderboard() {
        let (state, effect) = reduce(
            AppState::default(),
            Action::SelectCriterion(RankingCriterion::Goals),
        );
        assert_eq!(state.ranking.criterion, RankingCriterion::Goals);
        assert!(state.ranking.list.is_loading());
        match effect {
            Effect::FetchRanking {
                generation,
                criterion,
                limit,
            } => {
                assert_eq!(generation, 1);
                assert_eq!(criterion, RankingCriterion::Goals);
                assert_eq!(limit, 1000);
            }
            other => panic!("Expected FetchRanking, got {:?}", other),
        }
    }

    #[test]
    fn test_criterion_change_resets_query_and_window() {
        let mut state = loaded(RankingCriterion::Goals, 120);
        let (s, _) = reduce(state, Action::SetRankingQuery("ana".to_string()));
        let (s, _) = reduce(s, Action::LoadMoreRanking);
        state = s;
        assert_eq!(state.ranking.list.query(), "ana");
        assert_eq!(state.ranking.list.displayed_count(), 20);

        let (state, effect) = reduce(state, Action::SelectCriterion(RankingCriterion::Assists));
        let generation = fetched_generation(&effect);
        let (state, _) = reduce(
            state,
            Action::RankingLoaded {
                generation,
                result: Ok(fixtures::create_ranked_entities(RankingCriterion::Assists, 120)),
            },
        );

        assert_eq!(state.ranking.criterion, RankingCriterion::Assists);
        assert_eq!(state.ranking.list.query(), "");
        assert_eq!(state.ranking.list.displayed_count(), 10);
    }

    #[test]
    fn test_same_criterion_does_not_reload() {
        let state = loaded(RankingCriterion::Goals, 12);
        let generation = state.ranking.list.generation();
        let (state, effect) = reduce(state, Action::SelectCriterion(RankingCriterion::Goals));
        assert!(matches!(effect, Effect::None));
        assert_eq!(state.ranking.list.generation(), generation);
        assert!(!state.ranking.list.is_loading());
    }

    #[test]
    fn test_initial_criterion_can_be_selected_before_first_load() {
        let (state, effect) = reduce(
            AppState::default(),
            Action::SelectCriterion(RankingCriterion::Rating),
        );
        assert_eq!(fetched_generation(&effect), 1);
        assert!(state.ranking.list.is_loading());
    }

    #[test]
    fn test_refresh_reloads_same_criterion() {
        let state = loaded(RankingCriterion::Xp, 12);
        let (state, effect) = reduce(state, Action::RefreshRanking);
        assert_eq!(fetched_generation(&effect), 2);
        assert_eq!(state.ranking.criterion, RankingCriterion::Xp);
    }

    #[test]
    fn test_stale_ranking_is_ignored() {
        let (state, first) = reduce(
            AppState::default(),
            Action::SelectCriterion(RankingCriterion::Goals),
        );
        let (state, second) = reduce(state, Action::SelectCriterion(RankingCriterion::Assists));

        let (state, _) = reduce(
            state,
            Action::RankingLoaded {
                generation: fetched_generation(&second),
                result: Ok(fixtures::create_ranked_entities(RankingCriterion::Assists, 12)),
            },
        );
        let (state, _) = reduce(
            state,
            Action::RankingLoaded {
                generation: fetched_generation(&first),
                result: Ok(fixtures::create_ranked_entities(RankingCriterion::Goals, 3)),
            },
        );

        assert_eq!(state.ranking.criterion, RankingCriterion::Assists);
        assert_eq!(state.ranking.list.items().len(), 12);
    }

    #[test]
    fn test_failed_load_sets_status_error() {
        let state = loaded(RankingCriterion::Goals, 12);
        let (state, effect) = reduce(state, Action::RefreshRanking);
        let (state, _) = reduce(
            state,
            Action::RankingLoaded {
                generation: fetched_generation(&effect),
                result: Err("Request failed (HTTP 500)".to_string()),
            },
        );
        assert!(!state.ranking.list.is_loading());
        assert_eq!(state.ranking.list.items().len(), 12);
        assert!(state.system.status_is_error);
        assert_eq!(
            state.system.status_message.as_deref(),
            Some("Failed to load goals ranking: Request failed (HTTP 500)")
        );
    }

    #[test]
    fn test_successful_reload_clears_load_error() {
        let (state, effect) = reduce(AppState::default(), Action::RefreshRanking);
        let (state, _) = reduce(
            state,
            Action::RankingLoaded {
                generation: fetched_generation(&effect),
                result: Err("timeout".to_string()),
            },
        );
        assert!(state.system.status_is_error);

        let (state, effect) = reduce(state, Action::RefreshRanking);
        let (state, _) = reduce(
            state,
            Action::RankingLoaded {
                generation: fetched_generation(&effect),
                result: Ok(fixtures::create_ranked_entities(RankingCriterion::Rating, 5)),
            },
        );
        assert_eq!(state.ranking.list.last_error(), None);
        assert_eq!(state.system.status_message, None);
        assert!(!state.system.status_is_error);
    }

    #[test]
    fn test_stale_success_keeps_current_error() {
        let (state, first) = reduce(AppState::default(), Action::RefreshRanking);
        let (state, second) = reduce(state, Action::RefreshRanking);
        let (state, _) = reduce(
            state,
            Action::RankingLoaded {
                generation: fetched_generation(&second),
                result: Err("timeout".to_string()),
            },
        );
        let (state, _) = reduce(
            state,
            Action::RankingLoaded {
                generation: fetched_generation(&first),
                result: Ok(fixtures::create_ranked_entities(RankingCriterion::Rating, 5)),
            },
        );
        assert!(state.system.status_is_error);
    }

    #[test]
    fn test_unrelated_actions_pass_through() {
        assert!(reduce_ranking(AppState::default(), &Action::LoadMoreMatches).is_err());
    }
}
