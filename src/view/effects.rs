use std::fmt;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::time::Duration;

use super::action::Action;
use crate::data_provider::StatHubDataProvider;
use crate::types::{RankedEntity, RankingCriterion};

/// Side effects returned by the reducer
///
/// Fetch variants carry the request generation; the runtime turns them into
/// `Async` effects through `DataEffects`.
pub enum Effect {
    None,
    Batch(Vec<Effect>),
    Async(Pin<Box<dyn Future<Output = Action> + Send>>),
    FetchRanking {
        generation: u64,
        criterion: RankingCriterion,
        limit: usize,
    },
    FetchMatches {
        generation: u64,
    },
    FetchSearch {
        generation: u64,
        query: String,
    },
    /// (Re)start the search quiet-period timer, cancelling any pending one
    DebounceSearch {
        generation: u64,
        delay: Duration,
    },
    CancelSearchDebounce,
}

impl fmt::Debug for Effect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::None => write!(f, "None"),
            Self::Batch(effects) => f.debug_tuple("Batch").field(effects).finish(),
            Self::Async(_) => write!(f, "Async(..)"),
            Self::FetchRanking {
                generation,
                criterion,
                limit,
            } => f
                .debug_struct("FetchRanking")
                .field("generation", generation)
                .field("criterion", criterion)
                .field("limit", limit)
                .finish(),
            Self::FetchMatches { generation } => f
                .debug_struct("FetchMatches")
                .field("generation", generation)
                .finish(),
            Self::FetchSearch { generation, query } => f
                .debug_struct("FetchSearch")
                .field("generation", generation)
                .field("query", query)
                .finish(),
            Self::DebounceSearch { generation, delay } => f
                .debug_struct("DebounceSearch")
                .field("generation", generation)
                .field("delay", delay)
                .finish(),
            Self::CancelSearchDebounce => write!(f, "CancelSearchDebounce"),
        }
    }
}

/// Effect handler for data fetching operations
///
/// Each method returns an Effect that will dispatch the matching *Loaded
/// action when complete. Errors are stringified here.
pub struct DataEffects {
    client: Arc<dyn StatHubDataProvider>,
}

impl DataEffects {
    pub fn new(client: Arc<dyn StatHubDataProvider>) -> Self {
        Self { client }
    }

    /// Fetch the full leaderboard for a criterion (never cached)
    pub fn fetch_ranking(
        &self,
        generation: u64,
        criterion: RankingCriterion,
        limit: usize,
    ) -> Effect {
        let client = self.client.clone();
        Effect::Async(Box::pin(async move {
            let result = client.ranking(criterion, limit).await.map(|players| {
                players
                    .iter()
                    .map(|player| RankedEntity::from_player(player, criterion))
                    .collect()
            });
            Action::RankingLoaded {
                generation,
                result: result.map_err(|e| e.to_string()),
            }
        }))
    }

    pub fn fetch_matches(&self, generation: u64) -> Effect {
        let client = self.client.clone();
        Effect::Async(Box::pin(async move {
            let result = client.matches().await;
            Action::MatchesLoaded {
                generation,
                result: result.map_err(|e| e.to_string()),
            }
        }))
    }

    pub fn fetch_search(&self, generation: u64, query: String) -> Effect {
        let client = self.client.clone();
        Effect::Async(Box::pin(async move {
            let result = client.search(&query).await.map(|response| response.players);
            Action::SearchLoaded {
                generation,
                result: result.map_err(|e| e.to_string()),
            }
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dev::mock_client::{MockClient, MOCK_PLAYER_COUNT};

    fn create_effects(client: MockClient) -> DataEffects {
        DataEffects::new(Arc::new(client))
    }

    async fn run(effect: Effect) -> Action {
        match effect {
            Effect::Async(future) => future.await,
            other => panic!("Expected Async effect, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_fetch_ranking_builds_entities() {
        let effects = create_effects(MockClient::new());
        let action = run(effects.fetch_ranking(4, RankingCriterion::Assists, 1000)).await;
        match action {
            Action::RankingLoaded { generation, result } => {
                assert_eq!(generation, 4);
                let entities = result.unwrap();
                assert_eq!(entities.len(), MOCK_PLAYER_COUNT);
                assert_eq!(entities[0].rank, 1);
                assert_eq!(entities[0].display_name, "Ana Silva");
                assert_eq!(entities[0].metric_value, MOCK_PLAYER_COUNT as f64);
            }
            other => panic!("Expected RankingLoaded, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_fetch_ranking_respects_limit() {
        let effects = create_effects(MockClient::new());
        match run(effects.fetch_ranking(1, RankingCriterion::Goals, 7)).await {
            Action::RankingLoaded { result, .. } => assert_eq!(result.unwrap().len(), 7),
            other => panic!("Expected RankingLoaded, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_fetch_errors_are_stringified() {
        let effects = create_effects(MockClient::failing("Service unavailable"));
        match run(effects.fetch_matches(2)).await {
            Action::MatchesLoaded { generation, result } => {
                assert_eq!(generation, 2);
                assert_eq!(result.unwrap_err(), "Service unavailable (HTTP 503)");
            }
            other => panic!("Expected MatchesLoaded, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_fetch_search_returns_players() {
        let effects = create_effects(MockClient::new());
        match run(effects.fetch_search(9, "ana".to_string())).await {
            Action::SearchLoaded { generation, result } => {
                assert_eq!(generation, 9);
                assert_eq!(result.unwrap().len(), 2);
            }
            other => panic!("Expected SearchLoaded, got {:?}", other),
        }
    }

    #[test]
    fn test_effect_debug_hides_futures() {
        let effect = Effect::Batch(vec![
            Effect::None,
            Effect::Async(Box::pin(async { Action::Quit })),
        ]);
        assert_eq!(format!("{:?}", effect), "Batch([None, Async(..)])");
    }
}
