//! Test utilities for the view runtime.
//!
//! `ScriptedClient` is a provider whose per-criterion response delay and row
//! count are set by the test, and which records every request it receives.
//! Used to reproduce out-of-order completions and to count debounced
//! searches.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;

use super::effects::DataEffects;
use super::runtime::Runtime;
use super::state::AppState;
use crate::config::Config;
use crate::data_provider::StatHubDataProvider;
use crate::error::ApiError;
use crate::fixtures;
use crate::types::{
    Achievement, LeaderboardPlayer, LoginResponse, Match, MatchPlayersResponse, RankingCriterion,
    SearchResponse, Trophy, UserStats, XpInfo,
};

/// Scripted response for one leaderboard
#[derive(Debug, Clone, Copy)]
pub struct RankingScript {
    pub delay: Duration,
    pub count: usize,
}

#[derive(Default)]
pub struct ScriptedClient {
    rankings: HashMap<RankingCriterion, RankingScript>,
    search_delay: Duration,
    requests: Mutex<Vec<String>>,
}

impl ScriptedClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_ranking(
        mut self,
        criterion: RankingCriterion,
        delay_ms: u64,
        count: usize,
    ) -> Self {
        self.rankings.insert(
            criterion,
            RankingScript {
                delay: Duration::from_millis(delay_ms),
                count,
            },
        );
        self
    }

    pub fn with_search_delay(mut self, delay_ms: u64) -> Self {
        self.search_delay = Duration::from_millis(delay_ms);
        self
    }

    /// Requests received so far, e.g. `ranking:goals` or `search:ana`
    pub fn requests(&self) -> Vec<String> {
        self.requests
            .lock()
            .map(|requests| requests.clone())
            .unwrap_or_default()
    }

    pub fn search_requests(&self) -> Vec<String> {
        self.requests()
            .into_iter()
            .filter_map(|r| r.strip_prefix("search:").map(str::to_string))
            .collect()
    }

    fn record(&self, request: String) {
        if let Ok(mut requests) = self.requests.lock() {
            requests.push(request);
        }
    }
}

#[async_trait]
impl StatHubDataProvider for ScriptedClient {
    async fn ranking(
        &self,
        criterion: RankingCriterion,
        limit: usize,
    ) -> Result<Vec<LeaderboardPlayer>, ApiError> {
        self.record(format!("ranking:{}", criterion));
        let script = self.rankings.get(&criterion).copied().unwrap_or(RankingScript {
            delay: Duration::ZERO,
            count: 10,
        });
        tokio::time::sleep(script.delay).await;
        Ok(fixtures::create_mock_leaderboard(criterion, script.count.min(limit)))
    }

    async fn matches(&self) -> Result<Vec<Match>, ApiError> {
        self.record("matches".to_string());
        Ok(fixtures::create_mock_matches())
    }

    async fn match_players(&self, match_id: i64) -> Result<MatchPlayersResponse, ApiError> {
        self.record(format!("match:{}", match_id));
        Ok(fixtures::create_mock_match_players(match_id).unwrap_or_default())
    }

    async fn search(&self, query: &str) -> Result<SearchResponse, ApiError> {
        self.record(format!("search:{}", query));
        tokio::time::sleep(self.search_delay).await;
        Ok(fixtures::create_mock_search(query))
    }

    async fn user_stats(&self, user_id: i64) -> Result<UserStats, ApiError> {
        Ok(fixtures::create_mock_user_stats(user_id))
    }

    async fn user_xp(&self, user_id: i64) -> Result<XpInfo, ApiError> {
        Ok(fixtures::create_mock_xp(user_id))
    }

    async fn user_achievements(&self, user_id: i64) -> Result<Vec<Achievement>, ApiError> {
        Ok(fixtures::create_mock_achievements(user_id))
    }

    async fn user_trophies(&self, user_id: i64) -> Result<Vec<Trophy>, ApiError> {
        Ok(fixtures::create_mock_trophies(user_id))
    }

    async fn login(&self, credential: &str, _password: &str) -> Result<LoginResponse, ApiError> {
        Ok(LoginResponse {
            access_token: format!("scripted-{}", credential),
            token_type: "bearer".to_string(),
        })
    }
}

/// Runtime over a shared scripted client, with default config
pub fn create_runtime(client: Arc<ScriptedClient>) -> Runtime {
    let data_effects = Arc::new(DataEffects::new(client));
    Runtime::new(AppState::new(&Config::default()), data_effects)
}
