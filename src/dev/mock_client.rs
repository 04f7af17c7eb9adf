/// Mock StatHub client for development and testing
use crate::data_provider::StatHubDataProvider;
use crate::error::ApiError;
use crate::fixtures;
use crate::types::{
    Achievement, LeaderboardPlayer, LoginResponse, Match, MatchPlayersResponse, RankingCriterion,
    SearchResponse, Trophy, UserStats, XpInfo,
};
use async_trait::async_trait;
use tracing::info;

/// Number of players in the mock leaderboards
pub const MOCK_PLAYER_COUNT: usize = 25;

/// Mock client that returns fixture data instead of making real API calls
pub struct MockClient {
    failure: Option<String>,
}

impl MockClient {
    /// Create a new mock client
    pub fn new() -> Self {
        info!("Creating MockClient for development mode");
        Self { failure: None }
    }

    /// Mock client whose every call fails with a 503 carrying `detail`
    pub fn failing(detail: &str) -> Self {
        Self {
            failure: Some(detail.to_string()),
        }
    }

    fn check(&self) -> Result<(), ApiError> {
        match &self.failure {
            Some(detail) => Err(ApiError::Status {
                status: 503,
                detail: detail.clone(),
            }),
            None => Ok(()),
        }
    }
}

impl Default for MockClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl StatHubDataProvider for MockClient {
    async fn ranking(
        &self,
        criterion: RankingCriterion,
        limit: usize,
    ) -> Result<Vec<LeaderboardPlayer>, ApiError> {
        self.check()?;
        info!("MockClient: Returning mock {} ranking", criterion);
        Ok(fixtures::create_mock_leaderboard(
            criterion,
            MOCK_PLAYER_COUNT.min(limit),
        ))
    }

    async fn matches(&self) -> Result<Vec<Match>, ApiError> {
        self.check()?;
        info!("MockClient: Returning mock matches");
        Ok(fixtures::create_mock_matches())
    }

    async fn match_players(&self, match_id: i64) -> Result<MatchPlayersResponse, ApiError> {
        self.check()?;
        fixtures::create_mock_match_players(match_id).ok_or_else(|| ApiError::Status {
            status: 404,
            detail: "Match not found".to_string(),
        })
    }

    async fn search(&self, query: &str) -> Result<SearchResponse, ApiError> {
        self.check()?;
        info!("MockClient: Returning mock search for {:?}", query);
        Ok(fixtures::create_mock_search(query))
    }

    async fn user_stats(&self, user_id: i64) -> Result<UserStats, ApiError> {
        self.check()?;
        Ok(fixtures::create_mock_user_stats(user_id))
    }

    async fn user_xp(&self, user_id: i64) -> Result<XpInfo, ApiError> {
        self.check()?;
        Ok(fixtures::create_mock_xp(user_id))
    }

    async fn user_achievements(&self, user_id: i64) -> Result<Vec<Achievement>, ApiError> {
        self.check()?;
        Ok(fixtures::create_mock_achievements(user_id))
    }

    async fn user_trophies(&self, user_id: i64) -> Result<Vec<Trophy>, ApiError> {
        self.check()?;
        Ok(fixtures::create_mock_trophies(user_id))
    }

    async fn login(&self, credential: &str, _password: &str) -> Result<LoginResponse, ApiError> {
        self.check()?;
        info!("MockClient: Logging in {}", credential);
        Ok(LoginResponse {
            access_token: format!("mock-token-{}", credential),
            token_type: "bearer".to_string(),
        })
    }
}
