/// Trait for providing StatHub data, abstracting over the real REST client and mock implementations
use async_trait::async_trait;

use crate::client::Client;
use crate::error::ApiError;
use crate::types::{
    Achievement, LeaderboardPlayer, LoginResponse, Match, MatchPlayersResponse, RankingCriterion,
    SearchResponse, Trophy, UserStats, XpInfo,
};

/// Trait for StatHub data providers, implemented by both the real Client and MockClient
#[async_trait]
pub trait StatHubDataProvider: Send + Sync {
    /// Get the full leaderboard for a criterion, already ranked by the backend
    async fn ranking(
        &self,
        criterion: RankingCriterion,
        limit: usize,
    ) -> Result<Vec<LeaderboardPlayer>, ApiError>;

    /// Get all matches
    async fn matches(&self) -> Result<Vec<Match>, ApiError>;

    /// Home and away line-ups with per-player ratings for one match
    async fn match_players(&self, match_id: i64) -> Result<MatchPlayersResponse, ApiError>;

    /// Network player search
    async fn search(&self, query: &str) -> Result<SearchResponse, ApiError>;

    async fn user_stats(&self, user_id: i64) -> Result<UserStats, ApiError>;

    async fn user_xp(&self, user_id: i64) -> Result<XpInfo, ApiError>;

    async fn user_achievements(&self, user_id: i64) -> Result<Vec<Achievement>, ApiError>;

    async fn user_trophies(&self, user_id: i64) -> Result<Vec<Trophy>, ApiError>;

    /// Exchange credentials for a token
    async fn login(&self, credential: &str, password: &str) -> Result<LoginResponse, ApiError>;
}

/// Implement the trait for the reqwest-backed Client
#[async_trait]
impl StatHubDataProvider for Client {
    async fn ranking(
        &self,
        criterion: RankingCriterion,
        limit: usize,
    ) -> Result<Vec<LeaderboardPlayer>, ApiError> {
        self.ranking(criterion, limit).await
    }

    async fn matches(&self) -> Result<Vec<Match>, ApiError> {
        self.matches().await
    }

    async fn match_players(&self, match_id: i64) -> Result<MatchPlayersResponse, ApiError> {
        self.match_players(match_id).await
    }

    async fn search(&self, query: &str) -> Result<SearchResponse, ApiError> {
        self.search(query).await
    }

    async fn user_stats(&self, user_id: i64) -> Result<UserStats, ApiError> {
        self.user_stats(user_id).await
    }

    async fn user_xp(&self, user_id: i64) -> Result<XpInfo, ApiError> {
        self.user_xp(user_id).await
    }

    async fn user_achievements(&self, user_id: i64) -> Result<Vec<Achievement>, ApiError> {
        self.user_achievements(user_id).await
    }

    async fn user_trophies(&self, user_id: i64) -> Result<Vec<Trophy>, ApiError> {
        self.user_trophies(user_id).await
    }

    async fn login(&self, credential: &str, password: &str) -> Result<LoginResponse, ApiError> {
        self.login(credential, password).await
    }
}
