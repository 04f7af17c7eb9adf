use crate::data_provider::StatHubDataProvider;
use crate::error::ApiError;
use crate::types::{Achievement, Trophy, UserStats, XpInfo};
use cached::proc_macro::cached;

use cached::Cached;

// Only per-player profile lookups are cached; rankings always hit the backend.

#[cfg(test)]
pub async fn clear_all_caches() {
    USER_STATS_CACHE.lock().await.cache_clear();
    USER_XP_CACHE.lock().await.cache_clear();
    ACHIEVEMENTS_CACHE.lock().await.cache_clear();
    TROPHIES_CACHE.lock().await.cache_clear();
}

#[cfg(test)]
#[derive(Debug)]
pub struct CacheStats {
    pub user_stats_entries: usize,
    pub user_xp_entries: usize,
    pub achievements_entries: usize,
    pub trophies_entries: usize,
}

#[cfg(test)]
pub async fn cache_stats() -> CacheStats {
    CacheStats {
        user_stats_entries: USER_STATS_CACHE.lock().await.cache_size(),
        user_xp_entries: USER_XP_CACHE.lock().await.cache_size(),
        achievements_entries: ACHIEVEMENTS_CACHE.lock().await.cache_size(),
        trophies_entries: TROPHIES_CACHE.lock().await.cache_size(),
    }
}

#[cached(
    name = "USER_STATS_CACHE",
    type = "cached::TimedSizedCache<i64, UserStats>",
    create = "{ cached::TimedSizedCache::with_size_and_lifespan(100, 60) }",
    convert = r#"{ user_id }"#,
    result = true
)]
pub async fn fetch_user_stats_cached(
    client: &dyn StatHubDataProvider,
    user_id: i64,
) -> Result<UserStats, ApiError> {
    client.user_stats(user_id).await
}

#[cached(
    name = "USER_XP_CACHE",
    type = "cached::TimedSizedCache<i64, XpInfo>",
    create = "{ cached::TimedSizedCache::with_size_and_lifespan(100, 60) }",
    convert = r#"{ user_id }"#,
    result = true
)]
pub async fn fetch_user_xp_cached(
    client: &dyn StatHubDataProvider,
    user_id: i64,
) -> Result<XpInfo, ApiError> {
    client.user_xp(user_id).await
}

#[cached(
    name = "ACHIEVEMENTS_CACHE",
    type = "cached::TimedSizedCache<i64, Vec<Achievement>>",
    create = "{ cached::TimedSizedCache::with_size_and_lifespan(100, 300) }",
    convert = r#"{ user_id }"#,
    result = true
)]
pub async fn fetch_achievements_cached(
    client: &dyn StatHubDataProvider,
    user_id: i64,
) -> Result<Vec<Achievement>, ApiError> {
    client.user_achievements(user_id).await
}

#[cached(
    name = "TROPHIES_CACHE",
    type = "cached::TimedSizedCache<i64, Vec<Trophy>>",
    create = "{ cached::TimedSizedCache::with_size_and_lifespan(100, 300) }",
    convert = r#"{ user_id }"#,
    result = true
)]
pub async fn fetch_trophies_cached(
    client: &dyn StatHubDataProvider,
    user_id: i64,
) -> Result<Vec<Trophy>, ApiError> {
    client.user_trophies(user_id).await
}

/// Drop everything cached for one player and fetch their stats again
pub async fn refresh_player(
    client: &dyn StatHubDataProvider,
    user_id: i64,
) -> Result<UserStats, ApiError> {
    USER_XP_CACHE.lock().await.cache_remove(&user_id);
    ACHIEVEMENTS_CACHE.lock().await.cache_remove(&user_id);
    TROPHIES_CACHE.lock().await.cache_remove(&user_id);
    USER_STATS_CACHE.lock().await.cache_remove(&user_id);
    fetch_user_stats_cached(client, user_id).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dev::mock_client::MockClient;

    // The caches are process-wide statics, so every assertion that depends on
    // entry counts lives in this one test.
    #[tokio::test]
    async fn test_player_caches() {
        clear_all_caches().await;
        let client = MockClient::new();

        let stats = cache_stats().await;
        assert_eq!(stats.user_stats_entries, 0);
        assert_eq!(stats.achievements_entries, 0);

        let first = fetch_user_stats_cached(&client, 1).await.unwrap();
        let second = fetch_user_stats_cached(&client, 1).await.unwrap();
        assert_eq!(first, second);
        let _ = fetch_user_stats_cached(&client, 2).await;
        let _ = fetch_achievements_cached(&client, 1).await;
        let _ = fetch_trophies_cached(&client, 1).await;
        let _ = fetch_user_xp_cached(&client, 1).await;

        let stats = cache_stats().await;
        assert_eq!(stats.user_stats_entries, 2);
        assert_eq!(stats.achievements_entries, 1);
        assert_eq!(stats.trophies_entries, 1);
        assert_eq!(stats.user_xp_entries, 1);

        refresh_player(&client, 1).await.unwrap();
        let stats = cache_stats().await;
        assert_eq!(stats.user_stats_entries, 2);
        assert_eq!(stats.achievements_entries, 0);
        assert_eq!(stats.trophies_entries, 0);
        assert_eq!(stats.user_xp_entries, 0);

        clear_all_caches().await;
        assert_eq!(cache_stats().await.user_stats_entries, 0);
    }

    #[tokio::test]
    async fn test_errors_are_not_cached() {
        let client = MockClient::failing("backend down");
        assert!(fetch_trophies_cached(&client, 9999).await.is_err());
        assert!(fetch_trophies_cached(&client, 9999).await.is_err());
    }
}
