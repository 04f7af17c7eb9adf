use anyhow::{Context, Result};
use tracing::info;

use crate::commands::windowed;
use crate::config::Config;
use crate::data_provider::StatHubDataProvider;
use crate::formatting::BoxChars;
use crate::types::{RankedEntity, RankingCriterion};
use crate::view::render::render_ranking;
use crate::view::state::RankingState;

pub async fn run(
    client: &dyn StatHubDataProvider,
    criterion: RankingCriterion,
    query: Option<String>,
    pages: usize,
    config: &Config,
) -> Result<()> {
    info!("Fetching {} ranking", criterion);
    let players = client
        .ranking(criterion, config.ranking_limit)
        .await
        .with_context(|| format!("Failed to fetch {} ranking", criterion))?;

    let entities: Vec<RankedEntity> = players
        .iter()
        .map(|player| RankedEntity::from_player(player, criterion))
        .collect();

    let ranking = RankingState {
        criterion,
        list: windowed(entities, config.page_size, query.as_deref(), pages),
    };
    let box_chars = BoxChars::from_use_unicode(config.use_unicode);
    print!("{}", render_ranking(&ranking, &box_chars));

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dev::mock_client::MockClient;

    #[tokio::test]
    async fn test_run_with_mock_client() {
        let client = MockClient::new();
        let result = run(
            &client,
            RankingCriterion::Combined,
            Some("pt".to_string()),
            2,
            &Config::default(),
        )
        .await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_run_reports_backend_failure() {
        let client = MockClient::failing("Ranking unavailable");
        let err = run(&client, RankingCriterion::Goals, None, 1, &Config::default())
            .await
            .unwrap_err();
        let message = format!("{:#}", err);
        assert!(message.starts_with("Failed to fetch goals ranking"));
        assert!(message.contains("Ranking unavailable (HTTP 503)"));
    }
}
