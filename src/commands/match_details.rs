use anyhow::{bail, Context, Result};

use crate::config::Config;
use crate::data_provider::StatHubDataProvider;
use crate::formatting::{format_header, format_match_date, format_match_players_table, BoxChars};
use crate::types::{Match, MatchPlayer, MatchPlayersResponse};

fn format_lineup(team: &str, players: &[MatchPlayer], box_chars: &BoxChars) -> String {
    let title = format!("{} ({} players)", team, players.len());
    let mut output = format_header(&title, false, box_chars);
    if players.is_empty() {
        output.push_str("No player stats recorded\n");
    } else {
        output.push_str(&format_match_players_table(players, box_chars));
    }
    output
}

/// Score line, result and both line-ups with per-player ratings
pub fn format_match_details(
    m: &Match,
    lineups: &MatchPlayersResponse,
    time_format: &str,
    box_chars: &BoxChars,
) -> String {
    let mut output = format_header(&format!("Match {}", m.id), true, box_chars);
    output.push_str(&format!("{}\n", format_match_date(&m.match_date, time_format)));
    output.push_str(&format!(
        "{} {} - {} {}\n",
        m.home_team, m.home_score, m.away_score, m.away_team
    ));
    match m.winner() {
        "Draw" => output.push_str("Draw\n"),
        winner => output.push_str(&format!("Winner: {}\n", winner)),
    }
    if let (Some(home), Some(away)) = (m.home_avg_rating, m.away_avg_rating) {
        output.push_str(&format!("Avg rating: {:.1} - {:.1}\n", home, away));
    }

    output.push('\n');
    output.push_str(&format_lineup(&m.home_team, &lineups.home_players, box_chars));
    output.push('\n');
    output.push_str(&format_lineup(&m.away_team, &lineups.away_players, box_chars));
    output
}

pub async fn run(client: &dyn StatHubDataProvider, match_id: i64, config: &Config) -> Result<()> {
    let matches = client.matches().await.context("Failed to fetch matches")?;
    let Some(m) = matches.into_iter().find(|m| m.id == match_id) else {
        bail!("Match {} not found", match_id);
    };

    let lineups = client
        .match_players(match_id)
        .await
        .with_context(|| format!("Failed to fetch players for match {}", match_id))?;

    let box_chars = BoxChars::from_use_unicode(config.use_unicode);
    print!(
        "{}",
        format_match_details(&m, &lineups, &config.time_format, &box_chars)
    );
    Ok(())
}
