use anyhow::{anyhow, Result};

use crate::cache;
use crate::config::Config;
use crate::data_provider::StatHubDataProvider;
use crate::error::ApiError;
use crate::formatting::{format_header, format_match_date, BoxChars};
use crate::levels::{level_color, level_name, MAX_LEVEL};
use crate::types::{Achievement, AchievementSummary, Trophy, UserStats, XpInfo};

/// Width of the progress bar in the XP section
const XP_BAR_WIDTH: usize = 20;

fn format_stats(stats: &UserStats) -> String {
    format!(
        "Matches: {}  Goals: {}  Assists: {}  Rating: {:.1}\nTrophies: {}  Achievements: {}\n",
        stats.matches_played,
        stats.total_goals,
        stats.total_assists,
        stats.avg_rating,
        stats.trophy_count,
        stats.achievements_unlocked,
    )
}

fn format_xp(xp: &XpInfo) -> String {
    // The backend name wins; the local table covers older responses
    let name = if xp.level_name.trim().is_empty() {
        level_name(xp.level)
    } else {
        xp.level_name.as_str()
    };
    let mut output = format!(
        "Level {} {} ({}), {} XP\n",
        xp.level,
        name,
        level_color(xp.level),
        xp.current_xp
    );

    match xp.xp_for_next_level {
        Some(next) if xp.level < MAX_LEVEL => {
            let filled = ((xp.progress_percent.clamp(0.0, 100.0) / 100.0) * XP_BAR_WIDTH as f64)
                .round() as usize;
            output.push_str(&format!(
                "[{}{}] {}/{} to level {}\n",
                "#".repeat(filled),
                "-".repeat(XP_BAR_WIDTH - filled),
                xp.xp_in_level,
                next,
                xp.level + 1
            ));
        }
        _ => output.push_str("Max level\n"),
    }
    output
}

/// Summary over every achievement, then the rows in `tier` (all when None)
fn format_achievements(achievements: &[Achievement], tier: Option<&str>) -> String {
    if achievements.is_empty() {
        return "No achievements\n".to_string();
    }
    let summary = AchievementSummary::of(achievements);
    let mut output = format!(
        "Unlocked: {} / {}  Total points: {}\n",
        summary.unlocked, summary.total, summary.points
    );

    let shown: Vec<&Achievement> = achievements
        .iter()
        .filter(|a| tier.map_or(true, |t| a.in_tier(t)))
        .collect();
    if shown.is_empty() {
        output.push_str(&format!("No {} achievements\n", tier.unwrap_or_default().trim()));
        return output;
    }
    for achievement in shown {
        output.push_str(&format!(
            "[{}] {} ({}, {} pts) {}/{}\n",
            if achievement.unlocked { "x" } else { " " },
            achievement.name,
            achievement.tier,
            achievement.points,
            achievement.current_value.min(achievement.target_value),
            achievement.target_value,
        ));
    }
    output
}

fn format_trophies(trophies: &[Trophy], time_format: &str) -> String {
    if trophies.is_empty() {
        return "No trophies\n".to_string();
    }
    let mut output = String::new();
    for trophy in trophies {
        output.push_str(&format!(
            "{} - {}",
            format_match_date(&trophy.date_awarded, time_format),
            trophy.name
        ));
        if let Some(description) = trophy.description.as_deref().filter(|d| !d.is_empty()) {
            output.push_str(&format!(": {}", description));
        }
        output.push('\n');
    }
    output
}

/// Full player profile as text
pub fn format_player(
    stats: &UserStats,
    xp: &XpInfo,
    achievements: &[Achievement],
    trophies: &[Trophy],
    tier: Option<&str>,
    config: &Config,
) -> String {
    let box_chars = BoxChars::from_use_unicode(config.use_unicode);
    let mut output = format_header(&format!("Player {}", stats.user_id), true, &box_chars);
    output.push_str(&format_stats(stats));
    output.push_str(&format!("\n{}", format_header("Level", false, &box_chars)));
    output.push_str(&format_xp(xp));
    output.push_str(&format!("\n{}", format_header("Achievements", false, &box_chars)));
    output.push_str(&format_achievements(achievements, tier));
    output.push_str(&format!("\n{}", format_header("Trophies", false, &box_chars)));
    output.push_str(&format_trophies(trophies, &config.time_format));
    output
}

/// A 404 means the player does not exist; anything else keeps its cause
fn fetch_error(err: ApiError, what: &str, user_id: i64) -> anyhow::Error {
    if err.status() == Some(404) {
        anyhow!("Player {} not found", user_id)
    } else {
        anyhow::Error::new(err).context(format!("Failed to fetch {} for player {}", what, user_id))
    }
}

pub async fn run(
    client: &dyn StatHubDataProvider,
    user_id: i64,
    refresh: bool,
    tier: Option<&str>,
    config: &Config,
) -> Result<()> {
    let stats = if refresh {
        cache::refresh_player(client, user_id).await
    } else {
        cache::fetch_user_stats_cached(client, user_id).await
    }
    .map_err(|e| fetch_error(e, "stats", user_id))?;

    let xp = cache::fetch_user_xp_cached(client, user_id)
        .await
        .map_err(|e| fetch_error(e, "XP", user_id))?;
    let achievements = cache::fetch_achievements_cached(client, user_id)
        .await
        .map_err(|e| fetch_error(e, "achievements", user_id))?;
    let trophies = cache::fetch_trophies_cached(client, user_id)
        .await
        .map_err(|e| fetch_error(e, "trophies", user_id))?;

    print!(
        "{}",
        format_player(&stats, &xp, &achievements, &trophies, tier, config)
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;

    fn ascii_config() -> Config {
        Config {
            use_unicode: false,
            ..Config::default()
        }
    }

    #[test]
    fn test_format_player_sections() {
        let text = format_player(
            &fixtures::create_mock_user_stats(7),
            &fixtures::create_mock_xp(7),
            &fixtures::create_mock_achievements(7),
            &fixtures::create_mock_trophies(7),
            None,
            &ascii_config(),
        );
        assert!(text.starts_with("Player 7\n========\n"));
        assert!(text.contains("Goals: 14  Assists: 9  Rating: 7.3"));
        assert!(text.contains("Level 3 Rising Star (#3B82F6), 1450 XP"));
        assert!(text.contains("[#########-----------] 450/1000 to level 4"));
        assert!(text.contains("Unlocked: 2 / 3  Total points: 35\n"));
        assert!(text.contains("[x] First Goal (Beginner, 10 pts) 1/1"));
        assert!(text.contains("[ ] Hat-trick Hero (Expert, 50 pts) 2/3"));
        assert!(text.contains("[x] Playmaker (Advanced, 25 pts) 5/5"));
        assert!(text.contains("April 1, 2025 - Player of the Month: March 2025"));
    }

    #[test]
    fn test_blank_level_name_uses_local_table() {
        let mut xp = fixtures::create_mock_xp(1);
        xp.level = 5;
        xp.level_name = String::new();
        assert!(format_xp(&xp).starts_with("Level 5 Elite (#F59E0B)"));
    }

    #[test]
    fn test_max_level() {
        let mut xp = fixtures::create_mock_xp(1);
        xp.level = MAX_LEVEL;
        xp.xp_for_next_level = None;
        assert!(format_xp(&xp).ends_with("Max level\n"));
    }

    #[test]
    fn test_tier_filter_keeps_full_summary() {
        let achievements = fixtures::create_mock_achievements(7);
        let text = format_achievements(&achievements, Some("expert"));
        assert!(text.starts_with("Unlocked: 2 / 3  Total points: 35\n"));
        assert!(text.contains("Hat-trick Hero"));
        assert!(!text.contains("First Goal"));
        assert!(!text.contains("Playmaker"));

        assert_eq!(format_achievements(&achievements, Some("All")).lines().count(), 4);
        let none = format_achievements(&achievements, Some("Legend"));
        assert!(none.ends_with("No Legend achievements\n"));
    }

    #[test]
    fn test_fetch_error_names_missing_player() {
        let missing = ApiError::Status {
            status: 404,
            detail: "User not found".to_string(),
        };
        assert_eq!(fetch_error(missing, "stats", 7).to_string(), "Player 7 not found");

        let down = ApiError::Status {
            status: 503,
            detail: "down".to_string(),
        };
        let err = fetch_error(down, "XP", 7);
        assert_eq!(err.to_string(), "Failed to fetch XP for player 7");
        assert_eq!(format!("{:#}", err), "Failed to fetch XP for player 7: down (HTTP 503)");
    }

    #[test]
    fn test_empty_sections() {
        assert_eq!(format_achievements(&[], None), "No achievements\n");
        assert_eq!(format_trophies(&[], "%Y"), "No trophies\n");
    }
}
