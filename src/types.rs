/// Shared types used across the application
///
/// Wire types mirror the StatHub REST API. `RankedEntity` is the row type
/// the ranking view works on, built from a `LeaderboardPlayer` for one
/// `RankingCriterion`.
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Metric a leaderboard is sorted by
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum RankingCriterion {
    #[default]
    Rating,
    Goals,
    Assists,
    Combined,
    Achievements,
    Trophies,
    Xp,
}

impl RankingCriterion {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Rating => "rating",
            Self::Goals => "goals",
            Self::Assists => "assists",
            Self::Combined => "combined",
            Self::Achievements => "achievements",
            Self::Trophies => "trophies",
            Self::Xp => "xp",
        }
    }

    /// Column header for the metric
    pub fn label(&self) -> &'static str {
        match self {
            Self::Rating => "Rating",
            Self::Goals => "Goals",
            Self::Assists => "Assists",
            Self::Combined => "G+A",
            Self::Achievements => "Achievements",
            Self::Trophies => "Trophies",
            Self::Xp => "XP",
        }
    }

    pub fn all() -> [Self; 7] {
        [
            Self::Rating,
            Self::Goals,
            Self::Assists,
            Self::Combined,
            Self::Achievements,
            Self::Trophies,
            Self::Xp,
        ]
    }

    /// Endpoint (path and query) returning this leaderboard
    pub fn endpoint(&self, limit: usize) -> String {
        match self {
            Self::Rating | Self::Goals | Self::Assists | Self::Combined => {
                format!("/ranking/{}?limit={}", self.name(), limit)
            }
            Self::Achievements => format!("/leaderboard/achievements?limit={}", limit),
            Self::Trophies => format!("/leaderboard/trophies?limit={}", limit),
            Self::Xp => format!("/leaderboard/?limit={}", limit),
        }
    }

    /// Extract the metric for this criterion from a leaderboard row
    pub fn metric(&self, player: &LeaderboardPlayer) -> f64 {
        let goals = player.total_goals.unwrap_or(0);
        let assists = player.total_assists.unwrap_or(0);
        match self {
            Self::Rating => player.avg_rating.unwrap_or(0.0),
            Self::Goals => goals as f64,
            Self::Assists => assists as f64,
            Self::Combined => player.combined.unwrap_or(goals + assists) as f64,
            Self::Achievements => player.achievement_count.unwrap_or(0) as f64,
            Self::Trophies => player.trophy_count.unwrap_or(0) as f64,
            Self::Xp => player.xp.unwrap_or(0) as f64,
        }
    }

    /// Ratings print with one decimal, counts as integers
    pub fn format_metric(&self, value: f64) -> String {
        match self {
            Self::Rating => format!("{:.1}", value),
            _ => format!("{}", value.round() as i64),
        }
    }
}

impl fmt::Display for RankingCriterion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for RankingCriterion {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "rating" => Ok(Self::Rating),
            "goals" => Ok(Self::Goals),
            "assists" => Ok(Self::Assists),
            "combined" | "g+a" => Ok(Self::Combined),
            "achievements" => Ok(Self::Achievements),
            "trophies" => Ok(Self::Trophies),
            "xp" => Ok(Self::Xp),
            other => Err(format!(
                "unknown ranking criterion '{}' (expected one of: {})",
                other,
                Self::all().map(|c| c.name()).join(", ")
            )),
        }
    }
}

/// One row of any leaderboard endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeaderboardPlayer {
    pub rank: u32,
    pub user_id: i64,
    pub username: String,
    #[serde(default)]
    pub full_name: Option<String>,
    #[serde(default)]
    pub photo_url: Option<String>,
    #[serde(default)]
    pub nationality: Option<String>,
    #[serde(default)]
    pub position: Option<String>,
    #[serde(default)]
    pub total_goals: Option<u32>,
    #[serde(default)]
    pub total_assists: Option<u32>,
    #[serde(default)]
    pub avg_rating: Option<f64>,
    #[serde(default)]
    pub matches_played: Option<u32>,
    #[serde(default)]
    pub combined: Option<u32>,
    #[serde(default)]
    pub trophy_count: Option<u32>,
    #[serde(default)]
    pub achievement_count: Option<u32>,
    #[serde(default)]
    pub xp: Option<u64>,
    #[serde(default)]
    pub level: Option<u32>,
}

/// Ranked row as shown by a ranking view
///
/// `rank` is the backend's rank for the criterion the list was loaded with.
#[derive(Debug, Clone, PartialEq)]
pub struct RankedEntity {
    pub rank: u32,
    pub id: i64,
    pub username: String,
    pub display_name: String,
    pub secondary_text: String,
    pub nationality: Option<String>,
    pub metric_value: f64,
}

impl RankedEntity {
    pub fn from_player(player: &LeaderboardPlayer, criterion: RankingCriterion) -> Self {
        let display_name = player
            .full_name
            .as_deref()
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .unwrap_or(&player.username)
            .to_string();

        Self {
            rank: player.rank,
            id: player.user_id,
            username: player.username.clone(),
            display_name,
            secondary_text: player.position.clone().unwrap_or_default(),
            nationality: player.nationality.clone(),
            metric_value: criterion.metric(player),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Match {
    pub id: i64,
    pub home_team: String,
    pub away_team: String,
    pub home_score: u32,
    pub away_score: u32,
    pub match_date: String,
    #[serde(default)]
    pub winner_team: Option<String>,
    #[serde(default)]
    pub home_avg_rating: Option<f64>,
    #[serde(default)]
    pub away_avg_rating: Option<f64>,
}

impl Match {
    /// Winning team name, or "Draw"
    pub fn winner(&self) -> &str {
        if self.home_score > self.away_score {
            &self.home_team
        } else if self.away_score > self.home_score {
            &self.away_team
        } else {
            "Draw"
        }
    }
}

/// One player's line in a match, as listed by the match details view
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchPlayer {
    pub id: i64,
    pub username: String,
    #[serde(default)]
    pub full_name: Option<String>,
    #[serde(default)]
    pub photo_url: Option<String>,
    #[serde(default)]
    pub jersey_number: Option<u32>,
    #[serde(default)]
    pub favorite_position: Option<String>,
    #[serde(default)]
    pub nationality: Option<String>,
    #[serde(default)]
    pub goals: u32,
    #[serde(default)]
    pub assists: u32,
    #[serde(default)]
    pub rating: f64,
}

impl MatchPlayer {
    pub fn display_name(&self) -> &str {
        self.full_name
            .as_deref()
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .unwrap_or(&self.username)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MatchPlayersResponse {
    #[serde(default)]
    pub home_players: Vec<MatchPlayer>,
    #[serde(default)]
    pub away_players: Vec<MatchPlayer>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchPlayerStats {
    #[serde(default)]
    pub matches: u32,
    #[serde(default)]
    pub goals: u32,
    #[serde(default)]
    pub assists: u32,
    #[serde(default)]
    pub rating: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchPlayer {
    pub id: i64,
    pub username: String,
    #[serde(default)]
    pub full_name: Option<String>,
    #[serde(default)]
    pub photo_url: Option<String>,
    #[serde(default)]
    pub nationality: Option<String>,
    #[serde(default)]
    pub favorite_position: Option<String>,
    #[serde(default)]
    pub jersey_number: Option<u32>,
    #[serde(default)]
    pub stats: SearchPlayerStats,
}

impl SearchPlayer {
    /// Search cards derive a level from goals: one level per five goals
    pub fn goal_level(&self) -> u32 {
        self.stats.goals / 5 + 1
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub players: Vec<SearchPlayer>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserStats {
    pub user_id: i64,
    #[serde(default)]
    pub matches_played: u32,
    #[serde(default)]
    pub total_goals: u32,
    #[serde(default)]
    pub total_assists: u32,
    #[serde(default)]
    pub avg_rating: f64,
    #[serde(default)]
    pub trophy_count: u32,
    #[serde(default)]
    pub achievements_unlocked: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct XpInfo {
    pub current_xp: u64,
    pub level: u32,
    pub level_name: String,
    #[serde(default)]
    pub level_color: String,
    pub xp_in_level: u64,
    #[serde(default)]
    pub xp_for_next_level: Option<u64>,
    #[serde(default)]
    pub progress_percent: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Achievement {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub tier: String,
    #[serde(default)]
    pub points: u32,
    #[serde(default)]
    pub target_value: u32,
    #[serde(default)]
    pub current_value: u32,
    #[serde(default)]
    pub unlocked: bool,
    #[serde(default)]
    pub unlocked_at: Option<String>,
}

impl Achievement {
    /// Tier match ignoring case; "all" matches every tier
    pub fn in_tier(&self, tier: &str) -> bool {
        let tier = tier.trim();
        tier.eq_ignore_ascii_case("all") || self.tier.eq_ignore_ascii_case(tier)
    }
}

/// Unlocked count and points over a set of achievements
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AchievementSummary {
    pub unlocked: usize,
    pub total: usize,
    pub points: u32,
}

impl AchievementSummary {
    /// Points count only unlocked achievements
    pub fn of(achievements: &[Achievement]) -> Self {
        let unlocked: Vec<&Achievement> = achievements.iter().filter(|a| a.unlocked).collect();
        Self {
            unlocked: unlocked.len(),
            total: achievements.len(),
            points: unlocked.iter().map(|a| a.points).sum(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trophy {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub awarded_to: i64,
    pub date_awarded: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest<'a> {
    pub credential: &'a str,
    pub password: &'a str,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LoginResponse {
    pub access_token: String,
    #[serde(default)]
    pub token_type: String,
}
