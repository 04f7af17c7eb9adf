/// Mock fixture data for testing and development
///
/// This module provides consistent, deterministic fixture data that can be used for:
/// 1. Unit and integration tests - ensuring tests have predictable data
/// 2. Development mock mode - running the app with fake data
/// 3. Benchmarks - providing consistent data for performance testing
use crate::levels::level_info;
use crate::types::{
    Achievement, LeaderboardPlayer, Match, MatchPlayer, MatchPlayersResponse, RankedEntity,
    RankingCriterion, SearchPlayer, SearchPlayerStats, SearchResponse, Trophy, UserStats, XpInfo,
};

/// Player names used by the fixtures: (full name, username, position, nationality)
const PLAYERS: [(&str, &str, &str, &str); 12] = [
    ("Ana Silva", "asilva", "Midfielder", "PT"),
    ("Carlos Mendes", "cmendes", "Goalkeeper", "ES"),
    ("Juan Ana", "juana", "Defender", "AR"),
    ("Marta Costa", "mcosta", "Forward", "BR"),
    ("Pedro Alves", "palves", "Defender", "PT"),
    ("Lena Fischer", "lfischer", "Midfielder", "DE"),
    ("Tom Walker", "twalker", "Forward", "ENG"),
    ("Sofia Rossi", "srossi", "Winger", "IT"),
    ("Nuno Gomes", "ngomes", "Forward", "PT"),
    ("Ines Duarte", "iduarte", "Defender", "PT"),
    ("Hugo Martin", "hmartin", "Goalkeeper", "FR"),
    ("Rui Pinto", "rpinto", "Midfielder", "PT"),
];

/// Create a leaderboard of `count` players, ranked 1..=count for every criterion
pub fn create_mock_leaderboard(
    criterion: RankingCriterion,
    count: usize,
) -> Vec<LeaderboardPlayer> {
    (0..count)
        .map(|i| {
            let (full_name, username, position, nationality) = PLAYERS[i % PLAYERS.len()];
            let round = i / PLAYERS.len();
            let (full_name, username) = if round == 0 {
                (full_name.to_string(), username.to_string())
            } else {
                (
                    format!("{} {}", full_name, round + 1),
                    format!("{}{}", username, round + 1),
                )
            };
            // Strictly decreasing with i, so the rank order is the same for every criterion
            let base = (count - i) as u32;
            LeaderboardPlayer {
                rank: (i + 1) as u32,
                user_id: (i + 1) as i64,
                username,
                full_name: Some(full_name),
                photo_url: None,
                nationality: Some(nationality.to_string()),
                position: Some(position.to_string()),
                total_goals: Some(base * 2),
                total_assists: Some(base),
                avg_rating: Some(5.0 + base as f64 * 4.0 / count.max(1) as f64),
                matches_played: Some(base + 3),
                combined: match criterion {
                    RankingCriterion::Combined => Some(base * 3),
                    _ => None,
                },
                trophy_count: Some(base),
                achievement_count: Some(base),
                xp: Some(base as u64 * 100),
                level: Some((base % 10) + 1),
            }
        })
        .collect()
}

/// Ranked entities built from the mock leaderboard
pub fn create_ranked_entities(criterion: RankingCriterion, count: usize) -> Vec<RankedEntity> {
    create_mock_leaderboard(criterion, count)
        .iter()
        .map(|player| RankedEntity::from_player(player, criterion))
        .collect()
}

pub fn create_mock_matches() -> Vec<Match> {
    let fixtures = [
        ("Reds", "Blues", 3, 1, "2025-03-01"),
        ("Greens", "Whites", 2, 2, "2025-03-08"),
        ("Blues", "Greens", 0, 1, "2025-03-15"),
        ("Whites", "Reds", 4, 2, "2025-03-22"),
        ("Reds", "Greens", 1, 1, "2025-03-29"),
        ("Blues", "Whites", 5, 3, "2025-04-05"),
        ("Greens", "Reds", 2, 0, "2025-04-12"),
        ("Whites", "Blues", 1, 2, "2025-04-19"),
    ];

    fixtures
        .iter()
        .enumerate()
        .map(|(i, (home, away, home_score, away_score, date))| {
            let m = Match {
                id: (i + 1) as i64,
                home_team: home.to_string(),
                away_team: away.to_string(),
                home_score: *home_score,
                away_score: *away_score,
                match_date: format!("{}T18:00:00", date),
                winner_team: None,
                home_avg_rating: Some(6.5),
                away_avg_rating: Some(6.2),
            };
            let winner = m.winner().to_string();
            Match {
                winner_team: (winner != "Draw").then_some(winner),
                ..m
            }
        })
        .collect()
}

/// Line-ups for one of the `create_mock_matches` ids: the first six fixture
/// players at home, the next six away
pub fn create_mock_match_players(match_id: i64) -> Option<MatchPlayersResponse> {
    if !create_mock_matches().iter().any(|m| m.id == match_id) {
        return None;
    }

    let players: Vec<MatchPlayer> = PLAYERS
        .iter()
        .enumerate()
        .map(|(i, (full_name, username, position, nationality))| MatchPlayer {
            id: (i + 1) as i64,
            username: username.to_string(),
            full_name: Some(full_name.to_string()),
            photo_url: None,
            jersey_number: Some((i + 1) as u32),
            favorite_position: Some(position.to_string()),
            nationality: Some(nationality.to_string()),
            goals: ((i as i64 + match_id) % 3) as u32,
            assists: (i % 2) as u32,
            rating: 6.0 + ((i + 1) % 4) as f64 * 0.5,
        })
        .collect();
    let (home, away) = players.split_at(PLAYERS.len() / 2);

    Some(MatchPlayersResponse {
        home_players: home.to_vec(),
        away_players: away.to_vec(),
    })
}

/// Players whose name or username contains the query
pub fn create_mock_search(query: &str) -> SearchResponse {
    let needle = query.trim().to_lowercase();
    let players = PLAYERS
        .iter()
        .enumerate()
        .filter(|(_, (full_name, username, _, _))| {
            !needle.is_empty()
                && (full_name.to_lowercase().contains(&needle) || username.contains(&needle))
        })
        .map(|(i, (full_name, username, position, nationality))| SearchPlayer {
            id: (i + 1) as i64,
            username: username.to_string(),
            full_name: Some(full_name.to_string()),
            photo_url: None,
            nationality: Some(nationality.to_string()),
            favorite_position: Some(position.to_string()),
            jersey_number: Some((i + 1) as u32),
            stats: SearchPlayerStats {
                matches: 10,
                goals: (PLAYERS.len() - i) as u32,
                assists: 3,
                rating: 7.0,
            },
        })
        .collect();

    SearchResponse { players }
}

pub fn create_mock_user_stats(user_id: i64) -> UserStats {
    UserStats {
        user_id,
        matches_played: 20,
        total_goals: 14,
        total_assists: 9,
        avg_rating: 7.3,
        trophy_count: 2,
        achievements_unlocked: 3,
    }
}

pub fn create_mock_xp(_user_id: i64) -> XpInfo {
    let level = 3;
    XpInfo {
        current_xp: 1450,
        level,
        level_name: level_info(level).name.to_string(),
        level_color: level_info(level).color.to_string(),
        xp_in_level: 450,
        xp_for_next_level: Some(1000),
        progress_percent: 45.0,
    }
}

pub fn create_mock_achievements(_user_id: i64) -> Vec<Achievement> {
    vec![
        Achievement {
            id: 1,
            name: "First Goal".to_string(),
            description: "Score your first goal".to_string(),
            tier: "Beginner".to_string(),
            points: 10,
            target_value: 1,
            current_value: 1,
            unlocked: true,
            unlocked_at: Some("2025-03-01T19:00:00".to_string()),
        },
        Achievement {
            id: 2,
            name: "Hat-trick Hero".to_string(),
            description: "Score three goals in one match".to_string(),
            tier: "Expert".to_string(),
            points: 50,
            target_value: 3,
            current_value: 2,
            unlocked: false,
            unlocked_at: None,
        },
        Achievement {
            id: 3,
            name: "Playmaker".to_string(),
            description: "Provide five assists".to_string(),
            tier: "Advanced".to_string(),
            points: 25,
            target_value: 5,
            current_value: 9,
            unlocked: true,
            unlocked_at: Some("2025-03-22T19:30:00".to_string()),
        },
    ]
}

pub fn create_mock_trophies(user_id: i64) -> Vec<Trophy> {
    vec![Trophy {
        id: 1,
        name: "Player of the Month".to_string(),
        description: Some("March 2025".to_string()),
        awarded_to: user_id,
        date_awarded: "2025-04-01".to_string(),
    }]
}
