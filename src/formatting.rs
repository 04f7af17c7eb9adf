use chrono::{NaiveDate, NaiveDateTime};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::countries::nationality_label;
use crate::types::{Match, MatchPlayer, RankedEntity, RankingCriterion, SearchPlayer};

// Layout Constants
/// Width of the rank column
const RANK_COL_WIDTH: usize = 4;

/// Width of the player name column
const NAME_COL_WIDTH: usize = 24;

/// Width of the position column
const POSITION_COL_WIDTH: usize = 12;

/// Width of the nationality column
const NAT_COL_WIDTH: usize = 4;

/// Minimum width of the metric column
const METRIC_COL_WIDTH: usize = 8;

/// Width of a team name in the matches table
const TEAM_COL_WIDTH: usize = 16;

/// Box-drawing characters for table borders
#[derive(Debug, Clone, PartialEq)]
pub struct BoxChars {
    pub horizontal: String,
    pub double_horizontal: String,
    pub ellipsis: String,
}

impl BoxChars {
    pub fn unicode() -> Self {
        Self {
            horizontal: "─".to_string(),
            double_horizontal: "═".to_string(),
            ellipsis: "…".to_string(),
        }
    }

    pub fn ascii() -> Self {
        Self {
            horizontal: "-".to_string(),
            double_horizontal: "=".to_string(),
            ellipsis: ".".to_string(),
        }
    }

    pub fn from_use_unicode(use_unicode: bool) -> Self {
        if use_unicode {
            Self::unicode()
        } else {
            Self::ascii()
        }
    }
}

/// Format a header with text and underline
///
/// # Arguments
/// * `text` - The header text to display
/// * `double_line` - If true, uses double-line (═/=), otherwise single-line (─/-)
/// * `box_chars` - Character set (unicode or ASCII)
pub fn format_header(text: &str, double_line: bool, box_chars: &BoxChars) -> String {
    let separator_char = if double_line {
        &box_chars.double_horizontal
    } else {
        &box_chars.horizontal
    };
    format!("{}\n{}\n", text, separator_char.repeat(text.width()))
}

/// Pad (or truncate) text to an exact display width
pub fn fit_width(text: &str, width: usize, box_chars: &BoxChars) -> String {
    if text.width() <= width {
        return format!("{}{}", text, " ".repeat(width - text.width()));
    }

    let budget = width.saturating_sub(box_chars.ellipsis.width());
    let mut out = String::new();
    let mut used = 0;
    for ch in text.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w > budget {
            break;
        }
        out.push(ch);
        used += w;
    }
    out.push_str(&box_chars.ellipsis);
    used += box_chars.ellipsis.width();
    out.push_str(&" ".repeat(width.saturating_sub(used)));
    out
}

/// Format a ranking table; ranks are printed as received from the backend
pub fn format_ranking_table(
    rows: &[&RankedEntity],
    criterion: RankingCriterion,
    box_chars: &BoxChars,
) -> String {
    let metric_width = METRIC_COL_WIDTH.max(criterion.label().len());
    let total_width =
        RANK_COL_WIDTH + NAME_COL_WIDTH + POSITION_COL_WIDTH + NAT_COL_WIDTH + metric_width + 4;

    let mut output = String::new();
    output.push_str(&format!(
        "{:>rank$} {} {} {} {:>metric$}\n",
        "#",
        fit_width("Player", NAME_COL_WIDTH, box_chars),
        fit_width("Position", POSITION_COL_WIDTH, box_chars),
        fit_width("Nat", NAT_COL_WIDTH, box_chars),
        criterion.label(),
        rank = RANK_COL_WIDTH,
        metric = metric_width,
    ));
    output.push_str(&format!("{}\n", box_chars.horizontal.repeat(total_width)));

    for entity in rows {
        let nationality = entity
            .nationality
            .as_deref()
            .map(nationality_label)
            .unwrap_or_default();
        output.push_str(&format!(
            "{:>rank$} {} {} {} {:>metric$}\n",
            entity.rank,
            fit_width(&entity.display_name, NAME_COL_WIDTH, box_chars),
            fit_width(&entity.secondary_text, POSITION_COL_WIDTH, box_chars),
            fit_width(&nationality, NAT_COL_WIDTH, box_chars),
            criterion.format_metric(entity.metric_value),
            rank = RANK_COL_WIDTH,
            metric = metric_width,
        ));
    }

    output
}

/// Format a backend timestamp or date with a chrono format string
///
/// Unparseable input is returned unchanged.
pub fn format_match_date(raw: &str, time_format: &str) -> String {
    if let Ok(dt) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return dt.format(time_format).to_string();
    }
    match raw.get(..10).and_then(|d| NaiveDate::parse_from_str(d, "%Y-%m-%d").ok()) {
        Some(date) => date.format(time_format).to_string(),
        None => raw.to_string(),
    }
}

pub fn format_matches_table(rows: &[&Match], time_format: &str, box_chars: &BoxChars) -> String {
    let mut output = String::new();
    for m in rows {
        output.push_str(&format!(
            "{} {} {:>2} - {:<2} {} {}\n",
            fit_width(&format_match_date(&m.match_date, time_format), 20, box_chars),
            fit_width(&m.home_team, TEAM_COL_WIDTH, box_chars),
            m.home_score,
            m.away_score,
            fit_width(&m.away_team, TEAM_COL_WIDTH, box_chars),
            m.winner(),
        ));
    }
    output
}

/// One line per player of a match line-up: jersey, name, position, goals,
/// assists and rating
pub fn format_match_players_table(players: &[MatchPlayer], box_chars: &BoxChars) -> String {
    let mut output = String::new();
    for player in players {
        let jersey = player
            .jersey_number
            .map(|n| format!("#{}", n))
            .unwrap_or_default();
        output.push_str(&format!(
            "{:>3} {} {} {:>2} G {:>2} A {:>4.1}\n",
            jersey,
            fit_width(player.display_name(), NAME_COL_WIDTH, box_chars),
            fit_width(
                player.favorite_position.as_deref().unwrap_or("No position"),
                POSITION_COL_WIDTH,
                box_chars
            ),
            player.goals,
            player.assists,
            player.rating,
        ));
    }
    output
}

pub fn format_search_results(players: &[SearchPlayer], box_chars: &BoxChars) -> String {
    let mut output = String::new();
    for player in players {
        let name = match player.full_name.as_deref().filter(|n| !n.trim().is_empty()) {
            Some(full_name) => format!("{} (@{})", full_name, player.username),
            None => format!("@{}", player.username),
        };
        output.push_str(&format!(
            "{} {} {} Lvl {:>2}  {:>3} G {:>3} A {:>4.1} R\n",
            fit_width(&name, 32, box_chars),
            fit_width(
                player.favorite_position.as_deref().unwrap_or(""),
                POSITION_COL_WIDTH,
                box_chars
            ),
            fit_width(
                &player
                    .nationality
                    .as_deref()
                    .map(nationality_label)
                    .unwrap_or_default(),
                NAT_COL_WIDTH,
                box_chars
            ),
            player.goal_level(),
            player.stats.goals,
            player.stats.assists,
            player.stats.rating,
        ));
    }
    output
}
