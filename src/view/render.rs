//! Plain-text rendering of view state.

use crate::formatting::{
    format_header, format_matches_table, format_ranking_table, format_search_results, BoxChars,
};
use crate::types::Match;

use super::list::ListView;
use super::search::SearchState;
use super::state::{RankingState, SystemState};

fn footer(shown: usize, total: usize, has_more: bool) -> String {
    if has_more {
        format!("Showing {} of {} (m: load more)\n", shown, total)
    } else {
        format!("Showing {} of {}\n", shown, total)
    }
}

fn query_line(query: &str) -> String {
    if query.trim().is_empty() {
        String::new()
    } else {
        format!("Filter: {}\n", query.trim())
    }
}

pub fn render_ranking(ranking: &RankingState, box_chars: &BoxChars) -> String {
    let title = format!("StatHub Ranking: {}", ranking.criterion.label());
    let mut output = format_header(&title, true, box_chars);
    let list = &ranking.list;

    if list.is_loading() {
        output.push_str("Loading...\n");
        return output;
    }

    output.push_str(&query_line(list.query()));
    let displayed = list.displayed();
    if displayed.is_empty() {
        output.push_str("No players found\n");
    } else {
        output.push_str(&format_ranking_table(&displayed, ranking.criterion, box_chars));
    }
    output.push_str(&footer(displayed.len(), list.filtered().len(), list.has_more()));
    output
}

pub fn render_matches(list: &ListView<Match>, time_format: &str, box_chars: &BoxChars) -> String {
    let mut output = format_header("Matches", true, box_chars);

    if list.is_loading() {
        output.push_str("Loading...\n");
        return output;
    }

    output.push_str(&query_line(list.query()));
    let displayed = list.displayed();
    if displayed.is_empty() {
        output.push_str("No matches found\n");
    } else {
        output.push_str(&format_matches_table(&displayed, time_format, box_chars));
    }
    output.push_str(&footer(displayed.len(), list.filtered().len(), list.has_more()));
    output
}

pub fn render_search(search: &SearchState, box_chars: &BoxChars) -> String {
    let input = search.input().trim();
    if input.is_empty() {
        let mut output = format_header("Search", false, box_chars);
        output.push_str("Search cleared\n");
        return output;
    }
    let mut output = format_header(&format!("Search: {}", input), false, box_chars);

    if search.is_loading() {
        output.push_str("Searching...\n");
    } else if let Some(error) = search.last_error() {
        output.push_str(&format!("Search failed: {}\n", error));
    } else if search.results().is_empty() {
        output.push_str("No players found\n");
    } else {
        output.push_str(&format_search_results(search.results(), box_chars));
    }
    output
}

/// Status line, if any
pub fn render_status(system: &SystemState) -> Option<String> {
    system.status_message.as_ref().map(|message| {
        if system.status_is_error {
            format!("Error: {}", message)
        } else {
            message.clone()
        }
    })
}
