//! Local free-text filter over an already-fetched list.

use crate::types::{Match, RankedEntity};

/// Rows that can be matched against a search needle
pub trait Filterable {
    /// `needle` is already trimmed and lowercased
    fn matches_needle(&self, needle: &str) -> bool;
}

fn contains_ci(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(needle)
}

impl Filterable for RankedEntity {
    fn matches_needle(&self, needle: &str) -> bool {
        contains_ci(&self.display_name, needle)
            || contains_ci(&self.username, needle)
            || contains_ci(&self.secondary_text, needle)
    }
}

impl Filterable for Match {
    fn matches_needle(&self, needle: &str) -> bool {
        contains_ci(&self.home_team, needle) || contains_ci(&self.away_team, needle)
    }
}

/// Lowercased, trimmed needle; `None` for an empty or whitespace query
pub fn normalize_query(query: &str) -> Option<String> {
    let trimmed = query.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_lowercase())
    }
}

/// Keep the rows matching `query`, in their original order
pub fn filter<'a, T: Filterable>(items: &'a [T], query: &str) -> Vec<&'a T> {
    match normalize_query(query) {
        None => items.iter().collect(),
        Some(needle) => items
            .iter()
            .filter(|item| item.matches_needle(&needle))
            .collect(),
    }
}
