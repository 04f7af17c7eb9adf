//! Debounced network player search.
//!
//! Every keystroke bumps the generation. A request is issued only when the
//! quiet period for the latest generation elapses, and only the response for
//! that generation is applied.

use tracing::{debug, warn};

use super::filter::normalize_query;
use crate::types::SearchPlayer;

/// What the caller should do after a keystroke
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchInputOutcome {
    /// Blank input: results were cleared, cancel any pending timer
    Cleared,
    /// Start (or restart) the quiet-period timer for this generation
    Pending(u64),
}

#[derive(Debug, Clone, Default)]
pub struct SearchState {
    input: String,
    generation: u64,
    results: Vec<SearchPlayer>,
    loading: bool,
    last_error: Option<String>,
}

impl SearchState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn results(&self) -> &[SearchPlayer] {
        &self.results
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    pub fn is_current(&self, generation: u64) -> bool {
        generation == self.generation
    }

    /// Record a keystroke
    pub fn on_input(&mut self, text: &str) -> SearchInputOutcome {
        self.generation += 1;
        self.input = text.to_string();

        if normalize_query(text).is_none() {
            self.results.clear();
            self.loading = false;
            self.last_error = None;
            return SearchInputOutcome::Cleared;
        }
        SearchInputOutcome::Pending(self.generation)
    }

    /// The quiet period for `generation` elapsed. Returns the trimmed query
    /// to send, or `None` when a newer keystroke superseded it.
    pub fn begin_request(&mut self, generation: u64) -> Option<String> {
        if !self.is_current(generation) {
            debug!(
                "SEARCH: debounce for generation={} superseded by {}",
                generation, self.generation
            );
            return None;
        }
        let query = self.input.trim().to_string();
        if query.is_empty() {
            return None;
        }
        self.loading = true;
        Some(query)
    }

    /// Apply a response; returns false if it was stale and dropped
    pub fn finish(&mut self, generation: u64, result: Result<Vec<SearchPlayer>, String>) -> bool {
        if !self.is_current(generation) {
            debug!(
                "SEARCH: dropping response for generation={} (latest={})",
                generation, self.generation
            );
            return false;
        }
        self.loading = false;
        match result {
            Ok(players) => {
                debug!("SEARCH: {} players for {:?}", players.len(), self.input);
                self.results = players;
                self.last_error = None;
            }
            Err(e) => {
                warn!("SEARCH: request failed: {}", e);
                self.results.clear();
                self.last_error = Some(e);
            }
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;

    #[test]
    fn test_keystrokes_bump_generation() {
        let mut search = SearchState::new();
        assert_eq!(search.on_input("a"), SearchInputOutcome::Pending(1));
        assert_eq!(search.on_input("an"), SearchInputOutcome::Pending(2));
        assert_eq!(search.on_input("ana"), SearchInputOutcome::Pending(3));

        assert_eq!(search.begin_request(1), None);
        assert_eq!(search.begin_request(2), None);
        assert_eq!(search.begin_request(3), Some("ana".to_string()));
        assert!(search.is_loading());
    }

    #[test]
    fn test_blank_input_clears_immediately() {
        let mut search = SearchState::new();
        search.on_input("ana");
        let generation = search.generation();
        search.begin_request(generation);
        search.finish(generation, Ok(fixtures::create_mock_search("ana").players));
        assert_eq!(search.results().len(), 2);

        assert_eq!(search.on_input("   "), SearchInputOutcome::Cleared);
        assert!(search.results().is_empty());
        assert!(!search.is_loading());
    }

    #[test]
    fn test_query_is_trimmed() {
        let mut search = SearchState::new();
        search.on_input("  ana ");
        let generation = search.generation();
        assert_eq!(search.begin_request(generation), Some("ana".to_string()));
    }

    #[test]
    fn test_stale_response_is_dropped() {
        let mut search = SearchState::new();
        search.on_input("an");
        let old = search.generation();
        search.begin_request(old);
        search.on_input("ana");

        assert!(!search.finish(old, Ok(fixtures::create_mock_search("an").players)));
        assert!(search.results().is_empty());
    }

    #[test]
    fn test_response_after_clear_is_dropped() {
        let mut search = SearchState::new();
        search.on_input("ana");
        let generation = search.generation();
        search.begin_request(generation);
        search.on_input("");

        assert!(!search.finish(generation, Ok(fixtures::create_mock_search("ana").players)));
        assert!(search.results().is_empty());
    }

    #[test]
    fn test_failure_clears_results() {
        let mut search = SearchState::new();
        search.on_input("ana");
        let generation = search.generation();
        search.finish(generation, Ok(fixtures::create_mock_search("ana").players));

        search.on_input("anab");
        let generation = search.generation();
        search.begin_request(generation);
        assert!(search.finish(generation, Err("Request failed (HTTP 500)".to_string())));
        assert!(search.results().is_empty());
        assert!(!search.is_loading());
        assert_eq!(search.last_error(), Some("Request failed (HTTP 500)"));
    }
}
