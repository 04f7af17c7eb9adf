use crate::types::{Match, RankedEntity, RankingCriterion, SearchPlayer};

/// Global actions - like Redux actions
///
/// All state changes go through actions. They come from user input
/// (interactive commands) and from effects (async data loading, the search
/// debounce timer).
///
/// Every `*Loaded` action carries the generation of the request it answers;
/// the reducer drops it when a newer request has been issued since.
#[derive(Debug, Clone)]
pub enum Action {
    // Ranking actions
    SelectCriterion(RankingCriterion),
    RefreshRanking,
    SetRankingQuery(String),
    LoadMoreRanking,
    RankingLoaded {
        generation: u64,
        result: Result<Vec<RankedEntity>, String>,
    },

    // Matches actions
    RefreshMatches,
    SetMatchesQuery(String),
    LoadMoreMatches,
    MatchesLoaded {
        generation: u64,
        result: Result<Vec<Match>, String>,
    },

    // Search actions
    /// Raw text of the search box after a keystroke
    SearchInput(String),
    /// The quiet period after the keystroke with this generation has elapsed
    SearchDebounced { generation: u64 },
    SearchLoaded {
        generation: u64,
        result: Result<Vec<SearchPlayer>, String>,
    },

    // System actions
    /// Reload the ranking and the matches list together
    RefreshAll,
    SetStatusMessage { message: String, is_error: bool },
    Quit,
}
