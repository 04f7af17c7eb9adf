use super::list::ListView;
use super::search::SearchState;
use crate::config::Config;
use crate::types::{Match, RankedEntity, RankingCriterion};

/// Root application state - single source of truth
///
/// All state changes happen through the reducer.
#[derive(Debug, Clone)]
pub struct AppState {
    pub ranking: RankingState,
    pub matches: ListView<Match>,
    pub search: SearchState,
    pub system: SystemState,
}

impl AppState {
    pub fn new(config: &Config) -> Self {
        Self {
            ranking: RankingState::new(config.default_criterion(), config.page_size),
            matches: ListView::new(config.matches_page_size),
            search: SearchState::new(),
            system: SystemState {
                config: config.clone(),
                ..SystemState::default()
            },
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(&Config::default())
    }
}

/// The ranking list and the criterion it was (or is being) loaded for
#[derive(Debug, Clone)]
pub struct RankingState {
    pub criterion: RankingCriterion,
    pub list: ListView<RankedEntity>,
}

impl RankingState {
    pub fn new(criterion: RankingCriterion, page_size: usize) -> Self {
        Self {
            criterion,
            list: ListView::new(page_size),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct SystemState {
    pub config: Config,
    pub status_message: Option<String>,
    pub status_is_error: bool,
}

impl SystemState {
    pub fn set_status_message(&mut self, message: String) {
        self.status_message = Some(message);
        self.status_is_error = false;
    }

    pub fn set_status_error_message(&mut self, message: String) {
        self.status_message = Some(message);
        self.status_is_error = true;
    }

    pub fn clear_status_message(&mut self) {
        self.status_message = None;
        self.status_is_error = false;
    }
}
