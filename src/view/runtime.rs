use std::sync::Arc;
use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{debug, trace};

use super::action::Action;
use super::effects::{DataEffects, Effect};
use super::reducer::reduce;
use super::state::AppState;

/// View runtime - owns the state and processes actions
///
/// The Runtime is responsible for:
/// - Holding the single copy of the application state
/// - Dispatching actions through the reducer
/// - Executing side effects asynchronously
/// - Owning the search debounce timer
pub struct Runtime {
    /// Current application state
    state: AppState,

    /// Channel for dispatching actions
    action_tx: mpsc::UnboundedSender<Action>,
    action_rx: mpsc::UnboundedReceiver<Action>,

    /// Channel for queuing effects
    effect_tx: mpsc::UnboundedSender<Effect>,

    /// Data effects handler
    data_effects: Arc<DataEffects>,

    /// Pending search quiet-period timer
    search_timer: Option<JoinHandle<()>>,
}

impl Runtime {
    /// Create a new runtime with initial state and data effects handler
    ///
    /// Must be called from within a tokio runtime.
    pub fn new(initial_state: AppState, data_effects: Arc<DataEffects>) -> Self {
        let (action_tx, action_rx) = mpsc::unbounded_channel();
        let (effect_tx, mut effect_rx) = mpsc::unbounded_channel();

        // Spawn effect executor task
        let action_tx_clone = action_tx.clone();
        tokio::spawn(async move {
            Self::run_effect_executor(&mut effect_rx, action_tx_clone).await;
        });

        Self {
            state: initial_state,
            action_tx,
            action_rx,
            effect_tx,
            data_effects,
            search_timer: None,
        }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Dispatch an action to be processed by the reducer
    ///
    /// Uses mem::take to avoid cloning AppState.
    pub fn dispatch(&mut self, action: Action) {
        trace!("ACTION: Dispatching {:?}", action);

        let state = std::mem::take(&mut self.state);
        let (new_state, effect) = reduce(state, action);
        self.state = new_state;

        self.execute_effect(effect);
    }

    /// Execute an effect, turning fetch variants into async work
    fn execute_effect(&mut self, effect: Effect) {
        match effect {
            Effect::None => {}
            Effect::FetchRanking {
                generation,
                criterion,
                limit,
            } => {
                debug!(
                    "EFFECT: Executing {} ranking fetch (generation={})",
                    criterion, generation
                );
                let fetch_effect = self.data_effects.fetch_ranking(generation, criterion, limit);
                let _ = self.effect_tx.send(fetch_effect);
            }
            Effect::FetchMatches { generation } => {
                debug!("EFFECT: Executing matches fetch (generation={})", generation);
                let fetch_effect = self.data_effects.fetch_matches(generation);
                let _ = self.effect_tx.send(fetch_effect);
            }
            Effect::FetchSearch { generation, query } => {
                debug!(
                    "EFFECT: Executing search for {:?} (generation={})",
                    query, generation
                );
                let fetch_effect = self.data_effects.fetch_search(generation, query);
                let _ = self.effect_tx.send(fetch_effect);
            }
            Effect::DebounceSearch { generation, delay } => {
                self.restart_search_timer(generation, delay);
            }
            Effect::CancelSearchDebounce => {
                self.cancel_search_timer();
            }
            Effect::Batch(effects) => {
                for e in effects {
                    self.execute_effect(e);
                }
            }
            Effect::Async(_) => {
                trace!("ACTION: Queueing effect for async execution");
                let _ = self.effect_tx.send(effect);
            }
        }
    }

    fn restart_search_timer(&mut self, generation: u64, delay: Duration) {
        self.cancel_search_timer();
        trace!("SEARCH: timer armed for generation={}", generation);
        let action_tx = self.action_tx.clone();
        self.search_timer = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            let _ = action_tx.send(Action::SearchDebounced { generation });
        }));
    }

    fn cancel_search_timer(&mut self) {
        if let Some(timer) = self.search_timer.take() {
            timer.abort();
        }
    }

    /// Process all pending actions in the queue
    ///
    /// Returns the number of actions processed
    pub fn process_actions(&mut self) -> usize {
        let mut count = 0;
        while let Ok(action) = self.action_rx.try_recv() {
            self.dispatch(action);
            count += 1;
        }
        count
    }

    /// Wait for the next action produced by an effect or timer, dispatch it
    /// and return a copy
    pub async fn process_next(&mut self) -> Option<Action> {
        let action = self.action_rx.recv().await?;
        self.dispatch(action.clone());
        Some(action)
    }

    /// Get a sender for dispatching actions from external sources
    pub fn action_sender(&self) -> mpsc::UnboundedSender<Action> {
        self.action_tx.clone()
    }

    /// Execute effects asynchronously
    ///
    /// Runs in a separate tokio task. Effects can dispatch new actions which
    /// feed back into the runtime.
    async fn run_effect_executor(
        effect_rx: &mut mpsc::UnboundedReceiver<Effect>,
        action_tx: mpsc::UnboundedSender<Action>,
    ) {
        while let Some(effect) = effect_rx.recv().await {
            Self::process_effect_async(effect, &action_tx);
        }
    }

    fn process_effect_async(effect: Effect, action_tx: &mpsc::UnboundedSender<Action>) {
        match effect {
            Effect::None => {}
            Effect::Batch(effects) => {
                for e in effects {
                    Self::process_effect_async(e, action_tx);
                }
            }
            Effect::Async(future) => {
                let action_tx = action_tx.clone();
                tokio::spawn(async move {
                    let action = future.await;
                    let _ = action_tx.send(action);
                });
            }
            // Fetch and timer effects are resolved by execute_effect() before
            // anything is queued here
            Effect::FetchRanking { .. }
            | Effect::FetchMatches { .. }
            | Effect::FetchSearch { .. }
            | Effect::DebounceSearch { .. }
            | Effect::CancelSearchDebounce => {
                tracing::warn!(
                    "Unresolved effect reached async executor: {:?}",
                    effect
                );
            }
        }
    }
}

impl Drop for Runtime {
    fn drop(&mut self) {
        self.cancel_search_timer();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dev::mock_client::{MockClient, MOCK_PLAYER_COUNT};
    use crate::types::RankingCriterion;

    fn create_test_runtime() -> Runtime {
        let data_effects = Arc::new(DataEffects::new(Arc::new(MockClient::new())));
        Runtime::new(AppState::default(), data_effects)
    }

    #[tokio::test]
    async fn test_runtime_initial_state() {
        let runtime = create_test_runtime();
        assert_eq!(runtime.state().ranking.criterion, RankingCriterion::Rating);
        assert!(runtime.state().ranking.list.is_loading());
    }

    #[tokio::test]
    async fn test_dispatch_updates_state_synchronously() {
        let mut runtime = create_test_runtime();
        runtime.dispatch(Action::SelectCriterion(RankingCriterion::Goals));
        assert_eq!(runtime.state().ranking.criterion, RankingCriterion::Goals);
        assert!(runtime.state().ranking.list.is_loading());
    }

    #[tokio::test]
    async fn test_fetch_effect_feeds_back_loaded_action() {
        let mut runtime = create_test_runtime();
        runtime.dispatch(Action::RefreshRanking);

        let action = runtime.process_next().await.unwrap();
        assert!(matches!(action, Action::RankingLoaded { generation: 1, .. }));
        assert!(!runtime.state().ranking.list.is_loading());
        assert_eq!(runtime.state().ranking.list.items().len(), MOCK_PLAYER_COUNT);
        assert_eq!(runtime.state().ranking.list.displayed().len(), 10);
    }

    #[tokio::test]
    async fn test_action_queue_processing() {
        let mut runtime = create_test_runtime();

        let tx = runtime.action_sender();
        tx.send(Action::SelectCriterion(RankingCriterion::Goals)).unwrap();
        tx.send(Action::SelectCriterion(RankingCriterion::Xp)).unwrap();

        let count = runtime.process_actions();

        assert_eq!(count, 2);
        assert_eq!(runtime.state().ranking.criterion, RankingCriterion::Xp);
        assert_eq!(runtime.state().ranking.list.generation(), 2);
    }

    #[tokio::test]
    async fn test_refresh_all_runs_batched_fetches() {
        let mut runtime = create_test_runtime();
        runtime.dispatch(Action::RefreshAll);
        assert!(runtime.state().ranking.list.is_loading());
        assert!(runtime.state().matches.is_loading());

        let first = runtime.process_next().await.unwrap();
        let second = runtime.process_next().await.unwrap();
        let loaded = [&first, &second];
        assert!(loaded.iter().any(|a| matches!(a, Action::RankingLoaded { .. })));
        assert!(loaded.iter().any(|a| matches!(a, Action::MatchesLoaded { .. })));
        assert!(!runtime.state().ranking.list.is_loading());
        assert!(!runtime.state().matches.is_loading());
    }
}
