use std::sync::Arc;

use tracing::{debug, warn};

use super::filter::{filter, Filterable};
use super::window::Window;

/// Lifecycle of a list view
///
/// While loading, the previous rows are kept so a failed load can fall back
/// to them. Query and window exist only once loaded.
#[derive(Debug, Clone)]
pub enum ListPhase<T> {
    Loading {
        stale: Arc<Vec<T>>,
    },
    Loaded {
        items: Arc<Vec<T>>,
        query: String,
        window: Window,
    },
}

/// A backend-ordered list with local filtering and load-more windowing
///
/// Every load is tagged with a generation; only the response for the latest
/// generation is applied.
#[derive(Debug, Clone)]
pub struct ListView<T> {
    phase: ListPhase<T>,
    page_size: usize,
    generation: u64,
    last_error: Option<String>,
}

impl<T: Filterable> ListView<T> {
    /// A view waiting for its first load
    pub fn new(page_size: usize) -> Self {
        Self {
            phase: ListPhase::Loading {
                stale: Arc::new(Vec::new()),
            },
            page_size: page_size.max(1),
            generation: 0,
            last_error: None,
        }
    }

    pub fn phase(&self) -> &ListPhase<T> {
        &self.phase
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.phase, ListPhase::Loading { .. })
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    /// Start a new load; returns the generation the response must carry
    pub fn begin_load(&mut self) -> u64 {
        self.generation += 1;
        let stale = self.items_arc();
        self.phase = ListPhase::Loading { stale };
        debug!("LIST: begin load generation={}", self.generation);
        self.generation
    }

    /// Apply a load result. Returns false when the result belongs to a
    /// superseded request and was dropped.
    ///
    /// Success replaces the rows wholesale; failure keeps the previous rows.
    /// Either way the query is cleared and the window is back at one page.
    pub fn finish_load(&mut self, generation: u64, result: Result<Vec<T>, String>) -> bool {
        if generation != self.generation {
            debug!(
                "LIST: dropping response for generation={} (latest={})",
                generation, self.generation
            );
            return false;
        }

        let items = match result {
            Ok(items) => {
                debug!("LIST: loaded {} rows", items.len());
                self.last_error = None;
                Arc::new(items)
            }
            Err(e) => {
                warn!("LIST: load failed: {}", e);
                self.last_error = Some(e);
                self.items_arc()
            }
        };

        self.phase = ListPhase::Loaded {
            items,
            query: String::new(),
            window: Window::new(self.page_size),
        };
        true
    }

    /// Change the filter text; the window goes back to one page
    ///
    /// Ignored while loading.
    pub fn set_query(&mut self, new_query: &str) -> bool {
        match &mut self.phase {
            ListPhase::Loaded { query, window, .. } => {
                *query = new_query.to_string();
                window.reset();
                true
            }
            ListPhase::Loading { .. } => false,
        }
    }

    /// Reveal another page of the filtered rows
    pub fn load_more(&mut self) {
        if let ListPhase::Loaded { items, query, window } = &mut self.phase {
            let len = filter(items.as_slice(), query).len();
            window.load_more(len);
        }
    }

    /// All rows from the last successful load (or the stale rows while loading)
    pub fn items(&self) -> &[T] {
        match &self.phase {
            ListPhase::Loading { stale } => stale.as_slice(),
            ListPhase::Loaded { items, .. } => items.as_slice(),
        }
    }

    fn items_arc(&self) -> Arc<Vec<T>> {
        match &self.phase {
            ListPhase::Loading { stale } => Arc::clone(stale),
            ListPhase::Loaded { items, .. } => Arc::clone(items),
        }
    }

    pub fn query(&self) -> &str {
        match &self.phase {
            ListPhase::Loaded { query, .. } => query,
            ListPhase::Loading { .. } => "",
        }
    }

    /// The reveal target: one page after any reset, growing a page per
    /// `load_more`. It can exceed the filtered rows on a short list; use
    /// `visible_count` for the number of rows actually shown.
    pub fn displayed_count(&self) -> usize {
        match &self.phase {
            ListPhase::Loaded { window, .. } => window.displayed_count(),
            ListPhase::Loading { .. } => self.page_size,
        }
    }

    /// Rows currently shown, never more than the filtered rows
    pub fn visible_count(&self) -> usize {
        match &self.phase {
            ListPhase::Loaded { window, .. } => window.visible(self.filtered().len()),
            ListPhase::Loading { .. } => 0,
        }
    }

    /// Rows matching the query; empty while loading
    pub fn filtered(&self) -> Vec<&T> {
        match &self.phase {
            ListPhase::Loaded { items, query, .. } => filter(items.as_slice(), query),
            ListPhase::Loading { .. } => Vec::new(),
        }
    }

    /// The revealed prefix of the filtered rows
    pub fn displayed(&self) -> Vec<&T> {
        match &self.phase {
            ListPhase::Loaded { window, .. } => {
                let filtered = self.filtered();
                window.slice(&filtered).to_vec()
            }
            ListPhase::Loading { .. } => Vec::new(),
        }
    }

    pub fn has_more(&self) -> bool {
        match &self.phase {
            ListPhase::Loaded { window, .. } => window.has_more(self.filtered().len()),
            ListPhase::Loading { .. } => false,
        }
    }
}
