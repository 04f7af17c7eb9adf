pub mod login;
pub mod match_details;
pub mod matches;
pub mod player;
pub mod ranking;
pub mod search;

use crate::view::{Filterable, ListView};

/// Load `items` into a fresh list view, apply the filter and reveal `pages`
/// pages
///
/// One-shot commands go through the same view as the interactive session so
/// their output pages identically.
pub fn windowed<T: Filterable>(
    items: Vec<T>,
    page_size: usize,
    query: Option<&str>,
    pages: usize,
) -> ListView<T> {
    let mut view = ListView::new(page_size);
    let generation = view.begin_load();
    view.finish_load(generation, Ok(items));
    if let Some(query) = query {
        view.set_query(query);
    }
    for _ in 1..pages.max(1) {
        view.load_more();
    }
    view
}
