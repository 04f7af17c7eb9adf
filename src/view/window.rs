/// Pagination-by-reveal over an in-memory list
///
/// `displayed_count` starts at one page, grows a page at a time up to the
/// list length, and only goes back down through `reset`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Window {
    page_size: usize,
    displayed_count: usize,
}

impl Window {
    pub fn new(page_size: usize) -> Self {
        let page_size = page_size.max(1);
        Self {
            page_size,
            displayed_count: page_size,
        }
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn displayed_count(&self) -> usize {
        self.displayed_count
    }

    /// Number of rows actually shown for a list of `len` rows
    pub fn visible(&self, len: usize) -> usize {
        self.displayed_count.min(len)
    }

    pub fn has_more(&self, len: usize) -> bool {
        self.displayed_count < len
    }

    /// Reveal one more page, clamped to `len`; a no-op once everything is shown
    pub fn load_more(&mut self, len: usize) {
        if self.has_more(len) {
            self.displayed_count = (self.displayed_count + self.page_size).min(len);
        }
    }

    pub fn reset(&mut self) {
        self.displayed_count = self.page_size;
    }

    /// The shown prefix of `items`
    pub fn slice<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        &items[..self.visible(items.len())]
    }
}
