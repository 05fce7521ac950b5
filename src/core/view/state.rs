//! Per-session view state
//!
//! The search term and current page live only inside the owning workspace
//! for the lifetime of one session; they are never persisted remotely.

use crate::core::view::filter::{filter, Searchable};
use crate::core::view::paginate::{clamp_page, page_slice, total_pages};

/// Ephemeral list view state: live search term and current page
#[derive(Debug, Clone)]
pub struct ViewState {
    search: String,
    page: usize,
    page_size: usize,
}

impl ViewState {
    /// Create view state with the given page size, starting on page 1
    /// with an empty search term
    pub fn new(page_size: usize) -> Self {
        Self {
            search: String::new(),
            page: 1,
            page_size,
        }
    }

    /// Current search term
    pub fn search(&self) -> &str {
        &self.search
    }

    /// Replace the search term; the current page resets to 1
    pub fn set_search(&mut self, term: impl Into<String>) {
        self.search = term.into();
        self.page = 1;
    }

    /// Jump to a page; values below 1 are treated as 1, values past the
    /// last page clamp when the view is computed
    pub fn goto_page(&mut self, page: usize) {
        self.page = page.max(1);
    }

    /// Move forward one page, a no-op on the last page
    pub fn advance(&mut self, total_pages: usize) {
        if self.page < total_pages {
            self.page += 1;
        }
    }

    /// Move back one page, a no-op on the first page
    pub fn back(&mut self) {
        if self.page > 1 {
            self.page -= 1;
        }
    }

    /// Compute the visible page over a base row set
    ///
    /// Filtering always re-runs against the full base set, then the
    /// current page is clamped and sliced out.
    pub fn paginate<'a, T: Searchable>(&self, rows: &'a [T]) -> PageView<'a, T> {
        let filtered = filter(rows, &self.search);
        let total = total_pages(filtered.len(), self.page_size);
        let current = clamp_page(self.page, total);
        let visible = page_slice(&filtered, self.page_size, current).to_vec();

        PageView {
            start_index: (current - 1) * self.page_size,
            filtered_count: filtered.len(),
            current_page: current,
            total_pages: total,
            rows: visible,
        }
    }
}

/// One computed page of a filtered view
#[derive(Debug)]
pub struct PageView<'a, T> {
    /// Rows visible on the current page, in base-set order
    pub rows: Vec<&'a T>,

    /// Clamped current page (1-based)
    pub current_page: usize,

    /// Total page count; 0 when the filtered set is empty
    pub total_pages: usize,

    /// Size of the filtered set across all pages
    pub filtered_count: usize,

    /// 0-based offset of the first visible row within the filtered set
    pub start_index: usize,
}

impl<T> PageView<'_, T> {
    /// Whether the page has no rows to show (renders the empty-state row)
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// 1-based inclusive display range for footers, `(0, 0)` when empty
    pub fn display_range(&self) -> (usize, usize) {
        if self.rows.is_empty() {
            return (0, 0);
        }
        (self.start_index + 1, self.start_index + self.rows.len())
    }
}
