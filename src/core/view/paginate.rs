//! Fixed-size pagination
//!
//! Pure helpers over a filtered row set. A zero-row set legitimately has
//! zero pages; everywhere else the current page clamps into
//! `[1, total_pages]` instead of erroring.

/// Number of pages needed for `filtered` rows at `page_size` rows per page
pub fn total_pages(filtered: usize, page_size: usize) -> usize {
    filtered.div_ceil(page_size)
}

/// Clamp a requested page into the valid range
///
/// With zero pages the clamp still yields page 1, which then carries an
/// empty slice.
pub fn clamp_page(requested: usize, total_pages: usize) -> usize {
    requested.clamp(1, total_pages.max(1))
}

/// Slice one page out of a filtered row set
///
/// `page` is 1-based and assumed already clamped.
pub fn page_slice<T: Copy>(rows: &[T], page_size: usize, page: usize) -> &[T] {
    let start = (page - 1) * page_size;
    if start >= rows.len() {
        return &[];
    }
    let end = (start + page_size).min(rows.len());
    &rows[start..end]
}
