//! Page slicing over a fully sorted result set.

use crate::book::Book;

/// A page slice together with the arithmetic the result envelope needs.
#[derive(Debug, Clone)]
pub struct Page<'a> {
    /// Records on this page, at most `limit` of them.
    pub books: Vec<&'a Book>,
    /// Total records across all pages.
    pub total: usize,
    /// The requested (1-indexed) page number.
    pub page: usize,
    /// `ceil(total / limit)`; 0 when there are no records.
    pub total_pages: usize,
}

/// Slice a sorted result set into a 1-indexed page.
///
/// A page past the end yields an empty slice, not an error. A `limit` or
/// `page` of 0 is treated as 1.
pub fn paginate<'a>(books: &[&'a Book], page: usize, limit: usize) -> Page<'a> {
    let limit = limit.max(1);
    let page = page.max(1);
    let total = books.len();
    let total_pages = total.div_ceil(limit);

    let start = (page - 1).saturating_mul(limit).min(total);
    let end = start.saturating_add(limit).min(total);

    Page {
        books: books[start..end].to_vec(),
        total,
        page,
        total_pages,
    }
}
