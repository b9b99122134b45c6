//! Deterministic multi-field sorting.
//!
//! Sorting always produces a fresh ordered copy; the caller's slice is never
//! reordered. The comparator is a simple three-way compare on one extracted
//! key per field, with missing numeric values treated as 0.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::book::Book;

/// Field to order results by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SortField {
    Title,
    Author,
    Rating,
    #[serde(alias = "publishedYear")]
    Year,
    PageCount,
    AddedAt,
}

impl SortField {
    /// Parse a field name. Unknown names fall back to [`SortField::AddedAt`]
    /// rather than erroring.
    pub fn parse(name: &str) -> SortField {
        match name {
            "title" => SortField::Title,
            "author" => SortField::Author,
            "rating" => SortField::Rating,
            "year" | "publishedYear" => SortField::Year,
            "pageCount" => SortField::PageCount,
            _ => SortField::AddedAt,
        }
    }
}

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Asc,
    Desc,
}

/// A sort field and direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SortConfig {
    pub field: SortField,
    pub direction: SortDirection,
}

impl Default for SortConfig {
    /// Most-recently-added first, the engine's default ordering.
    fn default() -> Self {
        SortConfig {
            field: SortField::AddedAt,
            direction: SortDirection::Desc,
        }
    }
}

impl SortConfig {
    /// Return a freshly ordered copy of the input.
    pub fn apply<'a>(&self, books: &[&'a Book]) -> Vec<&'a Book> {
        let mut sorted = books.to_vec();
        sorted.sort_by(|a, b| {
            let ordering = self.compare(a, b);
            match self.direction {
                SortDirection::Asc => ordering,
                SortDirection::Desc => ordering.reverse(),
            }
        });
        sorted
    }

    fn compare(&self, a: &Book, b: &Book) -> Ordering {
        match self.field {
            SortField::Title => a.title.to_lowercase().cmp(&b.title.to_lowercase()),
            SortField::Author => author_key(a).cmp(&author_key(b)),
            SortField::Rating => a
                .average_rating
                .unwrap_or(0.0)
                .total_cmp(&b.average_rating.unwrap_or(0.0)),
            SortField::Year => a
                .published_year
                .unwrap_or(0)
                .cmp(&b.published_year.unwrap_or(0)),
            SortField::PageCount => a.page_count.unwrap_or(0).cmp(&b.page_count.unwrap_or(0)),
            SortField::AddedAt => a.added_at.cmp(&b.added_at),
        }
    }
}

fn author_key(book: &Book) -> String {
    book.first_author().unwrap_or_default().to_lowercase()
}
