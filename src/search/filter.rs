//! Composable filter predicates applied before scoring.
//!
//! Every predicate is independently optional and the active ones AND-compose.
//! Filters are plain data (serde-serializable) because saved searches persist
//! a snapshot of them.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::book::{Book, BookFormat};

/// Inclusive numeric rating bounds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RatingRange {
    pub min: f64,
    pub max: f64,
}

/// Inclusive added-at date bounds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DateRange {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

/// Inclusive published-year bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct YearRange {
    pub start: i32,
    pub end: i32,
}

/// Filter configuration for a search.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SearchFilters {
    /// Allowed formats. `None` or an empty list admits every format.
    pub formats: Option<Vec<BookFormat>>,
    /// Rating bounds; a record without a rating is treated as rated 0.
    pub rating: Option<RatingRange>,
    /// Added-at bounds.
    pub added: Option<DateRange>,
    /// Published-year bounds; records without a year are excluded while this
    /// filter is active.
    pub years: Option<YearRange>,
    /// Reading statuses. Accepted and persisted, but currently a pass-through:
    /// the predicate admits every record. The join against reading-log data
    /// is not implemented.
    pub reading_status: Option<Vec<String>>,
}

impl SearchFilters {
    /// Whether any predicate is configured (the pass-through reading-status
    /// field does not count).
    pub fn is_active(&self) -> bool {
        self.formats.as_ref().is_some_and(|f| !f.is_empty())
            || self.rating.is_some()
            || self.added.is_some()
            || self.years.is_some()
    }

    /// Test a record against every active predicate.
    pub fn matches(&self, book: &Book) -> bool {
        if let Some(formats) = &self.formats {
            if !formats.is_empty() && !formats.contains(&book.format) {
                return false;
            }
        }

        if let Some(range) = &self.rating {
            let rating = book.average_rating.unwrap_or(0.0);
            if rating < range.min || rating > range.max {
                return false;
            }
        }

        if let Some(range) = &self.added {
            if book.added_at < range.start || book.added_at > range.end {
                return false;
            }
        }

        if let Some(range) = &self.years {
            match book.published_year {
                Some(year) => {
                    if year < range.start || year > range.end {
                        return false;
                    }
                }
                None => return false,
            }
        }

        // reading_status intentionally admits everything.
        true
    }

    /// Apply the pipeline to a collection, borrowing the survivors.
    pub fn apply<'a>(&self, books: &'a [Book]) -> Vec<&'a Book> {
        books.iter().filter(|book| self.matches(book)).collect()
    }
}
