//! The book record the engine searches over.
//!
//! `Book` is a read-only snapshot owned by the external record store. The
//! engine never mutates it; every pipeline stage either borrows records or
//! clones them into fresh output collections.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Physical or digital format of a book.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BookFormat {
    Hardcover,
    Paperback,
    Ebook,
    Kindle,
    Audiobook,
    Unknown,
}

impl BookFormat {
    /// Stable lowercase name, used as a facet value.
    pub fn as_str(&self) -> &'static str {
        match self {
            BookFormat::Hardcover => "hardcover",
            BookFormat::Paperback => "paperback",
            BookFormat::Ebook => "ebook",
            BookFormat::Kindle => "kindle",
            BookFormat::Audiobook => "audiobook",
            BookFormat::Unknown => "unknown",
        }
    }
}

impl Default for BookFormat {
    fn default() -> Self {
        BookFormat::Unknown
    }
}

impl std::str::FromStr for BookFormat {
    type Err = crate::error::FolioError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "hardcover" => Ok(BookFormat::Hardcover),
            "paperback" => Ok(BookFormat::Paperback),
            "ebook" => Ok(BookFormat::Ebook),
            "kindle" => Ok(BookFormat::Kindle),
            "audiobook" => Ok(BookFormat::Audiobook),
            "unknown" => Ok(BookFormat::Unknown),
            other => Err(crate::error::FolioError::query(format!(
                "unknown book format: {other}"
            ))),
        }
    }
}

impl std::fmt::Display for BookFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single book record as supplied by the record store.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Book {
    /// Unique record identifier.
    pub id: String,
    /// Title of the book.
    pub title: String,
    /// Authors in display order.
    #[serde(default)]
    pub authors: Vec<String>,
    /// ISBN-13, possibly hyphenated.
    #[serde(default)]
    pub isbn13: Option<String>,
    /// Publisher name.
    #[serde(default)]
    pub publisher: Option<String>,
    /// Free-form description or synopsis.
    #[serde(default)]
    pub description: Option<String>,
    /// User-assigned tags.
    #[serde(default)]
    pub tags: Vec<String>,
    /// Series the book belongs to, if any.
    #[serde(default)]
    pub series_name: Option<String>,
    /// Subject/genre classifications.
    #[serde(default)]
    pub subjects: Vec<String>,
    /// Year of publication.
    #[serde(default)]
    pub published_year: Option<i32>,
    /// Number of pages.
    #[serde(default)]
    pub page_count: Option<u32>,
    /// Average rating, typically 0.0 to 5.0.
    #[serde(default)]
    pub average_rating: Option<f64>,
    /// Format of this copy.
    #[serde(default)]
    pub format: BookFormat,
    /// When the record was added to the collection.
    pub added_at: DateTime<Utc>,
}

impl Book {
    /// First author, if any. Used by the author sort key.
    pub fn first_author(&self) -> Option<&str> {
        self.authors.first().map(String::as_str)
    }
}
