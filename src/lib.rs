//! # Folio
//!
//! A local search and relevance engine for personal book collections.
//!
//! ## Features
//!
//! - Approximate text matching with normalized edit distance
//! - Multi-field weighted relevance scoring
//! - Composable filters and bounded facet aggregation
//! - Deterministic sorting and pagination
//! - Persisted, size-bounded search history and saved searches
//!
//! The engine works over an in-memory snapshot of the collection supplied by
//! a pluggable provider; it never mutates the source records and is sized for
//! collections in the low thousands.

pub mod book;
pub mod cli;
pub mod collection;
pub mod error;
pub mod history;
pub mod saved;
pub mod search;
pub mod storage;
pub mod util;

pub mod prelude {
    //! Convenience re-exports for typical engine usage.

    pub use crate::book::{Book, BookFormat};
    pub use crate::collection::{BookProvider, StaticCollection};
    pub use crate::error::{FolioError, Result};
    pub use crate::history::{SearchHistoryEntry, SearchHistoryStore};
    pub use crate::saved::{SavedSearch, SavedSearchStore, SavedSearchUpdate};
    pub use crate::search::{
        FacetValue, FieldWeights, SearchEngine, SearchFacets, SearchFilters, SearchOptions,
        SearchResult, SortConfig, SortDirection, SortField,
    };
    pub use crate::storage::{FileKvStore, KvStore, MemoryKvStore};
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
