//! The search pipeline: filter, match, score, facet, sort, paginate.

pub mod engine;
pub mod facet;
pub mod filter;
pub mod fuzzy;
pub mod paginate;
pub mod scoring;
pub mod sort;

use serde::{Deserialize, Serialize};

use crate::book::Book;
pub use engine::SearchEngine;
pub use facet::{FacetValue, MAX_FACET_VALUES, SearchFacets};
pub use filter::{DateRange, RatingRange, SearchFilters, YearRange};
pub use fuzzy::{FuzzyScore, fuzzy_score};
pub use scoring::{FieldWeights, RelevanceScorer};
pub use sort::{SortConfig, SortDirection, SortField};

/// Default page size when none is requested.
pub const DEFAULT_LIMIT: usize = 20;

/// Everything a single search invocation needs.
#[derive(Debug, Clone)]
pub struct SearchOptions {
    /// Free-text query. Blank means "match everything" and skips scoring.
    pub query: String,
    /// Filter predicates applied before scoring.
    pub filters: SearchFilters,
    /// Explicit ordering. `None` keeps relevance order when a query is
    /// present, and falls back to most-recently-added otherwise.
    pub sort: Option<SortConfig>,
    /// 1-indexed page number.
    pub page: usize,
    /// Page size.
    pub limit: usize,
    /// Enable edit-distance fallbacks during scoring.
    pub fuzzy: bool,
    /// Compute facet distributions over the matched set.
    pub include_facets: bool,
}

impl Default for SearchOptions {
    /// A blank match-everything query with default paging.
    fn default() -> Self {
        SearchOptions::new("")
    }
}

impl SearchOptions {
    /// Options for a plain text query with default paging and fuzzy matching
    /// enabled.
    pub fn new<Q: Into<String>>(query: Q) -> Self {
        SearchOptions {
            query: query.into(),
            filters: SearchFilters::default(),
            sort: None,
            page: 1,
            limit: DEFAULT_LIMIT,
            fuzzy: true,
            include_facets: false,
        }
    }

    /// Set the filter predicates.
    pub fn filters(mut self, filters: SearchFilters) -> Self {
        self.filters = filters;
        self
    }

    /// Set an explicit sort.
    pub fn sort(mut self, sort: SortConfig) -> Self {
        self.sort = Some(sort);
        self
    }

    /// Set the page number (1-indexed).
    pub fn page(mut self, page: usize) -> Self {
        self.page = page;
        self
    }

    /// Set the page size.
    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }

    /// Enable or disable fuzzy matching.
    pub fn fuzzy(mut self, fuzzy: bool) -> Self {
        self.fuzzy = fuzzy;
        self
    }

    /// Enable or disable facet aggregation.
    pub fn include_facets(mut self, include: bool) -> Self {
        self.include_facets = include;
        self
    }
}

/// The result envelope of one search invocation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResult {
    /// Records on the requested page.
    pub books: Vec<Book>,
    /// Total records after filtering and matching, across all pages.
    pub total: usize,
    /// The requested page number.
    pub page: usize,
    /// `ceil(total / limit)`; 0 when nothing matched.
    pub total_pages: usize,
    /// Facet distributions, when requested.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub facets: Option<SearchFacets>,
    /// The trimmed query that was executed.
    pub query: String,
    /// Wall-clock time the invocation took, in milliseconds.
    pub search_time_ms: u64,
}
