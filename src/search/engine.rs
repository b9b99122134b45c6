//! High-level search engine combining every pipeline stage.
//!
//! `SearchEngine` owns the collection provider and the persistence-backed
//! history and saved-search stores. A search runs: filter → (if a query is
//! present) score and drop zero-score records → facet → sort → paginate.
//! The collection snapshot is fetched with one await at the start; the rest
//! of the pipeline is synchronous.

use std::collections::HashSet;
use std::sync::Arc;
use std::time::Instant;

use crate::book::Book;
use crate::collection::BookProvider;
use crate::error::Result;
use crate::history::SearchHistoryStore;
use crate::saved::SavedSearchStore;
use crate::search::facet::{self, FacetValue};
use crate::search::scoring::{FieldWeights, RelevanceScorer};
use crate::search::sort::SortConfig;
use crate::search::{SearchOptions, SearchResult, paginate};
use crate::storage::KvStore;

/// The engine facade.
#[derive(Clone)]
pub struct SearchEngine {
    provider: Arc<dyn BookProvider>,
    weights: FieldWeights,
    history: SearchHistoryStore,
    saved: SavedSearchStore,
}

impl SearchEngine {
    /// Create an engine over a collection provider and a persistence backend
    /// for history and saved searches.
    pub fn new(provider: Arc<dyn BookProvider>, store: Arc<dyn KvStore>) -> Self {
        SearchEngine {
            provider,
            weights: FieldWeights::default(),
            history: SearchHistoryStore::new(store.clone()),
            saved: SavedSearchStore::new(store),
        }
    }

    /// Override the default field weights.
    pub fn with_weights(mut self, weights: FieldWeights) -> Self {
        self.weights = weights;
        self
    }

    /// The search-history store.
    pub fn history(&self) -> &SearchHistoryStore {
        &self.history
    }

    /// The saved-search store.
    pub fn saved_searches(&self) -> &SavedSearchStore {
        &self.saved
    }

    /// Run a search. The sole entry point combining
    /// filter → match → facet → sort → paginate.
    ///
    /// A successful search with a non-blank query also records a history
    /// entry; that write is best-effort and never fails the search.
    pub async fn search(&self, options: SearchOptions) -> Result<SearchResult> {
        let started = Instant::now();
        let books = self.provider.get_all().await?;

        let filtered = options.filters.apply(&books);
        let query = options.query.trim();

        let matched: Vec<&Book> = if query.is_empty() {
            filtered
        } else {
            let scorer = RelevanceScorer::new(self.weights, options.fuzzy);
            let mut scored: Vec<(f64, &Book)> = filtered
                .into_iter()
                .map(|book| (scorer.score(query, book), book))
                .filter(|(score, _)| *score > 0.0)
                .collect();
            // Stable sort: equal scores keep collection order.
            scored.sort_by(|a, b| b.0.total_cmp(&a.0));
            scored.into_iter().map(|(_, book)| book).collect()
        };

        let facets = options
            .include_facets
            .then(|| facet::aggregate(matched.iter().copied()));

        // An explicit sort overrides relevance order; without one, a blank
        // query falls back to the default most-recently-added ordering.
        let ordered = match &options.sort {
            Some(config) => config.apply(&matched),
            None if query.is_empty() => SortConfig::default().apply(&matched),
            None => matched,
        };

        let page = paginate::paginate(&ordered, options.page, options.limit);

        if !query.is_empty() {
            self.history.add(query, page.total);
        }

        Ok(SearchResult {
            books: page.books.into_iter().cloned().collect(),
            total: page.total,
            page: page.page,
            total_pages: page.total_pages,
            facets,
            query: query.to_string(),
            search_time_ms: started.elapsed().as_millis() as u64,
        })
    }

    /// Autocomplete suggestions: title matches first, then author matches,
    /// in collection encounter order, deduplicated, capped at `limit`.
    pub async fn suggestions(&self, query: &str, limit: usize) -> Result<Vec<String>> {
        let query = query.trim().to_lowercase();
        if query.is_empty() || limit == 0 {
            return Ok(Vec::new());
        }

        let books = self.provider.get_all().await?;
        let mut seen = HashSet::new();
        let mut suggestions = Vec::new();

        for book in &books {
            if suggestions.len() >= limit {
                break;
            }
            if book.title.to_lowercase().contains(&query) && seen.insert(book.title.clone()) {
                suggestions.push(book.title.clone());
            }
        }

        for book in &books {
            if suggestions.len() >= limit {
                break;
            }
            for author in &book.authors {
                if suggestions.len() >= limit {
                    break;
                }
                if author.to_lowercase().contains(&query) && seen.insert(author.clone()) {
                    suggestions.push(author.clone());
                }
            }
        }

        Ok(suggestions)
    }

    /// Authors matching the query by substring, aggregated by how many books
    /// they appear on, sorted by count descending, capped at `limit`.
    pub async fn search_authors(&self, query: &str, limit: usize) -> Result<Vec<FacetValue>> {
        let query = query.trim().to_lowercase();
        if query.is_empty() || limit == 0 {
            return Ok(Vec::new());
        }

        let books = self.provider.get_all().await?;
        let matches = books.iter().flat_map(|book| {
            book.authors
                .iter()
                .filter(|author| author.to_lowercase().contains(&query))
                .map(String::as_str)
        });

        Ok(facet::count_values(matches, limit))
    }
}

impl std::fmt::Debug for SearchEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SearchEngine")
            .field("weights", &self.weights)
            .finish_non_exhaustive()
    }
}
