//! Persisted named searches.
//!
//! Saved searches are appended in creation order and capped at
//! [`MAX_SAVED_SEARCHES`]: when the cap is exceeded the oldest entries are
//! dropped (FIFO, not LRU — using a search never reorders the list). Stored
//! under the `savedSearches` key with the same soft-fail read and
//! best-effort write contract as the history store.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use log::{debug, warn};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::Result;
use crate::search::filter::SearchFilters;
use crate::storage::KvStore;

/// Persistence key for the saved-search blob.
pub const SAVED_SEARCHES_KEY: &str = "savedSearches";

/// Maximum number of saved searches retained.
pub const MAX_SAVED_SEARCHES: usize = 50;

/// A named, persisted query and filter combination.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedSearch {
    /// Unique identifier (UUID v4).
    pub id: String,
    /// User-chosen display name.
    pub name: String,
    /// The query text.
    pub query: String,
    /// Snapshot of the filters at save time.
    pub filters: SearchFilters,
    /// When the search was saved.
    pub created_at: DateTime<Utc>,
    /// How many times it has been re-invoked. Monotonically non-decreasing.
    pub use_count: u64,
}

/// Partial update for [`SavedSearchStore::update`]; `None` fields are left
/// unchanged.
#[derive(Debug, Clone, Default)]
pub struct SavedSearchUpdate {
    pub name: Option<String>,
    pub query: Option<String>,
    pub filters: Option<SearchFilters>,
}

/// Store managing the persisted saved-search list.
#[derive(Debug, Clone)]
pub struct SavedSearchStore {
    store: Arc<dyn KvStore>,
}

impl SavedSearchStore {
    /// Create a saved-search store over the given persistence backend.
    pub fn new(store: Arc<dyn KvStore>) -> Self {
        SavedSearchStore { store }
    }

    /// Read every saved search in creation order. Missing or malformed data
    /// reads as empty.
    pub fn entries(&self) -> Vec<SavedSearch> {
        let blob = match self.store.get(SAVED_SEARCHES_KEY) {
            Ok(Some(blob)) => blob,
            Ok(None) => return Vec::new(),
            Err(e) => {
                warn!("failed to read saved searches: {e}");
                return Vec::new();
            }
        };

        match serde_json::from_str(&blob) {
            Ok(entries) => entries,
            Err(e) => {
                debug!("discarding malformed saved searches: {e}");
                Vec::new()
            }
        }
    }

    /// Look up one saved search by id.
    pub fn get(&self, id: &str) -> Option<SavedSearch> {
        self.entries().into_iter().find(|entry| entry.id == id)
    }

    /// Append a new saved search and return it. If the list exceeds the cap,
    /// the oldest entries are dropped.
    pub fn save(&self, name: &str, query: &str, filters: SearchFilters) -> SavedSearch {
        let entry = SavedSearch {
            id: Uuid::new_v4().to_string(),
            name: name.to_string(),
            query: query.to_string(),
            filters,
            created_at: Utc::now(),
            use_count: 0,
        };

        let mut entries = self.entries();
        entries.push(entry.clone());
        if entries.len() > MAX_SAVED_SEARCHES {
            let excess = entries.len() - MAX_SAVED_SEARCHES;
            entries.drain(..excess);
        }
        self.write(&entries);
        entry
    }

    /// Delete a saved search by id. No-op if absent.
    pub fn delete(&self, id: &str) {
        let mut entries = self.entries();
        let before = entries.len();
        entries.retain(|entry| entry.id != id);
        if entries.len() != before {
            self.write(&entries);
        }
    }

    /// Record one use of a saved search. Increments `use_count` in place
    /// without reordering the list.
    pub fn increment_use(&self, id: &str) {
        let mut entries = self.entries();
        let Some(entry) = entries.iter_mut().find(|entry| entry.id == id) else {
            return;
        };
        entry.use_count += 1;
        self.write(&entries);
    }

    /// Merge the provided fields into the saved search with the given id.
    pub fn update(&self, id: &str, update: SavedSearchUpdate) {
        let mut entries = self.entries();
        let Some(entry) = entries.iter_mut().find(|entry| entry.id == id) else {
            return;
        };
        if let Some(name) = update.name {
            entry.name = name;
        }
        if let Some(query) = update.query {
            entry.query = query;
        }
        if let Some(filters) = update.filters {
            entry.filters = filters;
        }
        self.write(&entries);
    }

    fn write(&self, entries: &[SavedSearch]) {
        if let Err(e) = self.try_write(entries) {
            warn!("failed to persist saved searches: {e}");
        }
    }

    fn try_write(&self, entries: &[SavedSearch]) -> Result<()> {
        let blob = serde_json::to_string(entries)?;
        self.store.set(SAVED_SEARCHES_KEY, &blob)
    }
}
