//! Persisted, size-bounded search history.
//!
//! The history is a newest-first list of past queries, deduplicated by exact
//! query string and capped at [`MAX_HISTORY_ENTRIES`]. It lives under the
//! `searchHistory` key of the injected [`KvStore`]. Reads soft-fail: a
//! missing or malformed blob is an empty history. Writes are best-effort:
//! failures are logged and swallowed, never surfaced to the caller.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::storage::KvStore;

/// Persistence key for the history blob.
pub const HISTORY_KEY: &str = "searchHistory";

/// Maximum number of history entries retained.
pub const MAX_HISTORY_ENTRIES: usize = 20;

/// One remembered query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchHistoryEntry {
    /// The query text, stored verbatim.
    pub query: String,
    /// When the query was last run.
    pub timestamp: DateTime<Utc>,
    /// Result count of the last run.
    pub result_count: usize,
}

/// Store managing the persisted history list.
#[derive(Debug, Clone)]
pub struct SearchHistoryStore {
    store: Arc<dyn KvStore>,
}

impl SearchHistoryStore {
    /// Create a history store over the given persistence backend.
    pub fn new(store: Arc<dyn KvStore>) -> Self {
        SearchHistoryStore { store }
    }

    /// Read the history, newest first. Missing or malformed data reads as
    /// empty.
    pub fn entries(&self) -> Vec<SearchHistoryEntry> {
        let blob = match self.store.get(HISTORY_KEY) {
            Ok(Some(blob)) => blob,
            Ok(None) => return Vec::new(),
            Err(e) => {
                warn!("failed to read search history: {e}");
                return Vec::new();
            }
        };

        match serde_json::from_str(&blob) {
            Ok(entries) => entries,
            Err(e) => {
                debug!("discarding malformed search history: {e}");
                Vec::new()
            }
        }
    }

    /// Record a query. An existing entry with the same query string is moved
    /// to the front with a refreshed timestamp and count; the list is then
    /// truncated to the most recent [`MAX_HISTORY_ENTRIES`].
    pub fn add(&self, query: &str, result_count: usize) {
        let mut entries = self.entries();
        entries.retain(|entry| entry.query != query);
        entries.insert(
            0,
            SearchHistoryEntry {
                query: query.to_string(),
                timestamp: Utc::now(),
                result_count,
            },
        );
        entries.truncate(MAX_HISTORY_ENTRIES);
        self.write(&entries);
    }

    /// Delete the entry whose query matches exactly. No-op if absent.
    pub fn remove(&self, query: &str) {
        let mut entries = self.entries();
        let before = entries.len();
        entries.retain(|entry| entry.query != query);
        if entries.len() != before {
            self.write(&entries);
        }
    }

    /// Empty the history.
    pub fn clear(&self) {
        self.write(&[]);
    }

    fn write(&self, entries: &[SearchHistoryEntry]) {
        if let Err(e) = self.try_write(entries) {
            warn!("failed to persist search history: {e}");
        }
    }

    fn try_write(&self, entries: &[SearchHistoryEntry]) -> Result<()> {
        let blob = serde_json::to_string(entries)?;
        self.store.set(HISTORY_KEY, &blob)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryKvStore;

    fn store() -> SearchHistoryStore {
        SearchHistoryStore::new(Arc::new(MemoryKvStore::new()))
    }

    #[test]
    fn test_add_is_newest_first() {
        let history = store();
        history.add("dune", 3);
        history.add("hobbit", 1);

        let entries = history.entries();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].query, "hobbit");
        assert_eq!(entries[1].query, "dune");
    }

    #[test]
    fn test_repeat_query_moves_to_front_without_duplicate() {
        let history = store();
        history.add("dune", 3);
        history.add("hobbit", 1);
        history.add("dune", 5);

        let entries = history.entries();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].query, "dune");
        assert_eq!(entries[0].result_count, 5);
        assert_eq!(entries[1].query, "hobbit");
    }

    #[test]
    fn test_capped_at_twenty() {
        let history = store();
        for i in 0..30 {
            history.add(&format!("query {i}"), i);
        }

        let entries = history.entries();
        assert_eq!(entries.len(), MAX_HISTORY_ENTRIES);
        assert_eq!(entries[0].query, "query 29");
        assert_eq!(entries.last().unwrap().query, "query 10");
    }

    #[test]
    fn test_remove_and_clear() {
        let history = store();
        history.add("dune", 3);
        history.add("hobbit", 1);

        history.remove("dune");
        let entries = history.entries();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].query, "hobbit");

        // Exact match only.
        history.remove("hob");
        assert_eq!(history.entries().len(), 1);

        history.clear();
        assert!(history.entries().is_empty());
    }

    #[test]
    fn test_malformed_blob_reads_as_empty() {
        let kv = MemoryKvStore::new();
        kv.set(HISTORY_KEY, "not json at all").unwrap();

        let history = SearchHistoryStore::new(Arc::new(kv));
        assert!(history.entries().is_empty());

        // Writing after a malformed read starts a fresh list.
        history.add("dune", 1);
        assert_eq!(history.entries().len(), 1);
    }
}
