//! In-memory key-value store for testing and ephemeral sessions.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::RwLock;

use crate::error::Result;
use crate::storage::traits::KvStore;

/// An in-memory [`KvStore`].
///
/// Cloning shares the underlying map, so a clone handed to the engine can be
/// inspected by a test afterwards.
#[derive(Debug, Clone, Default)]
pub struct MemoryKvStore {
    entries: Arc<RwLock<HashMap<String, String>>>,
}

impl MemoryKvStore {
    /// Create an empty store.
    pub fn new() -> Self {
        MemoryKvStore::default()
    }

    /// Number of keys currently stored.
    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    /// Whether the store holds no keys.
    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }

    /// Remove every key.
    pub fn clear(&self) {
        self.entries.write().clear();
    }
}

impl KvStore for MemoryKvStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.read().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.entries
            .write()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn delete(&self, key: &str) -> Result<()> {
        self.entries.write().remove(key);
        Ok(())
    }
}
