//! Storage abstraction trait for persisted engine state.

use crate::error::Result;

/// A store of JSON-serializable blobs addressed by string keys.
///
/// Implementations must tolerate concurrent readers; the engine's writes are
/// last-writer-wins with no merge.
pub trait KvStore: Send + Sync + std::fmt::Debug {
    /// Read the blob stored under `key`, or `None` if absent.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Store `value` under `key`, replacing any previous blob.
    fn set(&self, key: &str, value: &str) -> Result<()>;

    /// Remove the blob stored under `key`. Removing an absent key is not an
    /// error.
    fn delete(&self, key: &str) -> Result<()>;
}
