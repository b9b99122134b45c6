//! Key-value persistence boundary for history and saved searches.
//!
//! The engine's persisted state is a handful of JSON blobs addressed by
//! string keys. [`KvStore`] is the pluggable seam: [`MemoryKvStore`] backs
//! tests, [`FileKvStore`] persists each key as a JSON file in a directory.

pub mod file;
pub mod memory;
pub mod traits;

pub use file::FileKvStore;
pub use memory::MemoryKvStore;
pub use traits::KvStore;
