//! The collection boundary between the engine and the record store.
//!
//! The engine materializes the full collection in memory with a single await
//! at the start of a search; everything downstream of that is synchronous.
//! `BookProvider` is the pluggable seam for the external record store, and
//! [`StaticCollection`] is the in-memory implementation used by tests and the
//! CLI.

use futures::future::BoxFuture;

use crate::book::Book;
use crate::error::Result;

/// Supplies the full book collection as an in-memory snapshot.
pub trait BookProvider: Send + Sync {
    /// Fetch every book in the collection.
    ///
    /// The returned snapshot is owned by the caller; the engine never writes
    /// back through this trait.
    fn get_all(&self) -> BoxFuture<'_, Result<Vec<Book>>>;
}

/// A fixed in-memory collection.
#[derive(Debug, Clone, Default)]
pub struct StaticCollection {
    books: Vec<Book>,
}

impl StaticCollection {
    /// Create a collection from a vector of books.
    pub fn new(books: Vec<Book>) -> Self {
        StaticCollection { books }
    }

    /// Number of books in the collection.
    pub fn len(&self) -> usize {
        self.books.len()
    }

    /// Whether the collection is empty.
    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }
}

impl BookProvider for StaticCollection {
    fn get_all(&self) -> BoxFuture<'_, Result<Vec<Book>>> {
        let books = self.books.clone();
        Box::pin(async move { Ok(books) })
    }
}
