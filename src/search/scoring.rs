//! Multi-field weighted relevance scoring.
//!
//! Each field is evaluated independently against the query and contributes a
//! weighted amount to the record's total score. Records whose total is zero
//! are dropped from the result set. Weights are relative, not absolute units.

use crate::book::Book;
use crate::search::fuzzy::fuzzy_score;

/// Relative importance of each searchable field.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldWeights {
    pub title: f64,
    pub authors: f64,
    pub isbn: f64,
    pub series: f64,
    pub publisher: f64,
    pub tags: f64,
    pub description: f64,
    pub subjects: f64,
}

impl Default for FieldWeights {
    fn default() -> Self {
        FieldWeights {
            title: 10.0,
            authors: 8.0,
            isbn: 7.0,
            series: 6.0,
            publisher: 5.0,
            tags: 4.0,
            description: 3.0,
            subjects: 2.0,
        }
    }
}

/// Exact ISBN containment doubles the field weight.
const ISBN_EXACT_FACTOR: f64 = 2.0;
/// Per-word title containment contributes half the title weight.
const TITLE_WORD_FACTOR: f64 = 0.5;
/// Per-word fuzzy title fallback contributes 0.3 x weight x fuzzy score.
const TITLE_FUZZY_FACTOR: f64 = 0.3;
/// Bonus factor when the whole query equals the whole title.
const TITLE_EXACT_BONUS: f64 = 2.0;
/// Bonus factor when the title starts with the whole query.
const TITLE_PREFIX_BONUS: f64 = 1.5;

/// Scores records against a free-text query.
#[derive(Debug, Clone)]
pub struct RelevanceScorer {
    weights: FieldWeights,
    fuzzy: bool,
}

impl RelevanceScorer {
    /// Create a scorer with the given weights. `fuzzy` enables the
    /// edit-distance fallbacks on the ISBN, title, and author fields.
    pub fn new(weights: FieldWeights, fuzzy: bool) -> Self {
        RelevanceScorer { weights, fuzzy }
    }

    /// Compute the total relevance score of a book for a query.
    ///
    /// Returns 0.0 for a blank query. A zero score means "no match" and the
    /// record should be excluded from results.
    pub fn score(&self, query: &str, book: &Book) -> f64 {
        let query = query.trim().to_lowercase();
        if query.is_empty() {
            return 0.0;
        }

        let mut total = 0.0;
        total += self.score_isbn(&query, book);
        total += self.score_title(&query, book);
        total += self.score_authors(&query, book);

        if let Some(publisher) = &book.publisher {
            if publisher.to_lowercase().contains(&query) {
                total += self.weights.publisher;
            }
        }
        if let Some(description) = &book.description {
            if description.to_lowercase().contains(&query) {
                total += self.weights.description;
            }
        }
        if book
            .tags
            .iter()
            .any(|tag| tag.to_lowercase().contains(&query))
        {
            total += self.weights.tags;
        }
        if let Some(series) = &book.series_name {
            if series.to_lowercase().contains(&query) {
                total += self.weights.series;
            }
        }
        if book
            .subjects
            .iter()
            .any(|subject| subject.to_lowercase().contains(&query))
        {
            total += self.weights.subjects;
        }

        total
    }

    fn score_isbn(&self, query: &str, book: &Book) -> f64 {
        let Some(isbn) = &book.isbn13 else {
            return 0.0;
        };

        let normalized_isbn = normalize_isbn(isbn);
        let normalized_query = normalize_isbn(query);
        if !normalized_query.is_empty() && normalized_isbn.contains(&normalized_query) {
            return self.weights.isbn * ISBN_EXACT_FACTOR;
        }

        if self.fuzzy {
            let result = fuzzy_score(query, isbn);
            if result.matched {
                return self.weights.isbn * result.score;
            }
        }

        0.0
    }

    /// Title scoring: each query word contributes on containment (or fuzzy
    /// fallback), but only when every word finds a match, so a partial query
    /// like "Test Book 1" cannot latch onto "Test Book 2" through its shared
    /// words. Whole-query exact and prefix bonuses are additive on top.
    fn score_title(&self, query: &str, book: &Book) -> f64 {
        let title = book.title.to_lowercase();
        let mut word_total = 0.0;
        let mut all_words_matched = true;

        for word in query.split_whitespace() {
            if title.contains(word) {
                word_total += self.weights.title * TITLE_WORD_FACTOR;
                continue;
            }
            if self.fuzzy {
                let result = fuzzy_score(word, &book.title);
                if result.matched {
                    word_total += self.weights.title * TITLE_FUZZY_FACTOR * result.score;
                    continue;
                }
            }
            all_words_matched = false;
        }

        let mut total = if all_words_matched { word_total } else { 0.0 };

        if title == query {
            total += self.weights.title * TITLE_EXACT_BONUS;
        } else if title.starts_with(query) {
            total += self.weights.title * TITLE_PREFIX_BONUS;
        }

        total
    }

    fn score_authors(&self, query: &str, book: &Book) -> f64 {
        let mut total = 0.0;

        for author in &book.authors {
            if author.to_lowercase().contains(query) {
                total += self.weights.authors;
            } else if self.fuzzy {
                let result = fuzzy_score(query, author);
                if result.matched {
                    total += self.weights.authors * result.score;
                }
            }
        }

        total
    }
}

/// Strip hyphens and whitespace so hyphenated and bare ISBNs compare equal.
fn normalize_isbn(raw: &str) -> String {
    raw.chars()
        .filter(|c| *c != '-' && !c.is_whitespace())
        .collect::<String>()
        .to_lowercase()
}
