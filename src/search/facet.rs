//! Bounded facet aggregation over a result set.
//!
//! Each facet dimension is an independent value-count distribution computed
//! from the filtered (and, when a query was present, score-matched) set.
//! Distributions are sorted by count descending with ties keeping encounter
//! order, and truncated to [`MAX_FACET_VALUES`] entries.

use ahash::AHashMap;
use serde::{Deserialize, Serialize};

use crate::book::Book;

/// Maximum number of values returned per facet dimension.
pub const MAX_FACET_VALUES: usize = 20;

/// One value of a facet dimension together with its record count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FacetValue {
    /// Machine-readable value (e.g. `"2001"`, `"kindle"`).
    pub value: String,
    /// Human-readable label for display.
    pub label: String,
    /// Number of records carrying this value.
    pub count: u64,
}

/// The full set of facet distributions for a result set.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchFacets {
    pub authors: Vec<FacetValue>,
    pub genres: Vec<FacetValue>,
    pub formats: Vec<FacetValue>,
    pub tags: Vec<FacetValue>,
    pub years: Vec<FacetValue>,
    pub publishers: Vec<FacetValue>,
    pub ratings: Vec<FacetValue>,
}

/// Count map that remembers first-encounter order, so the count-descending
/// sort can break ties deterministically.
#[derive(Debug, Default)]
struct ValueCounter {
    index: AHashMap<String, usize>,
    entries: Vec<(String, u64)>,
}

impl ValueCounter {
    fn add(&mut self, value: &str) {
        match self.index.get(value) {
            Some(&i) => self.entries[i].1 += 1,
            None => {
                self.index.insert(value.to_string(), self.entries.len());
                self.entries.push((value.to_string(), 1));
            }
        }
    }

    /// Convert to a capped, count-descending facet list. The sort is stable,
    /// so equal counts keep encounter order.
    fn into_facet_values(mut self, cap: usize) -> Vec<FacetValue> {
        self.entries.sort_by(|a, b| b.1.cmp(&a.1));
        self.entries.truncate(cap);
        self.entries
            .into_iter()
            .map(|(value, count)| FacetValue {
                label: value.clone(),
                value,
                count,
            })
            .collect()
    }
}

/// Accumulates every facet dimension in one pass over the result set.
#[derive(Debug, Default)]
pub struct FacetCollector {
    authors: ValueCounter,
    genres: ValueCounter,
    formats: ValueCounter,
    tags: ValueCounter,
    years: ValueCounter,
    publishers: ValueCounter,
    ratings: ValueCounter,
}

impl FacetCollector {
    /// Create an empty collector.
    pub fn new() -> Self {
        FacetCollector::default()
    }

    /// Add one record's values to every dimension.
    pub fn collect(&mut self, book: &Book) {
        for author in &book.authors {
            self.authors.add(author);
        }
        for subject in &book.subjects {
            self.genres.add(subject);
        }
        self.formats.add(book.format.as_str());
        for tag in &book.tags {
            self.tags.add(tag);
        }
        if let Some(year) = book.published_year {
            self.years.add(&year.to_string());
        }
        if let Some(publisher) = &book.publisher {
            self.publishers.add(publisher);
        }
        if let Some(rating) = book.average_rating {
            self.ratings.add(&rating_bucket(rating));
        }
    }

    /// Finish aggregation, producing sorted and capped distributions.
    pub fn finish(self) -> SearchFacets {
        SearchFacets {
            authors: self.authors.into_facet_values(MAX_FACET_VALUES),
            genres: self.genres.into_facet_values(MAX_FACET_VALUES),
            formats: self.formats.into_facet_values(MAX_FACET_VALUES),
            tags: self.tags.into_facet_values(MAX_FACET_VALUES),
            years: self.years.into_facet_values(MAX_FACET_VALUES),
            publishers: self.publishers.into_facet_values(MAX_FACET_VALUES),
            ratings: self.ratings.into_facet_values(MAX_FACET_VALUES),
        }
    }
}

/// Count an arbitrary stream of values into a capped, count-descending facet
/// list. Used for ad-hoc aggregations like author lookup.
pub fn count_values<'a, I>(values: I, cap: usize) -> Vec<FacetValue>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut counter = ValueCounter::default();
    for value in values {
        counter.add(value);
    }
    counter.into_facet_values(cap)
}

/// Build the facets for a set of records.
pub fn aggregate<'a, I>(books: I) -> SearchFacets
where
    I: IntoIterator<Item = &'a Book>,
{
    let mut collector = FacetCollector::new();
    for book in books {
        collector.collect(book);
    }
    collector.finish()
}

/// Bucket key for a rating: `floor(r)` to `floor(r)+1`, e.g. `3.7 -> "3-4"`.
fn rating_bucket(rating: f64) -> String {
    let lower = rating.floor() as i64;
    format!("{}-{}", lower, lower + 1)
}
