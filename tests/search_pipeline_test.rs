//! End-to-end tests for the search pipeline.

use std::sync::Arc;

use chrono::{TimeZone, Utc};

use folio::prelude::*;
use folio::search::filter::{RatingRange, YearRange};

fn book(id: &str, title: &str, author: &str, added_day: u32) -> Book {
    Book {
        id: id.to_string(),
        title: title.to_string(),
        authors: vec![author.to_string()],
        isbn13: None,
        publisher: None,
        description: None,
        tags: vec![],
        series_name: None,
        subjects: vec![],
        published_year: None,
        page_count: None,
        average_rating: None,
        format: BookFormat::Paperback,
        added_at: Utc.with_ymd_and_hms(2024, 2, added_day, 9, 0, 0).unwrap(),
    }
}

fn shelf() -> Vec<Book> {
    let mut books = vec![
        book("1", "A Wizard of Earthsea", "Ursula K. Le Guin", 1),
        book("2", "The Tombs of Atuan", "Ursula K. Le Guin", 2),
        book("3", "Neuromancer", "William Gibson", 3),
        book("4", "Count Zero", "William Gibson", 4),
        book("5", "Effective Java", "Joshua Bloch", 5),
    ];

    books[0].tags = vec!["fantasy".to_string(), "favorites".to_string()];
    books[0].subjects = vec!["Fantasy".to_string()];
    books[0].published_year = Some(1968);
    books[0].average_rating = Some(4.5);

    books[1].tags = vec!["fantasy".to_string()];
    books[1].subjects = vec!["Fantasy".to_string()];
    books[1].published_year = Some(1971);
    books[1].average_rating = Some(4.2);
    books[1].format = BookFormat::Kindle;

    books[2].tags = vec!["cyberpunk".to_string()];
    books[2].subjects = vec!["Science Fiction".to_string()];
    books[2].published_year = Some(1984);
    books[2].average_rating = Some(4.0);

    books[3].subjects = vec!["Science Fiction".to_string()];
    books[3].published_year = Some(1986);
    books[3].format = BookFormat::Ebook;

    books[4].isbn13 = Some("978-0-13-468599-1".to_string());
    books[4].publisher = Some("Addison-Wesley".to_string());
    books[4].published_year = Some(2018);
    books[4].average_rating = Some(4.7);

    books
}

fn engine() -> SearchEngine {
    SearchEngine::new(
        Arc::new(StaticCollection::new(shelf())),
        Arc::new(MemoryKvStore::new()),
    )
}

#[tokio::test]
async fn query_and_filters_compose() -> Result<()> {
    let engine = engine();

    // Author query restricted by rating: only the higher-rated Le Guin.
    let filters = SearchFilters {
        rating: Some(RatingRange { min: 4.3, max: 5.0 }),
        ..Default::default()
    };
    let result = engine
        .search(SearchOptions::new("le guin").filters(filters))
        .await?;

    assert_eq!(result.total, 1);
    assert_eq!(result.books[0].id, "1");
    assert_eq!(result.total_pages, 1);
    Ok(())
}

#[tokio::test]
async fn fuzzy_matching_recovers_typos() -> Result<()> {
    let engine = engine();

    let strict = engine
        .search(SearchOptions::new("Neuromancr").fuzzy(false))
        .await?;
    assert_eq!(strict.total, 0);
    assert_eq!(strict.total_pages, 0);

    let fuzzy = engine.search(SearchOptions::new("Neuromancr")).await?;
    assert_eq!(fuzzy.total, 1);
    assert_eq!(fuzzy.books[0].title, "Neuromancer");
    Ok(())
}

#[tokio::test]
async fn isbn_query_hits_without_fuzzy() -> Result<()> {
    let engine = engine();

    let result = engine
        .search(SearchOptions::new("9780134685991").fuzzy(false))
        .await?;
    assert_eq!(result.total, 1);
    assert_eq!(result.books[0].id, "5");
    Ok(())
}

#[tokio::test]
async fn author_tie_keeps_collection_order() -> Result<()> {
    let engine = engine();

    let result = engine.search(SearchOptions::new("gibson")).await?;
    assert_eq!(result.total, 2);
    // Both Gibson books tie on the author field; collection order is kept.
    assert_eq!(result.books[0].id, "3");
    assert_eq!(result.books[1].id, "4");
    Ok(())
}

#[tokio::test]
async fn facets_are_bounded_and_ordered() -> Result<()> {
    // A collection wide enough to overflow the facet cap.
    let mut books = Vec::new();
    for i in 0..60 {
        let mut b = book(
            &i.to_string(),
            "Book",
            &format!("Author {}", i % 22),
            (i % 28) + 1,
        );
        b.tags = vec![format!("tag-{}", i % 30)];
        b.publisher = Some(format!("Publisher {}", i % 25));
        b.average_rating = Some((i % 5) as f64 + 0.5);
        books.push(b);
    }

    let engine = SearchEngine::new(
        Arc::new(StaticCollection::new(books)),
        Arc::new(MemoryKvStore::new()),
    );
    let result = engine
        .search(SearchOptions::default().include_facets(true))
        .await?;

    let facets = result.facets.expect("facets requested");
    for dimension in [
        &facets.authors,
        &facets.genres,
        &facets.formats,
        &facets.tags,
        &facets.years,
        &facets.publishers,
        &facets.ratings,
    ] {
        assert!(dimension.len() <= 20, "facet dimension exceeds cap");
        for pair in dimension.windows(2) {
            assert!(pair[0].count >= pair[1].count, "facet counts not sorted");
        }
    }
    assert_eq!(facets.tags.len(), 20);
    assert_eq!(facets.ratings.len(), 5);
    Ok(())
}

#[tokio::test]
async fn sorted_pages_never_exceed_limit() -> Result<()> {
    let engine = engine();
    let options = SearchOptions::default()
        .sort(SortConfig {
            field: SortField::Title,
            direction: SortDirection::Asc,
        })
        .limit(2);

    let page1 = engine.search(options.clone()).await?;
    assert_eq!(page1.total, 5);
    assert_eq!(page1.total_pages, 3);
    assert!(page1.books.len() <= 2);
    assert_eq!(page1.books[0].title, "A Wizard of Earthsea");
    assert_eq!(page1.books[1].title, "Count Zero");

    let page3 = engine.search(options.page(3)).await?;
    assert_eq!(page3.books.len(), 1);
    assert_eq!(page3.books[0].title, "The Tombs of Atuan");
    Ok(())
}

#[tokio::test]
async fn year_filter_with_sort() -> Result<()> {
    let engine = engine();
    let filters = SearchFilters {
        years: Some(YearRange {
            start: 1980,
            end: 1990,
        }),
        ..Default::default()
    };
    let result = engine
        .search(
            SearchOptions::default().filters(filters).sort(SortConfig {
                field: SortField::Year,
                direction: SortDirection::Asc,
            }),
        )
        .await?;

    assert_eq!(result.total, 2);
    assert_eq!(result.books[0].title, "Neuromancer");
    assert_eq!(result.books[1].title, "Count Zero");
    Ok(())
}

#[tokio::test]
async fn concurrent_searches_are_independent() -> Result<()> {
    let engine = engine();
    let (a, b) = tokio::join!(
        engine.search(SearchOptions::new("gibson")),
        engine.search(SearchOptions::new("le guin")),
    );

    assert_eq!(a?.total, 2);
    assert_eq!(b?.total, 2);
    Ok(())
}
