use std::sync::Arc;

use chrono::{TimeZone, Utc};
use criterion::{Criterion, black_box, criterion_group, criterion_main};

use folio::prelude::*;
use folio::search::fuzzy::fuzzy_score;
use folio::util::levenshtein::levenshtein_distance;

fn generate_collection(count: usize) -> Vec<Book> {
    let formats = [
        BookFormat::Hardcover,
        BookFormat::Paperback,
        BookFormat::Ebook,
        BookFormat::Kindle,
        BookFormat::Audiobook,
    ];
    (0..count)
        .map(|i| Book {
            id: format!("book-{i}"),
            title: format!("The Collected Works Volume {i}"),
            authors: vec![format!("Author {}", i % 50)],
            isbn13: Some(format!("978-0-00-{:06}-{}", i, i % 10)),
            publisher: Some(format!("Publisher {}", i % 12)),
            description: Some("An anthology of short fiction and essays.".to_string()),
            tags: vec![format!("tag-{}", i % 8)],
            series_name: Some(format!("Series {}", i % 20)),
            subjects: vec![format!("Subject {}", i % 15)],
            published_year: Some(1950 + (i % 75) as i32),
            page_count: Some(200 + (i % 400) as u32),
            average_rating: Some((i % 50) as f64 / 10.0),
            format: formats[i % formats.len()],
            added_at: Utc
                .with_ymd_and_hms(2023, 1 + (i % 12) as u32, 1 + (i % 28) as u32, 0, 0, 0)
                .unwrap(),
        })
        .collect()
}

fn bench_levenshtein(c: &mut Criterion) {
    let pairs = [
        ("kitten", "sitting"),
        ("the left hand of darkness", "left hand of darknes"),
        ("a", "anthology"),
    ];

    c.bench_function("levenshtein_distance", |b| {
        b.iter(|| {
            for (s1, s2) in &pairs {
                let _ = black_box(levenshtein_distance(black_box(s1), black_box(s2)));
            }
        })
    });

    c.bench_function("fuzzy_score", |b| {
        b.iter(|| {
            for (s1, s2) in &pairs {
                let _ = black_box(fuzzy_score(black_box(s1), black_box(s2)));
            }
        })
    });
}

fn bench_search(c: &mut Criterion) {
    let runtime = tokio::runtime::Runtime::new().unwrap();
    let engine = SearchEngine::new(
        Arc::new(StaticCollection::new(generate_collection(2000))),
        Arc::new(MemoryKvStore::new()),
    );

    let mut group = c.benchmark_group("search");

    group.bench_function("text_query", |b| {
        b.iter(|| {
            let result = runtime
                .block_on(engine.search(SearchOptions::new("collected works volume 42")))
                .unwrap();
            black_box(result)
        })
    });

    group.bench_function("filtered_with_facets", |b| {
        let filters = SearchFilters {
            formats: Some(vec![BookFormat::Kindle, BookFormat::Ebook]),
            ..Default::default()
        };
        b.iter(|| {
            let options = SearchOptions::new("anthology")
                .filters(filters.clone())
                .include_facets(true);
            let result = runtime.block_on(engine.search(options)).unwrap();
            black_box(result)
        })
    });

    group.finish();
}

criterion_group!(benches, bench_levenshtein, bench_search);
criterion_main!(benches);
