//! Output formatting for CLI commands.

use serde::Serialize;

use crate::cli::args::{FolioArgs, OutputFormat};
use crate::error::Result;
use crate::history::SearchHistoryEntry;
use crate::search::facet::FacetValue;
use crate::search::SearchResult;

/// Print a search result in the requested format.
pub fn print_search_result(result: &SearchResult, args: &FolioArgs) -> Result<()> {
    if args.output_format == OutputFormat::Json {
        return print_json(result);
    }

    println!(
        "{} result(s) for {:?} (page {}/{}, {} ms)",
        result.total,
        result.query,
        result.page,
        result.total_pages.max(1),
        result.search_time_ms
    );
    for book in &result.books {
        let authors = if book.authors.is_empty() {
            "unknown author".to_string()
        } else {
            book.authors.join(", ")
        };
        let year = book
            .published_year
            .map(|y| y.to_string())
            .unwrap_or_else(|| "----".to_string());
        println!("  {} — {} ({}, {})", book.title, authors, year, book.format);
    }

    if let Some(facets) = &result.facets {
        print_facet_section("Authors", &facets.authors);
        print_facet_section("Genres", &facets.genres);
        print_facet_section("Formats", &facets.formats);
        print_facet_section("Tags", &facets.tags);
        print_facet_section("Years", &facets.years);
        print_facet_section("Publishers", &facets.publishers);
        print_facet_section("Ratings", &facets.ratings);
    }

    Ok(())
}

fn print_facet_section(name: &str, values: &[FacetValue]) {
    if values.is_empty() {
        return;
    }
    println!("{name}:");
    for value in values {
        println!("  {} ({})", value.label, value.count);
    }
}

/// Print autocomplete suggestions.
pub fn print_suggestions(suggestions: &[String], args: &FolioArgs) -> Result<()> {
    if args.output_format == OutputFormat::Json {
        return print_json(&suggestions);
    }

    for suggestion in suggestions {
        println!("{suggestion}");
    }
    Ok(())
}

/// Print author lookup results.
pub fn print_authors(authors: &[FacetValue], args: &FolioArgs) -> Result<()> {
    if args.output_format == OutputFormat::Json {
        return print_json(&authors);
    }

    for author in authors {
        println!("{} ({} book(s))", author.label, author.count);
    }
    Ok(())
}

/// Print the search history, newest first.
pub fn print_history(entries: &[SearchHistoryEntry], args: &FolioArgs) -> Result<()> {
    if args.output_format == OutputFormat::Json {
        return print_json(&entries);
    }

    for entry in entries {
        println!(
            "{}  {:?} ({} result(s))",
            entry.timestamp.format("%Y-%m-%d %H:%M"),
            entry.query,
            entry.result_count
        );
    }
    Ok(())
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
