//! Command execution logic for the folio CLI.

use std::fs;
use std::sync::Arc;

use crate::book::{Book, BookFormat};
use crate::cli::args::{AuthorsArgs, Command, FolioArgs, HistoryArgs, SearchArgs, SuggestArgs};
use crate::cli::output;
use crate::collection::StaticCollection;
use crate::error::Result;
use crate::search::filter::{RatingRange, SearchFilters, YearRange};
use crate::search::sort::{SortConfig, SortDirection, SortField};
use crate::search::{SearchEngine, SearchOptions};
use crate::storage::FileKvStore;

/// Execute the parsed command.
pub async fn execute_command(args: FolioArgs) -> Result<()> {
    let engine = build_engine(&args)?;

    match args.command.clone() {
        Command::Search(search_args) => search(&engine, &args, search_args).await,
        Command::Suggest(suggest_args) => suggest(&engine, &args, suggest_args).await,
        Command::Authors(author_args) => authors(&engine, &args, author_args).await,
        Command::History(history_args) => history(&engine, &args, history_args),
    }
}

fn build_engine(args: &FolioArgs) -> Result<SearchEngine> {
    let contents = fs::read_to_string(&args.books)?;
    let books: Vec<Book> = serde_json::from_str(&contents)?;
    let store = FileKvStore::open(&args.data_dir)?;

    Ok(SearchEngine::new(
        Arc::new(StaticCollection::new(books)),
        Arc::new(store),
    ))
}

async fn search(engine: &SearchEngine, args: &FolioArgs, search_args: SearchArgs) -> Result<()> {
    let mut filters = SearchFilters::default();

    if !search_args.formats.is_empty() {
        let formats = search_args
            .formats
            .iter()
            .map(|raw| raw.parse::<BookFormat>())
            .collect::<Result<Vec<_>>>()?;
        filters.formats = Some(formats);
    }
    if search_args.min_rating.is_some() || search_args.max_rating.is_some() {
        filters.rating = Some(RatingRange {
            min: search_args.min_rating.unwrap_or(0.0),
            max: search_args.max_rating.unwrap_or(5.0),
        });
    }
    if search_args.year_from.is_some() || search_args.year_to.is_some() {
        filters.years = Some(YearRange {
            start: search_args.year_from.unwrap_or(i32::MIN),
            end: search_args.year_to.unwrap_or(i32::MAX),
        });
    }

    let mut options = SearchOptions::new(search_args.query)
        .filters(filters)
        .page(search_args.page)
        .limit(search_args.limit)
        .fuzzy(!search_args.no_fuzzy)
        .include_facets(search_args.facets);

    if let Some(field) = &search_args.sort {
        options = options.sort(SortConfig {
            field: SortField::parse(field),
            direction: if search_args.desc {
                SortDirection::Desc
            } else {
                SortDirection::Asc
            },
        });
    }

    let result = engine.search(options).await?;
    output::print_search_result(&result, args)
}

async fn suggest(engine: &SearchEngine, args: &FolioArgs, suggest_args: SuggestArgs) -> Result<()> {
    let suggestions = engine
        .suggestions(&suggest_args.query, suggest_args.limit)
        .await?;
    output::print_suggestions(&suggestions, args)
}

async fn authors(engine: &SearchEngine, args: &FolioArgs, author_args: AuthorsArgs) -> Result<()> {
    let authors = engine
        .search_authors(&author_args.query, author_args.limit)
        .await?;
    output::print_authors(&authors, args)
}

fn history(engine: &SearchEngine, args: &FolioArgs, history_args: HistoryArgs) -> Result<()> {
    if history_args.clear {
        engine.history().clear();
        if args.verbosity() > 0 {
            println!("Search history cleared.");
        }
        return Ok(());
    }

    output::print_history(&engine.history().entries(), args)
}
