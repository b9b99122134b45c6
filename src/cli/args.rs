//! Command line argument parsing for the folio CLI using clap.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// Folio - search a personal book collection
#[derive(Parser, Debug, Clone)]
#[command(name = "folio")]
#[command(about = "A local search and relevance engine for personal book collections")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct FolioArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human")]
    pub output_format: OutputFormat,

    /// Path to the JSON file holding the book collection
    #[arg(short, long, value_name = "BOOKS_FILE", env = "FOLIO_BOOKS")]
    pub books: PathBuf,

    /// Directory for persisted history and saved searches
    #[arg(long, value_name = "DATA_DIR", env = "FOLIO_DATA_DIR", default_value = ".folio")]
    pub data_dir: PathBuf,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl FolioArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n,
            }
        }
    }
}

/// Output format for command results.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable text
    Human,
    /// JSON
    Json,
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Search the collection
    Search(SearchArgs),

    /// Autocomplete titles and authors
    Suggest(SuggestArgs),

    /// Look up authors by name fragment
    Authors(AuthorsArgs),

    /// Show or clear the search history
    History(HistoryArgs),
}

/// Arguments for searching
#[derive(Parser, Debug, Clone)]
pub struct SearchArgs {
    /// Query text; omit to match everything
    #[arg(value_name = "QUERY", default_value = "")]
    pub query: String,

    /// Restrict to these formats (repeatable)
    #[arg(long = "book-format", value_name = "FORMAT")]
    pub formats: Vec<String>,

    /// Minimum average rating (inclusive)
    #[arg(long)]
    pub min_rating: Option<f64>,

    /// Maximum average rating (inclusive)
    #[arg(long)]
    pub max_rating: Option<f64>,

    /// Earliest publication year (inclusive)
    #[arg(long)]
    pub year_from: Option<i32>,

    /// Latest publication year (inclusive)
    #[arg(long)]
    pub year_to: Option<i32>,

    /// Sort field (title, author, rating, year, pageCount, addedAt)
    #[arg(short, long)]
    pub sort: Option<String>,

    /// Sort descending instead of ascending
    #[arg(long)]
    pub desc: bool,

    /// Page number (1-indexed)
    #[arg(short, long, default_value_t = 1)]
    pub page: usize,

    /// Page size
    #[arg(short, long, default_value_t = 20)]
    pub limit: usize,

    /// Disable fuzzy matching
    #[arg(long)]
    pub no_fuzzy: bool,

    /// Include facet distributions in the output
    #[arg(long)]
    pub facets: bool,
}

/// Arguments for suggestions
#[derive(Parser, Debug, Clone)]
pub struct SuggestArgs {
    /// Query prefix or fragment
    #[arg(value_name = "QUERY")]
    pub query: String,

    /// Maximum number of suggestions
    #[arg(short, long, default_value_t = 10)]
    pub limit: usize,
}

/// Arguments for author lookup
#[derive(Parser, Debug, Clone)]
pub struct AuthorsArgs {
    /// Author name fragment
    #[arg(value_name = "QUERY")]
    pub query: String,

    /// Maximum number of authors
    #[arg(short, long, default_value_t = 10)]
    pub limit: usize,
}

/// Arguments for the history command
#[derive(Parser, Debug, Clone)]
pub struct HistoryArgs {
    /// Clear the history instead of listing it
    #[arg(long)]
    pub clear: bool,
}
