use std::collections::{BTreeMap, BTreeSet};
use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::indexer::build_catalog;
use crate::models::StoredTune;
use crate::storage::TuneStore;

#[derive(Parser)]
#[command(name = "abc-tunebook")]
#[command(version = "0.1.0")]
#[command(about = "Index and search tunes from ABC notation books", long_about = None)]
pub struct Cli {
    /// Path to the SQLite tune database
    #[arg(long, global = true, default_value = "tunes.db")]
    pub db: PathBuf,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Parse a corpus of ABC books and store the tunes
    Index {
        /// Directory containing numbered book subdirectories
        dir: PathBuf,
    },
    /// Search tunes by title substring (case-insensitive)
    Search {
        term: String,
        /// Emit results as JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// List the tunes from one book
    Book {
        number: i64,
        #[arg(long)]
        json: bool,
    },
    /// List tunes whose type contains a substring (case-insensitive)
    Type {
        term: String,
        #[arg(long)]
        json: bool,
    },
    /// List all stored tunes
    List {
        #[arg(long)]
        json: bool,
    },
    /// Show statistics about the stored tunes
    Stats,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    match &cli.command {
        Some(Commands::Index { dir }) => {
            index_corpus(&cli.db, dir)?;
        }
        Some(Commands::Search { term, json }) => {
            let store = TuneStore::open(&cli.db)?;
            let results = store.search_titles(term)?;
            print_results(&results, *json, &format!("Found {} tunes:", results.len()), |t| {
                format!("  - {} (Book {})", t.title, t.book_number)
            })?;
        }
        Some(Commands::Book { number, json }) => {
            let store = TuneStore::open(&cli.db)?;
            let results = store.tunes_by_book(*number)?;
            print_results(
                &results,
                *json,
                &format!("Book {} has {} tunes:", number, results.len()),
                |t| format!("  - {} ({})", t.title, t.tune_type),
            )?;
        }
        Some(Commands::Type { term, json }) => {
            let store = TuneStore::open(&cli.db)?;
            let results = store.tunes_by_type(term)?;
            print_results(
                &results,
                *json,
                &format!("Found {} {} tunes:", results.len(), term),
                |t| format!("  - {} (Book {})", t.title, t.book_number),
            )?;
        }
        Some(Commands::List { json }) => {
            let store = TuneStore::open(&cli.db)?;
            let results = store.all_tunes()?;
            print_results(&results, *json, &format!("All {} tunes:", results.len()), |t| {
                format!("  - {} | Book {} | {}", t.title, t.book_number, t.tune_type)
            })?;
        }
        Some(Commands::Stats) => {
            show_stats(&cli.db)?;
        }
        None => {
            println!("Use --help for usage information");
        }
    }

    Ok(())
}

fn index_corpus(db: &Path, dir: &Path) -> Result<()> {
    let catalog = build_catalog(dir)?;

    if catalog.is_empty() {
        println!("No tunes found!");
        return Ok(());
    }

    let mut store = TuneStore::open(db)?;
    let inserted = store.insert_tunes(&catalog)?;
    println!("Saved {} tunes to database", inserted);

    Ok(())
}

fn show_stats(db: &Path) -> Result<()> {
    let store = TuneStore::open(db)?;
    let tunes = store.all_tunes()?;

    let mut per_book: BTreeMap<i64, usize> = BTreeMap::new();
    let mut types: BTreeSet<String> = BTreeSet::new();
    for tune in &tunes {
        *per_book.entry(tune.book_number).or_default() += 1;
        types.insert(tune.tune_type.to_lowercase());
    }

    println!("ABC Tunebook Statistics");
    println!("=======================");
    println!("Total tunes: {}", tunes.len());
    println!("Books: {}", per_book.len());
    println!("Distinct tune types: {}", types.len());
    println!();
    for (book, count) in &per_book {
        println!("  Book {}: {} tunes", book, count);
    }

    Ok(())
}

fn print_results(
    results: &[StoredTune],
    json: bool,
    header: &str,
    line: impl Fn(&StoredTune) -> String,
) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(results)?);
        return Ok(());
    }

    println!("{}", header);
    for tune in results {
        println!("{}", line(tune));
    }

    Ok(())
}
