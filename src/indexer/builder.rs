use std::fs;
use std::path::Path;

use anyhow::Result;
use rayon::prelude::*;

use crate::indexer::book_discovery::discover_books;
use crate::models::TuneRecord;
use crate::parsers::abc::extract_tunes;

/// Build the full tune catalog for a corpus directory.
///
/// Discovers numbered book directories, reads every `.abc` file with lossy
/// UTF-8 decoding, runs the tune extractor over each file's content, and
/// attaches the book number and source file name to every parsed tune.
///
/// Files within a book are parsed on the rayon thread pool; the extractor is
/// a pure function, so this needs no coordination. Output order stays
/// deterministic: books by number, files by name, tunes in segment order.
///
/// # Arguments
///
/// * `base_dir` - Path to the corpus directory containing numbered book
///   subdirectories
///
/// # Returns
///
/// Returns a Vec of [`TuneRecord`]. A missing corpus directory is reported to
/// stderr and yields an empty catalog rather than an error, so one bad path
/// never turns into a hard abort for callers that batch over several corpora.
///
/// # Errors
///
/// Returns an error if the corpus directory exists but cannot be read.
/// Individual unreadable files are logged as warnings and contribute zero
/// tunes.
///
/// # Examples
///
/// ```no_run
/// use std::path::PathBuf;
/// use abc_tunebook::build_catalog;
///
/// let corpus = PathBuf::from("/home/alice/abc_books");
/// let catalog = build_catalog(&corpus)?;
/// println!("Parsed {} tunes", catalog.len());
/// # Ok::<(), anyhow::Error>(())
/// ```
pub fn build_catalog(base_dir: &Path) -> Result<Vec<TuneRecord>> {
    if !base_dir.exists() {
        eprintln!("ERROR: Corpus directory not found at {}", base_dir.display());
        return Ok(Vec::new());
    }

    eprintln!("Processing files from: {}", base_dir.display());

    let books = discover_books(base_dir)?;
    let mut catalog = Vec::new();

    for book in books {
        eprintln!("Processing book {}...", book.book_number);

        // Fan the files of this book out over the rayon pool; collect
        // preserves file order, so the catalog stays deterministic.
        let per_file: Vec<(String, Vec<TuneRecord>)> = book
            .abc_files
            .par_iter()
            .map(|file_path| {
                let file_name = file_path
                    .file_name()
                    .map(|name| name.to_string_lossy().to_string())
                    .unwrap_or_default();
                let records = parse_file(file_path, book.book_number, &file_name);
                (file_name, records)
            })
            .collect();

        for (file_name, records) in per_file {
            eprintln!("  - {} -> {} tunes", file_name, records.len());
            catalog.extend(records);
        }
    }

    Ok(catalog)
}

/// Read and parse one `.abc` file, attaching provenance to each tune.
///
/// Read failures are downgraded to "this file contributed zero tunes": the
/// path is logged and an empty Vec returned, so the batch continues.
fn parse_file(file_path: &Path, book_number: i64, file_name: &str) -> Vec<TuneRecord> {
    let bytes = match fs::read(file_path) {
        Ok(bytes) => bytes,
        Err(e) => {
            eprintln!("Warning: Failed to read {}: {}", file_path.display(), e);
            return Vec::new();
        }
    };

    // Undecodable byte sequences are replaced, never fatal
    let content = String::from_utf8_lossy(&bytes);

    extract_tunes(&content)
        .into_iter()
        .map(|tune| tune.into_record(book_number, file_name.to_string()))
        .collect()
}
