use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use crate::models::BookInfo;

/// Discover numbered book directories under `base_dir` and their `.abc` files.
///
/// Each immediate subdirectory whose name parses as an integer is treated as
/// a book, with the directory name as the book number. Subdirectories with
/// non-numeric names are skipped silently, as are files that do not carry the
/// `.abc` extension.
///
/// # Arguments
///
/// * `base_dir` - Path to the corpus directory containing numbered book
///   subdirectories
///
/// # Returns
///
/// Returns a Vec of [`BookInfo`] sorted by book number, with each book's
/// files sorted by name so that repeated runs over the same corpus produce
/// the same catalog order.
///
/// # Errors
///
/// Returns an error if `base_dir` cannot be read at all. Individual book
/// directories that cannot be read are logged as warnings and skipped
/// (graceful degradation).
pub fn discover_books(base_dir: &Path) -> Result<Vec<BookInfo>> {
    let entries = fs::read_dir(base_dir)
        .with_context(|| format!("Failed to read corpus directory: {}", base_dir.display()))?;

    let mut books = Vec::new();

    for entry in entries {
        let entry = entry.context("Failed to read directory entry")?;
        let path = entry.path();

        // Skip if not a directory
        if !path.is_dir() {
            continue;
        }

        let dir_name = match path.file_name() {
            Some(name) => name.to_string_lossy().to_string(),
            None => continue,
        };

        // The directory name is the book number; anything non-numeric is not
        // a book and never reaches the parser.
        let book_number: i64 = match dir_name.trim().parse() {
            Ok(num) => num,
            Err(_) => continue,
        };

        let mut abc_files = Vec::new();
        match fs::read_dir(&path) {
            Ok(files) => {
                for file in files.flatten() {
                    let file_path = file.path();
                    if file_path.is_file()
                        && file_path.extension().is_some_and(|ext| ext == "abc")
                    {
                        abc_files.push(file_path);
                    }
                }
            }
            Err(e) => {
                eprintln!("Warning: Failed to read book directory {}: {}", path.display(), e);
                continue;
            }
        }

        abc_files.sort();
        books.push(BookInfo { book_number, book_dir: path, abc_files });
    }

    books.sort_by_key(|book| book.book_number);
    Ok(books)
}
