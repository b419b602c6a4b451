//! ABC Tunebook - index and search tunes from ABC notation books
//!
//! This library provides tools for parsing and indexing collections of ABC
//! notation files organized into numbered "book" directories. It supports:
//!
//! - Extracting tune records (title, type, key, meter) from raw ABC text
//! - Discovering numbered book directories and their `.abc` files
//! - Building a full tune catalog from a corpus directory
//! - Storing and querying tunes in a SQLite database
//!
//! # Example
//!
//! ```no_run
//! use abc_tunebook::build_catalog;
//! use std::path::PathBuf;
//!
//! let corpus = PathBuf::from("/home/alice/abc_books");
//! let catalog = build_catalog(&corpus)?;
//! println!("Parsed {} tunes", catalog.len());
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod cli;
pub mod indexer;
pub mod models;
pub mod parsers;
pub mod storage;

// Re-export commonly used types
pub use indexer::builder::build_catalog;
pub use models::{ParsedTune, StoredTune, TuneRecord};
pub use parsers::abc::extract_tunes;
pub use storage::TuneStore;
