//! Catalog building for ABC book corpora
//!
//! # Error Handling Strategy
//!
//! The indexer combines graceful degradation with a single hard boundary:
//!
//! - **Missing corpus directory**: Reported once to stderr; the build yields
//!   zero records rather than aborting the program.
//!
//! - **File-level failures**: Unreadable `.abc` files are logged with the
//!   offending path and contribute zero tunes; one bad file never aborts the
//!   batch. Likewise unreadable book directories are skipped with a warning.
//!
//! - **Segment-level "failures"**: Untitled segments are dropped silently by
//!   the parser; only per-file tune counts are surfaced.
//!
//! - **Summary reporting**: Per-book and per-file progress lines go to stderr,
//!   giving users visibility into what each file contributed.

pub mod book_discovery;
pub mod builder;

pub use book_discovery::discover_books;
pub use builder::build_catalog;
