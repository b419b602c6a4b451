//! Data models for the ABC tune catalog.
//!
//! This module defines the data structures used throughout the application:
//!
//! - [`ParsedTune`] - Fields extracted from one tune segment, before provenance
//! - [`TuneRecord`] - A parsed tune plus its book number and source file
//! - [`StoredTune`] - A database row: a tune record plus its rowid
//! - [`BookInfo`] - Discovered book directory metadata and file paths
//!
//! These models use serde for JSON serialization so query results can be
//! emitted as JSON from the command line.

pub mod book;
pub mod tune;

pub use book::BookInfo;
pub use tune::{ParsedTune, StoredTune, TuneRecord};
