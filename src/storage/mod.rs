//! SQLite persistence for the tune catalog
//!
//! Records are appended to a `tunes` table keyed by an auto-incrementing
//! rowid, and read back through three filter queries: exact book number,
//! case-insensitive tune-type substring, and case-insensitive title
//! substring.
//!
//! The connection is owned by an explicit [`TuneStore`] handle scoped to the
//! caller; there is no shared global connection.

pub mod db;

pub use db::TuneStore;
