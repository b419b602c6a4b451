use std::path::Path;

use anyhow::{Context, Result};
use rusqlite::{Connection, Row, params};

use crate::models::{StoredTune, TuneRecord};

const SCHEMA: &str = "CREATE TABLE IF NOT EXISTS tunes (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    book_number INTEGER,
    source_file TEXT,
    title TEXT,
    tune_type TEXT,
    key TEXT,
    meter TEXT,
    notation_excerpt TEXT
)";

const COLUMNS: &str =
    "id, book_number, source_file, title, tune_type, key, meter, notation_excerpt";

/// SQLite-backed store for tune records.
///
/// Owns one connection for the duration of a batch; dropping the store closes
/// it. The schema is created idempotently on open, so pointing at a fresh
/// path and pointing at an existing database behave the same.
pub struct TuneStore {
    conn: Connection,
}

impl TuneStore {
    /// Open (or create) a tune database at the given path.
    pub fn open(path: &Path) -> Result<Self> {
        let conn = Connection::open(path)
            .with_context(|| format!("Failed to open tune database: {}", path.display()))?;
        Self::with_connection(conn)
    }

    /// Open an in-memory store, used by tests.
    pub fn open_in_memory() -> Result<Self> {
        let conn =
            Connection::open_in_memory().context("Failed to open in-memory tune database")?;
        Self::with_connection(conn)
    }

    fn with_connection(conn: Connection) -> Result<Self> {
        conn.execute(SCHEMA, []).context("Failed to create tunes table")?;
        Ok(Self { conn })
    }

    /// Append records to the store inside a single transaction.
    ///
    /// Returns the number of inserted rows. The transaction rolls back on any
    /// failure, so a batch is either fully stored or not at all.
    pub fn insert_tunes(&mut self, records: &[TuneRecord]) -> Result<usize> {
        let tx = self.conn.transaction().context("Failed to begin insert transaction")?;
        {
            let mut stmt = tx.prepare(
                "INSERT INTO tunes (book_number, source_file, title, tune_type, key, meter, notation_excerpt)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
            )?;
            for record in records {
                stmt.execute(params![
                    record.book_number,
                    record.source_file,
                    record.title,
                    record.tune_type,
                    record.key,
                    record.meter,
                    record.notation_excerpt,
                ])?;
            }
        }
        tx.commit().context("Failed to commit tune inserts")?;
        Ok(records.len())
    }

    /// All stored tunes in insertion order.
    pub fn all_tunes(&self) -> Result<Vec<StoredTune>> {
        let sql = format!("SELECT {} FROM tunes ORDER BY id", COLUMNS);
        self.query_tunes(&sql, params![])
    }

    /// Tunes from one book (exact book-number match).
    pub fn tunes_by_book(&self, book_number: i64) -> Result<Vec<StoredTune>> {
        let sql = format!("SELECT {} FROM tunes WHERE book_number = ?1 ORDER BY id", COLUMNS);
        self.query_tunes(&sql, params![book_number])
    }

    /// Tunes whose type contains the given term, case-insensitively.
    pub fn tunes_by_type(&self, term: &str) -> Result<Vec<StoredTune>> {
        let sql = format!(
            "SELECT {} FROM tunes WHERE lower(tune_type) LIKE ?1 ESCAPE '\\' ORDER BY id",
            COLUMNS
        );
        self.query_tunes(&sql, params![contains_pattern(term)])
    }

    /// Tunes whose title contains the given term, case-insensitively.
    pub fn search_titles(&self, term: &str) -> Result<Vec<StoredTune>> {
        let sql = format!(
            "SELECT {} FROM tunes WHERE lower(title) LIKE ?1 ESCAPE '\\' ORDER BY id",
            COLUMNS
        );
        self.query_tunes(&sql, params![contains_pattern(term)])
    }

    /// Number of stored tunes.
    pub fn count(&self) -> Result<i64> {
        self.conn
            .query_row("SELECT COUNT(*) FROM tunes", [], |row| row.get(0))
            .context("Failed to count tunes")
    }

    fn query_tunes<P: rusqlite::Params>(&self, sql: &str, params: P) -> Result<Vec<StoredTune>> {
        let mut stmt = self.conn.prepare(sql).context("Failed to prepare tune query")?;
        let rows = stmt.query_map(params, row_to_tune).context("Failed to query tunes")?;

        let mut tunes = Vec::new();
        for row in rows {
            tunes.push(row.context("Failed to read tune row")?);
        }
        Ok(tunes)
    }
}

fn row_to_tune(row: &Row<'_>) -> rusqlite::Result<StoredTune> {
    Ok(StoredTune {
        id: row.get(0)?,
        book_number: row.get(1)?,
        source_file: row.get(2)?,
        title: row.get(3)?,
        tune_type: row.get(4)?,
        key: row.get(5)?,
        meter: row.get(6)?,
        notation_excerpt: row.get(7)?,
    })
}

/// Lowercased `%term%` pattern with LIKE wildcards escaped, so the query is a
/// plain substring match rather than a pattern match.
fn contains_pattern(term: &str) -> String {
    let mut pattern = String::with_capacity(term.len() + 2);
    pattern.push('%');
    for c in term.to_lowercase().chars() {
        if matches!(c, '%' | '_' | '\\') {
            pattern.push('\\');
        }
        pattern.push(c);
    }
    pattern.push('%');
    pattern
}
