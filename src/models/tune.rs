use serde::Serialize;

/// Fields extracted from one tune segment by the parser.
///
/// Carries no provenance: the book number and source file are only known to
/// the caller and are attached via [`ParsedTune::into_record`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParsedTune {
    pub title: String,
    pub tune_type: String,
    pub key: String,
    pub meter: String,
    pub notation_excerpt: String,
}

impl ParsedTune {
    /// Attach book and file provenance, producing a complete record.
    pub fn into_record(self, book_number: i64, source_file: String) -> TuneRecord {
        TuneRecord {
            book_number,
            source_file,
            title: self.title,
            tune_type: self.tune_type,
            key: self.key,
            meter: self.meter,
            notation_excerpt: self.notation_excerpt,
        }
    }
}

/// A fully-attributed tune, ready for insertion into the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TuneRecord {
    pub book_number: i64,
    pub source_file: String,
    pub title: String,
    pub tune_type: String,
    pub key: String,
    pub meter: String,
    pub notation_excerpt: String,
}

/// A tune row read back from the database.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StoredTune {
    pub id: i64,
    pub book_number: i64,
    pub source_file: String,
    pub title: String,
    pub tune_type: String,
    pub key: String,
    pub meter: String,
    pub notation_excerpt: String,
}
