//! Shared test utilities for integration tests
#![allow(dead_code)]

use std::fs;
use std::path::Path;

use tempfile::TempDir;

/// Builder for creating test corpus directory structures
pub struct CorpusBuilder {
    temp_dir: TempDir,
}

impl CorpusBuilder {
    /// Create a new builder with an empty corpus directory
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        Self { temp_dir }
    }

    /// Get the path to the corpus directory
    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Add a file with raw content under the given book directory
    pub fn with_file(self, book: &str, file_name: &str, content: &str) -> Self {
        let book_dir = self.temp_dir.path().join(book);
        fs::create_dir_all(&book_dir).expect("Failed to create book dir");
        fs::write(book_dir.join(file_name), content).expect("Failed to write file");
        self
    }

    /// Add a file built from tune builders under the given book directory
    pub fn with_tunes(self, book: &str, file_name: &str, tunes: &[TuneBuilder]) -> Self {
        let content: String = tunes.iter().map(|t| t.to_abc()).collect();
        self.with_file(book, file_name, &content)
    }

    /// Add a file with raw bytes (for encoding tests)
    pub fn with_raw_bytes(self, book: &str, file_name: &str, bytes: &[u8]) -> Self {
        let book_dir = self.temp_dir.path().join(book);
        fs::create_dir_all(&book_dir).expect("Failed to create book dir");
        fs::write(book_dir.join(file_name), bytes).expect("Failed to write file");
        self
    }

    /// Build and return the temp directory (consumes self)
    pub fn build(self) -> TempDir {
        self.temp_dir
    }
}

impl Default for CorpusBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for one ABC tune block
pub struct TuneBuilder {
    index: usize,
    title: Option<String>,
    tune_type: Option<String>,
    key: Option<String>,
    meter: Option<String>,
    body: Option<String>,
}

impl TuneBuilder {
    pub fn new(index: usize) -> Self {
        Self { index, title: None, tune_type: None, key: None, meter: None, body: None }
    }

    pub fn title(mut self, title: &str) -> Self {
        self.title = Some(title.to_string());
        self
    }

    pub fn tune_type(mut self, tune_type: &str) -> Self {
        self.tune_type = Some(tune_type.to_string());
        self
    }

    pub fn key(mut self, key: &str) -> Self {
        self.key = Some(key.to_string());
        self
    }

    pub fn meter(mut self, meter: &str) -> Self {
        self.meter = Some(meter.to_string());
        self
    }

    pub fn body(mut self, body: &str) -> Self {
        self.body = Some(body.to_string());
        self
    }

    /// Render this tune as an ABC block opened by its X: marker
    pub fn to_abc(&self) -> String {
        let mut block = format!("X:{}\n", self.index);
        if let Some(ref title) = self.title {
            block.push_str(&format!("T:{}\n", title));
        }
        if let Some(ref tune_type) = self.tune_type {
            block.push_str(&format!("R:{}\n", tune_type));
        }
        if let Some(ref meter) = self.meter {
            block.push_str(&format!("M:{}\n", meter));
        }
        if let Some(ref key) = self.key {
            block.push_str(&format!("K:{}\n", key));
        }
        if let Some(ref body) = self.body {
            block.push_str(body);
            block.push('\n');
        }
        block
    }
}

/// A small realistic corpus: two books, three files, five titled tunes and
/// one untitled block that should be dropped.
pub fn realistic_corpus() -> TempDir {
    CorpusBuilder::new()
        .with_tunes(
            "1",
            "reels.abc",
            &[
                TuneBuilder::new(1)
                    .title("Cooley's")
                    .tune_type("reel")
                    .meter("4/4")
                    .key("Edor")
                    .body("|:D2|EB{c}BA B2 EB|~B2 AB dBAG|"),
                TuneBuilder::new(2)
                    .title("The Silver Spear")
                    .tune_type("reel")
                    .meter("4/4")
                    .key("D")
                    .body("FA A2 BAFA|dAFA BA A2|"),
            ],
        )
        .with_tunes(
            "1",
            "jigs.abc",
            &[
                TuneBuilder::new(1)
                    .title("The Lilting Banshee")
                    .tune_type("jig")
                    .meter("6/8")
                    .key("Ador")
                    .body("eAA eAA|BAB GBd|"),
                // Untitled block: parsed but never enters the catalog
                TuneBuilder::new(2).tune_type("jig").key("D"),
            ],
        )
        .with_tunes(
            "2",
            "airs.abc",
            &[
                TuneBuilder::new(1)
                    .title("She Moved Through the Fair")
                    .tune_type("air")
                    .meter("3/4")
                    .key("Gmix"),
                TuneBuilder::new(2).title("Down by the Salley Gardens").key("G"),
            ],
        )
        .build()
}
