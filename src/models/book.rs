use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookInfo {
    pub book_number: i64,
    pub book_dir: PathBuf,
    pub abc_files: Vec<PathBuf>,
}
