use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ProcessingError>;

#[derive(Error, Debug)]
pub enum ProcessingError {
    #[error("File I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Required input file not found: {}", path.display())]
    MissingFile { path: PathBuf },

    #[error("Malformed header in {}: expected {expected}", path.display())]
    MalformedHeader { path: PathBuf, expected: String },

    #[error("No common years between {left} and {right}")]
    EmptyIntersection { left: String, right: String },

    #[error("Invalid data format: {0}")]
    InvalidFormat(String),
}

impl ProcessingError {
    /// Check that a required input exists before a parser opens it.
    pub fn require_file(path: &std::path::Path) -> Result<()> {
        if path.is_file() {
            Ok(())
        } else {
            Err(ProcessingError::MissingFile {
                path: path.to_path_buf(),
            })
        }
    }
}
