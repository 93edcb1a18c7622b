use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum StrideError {
    #[error("input text is empty: nothing to search")]
    EmptyInput,

    #[error("invalid search parameters: {0}")]
    InvalidParameters(String),

    #[error("search cancelled before completion")]
    Cancelled,

    #[error("text extraction failed: {0}")]
    Extraction(String),

    #[error("pdftotext not found. Install poppler: brew install poppler (macOS) or apt install poppler-utils (Linux)")]
    PdftotextNotFound,

    #[error("pdftotext failed with exit code {code}: {stderr}")]
    PdftotextFailed { code: i32, stderr: String },

    #[error("failed to load phrase set from {path}: {reason}")]
    PhraseSetLoad { path: PathBuf, reason: String },

    #[error("invalid phrase set: {0}")]
    PhraseSetInvalid(String),

    #[error("failed to load search config from {path}: {reason}")]
    ConfigLoad { path: PathBuf, reason: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
