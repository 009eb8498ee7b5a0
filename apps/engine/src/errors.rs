use thiserror::Error;

/// Engine-level error type.
///
/// Only the adapter boundary produces errors (bad file type, unreadable
/// file). Heuristic misses inside the analysis pipeline degrade to `None`
/// or empty collections and are never surfaced as errors.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Unsupported file format: {0}")]
    UnsupportedFormat(String),

    #[error("Text extraction failed: {0}")]
    Extraction(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}
