//! Annotation payload errors.

use std::path::PathBuf;

/// Errors that can occur while loading frame annotations.
#[derive(Debug, thiserror::Error)]
pub enum AnnotationError {
    #[error("Annotation file not found: {path}")]
    FileNotFound { path: PathBuf },

    #[error("Failed to read annotation file: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Invalid annotation payload: {0}")]
    Parse(#[from] serde_json::Error),
}
