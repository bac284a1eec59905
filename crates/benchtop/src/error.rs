//! Error types for the Benchtop library.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for Benchtop operations.
///
/// Classification and probe resolution are total and never produce one of
/// these; errors only come from loading, looking up and exporting curriculum
/// content.
#[derive(Debug, Error)]
pub enum BenchtopError {
    /// Error reading or writing a file.
    #[error("IO error for '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Error from the CSV writer.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// No category with the given id.
    #[error("Unknown category: {0}")]
    UnknownCategory(String),

    /// No module with the given id.
    #[error("Unknown module: {0}")]
    UnknownModule(String),

    /// No element with the given id inside the module.
    #[error("Unknown element '{element}' in module '{module}'")]
    UnknownElement { module: String, element: String },

    /// Curriculum content failed structural validation.
    #[error("Invalid curriculum: {0}")]
    InvalidCurriculum(String),

    /// Text that does not name one of the probe classes.
    #[error("Unknown probe class: {0}")]
    UnknownClass(String),

    /// Export format not supported.
    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),
}

/// Result type alias for Benchtop operations.
pub type Result<T> = std::result::Result<T, BenchtopError>;
