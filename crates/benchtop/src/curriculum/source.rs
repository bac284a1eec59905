//! Provenance for curriculum files.

use std::path::PathBuf;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Metadata about a loaded curriculum file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurriculumSource {
    /// File name without path.
    pub file: String,
    /// Full path to the file.
    pub path: PathBuf,
    /// SHA-256 hash of the file contents.
    pub hash: String,
    /// File size in bytes.
    pub size_bytes: u64,
    /// Number of categories.
    pub category_count: usize,
    /// Number of modules across all categories.
    pub module_count: usize,
    /// Number of elements across all modules.
    pub element_count: usize,
    /// When the file was loaded.
    pub loaded_at: DateTime<Utc>,
}

impl CurriculumSource {
    /// Create metadata for a file that has just been loaded.
    pub fn new(
        path: PathBuf,
        hash: String,
        size_bytes: u64,
        category_count: usize,
        module_count: usize,
        element_count: usize,
    ) -> Self {
        let file = path
            .file_name()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();

        Self {
            file,
            path,
            hash,
            size_bytes,
            category_count,
            module_count,
            element_count,
            loaded_at: Utc::now(),
        }
    }
}
