//! Persistence for curriculum files - load/save JSON.

use std::fs::{self, File};
use std::io::BufWriter;
use std::path::Path;

use sha2::{Digest, Sha256};
use tracing::debug;

use crate::error::{BenchtopError, Result};

use super::model::Curriculum;
use super::source::CurriculumSource;

impl Curriculum {
    /// Parse curriculum JSON held in memory. No source metadata is recorded.
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a curriculum from a JSON file and record where it came from.
    ///
    /// # Example
    ///
    /// ```no_run
    /// # use benchtop::Curriculum;
    /// let curriculum = Curriculum::load("electronics.json").unwrap();
    /// println!("Modules: {}", curriculum.module_count());
    /// ```
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        let contents = fs::read(path).map_err(|e| BenchtopError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        let mut hasher = Sha256::new();
        hasher.update(&contents);
        let hash = format!("sha256:{:x}", hasher.finalize());

        let mut curriculum: Curriculum = serde_json::from_slice(&contents).map_err(|e| {
            BenchtopError::InvalidCurriculum(format!(
                "Failed to parse curriculum '{}': {}",
                path.display(),
                e
            ))
        })?;

        curriculum.source = Some(CurriculumSource::new(
            path.to_path_buf(),
            hash,
            contents.len() as u64,
            curriculum.categories.len(),
            curriculum.module_count(),
            curriculum.element_count(),
        ));

        debug!(
            path = %path.display(),
            modules = curriculum.module_count(),
            elements = curriculum.element_count(),
            "curriculum loaded"
        );

        Ok(curriculum)
    }

    /// Save the curriculum as pretty-printed JSON.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();

        // Create parent directory if needed
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).map_err(|e| BenchtopError::Io {
                    path: parent.to_path_buf(),
                    source: e,
                })?;
            }
        }

        let file = File::create(path).map_err(|e| BenchtopError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        let writer = BufWriter::new(file);
        serde_json::to_writer_pretty(writer, self)?;

        Ok(())
    }
}
