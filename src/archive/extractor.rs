//! Tar archive extraction
//!
//! Unpacks a scene archive into a target directory, creating the
//! directory hierarchy as needed. Extraction overwrites files left
//! behind by a previous run of the same scene.

use log::{debug, info};
use std::fs::{self, File};
use std::path::Path;

use tar::Archive;

use crate::errors::{SceneError, SceneResult};

/// Extracts scene archives into working directories
pub struct ArchiveExtractor;

impl ArchiveExtractor {
    /// Extracts a tar archive into the target directory
    ///
    /// The target directory and any missing parents are created first.
    /// Entries with path components escaping the target directory are
    /// rejected by the unpacker.
    ///
    /// # Arguments
    /// * `archive_path` - Path to the tar archive
    /// * `target_dir` - Directory to extract into
    pub fn extract(archive_path: &Path, target_dir: &Path) -> SceneResult<()> {
        if !archive_path.exists() {
            return Err(SceneError::NotFound(archive_path.display().to_string()));
        }

        fs::create_dir_all(target_dir)?;
        debug!(
            "Extracting {} into {}",
            archive_path.display(),
            target_dir.display()
        );

        let file = File::open(archive_path)?;
        let mut archive = Archive::new(file);
        archive
            .unpack(target_dir)
            .map_err(|e| SceneError::InvalidArchive(e.to_string()))?;

        info!("Extracted {} into {}", archive_path.display(), target_dir.display());
        Ok(())
    }
}
