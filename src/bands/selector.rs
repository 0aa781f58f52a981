//! Band file selection
//!
//! Walks an extracted scene directory and picks out the files worth
//! converting: regular `.tif` files carrying a valid band marker.

use log::{debug, info};
use std::fs;
use std::path::{Path, PathBuf};

use crate::bands::marker::BandNumber;
use crate::errors::{SceneError, SceneResult};

/// A convertible band file discovered in a scene directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BandFile {
    /// Full path to the file
    pub path: PathBuf,
    /// File name without directory components
    pub file_name: String,
    /// The spectral band this file carries
    pub band: BandNumber,
}

/// Checks whether a file name identifies a convertible band file
///
/// A file qualifies when it has a `.tif` extension and a band marker,
/// both matched case-insensitively.
pub fn is_convertible_band_file(file_name: &str) -> bool {
    let lower = file_name.to_lowercase();
    lower.ends_with(".tif") && BandNumber::from_file_name(file_name).is_some()
}

/// Selects the convertible band files in a scene directory
///
/// Only regular files directly inside `scene_dir` are considered;
/// subdirectories are not descended into. Files come back in directory
/// listing order.
pub fn select_band_files(scene_dir: &Path) -> SceneResult<Vec<BandFile>> {
    if !scene_dir.is_dir() {
        return Err(SceneError::NotFound(scene_dir.display().to_string()));
    }

    let mut band_files = Vec::new();
    for entry in fs::read_dir(scene_dir)? {
        let entry = entry?;
        if !entry.file_type()?.is_file() {
            continue;
        }

        let file_name = entry.file_name().to_string_lossy().into_owned();
        if !is_convertible_band_file(&file_name) {
            debug!("Skipping non-band file: {}", file_name);
            continue;
        }

        // The predicate above guarantees a marker is present
        if let Some(band) = BandNumber::from_file_name(&file_name) {
            band_files.push(BandFile {
                path: entry.path(),
                file_name,
                band,
            });
        }
    }

    info!(
        "Selected {} band files in {}",
        band_files.len(),
        scene_dir.display()
    );
    Ok(band_files)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;

    #[test]
    fn test_predicate_requires_extension_and_marker() {
        assert!(is_convertible_band_file("scene_b4.tif"));
        assert!(is_convertible_band_file("SCENE_B4.TIF"));
        assert!(!is_convertible_band_file("scene_b4.txt"));
        assert!(!is_convertible_band_file("scene_b4.tiff"));
        assert!(!is_convertible_band_file("readme.tif"));
        assert!(!is_convertible_band_file("scene_b12.tif"));
    }

    #[test]
    fn test_select_typical_scene() {
        let dir = tempfile::tempdir().unwrap();
        for name in ["scene_b4.tif", "scene_b5.tif", "README.txt", "scene_mtl.txt"] {
            File::create(dir.path().join(name)).unwrap();
        }

        let mut files = select_band_files(dir.path()).unwrap();
        files.sort_by_key(|f| f.band);

        let labels: Vec<String> = files.iter().map(|f| f.band.label()).collect();
        assert_eq!(labels, vec!["b4", "b5"]);
        assert_eq!(files[0].file_name, "scene_b4.tif");
        assert!(files[0].path.ends_with("scene_b4.tif"));
    }

    #[test]
    fn test_select_ignores_subdirectories() {
        let dir = tempfile::tempdir().unwrap();
        let sub = dir.path().join("nested_b3.tif");
        fs::create_dir(&sub).unwrap();
        File::create(sub.join("scene_b2.tif")).unwrap();
        File::create(dir.path().join("scene_b1.tif")).unwrap();

        let files = select_band_files(dir.path()).unwrap();
        assert_eq!(files.len(), 1);
        assert_eq!(files[0].band, BandNumber::new(1).unwrap());
    }

    #[test]
    fn test_select_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let result = select_band_files(&dir.path().join("absent"));
        assert!(matches!(result, Err(SceneError::NotFound(_))));
    }

    #[test]
    fn test_select_empty_directory() {
        let dir = tempfile::tempdir().unwrap();
        assert!(select_band_files(dir.path()).unwrap().is_empty());
    }
}
