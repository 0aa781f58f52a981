//! Scene processing orchestration
//!
//! Runs a scene archive through extraction, band selection and
//! conversion, collecting the results into a `SceneReport`. A band
//! that fails to convert is recorded and skipped; extraction failure
//! aborts the whole run.

use log::{error, info, warn};
use std::path::{Path, PathBuf};

use crate::archive::ArchiveExtractor;
use crate::bands::{select_band_files, BandFile};
use crate::convert::{convert_band, OutputFormat};
use crate::errors::SceneResult;
use crate::pipeline::report::{ManifestEntry, SceneReport, SkippedBand};
use crate::utils::progress::BandProgress;

/// Settings for a pipeline run
#[derive(Debug, Clone)]
pub struct SceneConfig {
    /// Root directory scenes are extracted under
    pub data_dir: PathBuf,
    /// Root directory rendered images are written under
    pub static_dir: PathBuf,
    /// Base URL images are served from
    pub base_url: String,
    /// Output image format
    pub format: OutputFormat,
}

impl Default for SceneConfig {
    fn default() -> Self {
        SceneConfig {
            data_dir: PathBuf::from("data"),
            static_dir: PathBuf::from("static"),
            base_url: "https://nasa-map.elyra.games".to_string(),
            format: OutputFormat::Jpeg,
        }
    }
}

/// Runs scene archives through the full ingestion pipeline
pub struct ScenePipeline {
    config: SceneConfig,
}

impl ScenePipeline {
    pub fn new(config: SceneConfig) -> Self {
        ScenePipeline { config }
    }

    /// Processes one scene archive end to end
    ///
    /// Extracts the archive into `{data_dir}/{display_id}`, selects the
    /// band files, converts each into `{static_dir}/{display_id}`, and
    /// returns the manifest. Bands that fail conversion end up in the
    /// report's skipped list; the run as a whole still succeeds.
    ///
    /// # Arguments
    /// * `archive_path` - Path to the scene's tar archive
    /// * `display_id` - Scene identifier, used to key the directories
    pub fn process(&self, archive_path: &Path, display_id: &str) -> SceneResult<SceneReport> {
        info!("Processing scene {} from {}", display_id, archive_path.display());

        let scene_dir = self.config.data_dir.join(display_id);
        ArchiveExtractor::extract(archive_path, &scene_dir)?;

        let band_files = select_band_files(&scene_dir)?;
        let output_dir = self.config.static_dir.join(display_id);

        let mut report = SceneReport::new(display_id);
        let progress = BandProgress::new(band_files.len() as u64);

        for band_file in &band_files {
            match self.convert_one(band_file, &output_dir, display_id) {
                Ok(entry) => report.manifest.push(entry),
                Err(reason) => {
                    warn!("Skipping band file {}: {}", band_file.file_name, reason);
                    report.skipped.push(SkippedBand {
                        file: band_file.file_name.clone(),
                        reason,
                    });
                }
            }
            progress.band_done(&band_file.file_name);
        }
        progress.finish();

        if report.manifest.is_empty() && !report.skipped.is_empty() {
            error!("No band of scene {} could be converted", display_id);
        }
        info!(
            "Scene {} done: {} converted, {} skipped",
            display_id,
            report.manifest.len(),
            report.skipped.len()
        );
        Ok(report)
    }

    /// Converts one band file and builds its manifest entry
    fn convert_one(
        &self,
        band_file: &BandFile,
        output_dir: &Path,
        display_id: &str,
    ) -> Result<ManifestEntry, String> {
        let output_path = convert_band(&band_file.path, self.config.format, output_dir)
            .map_err(|e| e.to_string())?;

        let output_name = output_path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .ok_or_else(|| "Output path has no file name".to_string())?;

        Ok(ManifestEntry {
            band: band_file.band.label(),
            image: format!("{}/static/{}/{}", self.config.base_url, display_id, output_name),
        })
    }
}
