use std::path::{Path, PathBuf};

use crate::archive::ArchiveExtractor;
use crate::convert::{convert_band, OutputFormat};
use crate::errors::SceneResult;
use crate::pipeline::{SceneConfig, ScenePipeline, SceneReport};
use crate::utils::logger::Logger;

/// Main interface to the SceneKit library
pub struct SceneKit {
    config: SceneConfig,
    logger: Logger,
}

impl SceneKit {
    /// Create a new SceneKit instance with default settings
    ///
    /// # Arguments
    /// * `log_file` - Optional path to log file, defaults to "scenekit.log"
    ///
    /// # Returns
    /// A SceneKit instance or an error if initialization fails
    pub fn new(log_file: Option<&str>) -> SceneResult<Self> {
        Self::with_config(log_file, SceneConfig::default())
    }

    /// Create a SceneKit instance with explicit pipeline settings
    pub fn with_config(log_file: Option<&str>, config: SceneConfig) -> SceneResult<Self> {
        let log_path = log_file.unwrap_or("scenekit.log");
        let logger = Logger::new(log_path)?;
        Ok(SceneKit { config, logger })
    }

    /// Process a scene archive through the full pipeline
    ///
    /// Extracts the archive, converts every band file found inside, and
    /// returns the manifest of served image URLs.
    ///
    /// # Arguments
    /// * `archive_path` - Path to the scene's tar archive
    /// * `display_id` - Scene identifier keying the data and static directories
    pub fn process_scene(&self, archive_path: &str, display_id: &str) -> SceneResult<SceneReport> {
        let pipeline = ScenePipeline::new(self.config.clone());
        let report = pipeline.process(Path::new(archive_path), display_id)?;
        self.logger.log(&format!(
            "Processed scene {}: {} converted, {} skipped",
            display_id,
            report.manifest.len(),
            report.skipped.len()
        ))?;
        Ok(report)
    }

    /// Extract a scene archive without converting anything
    ///
    /// # Arguments
    /// * `archive_path` - Path to the tar archive
    /// * `target_dir` - Directory to extract into
    pub fn extract_archive(&self, archive_path: &str, target_dir: &str) -> SceneResult<()> {
        ArchiveExtractor::extract(Path::new(archive_path), Path::new(target_dir))
    }

    /// Convert a single band TIFF into a normalized grayscale image
    ///
    /// # Arguments
    /// * `input_path` - Path to the band TIFF
    /// * `output_dir` - Directory to write the image into
    /// * `format` - Output image format
    ///
    /// # Returns
    /// Path of the written image
    pub fn convert_band(
        &self,
        input_path: &str,
        output_dir: &str,
        format: OutputFormat,
    ) -> SceneResult<PathBuf> {
        convert_band(Path::new(input_path), format, Path::new(output_dir))
    }

    /// List the output format names the converter accepts
    pub fn list_output_formats(&self) -> &'static [&'static str] {
        OutputFormat::available_names()
    }
}
