//! Scene processing command
//!
//! Runs the full pipeline over a scene archive and prints the
//! resulting manifest as JSON.

use clap::ArgMatches;
use log::info;
use std::path::{Path, PathBuf};

use crate::commands::command_traits::Command;
use crate::convert::OutputFormat;
use crate::errors::{SceneError, SceneResult};
use crate::pipeline::{SceneConfig, ScenePipeline};
use crate::utils::logger::Logger;

/// Command for processing a scene archive end to end
pub struct ProcessCommand<'a> {
    /// Path to the input archive
    input_file: String,
    /// Scene identifier
    display_id: String,
    /// Pipeline settings
    config: SceneConfig,
    /// Logger for recording operations
    logger: &'a Logger,
}

impl<'a> ProcessCommand<'a> {
    /// Create a new process command
    ///
    /// The display id defaults to the archive's file stem when not
    /// given explicitly.
    ///
    /// # Arguments
    /// * `args` - CLI argument matches from clap
    /// * `logger` - Logger for recording operations
    pub fn new(args: &ArgMatches, logger: &'a Logger) -> SceneResult<Self> {
        let input_file = args.get_one::<String>("input")
            .ok_or_else(|| SceneError::GenericError("Missing input archive".to_string()))?
            .clone();

        let display_id = match args.get_one::<String>("display-id") {
            Some(id) => id.clone(),
            None => Path::new(&input_file)
                .file_stem()
                .map(|s| s.to_string_lossy().into_owned())
                .ok_or_else(|| {
                    SceneError::GenericError(format!("Cannot derive display id from {}", input_file))
                })?,
        };

        let mut config = SceneConfig::default();
        if let Some(dir) = args.get_one::<String>("data-dir") {
            config.data_dir = PathBuf::from(dir);
        }
        if let Some(dir) = args.get_one::<String>("static-dir") {
            config.static_dir = PathBuf::from(dir);
        }
        if let Some(url) = args.get_one::<String>("base-url") {
            config.base_url = url.trim_end_matches('/').to_string();
        }
        if let Some(name) = args.get_one::<String>("format") {
            config.format = name.parse::<OutputFormat>()?;
        }

        Ok(ProcessCommand {
            input_file,
            display_id,
            config,
            logger,
        })
    }
}

impl<'a> Command for ProcessCommand<'a> {
    fn execute(&self) -> SceneResult<()> {
        info!("Processing scene archive {}", self.input_file);

        let pipeline = ScenePipeline::new(self.config.clone());
        let report = pipeline.process(Path::new(&self.input_file), &self.display_id)?;

        let json = serde_json::to_string_pretty(&report)
            .map_err(|e| SceneError::GenericError(format!("Failed to render report: {}", e)))?;
        println!("{}", json);

        self.logger.log(&format!(
            "Processed scene {}: {} converted, {} skipped",
            self.display_id,
            report.manifest.len(),
            report.skipped.len()
        ))?;

        Ok(())
    }
}
