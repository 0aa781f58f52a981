//! Archive extraction command
//!
//! Unpacks a scene archive into a directory without running the rest
//! of the pipeline, for inspecting what a scene contains.

use clap::ArgMatches;
use log::info;
use std::path::{Path, PathBuf};

use crate::archive::ArchiveExtractor;
use crate::commands::command_traits::Command;
use crate::errors::{SceneError, SceneResult};
use crate::utils::logger::Logger;

/// Command for extracting a scene archive
pub struct ExtractCommand<'a> {
    /// Path to the input archive
    input_file: String,
    /// Directory to extract into
    target_dir: PathBuf,
    /// Logger for recording operations
    logger: &'a Logger,
}

impl<'a> ExtractCommand<'a> {
    /// Create a new extract command
    ///
    /// # Arguments
    /// * `args` - CLI argument matches from clap
    /// * `logger` - Logger for recording operations
    pub fn new(args: &ArgMatches, logger: &'a Logger) -> SceneResult<Self> {
        let input_file = args.get_one::<String>("input")
            .ok_or_else(|| SceneError::GenericError("Missing input archive".to_string()))?
            .clone();

        // Default the target directory to the archive's file stem
        let target_dir = match args.get_one::<String>("output") {
            Some(dir) => PathBuf::from(dir),
            None => {
                let stem = Path::new(&input_file)
                    .file_stem()
                    .map(|s| s.to_string_lossy().into_owned())
                    .ok_or_else(|| {
                        SceneError::GenericError(format!("Cannot derive directory from {}", input_file))
                    })?;
                PathBuf::from(stem)
            }
        };

        Ok(ExtractCommand {
            input_file,
            target_dir,
            logger,
        })
    }
}

impl<'a> Command for ExtractCommand<'a> {
    fn execute(&self) -> SceneResult<()> {
        info!("Extracting {} into {}", self.input_file, self.target_dir.display());

        ArchiveExtractor::extract(Path::new(&self.input_file), &self.target_dir)?;

        info!("Extraction successful");
        self.logger.log(&format!(
            "Extracted {} into {}",
            self.input_file,
            self.target_dir.display()
        ))?;

        Ok(())
    }
}
