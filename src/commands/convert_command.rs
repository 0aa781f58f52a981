//! Band conversion command
//!
//! Converts a single band TIFF into a normalized grayscale web image,
//! bypassing archive extraction.

use clap::ArgMatches;
use log::info;
use std::path::{Path, PathBuf};

use crate::commands::command_traits::Command;
use crate::convert::{convert_band, OutputFormat};
use crate::errors::{SceneError, SceneResult};
use crate::utils::logger::Logger;

/// Command for converting a single band file
pub struct ConvertCommand<'a> {
    /// Path to the input band TIFF
    input_file: String,
    /// Directory to write the image into
    output_dir: PathBuf,
    /// Target image format
    format: OutputFormat,
    /// Logger for recording operations
    logger: &'a Logger,
}

impl<'a> ConvertCommand<'a> {
    /// Create a new convert command
    ///
    /// # Arguments
    /// * `args` - CLI argument matches from clap
    /// * `logger` - Logger for recording operations
    pub fn new(args: &ArgMatches, logger: &'a Logger) -> SceneResult<Self> {
        let input_file = args.get_one::<String>("input")
            .ok_or_else(|| SceneError::GenericError("Missing input file".to_string()))?
            .clone();

        let output_dir = args.get_one::<String>("output")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("converted_images"));

        let format = match args.get_one::<String>("format") {
            Some(name) => name.parse::<OutputFormat>()?,
            None => OutputFormat::Jpeg,
        };

        Ok(ConvertCommand {
            input_file,
            output_dir,
            format,
            logger,
        })
    }
}

impl<'a> Command for ConvertCommand<'a> {
    fn execute(&self) -> SceneResult<()> {
        info!(
            "Converting {} to {} in {}",
            self.input_file,
            self.format.extension(),
            self.output_dir.display()
        );

        let output = convert_band(Path::new(&self.input_file), self.format, &self.output_dir)?;

        println!("{}", output.display());
        self.logger.log(&format!(
            "Converted {} to {}",
            self.input_file,
            output.display()
        ))?;

        Ok(())
    }
}
