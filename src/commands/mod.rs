//! CLI command implementations
//!
//! Implementations of the operations the CLI exposes, using the
//! Command pattern.

pub mod command_traits;
pub mod convert_command;
pub mod extract_command;
pub mod process_command;

pub use command_traits::{Command, CommandFactory};
pub use convert_command::ConvertCommand;
pub use extract_command::ExtractCommand;
pub use process_command::ProcessCommand;

use clap::ArgMatches;

use crate::errors::SceneResult;
use crate::utils::logger::Logger;

/// Factory for creating command instances based on CLI arguments
///
/// Examines the command-line arguments and creates the appropriate
/// command instance for execution.
pub struct SceneKitCommandFactory;

impl SceneKitCommandFactory {
    /// Create a new factory instance
    pub fn new() -> Self {
        SceneKitCommandFactory
    }
}

impl Default for SceneKitCommandFactory {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> CommandFactory<'a> for SceneKitCommandFactory {
    fn create_command(&self, args: &ArgMatches, logger: &'a Logger) -> SceneResult<Box<dyn Command + 'a>> {
        if args.get_flag("extract") {
            Ok(Box::new(ExtractCommand::new(args, logger)?))
        } else if args.get_flag("convert") {
            Ok(Box::new(ConvertCommand::new(args, logger)?))
        } else {
            // Default to the full processing pipeline
            Ok(Box::new(ProcessCommand::new(args, logger)?))
        }
    }
}
