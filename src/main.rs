use clap::{Arg, Command as ClapCommand, ArgAction};
use std::process;
use log::error;

// Import from your library
use scenekit::utils::logger::Logger;
use scenekit::commands::{CommandFactory, SceneKitCommandFactory};

fn main() {
    let matches = ClapCommand::new("SceneKit")
        .version("0.1")
        .about("Process Landsat scene archives into web-servable band images")
        .arg(
            Arg::new("input")
                .help("Input scene archive (or band TIFF with --convert)")
                .required(true)
                .index(1),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Enable verbose output")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("display-id")
                .long("display-id")
                .help("Scene identifier, defaults to the archive file stem")
                .value_name("ID")
                .required(false),
        )
        .arg(
            Arg::new("extract")
                .short('e')
                .long("extract")
                .help("Only extract the archive, skip conversion")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("convert")
                .short('c')
                .long("convert")
                .help("Convert a single band TIFF instead of a whole scene")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("format")
                .short('f')
                .long("format")
                .help("Output image format (jpeg, png, webp)")
                .value_name("FORMAT")
                .required(false),
        )
        .arg(
            Arg::new("output")
                .short('o')
                .long("output")
                .help("Output directory for --extract and --convert")
                .value_name("DIR")
                .required(false),
        )
        .arg(
            Arg::new("data-dir")
                .long("data-dir")
                .help("Root directory scenes are extracted under")
                .value_name("DIR")
                .required(false),
        )
        .arg(
            Arg::new("static-dir")
                .long("static-dir")
                .help("Root directory rendered images are written under")
                .value_name("DIR")
                .required(false),
        )
        .arg(
            Arg::new("base-url")
                .long("base-url")
                .help("Base URL images are served from")
                .value_name("URL")
                .required(false),
        )
        .get_matches();

    let verbose = matches.get_flag("verbose");

    let logger = match Logger::new("scenekit.log") {
        Ok(l) => l,
        Err(e) => {
            eprintln!("Error initializing logger: {}", e);
            process::exit(1);
        }
    };

    if let Err(e) = Logger::init_global_logger("scenekit-global.log", verbose) {
        eprintln!("Error setting up global logger: {}", e);
        process::exit(1);
    }

    let factory = SceneKitCommandFactory::new();

    let command_result = factory.create_command(&matches, &logger);
    match command_result {
        Ok(command) => {
            if let Err(e) = command.execute() {
                error!("Command execution error: {}", e);
                eprintln!("Error: {}", e);
                process::exit(1);
            }
        },
        Err(e) => {
            error!("Failed to create command: {}", e);
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };
}
