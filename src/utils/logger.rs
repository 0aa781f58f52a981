//! Logger utility for application-wide logging
//!
//! Works alongside the standard log crate, adding file output so scene
//! runs leave an audit trail next to the console output.

use std::fs::File;
use std::io::{self, Write};
use std::path::Path;
use std::sync::Mutex;
use log::{Log, Record, Level, Metadata, LevelFilter};

/// Custom logger with file output
pub struct Logger {
    /// File handle for log output
    file: Mutex<Option<File>>,
    /// Level at and below which records are written
    level: Level,
}

impl Logger {
    /// Creates a new logger writing to the given file
    ///
    /// # Arguments
    /// * `log_file` - Path to the log file
    pub fn new(log_file: &str) -> io::Result<Self> {
        Self::with_level(log_file, Level::Info)
    }

    /// Creates a logger with an explicit level cutoff
    pub fn with_level(log_file: &str, level: Level) -> io::Result<Self> {
        let file = File::create(Path::new(log_file))?;
        Ok(Logger {
            file: Mutex::new(Some(file)),
            level,
        })
    }

    /// Writes a line to the log file
    pub fn log(&self, message: &str) -> io::Result<()> {
        if let Some(file) = &mut *self.file.lock().unwrap() {
            writeln!(file, "{}", message)?;
            file.flush()?;
        }
        Ok(())
    }

    /// Initializes the global logger backing the log crate macros
    ///
    /// # Arguments
    /// * `log_file` - Path to the log file
    /// * `verbose` - Whether debug records should be kept
    pub fn init_global_logger(log_file: &str, verbose: bool) -> io::Result<()> {
        let level = if verbose { Level::Debug } else { Level::Info };
        let global_logger = Logger::with_level(log_file, level)?;

        // Setting twice only happens when a host application already
        // installed a logger; keep theirs and say so
        if log::set_boxed_logger(Box::new(global_logger)).is_err() {
            eprintln!("Warning: Global logger was already initialized");
        }

        log::set_max_level(if verbose {
            LevelFilter::Debug
        } else {
            LevelFilter::Info
        });
        Ok(())
    }
}

impl Log for Logger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let message = format!("[{}] {}", record.level(), record.args());
            let _ = self.log(&message);

            // Also print to console
            println!("{}", message);
        }
    }

    fn flush(&self) {
        // Already flushing in the log method
    }
}
