//! Band conversion module
//!
//! Turns a single-band raster into an 8-bit grayscale web image by
//! stretching its sample range onto 0..=255.

pub mod format;
pub mod normalizer;

mod converter;

pub use converter::convert_band;
pub use format::OutputFormat;
