//! GeoTIFF band file parsing module
//!
//! Provides structures and readers for loading a single spectral band
//! out of a TIFF or BigTIFF raster into an in-memory sample grid.

pub mod band_reader;
pub(crate) mod constants;
pub mod grid;
pub mod ifd;
pub mod reader;

#[cfg(test)]
pub(crate) mod tests;

pub use band_reader::BandReader;
pub use grid::SampleGrid;
pub use ifd::{Ifd, IfdEntry};
pub use reader::RasterReader;
