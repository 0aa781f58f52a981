//! Spectral band discovery module
//!
//! Identifies the convertible band files inside an extracted scene
//! directory by their `.tif` extension and `_b{N}` band marker.

pub mod marker;
pub mod selector;

pub use marker::BandNumber;
pub use selector::{is_convertible_band_file, select_band_files, BandFile};
