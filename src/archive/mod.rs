//! Scene archive handling module
//!
//! Landsat scenes arrive as tar bundles; this module unpacks them into
//! a per-scene working directory.

pub mod extractor;

pub use extractor::ArchiveExtractor;
