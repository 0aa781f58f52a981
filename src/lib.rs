pub mod api;
pub mod archive;
pub mod bands;
pub mod commands;
pub mod compression;
pub mod convert;
pub mod errors;
pub mod io;
pub mod pipeline;
pub mod raster;
pub mod utils;

pub use crate::api::SceneKit;

pub use bands::{BandFile, BandNumber};
pub use convert::OutputFormat;
pub use pipeline::{ManifestEntry, SceneConfig, ScenePipeline, SceneReport, SkippedBand};
pub use raster::{RasterReader, SampleGrid};
