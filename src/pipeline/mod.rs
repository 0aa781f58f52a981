//! Scene processing pipeline module
//!
//! Chains extraction, band selection and conversion into one run that
//! produces a manifest of web-servable band images.

pub mod orchestrator;
pub mod report;

pub use orchestrator::{SceneConfig, ScenePipeline};
pub use report::{ManifestEntry, SceneReport, SkippedBand};
