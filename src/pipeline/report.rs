//! Pipeline run results

use serde::{Deserialize, Serialize};

/// One successfully converted band in the manifest
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManifestEntry {
    /// Normalized band label, e.g. `b4`
    pub band: String,
    /// URL where the rendered image is served
    pub image: String,
}

/// A band file the pipeline selected but could not convert
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkippedBand {
    /// File name of the failed band
    pub file: String,
    /// Human-readable failure reason
    pub reason: String,
}

/// Outcome of processing one scene archive
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SceneReport {
    /// Scene identifier the run was keyed by
    pub display_id: String,
    /// Converted bands, in the order their files were discovered
    pub manifest: Vec<ManifestEntry>,
    /// Bands that failed conversion, with reasons
    pub skipped: Vec<SkippedBand>,
}

impl SceneReport {
    pub fn new(display_id: &str) -> Self {
        SceneReport {
            display_id: display_id.to_string(),
            manifest: Vec::new(),
            skipped: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_serializes_to_json() {
        let mut report = SceneReport::new("LC08_TEST");
        report.manifest.push(ManifestEntry {
            band: "b4".to_string(),
            image: "https://nasa-map.elyra.games/static/LC08_TEST/scene_b4.jpeg".to_string(),
        });
        report.skipped.push(SkippedBand {
            file: "scene_b5.tif".to_string(),
            reason: "Unsupported TIFF version: 99".to_string(),
        });

        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["display_id"], "LC08_TEST");
        assert_eq!(json["manifest"][0]["band"], "b4");
        assert_eq!(json["skipped"][0]["file"], "scene_b5.tif");

        let round_trip: SceneReport = serde_json::from_value(json).unwrap();
        assert_eq!(round_trip, report);
    }
}
