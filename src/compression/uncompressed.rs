//! Handler for uncompressed data

use crate::errors::SceneResult;
use super::handler::CompressionHandler;

/// Pass-through handler for uncompressed data (compression code 1)
pub struct UncompressedHandler;

impl CompressionHandler for UncompressedHandler {
    fn decompress(&self, data: &[u8]) -> SceneResult<Vec<u8>> {
        Ok(data.to_vec())
    }

    fn name(&self) -> &'static str {
        "None"
    }

    fn code(&self) -> u64 {
        1
    }
}
