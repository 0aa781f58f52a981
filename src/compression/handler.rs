//! Compression handler trait definition

use crate::errors::SceneResult;

/// Strategy trait for decoding different compression methods
pub trait CompressionHandler: Send + Sync {
    /// Decompress a strip or tile worth of data
    fn decompress(&self, data: &[u8]) -> SceneResult<Vec<u8>>;

    /// Get the name of this compression method
    fn name(&self) -> &'static str;

    /// Get the TIFF compression code
    fn code(&self) -> u64;
}
