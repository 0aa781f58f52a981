//! Custom error types for scene processing

use std::fmt;
use std::io;

/// Scene processing error types
#[derive(Debug)]
pub enum SceneError {
    /// I/O error
    IoError(io::Error),
    /// Referenced file or directory does not exist
    NotFound(String),
    /// Archive could not be unpacked
    InvalidArchive(String),
    /// Invalid byte order marker
    InvalidByteOrder(u16),
    /// Invalid BigTIFF header
    InvalidBigTiffHeader,
    /// Unsupported TIFF version
    UnsupportedVersion(u16),
    /// Tag not found
    TagNotFound(u16),
    /// Unsupported field type
    UnsupportedFieldType(u16),
    /// Unsupported compression method
    UnsupportedCompression(u64),
    /// Sample format and bit depth combination not supported
    UnsupportedSampleType { format: u16, bits: u16 },
    /// Unsupported predictor scheme
    UnsupportedPredictor(u64),
    /// Raster carries more than one sample per pixel
    MultiBandRaster(u64),
    /// Image dimensions not found
    MissingDimensions,
    /// Unknown output image format name
    UnsupportedFormat(String),
    /// Generic error with message
    GenericError(String),
}

impl fmt::Display for SceneError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SceneError::IoError(e) => write!(f, "I/O error: {}", e),
            SceneError::NotFound(path) => write!(f, "Not found: {}", path),
            SceneError::InvalidArchive(msg) => write!(f, "Invalid archive: {}", msg),
            SceneError::InvalidByteOrder(v) => write!(f, "Invalid byte order marker: {:#06x}", v),
            SceneError::InvalidBigTiffHeader => write!(f, "Invalid BigTIFF header"),
            SceneError::UnsupportedVersion(v) => write!(f, "Unsupported TIFF version: {}", v),
            SceneError::TagNotFound(tag) => write!(f, "Tag not found: {}", tag),
            SceneError::UnsupportedFieldType(ft) => write!(f, "Unsupported field type: {}", ft),
            SceneError::UnsupportedCompression(c) => write!(f, "Unsupported compression method: {}", c),
            SceneError::UnsupportedSampleType { format, bits } => {
                write!(f, "Unsupported sample type: format {} with {} bits", format, bits)
            }
            SceneError::UnsupportedPredictor(p) => write!(f, "Unsupported predictor: {}", p),
            SceneError::MultiBandRaster(n) => {
                write!(f, "Expected a single-band raster, found {} samples per pixel", n)
            }
            SceneError::MissingDimensions => write!(f, "Image dimensions not found"),
            SceneError::UnsupportedFormat(name) => write!(f, "Unsupported output format: {}", name),
            SceneError::GenericError(msg) => write!(f, "Scene error: {}", msg),
        }
    }
}

impl std::error::Error for SceneError {}

impl From<io::Error> for SceneError {
    fn from(error: io::Error) -> Self {
        SceneError::IoError(error)
    }
}

/// Result type for scene operations
pub type SceneResult<T> = Result<T, SceneError>;

impl From<String> for SceneError {
    fn from(msg: String) -> Self {
        SceneError::GenericError(msg)
    }
}
