//! Factory for creating compression handlers

use crate::errors::{SceneError, SceneResult};
use super::handler::CompressionHandler;
use super::uncompressed::UncompressedHandler;
use super::deflate::AdobeDeflateHandler;
use super::zstd_codec::ZstdHandler;

/// Factory for creating compression handlers
pub struct CompressionFactory;

impl CompressionFactory {
    /// Create a compression handler for the given compression code
    pub fn create_handler(compression: u64) -> SceneResult<Box<dyn CompressionHandler>> {
        match compression {
            1 => Ok(Box::new(UncompressedHandler)),
            8 => Ok(Box::new(AdobeDeflateHandler)),
            14 => Ok(Box::new(ZstdHandler)),
            _ => Err(SceneError::UnsupportedCompression(compression))
        }
    }

    /// Get all available compression handlers
    pub fn get_available_handlers() -> Vec<Box<dyn CompressionHandler>> {
        vec![
            Box::new(UncompressedHandler),
            Box::new(AdobeDeflateHandler),
            Box::new(ZstdHandler)
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_codes_resolve() {
        for code in [1u64, 8, 14] {
            let handler = CompressionFactory::create_handler(code).unwrap();
            assert_eq!(handler.code(), code);
        }
    }

    #[test]
    fn test_unknown_code_is_rejected() {
        // LZW is deliberately unsupported
        assert!(CompressionFactory::create_handler(5).is_err());
    }
}
