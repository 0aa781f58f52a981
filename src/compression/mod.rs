//! Compression handling for raster strip and tile data
//!
//! TIFF stores pixel data in independently compressed chunks. This module
//! provides a Strategy trait for the compression schemes Landsat products
//! actually ship with, plus a factory keyed on the TIFF compression code.

pub mod handler;
pub mod factory;
mod uncompressed;
mod deflate;
mod zstd_codec;

pub use handler::CompressionHandler;
pub use factory::CompressionFactory;
pub use uncompressed::UncompressedHandler;
pub use deflate::AdobeDeflateHandler;
pub use zstd_codec::ZstdHandler;
