//! Low-level I/O support for raster parsing
//!
//! Provides the `SeekableReader` trait used throughout the raster reader,
//! plus the Strategy pattern for handling the two TIFF byte orders.

use byteorder::{BigEndian, LittleEndian, ReadBytesExt};
use std::io::{Read, Result, Seek};

use crate::errors::{SceneError, SceneResult};

/// Trait for readers that can both read and seek
///
/// This trait combines the Read and Seek traits for use with
/// various readers throughout the application.
pub trait SeekableReader: Read + Seek + Send + Sync {}

// Blanket implementation for any type that implements the required traits
impl<T: Read + Seek + Send + Sync> SeekableReader for T {}

/// Represents the byte order of a TIFF file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ByteOrder {
    /// Little-endian byte order (II)
    LittleEndian,
    /// Big-endian byte order (MM)
    BigEndian,
}

impl ByteOrder {
    /// Detects the byte order from the TIFF header
    pub fn detect(reader: &mut dyn SeekableReader) -> SceneResult<Self> {
        let byte_order = reader.read_u16::<LittleEndian>()?;
        match byte_order {
            0x4949 => Ok(ByteOrder::LittleEndian), // "II" (Intel)
            0x4D4D => Ok(ByteOrder::BigEndian),    // "MM" (Motorola)
            _ => Err(SceneError::InvalidByteOrder(byte_order)),
        }
    }

    /// Returns a string representation of this byte order
    pub fn name(&self) -> &'static str {
        match self {
            ByteOrder::LittleEndian => "Little Endian (II)",
            ByteOrder::BigEndian => "Big Endian (MM)",
        }
    }

    /// Creates the appropriate handler for this byte order
    pub fn create_handler(&self) -> Box<dyn ByteOrderHandler> {
        match self {
            ByteOrder::LittleEndian => Box::new(LittleEndianHandler),
            ByteOrder::BigEndian => Box::new(BigEndianHandler),
        }
    }
}

/// Trait for byte order handling strategies
pub trait ByteOrderHandler: Send + Sync {
    /// Read a u16 value
    fn read_u16(&self, reader: &mut dyn SeekableReader) -> Result<u16>;

    /// Read a u32 value
    fn read_u32(&self, reader: &mut dyn SeekableReader) -> Result<u32>;

    /// Read a u64 value
    fn read_u64(&self, reader: &mut dyn SeekableReader) -> Result<u64>;

    /// Read an f32 value
    fn read_f32(&self, reader: &mut dyn SeekableReader) -> Result<f32>;

    /// Read an f64 value
    fn read_f64(&self, reader: &mut dyn SeekableReader) -> Result<f64>;
}

/// Little-endian byte order handler
pub struct LittleEndianHandler;

impl ByteOrderHandler for LittleEndianHandler {
    fn read_u16(&self, reader: &mut dyn SeekableReader) -> Result<u16> {
        reader.read_u16::<LittleEndian>()
    }

    fn read_u32(&self, reader: &mut dyn SeekableReader) -> Result<u32> {
        reader.read_u32::<LittleEndian>()
    }

    fn read_u64(&self, reader: &mut dyn SeekableReader) -> Result<u64> {
        reader.read_u64::<LittleEndian>()
    }

    fn read_f32(&self, reader: &mut dyn SeekableReader) -> Result<f32> {
        reader.read_f32::<LittleEndian>()
    }

    fn read_f64(&self, reader: &mut dyn SeekableReader) -> Result<f64> {
        reader.read_f64::<LittleEndian>()
    }
}

/// Big-endian byte order handler
pub struct BigEndianHandler;

impl ByteOrderHandler for BigEndianHandler {
    fn read_u16(&self, reader: &mut dyn SeekableReader) -> Result<u16> {
        reader.read_u16::<BigEndian>()
    }

    fn read_u32(&self, reader: &mut dyn SeekableReader) -> Result<u32> {
        reader.read_u32::<BigEndian>()
    }

    fn read_u64(&self, reader: &mut dyn SeekableReader) -> Result<u64> {
        reader.read_u64::<BigEndian>()
    }

    fn read_f32(&self, reader: &mut dyn SeekableReader) -> Result<f32> {
        reader.read_f32::<BigEndian>()
    }

    fn read_f64(&self, reader: &mut dyn SeekableReader) -> Result<f64> {
        reader.read_f64::<BigEndian>()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use byteorder::WriteBytesExt;
    use std::io::Cursor;

    #[test]
    fn test_byte_order_detection_little_endian() {
        let mut buffer = Vec::new();
        buffer.write_u16::<LittleEndian>(0x4949).unwrap(); // II
        let mut cursor = Cursor::new(buffer);

        let result = ByteOrder::detect(&mut cursor);
        assert!(result.is_ok());
        assert_eq!(result.unwrap(), ByteOrder::LittleEndian);
    }

    #[test]
    fn test_byte_order_detection_big_endian() {
        let mut buffer = Vec::new();
        buffer.write_u16::<BigEndian>(0x4D4D).unwrap(); // MM
        let mut cursor = Cursor::new(buffer);

        let result = ByteOrder::detect(&mut cursor);
        assert!(result.is_ok());
        assert_eq!(result.unwrap(), ByteOrder::BigEndian);
    }

    #[test]
    fn test_byte_order_detection_invalid() {
        let mut buffer = Vec::new();
        buffer.write_u16::<LittleEndian>(0x1234).unwrap();
        let mut cursor = Cursor::new(buffer);

        assert!(ByteOrder::detect(&mut cursor).is_err());
    }

    #[test]
    fn test_little_endian_handler() {
        let mut buffer = Vec::new();
        buffer.write_u16::<LittleEndian>(0x1234).unwrap();
        buffer.write_u32::<LittleEndian>(0x12345678).unwrap();
        buffer.write_f32::<LittleEndian>(1.5).unwrap();
        let mut cursor = Cursor::new(buffer);

        let handler = LittleEndianHandler;

        assert_eq!(handler.read_u16(&mut cursor).unwrap(), 0x1234);
        assert_eq!(handler.read_u32(&mut cursor).unwrap(), 0x12345678);
        assert_eq!(handler.read_f32(&mut cursor).unwrap(), 1.5);
    }

    #[test]
    fn test_big_endian_handler() {
        let mut buffer = Vec::new();
        buffer.write_u16::<BigEndian>(0x1234).unwrap();
        buffer.write_u32::<BigEndian>(0x12345678).unwrap();
        buffer.write_u64::<BigEndian>(0x1234567890ABCDEF).unwrap();
        let mut cursor = Cursor::new(buffer);

        let handler = BigEndianHandler;

        assert_eq!(handler.read_u16(&mut cursor).unwrap(), 0x1234);
        assert_eq!(handler.read_u32(&mut cursor).unwrap(), 0x12345678);
        assert_eq!(handler.read_u64(&mut cursor).unwrap(), 0x1234567890ABCDEF);
    }
}
