//! TIFF file reader implementation
//!
//! Reads the structural layer of a TIFF or BigTIFF file: byte order
//! detection, header validation, and parsing of the first Image File
//! Directory. A Landsat band file carries its full-resolution image in
//! the first IFD; reduced-resolution overviews are not read.

use byteorder::ReadBytesExt;
use log::debug;
use std::fs::File;
use std::io::{BufReader, Cursor, SeekFrom};
use std::path::Path;

use crate::errors::{SceneError, SceneResult};
use crate::io::{ByteOrder, ByteOrderHandler, SeekableReader};
use crate::raster::constants::{field_types, header};
use crate::raster::ifd::{Ifd, IfdEntry};

/// Reader for TIFF and BigTIFF band files
pub struct RasterReader {
    /// Detected byte order
    byte_order: Option<ByteOrder>,
    /// Current byte order handler
    byte_order_handler: Option<Box<dyn ByteOrderHandler>>,
    /// Whether currently reading BigTIFF format
    is_big_tiff: bool,
}

impl RasterReader {
    /// Creates a new raster reader
    pub fn new() -> Self {
        RasterReader {
            byte_order: None,
            byte_order_handler: None,
            is_big_tiff: false,
        }
    }

    /// Opens a band file and reads its first IFD
    ///
    /// # Arguments
    /// * `filepath` - Path to the TIFF file to load
    ///
    /// # Returns
    /// A buffered reader positioned in the file plus the parsed IFD
    pub fn open(&mut self, filepath: &Path) -> SceneResult<(BufReader<File>, Ifd)> {
        if !filepath.exists() {
            return Err(SceneError::NotFound(filepath.display().to_string()));
        }

        let file = File::open(filepath)?;
        let mut reader = BufReader::with_capacity(1024 * 1024, file);
        let ifd = self.read(&mut reader)?;
        Ok((reader, ifd))
    }

    /// Reads the TIFF header and first IFD from the given reader
    ///
    /// 1. Detect byte order (little/big endian)
    /// 2. Check for TIFF or BigTIFF format
    /// 3. Read the first IFD
    pub fn read(&mut self, reader: &mut dyn SeekableReader) -> SceneResult<Ifd> {
        let byte_order = ByteOrder::detect(reader)?;
        debug!("Detected byte order: {}", byte_order.name());
        self.byte_order = Some(byte_order);
        self.byte_order_handler = Some(byte_order.create_handler());
        self.is_big_tiff = self.detect_format(reader)?;

        let first_ifd_offset = self.read_first_ifd_offset(reader)?;
        debug!("First IFD offset: {}", first_ifd_offset);

        let file_size = file_size(reader)?;
        if first_ifd_offset >= file_size || first_ifd_offset < 8 {
            return Err(SceneError::GenericError(format!(
                "Invalid IFD offset: {} (file size: {})",
                first_ifd_offset, file_size
            )));
        }

        self.read_ifd(reader, first_ifd_offset)
    }

    /// Returns whether the current file is a BigTIFF
    pub fn is_big_tiff(&self) -> bool {
        self.is_big_tiff
    }

    /// Returns the byte order handler, erroring if the header has not been read
    pub fn handler(&self) -> SceneResult<&dyn ByteOrderHandler> {
        self.byte_order_handler
            .as_deref()
            .ok_or_else(|| SceneError::GenericError("Byte order not yet determined".to_string()))
    }

    /// Detects whether the file is TIFF or BigTIFF based on its version number
    fn detect_format(&self, reader: &mut dyn SeekableReader) -> SceneResult<bool> {
        let handler = self.handler()?;
        let version = handler.read_u16(reader)?;
        debug!("TIFF version: {}", version);

        match version {
            header::TIFF_VERSION => Ok(false),
            header::BIG_TIFF_VERSION => {
                // After the BigTIFF version come the offset size (8)
                // and a reserved zero word
                let offset_size = handler.read_u16(reader)?;
                let zeros = handler.read_u16(reader)?;
                if offset_size != header::BIGTIFF_OFFSET_SIZE || zeros != 0 {
                    return Err(SceneError::InvalidBigTiffHeader);
                }
                Ok(true)
            }
            _ => Err(SceneError::UnsupportedVersion(version)),
        }
    }

    /// Reads the offset of the first IFD
    fn read_first_ifd_offset(&self, reader: &mut dyn SeekableReader) -> SceneResult<u64> {
        let handler = self.handler()?;
        if self.is_big_tiff {
            Ok(handler.read_u64(reader)?)
        } else {
            Ok(handler.read_u32(reader)? as u64)
        }
    }

    /// Reads an IFD at the given file offset
    fn read_ifd(&self, reader: &mut dyn SeekableReader, offset: u64) -> SceneResult<Ifd> {
        reader.seek(SeekFrom::Start(offset))?;

        let entry_count = self.read_ifd_entry_count(reader)?;
        debug!("IFD entry count: {}", entry_count);

        let mut ifd = Ifd::new(offset);
        for _ in 0..entry_count {
            ifd.add_entry(self.read_ifd_entry(reader)?);
        }

        Ok(ifd)
    }

    /// Reads the entry count from an IFD
    fn read_ifd_entry_count(&self, reader: &mut dyn SeekableReader) -> SceneResult<u64> {
        let handler = self.handler()?;
        if self.is_big_tiff {
            Ok(handler.read_u64(reader)?)
        } else {
            Ok(handler.read_u16(reader)? as u64)
        }
    }

    /// Reads a single IFD entry
    fn read_ifd_entry(&self, reader: &mut dyn SeekableReader) -> SceneResult<IfdEntry> {
        let handler = self.handler()?;

        let tag = handler.read_u16(reader)?;
        let field_type = handler.read_u16(reader)?;
        let count = if self.is_big_tiff {
            handler.read_u64(reader)?
        } else {
            handler.read_u32(reader)? as u64
        };

        let value_offset = if self.is_big_tiff {
            handler.read_u64(reader)?
        } else {
            handler.read_u32(reader)? as u64
        };

        Ok(IfdEntry::new(tag, field_type, count, value_offset))
    }

    /// Reads a tag's values as a vector of u64
    ///
    /// Handles both inline values (stored in the entry's value slot) and
    /// values stored at an offset elsewhere in the file, converting each
    /// to u64 regardless of the underlying field type.
    ///
    /// # Arguments
    /// * `reader` - The seekable reader to use
    /// * `ifd` - The IFD containing the tag
    /// * `tag` - The tag number to read
    pub fn read_tag_values(
        &self,
        reader: &mut dyn SeekableReader,
        ifd: &Ifd,
        tag: u16,
    ) -> SceneResult<Vec<u64>> {
        let entry = ifd.get_entry(tag).ok_or(SceneError::TagNotFound(tag))?;

        let mut values = Vec::with_capacity(entry.count as usize);

        if entry.is_value_inline(self.is_big_tiff) {
            // Reconstruct the value slot bytes from the raw integer read at
            // parse time, then decode typed values from them. Round-tripping
            // through the same byte order recovers the original slot bytes.
            let slot: Vec<u8> = if self.is_big_tiff {
                match self.byte_order()? {
                    ByteOrder::LittleEndian => entry.value_offset.to_le_bytes().to_vec(),
                    ByteOrder::BigEndian => entry.value_offset.to_be_bytes().to_vec(),
                }
            } else {
                match self.byte_order()? {
                    ByteOrder::LittleEndian => (entry.value_offset as u32).to_le_bytes().to_vec(),
                    ByteOrder::BigEndian => (entry.value_offset as u32).to_be_bytes().to_vec(),
                }
            };

            let mut cursor = Cursor::new(slot);
            self.read_typed_values(&mut cursor, entry, &mut values)?;
        } else {
            reader.seek(SeekFrom::Start(entry.value_offset))?;
            self.read_typed_values(reader, entry, &mut values)?;
        }

        Ok(values)
    }

    /// Convenience accessor for a single-valued tag
    ///
    /// Returns None when the tag is absent; errors only on malformed data.
    pub fn read_tag_scalar(
        &self,
        reader: &mut dyn SeekableReader,
        ifd: &Ifd,
        tag: u16,
    ) -> SceneResult<Option<u64>> {
        if !ifd.has_tag(tag) {
            return Ok(None);
        }
        let values = self.read_tag_values(reader, ifd, tag)?;
        Ok(values.first().copied())
    }

    /// Reads `entry.count` values of the entry's field type
    fn read_typed_values(
        &self,
        reader: &mut dyn SeekableReader,
        entry: &IfdEntry,
        values: &mut Vec<u64>,
    ) -> SceneResult<()> {
        let handler = self.handler()?;

        for _ in 0..entry.count {
            let value = match entry.field_type {
                field_types::BYTE | field_types::SBYTE | field_types::UNDEFINED => {
                    reader.read_u8()? as u64
                }
                field_types::SHORT | field_types::SSHORT => handler.read_u16(reader)? as u64,
                field_types::LONG | field_types::SLONG => handler.read_u32(reader)? as u64,
                field_types::LONG8 | field_types::SLONG8 | field_types::IFD8 => {
                    handler.read_u64(reader)?
                }
                _ => return Err(SceneError::UnsupportedFieldType(entry.field_type)),
            };
            values.push(value);
        }

        Ok(())
    }

    /// Returns the detected byte order
    fn byte_order(&self) -> SceneResult<ByteOrder> {
        self.byte_order
            .ok_or_else(|| SceneError::GenericError("Byte order not yet determined".to_string()))
    }
}

impl Default for RasterReader {
    fn default() -> Self {
        Self::new()
    }
}

/// Gets the size of the underlying stream, restoring the read position
pub(crate) fn file_size(reader: &mut dyn SeekableReader) -> SceneResult<u64> {
    let current_position = reader.seek(SeekFrom::Current(0))?;
    let size = reader.seek(SeekFrom::End(0))?;
    reader.seek(SeekFrom::Start(current_position))?;
    Ok(size)
}
