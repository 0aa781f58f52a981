//! Image File Directory (IFD) structures and methods
//!
//! The IFD is the per-image tag table of a TIFF file. The band reader only
//! ever needs the first IFD of a Landsat product (overviews are ignored),
//! but the structure itself is format-complete.

use std::collections::HashMap;

use crate::raster::constants::field_types;

/// Represents an entry in an Image File Directory
///
/// Each entry describes one aspect of the image (dimensions, compression,
/// sample layout, ...) as a tag-value pair. For small values, `value_offset`
/// contains the value itself; for larger ones it points into the file.
#[derive(Debug, Clone)]
pub struct IfdEntry {
    /// TIFF tag identifier
    pub tag: u16,
    /// Field type
    pub field_type: u16,
    /// Number of values
    pub count: u64,
    /// Value or offset to values
    pub value_offset: u64,
}

impl IfdEntry {
    /// Creates a new IFD entry
    pub fn new(tag: u16, field_type: u16, count: u64, value_offset: u64) -> Self {
        Self { tag, field_type, count, value_offset }
    }

    /// Get the size in bytes for this entry's field type
    pub fn field_type_size(&self) -> usize {
        match self.field_type {
            field_types::BYTE | field_types::ASCII
            | field_types::SBYTE | field_types::UNDEFINED => 1,
            field_types::SHORT | field_types::SSHORT => 2,
            field_types::LONG | field_types::SLONG | field_types::FLOAT => 4,
            field_types::RATIONAL | field_types::SRATIONAL | field_types::DOUBLE => 8,
            field_types::LONG8 | field_types::SLONG8 | field_types::IFD8 => 8,
            _ => 1,
        }
    }

    /// Determines if the value is stored inline in `value_offset`
    /// rather than at the offset location
    ///
    /// TIFF stores values of up to 4 bytes (8 for BigTIFF) directly in the
    /// entry instead of a separate data area.
    pub fn is_value_inline(&self, is_big_tiff: bool) -> bool {
        let total_size = self.field_type_size() as u64 * self.count;
        let inline_size = if is_big_tiff { 8 } else { 4 };
        total_size <= inline_size
    }
}

/// Represents an Image File Directory in a TIFF file
#[derive(Debug, Clone)]
pub struct Ifd {
    /// Entries in this IFD
    pub entries: Vec<IfdEntry>,
    /// Offset to this IFD in the file
    pub offset: u64,
    /// Cached tag values for quick lookup
    tag_map: HashMap<u16, IfdEntry>,
}

impl Ifd {
    /// Creates a new, empty IFD at the given file offset
    pub fn new(offset: u64) -> Self {
        Self {
            entries: Vec::new(),
            offset,
            tag_map: HashMap::new(),
        }
    }

    /// Adds an entry and updates the tag lookup cache
    pub fn add_entry(&mut self, entry: IfdEntry) {
        self.tag_map.insert(entry.tag, entry.clone());
        self.entries.push(entry);
    }

    /// Gets a tag's value/offset field directly
    pub fn get_tag_value(&self, tag: u16) -> Option<u64> {
        self.tag_map.get(&tag).map(|entry| entry.value_offset)
    }

    /// Checks if this IFD has a specific tag
    pub fn has_tag(&self, tag: u16) -> bool {
        self.tag_map.contains_key(&tag)
    }

    /// Gets an IFD entry by tag
    pub fn get_entry(&self, tag: u16) -> Option<&IfdEntry> {
        self.tag_map.get(&tag)
    }

    /// Gets the dimensions of the image described by this IFD
    pub fn get_dimensions(&self) -> Option<(u64, u64)> {
        let width = self.get_tag_value(super::constants::tags::IMAGE_WIDTH)?;
        let height = self.get_tag_value(super::constants::tags::IMAGE_LENGTH)?;
        Some((width, height))
    }

    /// Returns number of samples per pixel (default 1 if not specified)
    pub fn samples_per_pixel(&self) -> u64 {
        self.get_tag_value(super::constants::tags::SAMPLES_PER_PIXEL).unwrap_or(1)
    }

    /// Gets the number of entries in this IFD
    pub fn entry_count(&self) -> usize {
        self.entries.len()
    }
}
