//! Single-band pixel data extraction
//!
//! Reads the first (and only) channel of a band file into a `SampleGrid`,
//! handling both strip and tile data layouts, the supported compression
//! schemes, and the horizontal differencing predictor.

use log::{debug, info};
use std::io::{Cursor, SeekFrom};

use byteorder::ReadBytesExt;

use crate::compression::{CompressionFactory, CompressionHandler};
use crate::errors::{SceneError, SceneResult};
use crate::io::SeekableReader;
use crate::raster::constants::{predictor, sample_format, tags};
use crate::raster::grid::SampleGrid;
use crate::raster::ifd::Ifd;
use crate::raster::reader::{file_size, RasterReader};

/// How samples are laid out in a decompressed chunk
struct SampleLayout {
    /// Bits per sample (8, 16, 32 or 64)
    bits: u16,
    /// Sample format code (unsigned, signed, IEEE float)
    format: u16,
    /// Predictor code applied before compression
    predictor: u16,
}

impl SampleLayout {
    fn bytes_per_sample(&self) -> usize {
        (self.bits / 8) as usize
    }
}

/// Reads pixel data for a single raster band
pub struct BandReader<'a, R: SeekableReader> {
    /// Reader for accessing the band file
    reader: R,
    /// IFD containing the image metadata
    ifd: &'a Ifd,
    /// Raster reader for accessing tag values
    raster_reader: &'a RasterReader,
}

impl<'a, R: SeekableReader> BandReader<'a, R> {
    /// Create a new band reader
    ///
    /// # Arguments
    /// * `reader` - Seekable reader for the band file
    /// * `ifd` - IFD containing the image metadata
    /// * `raster_reader` - Raster reader for accessing tag values
    pub fn new(reader: R, ifd: &'a Ifd, raster_reader: &'a RasterReader) -> Self {
        BandReader {
            reader,
            ifd,
            raster_reader,
        }
    }

    /// Reads the band's samples into a grid
    ///
    /// Multi-channel rasters are rejected; callers are expected to
    /// pre-select single-band files.
    pub fn read_grid(&mut self) -> SceneResult<SampleGrid> {
        let width = self
            .tag_scalar(tags::IMAGE_WIDTH)?
            .ok_or(SceneError::MissingDimensions)?;
        let height = self
            .tag_scalar(tags::IMAGE_LENGTH)?
            .ok_or(SceneError::MissingDimensions)?;

        // Dimension tags are attacker-controlled u64s; anything that
        // cannot describe a real grid is rejected before allocation
        if width == 0 || height == 0 || width > u32::MAX as u64 || height > u32::MAX as u64 {
            return Err(SceneError::GenericError(format!(
                "Invalid image dimensions: {}x{}",
                width, height
            )));
        }

        let samples_per_pixel = self.tag_scalar(tags::SAMPLES_PER_PIXEL)?.unwrap_or(1);
        if samples_per_pixel != 1 {
            return Err(SceneError::MultiBandRaster(samples_per_pixel));
        }

        let layout = self.sample_layout()?;
        debug!(
            "Band layout: {}x{}, {} bits, format {}, predictor {}",
            width, height, layout.bits, layout.format, layout.predictor
        );

        let mut grid = SampleGrid::new(width as u32, height as u32);

        if self.ifd.has_tag(tags::TILE_OFFSETS) {
            self.read_tiles(&mut grid, &layout)?;
        } else {
            self.read_strips(&mut grid, &layout)?;
        }

        Ok(grid)
    }

    /// Determines the sample layout from the IFD, validating support
    fn sample_layout(&mut self) -> SceneResult<SampleLayout> {
        let bits = self.tag_scalar(tags::BITS_PER_SAMPLE)?.unwrap_or(8) as u16;
        let format = self
            .tag_scalar(tags::SAMPLE_FORMAT)?
            .unwrap_or(sample_format::UNSIGNED as u64) as u16;
        let pred = self
            .tag_scalar(tags::PREDICTOR)?
            .unwrap_or(predictor::NONE as u64) as u16;

        let supported = matches!(
            (format, bits),
            (sample_format::UNSIGNED, 8 | 16 | 32)
                | (sample_format::SIGNED, 8 | 16 | 32)
                | (sample_format::IEEEFP, 32 | 64)
        );
        if !supported {
            return Err(SceneError::UnsupportedSampleType { format, bits });
        }

        match pred {
            predictor::NONE => {}
            predictor::HORIZONTAL_DIFFERENCING => {
                // Differencing is only defined here for unsigned integers
                // narrow enough for exact f64 arithmetic
                if format != sample_format::UNSIGNED || bits > 32 {
                    return Err(SceneError::UnsupportedPredictor(pred as u64));
                }
            }
            other => return Err(SceneError::UnsupportedPredictor(other as u64)),
        }

        Ok(SampleLayout { bits, format, predictor: pred })
    }

    /// Reads all strips into the grid
    fn read_strips(&mut self, grid: &mut SampleGrid, layout: &SampleLayout) -> SceneResult<()> {
        let width = grid.width as u64;
        let height = grid.height as u64;

        let rows_per_strip = self
            .tag_scalar(tags::ROWS_PER_STRIP)?
            .unwrap_or(height)
            .max(1);

        let strip_offsets =
            self.raster_reader
                .read_tag_values(&mut self.reader, self.ifd, tags::STRIP_OFFSETS)?;
        let strip_byte_counts =
            self.raster_reader
                .read_tag_values(&mut self.reader, self.ifd, tags::STRIP_BYTE_COUNTS)?;

        let compression = self.tag_scalar(tags::COMPRESSION)?.unwrap_or(1);
        let handler = CompressionFactory::create_handler(compression)?;
        info!(
            "Reading {} strips ({} rows per strip, {} compression)",
            strip_offsets.len(),
            rows_per_strip,
            handler.name()
        );

        for (strip_idx, (&offset, &byte_count)) in
            strip_offsets.iter().zip(strip_byte_counts.iter()).enumerate()
        {
            let start_y = strip_idx as u64 * rows_per_strip;
            if start_y >= height {
                break;
            }

            let rows = rows_per_strip.min(height - start_y);
            let expected = (rows * width) as usize;

            let data = self.read_chunk(offset, byte_count, handler.as_ref())?;
            let mut samples = self.decode_samples(&data, expected, layout)?;
            if layout.predictor == predictor::HORIZONTAL_DIFFERENCING {
                apply_horizontal_predictor(&mut samples, width as usize, layout.bits);
            }

            let base = (start_y * width) as usize;
            let end = (base + samples.len()).min(grid.samples.len());
            grid.samples[base..end].copy_from_slice(&samples[..end - base]);
        }

        Ok(())
    }

    /// Reads all tiles into the grid
    ///
    /// Edge tiles are padded to the full tile size; padding samples are
    /// clipped when copying into the grid.
    fn read_tiles(&mut self, grid: &mut SampleGrid, layout: &SampleLayout) -> SceneResult<()> {
        let width = grid.width as u64;
        let height = grid.height as u64;

        let tile_width = self.tag_scalar(tags::TILE_WIDTH)?.unwrap_or(256).max(1);
        let tile_height = self.tag_scalar(tags::TILE_LENGTH)?.unwrap_or(256).max(1);

        let tile_offsets =
            self.raster_reader
                .read_tag_values(&mut self.reader, self.ifd, tags::TILE_OFFSETS)?;
        let tile_byte_counts =
            self.raster_reader
                .read_tag_values(&mut self.reader, self.ifd, tags::TILE_BYTE_COUNTS)?;

        let compression = self.tag_scalar(tags::COMPRESSION)?.unwrap_or(1);
        let handler = CompressionFactory::create_handler(compression)?;

        let tiles_across = (width + tile_width - 1) / tile_width;
        info!(
            "Reading {} tiles of {}x{} ({} compression)",
            tile_offsets.len(),
            tile_width,
            tile_height,
            handler.name()
        );

        for (tile_idx, (&offset, &byte_count)) in
            tile_offsets.iter().zip(tile_byte_counts.iter()).enumerate()
        {
            let tile_x = (tile_idx as u64 % tiles_across) * tile_width;
            let tile_y = (tile_idx as u64 / tiles_across) * tile_height;
            if tile_y >= height {
                break;
            }

            let expected = (tile_width * tile_height) as usize;
            let data = self.read_chunk(offset, byte_count, handler.as_ref())?;
            let mut samples = self.decode_samples(&data, expected, layout)?;
            if layout.predictor == predictor::HORIZONTAL_DIFFERENCING {
                apply_horizontal_predictor(&mut samples, tile_width as usize, layout.bits);
            }

            let copy_width = tile_width.min(width - tile_x) as usize;
            for row in 0..tile_height {
                let global_y = tile_y + row;
                if global_y >= height {
                    break;
                }

                let src = (row * tile_width) as usize;
                if src + copy_width > samples.len() {
                    break;
                }

                let dst = (global_y * width + tile_x) as usize;
                grid.samples[dst..dst + copy_width]
                    .copy_from_slice(&samples[src..src + copy_width]);
            }
        }

        Ok(())
    }

    /// Reads and decompresses one strip or tile
    ///
    /// The declared byte count is checked against the file size before
    /// any allocation, so a corrupt header cannot demand a huge buffer.
    fn read_chunk(
        &mut self,
        offset: u64,
        byte_count: u64,
        handler: &dyn CompressionHandler,
    ) -> SceneResult<Vec<u8>> {
        let size = file_size(&mut self.reader)?;
        if byte_count > size.saturating_sub(offset) {
            return Err(SceneError::GenericError(format!(
                "Chunk at offset {} claims {} bytes past the end of the file",
                offset, byte_count
            )));
        }

        self.reader.seek(SeekFrom::Start(offset))?;
        let mut compressed = vec![0u8; byte_count as usize];
        self.reader.read_exact(&mut compressed)?;
        handler.decompress(&compressed)
    }

    /// Decodes raw chunk bytes into f64 samples
    ///
    /// Decodes at most `expected` samples; a short chunk yields fewer
    /// (trailing grid samples stay zero), a long one is truncated.
    fn decode_samples(
        &self,
        data: &[u8],
        expected: usize,
        layout: &SampleLayout,
    ) -> SceneResult<Vec<f64>> {
        let handler = self.raster_reader.handler()?;
        let available = data.len() / layout.bytes_per_sample();
        let count = expected.min(available);

        let mut cursor = Cursor::new(data);
        let mut samples = Vec::with_capacity(count);

        for _ in 0..count {
            let value = match (layout.format, layout.bits) {
                (sample_format::UNSIGNED, 8) => cursor.read_u8()? as f64,
                (sample_format::UNSIGNED, 16) => handler.read_u16(&mut cursor)? as f64,
                (sample_format::UNSIGNED, 32) => handler.read_u32(&mut cursor)? as f64,
                (sample_format::SIGNED, 8) => cursor.read_u8()? as i8 as f64,
                (sample_format::SIGNED, 16) => handler.read_u16(&mut cursor)? as i16 as f64,
                (sample_format::SIGNED, 32) => handler.read_u32(&mut cursor)? as i32 as f64,
                (sample_format::IEEEFP, 32) => handler.read_f32(&mut cursor)? as f64,
                (sample_format::IEEEFP, 64) => handler.read_f64(&mut cursor)?,
                (format, bits) => {
                    return Err(SceneError::UnsupportedSampleType { format, bits })
                }
            };
            samples.push(value);
        }

        Ok(samples)
    }

    /// Reads a single-valued tag through the raster reader
    fn tag_scalar(&mut self, tag: u16) -> SceneResult<Option<u64>> {
        self.raster_reader
            .read_tag_scalar(&mut self.reader, self.ifd, tag)
    }
}

/// Undoes horizontal differencing in place, row by row
///
/// Each sample was stored as the difference from its left neighbor;
/// reconstruction is a running sum wrapping at the sample bit width.
fn apply_horizontal_predictor(samples: &mut [f64], row_width: usize, bits: u16) {
    if row_width == 0 {
        return;
    }

    let modulus = (1u64 << bits) as f64;
    for row in samples.chunks_mut(row_width) {
        for i in 1..row.len() {
            row[i] = (row[i - 1] + row[i]).rem_euclid(modulus);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::apply_horizontal_predictor;

    #[test]
    fn test_predictor_running_sum() {
        // Two rows of deltas; each row restarts the sum
        let mut samples = vec![10.0, 5.0, 1.0, 100.0, 0.0, 2.0];
        apply_horizontal_predictor(&mut samples, 3, 16);
        assert_eq!(samples, vec![10.0, 15.0, 16.0, 100.0, 100.0, 102.0]);
    }

    #[test]
    fn test_predictor_wraps_at_bit_width() {
        let mut samples = vec![250.0, 10.0];
        apply_horizontal_predictor(&mut samples, 2, 8);
        assert_eq!(samples, vec![250.0, 4.0]);
    }
}
