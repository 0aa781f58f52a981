//! Tests for single-band pixel extraction

use std::io::Cursor;

use crate::errors::SceneError;
use crate::raster::band_reader::BandReader;
use crate::raster::reader::RasterReader;
use crate::raster::tests::test_utils;

fn read_grid(buffer: Vec<u8>) -> Result<crate::raster::SampleGrid, SceneError> {
    let mut cursor = Cursor::new(buffer);
    let mut reader = RasterReader::new();
    let ifd = reader.read(&mut cursor)?;
    let mut band_reader = BandReader::new(cursor, &ifd, &reader);
    band_reader.read_grid()
}

#[test]
fn test_read_u8_single_strip() {
    let samples: Vec<u8> = (0..12).collect();
    let grid = read_grid(test_utils::gray_u8(4, 3, &samples)).unwrap();

    assert_eq!(grid.width, 4);
    assert_eq!(grid.height, 3);
    assert_eq!(grid.get(0, 0), Some(0.0));
    assert_eq!(grid.get(3, 2), Some(11.0));
}

#[test]
fn test_read_u16_single_strip() {
    let samples = vec![100u16, 200, 300, 65535];
    let grid = read_grid(test_utils::gray_u16(2, 2, &samples)).unwrap();

    assert_eq!(grid.get(0, 0), Some(100.0));
    assert_eq!(grid.get(1, 1), Some(65535.0));
}

#[test]
fn test_read_u16_multiple_strips() {
    // One row per strip forces three separate chunk reads
    let samples: Vec<u16> = (0..12).map(|v| v * 10).collect();
    let grid = read_grid(test_utils::gray_u16_multistrip(4, 3, &samples, 1)).unwrap();

    for y in 0..3u32 {
        for x in 0..4u32 {
            let expected = ((y * 4 + x) * 10) as f64;
            assert_eq!(grid.get(x, y), Some(expected));
        }
    }
}

#[test]
fn test_read_u16_deflate_compressed() {
    let samples = vec![500u16, 1000, 1500, 2000, 2500, 3000];
    let grid = read_grid(test_utils::gray_u16_deflate(3, 2, &samples)).unwrap();

    assert_eq!(grid.get(0, 0), Some(500.0));
    assert_eq!(grid.get(2, 1), Some(3000.0));
}

#[test]
fn test_read_u16_zstd_compressed() {
    let samples = vec![42u16, 8400, 12000, 0];
    let grid = read_grid(test_utils::gray_u16_zstd(2, 2, &samples)).unwrap();

    assert_eq!(grid.get(0, 0), Some(42.0));
    assert_eq!(grid.get(1, 0), Some(8400.0));
    assert_eq!(grid.get(1, 1), Some(0.0));
}

#[test]
fn test_read_f32_samples() {
    let samples = vec![0.5f32, -1.25, 3.75, 1e6];
    let grid = read_grid(test_utils::gray_f32(2, 2, &samples)).unwrap();

    assert_eq!(grid.get(0, 0), Some(0.5));
    assert_eq!(grid.get(1, 0), Some(-1.25));
    assert_eq!(grid.get(0, 1), Some(3.75));
    assert_eq!(grid.get(1, 1), Some(1e6));
}

#[test]
fn test_read_tiled_with_padded_edges() {
    // 5x3 image in 4x2 tiles; right and bottom tiles are padded
    let samples: Vec<u16> = (1..=15).collect();
    let grid = read_grid(test_utils::gray_u16_tiled(5, 3, &samples, 4, 2)).unwrap();

    for y in 0..3u32 {
        for x in 0..5u32 {
            let expected = (y * 5 + x + 1) as f64;
            assert_eq!(grid.get(x, y), Some(expected), "pixel ({}, {})", x, y);
        }
    }
}

#[test]
fn test_multiband_raster_rejected() {
    match read_grid(test_utils::gray_u8_multiband(2, 2)) {
        Err(SceneError::MultiBandRaster(n)) => assert_eq!(n, 3),
        other => panic!("expected MultiBandRaster, got {:?}", other),
    }
}

#[test]
fn test_truncated_strip_fails() {
    // Declared byte count runs past the end of the buffer
    let samples: Vec<u8> = (0..12).collect();
    let mut buffer = test_utils::gray_u8(4, 3, &samples);
    buffer.truncate(buffer.len() - 6);

    assert!(read_grid(buffer).is_err());
}

#[test]
fn test_zero_dimension_rejected() {
    use crate::raster::constants::sample_format;
    use crate::raster::tests::test_utils::TiffOpts;

    let buffer = test_utils::build_tiff(&TiffOpts {
        width: 0,
        height: 1,
        bits: 8,
        format: sample_format::UNSIGNED,
        samples_per_pixel: 1,
        compression: 1,
        rows_per_strip: 1,
        tiled: None,
        chunks: vec![Vec::new()],
    });

    match read_grid(buffer) {
        Err(SceneError::GenericError(msg)) => assert!(msg.contains("dimensions")),
        other => panic!("expected dimension error, got {:?}", other),
    }
}

#[test]
fn test_oversized_byte_count_rejected_before_allocation() {
    let samples: Vec<u8> = (0..12).collect();
    let mut buffer = test_utils::gray_u8(4, 3, &samples);

    // Rewrite the StripByteCounts entry (tag 279, LONG, count 1,
    // value 12) to claim an absurd chunk size
    let needle = [0x17, 0x01, 0x04, 0x00, 0x01, 0x00, 0x00, 0x00, 12, 0, 0, 0];
    let pos = buffer
        .windows(needle.len())
        .position(|w| w == needle)
        .unwrap();
    buffer[pos + 8..pos + 12].copy_from_slice(&0xFFFF_FFF0u32.to_le_bytes());

    match read_grid(buffer) {
        Err(SceneError::GenericError(msg)) => assert!(msg.contains("past the end")),
        other => panic!("expected chunk bounds error, got {:?}", other),
    }
}
