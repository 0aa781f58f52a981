//! Band file to web image conversion

use log::info;
use std::fs;
use std::path::{Path, PathBuf};

use image::GrayImage;

use crate::convert::format::OutputFormat;
use crate::convert::normalizer::normalize_to_u8;
use crate::errors::{SceneError, SceneResult};
use crate::raster::{BandReader, RasterReader};

/// Converts a band TIFF into a normalized grayscale image
///
/// The output lands in `output_dir` under the input's file stem with
/// the format's extension, e.g. `scene_b4.tif` becomes
/// `scene_b4.jpeg`. Returns the path of the written image.
///
/// # Arguments
/// * `input` - Path to the band TIFF
/// * `format` - Output image format
/// * `output_dir` - Directory to write the image into
pub fn convert_band(input: &Path, format: OutputFormat, output_dir: &Path) -> SceneResult<PathBuf> {
    let mut raster_reader = RasterReader::new();
    let (reader, ifd) = raster_reader.open(input)?;

    let mut band_reader = BandReader::new(reader, &ifd, &raster_reader);
    let grid = band_reader.read_grid()?;

    let pixels = normalize_to_u8(&grid);
    let image = GrayImage::from_raw(grid.width, grid.height, pixels).ok_or_else(|| {
        SceneError::GenericError(format!(
            "Pixel buffer does not match {}x{} dimensions",
            grid.width, grid.height
        ))
    })?;

    fs::create_dir_all(output_dir)?;
    let output_path = output_dir.join(output_file_name(input, format));
    image
        .save_with_format(&output_path, format.image_format())
        .map_err(|e| SceneError::GenericError(format!("Failed to write image: {}", e)))?;

    info!(
        "Converted {} to {}",
        input.display(),
        output_path.display()
    );
    Ok(output_path)
}

/// Builds the output file name from the input stem and format
fn output_file_name(input: &Path, format: OutputFormat) -> String {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "band".to_string());
    format!("{}.{}", stem, format.extension())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::raster::tests::test_utils;

    fn write_band_tiff(dir: &Path, name: &str, buffer: Vec<u8>) -> PathBuf {
        let path = dir.join(name);
        fs::write(&path, buffer).unwrap();
        path
    }

    #[test]
    fn test_convert_writes_normalized_png() {
        let dir = tempfile::tempdir().unwrap();
        let samples = vec![100u16, 200, 300, 400];
        let input = write_band_tiff(dir.path(), "scene_b4.tif", test_utils::gray_u16(2, 2, &samples));

        let out_dir = dir.path().join("out");
        let output = convert_band(&input, OutputFormat::Png, &out_dir).unwrap();

        assert_eq!(output, out_dir.join("scene_b4.png"));
        let image = image::open(&output).unwrap().into_luma8();
        assert_eq!(image.dimensions(), (2, 2));
        assert_eq!(image.get_pixel(0, 0).0[0], 0);
        assert_eq!(image.get_pixel(1, 1).0[0], 255);
    }

    #[test]
    fn test_convert_uniform_band_is_black() {
        let dir = tempfile::tempdir().unwrap();
        let input = write_band_tiff(
            dir.path(),
            "scene_b9.tif",
            test_utils::gray_u16(2, 2, &[7000u16; 4]),
        );

        let output = convert_band(&input, OutputFormat::Png, dir.path()).unwrap();
        let image = image::open(&output).unwrap().into_luma8();
        assert!(image.pixels().all(|p| p.0[0] == 0));
    }

    #[test]
    fn test_convert_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let samples = vec![3u16, 900, 77, 214];
        let input = write_band_tiff(dir.path(), "scene_b6.tif", test_utils::gray_u16(2, 2, &samples));

        let first = convert_band(&input, OutputFormat::Png, &dir.path().join("one")).unwrap();
        let second = convert_band(&input, OutputFormat::Png, &dir.path().join("two")).unwrap();

        // Same input and parameters produce byte-identical output
        assert_eq!(fs::read(&first).unwrap(), fs::read(&second).unwrap());
    }

    #[test]
    fn test_convert_missing_input() {
        let dir = tempfile::tempdir().unwrap();
        let result = convert_band(
            &dir.path().join("absent_b1.tif"),
            OutputFormat::Jpeg,
            dir.path(),
        );
        assert!(matches!(result, Err(SceneError::NotFound(_))));
    }

    #[test]
    fn test_convert_corrupt_input() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("scene_b2.tif");
        fs::write(&input, b"not a tiff").unwrap();

        assert!(convert_band(&input, OutputFormat::Jpeg, dir.path()).is_err());
    }

    #[test]
    fn test_jpeg_extension_from_stem() {
        let name = output_file_name(Path::new("/tmp/x/scene_b4.tif"), OutputFormat::Jpeg);
        assert_eq!(name, "scene_b4.jpeg");
    }
}
