//! Min/max grayscale normalization
//!
//! Stretches a band's sample range linearly onto 0..=255. A uniform
//! band (or one with no finite samples) renders fully black rather
//! than dividing by zero.

use log::debug;

use crate::raster::SampleGrid;

/// Normalizes a sample grid to 8-bit grayscale values
///
/// Output is row-major, one byte per pixel, matching the grid layout.
pub fn normalize_to_u8(grid: &SampleGrid) -> Vec<u8> {
    let (min, max) = match grid.min_max() {
        Some(range) => range,
        None => {
            debug!("No finite samples; rendering black");
            return vec![0u8; grid.len()];
        }
    };

    if min == max {
        debug!("Uniform band (all samples {}); rendering black", min);
        return vec![0u8; grid.len()];
    }

    let scale = 255.0 / (max - min);
    grid.samples
        .iter()
        .map(|&v| {
            if !v.is_finite() {
                return 0;
            }
            ((v - min) * scale).round().clamp(0.0, 255.0) as u8
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid_from(width: u32, height: u32, samples: &[f64]) -> SampleGrid {
        let mut grid = SampleGrid::new(width, height);
        for (i, &v) in samples.iter().enumerate() {
            grid.set(i as u32 % width, i as u32 / width, v);
        }
        grid
    }

    #[test]
    fn test_extremes_map_to_bounds() {
        let grid = grid_from(2, 2, &[10.0, 20.0, 12.0, 18.0]);
        let pixels = normalize_to_u8(&grid);
        assert_eq!(pixels[0], 0);
        assert_eq!(pixels[1], 255);
    }

    #[test]
    fn test_midpoint_rounds() {
        // 15 sits halfway between 10 and 20: 0.5 * 255 rounds to 128
        let grid = grid_from(3, 1, &[10.0, 15.0, 20.0]);
        assert_eq!(normalize_to_u8(&grid), vec![0, 128, 255]);
    }

    #[test]
    fn test_uniform_band_is_black() {
        let grid = grid_from(2, 2, &[7000.0; 4]);
        assert_eq!(normalize_to_u8(&grid), vec![0; 4]);
    }

    #[test]
    fn test_all_nan_is_black() {
        let grid = grid_from(2, 1, &[f64::NAN, f64::NAN]);
        assert_eq!(normalize_to_u8(&grid), vec![0, 0]);
    }

    #[test]
    fn test_nan_sample_renders_black_pixel() {
        let grid = grid_from(3, 1, &[0.0, f64::NAN, 100.0]);
        assert_eq!(normalize_to_u8(&grid), vec![0, 0, 255]);
    }

    #[test]
    fn test_already_byte_range_is_preserved() {
        let samples: Vec<f64> = (0..=255).map(|v| v as f64).collect();
        let grid = grid_from(16, 16, &samples);
        let pixels = normalize_to_u8(&grid);
        for (i, &p) in pixels.iter().enumerate() {
            assert_eq!(p as usize, i);
        }
    }

    #[test]
    fn test_negative_samples() {
        let grid = grid_from(2, 1, &[-50.0, 50.0]);
        assert_eq!(normalize_to_u8(&grid), vec![0, 255]);
    }
}
