//! In-memory sample grid for a single raster band

/// A 2D grid of numeric samples read from a single-band raster
///
/// Samples are stored row-major as `f64`, which losslessly represents
/// every integer type up to 32 bits as well as IEEE float sources, so
/// min/max and normalization work uniformly across source dtypes.
#[derive(Debug, Clone)]
pub struct SampleGrid {
    /// Width in pixels
    pub width: u32,
    /// Height in pixels
    pub height: u32,
    /// Row-major sample values
    pub samples: Vec<f64>,
}

impl SampleGrid {
    /// Creates a zero-filled grid with the given dimensions
    pub fn new(width: u32, height: u32) -> Self {
        SampleGrid {
            width,
            height,
            samples: vec![0.0; width as usize * height as usize],
        }
    }

    /// Number of samples in the grid
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Whether the grid holds no samples
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Sets the sample at (x, y); out-of-bounds writes are ignored
    pub fn set(&mut self, x: u32, y: u32, value: f64) {
        if x < self.width && y < self.height {
            self.samples[y as usize * self.width as usize + x as usize] = value;
        }
    }

    /// Gets the sample at (x, y)
    pub fn get(&self, x: u32, y: u32) -> Option<f64> {
        if x < self.width && y < self.height {
            Some(self.samples[y as usize * self.width as usize + x as usize])
        } else {
            None
        }
    }

    /// Computes the observed minimum and maximum sample values
    ///
    /// NaN samples (possible in float rasters) are ignored. Returns None
    /// for an empty grid or one consisting entirely of NaN.
    pub fn min_max(&self) -> Option<(f64, f64)> {
        let mut result: Option<(f64, f64)> = None;

        for &v in &self.samples {
            if v.is_nan() {
                continue;
            }
            result = match result {
                None => Some((v, v)),
                Some((min, max)) => Some((min.min(v), max.max(v))),
            };
        }

        result
    }
}
