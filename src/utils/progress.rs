//! Console progress reporting for multi-band runs

use indicatif::{ProgressBar, ProgressStyle};

/// Progress bar shown while a scene's bands are converted
pub struct BandProgress {
    bar: ProgressBar,
}

impl BandProgress {
    /// Creates a bar sized to the number of band files
    pub fn new(band_count: u64) -> Self {
        let bar = ProgressBar::new(band_count);
        bar.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({eta}) {msg}")
                .unwrap()
                .progress_chars("#>-"),
        );
        BandProgress { bar }
    }

    /// Marks one band done, showing which file just finished
    pub fn band_done(&self, file_name: &str) {
        self.bar.set_message(file_name.to_string());
        self.bar.inc(1);
    }

    pub fn finish(&self) {
        self.bar.finish_with_message("All bands processed");
    }
}
