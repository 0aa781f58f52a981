//! Band marker parsing
//!
//! Landsat 8/9 products name each band file with a `_B{N}` marker,
//! e.g. `LC08_L1TP_139045_20170304_20170316_01_T1_B4.TIF`. The marker
//! identifies one of the eleven spectral bands.

use std::fmt;

/// A Landsat spectral band number (1 through 11)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BandNumber(u8);

impl BandNumber {
    /// Smallest valid band number
    pub const MIN: u8 = 1;
    /// Largest valid band number
    pub const MAX: u8 = 11;

    /// Creates a band number, rejecting values outside 1..=11
    pub fn new(number: u8) -> Option<Self> {
        if (Self::MIN..=Self::MAX).contains(&number) {
            Some(BandNumber(number))
        } else {
            None
        }
    }

    /// Parses the band marker out of a file name
    ///
    /// Scans for `_b` followed by decimal digits, matching
    /// case-insensitively. The digit run must end at a non-digit (or the
    /// end of the name) so that `_b1` never matches inside `_b11`, and a
    /// leading zero disqualifies the run (`_b04` is not a marker). When a
    /// name carries more than one marker, the last one wins.
    pub fn from_file_name(file_name: &str) -> Option<Self> {
        let lower = file_name.to_lowercase();
        let bytes = lower.as_bytes();

        let mut found = None;
        let mut search_from = 0;
        while let Some(pos) = lower[search_from..].find("_b") {
            let digits_start = search_from + pos + 2;
            let digits_end = bytes[digits_start..]
                .iter()
                .position(|b| !b.is_ascii_digit())
                .map(|n| digits_start + n)
                .unwrap_or(bytes.len());

            if digits_end > digits_start && bytes[digits_start] != b'0' {
                if let Ok(number) = lower[digits_start..digits_end].parse::<u8>() {
                    if let Some(band) = Self::new(number) {
                        found = Some(band);
                    }
                }
            }

            search_from = search_from + pos + 2;
        }

        found
    }

    /// Returns the band number
    pub fn number(&self) -> u8 {
        self.0
    }

    /// Returns the normalized band label, e.g. `b4`
    pub fn label(&self) -> String {
        format!("b{}", self.0)
    }
}

impl fmt::Display for BandNumber {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "b{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple_marker() {
        let band = BandNumber::from_file_name("scene_b4.tif").unwrap();
        assert_eq!(band.number(), 4);
        assert_eq!(band.label(), "b4");
    }

    #[test]
    fn test_parse_uppercase_landsat_name() {
        let name = "LC08_L1TP_139045_20170304_20170316_01_T1_B7.TIF";
        assert_eq!(BandNumber::from_file_name(name), BandNumber::new(7));
    }

    #[test]
    fn test_two_digit_band_not_confused_with_one_digit() {
        assert_eq!(
            BandNumber::from_file_name("scene_b11.tif"),
            BandNumber::new(11)
        );
        assert_eq!(
            BandNumber::from_file_name("scene_b10.tif"),
            BandNumber::new(10)
        );
    }

    #[test]
    fn test_out_of_range_band_rejected() {
        assert_eq!(BandNumber::from_file_name("scene_b12.tif"), None);
        assert_eq!(BandNumber::from_file_name("scene_b0.tif"), None);
    }

    #[test]
    fn test_leading_zero_rejected() {
        assert_eq!(BandNumber::from_file_name("scene_b04.tif"), None);
        assert_eq!(BandNumber::from_file_name("scene_b011.tif"), None);
        // Zero only appears inside the two-digit bands
        assert_eq!(
            BandNumber::from_file_name("scene_b10.tif"),
            BandNumber::new(10)
        );
    }

    #[test]
    fn test_no_marker() {
        assert_eq!(BandNumber::from_file_name("scene_mtl.txt"), None);
        assert_eq!(BandNumber::from_file_name("scene_band.tif"), None);
        assert_eq!(BandNumber::from_file_name("plain.tif"), None);
    }

    #[test]
    fn test_last_marker_wins() {
        assert_eq!(
            BandNumber::from_file_name("copy_of_b2_scene_b5.tif"),
            BandNumber::new(5)
        );
    }

    #[test]
    fn test_new_bounds() {
        assert!(BandNumber::new(0).is_none());
        assert!(BandNumber::new(1).is_some());
        assert!(BandNumber::new(11).is_some());
        assert!(BandNumber::new(12).is_none());
    }
}
