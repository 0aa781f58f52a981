//! Tests for the raster module


mod band_reader_tests;
