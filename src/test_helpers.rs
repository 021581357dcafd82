//! Shared test utilities for the batchimg test suite.
//!
//! Synthetic image writers used by the backend and batch driver tests.
//! Every image carries a coordinate gradient so resampling has real pixel
//! variation to work with.

use image::{ImageEncoder, RgbImage, RgbaImage};
use std::path::Path;

/// Create a small valid JPEG file with the given dimensions.
pub fn create_test_jpeg(path: &Path, width: u32, height: u32) {
    let img = RgbImage::from_fn(width, height, |x, y| {
        image::Rgb([(x % 256) as u8, (y % 256) as u8, 128])
    });
    let file = std::fs::File::create(path).unwrap();
    let writer = std::io::BufWriter::new(file);
    image::codecs::jpeg::JpegEncoder::new(writer)
        .write_image(img.as_raw(), width, height, image::ExtendedColorType::Rgb8)
        .unwrap();
}

/// Create a small valid opaque PNG file with the given dimensions.
pub fn create_test_png(path: &Path, width: u32, height: u32) {
    let img = RgbImage::from_fn(width, height, |x, y| {
        image::Rgb([(x % 256) as u8, (y % 256) as u8, 128])
    });
    img.save(path).unwrap();
}

/// Create a PNG with an alpha gradient — fully transparent on the left
/// edge, fully opaque on the right.
pub fn create_test_rgba_png(path: &Path, width: u32, height: u32) {
    let img = RgbaImage::from_fn(width, height, |x, y| {
        let alpha = (x * 255 / (width - 1).max(1)) as u8;
        image::Rgba([(x % 256) as u8, (y % 256) as u8, 128, alpha])
    });
    img.save(path).unwrap();
}
