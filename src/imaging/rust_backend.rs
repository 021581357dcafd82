//! Pure Rust image processing backend.
//!
//! Everything except WebP encoding is statically linked pure Rust.
//!
//! ## Crate mapping
//!
//! | Operation | Crate / function |
//! |---|---|
//! | Identify | `image::image_dimensions` |
//! | Decode (JPEG, PNG, BMP, GIF, TIFF, WebP) | `image` crate decoders |
//! | Resize | `image::DynamicImage::resize_exact` with `Lanczos3` filter |
//! | Encode → JPEG | `image::codecs::jpeg::JpegEncoder` with quality |
//! | Encode → WebP | `webp` crate (libwebp, lossy quality encoding) |
//! | Encode → anything else | `DynamicImage::save`, format from extension |

use super::backend::{BackendError, Dimensions, ImageBackend};
use super::params::{EncodingMode, Quality, ResizeParams};
use image::imageops::FilterType;
use image::{DynamicImage, ImageReader, RgbImage};
use std::path::Path;

/// Extensions whose decoders are compiled in and known to work.
///
/// Animated GIF/WebP inputs decode as their first frame only.
const SUPPORTED_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "bmp", "gif", "tiff", "webp"];

/// Returns the set of image file extensions that have working decoders
/// compiled in (lowercase, no leading dot).
pub fn supported_input_extensions() -> &'static [&'static str] {
    SUPPORTED_EXTENSIONS
}

/// Pure Rust backend using the `image` crate ecosystem.
///
/// See the [module docs](self) for the crate-to-operation mapping.
pub struct RustBackend;

impl RustBackend {
    pub fn new() -> Self {
        Self
    }
}

impl Default for RustBackend {
    fn default() -> Self {
        Self::new()
    }
}

/// Load and decode an image from disk.
fn load_image(path: &Path) -> Result<DynamicImage, BackendError> {
    ImageReader::open(path)
        .map_err(BackendError::Io)?
        .decode()
        .map_err(|e| BackendError::Decode(format!("{}: {}", path.display(), e)))
}

/// Composite an image onto an opaque white background, discarding alpha.
///
/// JPEG has no alpha channel, so transparent regions must become *some*
/// color before encoding; white matches what most viewers render
/// transparency against.
fn flatten_onto_white(img: &DynamicImage) -> RgbImage {
    let rgba = img.to_rgba8();
    let mut out = RgbImage::new(rgba.width(), rgba.height());

    for (x, y, px) in rgba.enumerate_pixels() {
        let a = px[3] as u32;
        let blend = |c: u8| ((c as u32 * a + 255 * (255 - a)) / 255) as u8;
        out.put_pixel(x, y, image::Rgb([blend(px[0]), blend(px[1]), blend(px[2])]));
    }

    out
}

/// Encode and save as JPEG at the given quality.
fn save_jpeg(img: &DynamicImage, path: &Path, quality: Quality) -> Result<(), BackendError> {
    let rgb = if img.color().has_alpha() {
        flatten_onto_white(img)
    } else {
        img.to_rgb8()
    };

    let file = std::fs::File::create(path).map_err(BackendError::Io)?;
    let writer = std::io::BufWriter::new(file);
    let encoder = image::codecs::jpeg::JpegEncoder::new_with_quality(writer, quality.value() as u8);
    rgb.write_with_encoder(encoder)
        .map_err(|e| BackendError::Encode(format!("JPEG encode failed: {}", e)))
}

/// Encode and save as lossy WebP at the given quality.
fn save_webp(img: &DynamicImage, path: &Path, quality: Quality) -> Result<(), BackendError> {
    let rgba = img.to_rgba8();
    let encoded = webp::Encoder::from_rgba(rgba.as_raw(), rgba.width(), rgba.height())
        .encode(quality.value() as f32);
    std::fs::write(path, &*encoded).map_err(BackendError::Io)
}

/// Save with the codec default for the target extension.
fn save_native(img: &DynamicImage, path: &Path) -> Result<(), BackendError> {
    img.save(path)
        .map_err(|e| BackendError::Encode(format!("{}: {}", path.display(), e)))
}

/// Save a DynamicImage to the given path using the requested encoding mode.
fn save_image(img: &DynamicImage, path: &Path, encoding: EncodingMode) -> Result<(), BackendError> {
    match encoding {
        EncodingMode::Jpeg(quality) => save_jpeg(img, path, quality),
        EncodingMode::WebP(quality) => save_webp(img, path, quality),
        EncodingMode::Native => save_native(img, path),
    }
}

impl ImageBackend for RustBackend {
    fn identify(&self, path: &Path) -> Result<Dimensions, BackendError> {
        let (width, height) = image::image_dimensions(path).map_err(|e| match e {
            image::ImageError::IoError(io) => BackendError::Io(io),
            other => BackendError::Decode(format!("{}: {}", path.display(), other)),
        })?;
        Ok(Dimensions { width, height })
    }

    fn resize(&self, params: &ResizeParams) -> Result<(), BackendError> {
        let img = load_image(&params.source)?;
        let resized = img.resize_exact(params.width, params.height, FilterType::Lanczos3);
        save_image(&resized, &params.output, params.encoding)
    }
}
