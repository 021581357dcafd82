//! High-level image operations.
//!
//! These functions combine calculations with backend execution.
//! [`plan_resize`] is pure — it turns one file's original size plus the run
//! configuration into a [`ResizePlan`] — and [`resize_file`] executes such a
//! plan through a backend.

use super::backend::{BackendError, Dimensions, ImageBackend};
use super::calculations::resolve_dimensions;
use super::params::{EncodingMode, OutputFormat, ResizeOptions, ResizeParams};
use std::path::Path;

/// Result type for image operations.
pub type Result<T> = std::result::Result<T, BackendError>;

/// A fully resolved plan for one file: final pixel dimensions, output
/// filename, and encoding mode.
#[derive(Debug, Clone, PartialEq)]
pub struct ResizePlan {
    pub width: u32,
    pub height: u32,
    /// The input filename, with its extension replaced when a format
    /// override was requested; unchanged otherwise.
    pub output_name: String,
    pub encoding: EncodingMode,
}

/// Lowercased extension of a filename, empty when absent.
fn extension_of(file_name: &str) -> String {
    Path::new(file_name)
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase()
}

/// Resolve dimensions, encoding, and output name for a single file.
///
/// Pure function, no I/O. Dimension rules live in
/// [`resolve_dimensions`]; the encoding choice is:
///
/// - JPEG with quality when JPEG output was requested, or when no format
///   was requested and the source extension is `.jpg`/`.jpeg`
/// - lossy WebP with quality when WebP output was requested, or when no
///   format was requested and the source extension is `.webp`
/// - otherwise the codec default for the target extension (quality unused)
///
/// Extension matching is case-insensitive, so `IMG_0042.JPG` re-encodes as
/// JPEG at the requested quality just like its lowercase sibling.
pub fn plan_resize(file_name: &str, original: (u32, u32), options: &ResizeOptions) -> ResizePlan {
    let (width, height) = resolve_dimensions(original, &options.size);
    let source_ext = extension_of(file_name);

    let jpeg_source = matches!(source_ext.as_str(), "jpg" | "jpeg");
    let encoding = match options.format {
        Some(OutputFormat::Jpeg) => EncodingMode::Jpeg(options.quality),
        Some(OutputFormat::WebP) => EncodingMode::WebP(options.quality),
        Some(OutputFormat::Png) => EncodingMode::Native,
        None if jpeg_source => EncodingMode::Jpeg(options.quality),
        None if source_ext == "webp" => EncodingMode::WebP(options.quality),
        None => EncodingMode::Native,
    };

    let output_name = match options.format {
        Some(format) => {
            let stem = Path::new(file_name)
                .file_stem()
                .and_then(|s| s.to_str())
                .unwrap_or(file_name);
            format!("{}.{}", stem, format.extension())
        }
        None => file_name.to_string(),
    };

    ResizePlan {
        width,
        height,
        output_name,
        encoding,
    }
}

/// Outcome of a completed per-file resize, for progress reporting.
#[derive(Debug, Clone)]
pub struct FileOutcome {
    /// Dimensions of the source image.
    pub original: Dimensions,
    pub plan: ResizePlan,
}

/// Resize one file: identify, plan, and execute through the backend.
///
/// `file_name` is the bare filename of `source`, kept separate so output
/// naming never has to re-derive it from the path.
pub fn resize_file(
    backend: &impl ImageBackend,
    source: &Path,
    file_name: &str,
    output_dir: &Path,
    options: &ResizeOptions,
) -> Result<FileOutcome> {
    let original = backend.identify(source)?;
    let plan = plan_resize(file_name, (original.width, original.height), options);

    backend.resize(&ResizeParams {
        source: source.to_path_buf(),
        output: output_dir.join(&plan.output_name),
        width: plan.width,
        height: plan.height,
        encoding: plan.encoding,
    })?;

    Ok(FileOutcome { original, plan })
}
