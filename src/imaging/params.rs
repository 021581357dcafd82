//! Parameter types for image operations.
//!
//! These structs describe *what* to do, not *how* to do it. They are the
//! interface between the high-level [`operations`](super::operations) module
//! (which plans what each output should look like) and the
//! [`backend`](super::backend) (which does the actual pixel work). This
//! separation allows swapping backends (e.g. for testing with a mock)
//! without changing planning logic.
//!
//! ## Types
//!
//! - [`Quality`] — Lossy encoding quality (1–100, default 95). Clamped on construction.
//! - [`SizeSpec`] — The user's sizing request: optional width, height, scale percent.
//! - [`OutputFormat`] — Requested output format for conversion.
//! - [`EncodingMode`] — How the output file gets encoded (JPEG/WebP with quality, or codec default).
//! - [`ResizeOptions`] — Full per-run configuration: sizing + format + quality.
//! - [`ResizeParams`] — A single work order for the backend: source, output path, dimensions, encoding.

use std::path::PathBuf;

/// Quality setting for lossy image encoding (1-100).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Quality(pub u32);

impl Quality {
    pub fn new(value: u32) -> Self {
        Self(value.clamp(1, 100))
    }

    pub fn value(self) -> u32 {
        self.0
    }
}

impl Default for Quality {
    fn default() -> Self {
        Self(95)
    }
}

/// The user's sizing request.
///
/// Each field is `Some` only when the user actually supplied it. Planning
/// branches on presence, never on value — a zero here would be a bug in the
/// caller, not an "unset" marker.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SizeSpec {
    /// Target width in pixels.
    pub width: Option<u32>,
    /// Target height in pixels.
    pub height: Option<u32>,
    /// Uniform scale as an integer percentage (50 = half size).
    pub scale_percent: Option<u32>,
}

/// Output format requested for conversion.
///
/// The `jpg` and `jpeg` CLI spellings both map to [`OutputFormat::Jpeg`];
/// converted files get the canonical extension from [`extension`](Self::extension).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Jpeg,
    Png,
    WebP,
}

impl OutputFormat {
    /// Canonical file extension for this format (no leading dot).
    pub fn extension(self) -> &'static str {
        match self {
            OutputFormat::Jpeg => "jpg",
            OutputFormat::Png => "png",
            OutputFormat::WebP => "webp",
        }
    }
}

/// How an output file gets encoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EncodingMode {
    /// JPEG with explicit quality. Alpha/palette sources are flattened onto
    /// an opaque white background first (JPEG has no alpha channel).
    Jpeg(Quality),
    /// Lossy WebP with explicit quality.
    WebP(Quality),
    /// Codec default for the target extension; quality does not apply.
    Native,
}

/// Full configuration for one batch run.
///
/// An explicit value bundle passed down from the CLI — no global defaults,
/// no process-wide state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ResizeOptions {
    pub size: SizeSpec,
    /// Convert outputs to this format; `None` keeps each file's own format.
    pub format: Option<OutputFormat>,
    pub quality: Quality,
}

/// A single work order for the backend.
#[derive(Debug, Clone, PartialEq)]
pub struct ResizeParams {
    pub source: PathBuf,
    pub output: PathBuf,
    pub width: u32,
    pub height: u32,
    pub encoding: EncodingMode,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quality_clamps_to_valid_range() {
        assert_eq!(Quality::new(0).value(), 1);
        assert_eq!(Quality::new(50).value(), 50);
        assert_eq!(Quality::new(150).value(), 100);
    }

    #[test]
    fn quality_default_is_95() {
        assert_eq!(Quality::default().value(), 95);
    }

    #[test]
    fn format_extensions() {
        assert_eq!(OutputFormat::Jpeg.extension(), "jpg");
        assert_eq!(OutputFormat::Png.extension(), "png");
        assert_eq!(OutputFormat::WebP.extension(), "webp");
    }

    #[test]
    fn size_spec_default_is_all_absent() {
        let spec = SizeSpec::default();
        assert_eq!(spec.width, None);
        assert_eq!(spec.height, None);
        assert_eq!(spec.scale_percent, None);
    }
}
