//! Image processing backend trait and shared types.
//!
//! The [`ImageBackend`] trait defines the two operations every backend must
//! support: identify and resize.
//!
//! The production implementation is
//! [`RustBackend`](super::rust_backend::RustBackend) — pure Rust decode and
//! resize via the `image` crate, statically linked into the binary.

use super::params::ResizeParams;
use std::path::Path;
use thiserror::Error;

/// Backend failures, split by pipeline stage so the driver can report
/// what actually went wrong: reading bytes, decoding pixels, or writing
/// the output.
#[derive(Error, Debug)]
pub enum BackendError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Decode failed: {0}")]
    Decode(String),
    #[error("Encode failed: {0}")]
    Encode(String),
}

/// Result of an identify operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dimensions {
    pub width: u32,
    pub height: u32,
}

/// Trait for image processing backends.
///
/// Every backend must implement both operations — identify and resize — so
/// the batch driver is backend-agnostic and testable without touching real
/// pixels.
pub trait ImageBackend {
    /// Get image dimensions without a full decode where possible.
    fn identify(&self, path: &Path) -> Result<Dimensions, BackendError>;

    /// Execute a resize work order: decode, resample, encode, write.
    fn resize(&self, params: &ResizeParams) -> Result<(), BackendError>;
}
