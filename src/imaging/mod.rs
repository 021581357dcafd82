//! Image processing — planning is pure, pixels go through a backend.
//!
//! | Operation | Crate / function |
//! |---|---|
//! | **Identify** | `image::image_dimensions` |
//! | **Resize** | Lanczos3 via `image::DynamicImage::resize_exact` |
//! | **Encode → JPEG** | `JpegEncoder` with quality, alpha flattened to white |
//! | **Encode → WebP** | `webp` crate, lossy quality encoding |
//! | **Encode → other** | `DynamicImage::save`, codec default per extension |
//!
//! The module is split into:
//! - **Calculations**: Pure functions for dimension math (unit testable)
//! - **Parameters**: Data structures describing image operations
//! - **Operations**: Planning + execution combining calculations and backend
//! - **Backend**: [`ImageBackend`] trait + [`RustBackend`]

pub mod backend;
mod calculations;
pub mod operations;
mod params;
pub mod rust_backend;

pub use backend::{BackendError, Dimensions, ImageBackend};
pub use calculations::resolve_dimensions;
pub use operations::{FileOutcome, ResizePlan, plan_resize, resize_file};
pub use params::{EncodingMode, OutputFormat, Quality, ResizeOptions, ResizeParams, SizeSpec};
pub use rust_backend::{RustBackend, supported_input_extensions};
