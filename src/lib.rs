//! # batchimg
//!
//! Batch image resizer: point it at a folder, get a folder of resized
//! images back. Sizing comes from explicit dimensions or a scale
//! percentage; output format conversion is optional.
//!
//! # Architecture: Plan, Then Execute
//!
//! Each file goes through two cleanly separated steps:
//!
//! ```text
//! 1. Plan      original size + options  →  ResizePlan   (pure, no I/O)
//! 2. Execute   ResizePlan               →  output file  (decode/resize/encode)
//! ```
//!
//! Planning — which dimensions, which encoder, which output name — is pure
//! functions over plain data, so the sizing rules and the format policy are
//! unit tested without decoding a single pixel. Execution goes through the
//! [`imaging::ImageBackend`] trait, so the batch driver is tested against a
//! recording mock and the real codecs are exercised separately.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`imaging`] | Dimension math, encoding policy, and the pixel backend |
//! | [`batch`] | Sequential driver — directory listing, per-file error tallies |
//! | [`output`] | CLI output formatting — progress lines and the final summary |
//!
//! # Design Decisions
//!
//! ## Presence, Not Truthiness
//!
//! Sizing parameters are `Option<u32>` and every rule branches on
//! presence. A width of zero can never masquerade as "no width given" —
//! the CLI rejects zero outright, and the resolver would treat `Some(0)`
//! as a real (if absurd) request rather than silently falling through to
//! the next rule.
//!
//! ## Lanczos3 Resampling
//!
//! All resizes use `image`'s Lanczos3 filter — the slowest built-in
//! filter and the one that keeps fine detail best. Batch resizing is
//! throughput-tolerant; nobody is waiting on a single frame.
//!
//! ## White-Matte JPEG Conversion
//!
//! Converting an image with transparency to JPEG composites it onto an
//! opaque white background first. JPEG simply has no alpha channel, and
//! encoders otherwise fail on RGBA input or, worse, drop the channel and
//! leave halos. White matches what browsers render transparency against.
//!
//! ## One File at a Time
//!
//! The driver is strictly sequential. Per-file isolation is the point:
//! one corrupt file means one `Failed` line and an exit summary with a
//! nonzero failure count, never a dead batch.

pub mod batch;
pub mod imaging;
pub mod output;

#[cfg(test)]
pub(crate) mod test_helpers;
