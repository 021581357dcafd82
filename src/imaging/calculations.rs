//! Pure calculation functions for image dimensions.
//!
//! All functions here are pure and testable without any I/O or images.

use super::params::SizeSpec;

/// Resolve final output dimensions from the original size and a sizing request.
///
/// Rules are evaluated in priority order; the first one whose inputs are
/// present wins. Branching is strictly on presence (`Option`), never on
/// value — `Some(0)` would not fall through to a later rule.
///
/// 1. `scale_percent` → both axes scaled by `floor(dim * percent / 100)`
/// 2. `width` and `height` → used verbatim (aspect ratio not preserved)
/// 3. `width` only → height derived, aspect-ratio-preserving
/// 4. `height` only → width derived, aspect-ratio-preserving
/// 5. nothing → original dimensions (no-op resize)
///
/// Derivation is exact integer floor math. Derived and scaled dimensions
/// are clamped to a 1px floor so a degenerate request (say, 50% of a 1×1
/// image) still yields an encodable size.
///
/// # Arguments
/// * `original` - Original image dimensions (width, height), both nonzero
/// * `spec` - The sizing request
///
/// # Returns
/// * `(width, height)` - Final output dimensions
///
/// # Examples
/// ```
/// # use batchimg::imaging::{SizeSpec, resolve_dimensions};
/// // Width-only request preserves aspect ratio
/// let spec = SizeSpec { width: Some(400), ..Default::default() };
/// assert_eq!(resolve_dimensions((1000, 500), &spec), (400, 200));
///
/// // Scale applies uniformly to both axes
/// let spec = SizeSpec { scale_percent: Some(50), ..Default::default() };
/// assert_eq!(resolve_dimensions((1000, 500), &spec), (500, 250));
/// ```
pub fn resolve_dimensions(original: (u32, u32), spec: &SizeSpec) -> (u32, u32) {
    let (orig_w, orig_h) = original;

    if let Some(percent) = spec.scale_percent {
        return (
            floor_ratio(orig_w, percent, 100),
            floor_ratio(orig_h, percent, 100),
        );
    }

    match (spec.width, spec.height) {
        (Some(w), Some(h)) => (w, h),
        (Some(w), None) => (w, floor_ratio(orig_h, w, orig_w)),
        (None, Some(h)) => (floor_ratio(orig_w, h, orig_h), h),
        (None, None) => (orig_w, orig_h),
    }
}

/// `floor(value * num / den)` in u64 so the floor is exact, clamped to
/// `1..=u32::MAX`.
fn floor_ratio(value: u32, num: u32, den: u32) -> u32 {
    let scaled = value as u64 * num as u64 / den as u64;
    scaled.clamp(1, u32::MAX as u64) as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spec(width: Option<u32>, height: Option<u32>, scale: Option<u32>) -> SizeSpec {
        SizeSpec {
            width,
            height,
            scale_percent: scale,
        }
    }

    // =========================================================================
    // Rule 1: scale percent
    // =========================================================================

    #[test]
    fn scale_halves_both_axes() {
        assert_eq!(
            resolve_dimensions((1000, 500), &spec(None, None, Some(50))),
            (500, 250)
        );
    }

    #[test]
    fn scale_floors_odd_dimensions() {
        // 333 * 50 / 100 = 166.5 → 166; 111 * 50 / 100 = 55.5 → 55
        assert_eq!(
            resolve_dimensions((333, 111), &spec(None, None, Some(50))),
            (166, 55)
        );
    }

    #[test]
    fn scale_hundred_is_identity() {
        assert_eq!(
            resolve_dimensions((800, 600), &spec(None, None, Some(100))),
            (800, 600)
        );
    }

    #[test]
    fn scale_can_enlarge() {
        assert_eq!(
            resolve_dimensions((400, 300), &spec(None, None, Some(200))),
            (800, 600)
        );
    }

    #[test]
    fn scale_clamps_to_one_pixel() {
        // 1 * 10 / 100 = 0 → clamped up to the 1px floor
        assert_eq!(
            resolve_dimensions((1, 1), &spec(None, None, Some(10))),
            (1, 1)
        );
    }

    // =========================================================================
    // Rule 2: explicit width and height
    // =========================================================================

    #[test]
    fn both_dimensions_used_verbatim() {
        // Aspect ratio deliberately not preserved
        assert_eq!(
            resolve_dimensions((1000, 500), &spec(Some(300), Some(300), None)),
            (300, 300)
        );
    }

    // =========================================================================
    // Rule 3: width only, aspect-preserving
    // =========================================================================

    #[test]
    fn width_only_derives_height() {
        assert_eq!(
            resolve_dimensions((1000, 500), &spec(Some(400), None, None)),
            (400, 200)
        );
    }

    #[test]
    fn width_only_floors_derived_height() {
        // 333 * 100 / 999 = 33.33 → 33
        assert_eq!(
            resolve_dimensions((999, 333), &spec(Some(100), None, None)),
            (100, 33)
        );
    }

    #[test]
    fn width_only_portrait_source() {
        // 2000 * 750 / 1500 = 1000
        assert_eq!(
            resolve_dimensions((1500, 2000), &spec(Some(750), None, None)),
            (750, 1000)
        );
    }

    // =========================================================================
    // Rule 4: height only, aspect-preserving
    // =========================================================================

    #[test]
    fn height_only_derives_width() {
        assert_eq!(
            resolve_dimensions((1000, 500), &spec(None, Some(100), None)),
            (200, 100)
        );
    }

    #[test]
    fn height_only_floors_derived_width() {
        // 999 * 100 / 333 = 300
        assert_eq!(
            resolve_dimensions((999, 333), &spec(None, Some(100), None)),
            (300, 100)
        );
    }

    // =========================================================================
    // Rule 5: no sizing at all
    // =========================================================================

    #[test]
    fn no_request_is_identity() {
        assert_eq!(
            resolve_dimensions((640, 480), &spec(None, None, None)),
            (640, 480)
        );
    }

    // =========================================================================
    // Priority order
    // =========================================================================

    #[test]
    fn scale_wins_over_explicit_dimensions() {
        assert_eq!(
            resolve_dimensions((1000, 500), &spec(Some(300), Some(300), Some(50))),
            (500, 250)
        );
    }

    #[test]
    fn explicit_pair_wins_over_aspect_derivation() {
        // With both present, neither axis is derived
        assert_eq!(
            resolve_dimensions((1000, 500), &spec(Some(100), Some(400), None)),
            (100, 400)
        );
    }

    #[test]
    fn aspect_ratio_roughly_preserved_for_single_axis() {
        let (w, h) = resolve_dimensions((1920, 1080), &spec(Some(640), None, None));
        // 640/360 == 1920/1080 exactly in this case
        assert_eq!((w, h), (640, 360));
        let (w, h) = resolve_dimensions((1920, 1080), &spec(None, Some(540), None));
        assert_eq!((w, h), (960, 540));
    }
}
