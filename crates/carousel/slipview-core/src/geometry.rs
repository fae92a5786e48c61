#![allow(dead_code)]
//! Geometry helpers:
//! - bound (inclusive clamp, upper bound wins)
//! - convert_px (design-pixel -> physical-pixel scaling)
//! - rubberband (progressive resistance outside a valid range)

/// Clamp `value` into `[min, max]`. The upper bound is applied last, so a
/// degenerate `min > max` resolves to `max`.
#[inline]
pub fn bound(value: f32, min: f32, max: f32) -> f32 {
    value.max(min).min(max)
}

/// Scale a design-pixel length to physical pixels for the current display.
/// A ratio of 1.0 leaves the value unchanged.
#[inline]
pub fn convert_px(design_px: f32, pixel_ratio: f32) -> f32 {
    design_px * pixel_ratio
}

/// Resistance applied to `excess` distance past a range edge. Grows
/// sub-linearly: the further past the edge, the less each extra pixel of
/// finger travel moves the content.
///
/// `dimension` is the reference length (one slide width here) and
/// `coefficient` tunes stiffness; both must be positive.
#[inline]
pub fn rubberband(excess: f32, dimension: f32, coefficient: f32) -> f32 {
    (excess * dimension * coefficient) / (dimension + coefficient * excess)
}

/// Identity inside `[min, max]`; outside, the overshoot is replaced by its
/// rubber-banded equivalent so the value keeps moving with resistance
/// instead of hard-stopping.
#[inline]
pub fn rubberband_if_out_of_bounds(
    value: f32,
    min: f32,
    max: f32,
    dimension: f32,
    coefficient: f32,
) -> f32 {
    if value < min {
        min - rubberband(min - value, dimension, coefficient)
    } else if value > max {
        max + rubberband(value - max, dimension, coefficient)
    } else {
        value
    }
}
