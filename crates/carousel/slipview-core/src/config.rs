#![allow(dead_code)]
//! Core configuration for slipview-core.

use serde::{Deserialize, Serialize};

use crate::geometry::convert_px;

/// Tuned constants for gesture-to-index mapping and the snap animation.
/// These are design constants, not user preferences; `Default` carries the
/// shipped values.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct Config {
    /// Inter-slide gap in design pixels, added to the viewport width when
    /// deriving the slide-to-slide distance.
    pub gap: f32,
    /// Design-pixel to physical-pixel scale for `gap`.
    pub pixel_ratio: f32,
    /// Time-projection factor applied to release velocity (px per px/ms).
    pub velocity_projection: f32,
    /// Rubber-band stiffness for out-of-range drag offsets.
    pub rubberband: f32,
    /// Snap animation parameters.
    pub spring: SpringConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            gap: 16.0,
            pixel_ratio: 1.0,
            velocity_projection: 2000.0,
            rubberband: 0.15,
            spring: SpringConfig::default(),
        }
    }
}

/// Spring parameters for the animated position. `clamp` stops the spring at
/// the target instead of overshooting, which is what a page snap wants.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct SpringConfig {
    pub tension: f32,
    pub friction: f32,
    /// Position threshold (px) below which the spring is considered at rest.
    pub rest_delta: f32,
    /// Velocity threshold (px/s) below which the spring is considered at rest.
    pub rest_velocity: f32,
    pub clamp: bool,
}

impl Default for SpringConfig {
    fn default() -> Self {
        Self {
            tension: 250.0,
            friction: 26.0,
            rest_delta: 0.1,
            rest_velocity: 1.0,
            clamp: true,
        }
    }
}

/// Horizontal distance, in physical pixels, between two adjacent slide
/// positions. Derived once at construction; not reactive to viewport resize
/// (known limitation, documented in the container).
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ViewportMetrics {
    pub slide_width: f32,
}

impl ViewportMetrics {
    /// Derive the slide width from the viewport width plus the configured gap.
    pub fn from_viewport(viewport_width: f32, config: &Config) -> Self {
        Self {
            slide_width: viewport_width + convert_px(config.gap, config.pixel_ratio),
        }
    }
}
