#![allow(dead_code)]
//! Slide unit contract.
//!
//! A slide renders one image and owns its own zoom/pan gesture; this crate
//! only models the part the carousel cares about: the bounded zoom factor
//! and the drag-lock discipline. The slide engages the shared lock while its
//! zoom is non-unit and releases it on return to unit, so carousel panning
//! and per-slide panning are mutually exclusive.

use crate::geometry::bound;
use crate::lock::DragLock;

/// Result of a zoom update, for callers that care about the edges.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum ZoomTransition {
    /// Zoom left 1.0 on this update.
    EnteredZoom,
    /// Zoom returned to exactly 1.0 on this update.
    ReturnedToUnit,
    Unchanged,
}

#[derive(Debug)]
pub struct Slide {
    image: String,
    zoom: f32,
    max_zoom: f32,
    lock: DragLock,
}

impl Slide {
    pub fn new(image: String, max_zoom: f32, lock: DragLock) -> Self {
        Self {
            image,
            zoom: 1.0,
            max_zoom,
            lock,
        }
    }

    /// Source identifier of the image this slide renders.
    #[inline]
    pub fn image(&self) -> &str {
        &self.image
    }

    #[inline]
    pub fn zoom(&self) -> f32 {
        self.zoom
    }

    #[inline]
    pub fn is_zoomed(&self) -> bool {
        self.zoom != 1.0
    }

    /// Apply a zoom factor from the slide's own gesture layer. The factor is
    /// bounded to `[1, max_zoom]`; the shared drag lock follows the bounded
    /// value (engaged while non-unit).
    pub fn set_zoom(&mut self, factor: f32) -> ZoomTransition {
        let was = self.zoom;
        self.zoom = bound(factor, 1.0, self.max_zoom);
        self.lock.set(self.zoom != 1.0);
        if was == 1.0 && self.zoom != 1.0 {
            ZoomTransition::EnteredZoom
        } else if was != 1.0 && self.zoom == 1.0 {
            ZoomTransition::ReturnedToUnit
        } else {
            ZoomTransition::Unchanged
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zoom_bounds_and_lock_follow() {
        let lock = DragLock::new();
        let mut slide = Slide::new("img-0".into(), 3.0, lock.clone());
        assert!(!slide.is_zoomed());

        assert_eq!(slide.set_zoom(2.0), ZoomTransition::EnteredZoom);
        assert!(lock.engaged());

        // Above the ceiling clamps, lock stays engaged.
        assert_eq!(slide.set_zoom(9.0), ZoomTransition::Unchanged);
        assert_eq!(slide.zoom(), 3.0);
        assert!(lock.engaged());

        // Below unit clamps back to exactly 1.0 and releases.
        assert_eq!(slide.set_zoom(0.4), ZoomTransition::ReturnedToUnit);
        assert_eq!(slide.zoom(), 1.0);
        assert!(!lock.engaged());
    }
}
