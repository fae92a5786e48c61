#![allow(dead_code)]
//! Shared drag lock between the carousel and its slides.
//!
//! One lock exists per carousel. A slide engages it while its own zoom/pan
//! gesture is active (zoom != 1) and releases it when zoom returns to unit;
//! the navigation engine re-samples it at the top of every gesture callback
//! and stays inert to pointer input while it is engaged. All access happens
//! on the single UI thread, so a plain shared cell is enough.

use std::cell::Cell;
use std::fmt;
use std::rc::Rc;

/// Cloneable handle to the carousel-wide drag lock.
#[derive(Clone, Default)]
pub struct DragLock(Rc<Cell<bool>>);

impl DragLock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Engage or release the lock. Writers are slides; exactly one slide owns
    /// the lock at a time (the one whose zoom is non-unit).
    #[inline]
    pub fn set(&self, engaged: bool) {
        self.0.set(engaged);
    }

    /// Current lock state. An engaged lock suppresses drag handling but does
    /// not halt an animation already in flight.
    #[inline]
    pub fn engaged(&self) -> bool {
        self.0.get()
    }
}

impl fmt::Debug for DragLock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("DragLock").field(&self.engaged()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn handles_share_state() {
        let lock = DragLock::new();
        let other = lock.clone();
        assert!(!other.engaged());
        lock.set(true);
        assert!(other.engaged());
        other.set(false);
        assert!(!lock.engaged());
    }
}
