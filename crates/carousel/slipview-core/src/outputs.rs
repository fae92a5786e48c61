#![allow(dead_code)]
//! Output contracts from the navigation core.
//!
//! Outputs carry the discrete events of one tick. The continuous position is
//! not an event: hosts poll it every frame for the indicator and the slide
//! strip transform.

use serde::{Deserialize, Serialize};

/// Discrete semantic signals emitted during a tick.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[non_exhaustive]
pub enum NavEvent {
    /// A gesture committed to a target slide. Emitted at the moment of
    /// commit, not when the snap animation finishes.
    IndexChanged { index: usize },
    /// A slide was single-tapped.
    Tapped { slide: usize },
    /// Catch-all for forward-compatible payloads.
    Custom {
        kind: String,
        data: serde_json::Value,
    },
}

/// Outputs returned by `update()`.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Outputs {
    #[serde(default)]
    pub events: Vec<NavEvent>,
}

impl Outputs {
    #[inline]
    pub fn clear(&mut self) {
        self.events.clear();
    }

    #[inline]
    pub fn push_event(&mut self, event: NavEvent) {
        self.events.push(event);
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}
