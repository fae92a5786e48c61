#![allow(dead_code)]
//! Input contracts for the navigation core.
//!
//! Hosts translate pointer events and imperative calls into a command batch
//! and pass it to `update()` each frame. Commands are applied in order,
//! before the animated position is stepped.

use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Serialize, Deserialize, Default)]
pub struct Inputs {
    /// Commands applied, in order, before stepping.
    #[serde(default)]
    pub commands: Vec<Command>,
}

impl Inputs {
    /// Convenience for single-command batches.
    pub fn one(command: Command) -> Self {
        Self {
            commands: vec![command],
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub enum Command {
    /// Imperative jump to a slide index with animation. The index is trusted
    /// as-is (caller contract; see NavigationEngine::swipe_to).
    SwipeTo { index: i32 },
    /// A horizontal drag gesture began.
    GestureStart,
    /// In-progress drag sample. `offset_x` is the absolute horizontal scroll
    /// offset implied by the finger, in pixels from slide 0.
    GestureMove { offset_x: f32 },
    /// The drag was released. `velocity_x` is the release speed magnitude in
    /// px/ms; `direction_x` is -1.0, 0.0, or 1.0.
    GestureRelease {
        offset_x: f32,
        velocity_x: f32,
        direction_x: f32,
    },
    /// A slide's zoom factor changed. Any non-unit factor re-snaps the
    /// carousel to the nearest whole slide.
    ZoomChanged { slide: usize, factor: f32 },
    /// A slide was single-tapped.
    Tap { slide: usize },
}
