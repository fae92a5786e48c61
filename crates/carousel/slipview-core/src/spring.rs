#![allow(dead_code)]
//! Retargetable spring for the animated horizontal position.
//!
//! The carousel needs one primitive from its animation layer: "set a new
//! target, keep current position and velocity". A new gesture or swipe
//! command simply redirects the in-flight spring; there is no queue and no
//! completion callback. Integration is semi-implicit Euler with fixed
//! substeps so large frame gaps stay stable.

use serde::{Deserialize, Serialize};

use crate::config::SpringConfig;

/// Longest single integration step in seconds; larger `dt`s are subdivided.
const MAX_SUBSTEP: f32 = 1.0 / 120.0;

#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct Spring {
    position: f32,
    velocity: f32,
    target: f32,
    config: SpringConfig,
    settled: bool,
}

impl Spring {
    /// Create a spring at rest at `position`.
    pub fn new(position: f32, config: SpringConfig) -> Self {
        Self {
            position,
            velocity: 0.0,
            target: position,
            config,
            settled: true,
        }
    }

    #[inline]
    pub fn position(&self) -> f32 {
        self.position
    }

    #[inline]
    pub fn velocity(&self) -> f32 {
        self.velocity
    }

    #[inline]
    pub fn target(&self) -> f32 {
        self.target
    }

    #[inline]
    pub fn is_settled(&self) -> bool {
        self.settled
    }

    /// Redirect the spring toward a new target, keeping current position and
    /// velocity. Safe to call mid-flight.
    pub fn retarget(&mut self, target: f32) {
        self.target = target;
        self.settled = self.at_rest();
        if self.settled {
            self.position = target;
            self.velocity = 0.0;
        }
    }

    /// Pin the spring to `position` with no animation (1:1 drag tracking).
    pub fn set_immediate(&mut self, position: f32) {
        self.position = position;
        self.target = position;
        self.velocity = 0.0;
        self.settled = true;
    }

    /// Advance the spring by `dt` seconds.
    pub fn step(&mut self, dt: f32) {
        if self.settled || dt <= 0.0 {
            return;
        }
        let mut remaining = dt;
        while remaining > 0.0 {
            let h = remaining.min(MAX_SUBSTEP);
            remaining -= h;

            let before = self.position - self.target;
            let force = -self.config.tension * before - self.config.friction * self.velocity;
            self.velocity += force * h;
            self.position += self.velocity * h;
            let after = self.position - self.target;

            // Clamped springs stop at the target instead of overshooting.
            if self.config.clamp && before != 0.0 && before.signum() != after.signum() {
                self.settle();
                return;
            }
            if self.at_rest() {
                self.settle();
                return;
            }
        }
    }

    #[inline]
    fn at_rest(&self) -> bool {
        (self.position - self.target).abs() <= self.config.rest_delta
            && self.velocity.abs() <= self.config.rest_velocity
    }

    fn settle(&mut self) {
        self.position = self.target;
        self.velocity = 0.0;
        self.settled = true;
    }
}
