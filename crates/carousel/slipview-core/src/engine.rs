#![allow(dead_code)]
//! NavigationEngine: continuous horizontal position, gesture-to-index
//! commit, and the animated snap transition.
//!
//! The engine owns a single animated scalar (the scroll position in pixels)
//! and a three-phase machine (Idle/Dragging/Animating). The current slide
//! index is never stored; it is derived from the position by rounding
//! wherever it is needed.

use serde::{Deserialize, Serialize};

use crate::config::{Config, ViewportMetrics};
use crate::geometry::{bound, rubberband_if_out_of_bounds};
use crate::inputs::{Command, Inputs};
use crate::lock::DragLock;
use crate::outputs::{NavEvent, Outputs};
use crate::spring::Spring;

#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub enum NavPhase {
    Idle,
    Dragging,
    Animating,
}

#[derive(Debug)]
pub struct NavigationEngine {
    // Owned data
    count: usize,
    metrics: ViewportMetrics,
    cfg: Config,
    lock: DragLock,

    // Live state
    phase: NavPhase,
    position: Spring,

    // Per-tick outputs
    outputs: Outputs,
}

impl NavigationEngine {
    /// Create an engine for `count` slides, positioned at `default_index`
    /// with no animation. `count >= 1` and a positive slide width are
    /// preconditions enforced by the container.
    pub fn new(
        count: usize,
        default_index: usize,
        metrics: ViewportMetrics,
        lock: DragLock,
        cfg: Config,
    ) -> Self {
        let start = default_index as f32 * metrics.slide_width;
        Self {
            count,
            metrics,
            lock,
            phase: NavPhase::Idle,
            position: Spring::new(start, cfg.spring),
            outputs: Outputs::default(),
            cfg,
        }
    }

    #[inline]
    pub fn count(&self) -> usize {
        self.count
    }

    #[inline]
    pub fn metrics(&self) -> ViewportMetrics {
        self.metrics
    }

    #[inline]
    pub fn phase(&self) -> NavPhase {
        self.phase
    }

    /// Continuous scroll offset in pixels. Hosts poll this every frame.
    #[inline]
    pub fn position(&self) -> f32 {
        self.position.position()
    }

    /// Slide index inferred from the live position, clamped to valid bounds.
    pub fn current_index(&self) -> usize {
        let w = self.metrics.slide_width;
        bound(
            (self.position.position() / w).round(),
            0.0,
            (self.count - 1) as f32,
        ) as usize
    }

    /// Start an animated transition to `index * slide_width`.
    ///
    /// The index is passed through unclamped: out-of-range values animate to
    /// an out-of-range rest position and the owner-visible index derivation
    /// only clamps visually. This is a caller contract, not a runtime check.
    pub fn swipe_to(&mut self, index: i32) {
        if index < 0 || index as usize >= self.count {
            log::warn!(
                "swipe_to({index}) outside [0, {}]; animating anyway per caller contract",
                self.count - 1
            );
        }
        self.position
            .retarget(index as f32 * self.metrics.slide_width);
        self.sync_phase_with_spring();
    }

    /// Step the engine by `dt` seconds with this tick's command batch.
    /// Commands are applied in order, then the snap animation advances. An
    /// engaged drag lock makes gesture commands inert but never halts an
    /// animation already in flight.
    pub fn update(&mut self, dt: f32, inputs: Inputs) -> &Outputs {
        self.outputs.clear();
        for cmd in &inputs.commands {
            self.apply(cmd);
        }
        if self.phase == NavPhase::Animating {
            self.position.step(dt);
            if self.position.is_settled() {
                self.phase = NavPhase::Idle;
            }
        }
        &self.outputs
    }

    /// The lock state is re-sampled at the top of every gesture command;
    /// it may change between a move and the release.
    fn apply(&mut self, cmd: &Command) {
        match cmd {
            Command::SwipeTo { index } => self.swipe_to(*index),
            Command::GestureStart => {
                if !self.lock.engaged() {
                    self.phase = NavPhase::Dragging;
                }
            }
            Command::GestureMove { offset_x } => {
                if self.lock.engaged() {
                    return;
                }
                // A move on an unlocked carousel is an active drag even if
                // the start was swallowed by a then-engaged lock.
                self.phase = NavPhase::Dragging;
                // 1:1 finger tracking; out-of-range offsets get rubber-band
                // resistance, never a hard clamp.
                let resisted = self.resist(*offset_x);
                self.position.set_immediate(resisted);
            }
            Command::GestureRelease {
                offset_x,
                velocity_x,
                direction_x,
            } => {
                if self.lock.engaged() {
                    if self.phase == NavPhase::Dragging {
                        self.phase = NavPhase::Idle;
                    }
                    return;
                }
                self.commit(*offset_x, *velocity_x, *direction_x);
            }
            Command::ZoomChanged { factor, .. } => {
                // Non-unit zoom re-centers on the nearest whole slide so no
                // partial slide shows during pinch interaction.
                if *factor != 1.0 {
                    let index = self.current_index();
                    self.swipe_to(index as i32);
                }
            }
            Command::Tap { slide } => {
                self.outputs.push_event(NavEvent::Tapped { slide: *slide });
            }
        }
    }

    /// Gesture-end target computation and commit. Velocity influences which
    /// of the two straddled slides wins, capped so a single gesture never
    /// skips past the pair; the second clamp applies collection bounds.
    fn commit(&mut self, offset_x: f32, velocity_x: f32, direction_x: f32) {
        let w = self.metrics.slide_width;
        let offset = self.resist(offset_x);

        let min_index = (offset / w).floor();
        let max_index = min_index + 1.0;
        let velocity_offset = (velocity_x * self.cfg.velocity_projection).min(w) * direction_x;
        let raw_index = ((offset + velocity_offset) / w).round();
        let index = bound(
            bound(raw_index, min_index, max_index),
            0.0,
            (self.count - 1) as f32,
        ) as usize;

        self.outputs.push_event(NavEvent::IndexChanged { index });
        self.position.retarget(index as f32 * w);
        self.sync_phase_with_spring();
    }

    /// Rubber-band transform for drag offsets outside the valid rest range.
    fn resist(&self, offset_x: f32) -> f32 {
        let w = self.metrics.slide_width;
        let max_position = (self.count - 1) as f32 * w;
        rubberband_if_out_of_bounds(offset_x, 0.0, max_position, w, self.cfg.rubberband)
    }

    fn sync_phase_with_spring(&mut self) {
        self.phase = if self.position.is_settled() {
            NavPhase::Idle
        } else {
            NavPhase::Animating
        };
    }
}
