#![allow(dead_code)]
//! Carousel container: composes the NavigationEngine with one Slide per
//! image, wires the shared drag lock, and derives the live indicator.
//!
//! The viewport width is captured once here; the component does not react to
//! resize after construction (device rotation is a known gap).

use serde::{Deserialize, Serialize};

use crate::config::{Config, ViewportMetrics};
use crate::engine::NavigationEngine;
use crate::error::CarouselError;
use crate::inputs::{Command, Inputs};
use crate::lock::DragLock;
use crate::outputs::Outputs;
use crate::slide::Slide;

/// Owner-supplied options. `default_index` is trusted to be in bounds.
/// Every field falls back to its default, so hosts can pass partial options.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct CarouselOptions {
    pub default_index: usize,
    pub max_zoom: f32,
    pub config: Config,
}

impl Default for CarouselOptions {
    fn default() -> Self {
        Self {
            default_index: 0,
            max_zoom: 3.0,
            config: Config::default(),
        }
    }
}

#[derive(Debug)]
pub struct Carousel {
    engine: NavigationEngine,
    slides: Vec<Slide>,
    lock: DragLock,
}

impl Carousel {
    /// Build a carousel over an ordered, non-empty image collection.
    /// `viewport_width` is in physical pixels and must produce a positive
    /// slide width.
    pub fn new(
        images: Vec<String>,
        viewport_width: f32,
        options: CarouselOptions,
    ) -> Result<Self, CarouselError> {
        if images.is_empty() {
            return Err(CarouselError::NoImages);
        }
        let metrics = ViewportMetrics::from_viewport(viewport_width, &options.config);
        if metrics.slide_width <= 0.0 || !metrics.slide_width.is_finite() {
            return Err(CarouselError::InvalidSlideWidth(metrics.slide_width));
        }

        let lock = DragLock::new();
        let slides = images
            .into_iter()
            .map(|image| Slide::new(image, options.max_zoom, lock.clone()))
            .collect::<Vec<_>>();
        let engine = NavigationEngine::new(
            slides.len(),
            options.default_index,
            metrics,
            lock.clone(),
            options.config,
        );

        Ok(Self {
            engine,
            slides,
            lock,
        })
    }

    /// Number of slides.
    #[inline]
    pub fn count(&self) -> usize {
        self.slides.len()
    }

    #[inline]
    pub fn slide(&self, index: usize) -> Option<&Slide> {
        self.slides.get(index)
    }

    /// Handle to the carousel-wide drag lock, for host-side slide gesture
    /// layers that manage zoom outside this crate.
    #[inline]
    pub fn drag_lock(&self) -> DragLock {
        self.lock.clone()
    }

    /// Continuous scroll position in pixels.
    #[inline]
    pub fn position(&self) -> f32 {
        self.engine.position()
    }

    /// Slide index inferred from the live position.
    #[inline]
    pub fn current_index(&self) -> usize {
        self.engine.current_index()
    }

    /// Live position indicator, recomputed from the continuously-updating
    /// position rather than only at commit.
    pub fn indicator(&self) -> String {
        format!("{} / {}", self.current_index() + 1, self.count())
    }

    /// Imperative navigation entry point; see
    /// [`NavigationEngine::swipe_to`] for the (unclamped) index contract.
    pub fn swipe_to(&mut self, index: i32) {
        self.engine.swipe_to(index);
    }

    /// Step the carousel by `dt` seconds. Slide-level commands are routed
    /// through the owning slide first (zoom bounds + lock discipline), then
    /// the whole batch reaches the engine.
    pub fn update(&mut self, dt: f32, inputs: Inputs) -> &Outputs {
        let mut routed = Inputs::default();
        for cmd in inputs.commands {
            match cmd {
                Command::ZoomChanged { slide, factor } => {
                    let Some(unit) = self.slides.get_mut(slide) else {
                        log::warn!("zoom change for unknown slide {slide} dropped");
                        continue;
                    };
                    unit.set_zoom(factor);
                    // Forward the bounded factor so the engine's re-snap
                    // decision matches what the slide actually shows.
                    routed.commands.push(Command::ZoomChanged {
                        slide,
                        factor: unit.zoom(),
                    });
                }
                Command::Tap { slide } if slide >= self.slides.len() => {
                    log::warn!("tap for unknown slide {slide} dropped");
                }
                other => routed.commands.push(other),
            }
        }
        self.engine.update(dt, routed)
    }
}
