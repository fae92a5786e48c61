#![allow(dead_code)]
//! Slipview Navigation Core (host-agnostic)
//!
//! This crate defines the slide-navigation engine for a horizontally-paged
//! image carousel: geometry helpers, the shared drag lock, a retargetable
//! position spring, the inputs/outputs contracts adapters drive each frame,
//! the NavigationEngine itself, the slide unit contract, and the Carousel
//! container that composes them. Rendering and image loading live in hosts.

pub mod carousel;
pub mod config;
pub mod engine;
pub mod error;
pub mod geometry;
pub mod inputs;
pub mod lock;
pub mod outputs;
pub mod slide;
pub mod spring;

// Re-exports for consumers (adapters)
pub use carousel::{Carousel, CarouselOptions};
pub use config::{Config, SpringConfig, ViewportMetrics};
pub use engine::{NavPhase, NavigationEngine};
pub use error::CarouselError;
pub use geometry::{bound, convert_px, rubberband, rubberband_if_out_of_bounds};
pub use inputs::{Command, Inputs};
pub use lock::DragLock;
pub use outputs::{NavEvent, Outputs};
pub use slide::{Slide, ZoomTransition};
pub use spring::Spring;
