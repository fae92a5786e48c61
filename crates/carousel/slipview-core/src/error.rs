#![allow(dead_code)]
//! Construction-time errors. Everything past construction is total: edge
//! policy, not error returns, handles odd gesture inputs.

use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum CarouselError {
    #[error("carousel requires at least one image")]
    NoImages,
    #[error("slide width must be positive, got {0}")]
    InvalidSlideWidth(f32),
}
