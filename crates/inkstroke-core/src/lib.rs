//! # Inkstroke Core
//!
//! Core types shared by every Inkstroke crate.
//! Provides the point value type, the stroke style a committed
//! path is rendered with, and the error types used by the
//! validating layers (configuration, recorder setup).

pub mod data;
pub mod error;

pub use data::{
    style::{LineCap, LineJoin, StrokeStyle},
    Point,
};

pub use error::{validate_tolerance, Error, Result};
