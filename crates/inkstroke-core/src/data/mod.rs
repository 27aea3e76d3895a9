//! Data models for stroke geometry and presentation
//!
//! This module provides:
//! - The 2D point value type every path is built from
//! - Stroke presentation attributes (colour, width, caps, joins)

pub mod style;

use serde::{Deserialize, Serialize};
use std::fmt;

/// A point on the drawing surface.
///
/// Plain value type: two points are the same point exactly when their
/// coordinates compare equal. Coordinates may be NaN when they come from
/// a malformed path string.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    /// Horizontal coordinate
    pub x: f64,
    /// Vertical coordinate
    pub y: f64,
}

impl Point {
    /// Create a new point
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another point.
    ///
    /// NaN if either point has a NaN coordinate (and neither delta is infinite).
    pub fn distance_to(&self, other: &Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

impl From<Point> for (f64, f64) {
    fn from(p: Point) -> Self {
        (p.x, p.y)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
