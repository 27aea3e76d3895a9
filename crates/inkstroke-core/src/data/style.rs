//! Stroke presentation attributes
//!
//! Values are kept as SVG attribute strings so any paint or length the
//! renderer understands (`"black"`, `"#333"`, `"4pt"`, `"2.5"`) can be used.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Shape drawn at the open ends of a stroke
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineCap {
    /// Flat end exactly at the endpoint
    Butt,
    /// Half-disc past the endpoint
    #[default]
    Round,
    /// Half-square past the endpoint
    Square,
}

impl fmt::Display for LineCap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Butt => write!(f, "butt"),
            Self::Round => write!(f, "round"),
            Self::Square => write!(f, "square"),
        }
    }
}

/// Shape drawn where two segments of a stroke meet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineJoin {
    /// Sharp corner
    Miter,
    /// Rounded corner
    #[default]
    Round,
    /// Clipped corner
    Bevel,
}

impl fmt::Display for LineJoin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Miter => write!(f, "miter"),
            Self::Round => write!(f, "round"),
            Self::Bevel => write!(f, "bevel"),
        }
    }
}

/// How a committed stroke is painted
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StrokeStyle {
    /// Fill paint; freehand strokes are open polylines so this is normally `none`
    pub fill: String,
    /// Stroke paint
    pub stroke: String,
    /// Stroke width with optional unit
    pub stroke_width: String,
    /// End cap
    pub line_cap: LineCap,
    /// Segment join
    pub line_join: LineJoin,
}

impl Default for StrokeStyle {
    fn default() -> Self {
        Self {
            fill: "none".to_string(),
            stroke: "black".to_string(),
            stroke_width: "4pt".to_string(),
            line_cap: LineCap::Round,
            line_join: LineJoin::Round,
        }
    }
}

impl StrokeStyle {
    /// Check that every attribute carries a value
    pub fn validate(&self) -> Result<()> {
        let fields = [
            ("fill", &self.fill),
            ("stroke", &self.stroke),
            ("stroke_width", &self.stroke_width),
        ];
        for (field, value) in fields {
            if value.trim().is_empty() {
                return Err(Error::InvalidStyle {
                    field: field.to_string(),
                    reason: "must not be empty".to_string(),
                });
            }
        }
        Ok(())
    }

    /// Builder-style setter for the stroke paint
    pub fn with_stroke(mut self, stroke: impl Into<String>) -> Self {
        self.stroke = stroke.into();
        self
    }

    /// Builder-style setter for the stroke width
    pub fn with_width(mut self, width: impl Into<String>) -> Self {
        self.stroke_width = width.into();
        self
    }
}
