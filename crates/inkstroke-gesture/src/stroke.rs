//! Committed strokes and their SVG rendering

use inkstroke_core::{Point, StrokeStyle};
use inkstroke_path::{parse, SimplifyStats};

/// A finished gesture, ready to be rendered
#[derive(Debug, Clone, PartialEq)]
pub struct Stroke {
    /// Simplified path string
    pub path: String,
    /// Style the stroke was drawn with
    pub style: StrokeStyle,
    /// How much the raw gesture was thinned
    pub stats: SimplifyStats,
}

impl Stroke {
    /// Points of the committed path
    pub fn points(&self) -> Vec<Point> {
        parse(&self.path)
    }

    /// Render as a standalone SVG `<path>` element
    pub fn to_svg_element(&self) -> String {
        format!(
            r#"<path d="{}" fill="{}" stroke="{}" stroke-width="{}" stroke-linecap="{}" stroke-linejoin="{}"/>"#,
            escape_attr(&self.path),
            escape_attr(&self.style.fill),
            escape_attr(&self.style.stroke),
            escape_attr(&self.style.stroke_width),
            self.style.line_cap,
            self.style.line_join,
        )
    }
}

fn escape_attr(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(ch),
        }
    }
    out
}
