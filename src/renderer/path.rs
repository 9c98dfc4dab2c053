//! Path data for connector polylines
//!
//! Converts routed point lists into SVG path `d` attribute strings.

use crate::layout::Point;

/// A segment in a resolved path
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathSegment {
    /// Move to starting point
    MoveTo(Point),
    /// Straight line to point
    LineTo(Point),
}

/// A resolved path ready for SVG rendering
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedPath {
    pub segments: Vec<PathSegment>,
}

impl ResolvedPath {
    /// Build a polyline: move to the first point, then a line to each of the rest
    pub fn from_points(points: &[Point]) -> Self {
        let segments = points
            .iter()
            .enumerate()
            .map(|(i, p)| {
                if i == 0 {
                    PathSegment::MoveTo(*p)
                } else {
                    PathSegment::LineTo(*p)
                }
            })
            .collect();
        Self { segments }
    }

    /// Convert to SVG path `d` attribute string
    ///
    /// Coordinates use shortest round-trip formatting, so identical points
    /// always produce identical strings.
    pub fn to_svg_d(&self) -> String {
        let mut d = String::new();

        for seg in &self.segments {
            if !d.is_empty() {
                d.push(' ');
            }
            match seg {
                PathSegment::MoveTo(p) => d.push_str(&format!("M{} {}", p.x, p.y)),
                PathSegment::LineTo(p) => d.push_str(&format!("L{} {}", p.x, p.y)),
            }
        }

        d
    }
}
