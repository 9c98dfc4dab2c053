//! Core types for connector layout

use std::fmt;

use serde::{Deserialize, Serialize};

/// A 2D point in container-relative coordinates
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// A rectangle as reported by the host rendering layer
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    /// Right edge x-coordinate
    pub fn right(&self) -> f64 {
        self.left + self.width
    }

    /// Bottom edge y-coordinate
    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }

    /// Center point of the rectangle
    pub fn center(&self) -> Point {
        Point {
            x: self.left + self.width / 2.0,
            y: self.top + self.height / 2.0,
        }
    }

    /// This rectangle with its origin moved into `frame`'s coordinate space
    pub fn relative_to(&self, frame: &Rect) -> Rect {
        Rect::new(
            self.left - frame.left,
            self.top - frame.top,
            self.width,
            self.height,
        )
    }
}

/// Line style of a connector
///
/// Parsing is total: unknown style strings are kept verbatim in `Other`
/// and are drawn as straight lines.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ConnectorStyle {
    /// Single segment from source to target
    #[default]
    Straight,
    /// Three-segment elbow sharing a vertical spine at the horizontal midpoint
    Orthogonal,
    /// Orthogonal geometry, drawn with a dashed stroke
    Dashed,
    /// Any other style name
    Other(String),
}

impl ConnectorStyle {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Straight => "straight",
            Self::Orthogonal => "orthogonal",
            Self::Dashed => "dashed",
            Self::Other(name) => name,
        }
    }

    /// Whether this style routes along the orthogonal elbow
    pub fn is_orthogonal(&self) -> bool {
        matches!(self, Self::Orthogonal | Self::Dashed)
    }
}

impl From<&str> for ConnectorStyle {
    fn from(s: &str) -> Self {
        match s {
            "straight" => Self::Straight,
            "orthogonal" => Self::Orthogonal,
            "dashed" => Self::Dashed,
            other => Self::Other(other.to_string()),
        }
    }
}

impl From<String> for ConnectorStyle {
    fn from(s: String) -> Self {
        match s.as_str() {
            "straight" | "orthogonal" | "dashed" => Self::from(s.as_str()),
            _ => Self::Other(s),
        }
    }
}

impl From<ConnectorStyle> for String {
    fn from(style: ConnectorStyle) -> Self {
        match style {
            ConnectorStyle::Other(name) => name,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for ConnectorStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A request to connect two anchors, supplied fresh on each layout pass
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConnectionRequest {
    pub source: String,
    pub target: String,
    #[serde(default)]
    pub style: ConnectorStyle,
}

impl ConnectionRequest {
    pub fn new(
        source: impl Into<String>,
        target: impl Into<String>,
        style: impl Into<ConnectorStyle>,
    ) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
            style: style.into(),
        }
    }

    /// Identity of the connector across layout passes
    pub fn key(&self) -> String {
        format!("{}-{}", self.source, self.target)
    }
}

/// A routed connector ready for rendering
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConnectorPath {
    pub key: String,
    pub style: ConnectorStyle,
    pub points: Vec<Point>,
}

impl ConnectorPath {
    /// SVG path `d` attribute for this connector
    pub fn to_svg_d(&self) -> String {
        crate::renderer::path::ResolvedPath::from_points(&self.points).to_svg_d()
    }
}
