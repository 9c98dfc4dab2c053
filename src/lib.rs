//! Bracket Connectors - connector lines between tournament bracket boxes
//!
//! This library resolves bracket match boxes to container-relative anchor
//! points, routes straight or orthogonal connectors between them, and
//! renders the result as an SVG overlay.
//!
//! # Example
//!
//! ```rust
//! use bracket_connectors::{layout_all, ConnectionRequest, GeometrySnapshot, Point, Rect};
//!
//! let geometry = GeometrySnapshot::new()
//!     .with_container(Rect::new(0.0, 0.0, 400.0, 200.0))
//!     .with_anchor("semi-1", Rect::new(0.0, 30.0, 20.0, 40.0))
//!     .with_anchor("final", Rect::new(120.0, 30.0, 80.0, 40.0));
//!
//! let paths = layout_all(&geometry, &[ConnectionRequest::new("semi-1", "final", "orthogonal")]);
//! assert_eq!(paths[0].points[0], Point::new(20.0, 50.0));
//! assert_eq!(paths[0].to_svg_d(), "M20 50 L70 50 L70 50 L120 50");
//! ```

pub mod bracket;
pub mod error;
pub mod layout;
pub mod renderer;
pub mod scene;

pub use bracket::{connections_for, BracketMatch};
pub use error::{RenderError, SceneError};
pub use layout::{
    layout_all, ConnectionRequest, ConnectorLayoutEngine, ConnectorPath, ConnectorStyle,
    GeometrySnapshot, GeometrySource, Point, Rect, Side,
};
pub use renderer::{render_svg, render_svg_with_anchors, SvgConfig};
pub use scene::{RenderSettings, Scene};

use log::debug;
use serde::Serialize;

/// Configuration for the complete render pipeline
#[derive(Debug, Clone, Default)]
pub struct RenderConfig {
    /// SVG output configuration
    pub svg: SvgConfig,
    /// Debug mode: outline anchors and label them with their ids
    pub debug: bool,
}

impl RenderConfig {
    /// Create a new configuration with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the SVG configuration
    pub fn with_svg(mut self, config: SvgConfig) -> Self {
        self.svg = config;
        self
    }

    /// Enable or disable debug mode
    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }
}

/// A connector as written to JSON output
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConnectorRecord {
    pub key: String,
    pub style: ConnectorStyle,
    pub points: Vec<Point>,
    pub d: String,
}

impl From<&ConnectorPath> for ConnectorRecord {
    fn from(path: &ConnectorPath) -> Self {
        Self {
            key: path.key.clone(),
            style: path.style.clone(),
            points: path.points.clone(),
            d: path.to_svg_d(),
        }
    }
}

/// Route every connector a scene asks for
pub fn layout_scene(scene: &Scene) -> Vec<ConnectorPath> {
    let requests = scene.connection_requests();
    let paths = layout_all(scene, &requests);
    debug!(
        requested = requests.len(),
        drawn = paths.len();
        "Laid out scene connectors"
    );
    paths
}

/// Render an already-parsed scene to SVG
pub fn render_scene(scene: &Scene, config: &RenderConfig) -> String {
    let paths = layout_scene(scene);
    let frame = scene.container.unwrap_or_default();
    let svg_config = scene.render.apply(config.svg.clone());

    if config.debug {
        render_svg_with_anchors(&paths, &frame, scene.sorted_anchors(), &svg_config)
    } else {
        render_svg(&paths, &frame, &svg_config)
    }
}

/// Render a TOML scene to SVG with default configuration
///
/// # Example
///
/// ```rust
/// use bracket_connectors::render;
///
/// let svg = render(r#"
///     [container]
///     left = 0
///     top = 0
///     width = 300
///     height = 100
///
///     [anchors]
///     a = { left = 0, top = 0, width = 50, height = 20 }
///     b = { left = 150, top = 60, width = 50, height = 20 }
///
///     [[connections]]
///     source = "a"
///     target = "b"
///     style = "orthogonal"
/// "#).unwrap();
///
/// assert!(svg.contains("<svg"));
/// assert!(svg.contains(r#"data-key="a-b""#));
/// ```
pub fn render(source: &str) -> Result<String, RenderError> {
    render_with_config(source, RenderConfig::default())
}

/// Render a TOML scene to SVG with custom configuration
pub fn render_with_config(source: &str, config: RenderConfig) -> Result<String, RenderError> {
    let scene = Scene::from_str(source)?;
    Ok(render_scene(&scene, &config))
}

/// Serialize connectors as a pretty-printed JSON array
pub fn to_json(paths: &[ConnectorPath]) -> Result<String, RenderError> {
    let records: Vec<ConnectorRecord> = paths.iter().map(ConnectorRecord::from).collect();
    Ok(serde_json::to_string_pretty(&records)?)
}

/// One `key<TAB>d` line per connector
pub fn to_path_lines(paths: &[ConnectorPath]) -> String {
    paths
        .iter()
        .map(|p| format!("{}\t{}", p.key, p.to_svg_d()))
        .collect::<Vec<_>>()
        .join("\n")
}
