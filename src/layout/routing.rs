//! Connector routing between bracket anchors

use log::{debug, trace};

use super::geometry::GeometrySource;
use super::types::*;

/// Which point of an anchor a connector attaches to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Side {
    Left,
    #[default]
    Center,
    Right,
}

/// Get the attachment point of an anchor, relative to the container frame
///
/// The y-coordinate is always the anchor's vertical middle.
pub fn attachment_point(anchor: &Rect, container: &Rect, side: Side) -> Point {
    let x = match side {
        Side::Right => anchor.right() - container.left,
        Side::Left => anchor.left - container.left,
        Side::Center => anchor.left - container.left + anchor.width / 2.0,
    };
    let y = anchor.top - container.top + anchor.height / 2.0;
    Point::new(x, y)
}

/// Create an elbow path between two points
///
/// Horizontal to the midpoint of the two x-coordinates, vertical to the
/// target's y, then horizontal into the target.
pub fn build_orthogonal_path(from: Point, to: Point) -> Vec<Point> {
    let mid_x = (from.x + to.x) / 2.0;
    vec![
        from,
        Point::new(mid_x, from.y),
        Point::new(mid_x, to.y),
        to,
    ]
}

/// Create a single straight segment between two points
pub fn build_straight_path(from: Point, to: Point) -> Vec<Point> {
    vec![from, to]
}

/// Route a connector between two resolved points with the given style
pub fn route_connector(from: Point, to: Point, style: &ConnectorStyle) -> Vec<Point> {
    if style.is_orthogonal() {
        build_orthogonal_path(from, to)
    } else {
        build_straight_path(from, to)
    }
}

/// Computes connector paths from the current anchor geometry
///
/// Nothing is cached between passes. Each call to [`layout_all`] reads
/// the geometry source afresh, so callers can invoke it after every
/// resize or data refresh and replace their previous output wholesale.
///
/// [`layout_all`]: ConnectorLayoutEngine::layout_all
pub struct ConnectorLayoutEngine<'g, G: GeometrySource + ?Sized> {
    geometry: &'g G,
}

impl<'g, G: GeometrySource + ?Sized> ConnectorLayoutEngine<'g, G> {
    pub fn new(geometry: &'g G) -> Self {
        Self { geometry }
    }

    /// Resolve an anchor's attachment point in container coordinates
    ///
    /// Returns `None` when either the anchor or the container is unresolved.
    pub fn resolve_anchor_point(&self, anchor_id: &str, side: Side) -> Option<Point> {
        let anchor = self.geometry.anchor_rect(anchor_id)?;
        let container = self.geometry.container_rect()?;
        Some(attachment_point(&anchor, &container, side))
    }

    /// Route every request whose anchors both resolve, in request order
    pub fn layout_all(&self, requests: &[ConnectionRequest]) -> Vec<ConnectorPath> {
        let mut paths = Vec::with_capacity(requests.len());

        for request in requests {
            // Source feeds into target: leave from the right, enter on the left
            let from = self.resolve_anchor_point(&request.source, Side::Right);
            let to = self.resolve_anchor_point(&request.target, Side::Left);

            let (Some(from), Some(to)) = (from, to) else {
                debug!(
                    source = request.source.as_str(),
                    target = request.target.as_str(),
                    source_resolved = from.is_some(),
                    target_resolved = to.is_some();
                    "Skipping connector with unresolved anchor"
                );
                continue;
            };

            let points = route_connector(from, to, &request.style);
            trace!(
                key = request.key().as_str(),
                style = request.style.as_str(),
                points = points.len();
                "Routed connector"
            );

            paths.push(ConnectorPath {
                key: request.key(),
                style: request.style.clone(),
                points,
            });
        }

        paths
    }
}

/// Route all connection requests against a geometry source
pub fn layout_all<G: GeometrySource + ?Sized>(
    geometry: &G,
    requests: &[ConnectionRequest],
) -> Vec<ConnectorPath> {
    ConnectorLayoutEngine::new(geometry).layout_all(requests)
}
