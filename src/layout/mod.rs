//! Connector layout engine
//!
//! This module takes connection requests and the current anchor geometry
//! and computes one drawable path per connector whose endpoints resolve.

pub mod geometry;
pub mod routing;
pub mod types;

pub use geometry::{GeometrySnapshot, GeometrySource};
pub use routing::{
    attachment_point, build_orthogonal_path, build_straight_path, layout_all, route_connector,
    ConnectorLayoutEngine, Side,
};
pub use types::*;
