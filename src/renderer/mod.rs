//! SVG renderer for connector overlays
//!
//! This module takes routed connectors and produces an SVG string sized
//! to the container frame, with CSS classes per connector style.

pub mod config;
pub mod path;
pub mod svg;

pub use config::SvgConfig;
pub use svg::{render_svg, render_svg_with_anchors};
