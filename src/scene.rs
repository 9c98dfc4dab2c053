//! Scene files: a serialized geometry snapshot plus the connectors to draw
//!
//! Scenes are written in TOML (JSON is accepted too) so that a bracket
//! captured from a live page can be replayed through the layout pass.

use std::collections::HashMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::bracket::{connections_for, BracketMatch};
use crate::error::SceneError;
use crate::layout::{ConnectionRequest, GeometrySource, Rect};
use crate::renderer::SvgConfig;

/// Stroke settings that override the renderer defaults
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RenderSettings {
    pub stroke: Option<String>,
    pub stroke_width: Option<f64>,
    pub dash_pattern: Option<String>,
    pub viewbox_padding: Option<f64>,
}

impl RenderSettings {
    /// Apply the settings that are present onto an SVG configuration
    pub fn apply(&self, mut config: SvgConfig) -> SvgConfig {
        if let Some(stroke) = &self.stroke {
            config = config.with_stroke(stroke.clone());
        }
        if let Some(width) = self.stroke_width {
            config = config.with_stroke_width(width);
        }
        if let Some(pattern) = &self.dash_pattern {
            config = config.with_dash_pattern(pattern.clone());
        }
        if let Some(padding) = self.viewbox_padding {
            config = config.with_viewbox_padding(padding);
        }
        config
    }
}

/// Container frame, anchors, and connectors for one layout pass
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Scene {
    #[serde(default)]
    pub container: Option<Rect>,
    #[serde(default)]
    pub anchors: HashMap<String, Rect>,
    #[serde(default)]
    pub connections: Vec<ConnectionRequest>,
    #[serde(default)]
    pub matches: Vec<BracketMatch>,
    #[serde(default)]
    pub render: RenderSettings,
}

impl Scene {
    /// Load a scene from a file, picking the format from the extension
    pub fn from_file(path: &Path) -> Result<Self, SceneError> {
        let content = std::fs::read_to_string(path)?;
        let is_json = path
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| e.eq_ignore_ascii_case("json"));

        if is_json {
            Self::from_json_str(&content)
        } else {
            Self::from_str(&content)
        }
    }

    /// Load a scene from a TOML string
    pub fn from_str(content: &str) -> Result<Self, SceneError> {
        Ok(toml::from_str(content)?)
    }

    /// Load a scene from a JSON string
    pub fn from_json_str(content: &str) -> Result<Self, SceneError> {
        Ok(serde_json::from_str(content)?)
    }

    /// Explicit connections followed by those derived from the bracket
    pub fn connection_requests(&self) -> Vec<ConnectionRequest> {
        let mut requests = self.connections.clone();
        requests.extend(connections_for(&self.matches));
        requests
    }

    /// Anchors in id order
    pub fn sorted_anchors(&self) -> Vec<(&str, &Rect)> {
        let mut anchors: Vec<_> = self.anchors.iter().map(|(k, v)| (k.as_str(), v)).collect();
        anchors.sort_by(|a, b| a.0.cmp(b.0));
        anchors
    }
}

impl GeometrySource for Scene {
    fn anchor_rect(&self, id: &str) -> Option<Rect> {
        self.anchors.get(id).copied()
    }

    fn container_rect(&self) -> Option<Rect> {
        self.container
    }
}
