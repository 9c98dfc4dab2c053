//! Configuration for SVG rendering

/// Configuration options for SVG output
#[derive(Debug, Clone)]
pub struct SvgConfig {
    /// Padding around the viewBox
    pub viewbox_padding: f64,

    /// Whether to include XML declaration and standalone attributes
    pub standalone: bool,

    /// Whether to format output with indentation
    pub pretty_print: bool,

    /// Prefix for CSS class names (e.g., "bc-" for "bc-connector")
    pub class_prefix: Option<String>,

    /// Stroke color for connectors
    pub stroke: String,

    /// Stroke width for connectors
    pub stroke_width: f64,

    /// `stroke-dasharray` applied to dashed connectors
    pub dash_pattern: String,
}

impl Default for SvgConfig {
    fn default() -> Self {
        Self {
            viewbox_padding: 0.0,
            standalone: true,
            pretty_print: true,
            class_prefix: Some("bc-".to_string()),
            stroke: "#cbd5e1".to_string(),
            stroke_width: 2.0,
            dash_pattern: "5,5".to_string(),
        }
    }
}

impl SvgConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the viewBox padding
    pub fn with_viewbox_padding(mut self, padding: f64) -> Self {
        self.viewbox_padding = padding;
        self
    }

    /// Set whether output is standalone
    pub fn with_standalone(mut self, standalone: bool) -> Self {
        self.standalone = standalone;
        self
    }

    /// Set whether to pretty-print output
    pub fn with_pretty_print(mut self, pretty: bool) -> Self {
        self.pretty_print = pretty;
        self
    }

    /// Set the CSS class prefix
    pub fn with_class_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.class_prefix = Some(prefix.into());
        self
    }

    /// Remove the CSS class prefix
    pub fn without_class_prefix(mut self) -> Self {
        self.class_prefix = None;
        self
    }

    /// Set the connector stroke color
    pub fn with_stroke(mut self, stroke: impl Into<String>) -> Self {
        self.stroke = stroke.into();
        self
    }

    /// Set the connector stroke width
    pub fn with_stroke_width(mut self, width: f64) -> Self {
        self.stroke_width = width;
        self
    }

    /// Set the dash pattern for dashed connectors
    pub fn with_dash_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.dash_pattern = pattern.into();
        self
    }
}
