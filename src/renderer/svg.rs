//! SVG overlay generation from routed connectors

use crate::layout::{ConnectorPath, ConnectorStyle, Rect};

use super::SvgConfig;

/// Build SVG elements incrementally
pub struct SvgBuilder {
    config: SvgConfig,
    debug: Vec<String>,
    connectors: Vec<String>,
    indent: usize,
}

impl SvgBuilder {
    /// Create a new SVG builder
    pub fn new(config: SvgConfig) -> Self {
        Self {
            config,
            debug: vec![],
            connectors: vec![],
            indent: 1,
        }
    }

    fn prefix(&self) -> String {
        self.config.class_prefix.clone().unwrap_or_default()
    }

    fn indent_str(&self) -> String {
        if self.config.pretty_print {
            "  ".repeat(self.indent)
        } else {
            String::new()
        }
    }

    fn newline(&self) -> &str {
        if self.config.pretty_print {
            "\n"
        } else {
            ""
        }
    }

    /// Add a connector path
    ///
    /// Dashed connectors carry the configured `stroke-dasharray`; the path
    /// geometry itself is the same as an orthogonal connector.
    pub fn add_connector(&mut self, connector: &ConnectorPath) {
        let prefix = self.prefix();
        let class_list = format!(
            "{prefix}connector {prefix}connector-{}",
            class_name(connector.style.as_str())
        );
        let dash = if connector.style == ConnectorStyle::Dashed {
            format!(r#" stroke-dasharray="{}""#, escape_xml(&self.config.dash_pattern))
        } else {
            String::new()
        };

        self.connectors.push(format!(
            r#"{}<path class="{}" data-key="{}" d="{}" fill="none" stroke="{}" stroke-width="{}"{}/>"#,
            self.indent_str(),
            class_list,
            escape_xml(&connector.key),
            connector.to_svg_d(),
            escape_xml(&self.config.stroke),
            self.config.stroke_width,
            dash
        ));
    }

    /// Outline an anchor rectangle and label it with its id
    pub fn add_debug_anchor(&mut self, id: &str, rect: &Rect) {
        let prefix = self.prefix();
        let indent = self.indent_str();
        self.debug.push(format!(
            r#"{indent}<rect class="{prefix}debug-anchor" x="{}" y="{}" width="{}" height="{}" fill="none" stroke="red" stroke-dasharray="2,2"/>"#,
            rect.left, rect.top, rect.width, rect.height
        ));
        self.debug.push(format!(
            r#"{indent}<text class="{prefix}debug-label" x="{}" y="{}" font-size="10" fill="red">{}</text>"#,
            rect.left,
            rect.top - 2.0,
            escape_xml(id)
        ));
    }

    /// Build the final SVG string sized to the container frame
    pub fn build(self, frame_width: f64, frame_height: f64) -> String {
        let padding = self.config.viewbox_padding;
        let vb_x = 0.0 - padding;
        let vb_y = 0.0 - padding;
        let vb_w = frame_width + 2.0 * padding;
        let vb_h = frame_height + 2.0 * padding;

        let nl = self.newline();

        let mut svg = String::new();

        if self.config.standalone {
            svg.push_str(r#"<?xml version="1.0" encoding="UTF-8"?>"#);
            svg.push_str(nl);
        }

        svg.push_str(&format!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="{} {} {} {}" width="{}" height="{}">"#,
            vb_x, vb_y, vb_w, vb_h, vb_w, vb_h
        ));
        svg.push_str(nl);

        for elem in &self.debug {
            svg.push_str(elem);
            svg.push_str(nl);
        }

        // Connectors drawn above the debug overlay
        for conn in &self.connectors {
            svg.push_str(conn);
            svg.push_str(nl);
        }

        svg.push_str("</svg>");

        svg
    }
}

/// Render connectors as an SVG overlay for the given container frame
pub fn render_svg(paths: &[ConnectorPath], frame: &Rect, config: &SvgConfig) -> String {
    render_svg_with_anchors(paths, frame, std::iter::empty(), config)
}

/// Render connectors plus an outline of each anchor
///
/// Anchor rectangles are given in the host's coordinate space and are
/// shifted into the container frame before drawing.
pub fn render_svg_with_anchors<'a>(
    paths: &[ConnectorPath],
    frame: &Rect,
    anchors: impl IntoIterator<Item = (&'a str, &'a Rect)>,
    config: &SvgConfig,
) -> String {
    let mut builder = SvgBuilder::new(config.clone());

    for (id, rect) in anchors {
        builder.add_debug_anchor(id, &rect.relative_to(frame));
    }

    for path in paths {
        builder.add_connector(path);
    }

    builder.build(frame.width, frame.height)
}

/// Reduce a style name to characters valid in a CSS class
fn class_name(style: &str) -> String {
    style
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '-' || c == '_' {
                c
            } else {
                '-'
            }
        })
        .collect()
}

/// Escape special XML characters
fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}
