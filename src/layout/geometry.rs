//! Geometry sources for anchor lookup

use std::collections::HashMap;

use super::types::Rect;

/// Read-only, point-in-time access to anchor and container rectangles
///
/// Both rectangles must come from the same layout snapshot. The engine
/// holds a shared borrow of the source for the whole pass.
pub trait GeometrySource {
    /// Current rectangle of the anchor, or `None` if it is not on screen
    fn anchor_rect(&self, id: &str) -> Option<Rect>;

    /// Current rectangle of the container frame
    fn container_rect(&self) -> Option<Rect>;
}

impl<G: GeometrySource + ?Sized> GeometrySource for &G {
    fn anchor_rect(&self, id: &str) -> Option<Rect> {
        (**self).anchor_rect(id)
    }

    fn container_rect(&self) -> Option<Rect> {
        (**self).container_rect()
    }
}

/// An in-memory table of anchor rectangles
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GeometrySnapshot {
    container: Option<Rect>,
    anchors: HashMap<String, Rect>,
}

impl GeometrySnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the container frame
    pub fn with_container(mut self, rect: Rect) -> Self {
        self.container = Some(rect);
        self
    }

    /// Add an anchor rectangle
    pub fn with_anchor(mut self, id: impl Into<String>, rect: Rect) -> Self {
        self.anchors.insert(id.into(), rect);
        self
    }

    /// Insert or replace an anchor, returning the previous rectangle
    pub fn insert(&mut self, id: impl Into<String>, rect: Rect) -> Option<Rect> {
        self.anchors.insert(id.into(), rect)
    }

    /// Remove an anchor, returning its rectangle
    pub fn remove(&mut self, id: &str) -> Option<Rect> {
        self.anchors.remove(id)
    }

    pub fn set_container(&mut self, rect: Option<Rect>) {
        self.container = rect;
    }

    pub fn len(&self) -> usize {
        self.anchors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.anchors.is_empty()
    }

    /// Iterate anchors in id order
    pub fn anchors(&self) -> impl Iterator<Item = (&str, &Rect)> {
        let mut entries: Vec<_> = self.anchors.iter().map(|(k, v)| (k.as_str(), v)).collect();
        entries.sort_by(|a, b| a.0.cmp(b.0));
        entries.into_iter()
    }
}

impl GeometrySource for GeometrySnapshot {
    fn anchor_rect(&self, id: &str) -> Option<Rect> {
        self.anchors.get(id).copied()
    }

    fn container_rect(&self) -> Option<Rect> {
        self.container
    }
}

impl FromIterator<(String, Rect)> for GeometrySnapshot {
    fn from_iter<I: IntoIterator<Item = (String, Rect)>>(iter: I) -> Self {
        Self {
            container: None,
            anchors: iter.into_iter().collect(),
        }
    }
}
