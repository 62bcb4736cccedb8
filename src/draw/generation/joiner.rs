//! Line merging
//!
//! Consecutive line segments where one ends exactly where the next starts
//! are drawn as a single polyline. Endpoints are compared exactly; nearly
//! touching segments stay separate.

use crate::draw::geometry::{Point, RenderedPrimitive, SceneItem, Shape, Style};

#[derive(Debug, Clone, Copy)]
struct OpenPath {
    index: usize,
    end: Point,
    style: Style,
}

/// Tracks the most recently emitted open polyline
#[derive(Debug, Default)]
pub struct LineJoiner {
    open: Option<OpenPath>,
    joined: usize,
}

impl LineJoiner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a two-point line segment to `items`
    ///
    /// Extends the open polyline when the segment continues it with the same
    /// style, otherwise starts a new one. Returns true when merged.
    pub fn push(&mut self, items: &mut Vec<SceneItem>, segment: RenderedPrimitive) -> bool {
        let (start, end) = match &segment.shape {
            Shape::Path { points, closed: false } if points.len() == 2 => (points[0], points[1]),
            _ => {
                self.break_chain();
                items.push(segment.into());
                return false;
            }
        };

        if let Some(open) = self.open.as_mut() {
            if open.end == start && open.style == segment.style {
                if let Some(SceneItem::Primitive(RenderedPrimitive {
                    shape: Shape::Path { points, .. },
                    ..
                })) = items.get_mut(open.index)
                {
                    points.push(end);
                    open.end = end;
                    self.joined += 1;
                    return true;
                }
            }
        }

        self.open = Some(OpenPath { index: items.len(), end, style: segment.style });
        items.push(segment.into());
        false
    }

    /// Forget the open polyline so the next segment starts fresh
    pub fn break_chain(&mut self) {
        self.open = None;
    }

    /// Segments merged so far
    pub fn joined(&self) -> usize {
        self.joined
    }
}
