//! View transform: which part of the project space is on screen

use crate::draw::geometry::{Affine, Bounds, Point, Size};
use serde::Serialize;

/// Center, zoom and viewport size of the visible region
///
/// Project coordinates are scene units; view coordinates are pixels with
/// the origin at the viewport's top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct View {
    center: Point,
    zoom: f64,
    viewport: Size,
}

impl Default for View {
    fn default() -> Self {
        Self::new(Size::new(800.0, 600.0))
    }
}

impl View {
    pub fn new(viewport: Size) -> Self {
        Self { center: Point::ORIGIN, zoom: 1.0, viewport }
    }

    pub fn center(&self) -> Point {
        self.center
    }

    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    pub fn viewport_size(&self) -> Size {
        self.viewport
    }

    pub fn set_center(&mut self, center: Point) {
        self.center = center;
    }

    /// Multiply the zoom, keeping the center fixed
    pub fn scale_by(&mut self, factor: f64) {
        self.zoom *= factor;
    }

    /// Move the visible region by `delta` project units
    pub fn scroll_by(&mut self, delta: Point) {
        self.center = self.center + delta;
    }

    pub fn resize(&mut self, width: f64, height: f64) {
        self.viewport = Size::new(width, height);
    }

    pub fn project_to_view(&self, p: Point) -> Point {
        self.matrix().apply(p)
    }

    pub fn view_to_project(&self, p: Point) -> Point {
        Point::new(
            (p.x - self.viewport.x / 2.0) / self.zoom + self.center.x,
            (p.y - self.viewport.y / 2.0) / self.zoom + self.center.y,
        )
    }

    /// Project-to-view mapping
    pub fn matrix(&self) -> Affine {
        Affine::translate(-self.center.x, -self.center.y)
            .then(Affine::scale(self.zoom, self.zoom))
            .then(Affine::translate(self.viewport.x / 2.0, self.viewport.y / 2.0))
    }

    /// Project-space rectangle currently on screen
    pub fn visible_bounds(&self) -> Bounds {
        Bounds {
            min: self.view_to_project(Point::ORIGIN),
            max: self.view_to_project(Point::new(self.viewport.x, self.viewport.y)),
        }
    }
}
