//! Footprint document model
//!
//! Typed, immutable snapshot of one footprint as supplied by the host. Kind
//! and shape tags are closed sum types; anything the renderer does not know
//! is carried as an explicit `Unsupported` variant instead of being dropped
//! at decode time.

use super::types::{Point, Size};

/// One footprint: decorative graphics, pads and edit metadata
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FootprintDocument {
    pub name: Option<String>,
    pub description: Option<String>,
    pub tags: Vec<String>,
    /// Unix seconds of the last edit
    pub last_edit_timestamp: Option<u64>,
    pub graphics: Vec<GraphicItem>,
    pub pads: Vec<Pad>,
}

impl FootprintDocument {
    /// Last edit time in milliseconds, for display
    pub fn last_edit_millis(&self) -> Option<u64> {
        self.last_edit_timestamp.map(|secs| secs.saturating_mul(1000))
    }
}

/// Straight segment
#[derive(Debug, Clone, PartialEq)]
pub struct Line {
    pub start: Point,
    pub end: Point,
    pub layer: String,
    pub stroke_width: f64,
}

/// Circle stored as center plus a point on its edge
#[derive(Debug, Clone, PartialEq)]
pub struct Circle {
    pub center: Point,
    pub edge: Point,
    pub layer: String,
    pub stroke_width: f64,
}

impl Circle {
    pub fn radius(&self) -> f64 {
        self.center.distance(self.edge)
    }
}

/// Arc sweeping `sweep_degrees` from `edge` around `center`
#[derive(Debug, Clone, PartialEq)]
pub struct Arc {
    pub center: Point,
    pub edge: Point,
    pub sweep_degrees: f64,
    pub layer: String,
    pub stroke_width: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Polygon {
    pub points: Vec<Point>,
    pub layer: String,
    pub stroke_width: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Text {
    pub value: String,
    pub position: Point,
    pub layer: String,
    pub size: Size,
    pub bold: bool,
}

/// A decorative graphic element
#[derive(Debug, Clone, PartialEq)]
pub enum GraphicItem {
    Line(Line),
    Circle(Circle),
    Arc(Arc),
    Polygon(Polygon),
    Text(Text),
    /// Kind tag the renderer does not draw
    Unsupported { kind: String },
    /// Known kind whose geometry could not be decoded
    Malformed { kind: String, reason: String },
}

impl GraphicItem {
    /// Wire tag of this item
    pub fn kind(&self) -> &str {
        match self {
            GraphicItem::Line(_) => "fp_line",
            GraphicItem::Circle(_) => "fp_circle",
            GraphicItem::Arc(_) => "fp_arc",
            GraphicItem::Polygon(_) => "fp_poly",
            GraphicItem::Text(_) => "fp_text",
            GraphicItem::Unsupported { kind } | GraphicItem::Malformed { kind, .. } => kind,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum PadShape {
    Rect,
    Oval,
    Circle,
    RoundRect,
    Custom,
    /// Recognized by the board format but not drawn (trapezoid, chamfered rect, ...)
    Other(String),
}

/// Sub-shape of a custom pad, in pad-local coordinates
#[derive(Debug, Clone, PartialEq)]
pub enum CustomPrimitive {
    Polygon { points: Vec<Point>, stroke_width: f64 },
    Circle { center: Point, edge: Point, stroke_width: f64 },
    Unsupported { kind: String },
}

/// A copper contact
#[derive(Debug, Clone, PartialEq)]
pub struct Pad {
    pub pin_label: String,
    pub position: Point,
    pub rotation_degrees: Option<f64>,
    pub size: Size,
    pub shape: PadShape,
    pub rounded_corner_ratio: Option<f64>,
    pub clearance: Option<f64>,
    pub drill_size: Size,
    pub drill_offset: Point,
    pub layers: Vec<String>,
    /// Only populated for [`PadShape::Custom`]
    pub primitives: Vec<CustomPrimitive>,
}

impl Pad {
    /// Layer used to pick the pad color
    pub fn primary_layer(&self) -> &str {
        self.layers.first().map(String::as_str).unwrap_or("")
    }
}
