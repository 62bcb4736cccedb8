//! Scene graph produced by the renderer
//!
//! A frame is a flat list of [`SceneItem`]s in z-order. Pads are emitted as
//! [`Group`]s so that a rotation can be applied to the whole assembly.

use super::types::{Affine, Color, Point, Size};
use serde::Serialize;

/// Stroke end style
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LineCap {
    #[default]
    Butt,
    Round,
}

/// Paint applied to a primitive
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct Style {
    pub stroke: Option<Color>,
    pub fill: Option<Color>,
    pub stroke_width: f64,
    pub line_cap: LineCap,
}

impl Style {
    pub fn stroked(color: Color, width: f64) -> Self {
        Style { stroke: Some(color), stroke_width: width, ..Default::default() }
    }

    pub fn filled(color: Color) -> Self {
        Style { fill: Some(color), ..Default::default() }
    }

    /// Stroke and fill with the same color
    pub fn solid(color: Color, width: f64) -> Self {
        Style { stroke: Some(color), fill: Some(color), stroke_width: width, ..Default::default() }
    }

    pub fn with_cap(mut self, cap: LineCap) -> Self {
        self.line_cap = cap;
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FontWeight {
    #[default]
    Normal,
    Bold,
}

/// Horizontally centered text whose anchor sits on the baseline
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TextLabel {
    pub anchor: Point,
    pub content: String,
    pub font_family: String,
    pub font_size: f64,
    pub weight: FontWeight,
}

/// Drawable geometry, in the coordinates of its owning item
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Shape {
    Path { points: Vec<Point>, closed: bool },
    Circle { center: Point, radius: f64 },
    /// `size` is the full drawn extent
    Ellipse { center: Point, size: Size },
    /// `size` is the full drawn extent
    Rectangle { center: Point, size: Size, corner_radius: f64 },
    Text(TextLabel),
}

/// One colored, stroked and/or filled drawable
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderedPrimitive {
    pub shape: Shape,
    pub style: Style,
    pub transform: Affine,
}

impl RenderedPrimitive {
    pub fn new(shape: Shape, style: Style) -> Self {
        Self { shape, style, transform: Affine::IDENTITY }
    }

    pub fn with_transform(mut self, transform: Affine) -> Self {
        self.transform = transform;
        self
    }
}

/// Children drawn under a shared transform
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct Group {
    pub children: Vec<SceneItem>,
    pub transform: Affine,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SceneItem {
    Primitive(RenderedPrimitive),
    Group(Group),
}

impl SceneItem {
    /// Post-multiply the item's own transform by `transform`
    pub fn apply_transform(&mut self, transform: Affine) {
        match self {
            SceneItem::Primitive(p) => p.transform = p.transform.then(transform),
            SceneItem::Group(g) => g.transform = g.transform.then(transform),
        }
    }

    /// Number of leaf primitives under this item
    pub fn primitive_count(&self) -> usize {
        match self {
            SceneItem::Primitive(_) => 1,
            SceneItem::Group(g) => g.children.iter().map(SceneItem::primitive_count).sum(),
        }
    }
}

impl From<RenderedPrimitive> for SceneItem {
    fn from(p: RenderedPrimitive) -> Self {
        SceneItem::Primitive(p)
    }
}

impl From<Group> for SceneItem {
    fn from(g: Group) -> Self {
        SceneItem::Group(g)
    }
}
