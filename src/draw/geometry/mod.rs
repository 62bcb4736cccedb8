//! Geometry module for footprint rendering
//!
//! # Submodules
//! - `types` - Points, sizes, colors and affine transforms
//! - `document` - Typed footprint document (graphics, pads)
//! - `scene` - Scene graph emitted by the renderer

mod types;
mod document;
mod scene;

pub use types::{
    Point,
    Size,
    Bounds,
    Color,
    Affine,
};

pub use document::{
    FootprintDocument,
    GraphicItem,
    Line,
    Circle,
    Arc,
    Polygon,
    Text,
    Pad,
    PadShape,
    CustomPrimitive,
};

pub use scene::{
    LineCap,
    Style,
    FontWeight,
    TextLabel,
    Shape,
    RenderedPrimitive,
    Group,
    SceneItem,
};
