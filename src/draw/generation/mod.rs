//! Shape generation for footprint elements
//!
//! Converts decoded graphics and pads into scene primitives.
//!
//! # Submodules
//! - `graphics` - Lines, circles, arcs, polygons and text
//! - `pads` - Pad assemblies (base shape, drill, pin label, rotation)
//! - `joiner` - Merges endpoint-connected line segments into polylines

mod graphics;
mod pads;
mod joiner;

pub use pads::RenderedPad;
pub use joiner::LineJoiner;

use crate::config::RenderConfig;
use crate::draw::geometry::{Affine, FontWeight, Point, TextLabel};
use crate::surface::TextMeasure;

/// Turns one graphic or pad into drawable primitives
///
/// Holds only borrowed configuration and a text measurer, so every call is
/// a pure function of its input.
pub struct ShapeRenderer<'a, M: TextMeasure + ?Sized> {
    config: &'a RenderConfig,
    measure: &'a M,
}

impl<'a, M: TextMeasure + ?Sized> ShapeRenderer<'a, M> {
    pub fn new(config: &'a RenderConfig, measure: &'a M) -> Self {
        Self { config, measure }
    }

    pub fn config(&self) -> &RenderConfig {
        self.config
    }

    fn label(&self, anchor: Point, content: &str, font_family: &str, font_size: f64, weight: FontWeight) -> TextLabel {
        TextLabel {
            anchor,
            content: content.to_string(),
            font_family: font_family.to_string(),
            font_size,
            weight,
        }
    }

    /// Vertical shift putting the label's measured center on its anchor line
    fn baseline_correction(&self, label: &TextLabel) -> Affine {
        let measured = self.measure.text_bounds(label).center();
        Affine::translate(0.0, label.anchor.y - measured.y)
    }
}
