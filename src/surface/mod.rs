//! Drawing surface port
//!
//! [`RenderSurface`] is what the scene renderer and the viewport controller
//! draw onto. Hosts with their own canvas or scene-graph library implement
//! it; [`SceneSurface`] is the in-memory implementation used for snapshots,
//! SVG export and tests.
//!
//! # Submodules
//! - `view` - Center/zoom/viewport transform
//! - `scene_surface` - Retained in-memory surface

mod view;
mod scene_surface;

pub use view::View;
pub use scene_surface::SceneSurface;

use crate::draw::geometry::{Affine, Bounds, SceneItem, TextLabel};

/// Text measurement, needed to correct baseline-anchored labels
pub trait TextMeasure {
    /// Bounds of `label` as it would be drawn, before any item transform
    fn text_bounds(&self, label: &TextLabel) -> Bounds;
}

/// A single component layer plus the view it is seen through
pub trait RenderSurface: TextMeasure {
    /// Remove every item from the layer
    fn clear(&mut self);

    /// Append an item on top of the layer
    fn add_item(&mut self, item: SceneItem);

    /// Apply `transform` to everything currently on the layer
    fn transform_layer(&mut self, transform: Affine);

    fn view(&self) -> &View;

    fn view_mut(&mut self) -> &mut View;
}
