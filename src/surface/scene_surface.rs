use super::{RenderSurface, TextMeasure, View};
use crate::config::FontMetrics;
use crate::draw::geometry::{Affine, Bounds, Point, SceneItem, Size, TextLabel};

/// Retained-mode surface keeping the current frame in memory
#[derive(Debug, Clone, Default)]
pub struct SceneSurface {
    items: Vec<SceneItem>,
    view: View,
    metrics: FontMetrics,
}

impl SceneSurface {
    pub fn new(viewport: Size, metrics: FontMetrics) -> Self {
        Self { items: Vec::new(), view: View::new(viewport), metrics }
    }

    /// Items on the layer, bottom to top
    pub fn items(&self) -> &[SceneItem] {
        &self.items
    }

    pub fn primitive_count(&self) -> usize {
        self.items.iter().map(SceneItem::primitive_count).sum()
    }
}

impl TextMeasure for SceneSurface {
    fn text_bounds(&self, label: &TextLabel) -> Bounds {
        let size = label.font_size;
        let half_width = self.metrics.advance * size * label.content.chars().count() as f64 / 2.0;
        Bounds {
            min: Point::new(label.anchor.x - half_width, label.anchor.y - self.metrics.ascent * size),
            max: Point::new(label.anchor.x + half_width, label.anchor.y + self.metrics.descent * size),
        }
    }
}

impl RenderSurface for SceneSurface {
    fn clear(&mut self) {
        self.items.clear();
    }

    fn add_item(&mut self, item: SceneItem) {
        self.items.push(item);
    }

    // Baked into the items so a later clear leaves no residual layer transform
    fn transform_layer(&mut self, transform: Affine) {
        for item in &mut self.items {
            item.apply_transform(transform);
        }
    }

    fn view(&self) -> &View {
        &self.view
    }

    fn view_mut(&mut self) -> &mut View {
        &mut self.view
    }
}
