//! Full-frame footprint rendering
//!
//! Each call rebuilds the whole layer: reset the view center, clear, draw
//! graphics in input order with line merging, draw pads, then apply the
//! document-to-screen scale.

use crate::config::RenderConfig;
use crate::draw::generation::{LineJoiner, ShapeRenderer};
use crate::draw::geometry::*;
use crate::surface::RenderSurface;
use indexmap::IndexSet;
use tracing::{debug, warn};

/// Renders footprint documents onto a [`RenderSurface`]
#[derive(Debug, Clone, Default)]
pub struct FootprintScene {
    config: RenderConfig,
}

impl FootprintScene {
    pub fn new(config: RenderConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    /// Replace everything on `surface` with a drawing of `document`
    ///
    /// Never fails: unknown graphic kinds, unsupported pad shapes and custom
    /// primitives are skipped and returned in first-seen order. Malformed
    /// graphics are skipped with a warning.
    pub fn render<S: RenderSurface + ?Sized>(
        &self,
        surface: &mut S,
        document: &FootprintDocument,
    ) -> IndexSet<String> {
        surface.view_mut().set_center(Point::ORIGIN);
        surface.clear();

        let mut unsupported = IndexSet::new();
        let mut items: Vec<SceneItem> = Vec::new();
        let mut joiner = LineJoiner::new();
        let mut skipped = 0usize;

        {
            let renderer = ShapeRenderer::new(&self.config, &*surface);

            for graphic in &document.graphics {
                match graphic {
                    GraphicItem::Line(line) => {
                        joiner.push(&mut items, renderer.render_line(line));
                    }
                    GraphicItem::Unsupported { kind } => {
                        joiner.break_chain();
                        unsupported.insert(kind.clone());
                    }
                    GraphicItem::Malformed { kind, reason } => {
                        joiner.break_chain();
                        skipped += 1;
                        warn!("Skipping malformed {}: {}", kind, reason);
                    }
                    other => {
                        joiner.break_chain();
                        items.extend(renderer.render_graphic(other).into_iter().map(SceneItem::from));
                    }
                }
            }

            for pad in &document.pads {
                let rendered = renderer.render_pad(pad);
                unsupported.extend(rendered.unsupported);
                items.push(rendered.group.into());
            }
        }

        let item_count = items.len();
        for item in items {
            surface.add_item(item);
        }

        let scale = self.config.scene_scale;
        surface.transform_layer(Affine::scale(scale, scale));

        debug!(
            "Rendered {} graphics and {} pads into {} items ({} lines joined, {} malformed, {} unsupported kinds)",
            document.graphics.len(),
            document.pads.len(),
            item_count,
            joiner.joined(),
            skipped,
            unsupported.len()
        );

        unsupported
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::SceneSurface;

    fn line(a: (f64, f64), b: (f64, f64)) -> GraphicItem {
        GraphicItem::Line(Line {
            start: Point::new(a.0, a.1),
            end: Point::new(b.0, b.1),
            layer: "F.SilkS".to_string(),
            stroke_width: 0.12,
        })
    }

    #[test]
    fn test_non_line_item_ends_chain() {
        let scene = FootprintScene::default();
        let mut surface = SceneSurface::default();
        let document = FootprintDocument {
            graphics: vec![
                line((0.0, 0.0), (1.0, 0.0)),
                GraphicItem::Unsupported { kind: "fp_curve".to_string() },
                line((1.0, 0.0), (2.0, 0.0)),
            ],
            ..Default::default()
        };
        let unsupported = scene.render(&mut surface, &document);
        assert_eq!(surface.items().len(), 2);
        assert!(unsupported.contains("fp_curve"));
    }

    #[test]
    fn test_malformed_items_are_skipped() {
        let scene = FootprintScene::default();
        let mut surface = SceneSurface::default();
        let document = FootprintDocument {
            graphics: vec![
                GraphicItem::Malformed { kind: "fp_line".to_string(), reason: "missing end".to_string() },
                line((0.0, 0.0), (1.0, 0.0)),
            ],
            ..Default::default()
        };
        let unsupported = scene.render(&mut surface, &document);
        assert!(unsupported.is_empty());
        assert_eq!(surface.items().len(), 1);
    }

    #[test]
    fn test_layer_scale_applied() {
        let scene = FootprintScene::default();
        let mut surface = SceneSurface::default();
        let document = FootprintDocument { graphics: vec![line((0.0, 0.0), (1.0, 0.0))], ..Default::default() };
        scene.render(&mut surface, &document);
        let SceneItem::Primitive(primitive) = &surface.items()[0] else {
            panic!("line should render as a primitive");
        };
        assert_eq!(primitive.transform.apply(Point::new(1.0, 0.0)), Point::new(10.0, 0.0));
    }
}
