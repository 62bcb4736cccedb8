//! Pad assemblies
//!
//! A pad renders as one [`Group`]: base shape, optional drill hole, then
//! the pin label. Rotation goes on the group last so every child turns
//! about the pad anchor together.

use super::ShapeRenderer;
use crate::draw::geometry::*;
use crate::draw::parsing::{resolve_color, ElementKind};
use crate::surface::TextMeasure;

/// A rendered pad plus any shape kinds it could not draw
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedPad {
    pub group: Group,
    pub unsupported: Vec<String>,
}

impl<'a, M: TextMeasure + ?Sized> ShapeRenderer<'a, M> {
    pub fn render_pad(&self, pad: &Pad) -> RenderedPad {
        let mut children = Vec::new();
        let mut unsupported = Vec::new();

        let color = resolve_color(ElementKind::Pad, pad.primary_layer());
        let style = Style::solid(color, self.config.pad_outline_width);
        let half = self.effective_half_size(pad);

        match &pad.shape {
            PadShape::Rect => children.push(
                RenderedPrimitive::new(
                    Shape::Rectangle { center: pad.position, size: half, corner_radius: 0.0 },
                    style,
                )
                .into(),
            ),
            PadShape::RoundRect => {
                let ratio = pad.rounded_corner_ratio.unwrap_or(self.config.default_roundrect_ratio);
                let corner_radius = (ratio * half.min_side()).min(self.config.max_corner_radius);
                children.push(
                    RenderedPrimitive::new(
                        Shape::Rectangle { center: pad.position, size: half, corner_radius },
                        style,
                    )
                    .into(),
                );
            }
            PadShape::Oval | PadShape::Circle => children.push(
                RenderedPrimitive::new(Shape::Ellipse { center: pad.position, size: half }, style).into(),
            ),
            PadShape::Custom => {
                for primitive in &pad.primitives {
                    match self.render_custom_primitive(pad.position, primitive, color) {
                        Some(rendered) => children.push(rendered.into()),
                        None => {
                            if let CustomPrimitive::Unsupported { kind } = primitive {
                                unsupported.push(kind.clone());
                            }
                        }
                    }
                }
            }
            PadShape::Other(name) => unsupported.push(name.clone()),
        }

        if pad.drill_size.x > 0.0 {
            children.push(
                RenderedPrimitive::new(
                    Shape::Circle {
                        center: pad.position + pad.drill_offset,
                        radius: pad.drill_size.x / 2.0,
                    },
                    Style::filled(resolve_color(ElementKind::Drill, pad.primary_layer())),
                )
                .into(),
            );
        }

        children.push(self.render_pin_label(pad).into());

        let transform = match pad.rotation_degrees {
            Some(degrees) => Affine::rotate_about(pad.position, degrees),
            None => Affine::IDENTITY,
        };

        RenderedPad { group: Group { children, transform }, unsupported }
    }

    /// Half the nominal size, shrunk by half the clearance on each axis.
    /// Never negative: a pad smaller than its clearance collapses to zero.
    pub fn effective_half_size(&self, pad: &Pad) -> Size {
        let clearance = pad.clearance.unwrap_or(self.config.default_clearance);
        Size::new(
            (pad.size.x / 2.0 - clearance / 2.0).max(0.0),
            (pad.size.y / 2.0 - clearance / 2.0).max(0.0),
        )
    }

    fn render_custom_primitive(
        &self,
        anchor: Point,
        primitive: &CustomPrimitive,
        color: Color,
    ) -> Option<RenderedPrimitive> {
        match primitive {
            CustomPrimitive::Polygon { points, stroke_width } => Some(RenderedPrimitive::new(
                Shape::Path {
                    points: points.iter().map(|p| *p + anchor).collect(),
                    closed: true,
                },
                Style::solid(color, *stroke_width),
            )),
            CustomPrimitive::Circle { center, edge, stroke_width } => Some(RenderedPrimitive::new(
                Shape::Circle { center: *center + anchor, radius: center.distance(*edge) },
                Style::solid(color, *stroke_width),
            )),
            CustomPrimitive::Unsupported { .. } => None,
        }
    }

    fn render_pin_label(&self, pad: &Pad) -> RenderedPrimitive {
        let label = self.label(
            pad.position,
            &pad.pin_label,
            &self.config.pad_label_font,
            self.config.pad_label_font_size(),
            FontWeight::Normal,
        );
        let transform = self.baseline_correction(&label);
        RenderedPrimitive::new(Shape::Text(label), Style::filled(Color::WHITE)).with_transform(transform)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::RenderConfig;
    use crate::surface::SceneSurface;

    fn pad(shape: PadShape) -> Pad {
        Pad {
            pin_label: "1".to_string(),
            position: Point::new(1.0, 2.0),
            rotation_degrees: None,
            size: Size::new(4.0, 2.0),
            shape,
            rounded_corner_ratio: None,
            clearance: None,
            drill_size: Size::new(0.0, 0.0),
            drill_offset: Point::ORIGIN,
            layers: vec!["F.Cu".to_string()],
            primitives: Vec::new(),
        }
    }

    fn primitive(item: &SceneItem) -> &RenderedPrimitive {
        match item {
            SceneItem::Primitive(p) => p,
            SceneItem::Group(_) => panic!("pad children should be primitives"),
        }
    }

    #[test]
    fn test_rect_uses_effective_half_size() {
        let config = RenderConfig::default();
        let surface = SceneSurface::default();
        let renderer = ShapeRenderer::new(&config, &surface);
        let rendered = renderer.render_pad(&pad(PadShape::Rect));
        match &primitive(&rendered.group.children[0]).shape {
            Shape::Rectangle { size, corner_radius, .. } => {
                assert!((size.x - 1.9).abs() < 1e-9);
                assert!((size.y - 0.9).abs() < 1e-9);
                assert_eq!(*corner_radius, 0.0);
            }
            other => panic!("unexpected shape {other:?}"),
        }
        // base shape and label, no drill
        assert_eq!(rendered.group.children.len(), 2);
        assert!(rendered.unsupported.is_empty());
    }

    #[test]
    fn test_half_size_never_negative() {
        let config = RenderConfig::default();
        let surface = SceneSurface::default();
        let renderer = ShapeRenderer::new(&config, &surface);
        let mut tiny = pad(PadShape::RoundRect);
        tiny.size = Size::new(0.1, 0.1);
        assert_eq!(renderer.effective_half_size(&tiny), Size::new(0.0, 0.0));

        let rendered = renderer.render_pad(&tiny);
        match &primitive(&rendered.group.children[0]).shape {
            Shape::Rectangle { size, corner_radius, .. } => {
                assert_eq!(*size, Size::new(0.0, 0.0));
                assert_eq!(*corner_radius, 0.0);
            }
            other => panic!("unexpected shape {other:?}"),
        }

        // only the short axis collapses
        tiny.size = Size::new(1.0, 0.1);
        let half = renderer.effective_half_size(&tiny);
        assert!((half.x - 0.4).abs() < 1e-9);
        assert_eq!(half.y, 0.0);
    }

    #[test]
    fn test_custom_primitives_follow_pad_anchor() {
        let config = RenderConfig::default();
        let surface = SceneSurface::default();
        let renderer = ShapeRenderer::new(&config, &surface);
        let mut custom = pad(PadShape::Custom);
        custom.primitives = vec![
            CustomPrimitive::Polygon {
                points: vec![Point::new(-1.0, -1.0), Point::new(1.0, -1.0), Point::new(0.0, 1.0)],
                stroke_width: 0.0,
            },
            CustomPrimitive::Circle {
                center: Point::new(0.5, 0.0),
                edge: Point::new(0.5, 0.75),
                stroke_width: 0.1,
            },
            CustomPrimitive::Unsupported { kind: "gr_arc".to_string() },
        ];
        let rendered = renderer.render_pad(&custom);
        assert_eq!(rendered.unsupported, vec!["gr_arc".to_string()]);

        match &primitive(&rendered.group.children[0]).shape {
            Shape::Path { points, closed } => {
                assert!(closed);
                assert_eq!(points[0], Point::new(0.0, 1.0));
            }
            other => panic!("unexpected shape {other:?}"),
        }
        match &primitive(&rendered.group.children[1]).shape {
            Shape::Circle { center, radius } => {
                assert_eq!(*center, Point::new(1.5, 2.0));
                assert!((radius - 0.75).abs() < 1e-9);
            }
            other => panic!("unexpected shape {other:?}"),
        }
    }

    #[test]
    fn test_other_shape_still_gets_label() {
        let config = RenderConfig::default();
        let surface = SceneSurface::default();
        let renderer = ShapeRenderer::new(&config, &surface);
        let rendered = renderer.render_pad(&pad(PadShape::Other("trapezoid".to_string())));
        assert_eq!(rendered.unsupported, vec!["trapezoid".to_string()]);
        assert_eq!(rendered.group.children.len(), 1);
        let label = primitive(&rendered.group.children[0]);
        assert_eq!(label.style.fill, Some(Color::WHITE));
    }
}
