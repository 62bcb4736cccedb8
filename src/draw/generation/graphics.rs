//! Graphic element shapes

use super::ShapeRenderer;
use crate::draw::geometry::*;
use crate::draw::parsing::{resolve_color, ElementKind};
use crate::surface::TextMeasure;

impl<'a, M: TextMeasure + ?Sized> ShapeRenderer<'a, M> {
    /// Render one graphic item
    ///
    /// Returns nothing for unsupported or malformed items; recording them
    /// is the caller's concern.
    pub fn render_graphic(&self, item: &GraphicItem) -> Vec<RenderedPrimitive> {
        match item {
            GraphicItem::Line(line) => vec![self.render_line(line)],
            GraphicItem::Circle(circle) => vec![self.render_circle(circle)],
            GraphicItem::Arc(arc) => vec![self.render_arc(arc)],
            GraphicItem::Polygon(polygon) => vec![self.render_polygon(polygon)],
            GraphicItem::Text(text) => vec![self.render_text(text)],
            GraphicItem::Unsupported { .. } | GraphicItem::Malformed { .. } => Vec::new(),
        }
    }

    /// Two-point path with round caps so joined segments meet cleanly
    pub fn render_line(&self, line: &Line) -> RenderedPrimitive {
        let color = resolve_color(ElementKind::Line, &line.layer);
        let style = Style::solid(color, line.stroke_width * self.config.line_stroke_factor)
            .with_cap(LineCap::Round);
        RenderedPrimitive::new(
            Shape::Path { points: vec![line.start, line.end], closed: false },
            style,
        )
    }

    pub fn render_circle(&self, circle: &Circle) -> RenderedPrimitive {
        let color = resolve_color(ElementKind::Circle, &circle.layer);
        RenderedPrimitive::new(
            Shape::Circle { center: circle.center, radius: circle.radius() },
            Style::stroked(color, circle.stroke_width * self.config.outline_stroke_factor),
        )
    }

    /// Fixed-segment polyline approximation starting at the edge point
    pub fn render_arc(&self, arc: &Arc) -> RenderedPrimitive {
        let segments = self.config.arc_segments.max(1);
        let radius = arc.center.distance(arc.edge);
        let start_angle = (arc.edge.y - arc.center.y).atan2(arc.edge.x - arc.center.x);
        let step = arc.sweep_degrees.to_radians() / f64::from(segments);

        let mut points = Vec::with_capacity(segments as usize + 1);
        points.push(arc.edge);
        for i in 1..=segments {
            let angle = start_angle + step * f64::from(i);
            points.push(Point::new(
                arc.center.x + radius * angle.cos(),
                arc.center.y + radius * angle.sin(),
            ));
        }

        let color = resolve_color(ElementKind::Arc, &arc.layer);
        RenderedPrimitive::new(
            Shape::Path { points, closed: false },
            Style::stroked(color, arc.stroke_width * self.config.line_stroke_factor)
                .with_cap(LineCap::Round),
        )
    }

    pub fn render_polygon(&self, polygon: &Polygon) -> RenderedPrimitive {
        let color = resolve_color(ElementKind::Polygon, &polygon.layer);
        RenderedPrimitive::new(
            Shape::Path { points: polygon.points.clone(), closed: true },
            Style::solid(color, polygon.stroke_width * self.config.outline_stroke_factor),
        )
    }

    /// Centered label, baseline-corrected then stretched to the text size
    pub fn render_text(&self, text: &Text) -> RenderedPrimitive {
        let weight = if text.bold { FontWeight::Bold } else { FontWeight::Normal };
        let label = self.label(text.position, &text.value, &self.config.graphic_font, 1.0, weight);
        let correction = self.config.text_correction;
        let transform = self.baseline_correction(&label).then(Affine::scale_about(
            text.position,
            text.size.x * correction,
            text.size.y * correction,
        ));
        let color = resolve_color(ElementKind::Text, &text.layer);
        RenderedPrimitive::new(Shape::Text(label), Style::filled(color)).with_transform(transform)
    }
}
