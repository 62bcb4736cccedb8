//! SVG serialization of a rendered frame
//!
//! The viewBox is the project rectangle currently on screen, so the output
//! matches what the host sees at the current pan and zoom.

use crate::draw::geometry::*;
use crate::error::ExportError;
use crate::surface::{RenderSurface, SceneSurface};
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;
use std::io::Write;

const SVG_NAMESPACE: &str = "http://www.w3.org/2000/svg";

/// Write the surface's current frame as a standalone SVG document
pub fn export_svg(surface: &SceneSurface) -> Result<String, ExportError> {
    let mut writer = Writer::new_with_indent(Vec::new(), b' ', 2);
    writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;

    let view = surface.view();
    let visible = view.visible_bounds();
    let viewport = view.viewport_size();
    let view_box = format!(
        "{} {} {} {}",
        visible.min.x,
        visible.min.y,
        visible.width(),
        visible.height()
    );

    let mut root = BytesStart::new("svg");
    root.push_attribute(("xmlns", SVG_NAMESPACE));
    root.push_attribute(("viewBox", view_box.as_str()));
    root.push_attribute(("width", viewport.x.to_string().as_str()));
    root.push_attribute(("height", viewport.y.to_string().as_str()));
    writer.write_event(Event::Start(root))?;

    for item in surface.items() {
        write_item(&mut writer, item)?;
    }

    writer.write_event(Event::End(BytesEnd::new("svg")))?;
    Ok(String::from_utf8(writer.into_inner())?)
}

fn write_item<W: Write>(writer: &mut Writer<W>, item: &SceneItem) -> Result<(), ExportError> {
    match item {
        SceneItem::Primitive(primitive) => write_primitive(writer, primitive),
        SceneItem::Group(group) => {
            let mut start = BytesStart::new("g");
            if !group.transform.is_identity() {
                start.push_attribute(("transform", matrix(&group.transform).as_str()));
            }
            writer.write_event(Event::Start(start))?;
            for child in &group.children {
                write_item(writer, child)?;
            }
            writer.write_event(Event::End(BytesEnd::new("g")))?;
            Ok(())
        }
    }
}

fn write_primitive<W: Write>(writer: &mut Writer<W>, primitive: &RenderedPrimitive) -> Result<(), ExportError> {
    let mut element = match &primitive.shape {
        Shape::Path { points, closed } => {
            let mut start = BytesStart::new("path");
            start.push_attribute(("d", path_data(points, *closed).as_str()));
            start
        }
        Shape::Circle { center, radius } => {
            let mut start = BytesStart::new("circle");
            start.push_attribute(("cx", center.x.to_string().as_str()));
            start.push_attribute(("cy", center.y.to_string().as_str()));
            start.push_attribute(("r", radius.to_string().as_str()));
            start
        }
        Shape::Ellipse { center, size } => {
            let mut start = BytesStart::new("ellipse");
            start.push_attribute(("cx", center.x.to_string().as_str()));
            start.push_attribute(("cy", center.y.to_string().as_str()));
            start.push_attribute(("rx", (size.x / 2.0).to_string().as_str()));
            start.push_attribute(("ry", (size.y / 2.0).to_string().as_str()));
            start
        }
        Shape::Rectangle { center, size, corner_radius } => {
            let mut start = BytesStart::new("rect");
            start.push_attribute(("x", (center.x - size.x / 2.0).to_string().as_str()));
            start.push_attribute(("y", (center.y - size.y / 2.0).to_string().as_str()));
            start.push_attribute(("width", size.x.to_string().as_str()));
            start.push_attribute(("height", size.y.to_string().as_str()));
            if *corner_radius > 0.0 {
                start.push_attribute(("rx", corner_radius.to_string().as_str()));
            }
            start
        }
        Shape::Text(label) => {
            let mut start = BytesStart::new("text");
            start.push_attribute(("x", label.anchor.x.to_string().as_str()));
            start.push_attribute(("y", label.anchor.y.to_string().as_str()));
            start.push_attribute(("text-anchor", "middle"));
            start.push_attribute(("font-family", label.font_family.as_str()));
            start.push_attribute(("font-size", label.font_size.to_string().as_str()));
            if label.weight == FontWeight::Bold {
                start.push_attribute(("font-weight", "bold"));
            }
            start
        }
    };

    push_style(&mut element, &primitive.style);
    if !primitive.transform.is_identity() {
        element.push_attribute(("transform", matrix(&primitive.transform).as_str()));
    }

    if let Shape::Text(label) = &primitive.shape {
        writer.write_event(Event::Start(element))?;
        writer.write_event(Event::Text(BytesText::new(&label.content)))?;
        writer.write_event(Event::End(BytesEnd::new("text")))?;
    } else {
        writer.write_event(Event::Empty(element))?;
    }
    Ok(())
}

fn push_style(element: &mut BytesStart<'_>, style: &Style) {
    let fill = style.fill.map(|c| c.to_hex()).unwrap_or_else(|| "none".to_string());
    element.push_attribute(("fill", fill.as_str()));
    if let Some(stroke) = style.stroke {
        element.push_attribute(("stroke", stroke.to_hex().as_str()));
        element.push_attribute(("stroke-width", style.stroke_width.to_string().as_str()));
        if style.line_cap == LineCap::Round {
            element.push_attribute(("stroke-linecap", "round"));
            element.push_attribute(("stroke-linejoin", "round"));
        }
    }
}

fn path_data(points: &[Point], closed: bool) -> String {
    let mut d = String::new();
    for (i, p) in points.iter().enumerate() {
        d.push_str(if i == 0 { "M" } else { " L" });
        d.push_str(&format!("{} {}", p.x, p.y));
    }
    if closed && !points.is_empty() {
        d.push_str(" Z");
    }
    d
}

fn matrix(t: &Affine) -> String {
    format!("matrix({} {} {} {} {} {})", t.a, t.b, t.c, t.d, t.e, t.f)
}
