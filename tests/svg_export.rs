// SVG output of rendered frames
use footprint_view::{export_svg, parse_document, FootprintScene, RenderSurface, SceneSurface};
use serde_json::json;

fn rendered(doc: serde_json::Value) -> SceneSurface {
    let document = parse_document(&doc.to_string()).unwrap();
    let mut surface = SceneSurface::default();
    FootprintScene::default().render(&mut surface, &document);
    surface
}

#[test]
fn test_pad_group_and_elements() {
    let surface = rendered(json!({
        "pads": [{"pin": "1", "position": {"x": 1, "y": 0, "z": 90, "z_present": true},
                  "size": {"x": 2, "y": 1}, "shape": "roundrect", "roundrect_rratio": 0.25,
                  "drill_size": {"x": 0.4, "y": 0.4}, "layers": ["F.Cu"]}]
    }));
    let svg = export_svg(&surface).unwrap();

    assert!(svg.contains("<g transform=\"matrix("));
    assert!(svg.contains("<rect "));
    assert!(svg.contains("rx=\"0.1\""));
    assert!(svg.contains("<circle "));
    assert!(svg.contains("fill=\"#252525\""));
    assert!(svg.contains("font-family=\"Courier New\""));
    assert!(svg.contains(">1</text>"));
}

#[test]
fn test_lines_and_escaping() {
    let surface = rendered(json!({
        "graphics": [
            {"type": "fp_line", "renderable": {"start": {"x": 0, "y": 0}, "end": {"x": 1, "y": 0},
                                               "layer": "F.SilkS", "width": 0.1}},
            {"type": "fp_line", "renderable": {"start": {"x": 1, "y": 0}, "end": {"x": 1, "y": 1},
                                               "layer": "F.SilkS", "width": 0.1}},
            {"type": "fp_text", "renderable": {"value": "R<1>&", "position": {"x": 0, "y": 2},
                                               "layer": "F.Fab"}}
        ]
    }));
    let svg = export_svg(&surface).unwrap();

    assert!(svg.contains("d=\"M0 0 L1 0 L1 1\""));
    assert!(svg.contains("stroke=\"#008484\""));
    assert!(svg.contains("stroke-linecap=\"round\""));
    assert!(svg.contains("R&lt;1&gt;&amp;"));
}

#[test]
fn test_view_box_follows_view() {
    let mut surface = rendered(json!({}));
    surface.view_mut().resize(100.0, 50.0);
    surface.view_mut().scale_by(2.0);
    let svg = export_svg(&surface).unwrap();
    assert!(svg.contains("viewBox=\"-25 -12.5 50 25\""));
    assert!(svg.contains("width=\"100\""));
}

#[test]
fn test_pad_smaller_than_clearance_has_no_negative_extent() {
    let surface = rendered(json!({
        "pads": [{"pin": "1", "position": {"x": 0, "y": 0}, "size": {"x": 0.1, "y": 0.1},
                  "shape": "rect", "layers": ["F.Cu"]},
                 {"pin": "2", "position": {"x": 1, "y": 0}, "size": {"x": 0.1, "y": 0.1},
                  "shape": "oval", "layers": ["F.Cu"]}]
    }));
    let svg = export_svg(&surface).unwrap();

    assert!(svg.contains("<rect "));
    assert!(svg.contains("<ellipse "));
    assert!(!svg.contains("width=\"-"));
    assert!(!svg.contains("height=\"-"));
    assert!(!svg.contains("rx=\"-"));
    assert!(!svg.contains("ry=\"-"));
}
