// Decoding of host-supplied footprint documents
use footprint_view::draw::geometry::{CustomPrimitive, GraphicItem, PadShape, Point, Size};
use footprint_view::draw::parsing::{document_from_value, parse_edit_timestamp};
use footprint_view::{parse_document, DocumentError};
use serde_json::json;

#[test]
fn test_metadata_and_timestamp() {
    let document = document_from_value(json!({
        "name": "SOIC-8_3.9x4.9mm_P1.27mm",
        "description": "8-Lead Plastic Small Outline",
        "tags": ["SOIC", "SO"],
        "tedit": "5B307E37",
        "graphics": [],
        "pads": []
    }))
    .unwrap();

    assert_eq!(document.name.as_deref(), Some("SOIC-8_3.9x4.9mm_P1.27mm"));
    assert_eq!(document.tags, vec!["SOIC".to_string(), "SO".to_string()]);
    assert_eq!(document.last_edit_timestamp, Some(0x5B30_7E37));
    assert_eq!(document.last_edit_millis(), Some(0x5B30_7E37 * 1000));
}

#[test]
fn test_bad_timestamp_is_not_fatal() {
    let document = document_from_value(json!({ "tedit": "not-hex", "graphics": [] })).unwrap();
    assert_eq!(document.last_edit_timestamp, None);

    assert!(matches!(parse_edit_timestamp("not-hex"), Err(DocumentError::Timestamp { .. })));
    assert_eq!(parse_edit_timestamp("0x10").unwrap(), 16);
}

#[test]
fn test_graphic_kinds_and_aliases() {
    let document = document_from_value(json!({
        "graphics": [
            {"type": "fp_line", "renderable": {"start": {"x": 0, "y": 0}, "end": {"x": 1, "y": 0},
                                               "layer": "F.SilkS", "width": 0.12}},
            {"type": "circle", "renderable": {"center": {"x": 0, "y": 0}, "end": {"x": 1, "y": 0},
                                              "layer": "F.Fab", "width": 0.1}},
            {"type": "fp_arc", "renderable": {"start": {"x": 0, "y": 0}, "end": {"x": 1, "y": 0},
                                              "angle": -90, "layer": "F.SilkS", "width": 0.12}},
            {"type": "fp_poly", "renderable": {"pts": [{"x": 0, "y": 0}, {"x": 1, "y": 0}, {"x": 0, "y": 1}],
                                               "layer": "F.Cu", "width": 0.0}},
            {"type": "fp_text", "renderable": {"value": 100, "position": {"x": 0, "y": 2, "z": 0},
                                               "layer": "F.Fab",
                                               "effects": {"size": {"x": 1.2, "y": 0.8}, "bold": true}}},
            {"type": "fp_curve", "renderable": {}}
        ]
    }))
    .unwrap();

    let kinds: Vec<&str> = document.graphics.iter().map(GraphicItem::kind).collect();
    assert_eq!(kinds, vec!["fp_line", "fp_circle", "fp_arc", "fp_poly", "fp_text", "fp_curve"]);

    match &document.graphics[2] {
        GraphicItem::Arc(arc) => {
            assert_eq!(arc.center, Point::new(0.0, 0.0));
            assert_eq!(arc.edge, Point::new(1.0, 0.0));
            assert_eq!(arc.sweep_degrees, -90.0);
        }
        other => panic!("unexpected item {other:?}"),
    }
    match &document.graphics[4] {
        GraphicItem::Text(text) => {
            assert_eq!(text.value, "100");
            assert_eq!(text.size, Size::new(1.2, 0.8));
            assert!(text.bold);
        }
        other => panic!("unexpected item {other:?}"),
    }
    assert!(matches!(&document.graphics[5], GraphicItem::Unsupported { kind } if kind == "fp_curve"));
}

#[test]
fn test_malformed_graphic_does_not_abort() {
    let document = document_from_value(json!({
        "graphics": [
            {"type": "fp_line", "renderable": {"start": {"x": 0, "y": 0}}},
            {"type": "fp_circle", "renderable": {"center": {"x": 0, "y": 0}, "end": {"x": 0, "y": 1}}}
        ]
    }))
    .unwrap();

    assert!(matches!(&document.graphics[0], GraphicItem::Malformed { kind, .. } if kind == "fp_line"));
    assert!(matches!(&document.graphics[1], GraphicItem::Circle(_)));
}

#[test]
fn test_pad_shapes_and_rotation() {
    let document = document_from_value(json!({
        "pads": [
            {"pin": 1, "position": {"x": 0, "y": 0, "z": 90, "z_present": false}, "size": {"x": 1, "y": 1}, "shape": 3},
            {"pin": "2", "position": {"x": 1, "y": 0, "z": 90, "z_present": true}, "size": {"x": 1, "y": 1}, "shape": "oval"},
            {"pin": "3", "position": {"x": 2, "y": 0}, "size": {"x": 1, "y": 1}, "shape": 4},
            {"pin": "4", "position": {"x": 3, "y": 0}, "size": {"x": 1, "y": 1}, "shape": "chamfered_rect"},
            {"pin": "5", "position": {"x": 4}, "size": {"x": 1, "y": 1}, "shape": "rect"}
        ]
    }))
    .unwrap();

    // the last pad lacks a y coordinate and is dropped
    assert_eq!(document.pads.len(), 4);
    assert_eq!(document.pads[0].pin_label, "1");
    assert_eq!(document.pads[0].shape, PadShape::Circle);
    assert_eq!(document.pads[0].rotation_degrees, None);
    assert_eq!(document.pads[1].shape, PadShape::Oval);
    assert_eq!(document.pads[1].rotation_degrees, Some(90.0));
    assert_eq!(document.pads[2].shape, PadShape::Other("trapezoid".to_string()));
    assert_eq!(document.pads[3].shape, PadShape::Other("chamfered_rect".to_string()));
    assert_eq!(document.pads[0].primary_layer(), "");
}

#[test]
fn test_custom_pad_primitives() {
    let document = document_from_value(json!({
        "pads": [{
            "pin": "1", "position": {"x": 0, "y": 0}, "size": {"x": 1, "y": 1}, "shape": "custom",
            "layers": ["F.Cu"],
            "primitives": [
                {"type": "gr_poly", "points": [{"x": 0, "y": 0}, {"x": 1, "y": 0}, {"x": 1, "y": 1}], "width": 0.1},
                {"type": "circle", "renderable": {"center": {"x": 0, "y": 0}, "end": {"x": 0.5, "y": 0}}},
                {"type": "gr_arc", "renderable": {}}
            ]
        }]
    }))
    .unwrap();

    let primitives = &document.pads[0].primitives;
    assert_eq!(primitives.len(), 3);
    assert!(matches!(&primitives[0], CustomPrimitive::Polygon { points, .. } if points.len() == 3));
    assert!(matches!(&primitives[1], CustomPrimitive::Circle { .. }));
    assert!(matches!(&primitives[2], CustomPrimitive::Unsupported { kind } if kind == "gr_arc"));
}

#[test]
fn test_top_level_failures() {
    assert!(matches!(parse_document("not json"), Err(DocumentError::Json(_))));
    assert!(matches!(parse_document("[1, 2]"), Err(DocumentError::Json(_))));
    assert!(matches!(parse_document(r#"{"graphics": 3}"#), Err(DocumentError::Json(_))));
    assert!(parse_document("{}").unwrap().graphics.is_empty());
}

#[test]
fn test_older_drill_shape() {
    let document = document_from_value(json!({
        "pads": [
            {"pin": 1, "position": {"x": 0, "y": 0}, "size": {"x": 1.6, "y": 1.6}, "shape": "circle",
             "drill": {"kind": "", "scalar": 0.8, "offset": {"x": 0.1, "y": -0.2}}, "layers": ["*.Cu"]},
            {"pin": 2, "position": {"x": 2, "y": 0}, "size": {"x": 2, "y": 1.2}, "shape": "oval",
             "drill": {"kind": "oval", "scalar": 0, "ellipse": {"x": 1.2, "y": 0.6}}, "layers": ["*.Cu"]},
            {"pin": 3, "position": {"x": 4, "y": 0}, "size": {"x": 1, "y": 1}, "shape": "rect",
             "drill_size": {"x": 0.5, "y": 0.5}, "drill": {"scalar": 0.9}, "layers": ["F.Cu"]}
        ]
    }))
    .unwrap();

    assert_eq!(document.pads[0].drill_size, Size::new(0.8, 0.8));
    assert_eq!(document.pads[0].drill_offset, Point::new(0.1, -0.2));
    assert_eq!(document.pads[1].drill_size, Size::new(1.2, 0.6));
    assert_eq!(document.pads[1].drill_offset, Point::ORIGIN);
    // the explicit field wins over the older shape
    assert_eq!(document.pads[2].drill_size, Size::new(0.5, 0.5));
}

#[test]
fn test_non_string_timestamp_is_not_fatal() {
    let document = document_from_value(json!({ "name": "X", "tedit": 1527938615, "pads": [] })).unwrap();
    assert_eq!(document.last_edit_timestamp, None);
    assert_eq!(document.name.as_deref(), Some("X"));
}
