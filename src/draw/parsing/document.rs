//! Footprint document decoding
//!
//! Decodes the host's JSON footprint (`graphics`, `pads`, `tedit`) into the
//! typed document model. Decoding is tolerant per element: an unknown kind
//! becomes an `Unsupported` variant, a known kind with bad geometry becomes
//! `GraphicItem::Malformed` (graphics) or is dropped with a warning (pads and
//! custom primitives). Only a document that is not a JSON object with list
//! fields fails as a whole.

use crate::draw::geometry::*;
use crate::error::DocumentError;
use serde::Deserialize;
use serde_json::Value;
use tracing::warn;

/// Decode a footprint document from JSON text
pub fn parse_document(json: &str) -> Result<FootprintDocument, DocumentError> {
    let value: Value = serde_json::from_str(json)?;
    document_from_value(value)
}

/// Decode a footprint document from an already-parsed JSON value
pub fn document_from_value(value: Value) -> Result<FootprintDocument, DocumentError> {
    let wire: WireDocument = serde_json::from_value(value)?;

    let last_edit_timestamp = match &wire.tedit {
        Value::Null => None,
        Value::String(raw) if raw.trim().is_empty() => None,
        Value::String(raw) => match parse_edit_timestamp(raw) {
            Ok(secs) => Some(secs),
            Err(e) => {
                warn!("{}", e);
                None
            }
        },
        other => {
            warn!("ignoring non-string edit timestamp {}", other);
            None
        }
    };

    let graphics = wire
        .graphics
        .unwrap_or_default()
        .into_iter()
        .map(decode_graphic)
        .collect();

    let pads = wire
        .pads
        .unwrap_or_default()
        .into_iter()
        .enumerate()
        .filter_map(|(index, entry)| match decode_pad(entry) {
            Ok(pad) => Some(pad),
            Err(reason) => {
                warn!(index, %reason, "skipping malformed pad");
                None
            }
        })
        .collect();

    Ok(FootprintDocument {
        name: wire.name,
        description: wire.description,
        tags: wire.tags.unwrap_or_default(),
        last_edit_timestamp,
        graphics,
        pads,
    })
}

/// Parse a hexadecimal Unix-seconds edit stamp (e.g. `"5B307E37"`)
pub fn parse_edit_timestamp(value: &str) -> Result<u64, DocumentError> {
    let trimmed = value.trim();
    let digits = trimmed
        .strip_prefix("0x")
        .or_else(|| trimmed.strip_prefix("0X"))
        .unwrap_or(trimmed);
    u64::from_str_radix(digits, 16).map_err(|_| DocumentError::Timestamp {
        value: value.to_string(),
    })
}

#[derive(Deserialize)]
struct WireDocument {
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    tags: Option<Vec<String>>,
    #[serde(default)]
    tedit: Value,
    #[serde(default)]
    graphics: Option<Vec<Value>>,
    #[serde(default)]
    pads: Option<Vec<Value>>,
}

#[derive(Deserialize, Clone, Copy, Default)]
struct WireXY {
    x: f64,
    y: f64,
}

impl WireXY {
    fn point(self) -> Point {
        Point::new(self.x, self.y)
    }

    fn size(self) -> Size {
        Size::new(self.x, self.y)
    }
}

#[derive(Deserialize, Clone, Copy)]
struct WireXYZ {
    x: f64,
    y: f64,
    #[serde(default)]
    z: f64,
    #[serde(default)]
    z_present: bool,
}

#[derive(Deserialize)]
struct WireLine {
    start: WireXY,
    end: WireXY,
    #[serde(default)]
    layer: String,
    #[serde(default)]
    width: f64,
}

#[derive(Deserialize)]
struct WireCircle {
    center: WireXY,
    end: WireXY,
    #[serde(default)]
    layer: String,
    #[serde(default)]
    width: f64,
}

/// `start` is the arc center and `end` the point the sweep begins at
#[derive(Deserialize)]
struct WireArc {
    start: WireXY,
    end: WireXY,
    angle: f64,
    #[serde(default)]
    layer: String,
    #[serde(default)]
    width: f64,
}

#[derive(Deserialize)]
struct WirePolygon {
    #[serde(alias = "pts")]
    points: Vec<WireXY>,
    #[serde(default)]
    layer: String,
    #[serde(default)]
    width: f64,
}

#[derive(Deserialize)]
struct WireText {
    #[serde(default)]
    value: Value,
    position: WireXYZ,
    #[serde(default)]
    layer: String,
    #[serde(default)]
    effects: WireEffects,
}

#[derive(Deserialize)]
struct WireEffects {
    #[serde(default = "unit_size")]
    size: WireXY,
    #[serde(default)]
    bold: bool,
}

impl Default for WireEffects {
    fn default() -> Self {
        Self { size: unit_size(), bold: false }
    }
}

fn unit_size() -> WireXY {
    WireXY { x: 1.0, y: 1.0 }
}

#[derive(Deserialize)]
struct WirePad {
    #[serde(default)]
    pin: Value,
    position: WireXYZ,
    size: WireXY,
    #[serde(default)]
    shape: Option<WirePadShape>,
    #[serde(default)]
    rotation: Option<f64>,
    #[serde(default)]
    roundrect_rratio: Option<f64>,
    #[serde(default)]
    clearance: Option<f64>,
    #[serde(default)]
    drill_size: Option<WireXY>,
    #[serde(default)]
    drill_offset: Option<WireXY>,
    /// Older document shape: `{kind, scalar, ellipse, offset}`
    #[serde(default)]
    drill: Option<WireDrill>,
    #[serde(default)]
    layers: Option<Vec<String>>,
    #[serde(default)]
    primitives: Option<Vec<Value>>,
}

#[derive(Deserialize)]
struct WireDrill {
    #[serde(default)]
    scalar: f64,
    #[serde(default)]
    ellipse: WireXY,
    #[serde(default)]
    offset: WireXY,
}

impl WireDrill {
    /// Round drills carry a diameter, oval drills an ellipse size
    fn size(&self) -> Size {
        if self.scalar > 0.0 {
            Size::new(self.scalar, self.scalar)
        } else {
            self.ellipse.size()
        }
    }
}

/// Pad shape as keyword or as the board library's numeric code
#[derive(Deserialize)]
#[serde(untagged)]
enum WirePadShape {
    Code(u64),
    Name(String),
}

#[derive(Deserialize)]
struct WirePrimitivePolygon {
    #[serde(alias = "pts")]
    points: Vec<WireXY>,
    #[serde(default)]
    width: f64,
}

#[derive(Deserialize)]
struct WirePrimitiveCircle {
    center: WireXY,
    end: WireXY,
    #[serde(default)]
    width: f64,
}

fn decode_graphic(mut entry: Value) -> GraphicItem {
    let kind = entry
        .get("type")
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string();
    let renderable = entry
        .get_mut("renderable")
        .map(Value::take)
        .unwrap_or(Value::Null);

    let decoded = match kind.as_str() {
        "fp_line" | "line" => decode::<WireLine>(renderable).map(|w| {
            GraphicItem::Line(Line {
                start: w.start.point(),
                end: w.end.point(),
                layer: w.layer,
                stroke_width: w.width,
            })
        }),
        "fp_circle" | "circle" => decode::<WireCircle>(renderable).map(|w| {
            GraphicItem::Circle(Circle {
                center: w.center.point(),
                edge: w.end.point(),
                layer: w.layer,
                stroke_width: w.width,
            })
        }),
        "fp_arc" | "arc" => decode::<WireArc>(renderable).map(|w| {
            GraphicItem::Arc(Arc {
                center: w.start.point(),
                edge: w.end.point(),
                sweep_degrees: w.angle,
                layer: w.layer,
                stroke_width: w.width,
            })
        }),
        "fp_poly" | "polygon" => decode::<WirePolygon>(renderable).and_then(|w| {
            if w.points.is_empty() {
                return Err("polygon has no points".to_string());
            }
            Ok(GraphicItem::Polygon(Polygon {
                points: w.points.into_iter().map(WireXY::point).collect(),
                layer: w.layer,
                stroke_width: w.width,
            }))
        }),
        "fp_text" | "text" => decode::<WireText>(renderable).map(|w| {
            GraphicItem::Text(Text {
                value: scalar_to_string(&w.value),
                position: Point::new(w.position.x, w.position.y),
                layer: w.layer,
                size: w.effects.size.size(),
                bold: w.effects.bold,
            })
        }),
        _ => return GraphicItem::Unsupported { kind },
    };

    decoded.unwrap_or_else(|reason| {
        warn!(%kind, %reason, "malformed graphic");
        GraphicItem::Malformed { kind, reason }
    })
}

fn decode_pad(entry: Value) -> Result<Pad, String> {
    let wire: WirePad = decode(entry)?;

    let rotation_degrees = wire
        .rotation
        .or_else(|| wire.position.z_present.then_some(wire.position.z));

    let primitives = wire
        .primitives
        .unwrap_or_default()
        .into_iter()
        .filter_map(|entry| match decode_custom_primitive(entry) {
            Ok(primitive) => Some(primitive),
            Err(reason) => {
                warn!(%reason, "skipping malformed custom pad primitive");
                None
            }
        })
        .collect();

    let drill_size = wire
        .drill_size
        .map(WireXY::size)
        .or_else(|| wire.drill.as_ref().map(WireDrill::size))
        .unwrap_or_default();
    let drill_offset = wire
        .drill_offset
        .or_else(|| wire.drill.as_ref().map(|d| d.offset))
        .unwrap_or_default()
        .point();

    Ok(Pad {
        pin_label: scalar_to_string(&wire.pin),
        position: Point::new(wire.position.x, wire.position.y),
        rotation_degrees,
        size: wire.size.size(),
        shape: pad_shape(wire.shape),
        rounded_corner_ratio: wire.roundrect_rratio,
        clearance: wire.clearance,
        drill_size,
        drill_offset,
        layers: wire.layers.unwrap_or_default(),
        primitives,
    })
}

fn decode_custom_primitive(mut entry: Value) -> Result<CustomPrimitive, String> {
    let kind = entry
        .get("type")
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string();
    // Primitives may carry their geometry inline or under `renderable`
    let nested = entry.get_mut("renderable").map(Value::take);
    let body = match nested {
        Some(inner) if !inner.is_null() => inner,
        _ => entry,
    };

    match kind.as_str() {
        "gr_poly" | "polygon" => {
            let w: WirePrimitivePolygon = decode(body)?;
            Ok(CustomPrimitive::Polygon {
                points: w.points.into_iter().map(WireXY::point).collect(),
                stroke_width: w.width,
            })
        }
        "gr_circle" | "circle" => {
            let w: WirePrimitiveCircle = decode(body)?;
            Ok(CustomPrimitive::Circle {
                center: w.center.point(),
                edge: w.end.point(),
                stroke_width: w.width,
            })
        }
        _ => Ok(CustomPrimitive::Unsupported { kind }),
    }
}

fn pad_shape(shape: Option<WirePadShape>) -> PadShape {
    match shape {
        Some(WirePadShape::Code(1)) => PadShape::Rect,
        Some(WirePadShape::Code(2)) => PadShape::Oval,
        Some(WirePadShape::Code(3)) => PadShape::Circle,
        Some(WirePadShape::Code(4)) => PadShape::Other("trapezoid".to_string()),
        Some(WirePadShape::Code(5)) => PadShape::RoundRect,
        Some(WirePadShape::Code(6)) => PadShape::Other("chamfered_rect".to_string()),
        Some(WirePadShape::Code(7)) => PadShape::Custom,
        Some(WirePadShape::Code(code)) => PadShape::Other(format!("shape#{}", code)),
        Some(WirePadShape::Name(name)) => match name.as_str() {
            "rect" => PadShape::Rect,
            "oval" => PadShape::Oval,
            "circle" => PadShape::Circle,
            "roundrect" => PadShape::RoundRect,
            "custom" => PadShape::Custom,
            _ => PadShape::Other(name),
        },
        None => PadShape::Other("unspecified".to_string()),
    }
}

fn decode<T: for<'de> Deserialize<'de>>(value: Value) -> Result<T, String> {
    serde_json::from_value(value).map_err(|e| e.to_string())
}

fn scalar_to_string(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}
