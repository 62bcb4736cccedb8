//! Layer color assignment
//!
//! Maps an element kind and layer name to its display color.

use crate::draw::geometry::Color;

/// What is being colored
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElementKind {
    Line,
    Circle,
    Arc,
    Polygon,
    Text,
    Pad,
    Drill,
}

pub const DRILL_COLOR: Color = Color::rgb(0x25, 0x25, 0x25);
pub const SILKSCREEN_COLOR: Color = Color::rgb(0x00, 0x84, 0x84);
pub const FRONT_COPPER_COLOR: Color = Color::rgb(0x84, 0x00, 0x00);
pub const FABRICATION_COLOR: Color = Color::rgb(0xC2, 0xC2, 0x00);
pub const COURTYARD_COLOR: Color = Color::rgb(0x48, 0x48, 0x48);
pub const ANY_COPPER_COLOR: Color = Color::rgb(0x84, 0x74, 0x15);

/// Get the display color for an element on a layer
///
/// Drill holes ignore the layer. Everything else matches the layer name
/// exactly; unknown layers are black.
pub fn resolve_color(kind: ElementKind, layer: &str) -> Color {
    if kind == ElementKind::Drill {
        return DRILL_COLOR;
    }

    match layer {
        "F.SilkS" => SILKSCREEN_COLOR,
        "F.Cu" => FRONT_COPPER_COLOR,
        "F.Fab" => FABRICATION_COLOR,
        "F.CrtYd" => COURTYARD_COLOR,
        "*.Cu" => ANY_COPPER_COLOR,
        _ => Color::BLACK,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_drill_ignores_layer() {
        assert_eq!(resolve_color(ElementKind::Drill, "F.SilkS"), DRILL_COLOR);
        assert_eq!(resolve_color(ElementKind::Drill, ""), DRILL_COLOR);
    }

    #[test]
    fn test_layer_table() {
        assert_eq!(resolve_color(ElementKind::Line, "F.SilkS").to_hex(), "#008484");
        assert_eq!(resolve_color(ElementKind::Pad, "F.Cu").to_hex(), "#840000");
        assert_eq!(resolve_color(ElementKind::Text, "F.Fab").to_hex(), "#c2c200");
        assert_eq!(resolve_color(ElementKind::Circle, "F.CrtYd").to_hex(), "#484848");
        assert_eq!(resolve_color(ElementKind::Pad, "*.Cu").to_hex(), "#847415");
    }

    #[test]
    fn test_unmatched_layer_is_black() {
        assert_eq!(resolve_color(ElementKind::Line, "B.SilkS"), Color::BLACK);
        assert_eq!(resolve_color(ElementKind::Line, "f.silks"), Color::BLACK); // exact match only
        assert_eq!(resolve_color(ElementKind::Polygon, ""), Color::BLACK);
    }
}
