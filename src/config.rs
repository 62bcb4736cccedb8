//! Rendering and interaction constants
//!
//! Defaults reproduce the viewer's fixed behavior; hosts may override any
//! field from a JSON file (see [`RenderConfig::from_env`]).

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Environment variable naming an optional JSON config override
pub const CONFIG_ENV_VAR: &str = "FOOTPRINT_VIEW_CONFIG";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Document to screen unit conversion applied to the whole layer
    pub scene_scale: f64,
    /// Pad clearance used when a pad carries none
    pub default_clearance: f64,
    /// Legibility correction applied to every text size
    pub text_correction: f64,
    /// Pad label font size before correction
    pub pad_label_size: f64,
    /// Segments per arc, independent of arc length
    pub arc_segments: u32,
    /// Ceiling for roundrect corner radii
    pub max_corner_radius: f64,
    pub default_roundrect_ratio: f64,
    /// Scale change per unit of wheel delta
    pub zoom_sensitivity: f64,
    /// Multiplier on the width of lines and arcs
    pub line_stroke_factor: f64,
    /// Multiplier on the width of circles and polygons
    pub outline_stroke_factor: f64,
    pub pad_outline_width: f64,
    pub graphic_font: String,
    pub pad_label_font: String,
    pub font_metrics: FontMetrics,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            scene_scale: 10.0,
            default_clearance: 0.2,
            text_correction: 0.7,
            pad_label_size: 2.0,
            arc_segments: 180,
            max_corner_radius: 0.25,
            default_roundrect_ratio: 0.25,
            zoom_sensitivity: -0.0009,
            line_stroke_factor: 15.0,
            outline_stroke_factor: 5.0,
            pad_outline_width: 1.0,
            graphic_font: "Lucida Console".to_string(),
            pad_label_font: "Courier New".to_string(),
            font_metrics: FontMetrics::default(),
        }
    }
}

impl RenderConfig {
    /// Load overrides from a JSON file; omitted fields keep their defaults
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        serde_json::from_str(&text)
            .with_context(|| format!("Failed to parse config file {}", path.display()))
    }

    /// Defaults, or the file named by `FOOTPRINT_VIEW_CONFIG` when set
    pub fn from_env() -> Result<Self> {
        match std::env::var_os(CONFIG_ENV_VAR) {
            Some(path) if !path.is_empty() => Self::from_json_file(path),
            _ => Ok(Self::default()),
        }
    }

    /// Font size of pad pin labels
    pub fn pad_label_font_size(&self) -> f64 {
        self.pad_label_size * self.text_correction
    }
}

/// Em-relative metrics used to measure text without a font rasterizer
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FontMetrics {
    pub ascent: f64,
    pub descent: f64,
    /// Horizontal advance per character
    pub advance: f64,
}

impl Default for FontMetrics {
    fn default() -> Self {
        Self { ascent: 0.8, descent: 0.2, advance: 0.6 }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_override_keeps_defaults() {
        let config: RenderConfig = serde_json::from_str(r#"{"scene_scale": 4.0}"#).unwrap();
        assert_eq!(config.scene_scale, 4.0);
        assert_eq!(config.arc_segments, 180);
        assert_eq!(config.default_clearance, 0.2);
    }

    #[test]
    fn test_pad_label_font_size() {
        let config = RenderConfig::default();
        assert!((config.pad_label_font_size() - 1.4).abs() < 1e-12);
    }
}
