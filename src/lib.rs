//! Footprint viewer core
//!
//! Renders a PCB footprint document (pads, graphics, text) into a vector
//! scene and handles pan/zoom on the view it is drawn through.
//!
//! # Modules
//! - `draw` - Document model, decoding, shape generation and scene rendering
//! - `surface` - Drawing surface port and the in-memory implementation
//! - `viewport` - Pointer and wheel interaction
//! - `export` - SVG output
//! - `host` - JSON-RPC bridge used by the server binary
//! - `config` - Rendering constants
//! - `error` - Library error types

pub mod config;
pub mod draw;
pub mod error;
pub mod export;
pub mod host;
pub mod surface;
pub mod viewport;

pub use config::RenderConfig;
pub use draw::geometry::{FootprintDocument, GraphicItem, Pad, PadShape, SceneItem};
pub use draw::parsing::{parse_document, resolve_color, ElementKind};
pub use draw::FootprintScene;
pub use error::{DocumentError, ExportError};
pub use export::export_svg;
pub use surface::{RenderSurface, SceneSurface, TextMeasure, View};
pub use viewport::{ViewportController, ViewportState};
