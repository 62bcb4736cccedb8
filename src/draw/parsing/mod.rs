//! Input-side helpers: document decoding and layer colors
//!
//! # Submodules
//! - `document` - Tolerant JSON decoding of footprint documents
//! - `colors` - Layer color assignment

mod document;
mod colors;

pub use document::{
    parse_document,
    document_from_value,
    parse_edit_timestamp,
};

pub use colors::{
    ElementKind,
    resolve_color,
    DRILL_COLOR,
    SILKSCREEN_COLOR,
    FRONT_COPPER_COLOR,
    FABRICATION_COLOR,
    COURTYARD_COLOR,
    ANY_COPPER_COLOR,
};
