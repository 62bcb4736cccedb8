//! Frame export
//!
//! # Submodules
//! - `svg` - SVG document writer for [`SceneSurface`](crate::surface::SceneSurface) frames

mod svg;

pub use svg::export_svg;
