//! Footprint drawing pipeline
//!
//! # Submodules
//! - `geometry` - Value types, scene graph and document model
//! - `parsing` - Document decoding and layer colors
//! - `generation` - Per-element shape rendering and line merging
//! - `scene` - Full-frame rendering onto a surface

pub mod geometry;
pub mod parsing;
pub mod generation;
pub mod scene;

pub use scene::FootprintScene;
