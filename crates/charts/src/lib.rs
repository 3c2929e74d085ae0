//! Charts - Figure model, theming, layout, and export
//!
//! This crate provides:
//! - A figure/axes model with categorical bars and line series
//! - Named axes styles and plotting contexts resolved into per-figure themes
//! - A tight-layout pass driven by estimated text extents
//! - Rendering to primitives and SVG
//! - Export to SVG, PNG, JPEG and BMP
//! - A viewer seam for displaying finished figures

mod model;
mod error;
mod axes;
mod figure;
mod layout;
mod render;
mod export;
mod styles;
mod viewer;

pub use model::*;
pub use error::*;
pub use axes::*;
pub use figure::*;
pub use layout::*;
pub use render::*;
pub use export::*;
pub use styles::*;
pub use viewer::*;
