//! Text Engine - Arabic reshaping and bidirectional display ordering
//!
//! Renderers that draw one glyph per code point, left to right, show Arabic
//! as disconnected letters in reverse order. This crate prepares strings for
//! such renderers.
//!
//! # Modules
//!
//! - `letters`: presentation form tables
//! - `reshaper`: contextual joining and lam-alef ligatures
//! - `bidi`: visual reordering via `unicode-bidi`
//! - `display`: the combined pipeline

mod error;
pub mod bidi;
pub mod display;
pub mod letters;
pub mod reshaper;

pub use error::*;
pub use bidi::{base_direction, reorder_for_display, Direction};
pub use display::{shape_for_display, DisplayPipeline};
pub use reshaper::{reshape, Reshaper, ReshaperConfig};
