//! Display pipeline: reshape, then reorder
//!
//! This is the entry point used by the chart helpers to turn Arabic strings
//! into something a plain left-to-right glyph renderer draws correctly.

use crate::bidi::{self, Direction};
use crate::reshaper::{Reshaper, ReshaperConfig};
use crate::Result;
use std::path::Path;

/// Reshaping followed by bidi reordering
#[derive(Debug, Clone, Default)]
pub struct DisplayPipeline {
    reshaper: Reshaper,
    base_direction: Option<Direction>,
}

impl DisplayPipeline {
    /// Create a pipeline with the given reshaper options and auto-detected direction
    pub fn new(config: ReshaperConfig) -> Self {
        Self {
            reshaper: Reshaper::new(config),
            base_direction: None,
        }
    }

    /// Load the reshaper options from a JSON file
    pub fn from_config_file(path: impl AsRef<Path>) -> Result<Self> {
        Ok(Self::new(ReshaperConfig::load(path)?))
    }

    /// Force the paragraph direction instead of detecting it
    pub fn with_base_direction(mut self, direction: Direction) -> Self {
        self.base_direction = Some(direction);
        self
    }

    pub fn reshaper(&self) -> &Reshaper {
        &self.reshaper
    }

    /// Produce the display form of `text`
    pub fn shape(&self, text: &str) -> String {
        let reshaped = self.reshaper.reshape(text);
        let shaped = bidi::reorder_for_display(&reshaped, self.base_direction);
        tracing::trace!(input = text, output = %shaped, "shaped text for display");
        shaped
    }
}

/// Shape `text` for display with the default options
pub fn shape_for_display(text: &str) -> String {
    DisplayPipeline::default().shape(text)
}
