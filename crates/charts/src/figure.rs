//! Figures
//!
//! A [`Figure`] is the drawing surface: physical size, the theme it was
//! created with, subplot margins, free-floating figure texts and the one
//! [`Axes`] it owns.

use crate::axes::Axes;
use crate::error::{ChartError, ChartResult};
use crate::layout;
use crate::render::{FigureRenderer, RenderedFigure, TextAnchor};
use crate::styles::Theme;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Axes placement as fractions of the figure, measured from the bottom-left corner
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SubplotParams {
    pub left: f64,
    pub right: f64,
    pub bottom: f64,
    pub top: f64,
}

impl Default for SubplotParams {
    fn default() -> Self {
        Self {
            left: 0.125,
            right: 0.9,
            bottom: 0.11,
            top: 0.88,
        }
    }
}

/// Partial update of [`SubplotParams`]
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SubplotAdjust {
    pub left: Option<f64>,
    pub right: Option<f64>,
    pub bottom: Option<f64>,
    pub top: Option<f64>,
}

/// Text placed in figure coordinates
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FigureText {
    /// Fraction of figure width from the left edge
    pub x: f64,
    /// Fraction of figure height from the bottom edge (text baseline)
    pub y: f64,
    pub text: String,
    pub font_size: f64,
    pub anchor: TextAnchor,
}

/// A figure holding a single axes
#[derive(Debug, Clone)]
pub struct Figure {
    width: f64,
    height: f64,
    theme: Theme,
    subplot: SubplotParams,
    texts: Vec<FigureText>,
    axes: Axes,
}

impl Figure {
    /// Create a figure of `width` x `height` inches
    pub fn new(width: f64, height: f64, theme: Theme) -> ChartResult<Self> {
        let valid = |v: f64| v.is_finite() && v > 0.0;
        if !valid(width) || !valid(height) {
            return Err(ChartError::InvalidFigureSize(width, height));
        }
        let axes = Axes::new(theme.palette.clone());
        Ok(Self {
            width,
            height,
            theme,
            subplot: SubplotParams::default(),
            texts: Vec::new(),
            axes,
        })
    }

    /// Size as (width, height) in inches
    pub fn size_inches(&self) -> (f64, f64) {
        (self.width, self.height)
    }

    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    pub fn axes(&self) -> &Axes {
        &self.axes
    }

    pub fn axes_mut(&mut self) -> &mut Axes {
        &mut self.axes
    }

    pub fn subplot_params(&self) -> SubplotParams {
        self.subplot
    }

    /// Change some of the subplot margins
    pub fn subplots_adjust(&mut self, adjust: SubplotAdjust) {
        let params = &mut self.subplot;
        params.left = adjust.left.unwrap_or(params.left);
        params.right = adjust.right.unwrap_or(params.right);
        params.bottom = adjust.bottom.unwrap_or(params.bottom);
        params.top = adjust.top.unwrap_or(params.top);
    }

    /// Place text at figure fractions `(x, y)`
    pub fn text(
        &mut self,
        x: f64,
        y: f64,
        text: impl Into<String>,
        font_size: f64,
        anchor: TextAnchor,
    ) {
        self.texts.push(FigureText {
            x,
            y,
            text: text.into(),
            font_size,
            anchor,
        });
    }

    pub fn texts(&self) -> &[FigureText] {
        &self.texts
    }

    /// Recompute subplot margins so every label fits inside the figure
    pub fn tight_layout(&mut self) {
        self.subplot = layout::tight_subplot_params(self);
    }

    /// Render to drawing primitives at `dpi`
    pub fn render(&self, dpi: f64) -> RenderedFigure {
        FigureRenderer::new(dpi).render(self)
    }

    /// Write the figure to `path`; the format follows the file extension
    pub fn savefig(&self, path: impl AsRef<Path>, dpi: f64) -> ChartResult<()> {
        crate::export::save_figure(self, path.as_ref(), dpi)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_figure_size() {
        let figure = Figure::new(10.0, 8.0, Theme::default()).unwrap();
        assert_eq!(figure.size_inches(), (10.0, 8.0));
    }

    #[test]
    fn test_invalid_figure_size() {
        assert!(matches!(
            Figure::new(0.0, 8.0, Theme::default()),
            Err(ChartError::InvalidFigureSize(..))
        ));
        assert!(Figure::new(10.0, f64::NAN, Theme::default()).is_err());
    }

    #[test]
    fn test_subplots_adjust_is_partial() {
        let mut figure = Figure::new(6.0, 4.0, Theme::default()).unwrap();
        figure.subplots_adjust(SubplotAdjust {
            bottom: Some(0.6),
            ..Default::default()
        });
        let params = figure.subplot_params();
        assert_eq!(params.bottom, 0.6);
        assert_eq!(params.left, SubplotParams::default().left);
    }

    #[test]
    fn test_axes_use_theme_palette() {
        let mut figure = Figure::new(6.0, 4.0, Theme::default()).unwrap();
        figure.axes_mut().plot(&[0.0, 1.0], &[0.0, 1.0]);
        match &figure.axes().series()[0] {
            crate::model::Series::Line { color, .. } => {
                assert_eq!(*color, figure.theme().palette[0])
            }
            _ => panic!("expected a line series"),
        }
    }
}
