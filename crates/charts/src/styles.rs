//! Chart styling
//!
//! Named axes styles and plotting contexts, resolved into a [`Theme`] that a
//! figure carries for its whole lifetime. Nothing here is process-global:
//! two figures built with different themes render independently.

use crate::error::{ChartError, ChartResult};
use crate::model::*;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Background and grid look of the axes
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AxesStyle {
    #[default]
    DarkGrid,
    WhiteGrid,
    Dark,
    White,
    Ticks,
}

impl FromStr for AxesStyle {
    type Err = ChartError;

    fn from_str(name: &str) -> ChartResult<Self> {
        match name {
            "darkgrid" => Ok(AxesStyle::DarkGrid),
            "whitegrid" => Ok(AxesStyle::WhiteGrid),
            "dark" => Ok(AxesStyle::Dark),
            "white" => Ok(AxesStyle::White),
            "ticks" => Ok(AxesStyle::Ticks),
            other => Err(ChartError::InvalidStyle(other.to_string())),
        }
    }
}

impl fmt::Display for AxesStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            AxesStyle::DarkGrid => "darkgrid",
            AxesStyle::WhiteGrid => "whitegrid",
            AxesStyle::Dark => "dark",
            AxesStyle::White => "white",
            AxesStyle::Ticks => "ticks",
        };
        f.write_str(name)
    }
}

/// Scaling preset for fonts and line widths
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlottingContext {
    Paper,
    #[default]
    Notebook,
    Talk,
    Poster,
}

impl PlottingContext {
    /// Scale factor relative to `notebook`
    pub fn scale(&self) -> f64 {
        match self {
            PlottingContext::Paper => 0.8,
            PlottingContext::Notebook => 1.0,
            PlottingContext::Talk => 1.5,
            PlottingContext::Poster => 2.0,
        }
    }
}

impl FromStr for PlottingContext {
    type Err = ChartError;

    fn from_str(name: &str) -> ChartResult<Self> {
        match name {
            "paper" => Ok(PlottingContext::Paper),
            "notebook" => Ok(PlottingContext::Notebook),
            "talk" => Ok(PlottingContext::Talk),
            "poster" => Ok(PlottingContext::Poster),
            other => Err(ChartError::InvalidContext(other.to_string())),
        }
    }
}

impl fmt::Display for PlottingContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PlottingContext::Paper => "paper",
            PlottingContext::Notebook => "notebook",
            PlottingContext::Talk => "talk",
            PlottingContext::Poster => "poster",
        };
        f.write_str(name)
    }
}

/// Gridline appearance
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GridStyle {
    pub visible: bool,
    pub color: Color,
    pub line_style: LineStyle,
    /// Width in points
    pub line_width: f64,
}

/// Font sizes in points
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FontSizes {
    pub title: f64,
    pub axis_label: f64,
    pub tick_label: f64,
}

/// Fully resolved visual theme of a figure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Theme {
    pub style: AxesStyle,
    pub context: PlottingContext,
    pub figure_facecolor: Color,
    pub axes_facecolor: Color,
    /// Spine color, `None` when spines are hidden
    pub spine_color: Option<Color>,
    pub text_color: Color,
    pub grid: GridStyle,
    pub fonts: FontSizes,
    pub font_family: String,
    /// Series line width in points
    pub line_width: f64,
    /// Tick mark length in points, zero hides tick marks
    pub tick_length: f64,
    pub palette: Vec<Color>,
}

impl Default for Theme {
    fn default() -> Self {
        Self::new(AxesStyle::default(), PlottingContext::default())
    }
}

impl Theme {
    /// Resolve a style and context into a theme
    pub fn new(style: AxesStyle, context: PlottingContext) -> Self {
        let scale = context.scale();
        let light = Color::rgb(234, 234, 242);
        let dark_spine = Color::gray_level(0.15);
        let light_grid = Color::gray_level(0.8);

        let (axes_facecolor, grid_visible, grid_color, spine_color, tick_length) = match style {
            AxesStyle::DarkGrid => (light, true, Color::WHITE, None, 0.0),
            AxesStyle::WhiteGrid => (Color::WHITE, true, light_grid, Some(light_grid), 0.0),
            AxesStyle::Dark => (light, false, Color::WHITE, None, 0.0),
            AxesStyle::White => (Color::WHITE, false, light_grid, Some(dark_spine), 0.0),
            AxesStyle::Ticks => (Color::WHITE, false, light_grid, Some(dark_spine), 6.0 * scale),
        };

        Self {
            style,
            context,
            figure_facecolor: Color::WHITE,
            axes_facecolor,
            spine_color,
            text_color: Color::gray_level(0.15),
            grid: GridStyle {
                visible: grid_visible,
                color: grid_color,
                line_style: LineStyle::Solid,
                line_width: 1.0 * scale,
            },
            fonts: FontSizes {
                title: 12.0 * scale,
                axis_label: 12.0 * scale,
                tick_label: 11.0 * scale,
            },
            font_family: "sans-serif".to_string(),
            line_width: 1.5 * scale,
            tick_length,
            palette: DEEP_PALETTE.to_vec(),
        }
    }

    /// Resolve style and context names
    pub fn from_names(style: &str, context: &str) -> ChartResult<Self> {
        Ok(Self::new(style.parse()?, context.parse()?))
    }

    /// Turn the grid on with the given color and dash pattern
    pub fn with_grid(mut self, color: Color, line_style: LineStyle) -> Self {
        self.grid.visible = true;
        self.grid.color = color;
        self.grid.line_style = line_style;
        self
    }
}
