//! Plot lifecycle: theme setup and finalization
//!
//! [`begin_plot`] resolves a theme and creates the figure; [`end_plot`]
//! applies the last labels, runs the tight layout, optionally saves the
//! figure, and hands it to a viewer.

use crate::error::PlotResult;
use charts::{AxisKind, Color, Figure, FigureViewer, LineStyle, SubplotAdjust, TextAnchor, Theme};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Resolution used when saving figures
pub const SAVE_DPI: f64 = 300.0;

/// Bottom margin reserved when a subtitle is present, as a fraction of figure height
pub const SUBTITLE_BOTTOM: f64 = 0.6;
/// Subtitle position in figure fractions
pub const SUBTITLE_POSITION: (f64, f64) = (0.5, 0.001);
/// Subtitle font size in points
pub const SUBTITLE_FONT_SIZE: f64 = 12.0;

/// Options for [`begin_plot`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BeginPlotConfig {
    /// (width, height) in inches
    pub figsize: (f64, f64),
    /// darkgrid, whitegrid, dark, white or ticks
    pub style: String,
    /// paper, notebook, talk or poster
    pub context: String,
    pub grid_color: String,
    /// `-`, `--`, `-.`, `:` or their long names
    pub grid_linestyle: String,
    /// Text placed centered at the bottom of the figure
    pub subtitle: Option<String>,
}

impl Default for BeginPlotConfig {
    fn default() -> Self {
        Self {
            figsize: (10.0, 8.0),
            style: "darkgrid".to_string(),
            context: "notebook".to_string(),
            grid_color: "grey".to_string(),
            grid_linestyle: "-.".to_string(),
            subtitle: None,
        }
    }
}

impl BeginPlotConfig {
    /// Resolve the style, context and grid options into a theme
    pub fn theme(&self) -> PlotResult<Theme> {
        let color: Color = self.grid_color.parse()?;
        let line_style: LineStyle = self.grid_linestyle.parse()?;
        Ok(Theme::from_names(&self.style, &self.context)?.with_grid(color, line_style))
    }
}

/// Options for [`end_plot`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EndPlotOptions {
    pub title: Option<String>,
    pub xlabel: Option<String>,
    pub ylabel: Option<String>,
    /// Degrees; zero leaves the x tick labels as they are
    pub xticks_rotation: f64,
    /// Degrees; zero leaves the y tick labels as they are
    pub yticks_rotation: f64,
    pub save_figure: bool,
    pub filename: PathBuf,
}

impl Default for EndPlotOptions {
    fn default() -> Self {
        Self {
            title: None,
            xlabel: None,
            ylabel: None,
            xticks_rotation: 0.0,
            yticks_rotation: 0.0,
            save_figure: false,
            filename: PathBuf::from("plot.jpg"),
        }
    }
}

/// Font size of the title set by [`end_plot`]
const TITLE_FONT_SIZE: f64 = 14.0;
/// Font size of the axis labels set by [`end_plot`]
const LABEL_FONT_SIZE: f64 = 12.0;

/// Create a themed figure.
///
/// The theme is stored on the returned figure; nothing outside it changes.
pub fn begin_plot(config: &BeginPlotConfig) -> PlotResult<Figure> {
    let theme = config.theme()?;
    let (width, height) = config.figsize;
    tracing::debug!(
        width,
        height,
        style = %theme.style,
        context = %theme.context,
        "creating figure"
    );

    let mut figure = Figure::new(width, height, theme)?;

    if let Some(subtitle) = config.subtitle.as_deref().filter(|s| !s.is_empty()) {
        figure.subplots_adjust(SubplotAdjust {
            bottom: Some(SUBTITLE_BOTTOM),
            ..Default::default()
        });
        let (x, y) = SUBTITLE_POSITION;
        figure.text(x, y, subtitle, SUBTITLE_FONT_SIZE, TextAnchor::Middle);
    }

    Ok(figure)
}

/// Finish a figure: labels, tick rotation, tight layout, optional save, show.
///
/// Labels are set verbatim; shape Arabic text beforehand if needed.
pub fn end_plot(
    figure: &mut Figure,
    options: &EndPlotOptions,
    viewer: &mut dyn FigureViewer,
) -> PlotResult<()> {
    let axes = figure.axes_mut();
    if let Some(title) = non_empty(&options.title) {
        axes.set_title_with_size(title, TITLE_FONT_SIZE);
    }
    if let Some(xlabel) = non_empty(&options.xlabel) {
        axes.set_xlabel_with_size(xlabel, LABEL_FONT_SIZE);
    }
    if let Some(ylabel) = non_empty(&options.ylabel) {
        axes.set_ylabel_with_size(ylabel, LABEL_FONT_SIZE);
    }

    if options.xticks_rotation != 0.0 {
        axes.set_tick_rotation(AxisKind::X, options.xticks_rotation);
    }
    if options.yticks_rotation != 0.0 {
        axes.set_tick_rotation(AxisKind::Y, options.yticks_rotation);
    }

    figure.tight_layout();

    if options.save_figure {
        figure.savefig(&options.filename, SAVE_DPI)?;
    }

    viewer.show(figure)?;
    Ok(())
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.is_empty())
}
