//! Plot Helpers - Arabic labels and consistent themes for charts
//!
//! - `labels`: Arabic titles/axis labels and reverse-mapped tick labels
//! - `lifecycle`: `begin_plot` / `end_plot` bracketing a plot's construction
//! - `settings`: JSON-backed defaults for both
//!
//! Themes live on the figure returned by [`begin_plot`]; there is no
//! process-wide style state.

mod error;
pub mod labels;
pub mod lifecycle;
pub mod settings;

pub use error::*;
pub use labels::{
    apply_labels_horizontal, apply_labels_vertical, translate_tick_labels, ArabicLabeler,
    LabelDictionary,
};
pub use lifecycle::{begin_plot, end_plot, BeginPlotConfig, EndPlotOptions, SAVE_DPI};
pub use settings::PlotSettings;

pub use charts::{Axes, AxisKind, Figure, FigureViewer, HeadlessViewer, Theme};
pub use text_engine::{shape_for_display, DisplayPipeline, ReshaperConfig};
