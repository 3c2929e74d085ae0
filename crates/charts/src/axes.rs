//! Axes: title, axis labels, ticks, and plotted series
//!
//! Tick labels are stored independently of tick positions. Replacing the
//! labels with a list of a different length is allowed and logged; the
//! renderer pairs labels with ticks by position.

use crate::model::*;
use serde::{Deserialize, Serialize};

/// Text with an optional explicit font size in points
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextLabel {
    pub text: String,
    /// `None` uses the theme size for the element
    pub font_size: Option<f64>,
}

impl TextLabel {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            font_size: None,
        }
    }

    pub fn with_size(text: impl Into<String>, font_size: f64) -> Self {
        Self {
            text: text.into(),
            font_size: Some(font_size),
        }
    }
}

/// Which axis an operation targets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AxisKind {
    X,
    Y,
}

/// One axis of an [`Axes`]
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Axis {
    label: Option<TextLabel>,
    ticks: Vec<f64>,
    tick_labels: Vec<String>,
    /// Degrees, counterclockwise
    tick_rotation: f64,
    categories: Vec<String>,
    limits: Option<(f64, f64)>,
    /// Set once the caller fixes ticks or labels; autoscaling stops touching them
    fixed_ticks: bool,
}

impl Axis {
    pub fn label(&self) -> Option<&TextLabel> {
        self.label.as_ref()
    }

    pub fn set_label(&mut self, label: TextLabel) {
        self.label = Some(label);
    }

    pub fn ticks(&self) -> &[f64] {
        &self.ticks
    }

    pub fn tick_labels(&self) -> &[String] {
        &self.tick_labels
    }

    pub fn tick_rotation(&self) -> f64 {
        self.tick_rotation
    }

    pub fn set_tick_rotation(&mut self, degrees: f64) {
        self.tick_rotation = degrees;
    }

    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    /// View limits, (0, 1) until something is plotted
    pub fn limits(&self) -> (f64, f64) {
        self.limits.unwrap_or((0.0, 1.0))
    }

    pub fn set_limits(&mut self, low: f64, high: f64) {
        self.limits = Some((low, high));
        if !self.fixed_ticks {
            self.generate_ticks();
        }
    }

    /// Replace the tick labels, keeping the tick positions
    pub fn set_tick_labels(&mut self, labels: Vec<String>) {
        if labels.len() != self.ticks.len() {
            tracing::warn!(
                ticks = self.ticks.len(),
                labels = labels.len(),
                "tick label count does not match tick count; labels are paired by position"
            );
        }
        self.tick_labels = labels;
        self.fixed_ticks = true;
    }

    /// Position of a category, appending it when new
    pub(crate) fn category_position(&mut self, category: &str) -> f64 {
        match self.categories.iter().position(|c| c == category) {
            Some(index) => index as f64,
            None => {
                self.categories.push(category.to_string());
                (self.categories.len() - 1) as f64
            }
        }
    }

    fn generate_ticks(&mut self) {
        if !self.categories.is_empty() {
            self.ticks = (0..self.categories.len()).map(|i| i as f64).collect();
            self.tick_labels = self.categories.clone();
            return;
        }
        let (low, high) = self.limits();
        let (ticks, decimals) = nice_ticks(low, high, 5);
        self.tick_labels = ticks.iter().map(|&t| format_tick(t, decimals)).collect();
        self.ticks = ticks;
    }
}

/// Round tick positions covering `[low, high]` with steps of 1, 2 or 5 times a power of ten.
///
/// Returns the ticks and the number of decimals needed to print them.
pub fn nice_ticks(low: f64, high: f64, target: usize) -> (Vec<f64>, usize) {
    let (low, high) = if high > low { (low, high) } else { (low - 0.5, low + 0.5) };
    let raw_step = (high - low) / target.max(1) as f64;
    let magnitude = 10_f64.powf(raw_step.log10().floor());
    let normalized = raw_step / magnitude;
    let step = if normalized <= 1.0 {
        magnitude
    } else if normalized <= 2.0 {
        2.0 * magnitude
    } else if normalized <= 5.0 {
        5.0 * magnitude
    } else {
        10.0 * magnitude
    };

    let start = (low / step).ceil() * step;
    let count = ((high - start) / step + 1e-9).floor().max(0.0) as usize;
    let ticks = (0..=count)
        .map(|i| {
            let tick = start + i as f64 * step;
            if tick.abs() < step * 1e-9 { 0.0 } else { tick }
        })
        .collect();
    let decimals = if step >= 1.0 {
        0
    } else {
        (-step.log10().floor()) as usize
    };
    (ticks, decimals)
}

fn format_tick(value: f64, decimals: usize) -> String {
    format!("{:.*}", decimals, value)
}

/// A single plotting area
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Axes {
    title: Option<TextLabel>,
    x: Axis,
    y: Axis,
    series: Vec<Series>,
    palette: Vec<Color>,
}

impl Default for Axes {
    fn default() -> Self {
        Self::new(DEEP_PALETTE.to_vec())
    }
}

impl Axes {
    /// Create empty axes drawing series colors from `palette`
    pub fn new(palette: Vec<Color>) -> Self {
        let mut axes = Self {
            title: None,
            x: Axis::default(),
            y: Axis::default(),
            series: Vec::new(),
            palette,
        };
        axes.x.generate_ticks();
        axes.y.generate_ticks();
        axes
    }

    pub fn title(&self) -> Option<&TextLabel> {
        self.title.as_ref()
    }

    pub fn set_title(&mut self, text: impl Into<String>) {
        self.title = Some(TextLabel::new(text));
    }

    pub fn set_title_with_size(&mut self, text: impl Into<String>, font_size: f64) {
        self.title = Some(TextLabel::with_size(text, font_size));
    }

    pub fn set_xlabel(&mut self, text: impl Into<String>) {
        self.x.set_label(TextLabel::new(text));
    }

    pub fn set_ylabel(&mut self, text: impl Into<String>) {
        self.y.set_label(TextLabel::new(text));
    }

    pub fn set_xlabel_with_size(&mut self, text: impl Into<String>, font_size: f64) {
        self.x.set_label(TextLabel::with_size(text, font_size));
    }

    pub fn set_ylabel_with_size(&mut self, text: impl Into<String>, font_size: f64) {
        self.y.set_label(TextLabel::with_size(text, font_size));
    }

    pub fn x_axis(&self) -> &Axis {
        &self.x
    }

    pub fn y_axis(&self) -> &Axis {
        &self.y
    }

    pub fn axis(&self, kind: AxisKind) -> &Axis {
        match kind {
            AxisKind::X => &self.x,
            AxisKind::Y => &self.y,
        }
    }

    pub fn axis_mut(&mut self, kind: AxisKind) -> &mut Axis {
        match kind {
            AxisKind::X => &mut self.x,
            AxisKind::Y => &mut self.y,
        }
    }

    pub fn xticklabels(&self) -> &[String] {
        self.x.tick_labels()
    }

    pub fn yticklabels(&self) -> &[String] {
        self.y.tick_labels()
    }

    pub fn set_xticklabels(&mut self, labels: Vec<String>) {
        self.x.set_tick_labels(labels);
    }

    pub fn set_yticklabels(&mut self, labels: Vec<String>) {
        self.y.set_tick_labels(labels);
    }

    /// Rotate the tick labels of one axis
    pub fn set_tick_rotation(&mut self, kind: AxisKind, degrees: f64) {
        self.axis_mut(kind).set_tick_rotation(degrees);
    }

    pub fn series(&self) -> &[Series] {
        &self.series
    }

    /// Vertical bars, one per category
    pub fn bar<S: AsRef<str>>(&mut self, categories: &[S], values: &[f64]) {
        let positions = categories
            .iter()
            .map(|c| self.x.category_position(c.as_ref()))
            .collect();
        let color = self.next_color();
        self.push_series(Series::Bar {
            positions,
            values: values.to_vec(),
            color,
        });
    }

    /// Horizontal bars, one per category
    pub fn barh<S: AsRef<str>>(&mut self, categories: &[S], values: &[f64]) {
        let positions = categories
            .iter()
            .map(|c| self.y.category_position(c.as_ref()))
            .collect();
        let color = self.next_color();
        self.push_series(Series::BarH {
            positions,
            values: values.to_vec(),
            color,
        });
    }

    /// Line through paired x and y values
    pub fn plot(&mut self, x: &[f64], y: &[f64]) {
        let points = x.iter().copied().zip(y.iter().copied()).collect();
        let color = self.next_color();
        self.push_series(Series::Line { points, color });
    }

    fn next_color(&self) -> Color {
        if self.palette.is_empty() {
            return Color::BLACK;
        }
        self.palette[self.series.len() % self.palette.len()]
    }

    fn push_series(&mut self, series: Series) {
        self.series.push(series);
        self.autoscale();
    }

    fn autoscale(&mut self) {
        let mut x_span: Option<(f64, f64)> = None;
        let mut y_span: Option<(f64, f64)> = None;
        let mut has_bars = (false, false);

        for series in &self.series {
            let Some((sx, sy)) = series.extents() else {
                continue;
            };
            match series {
                Series::Bar { .. } => has_bars.1 = true,
                Series::BarH { .. } => has_bars.0 = true,
                Series::Line { .. } => {}
            }
            x_span = Some(merge(x_span, sx));
            y_span = Some(merge(y_span, sy));
        }

        if let Some(span) = x_span {
            let numeric = self.x.categories.is_empty() && !has_bars.0;
            let (low, high) = pad_span(span, numeric, has_bars.0);
            self.x.set_limits(low, high);
        }
        if let Some(span) = y_span {
            let numeric = self.y.categories.is_empty() && !has_bars.1;
            let (low, high) = pad_span(span, numeric, has_bars.1);
            self.y.set_limits(low, high);
        }
    }
}

fn merge(acc: Option<(f64, f64)>, span: (f64, f64)) -> (f64, f64) {
    match acc {
        None => span,
        Some((lo, hi)) => (lo.min(span.0), hi.max(span.1)),
    }
}

/// 5% margins; value axes of bar charts stay pinned at zero.
///
/// Zero-width spans are widened by 0.5 on each side.
fn pad_span((low, high): (f64, f64), numeric: bool, bar_values: bool) -> (f64, f64) {
    if high <= low {
        return (low - 0.5, high + 0.5);
    }
    if !numeric && !bar_values {
        return (low, high);
    }
    let margin = (high - low).abs() * 0.05;
    if bar_values {
        let low = if low < 0.0 { low - margin } else { low };
        let high = if high > 0.0 { high + margin } else { high };
        return (low, high);
    }
    (low - margin, high + margin)
}
