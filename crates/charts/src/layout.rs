//! Figure layout calculations
//!
//! Converts figure fractions and data coordinates into pixels, estimates
//! text extents, and computes the tight-layout margins.
//!
//! Text metrics are estimated from character counts (0.6 em per character,
//! 1.2 em line height) rather than measured from a font.

use crate::axes::{Axes, Axis, TextLabel};
use crate::figure::{Figure, SubplotParams};
use crate::styles::Theme;
use serde::{Deserialize, Serialize};

/// Points per inch
pub const POINTS_PER_INCH: f64 = 72.0;

/// Gap between tick marks and tick labels, in points
pub const TICK_PAD: f64 = 3.5;
/// Gap between tick labels and the axis label, in points
pub const LABEL_PAD: f64 = 4.0;
/// Gap between the axes top and the title baseline, in points
pub const TITLE_PAD: f64 = 6.0;
/// Outer padding of the tight layout, as a multiple of the tick label size
pub const TIGHT_PAD: f64 = 1.08;

/// A rectangle in layout coordinates
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct LayoutRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl LayoutRect {
    /// Create a new rectangle
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self { x, y, width, height }
    }

    /// Get the right edge
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    /// Get the bottom edge
    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    /// Get the center X coordinate
    pub fn center_x(&self) -> f64 {
        self.x + self.width / 2.0
    }

    /// Get the center Y coordinate
    pub fn center_y(&self) -> f64 {
        self.y + self.height / 2.0
    }
}

/// Estimated (width, height) of `text` at `font_size`, after rotating by `rotation` degrees
pub fn text_extent(text: &str, font_size: f64, rotation: f64) -> (f64, f64) {
    if text.is_empty() {
        return (0.0, 0.0);
    }
    let lines: Vec<&str> = text.lines().collect();
    let longest = lines.iter().map(|l| l.chars().count()).max().unwrap_or(0);
    let width = longest as f64 * font_size * 0.6;
    let height = lines.len().max(1) as f64 * font_size * 1.2;

    let radians = rotation.to_radians();
    let (sin, cos) = (radians.sin().abs(), radians.cos().abs());
    (width * cos + height * sin, width * sin + height * cos)
}

fn label_size(label: &TextLabel, default: f64) -> f64 {
    label.font_size.unwrap_or(default)
}

/// Largest rotated extent among the visible tick labels of `axis`
pub fn max_tick_label_extent(axis: &Axis, theme: &Theme) -> (f64, f64) {
    let (low, high) = axis.limits();
    let (low, high) = (low.min(high), low.max(high));
    axis.ticks()
        .iter()
        .zip(axis.tick_labels())
        .filter(|(t, _)| (low..=high).contains(*t))
        .map(|(_, label)| text_extent(label, theme.fonts.tick_label, axis.tick_rotation()))
        .fold((0.0, 0.0), |(w, h), (lw, lh)| (f64::max(w, lw), f64::max(h, lh)))
}

/// Vertical room (points) taken below the x axis by tick marks, tick labels and the x label
pub fn x_axis_depth(axes: &Axes, theme: &Theme) -> f64 {
    let (_, tick_height) = max_tick_label_extent(axes.x_axis(), theme);
    let label = axes
        .x_axis()
        .label()
        .filter(|l| !l.text.is_empty())
        .map(|l| LABEL_PAD + text_extent(&l.text, label_size(l, theme.fonts.axis_label), 0.0).1)
        .unwrap_or(0.0);
    theme.tick_length + TICK_PAD + tick_height + label
}

/// Horizontal room (points) taken left of the y axis
pub fn y_axis_depth(axes: &Axes, theme: &Theme) -> f64 {
    let (tick_width, _) = max_tick_label_extent(axes.y_axis(), theme);
    let label = axes
        .y_axis()
        .label()
        .filter(|l| !l.text.is_empty())
        .map(|l| LABEL_PAD + text_extent(&l.text, label_size(l, theme.fonts.axis_label), 90.0).0)
        .unwrap_or(0.0);
    theme.tick_length + TICK_PAD + tick_width + label
}

/// Subplot margins that keep every axes decoration inside the figure.
///
/// Figure texts are kept clear as well: a text in the lower half reserves its
/// line at the bottom, one in the upper half at the top. When the decorations
/// cannot fit, the current margins are returned unchanged.
pub fn tight_subplot_params(figure: &Figure) -> SubplotParams {
    let theme = figure.theme();
    let axes = figure.axes();
    let (width_in, height_in) = figure.size_inches();
    let (width, height) = (width_in * POINTS_PER_INCH, height_in * POINTS_PER_INCH);
    let pad = TIGHT_PAD * theme.fonts.tick_label;

    let title = axes
        .title()
        .filter(|t| !t.text.is_empty())
        .map(|t| TITLE_PAD + text_extent(&t.text, label_size(t, theme.fonts.title), 0.0).1)
        .unwrap_or(0.0);

    let mut bottom_texts: f64 = 0.0;
    let mut top_texts: f64 = 0.0;
    for text in figure.texts() {
        let (_, line) = text_extent(&text.text, text.font_size, 0.0);
        if text.y < 0.5 {
            bottom_texts = bottom_texts.max(text.y * height + line);
        } else {
            top_texts = top_texts.max((1.0 - text.y) * height + line);
        }
    }

    let left = pad + y_axis_depth(axes, theme);
    let right = pad;
    let bottom = pad + x_axis_depth(axes, theme) + bottom_texts;
    let top = pad + title + top_texts;

    let params = SubplotParams {
        left: left / width,
        right: 1.0 - right / width,
        bottom: bottom / height,
        top: 1.0 - top / height,
    };

    if params.left >= params.right || params.bottom >= params.top {
        tracing::warn!(
            width = width_in,
            height = height_in,
            "tight layout not applied: decorations do not fit in the figure"
        );
        return figure.subplot_params();
    }
    params
}

/// Pixel geometry of a figure at a given resolution
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FigureLayout {
    /// Whole canvas in pixels
    pub canvas: LayoutRect,
    /// Axes area in pixels, top-left origin
    pub axes_area: LayoutRect,
    /// Pixels per point
    pub px_per_pt: f64,
    pub x_limits: (f64, f64),
    pub y_limits: (f64, f64),
}

impl FigureLayout {
    pub fn new(figure: &Figure, dpi: f64) -> Self {
        let (width_in, height_in) = figure.size_inches();
        let canvas = LayoutRect::new(0.0, 0.0, width_in * dpi, height_in * dpi);
        let params = figure.subplot_params();
        let axes_area = LayoutRect::new(
            params.left * canvas.width,
            (1.0 - params.top) * canvas.height,
            (params.right - params.left) * canvas.width,
            (params.top - params.bottom) * canvas.height,
        );
        Self {
            canvas,
            axes_area,
            px_per_pt: dpi / POINTS_PER_INCH,
            x_limits: figure.axes().x_axis().limits(),
            y_limits: figure.axes().y_axis().limits(),
        }
    }

    /// Points to pixels
    pub fn pt(&self, points: f64) -> f64 {
        points * self.px_per_pt
    }

    /// Data x to pixel x
    pub fn x_to_px(&self, x: f64) -> f64 {
        self.axes_area.x + fraction(x, self.x_limits) * self.axes_area.width
    }

    /// Data y to pixel y (pixel y grows downward)
    pub fn y_to_px(&self, y: f64) -> f64 {
        self.axes_area.bottom() - fraction(y, self.y_limits) * self.axes_area.height
    }

    pub fn x_in_view(&self, x: f64) -> bool {
        let (low, high) = self.x_limits;
        (low.min(high)..=low.max(high)).contains(&x)
    }

    pub fn y_in_view(&self, y: f64) -> bool {
        let (low, high) = self.y_limits;
        (low.min(high)..=low.max(high)).contains(&y)
    }
}

/// Position of `value` within `(low, high)`; a zero-width range maps everything to its middle
fn fraction(value: f64, (low, high): (f64, f64)) -> f64 {
    let span = high - low;
    if span == 0.0 {
        return 0.5;
    }
    (value - low) / span
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::TextAnchor;

    fn figure() -> Figure {
        Figure::new(10.0, 8.0, Theme::default()).unwrap()
    }

    #[test]
    fn test_text_extent_rotation() {
        let (w, h) = text_extent("abcd", 10.0, 0.0);
        assert!((w - 24.0).abs() < 1e-9);
        assert!((h - 12.0).abs() < 1e-9);

        let (w90, h90) = text_extent("abcd", 10.0, 90.0);
        assert!((w90 - 12.0).abs() < 1e-9);
        assert!((h90 - 24.0).abs() < 1e-9);
    }

    #[test]
    fn test_text_extent_empty() {
        assert_eq!(text_extent("", 12.0, 45.0), (0.0, 0.0));
    }

    #[test]
    fn test_figure_layout_pixels() {
        let layout = FigureLayout::new(&figure(), 100.0);
        assert_eq!(layout.canvas.width, 1000.0);
        assert_eq!(layout.canvas.height, 800.0);
        assert!((layout.axes_area.x - 125.0).abs() < 1e-9);
        assert!((layout.x_to_px(0.0) - layout.axes_area.x).abs() < 1e-9);
        assert!((layout.y_to_px(0.0) - layout.axes_area.bottom()).abs() < 1e-9);
    }

    #[test]
    fn test_zero_width_limits_map_to_middle() {
        let mut figure = figure();
        figure
            .axes_mut()
            .axis_mut(crate::axes::AxisKind::X)
            .set_limits(3.0, 3.0);
        let layout = FigureLayout::new(&figure, 100.0);
        let px = layout.x_to_px(3.0);
        assert!(px.is_finite());
        assert!((px - layout.axes_area.center_x()).abs() < 1e-9);
    }

    #[test]
    fn test_tight_layout_grows_bottom_for_rotated_labels() {
        let mut plain = figure();
        plain.axes_mut().bar(&["a fairly long category", "another long one"], &[1.0, 2.0]);
        let mut rotated = plain.clone();
        rotated.axes_mut().set_tick_rotation(crate::axes::AxisKind::X, 90.0);

        let plain = tight_subplot_params(&plain);
        let rotated = tight_subplot_params(&rotated);
        assert!(rotated.bottom > plain.bottom);
    }

    #[test]
    fn test_tight_layout_keeps_bottom_text_clear() {
        let base = figure();
        let mut with_text = base.clone();
        with_text.text(0.5, 0.001, "source: field survey", 12.0, TextAnchor::Middle);

        assert!(tight_subplot_params(&with_text).bottom > tight_subplot_params(&base).bottom);
    }

    #[test]
    fn test_tight_layout_title_reserves_top() {
        let base = figure();
        let mut titled = base.clone();
        titled.axes_mut().set_title("Yield by region");
        assert!(tight_subplot_params(&titled).top < tight_subplot_params(&base).top);
    }

    #[test]
    fn test_tight_layout_gives_up_on_tiny_figure() {
        let mut tiny = Figure::new(0.2, 0.2, Theme::default()).unwrap();
        tiny.axes_mut().set_title("A title that cannot possibly fit");
        assert_eq!(tight_subplot_params(&tiny), tiny.subplot_params());
    }
}
