//! Figure rendering
//!
//! This module renders figures to SVG or to render primitives that the
//! bitmap exporter replays.

use crate::axes::{Axis, TextLabel};
use crate::figure::Figure;
use crate::layout::*;
use crate::model::*;
use serde::{Deserialize, Serialize};

/// A render primitive, in pixel coordinates with a top-left origin
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum RenderPrimitive {
    /// A filled rectangle
    Rect {
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        fill: Color,
    },
    /// A line
    Line {
        x1: f64,
        y1: f64,
        x2: f64,
        y2: f64,
        stroke: Color,
        stroke_width: f64,
        dash: Option<Vec<f64>>,
    },
    /// A polyline (multiple connected line segments)
    Polyline {
        points: Vec<(f64, f64)>,
        stroke: Color,
        stroke_width: f64,
    },
    /// Text
    Text {
        x: f64,
        y: f64,
        text: String,
        font_size: f64,
        font_family: String,
        fill: Color,
        anchor: TextAnchor,
        baseline: TextBaseline,
        /// Degrees, counterclockwise
        rotation: f64,
    },
}

/// Text anchor position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TextAnchor {
    Start,
    Middle,
    End,
}

/// Text baseline position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TextBaseline {
    Top,
    Middle,
    Bottom,
    Alphabetic,
}

/// Rendered figure output
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderedFigure {
    /// Width in pixels
    pub width: f64,
    /// Height in pixels
    pub height: f64,
    /// Render primitives
    pub primitives: Vec<RenderPrimitive>,
}

impl RenderedFigure {
    /// All text primitives' strings, in drawing order
    pub fn texts(&self) -> Vec<&str> {
        self.primitives
            .iter()
            .filter_map(|p| match p {
                RenderPrimitive::Text { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }
}

/// Bar thickness in data units
const BAR_WIDTH: f64 = 0.8;

/// Figure renderer
pub struct FigureRenderer {
    /// Output resolution
    pub dpi: f64,
}

impl Default for FigureRenderer {
    fn default() -> Self {
        Self { dpi: 100.0 }
    }
}

impl FigureRenderer {
    /// Create a renderer at the given resolution
    pub fn new(dpi: f64) -> Self {
        Self { dpi }
    }

    /// Render a figure to primitives
    pub fn render(&self, figure: &Figure) -> RenderedFigure {
        let layout = FigureLayout::new(figure, self.dpi);
        let theme = figure.theme();
        let mut primitives = Vec::new();

        primitives.push(RenderPrimitive::Rect {
            x: 0.0,
            y: 0.0,
            width: layout.canvas.width,
            height: layout.canvas.height,
            fill: theme.figure_facecolor,
        });

        let area = layout.axes_area;
        primitives.push(RenderPrimitive::Rect {
            x: area.x,
            y: area.y,
            width: area.width,
            height: area.height,
            fill: theme.axes_facecolor,
        });

        if theme.grid.visible && theme.grid.line_style != LineStyle::None {
            self.render_gridlines(&mut primitives, figure, &layout);
        }
        self.render_series(&mut primitives, figure, &layout);
        self.render_spines(&mut primitives, figure, &layout);
        self.render_x_axis(&mut primitives, figure, &layout);
        self.render_y_axis(&mut primitives, figure, &layout);

        if let Some(title) = figure.axes().title() {
            primitives.push(self.text(
                figure,
                &layout,
                area.center_x(),
                area.y - layout.pt(TITLE_PAD),
                title,
                theme.fonts.title,
                TextAnchor::Middle,
                TextBaseline::Bottom,
                0.0,
            ));
        }

        for text in figure.texts() {
            primitives.push(RenderPrimitive::Text {
                x: text.x * layout.canvas.width,
                y: (1.0 - text.y) * layout.canvas.height,
                text: text.text.clone(),
                font_size: layout.pt(text.font_size),
                font_family: theme.font_family.clone(),
                fill: theme.text_color,
                anchor: text.anchor,
                baseline: TextBaseline::Alphabetic,
                rotation: 0.0,
            });
        }

        RenderedFigure {
            width: layout.canvas.width,
            height: layout.canvas.height,
            primitives,
        }
    }

    /// Render a figure to an SVG string
    pub fn render_svg(&self, figure: &Figure) -> String {
        let rendered = self.render(figure);
        self.to_svg(&rendered)
    }

    /// Convert a rendered figure to an SVG string
    pub fn to_svg(&self, rendered: &RenderedFigure) -> String {
        let mut svg = format!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{}" height="{}" viewBox="0 0 {} {}">"#,
            rendered.width, rendered.height, rendered.width, rendered.height
        );
        svg.push('\n');

        for primitive in &rendered.primitives {
            svg.push_str(&self.primitive_to_svg(primitive));
            svg.push('\n');
        }

        svg.push_str("</svg>");
        svg
    }

    fn primitive_to_svg(&self, primitive: &RenderPrimitive) -> String {
        match primitive {
            RenderPrimitive::Rect {
                x,
                y,
                width,
                height,
                fill,
            } => {
                format!(
                    r#"<rect x="{}" y="{}" width="{}" height="{}" fill="{}"/>"#,
                    x, y, width, height, fill.to_css()
                )
            }
            RenderPrimitive::Line {
                x1,
                y1,
                x2,
                y2,
                stroke,
                stroke_width,
                dash,
            } => {
                let mut attrs = format!(
                    r#"<line x1="{}" y1="{}" x2="{}" y2="{}" stroke="{}" stroke-width="{}""#,
                    x1, y1, x2, y2, stroke.to_css(), stroke_width
                );
                if let Some(dash) = dash {
                    let pattern: Vec<String> = dash.iter().map(|d| d.to_string()).collect();
                    attrs.push_str(&format!(r#" stroke-dasharray="{}""#, pattern.join(",")));
                }
                attrs.push_str("/>");
                attrs
            }
            RenderPrimitive::Polyline {
                points,
                stroke,
                stroke_width,
            } => {
                let points_str: String = points
                    .iter()
                    .map(|(x, y)| format!("{},{}", x, y))
                    .collect::<Vec<_>>()
                    .join(" ");
                format!(
                    r#"<polyline points="{}" stroke="{}" stroke-width="{}" fill="none"/>"#,
                    points_str, stroke.to_css(), stroke_width
                )
            }
            RenderPrimitive::Text {
                x,
                y,
                text,
                font_size,
                font_family,
                fill,
                anchor,
                baseline,
                rotation,
            } => {
                let anchor_str = match anchor {
                    TextAnchor::Start => "start",
                    TextAnchor::Middle => "middle",
                    TextAnchor::End => "end",
                };
                let baseline_str = match baseline {
                    TextBaseline::Top => "hanging",
                    TextBaseline::Middle => "middle",
                    TextBaseline::Bottom => "text-bottom",
                    TextBaseline::Alphabetic => "alphabetic",
                };
                let transform = if *rotation != 0.0 {
                    // SVG rotates clockwise
                    format!(r#" transform="rotate({} {} {})""#, -rotation, x, y)
                } else {
                    String::new()
                };
                format!(
                    r#"<text x="{}" y="{}" font-size="{}" font-family="{}" fill="{}" text-anchor="{}" dominant-baseline="{}"{}>{}</text>"#,
                    x,
                    y,
                    font_size,
                    font_family,
                    fill.to_css(),
                    anchor_str,
                    baseline_str,
                    transform,
                    escape_xml(text)
                )
            }
        }
    }

    #[allow(clippy::too_many_arguments)]
    fn text(
        &self,
        figure: &Figure,
        layout: &FigureLayout,
        x: f64,
        y: f64,
        label: &TextLabel,
        default_size: f64,
        anchor: TextAnchor,
        baseline: TextBaseline,
        rotation: f64,
    ) -> RenderPrimitive {
        let theme = figure.theme();
        RenderPrimitive::Text {
            x,
            y,
            text: label.text.clone(),
            font_size: layout.pt(label.font_size.unwrap_or(default_size)),
            font_family: theme.font_family.clone(),
            fill: theme.text_color,
            anchor,
            baseline,
            rotation,
        }
    }

    fn render_gridlines(
        &self,
        primitives: &mut Vec<RenderPrimitive>,
        figure: &Figure,
        layout: &FigureLayout,
    ) {
        let grid = figure.theme().grid;
        let area = layout.axes_area;
        let stroke_width = layout.pt(grid.line_width);
        let dash = grid.line_style.dash_array(stroke_width);

        for &x in figure.axes().x_axis().ticks().iter().filter(|x| layout.x_in_view(**x)) {
            let px = layout.x_to_px(x);
            primitives.push(RenderPrimitive::Line {
                x1: px,
                y1: area.y,
                x2: px,
                y2: area.bottom(),
                stroke: grid.color,
                stroke_width,
                dash: dash.clone(),
            });
        }

        for &y in figure.axes().y_axis().ticks().iter().filter(|y| layout.y_in_view(**y)) {
            let py = layout.y_to_px(y);
            primitives.push(RenderPrimitive::Line {
                x1: area.x,
                y1: py,
                x2: area.right(),
                y2: py,
                stroke: grid.color,
                stroke_width,
                dash: dash.clone(),
            });
        }
    }

    fn render_series(
        &self,
        primitives: &mut Vec<RenderPrimitive>,
        figure: &Figure,
        layout: &FigureLayout,
    ) {
        let half = BAR_WIDTH / 2.0;
        for series in figure.axes().series() {
            match series {
                Series::Bar { positions, values, color } => {
                    for (&pos, &value) in positions.iter().zip(values) {
                        let (x0, x1) = (layout.x_to_px(pos - half), layout.x_to_px(pos + half));
                        let (y0, y1) = (layout.y_to_px(value), layout.y_to_px(0.0));
                        primitives.push(RenderPrimitive::Rect {
                            x: x0.min(x1),
                            y: y0.min(y1),
                            width: (x1 - x0).abs(),
                            height: (y1 - y0).abs(),
                            fill: *color,
                        });
                    }
                }
                Series::BarH { positions, values, color } => {
                    for (&pos, &value) in positions.iter().zip(values) {
                        let (x0, x1) = (layout.x_to_px(0.0), layout.x_to_px(value));
                        let (y0, y1) = (layout.y_to_px(pos + half), layout.y_to_px(pos - half));
                        primitives.push(RenderPrimitive::Rect {
                            x: x0.min(x1),
                            y: y0.min(y1),
                            width: (x1 - x0).abs(),
                            height: (y1 - y0).abs(),
                            fill: *color,
                        });
                    }
                }
                Series::Line { points, color } => {
                    if points.len() < 2 {
                        continue;
                    }
                    primitives.push(RenderPrimitive::Polyline {
                        points: points
                            .iter()
                            .map(|&(x, y)| (layout.x_to_px(x), layout.y_to_px(y)))
                            .collect(),
                        stroke: *color,
                        stroke_width: layout.pt(figure.theme().line_width),
                    });
                }
            }
        }
    }

    fn render_spines(
        &self,
        primitives: &mut Vec<RenderPrimitive>,
        figure: &Figure,
        layout: &FigureLayout,
    ) {
        let Some(color) = figure.theme().spine_color else {
            return;
        };
        let area = layout.axes_area;
        let corners = [
            (area.x, area.y, area.right(), area.y),
            (area.right(), area.y, area.right(), area.bottom()),
            (area.x, area.bottom(), area.right(), area.bottom()),
            (area.x, area.y, area.x, area.bottom()),
        ];
        for (x1, y1, x2, y2) in corners {
            primitives.push(RenderPrimitive::Line {
                x1,
                y1,
                x2,
                y2,
                stroke: color,
                stroke_width: layout.pt(1.25),
                dash: None,
            });
        }
    }

    fn visible_ticks<'a>(
        axis: &'a Axis,
        in_view: impl Fn(f64) -> bool + 'a,
    ) -> impl Iterator<Item = (f64, &'a String)> + 'a {
        // Labels pair with ticks by position; unpaired entries on either side are not drawn
        axis.ticks()
            .iter()
            .copied()
            .zip(axis.tick_labels())
            .filter(move |(t, _)| in_view(*t))
    }

    fn render_x_axis(
        &self,
        primitives: &mut Vec<RenderPrimitive>,
        figure: &Figure,
        layout: &FigureLayout,
    ) {
        let theme = figure.theme();
        let axes = figure.axes();
        let axis = axes.x_axis();
        let area = layout.axes_area;
        let tick_length = layout.pt(theme.tick_length);
        let label_y = area.bottom() + tick_length + layout.pt(TICK_PAD);

        for (tick, label) in Self::visible_ticks(axis, |t| layout.x_in_view(t)) {
            let x = layout.x_to_px(tick);
            if tick_length > 0.0 {
                primitives.push(RenderPrimitive::Line {
                    x1: x,
                    y1: area.bottom(),
                    x2: x,
                    y2: area.bottom() + tick_length,
                    stroke: theme.spine_color.unwrap_or(theme.text_color),
                    stroke_width: layout.pt(1.25),
                    dash: None,
                });
            }
            primitives.push(self.text(
                figure,
                layout,
                x,
                label_y,
                &TextLabel::new(label.clone()),
                theme.fonts.tick_label,
                TextAnchor::Middle,
                TextBaseline::Top,
                axis.tick_rotation(),
            ));
        }

        if let Some(label) = axis.label() {
            let (_, tick_height) = max_tick_label_extent(axis, theme);
            let y = label_y + layout.pt(tick_height + LABEL_PAD);
            primitives.push(self.text(
                figure,
                layout,
                area.center_x(),
                y,
                label,
                theme.fonts.axis_label,
                TextAnchor::Middle,
                TextBaseline::Top,
                0.0,
            ));
        }
    }

    fn render_y_axis(
        &self,
        primitives: &mut Vec<RenderPrimitive>,
        figure: &Figure,
        layout: &FigureLayout,
    ) {
        let theme = figure.theme();
        let axes = figure.axes();
        let axis = axes.y_axis();
        let area = layout.axes_area;
        let tick_length = layout.pt(theme.tick_length);
        let label_x = area.x - tick_length - layout.pt(TICK_PAD);

        for (tick, label) in Self::visible_ticks(axis, |t| layout.y_in_view(t)) {
            let y = layout.y_to_px(tick);
            if tick_length > 0.0 {
                primitives.push(RenderPrimitive::Line {
                    x1: area.x - tick_length,
                    y1: y,
                    x2: area.x,
                    y2: y,
                    stroke: theme.spine_color.unwrap_or(theme.text_color),
                    stroke_width: layout.pt(1.25),
                    dash: None,
                });
            }
            primitives.push(self.text(
                figure,
                layout,
                label_x,
                y,
                &TextLabel::new(label.clone()),
                theme.fonts.tick_label,
                TextAnchor::End,
                TextBaseline::Middle,
                axis.tick_rotation(),
            ));
        }

        if let Some(label) = axis.label() {
            let (tick_width, _) = max_tick_label_extent(axis, theme);
            let x = label_x - layout.pt(tick_width + LABEL_PAD);
            primitives.push(self.text(
                figure,
                layout,
                x,
                area.center_y(),
                label,
                theme.fonts.axis_label,
                TextAnchor::Middle,
                TextBaseline::Bottom,
                90.0,
            ));
        }
    }
}

fn escape_xml(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::styles::{AxesStyle, PlottingContext, Theme};

    fn bar_figure() -> Figure {
        let mut figure = Figure::new(4.0, 3.0, Theme::default()).unwrap();
        figure.axes_mut().bar(&["A", "B", "C"], &[10.0, 20.0, 30.0]);
        figure
    }

    #[test]
    fn test_render_dimensions_follow_dpi() {
        let rendered = bar_figure().render(300.0);
        assert_eq!(rendered.width, 1200.0);
        assert_eq!(rendered.height, 900.0);
    }

    #[test]
    fn test_render_to_svg() {
        let svg = FigureRenderer::new(100.0).render_svg(&bar_figure());

        assert!(svg.starts_with("<svg"));
        assert!(svg.ends_with("</svg>"));
        assert!(svg.contains("rect"));
        assert!(svg.contains(">B</text>"));
    }

    #[test]
    fn test_render_with_title_and_labels() {
        let mut figure = bar_figure();
        figure.axes_mut().set_title("Test Title");
        figure.axes_mut().set_xlabel("Crop");
        figure.axes_mut().set_ylabel("Yield");

        let rendered = figure.render(100.0);
        let texts = rendered.texts();
        assert!(texts.contains(&"Test Title"));
        assert!(texts.contains(&"Crop"));
        assert!(texts.contains(&"Yield"));
    }

    #[test]
    fn test_extra_tick_labels_are_not_drawn() {
        let mut figure = bar_figure();
        figure.axes_mut().set_xticklabels(vec!["1".into(), "2".into(), "3".into(), "4".into()]);
        let rendered = figure.render(100.0);
        assert!(rendered.texts().contains(&"3"));
        assert!(!rendered.texts().contains(&"4"));
    }

    #[test]
    fn test_missing_tick_labels_leave_ticks_bare() {
        let mut figure = bar_figure();
        figure.axes_mut().set_xticklabels(vec!["only".into()]);
        let rendered = figure.render(100.0);
        assert!(rendered.texts().contains(&"only"));
        assert!(!rendered.texts().contains(&"B"));
    }

    #[test]
    fn test_dashed_grid_in_svg() {
        let theme = Theme::default().with_grid(Color::GRAY, LineStyle::DashDot);
        let mut figure = Figure::new(4.0, 3.0, theme).unwrap();
        figure.axes_mut().plot(&[0.0, 1.0, 2.0], &[1.0, 3.0, 2.0]);
        let svg = FigureRenderer::new(100.0).render_svg(&figure);
        assert!(svg.contains("stroke-dasharray"));
        assert!(svg.contains("polyline"));
    }

    #[test]
    fn test_no_grid_for_white_style() {
        let theme = Theme::new(AxesStyle::White, PlottingContext::Notebook);
        let mut figure = Figure::new(4.0, 3.0, theme).unwrap();
        figure.axes_mut().plot(&[0.0, 1.0], &[0.0, 1.0]);
        let rendered = figure.render(100.0);
        // Only the four spines are lines
        let lines = rendered
            .primitives
            .iter()
            .filter(|p| matches!(p, RenderPrimitive::Line { .. }))
            .count();
        assert_eq!(lines, 4);
    }

    #[test]
    fn test_rotated_tick_label_in_svg() {
        let mut figure = bar_figure();
        figure.axes_mut().set_tick_rotation(crate::axes::AxisKind::X, 45.0);
        let svg = FigureRenderer::new(100.0).render_svg(&figure);
        assert!(svg.contains("rotate(-45"));
    }

    #[test]
    fn test_escape_xml() {
        assert_eq!(escape_xml("<a & 'b'>"), "&lt;a &amp; &apos;b&apos;&gt;");
    }

    #[test]
    fn test_figure_text_rendered() {
        let mut figure = bar_figure();
        figure.text(0.5, 0.001, "Subtitle", 12.0, TextAnchor::Middle);
        let rendered = figure.render(100.0);
        assert!(rendered.texts().contains(&"Subtitle"));
    }
}
