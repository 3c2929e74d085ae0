//! Figure export
//!
//! SVG output goes through the SVG writer in [`crate::render`]. Bitmap
//! formats replay the render primitives onto a `plotters` pixel buffer and
//! encode it with `image`. Plotters draws solid strokes only, so dashed
//! gridlines come out solid in bitmaps.

use crate::error::{ChartError, ChartResult};
use crate::figure::Figure;
use crate::model::Color as ChartColor;
use crate::render::{FigureRenderer, RenderPrimitive, RenderedFigure, TextAnchor, TextBaseline};
use image::{ImageFormat, RgbImage};
use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use std::path::Path;

/// Output formats understood by [`save_figure`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Svg,
    Png,
    Jpeg,
    Bmp,
}

impl ExportFormat {
    /// Pick the format from the file extension (case-insensitive)
    pub fn from_path(path: &Path) -> ChartResult<Self> {
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase())
            .unwrap_or_default();
        match extension.as_str() {
            "svg" => Ok(ExportFormat::Svg),
            "png" => Ok(ExportFormat::Png),
            "jpg" | "jpeg" => Ok(ExportFormat::Jpeg),
            "bmp" => Ok(ExportFormat::Bmp),
            other => Err(ChartError::UnsupportedFormat(if other.is_empty() {
                path.display().to_string()
            } else {
                other.to_string()
            })),
        }
    }
}

/// Write `figure` to `path` at `dpi`
pub fn save_figure(figure: &Figure, path: &Path, dpi: f64) -> ChartResult<()> {
    let format = ExportFormat::from_path(path)?;
    let renderer = FigureRenderer::new(dpi);
    let rendered = renderer.render(figure);

    match format {
        ExportFormat::Svg => std::fs::write(path, renderer.to_svg(&rendered))?,
        ExportFormat::Png => write_bitmap(&rendered, path, ImageFormat::Png)?,
        ExportFormat::Jpeg => write_bitmap(&rendered, path, ImageFormat::Jpeg)?,
        ExportFormat::Bmp => write_bitmap(&rendered, path, ImageFormat::Bmp)?,
    }

    tracing::info!(
        path = %path.display(),
        dpi,
        width = rendered.width,
        height = rendered.height,
        "saved figure"
    );
    Ok(())
}

fn render_error(err: impl std::fmt::Display) -> ChartError {
    ChartError::Render(err.to_string())
}

fn write_bitmap(rendered: &RenderedFigure, path: &Path, format: ImageFormat) -> ChartResult<()> {
    let (width, height) = (rendered.width.round() as u32, rendered.height.round() as u32);
    if width == 0 || height == 0 {
        return Err(ChartError::Render(format!("empty canvas {}x{}", width, height)));
    }
    let mut buffer = vec![0u8; width as usize * height as usize * 3];

    {
        let root = BitMapBackend::with_buffer(&mut buffer, (width, height)).into_drawing_area();
        for primitive in &rendered.primitives {
            draw_primitive(&root, primitive)?;
        }
        root.present().map_err(render_error)?;
    }

    let image = RgbImage::from_raw(width, height, buffer)
        .ok_or_else(|| ChartError::Render("pixel buffer size mismatch".to_string()))?;
    image.save_with_format(path, format).map_err(|err| match err {
        image::ImageError::IoError(io) => ChartError::Io(io),
        other => render_error(other),
    })
}

fn rgba(color: &ChartColor) -> RGBAColor {
    RGBAColor(color.r, color.g, color.b, color.a as f64 / 255.0)
}

fn px(v: f64) -> i32 {
    v.round() as i32
}

fn draw_primitive(
    root: &DrawingArea<BitMapBackend<'_>, Shift>,
    primitive: &RenderPrimitive,
) -> ChartResult<()> {
    match primitive {
        RenderPrimitive::Rect {
            x,
            y,
            width,
            height,
            fill,
        } => {
            root.draw(&Rectangle::new(
                [(px(*x), px(*y)), (px(x + width), px(y + height))],
                rgba(fill).filled(),
            ))
            .map_err(render_error)?;
        }
        RenderPrimitive::Line {
            x1,
            y1,
            x2,
            y2,
            stroke,
            stroke_width,
            ..
        } => {
            root.draw(&PathElement::new(
                vec![(px(*x1), px(*y1)), (px(*x2), px(*y2))],
                rgba(stroke).stroke_width(stroke_width.round().max(1.0) as u32),
            ))
            .map_err(render_error)?;
        }
        RenderPrimitive::Polyline {
            points,
            stroke,
            stroke_width,
        } => {
            root.draw(&PathElement::new(
                points.iter().map(|&(x, y)| (px(x), px(y))).collect::<Vec<_>>(),
                rgba(stroke).stroke_width(stroke_width.round().max(1.0) as u32),
            ))
            .map_err(render_error)?;
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
            if text.is_empty() {
                return Ok(());
            }
            let h_pos = match anchor {
                TextAnchor::Start => HPos::Left,
                TextAnchor::Middle => HPos::Center,
                TextAnchor::End => HPos::Right,
            };
            let v_pos = match baseline {
                TextBaseline::Top => VPos::Top,
                TextBaseline::Middle => VPos::Center,
                TextBaseline::Bottom | TextBaseline::Alphabetic => VPos::Bottom,
            };
            // Plotters only rotates in quarter turns (clockwise)
            let transform = match rotation.rem_euclid(360.0).round() as i64 {
                90 => FontTransform::Rotate270,
                180 => FontTransform::Rotate180,
                270 => FontTransform::Rotate90,
                _ => FontTransform::None,
            };
            let style = (font_family.as_str(), *font_size)
                .into_font()
                .transform(transform)
                .color(&rgba(fill))
                .pos(Pos::new(h_pos, v_pos));
            root.draw(&Text::new(text.clone(), (px(*x), px(*y)), style))
                .map_err(render_error)?;
        }
    }
    Ok(())
}
