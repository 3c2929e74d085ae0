//! Chart model types
//!
//! Colors, line styles, and the data series an axes can hold.

use crate::error::{ChartError, ChartResult};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// RGBA color representation
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    /// Create a new color from RGB values (fully opaque)
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Create a new color from RGBA values
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Gray with the given lightness (0.0 = black, 1.0 = white)
    pub fn gray_level(level: f64) -> Self {
        let v = (level.clamp(0.0, 1.0) * 255.0).round() as u8;
        Self::rgb(v, v, v)
    }

    /// Create a color from a hex string (e.g., "#FF0000" or "FF0000")
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.trim_start_matches('#');
        if !hex.is_ascii() {
            return None;
        }
        if hex.len() == 6 {
            let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
            let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
            let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
            Some(Self::rgb(r, g, b))
        } else if hex.len() == 8 {
            let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
            let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
            let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
            let a = u8::from_str_radix(&hex[6..8], 16).ok()?;
            Some(Self::rgba(r, g, b, a))
        } else {
            None
        }
    }

    /// Look up a named color (matplotlib single letters and common CSS names)
    pub fn from_name(name: &str) -> Option<Self> {
        let color = match name.to_ascii_lowercase().as_str() {
            "k" | "black" => Self::BLACK,
            "w" | "white" => Self::WHITE,
            "r" => Self::rgb(255, 0, 0),
            "red" => Self::RED,
            "g" => Self::rgb(0, 128, 0),
            "green" => Self::rgb(0, 128, 0),
            "lime" => Self::GREEN,
            "b" | "blue" => Self::BLUE,
            "c" | "cyan" => Self::CYAN,
            "m" | "magenta" => Self::MAGENTA,
            "y" | "yellow" => Self::YELLOW,
            "grey" | "gray" => Self::GRAY,
            "lightgrey" | "lightgray" => Self::rgb(211, 211, 211),
            "darkgrey" | "darkgray" => Self::rgb(169, 169, 169),
            "silver" => Self::rgb(192, 192, 192),
            "dimgrey" | "dimgray" => Self::rgb(105, 105, 105),
            "gainsboro" => Self::rgb(220, 220, 220),
            "whitesmoke" => Self::rgb(245, 245, 245),
            "orange" => Self::rgb(255, 165, 0),
            "purple" => Self::rgb(128, 0, 128),
            "brown" => Self::rgb(165, 42, 42),
            "pink" => Self::rgb(255, 192, 203),
            "olive" => Self::rgb(128, 128, 0),
            "navy" => Self::rgb(0, 0, 128),
            "teal" => Self::rgb(0, 128, 128),
            "tan" => Self::rgb(210, 180, 140),
            "gold" => Self::rgb(255, 215, 0),
            "none" | "transparent" => Self::TRANSPARENT,
            _ => return None,
        };
        Some(color)
    }

    /// Convert to CSS color string
    pub fn to_css(&self) -> String {
        if self.a == 255 {
            format!("rgb({}, {}, {})", self.r, self.g, self.b)
        } else {
            format!(
                "rgba({}, {}, {}, {:.3})",
                self.r,
                self.g,
                self.b,
                self.a as f64 / 255.0
            )
        }
    }

    // Predefined colors
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const RED: Color = Color::rgb(255, 0, 0);
    pub const GREEN: Color = Color::rgb(0, 255, 0);
    pub const BLUE: Color = Color::rgb(0, 0, 255);
    pub const YELLOW: Color = Color::rgb(255, 255, 0);
    pub const CYAN: Color = Color::rgb(0, 255, 255);
    pub const MAGENTA: Color = Color::rgb(255, 0, 255);
    pub const GRAY: Color = Color::rgb(128, 128, 128);
    pub const TRANSPARENT: Color = Color::rgba(0, 0, 0, 0);
}

impl Default for Color {
    fn default() -> Self {
        Self::BLACK
    }
}

impl FromStr for Color {
    type Err = ChartError;

    /// Accepts a color name, `#rrggbb`, `#rrggbbaa`, or a gray level such as `"0.8"`
    fn from_str(spec: &str) -> ChartResult<Self> {
        let spec = spec.trim();
        if let Some(color) = Self::from_name(spec) {
            return Ok(color);
        }
        if spec.starts_with('#') {
            return Self::from_hex(spec).ok_or_else(|| ChartError::InvalidColor(spec.to_string()));
        }
        match spec.parse::<f64>() {
            Ok(level) if (0.0..=1.0).contains(&level) => Ok(Self::gray_level(level)),
            _ => Err(ChartError::InvalidColor(spec.to_string())),
        }
    }
}

/// Default series palette ("deep")
pub const DEEP_PALETTE: [Color; 10] = [
    Color::rgb(76, 114, 176),
    Color::rgb(221, 132, 82),
    Color::rgb(85, 168, 104),
    Color::rgb(196, 78, 82),
    Color::rgb(129, 114, 179),
    Color::rgb(147, 120, 96),
    Color::rgb(218, 139, 195),
    Color::rgb(140, 140, 140),
    Color::rgb(204, 185, 116),
    Color::rgb(100, 181, 205),
];

/// Line style for gridlines and series
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum LineStyle {
    Solid,
    Dash,
    Dot,
    DashDot,
    None,
}

impl LineStyle {
    /// SVG dash pattern scaled by line width, `None` for solid lines
    pub fn dash_array(&self, line_width: f64) -> Option<Vec<f64>> {
        let pattern: &[f64] = match self {
            LineStyle::Solid | LineStyle::None => return None,
            LineStyle::Dash => &[3.7, 1.6],
            LineStyle::Dot => &[1.0, 1.65],
            LineStyle::DashDot => &[6.4, 1.6, 1.0, 1.6],
        };
        let scale = line_width.max(1.0);
        Some(pattern.iter().map(|d| d * scale).collect())
    }
}

impl FromStr for LineStyle {
    type Err = ChartError;

    fn from_str(spec: &str) -> ChartResult<Self> {
        match spec.trim() {
            "-" | "solid" => Ok(LineStyle::Solid),
            "--" | "dashed" => Ok(LineStyle::Dash),
            ":" | "dotted" => Ok(LineStyle::Dot),
            "-." | "dashdot" => Ok(LineStyle::DashDot),
            "" | " " | "None" | "none" => Ok(LineStyle::None),
            other => Err(ChartError::InvalidLineStyle(other.to_string())),
        }
    }
}

/// Plotted data held by an axes
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum Series {
    /// Vertical bars over categorical x positions
    Bar {
        positions: Vec<f64>,
        values: Vec<f64>,
        color: Color,
    },
    /// Horizontal bars over categorical y positions
    BarH {
        positions: Vec<f64>,
        values: Vec<f64>,
        color: Color,
    },
    /// Connected line through (x, y) points
    Line {
        points: Vec<(f64, f64)>,
        color: Color,
    },
}

impl Series {
    /// Data extents as ((x_min, x_max), (y_min, y_max))
    pub fn extents(&self) -> Option<((f64, f64), (f64, f64))> {
        fn span(values: impl Iterator<Item = f64>) -> Option<(f64, f64)> {
            values
                .filter(|v| v.is_finite())
                .fold(None, |acc, v| match acc {
                    None => Some((v, v)),
                    Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
                })
        }

        match self {
            Series::Bar { positions, values, .. } => {
                let x = span(positions.iter().copied())?;
                let y = span(values.iter().copied().chain(std::iter::once(0.0)))?;
                Some(((x.0 - 0.5, x.1 + 0.5), y))
            }
            Series::BarH { positions, values, .. } => {
                let y = span(positions.iter().copied())?;
                let x = span(values.iter().copied().chain(std::iter::once(0.0)))?;
                Some((x, (y.0 - 0.5, y.1 + 0.5)))
            }
            Series::Line { points, .. } => {
                let x = span(points.iter().map(|p| p.0))?;
                let y = span(points.iter().map(|p| p.1))?;
                Some((x, y))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_from_hex() {
        let color = Color::from_hex("#FF0000").unwrap();
        assert_eq!(color, Color::rgb(255, 0, 0));

        let color = Color::from_hex("00FF00").unwrap();
        assert_eq!(color, Color::rgb(0, 255, 0));

        let color = Color::from_hex("#0000FF80").unwrap();
        assert_eq!(color, Color::rgba(0, 0, 255, 128));
    }

    #[test]
    fn test_color_to_css() {
        let color = Color::rgb(255, 128, 0);
        assert_eq!(color.to_css(), "rgb(255, 128, 0)");

        let color = Color::rgba(255, 128, 0, 128);
        assert!(color.to_css().starts_with("rgba(255, 128, 0,"));
    }

    #[test]
    fn test_color_parse() {
        assert_eq!("grey".parse::<Color>().unwrap(), Color::GRAY);
        assert_eq!("#EAEAF2".parse::<Color>().unwrap(), Color::rgb(234, 234, 242));
        assert_eq!("0.8".parse::<Color>().unwrap(), Color::rgb(204, 204, 204));
        assert!("chartreuse-ish".parse::<Color>().is_err());
        assert!("1.5".parse::<Color>().is_err());
        assert!("#12".parse::<Color>().is_err());
    }

    #[test]
    fn test_line_style_parse() {
        assert_eq!("-.".parse::<LineStyle>().unwrap(), LineStyle::DashDot);
        assert_eq!("--".parse::<LineStyle>().unwrap(), LineStyle::Dash);
        assert_eq!("dotted".parse::<LineStyle>().unwrap(), LineStyle::Dot);
        assert!(matches!(
            "~~".parse::<LineStyle>(),
            Err(ChartError::InvalidLineStyle(_))
        ));
    }

    #[test]
    fn test_dash_array() {
        assert!(LineStyle::Solid.dash_array(1.0).is_none());
        assert_eq!(LineStyle::DashDot.dash_array(2.0).unwrap().len(), 4);
    }

    #[test]
    fn test_bar_extents_include_zero() {
        let series = Series::Bar {
            positions: vec![0.0, 1.0, 2.0],
            values: vec![3.0, 5.0, 4.0],
            color: Color::BLUE,
        };
        let ((x0, x1), (y0, y1)) = series.extents().unwrap();
        assert_eq!((x0, x1), (-0.5, 2.5));
        assert_eq!((y0, y1), (0.0, 5.0));
    }

    #[test]
    fn test_empty_line_has_no_extents() {
        let series = Series::Line { points: vec![], color: Color::BLACK };
        assert!(series.extents().is_none());
    }
}
