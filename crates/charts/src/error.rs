//! Error types for the charts crate

use thiserror::Error;

/// Errors that can occur when working with charts
#[derive(Error, Debug)]
pub enum ChartError {
    /// Unknown axes style name
    #[error("Invalid style: {0} (expected darkgrid, whitegrid, dark, white or ticks)")]
    InvalidStyle(String),

    /// Unknown plotting context name
    #[error("Invalid context: {0} (expected paper, notebook, talk or poster)")]
    InvalidContext(String),

    /// Unparsable color specification
    #[error("Invalid color: {0}")]
    InvalidColor(String),

    /// Unparsable line style specification
    #[error("Invalid line style: {0}")]
    InvalidLineStyle(String),

    /// Figure dimensions that are not positive and finite
    #[error("Invalid figure size: {0} x {1} inches")]
    InvalidFigureSize(f64, f64),

    /// File extension with no matching export backend
    #[error("Unsupported output format: {0}")]
    UnsupportedFormat(String),

    /// Rendering error
    #[error("Rendering error: {0}")]
    Render(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for chart operations
pub type ChartResult<T> = Result<T, ChartError>;
