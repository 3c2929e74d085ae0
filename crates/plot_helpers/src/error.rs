//! Error types for the plot helpers

use charts::ChartError;
use text_engine::TextError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PlotError {
    #[error(transparent)]
    Chart(#[from] ChartError),

    #[error(transparent)]
    Text(#[from] TextError),

    #[error("Settings error: {0}")]
    Settings(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type PlotResult<T> = std::result::Result<T, PlotError>;
