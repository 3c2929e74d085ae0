//! Figure display
//!
//! Displaying a finished figure is modelled as handing it to a
//! [`FigureViewer`]. Interactive frontends implement the trait; the
//! [`HeadlessViewer`] just records that the figure was shown.

use crate::error::ChartResult;
use crate::figure::Figure;

/// Receives finished figures for display
pub trait FigureViewer {
    fn show(&mut self, figure: &Figure) -> ChartResult<()>;
}

/// Viewer for environments without a display
#[derive(Debug, Default)]
pub struct HeadlessViewer {
    shown: usize,
}

impl HeadlessViewer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of figures shown so far
    pub fn shown(&self) -> usize {
        self.shown
    }
}

impl FigureViewer for HeadlessViewer {
    fn show(&mut self, figure: &Figure) -> ChartResult<()> {
        self.shown += 1;
        let (width, height) = figure.size_inches();
        tracing::info!(width, height, shown = self.shown, "figure ready (headless, not displayed)");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::styles::Theme;

    #[test]
    fn test_headless_viewer_counts() {
        let figure = Figure::new(3.0, 2.0, Theme::default()).unwrap();
        let mut viewer = HeadlessViewer::new();
        viewer.show(&figure).unwrap();
        viewer.show(&figure).unwrap();
        assert_eq!(viewer.shown(), 2);
    }
}
