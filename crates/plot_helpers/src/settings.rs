//! Plot settings persistence
//!
//! Stores default [`BeginPlotConfig`] and [`EndPlotOptions`] plus the
//! reshaper options in a JSON file, so a project can keep one house style.

use crate::error::PlotResult;
use crate::lifecycle::{BeginPlotConfig, EndPlotOptions};
use serde::{Deserialize, Serialize};
use std::path::Path;
use text_engine::{DisplayPipeline, ReshaperConfig};

/// Saved defaults for the plot helpers
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlotSettings {
    pub begin: BeginPlotConfig,
    pub end: EndPlotOptions,
    pub reshaper: ReshaperConfig,
}

impl PlotSettings {
    /// Load settings from disk.
    ///
    /// A missing file yields the defaults. A file that fails to parse is
    /// logged and also yields the defaults; read errors are returned.
    pub fn load(path: impl AsRef<Path>) -> PlotResult<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        match serde_json::from_str::<PlotSettings>(&content) {
            Ok(settings) => Ok(settings),
            Err(e) => {
                tracing::warn!(
                    "Failed to parse plot settings {}, using defaults: {}",
                    path.display(),
                    e
                );
                Ok(Self::default())
            }
        }
    }

    /// Save settings as pretty-printed JSON, creating parent directories
    pub fn save(&self, path: impl AsRef<Path>) -> PlotResult<()> {
        let path = path.as_ref();
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Text pipeline configured with the saved reshaper options
    pub fn pipeline(&self) -> DisplayPipeline {
        DisplayPipeline::new(self.reshaper.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = TempDir::new().unwrap();
        let settings = PlotSettings::load(dir.path().join("plot.json")).unwrap();
        assert_eq!(settings, PlotSettings::default());
    }

    #[test]
    fn test_save_and_load() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("plot.json");

        let mut settings = PlotSettings::default();
        settings.begin.style = "whitegrid".to_string();
        settings.begin.figsize = (12.0, 6.0);
        settings.end.save_figure = true;
        settings.end.filename = "out/yield.png".into();
        settings.reshaper.delete_harakat = false;
        settings.save(&path).unwrap();

        let loaded = PlotSettings::load(&path).unwrap();
        assert_eq!(loaded, settings);
        assert!(!loaded.pipeline().reshaper().config().delete_harakat);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("plot.json");
        std::fs::write(&path, r#"{"begin": {"context": "talk"}}"#).unwrap();

        let settings = PlotSettings::load(&path).unwrap();
        assert_eq!(settings.begin.context, "talk");
        assert_eq!(settings.begin.style, "darkgrid");
        assert_eq!(settings.end.filename, std::path::PathBuf::from("plot.jpg"));
    }

    #[test]
    fn test_corrupt_file_gives_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("plot.json");
        std::fs::write(&path, "{ not json").unwrap();

        let settings = PlotSettings::load(&path).unwrap();
        assert_eq!(settings, PlotSettings::default());
    }
}
