use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::color::Colormap;
use crate::data::reader::{Reader, HEADER_LINES};

// ---------------------------------------------------------------------------
// Viewer configuration (JSON)
// ---------------------------------------------------------------------------

/// Settings for reading and plotting. Every field is optional in the JSON
/// file; anything missing falls back to [`ViewerConfig::default`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewerConfig {
    /// Lines skipped before the data block.
    pub header_lines: usize,
    pub colormap: Colormap,
    pub marker_radius: f32,
    /// Number of colour buckets the scatter is split into.
    pub color_bins: usize,
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub show_grid: bool,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            header_lines: HEADER_LINES,
            colormap: Colormap::default(),
            marker_radius: 3.0,
            color_bins: 64,
            title: "Plot of TIME vs VALUE".to_string(),
            x_label: "TIME".to_string(),
            y_label: "VALUE".to_string(),
            show_grid: true,
        }
    }
}

impl ViewerConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        let config: ViewerConfig = serde_json::from_str(&text)
            .with_context(|| format!("parsing config {}", path.display()))?;
        log::debug!("loaded config from {}: {config:?}", path.display());
        Ok(config)
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        let text = serde_json::to_string_pretty(self).context("serializing config")?;
        std::fs::write(path, text).with_context(|| format!("writing config {}", path.display()))
    }

    pub fn reader(&self) -> Reader {
        Reader::with_header_lines(self.header_lines)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_classic_plot() {
        let cfg = ViewerConfig::default();
        assert_eq!(cfg.header_lines, 30);
        assert_eq!(cfg.colormap, Colormap::Viridis);
        assert_eq!(cfg.title, "Plot of TIME vs VALUE");
        assert_eq!(cfg.x_label, "TIME");
        assert_eq!(cfg.y_label, "VALUE");
        assert!(cfg.show_grid);
        assert_eq!(cfg.reader().header_lines(), 30);
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let cfg: ViewerConfig =
            serde_json::from_str(r#"{ "colormap": "plasma", "marker_radius": 5.0 }"#).unwrap();
        assert_eq!(cfg.colormap, Colormap::Plasma);
        assert_eq!(cfg.marker_radius, 5.0);
        assert_eq!(cfg.header_lines, 30);
        assert_eq!(cfg.color_bins, 64);
    }

    #[test]
    fn unknown_colormap_is_rejected() {
        let res: Result<ViewerConfig, _> = serde_json::from_str(r#"{ "colormap": "jet" }"#);
        assert!(res.is_err());
    }

    #[test]
    fn save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("viewer.json");
        let cfg = ViewerConfig {
            header_lines: 12,
            colormap: Colormap::Inferno,
            show_grid: false,
            ..Default::default()
        };
        cfg.save(&path).unwrap();
        assert_eq!(ViewerConfig::load(&path).unwrap(), cfg);
    }

    #[test]
    fn missing_config_file_reports_path() {
        let err = ViewerConfig::load(Path::new("/nope/viewer.json")).unwrap_err();
        assert!(format!("{err:#}").contains("/nope/viewer.json"));
    }
}
