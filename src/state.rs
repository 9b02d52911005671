use std::path::{Path, PathBuf};

use tvc_viewer::color::{ColorScale, Colormap};
use tvc_viewer::config::ViewerConfig;
use tvc_viewer::data::model::Dataset;

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
pub struct AppState {
    /// Loaded dataset (None until a file has been read).
    pub dataset: Option<Dataset>,

    /// File the dataset came from.
    pub source: Option<PathBuf>,

    pub config: ViewerConfig,

    /// Colour scale spanning the dataset's colour column.
    pub color_scale: Option<ColorScale>,

    /// Points grouped by colour bucket: `buckets[b]` holds `[time, value]`
    /// pairs whose weight falls into bucket `b`.
    pub buckets: Vec<Vec<[f64; 2]>>,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,
}

impl AppState {
    pub fn new(config: ViewerConfig) -> Self {
        Self {
            dataset: None,
            source: None,
            config,
            color_scale: None,
            buckets: Vec::new(),
            status_message: None,
        }
    }

    /// Ingest a newly read dataset and rebuild colour data.
    pub fn set_dataset(&mut self, dataset: Dataset, source: Option<PathBuf>) {
        self.dataset = Some(dataset);
        self.source = source;
        self.status_message = None;
        self.rebuild_colors();
    }

    /// Read `path` with the configured header length. On failure the
    /// previous dataset is kept and the error goes to the status line.
    pub fn load(&mut self, path: &Path) {
        match self.config.reader().read_file(path) {
            Ok(dataset) => {
                log::info!("Loaded {} records from {}", dataset.len(), path.display());
                self.set_dataset(dataset, Some(path.to_path_buf()));
            }
            Err(e) => {
                log::error!("Failed to read {}: {e}", path.display());
                self.status_message = Some(format!("Error: {e}"));
            }
        }
    }

    /// Re-read the current source file, if any.
    pub fn reload(&mut self) {
        if let Some(path) = self.source.clone() {
            self.load(&path);
        }
    }

    /// Write the current config as JSON; failures go to the status line.
    pub fn save_settings(&mut self, path: &Path) {
        match self.config.save(path) {
            Ok(()) => {
                log::info!("Saved settings to {}", path.display());
                self.status_message = None;
            }
            Err(e) => {
                log::error!("Failed to save settings: {e:#}");
                self.status_message = Some(format!("Error: {e:#}"));
            }
        }
    }

    pub fn set_colormap(&mut self, colormap: Colormap) {
        self.config.colormap = colormap;
        self.rebuild_colors();
    }

    /// Rebuild the colour scale and point buckets from the dataset.
    pub fn rebuild_colors(&mut self) {
        let Some(ds) = &self.dataset else {
            self.color_scale = None;
            self.buckets.clear();
            return;
        };

        let scale = ColorScale::from_values(self.config.colormap, ds.color());
        let bins = self.config.color_bins.max(1);
        let mut buckets = vec![Vec::new(); bins];
        for record in ds.records() {
            buckets[scale.bin_for(record.color, bins)].push([record.time, record.value]);
        }

        self.color_scale = Some(scale);
        self.buckets = buckets;
    }
}
