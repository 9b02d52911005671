mod app;
mod state;
mod ui;

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use eframe::egui;

use app::TvcViewerApp;
use state::AppState;
use tvc_viewer::color::Colormap;
use tvc_viewer::config::ViewerConfig;

/// File opened when none is given and it exists in the working directory.
const DEFAULT_DATA_FILE: &str = "data.txt";

#[derive(Parser)]
#[command(version, about = "Scatter plot of TIME vs VALUE coloured by COLOR")]
struct Cli {
    /// Data file: header block followed by "TIME VALUE COLOR" lines.
    file: Option<PathBuf>,

    /// JSON settings file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Number of header lines to skip.
    #[arg(long)]
    header_lines: Option<usize>,

    /// viridis, plasma, inferno or grayscale.
    #[arg(long)]
    colormap: Option<Colormap>,
}

impl Cli {
    fn viewer_config(&self) -> Result<ViewerConfig> {
        let mut config = match &self.config {
            Some(path) => ViewerConfig::load(path)?,
            None => ViewerConfig::default(),
        };
        if let Some(n) = self.header_lines {
            config.header_lines = n;
        }
        if let Some(cm) = self.colormap {
            config.colormap = cm;
        }
        Ok(config)
    }

    fn data_file(&self) -> Option<PathBuf> {
        self.file.clone().or_else(|| {
            let fallback = Path::new(DEFAULT_DATA_FILE);
            fallback.exists().then(|| fallback.to_path_buf())
        })
    }
}

fn main() -> ExitCode {
    env_logger::init();

    match run(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{e:#}");
            eprintln!("error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

/// Build the startup state. A file named up front must read cleanly
/// before any window appears.
fn initial_state(cli: &Cli) -> Result<AppState> {
    let config = cli.viewer_config()?;
    let mut state = AppState::new(config);

    if let Some(path) = cli.data_file() {
        let dataset = state
            .config
            .reader()
            .read_file(&path)
            .with_context(|| format!("loading {}", path.display()))?;
        state.set_dataset(dataset, Some(path));
    }
    Ok(state)
}

fn run(cli: Cli) -> Result<()> {
    let state = initial_state(&cli)?;

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1000.0, 700.0])
            .with_min_inner_size([600.0, 400.0]),
        ..Default::default()
    };

    eframe::run_native(
        "TVC Viewer – TIME vs VALUE",
        options,
        Box::new(|_cc| Ok(Box::new(TvcViewerApp::new(state)))),
    )
    .map_err(|e| anyhow::anyhow!("running viewer: {e}"))
}
