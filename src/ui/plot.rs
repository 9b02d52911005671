use eframe::egui::Ui;
use egui_plot::{MarkerShape, Plot, Points};

use crate::state::AppState;

// ---------------------------------------------------------------------------
// Scatter plot (central panel)
// ---------------------------------------------------------------------------

/// Render the TIME/VALUE scatter in the central panel.
pub fn scatter_plot(ui: &mut Ui, state: &AppState) {
    let (Some(dataset), Some(scale)) = (&state.dataset, &state.color_scale) else {
        ui.centered_and_justified(|ui: &mut Ui| {
            ui.heading("Open a data file to plot it  (File → Open…)");
        });
        return;
    };

    let cfg = &state.config;
    ui.vertical_centered(|ui: &mut Ui| {
        ui.heading(cfg.title.as_str());
    });

    if dataset.is_empty() {
        ui.centered_and_justified(|ui: &mut Ui| {
            ui.label("The file has no data lines after the header.");
        });
        return;
    }

    let bins = state.buckets.len();

    Plot::new("scatter_plot")
        .x_axis_label(cfg.x_label.as_str())
        .y_axis_label(cfg.y_label.as_str())
        .show_grid(cfg.show_grid)
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(true)
        .allow_zoom(true)
        .show(ui, |plot_ui| {
            // One series per colour bucket: a series carries a single colour.
            for (bin, points) in state.buckets.iter().enumerate() {
                if points.is_empty() {
                    continue;
                }
                let series = Points::new(points.clone())
                    .color(scale.bin_color(bin, bins))
                    .shape(MarkerShape::Circle)
                    .filled(true)
                    .radius(cfg.marker_radius);
                plot_ui.points(series);
            }
        });
}
