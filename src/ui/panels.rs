use eframe::egui::{self, Color32, RichText, Sense, Ui, Vec2};

use tvc_viewer::color::{ColorScale, Colormap};
use tvc_viewer::data::model::Range;
use tvc_viewer::data::writer;

use crate::state::AppState;

// ---------------------------------------------------------------------------
// Left side panel – display settings, statistics, colour bar
// ---------------------------------------------------------------------------

/// Render the left settings panel.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Display");
    ui.separator();

    ui.strong("Colormap");
    let current = state.config.colormap;
    egui::ComboBox::from_id_salt("colormap")
        .selected_text(current.name())
        .show_ui(ui, |ui: &mut Ui| {
            for cm in Colormap::ALL {
                if ui.selectable_label(current == cm, cm.name()).clicked() {
                    state.set_colormap(cm);
                }
            }
        });

    ui.add(egui::Slider::new(&mut state.config.marker_radius, 0.5..=10.0).text("Marker size"));
    ui.checkbox(&mut state.config.show_grid, "Grid");
    ui.separator();

    let Some(dataset) = &state.dataset else {
        ui.label("No file loaded.");
        return;
    };

    ui.strong("Columns");
    match dataset.bounds() {
        Some(bounds) => {
            egui::Grid::new("column_stats")
                .num_columns(3)
                .striped(true)
                .show(ui, |ui: &mut Ui| {
                    ui.label("");
                    ui.label("min");
                    ui.label("max");
                    ui.end_row();
                    for (name, range) in [
                        ("TIME", bounds.time),
                        ("VALUE", bounds.value),
                        ("COLOR", bounds.color),
                    ] {
                        stat_row(ui, name, range);
                    }
                });
        }
        None => {
            ui.label(format!("{} records, nothing to summarise", dataset.len()));
        }
    }

    if let Some(scale) = &state.color_scale {
        ui.separator();
        ui.strong("COLOR scale");
        color_bar(ui, scale);
    }
}

fn stat_row(ui: &mut Ui, name: &str, range: Range) {
    ui.label(name);
    ui.label(format!("{:.4}", range.min));
    ui.label(format!("{:.4}", range.max));
    ui.end_row();
}

/// Horizontal gradient strip with the scale's end values underneath.
fn color_bar(ui: &mut Ui, scale: &ColorScale) {
    const STEPS: usize = 48;

    let width = ui.available_width().max(40.0);
    let (rect, _) = ui.allocate_exact_size(Vec2::new(width, 16.0), Sense::hover());
    let painter = ui.painter_at(rect);
    let step_w = rect.width() / STEPS as f32;
    for (i, (_, color)) in scale.ticks(STEPS).into_iter().enumerate() {
        let x0 = rect.left() + i as f32 * step_w;
        let cell = egui::Rect::from_min_size(
            egui::pos2(x0, rect.top()),
            Vec2::new(step_w + 0.5, rect.height()),
        );
        painter.rect_filled(cell, 0.0, color);
    }

    ui.horizontal(|ui: &mut Ui| {
        ui.label(format!("{:.3}", scale.min));
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui: &mut Ui| {
            ui.label(format!("{:.3}", scale.max));
        });
    });
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Open…").clicked() {
                open_file_dialog(state);
                ui.close_menu();
            }
            if ui
                .add_enabled(state.source.is_some(), egui::Button::new("Reload"))
                .clicked()
            {
                state.reload();
                ui.close_menu();
            }
            if ui
                .add_enabled(state.dataset.is_some(), egui::Button::new("Export CSV…"))
                .clicked()
            {
                export_csv_dialog(state);
                ui.close_menu();
            }
            ui.separator();
            if ui.button("Save settings…").clicked() {
                save_settings_dialog(state);
                ui.close_menu();
            }
        });

        ui.separator();

        if let Some(ds) = &state.dataset {
            let name = state
                .source
                .as_ref()
                .and_then(|p| p.file_name())
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default();
            ui.label(format!("{name}  {} records", ds.len()));
        }

        if let Some(msg) = &state.status_message {
            ui.separator();
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

// ---------------------------------------------------------------------------
// File dialogs
// ---------------------------------------------------------------------------

pub fn open_file_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Open TIME/VALUE/COLOR data")
        .add_filter("Text data", &["txt", "dat"])
        .add_filter("All files", &["*"])
        .pick_file();

    if let Some(path) = file {
        state.load(&path);
    }
}

pub fn export_csv_dialog(state: &mut AppState) {
    let Some(dataset) = &state.dataset else {
        return;
    };
    let file = rfd::FileDialog::new()
        .set_title("Export as CSV")
        .add_filter("CSV", &["csv"])
        .set_file_name("data.csv")
        .save_file();

    if let Some(path) = file {
        match writer::write_csv_file(&path, dataset) {
            Ok(()) => {
                log::info!("Exported {} records to {}", dataset.len(), path.display());
                state.status_message = None;
            }
            Err(e) => {
                log::error!("Failed to export: {e:#}");
                state.status_message = Some(format!("Error: {e:#}"));
            }
        }
    }
}

/// Write the current display settings to a JSON file usable with `--config`.
pub fn save_settings_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Save settings")
        .add_filter("JSON", &["json"])
        .set_file_name("viewer.json")
        .save_file();

    if let Some(path) = file {
        state.save_settings(&path);
    }
}
