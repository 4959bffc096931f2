use eframe::egui::{self, Color32, RichText, Ui};

use crate::color;
use crate::data::export;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Left side panel – score-band legend
// ---------------------------------------------------------------------------

/// Render the legend panel: the six fixed score bands, plus dataset counts.
pub fn legend_panel(ui: &mut Ui, state: &AppState) {
    ui.heading("Legend");
    ui.label("Weighted score bands");
    ui.separator();

    for band in &color::BANDS {
        ui.horizontal(|ui: &mut Ui| {
            ui.label(RichText::new("■").color(band.color).size(16.0));
            ui.label(band.label);
        });
    }

    ui.separator();

    match &state.table {
        Some(table) => {
            ui.label(format!("{} cells loaded", table.len()));
            ui.label(format!("top {} ranked", state.ranked.len()));
        }
        None => {
            ui.label("No dataset loaded.");
        }
    }
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

            let has_table = state.table.is_some();
            if ui
                .add_enabled(has_table, egui::Button::new("Export ranking…"))
                .clicked()
            {
                export_dialog(state);
                ui.close_menu();
            }

            ui.separator();

            if ui
                .add_enabled(state.source.is_some(), egui::Button::new("Reload"))
                .clicked()
            {
                state.reload();
                ui.close_menu();
            }
        });

        ui.separator();

        if let Some(path) = &state.source {
            ui.label(path.display().to_string());
        }

        if let Some(msg) = &state.status_message {
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

// ---------------------------------------------------------------------------
// File dialogs
// ---------------------------------------------------------------------------

pub fn open_file_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Open coverage data")
        .add_filter("JSON", &["json"])
        .pick_file();

    if let Some(path) = file {
        state.load_from(&path);
    }
}

fn export_dialog(state: &mut AppState) {
    let Some(table) = &state.table else {
        return;
    };

    let file = rfd::FileDialog::new()
        .set_title("Export ranked cells")
        .set_file_name("top_cells.csv")
        .add_filter("CSV", &["csv"])
        .save_file();

    if let Some(path) = file {
        match export::write_ranked_csv(&path, table, &state.ranked) {
            Ok(()) => {
                log::info!("exported {} cells to {}", state.ranked.len(), path.display());
                state.status_message = Some(format!("Exported {}", path.display()));
            }
            Err(e) => {
                log::error!("export failed: {e:#}");
                state.status_message = Some(format!("Error: {e:#}"));
            }
        }
    }
}
