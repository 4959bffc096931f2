use std::path::PathBuf;

use eframe::egui;

use crate::data::model::CoverageTable;
use crate::state::AppState;
use crate::ui::{panels, plot};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct HexcoverApp {
    pub state: AppState,
}

impl HexcoverApp {
    /// Start from a table loaded before the window opened.
    pub fn with_table(table: CoverageTable, source: PathBuf) -> Self {
        let mut state = AppState::default();
        state.set_table(table, source);
        Self { state }
    }
}

impl eframe::App for HexcoverApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: menu bar ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state);
        });

        // ---- Left side panel: score-band legend ----
        egui::SidePanel::left("legend_panel")
            .default_width(200.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::legend_panel(ui, &self.state);
            });

        // ---- Central panel: ranking bar chart ----
        egui::CentralPanel::default().show(ctx, |ui| {
            plot::ranking_plot(ui, &self.state);
        });
    }
}
