use eframe::egui::{Stroke, Ui};
use egui_plot::{Bar, BarChart, Plot};

use crate::color;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Ranking bar chart (central panel)
// ---------------------------------------------------------------------------

/// Render the top-weighted bar chart in the central panel.
pub fn ranking_plot(ui: &mut Ui, state: &AppState) {
    let table = match &state.table {
        Some(t) => t,
        None => {
            ui.centered_and_justified(|ui: &mut Ui| {
                ui.heading("Open a coverage file to view rankings  (File → Open…)");
            });
            return;
        }
    };

    if table.is_empty() {
        ui.centered_and_justified(|ui: &mut Ui| {
            ui.heading("The loaded document has no cells.");
        });
        return;
    }

    // One bar per ranked cell, left to right in rank order. Each bar wears
    // the legend color of its own score band.
    let bars: Vec<Bar> = state
        .ranked
        .iter()
        .enumerate()
        .map(|(slot, &idx)| {
            let rec = &table.records[idx];
            Bar::new(slot as f64, rec.weighted)
                .name(&rec.cell)
                .fill(color::band_color(rec.weighted))
                .stroke(Stroke::new(1.0, color::band_outline(rec.weighted)))
        })
        .collect();

    let labels: Vec<String> = state
        .ranked
        .iter()
        .map(|&idx| table.records[idx].cell.clone())
        .collect();

    Plot::new("ranking_plot")
        .x_axis_label("Cell")
        .y_axis_label("Weighted score")
        .x_axis_formatter(move |mark, _range| {
            let slot = mark.value.round();
            if slot < 0.0 || (mark.value - slot).abs() > 0.25 {
                return String::new();
            }
            labels.get(slot as usize).cloned().unwrap_or_default()
        })
        .include_y(0.0)
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(true)
        .allow_zoom(true)
        .show(ui, |plot_ui| {
            plot_ui.bar_chart(BarChart::new(bars).name("weighted"));
        });
}
