mod app;
mod color;
mod data;
mod state;
mod ui;

use std::path::Path;

use app::HexcoverApp;
use data::loader;
use eframe::egui;

fn main() -> eframe::Result {
    env_logger::init();

    // The viewer starts against the fixed default document. A load failure
    // here is fatal: report and exit before any window opens.
    let data_path = Path::new(loader::DEFAULT_DATA_PATH);
    let table = match loader::load_coverage(data_path) {
        Ok(table) => table,
        Err(e) => {
            log::error!("failed to load {}: {e}", data_path.display());
            std::process::exit(1);
        }
    };

    print!("{}", table.preview(5));
    log::info!("loaded {} cells from {}", table.len(), data_path.display());
    for (column, summary) in table.summaries() {
        log::info!("{column}: {summary}");
    }

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 800.0])
            .with_min_inner_size([600.0, 400.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Hexcover – Coverage Viewer",
        options,
        Box::new(|_cc| {
            Ok(Box::new(HexcoverApp::with_table(
                table,
                data_path.to_path_buf(),
            )))
        }),
    )
}
