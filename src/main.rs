mod app;
mod chart;
mod color;
mod data;
mod state;
mod ui;

use std::path::PathBuf;

use app::PodiumApp;
use eframe::egui;

/// Default dataset file, overridable with the first CLI argument.
const DEFAULT_DATASET: &str = "dataset_olympics.csv";

fn main() -> eframe::Result {
    env_logger::init();

    let path = std::env::args_os()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_DATASET));

    // The dataset is loaded exactly once; a load failure aborts startup.
    let dataset = match data::loader::load_file(&path) {
        Ok(dataset) => {
            let (min, max) = dataset.period_bounds();
            log::info!(
                "Loaded {} medal records from {} ({} countries, {} sports, {min}–{max})",
                dataset.len(),
                path.display(),
                dataset.entities().len(),
                dataset.categories().len(),
            );
            dataset
        }
        Err(e) => {
            log::error!("Failed to load dataset {}: {e:#}", path.display());
            std::process::exit(1);
        }
    };

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 800.0])
            .with_min_inner_size([600.0, 400.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Podium – Olympic Medal Dashboard",
        options,
        Box::new(move |_cc| Ok(Box::new(PodiumApp::new(dataset)))),
    )
}
