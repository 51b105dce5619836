use eframe::egui;

use crate::data::model::Dataset;
use crate::state::{AppState, Tab};
use crate::ui::{panels, plot};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct PodiumApp {
    pub state: AppState,
}

impl PodiumApp {
    pub fn new(dataset: Dataset) -> Self {
        Self {
            state: AppState::new(dataset),
        }
    }
}

impl eframe::App for PodiumApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: tab strip ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state);
        });

        // ---- Left side panel: filters (shared by both chart tabs) ----
        if self.state.active_tab != Tab::Instructions {
            egui::SidePanel::left("filter_panel")
                .default_width(230.0)
                .resizable(true)
                .show(ctx, |ui| {
                    panels::side_panel(ui, &mut self.state);
                });
        }

        // ---- Central panel: active tab ----
        egui::CentralPanel::default().show(ctx, |ui| match self.state.active_tab {
            Tab::Instructions => panels::instructions(ui),
            Tab::TimeSeries => plot::time_series_plot(ui, &self.state),
            Tab::Histogram => plot::histogram_plot(ui, &self.state),
        });
    }
}
