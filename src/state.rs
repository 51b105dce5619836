use crate::chart::{chart_specs, HistogramSpec, TimeSeriesSpec};
use crate::color::ColorMap;
use crate::data::filter::{clear_filters, ResetOutcome, Selection};
use crate::data::model::Dataset;

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The dashboard's tabs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Instructions,
    TimeSeries,
    Histogram,
}

impl Tab {
    pub const ALL: [Tab; 3] = [Tab::Instructions, Tab::TimeSeries, Tab::Histogram];

    pub fn label(&self) -> &'static str {
        match self {
            Tab::Instructions => "Instructions",
            Tab::TimeSeries => "Medals Over Time",
            Tab::Histogram => "Histogram",
        }
    }
}

/// The full UI state, independent of rendering. Owns the one mutable
/// `Selection`; the dataset is read-only after construction.
pub struct AppState {
    pub dataset: Dataset,
    pub selection: Selection,
    pub active_tab: Tab,

    /// Chart specs for the current selection (cached, rebuilt on change).
    pub time_series: TimeSeriesSpec,
    pub histogram: HistogramSpec,

    /// Entity colours shared by both charts.
    pub color_map: ColorMap,

    /// How many times the clear-all button has been pressed.
    reset_clicks: u32,
}

impl AppState {
    pub fn new(dataset: Dataset) -> Self {
        let selection = Selection::initial(&dataset);
        let (time_series, histogram) = chart_specs(&dataset, &selection);
        let color_map = ColorMap::new(dataset.entities());
        AppState {
            dataset,
            selection,
            active_tab: Tab::Instructions,
            time_series,
            histogram,
            color_map,
            reset_clicks: 0,
        }
    }

    /// Re-run the pipeline after a selection change.
    pub fn refresh(&mut self) {
        let (time_series, histogram) = chart_specs(&self.dataset, &self.selection);
        self.time_series = time_series;
        self.histogram = histogram;
    }

    /// Clear-all button handler.
    pub fn clear_all(&mut self) {
        self.reset_clicks += 1;
        match clear_filters(self.reset_clicks, &self.dataset) {
            ResetOutcome::Cleared(selection) => {
                self.selection = selection;
                self.refresh();
            }
            ResetOutcome::Unchanged => {}
        }
    }
}
