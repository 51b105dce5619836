use eframe::egui::Ui;
use egui_plot::{Bar, BarChart, Legend, Line, Plot, PlotBounds, PlotPoints, Points};

use crate::chart::{EntitySeries, HistogramSpec, TimeSeriesSpec};
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Medals-over-time line chart
// ---------------------------------------------------------------------------

pub fn time_series_plot(ui: &mut Ui, state: &AppState) {
    let spec: &TimeSeriesSpec = &state.time_series;
    if spec.series.is_empty() {
        no_data_hint(ui);
        return;
    }
    if !spec.title.is_empty() {
        ui.heading(&spec.title);
    }

    let bounds = window_bounds(spec.period_window, &spec.series);

    Plot::new("medals_over_time")
        .legend(Legend::default())
        .x_axis_label("Year")
        .y_axis_label("Medal Count")
        .allow_drag(false)
        .allow_zoom(false)
        .allow_scroll(false)
        .allow_boxed_zoom(false)
        .show(ui, |plot_ui| {
            // The sliders fix the visible year window; points outside it
            // stay in the data, just off-screen.
            plot_ui.set_plot_bounds(bounds);

            for series in &spec.series {
                let color = state.color_map.color_for(&series.entity);
                let line: PlotPoints = series
                    .points
                    .iter()
                    .map(|&(period, count)| [period as f64, count as f64])
                    .collect();
                plot_ui.line(Line::new(line).name(&series.entity).color(color).width(1.5));

                let markers: PlotPoints = series
                    .points
                    .iter()
                    .map(|&(period, count)| [period as f64, count as f64])
                    .collect();
                plot_ui.points(Points::new(markers).color(color).radius(2.5));
            }
        });
}

// ---------------------------------------------------------------------------
// Per-year histogram (overlaid bars, one series per country)
// ---------------------------------------------------------------------------

pub fn histogram_plot(ui: &mut Ui, state: &AppState) {
    let spec: &HistogramSpec = &state.histogram;
    ui.heading(&spec.title);
    if spec.series.is_empty() {
        no_data_hint(ui);
        return;
    }

    let bounds = window_bounds(spec.period_window, &spec.series);

    Plot::new("medal_histogram")
        .legend(Legend::default())
        .x_axis_label("Year")
        .y_axis_label("Medal Count")
        .allow_drag(false)
        .allow_zoom(false)
        .allow_scroll(false)
        .allow_boxed_zoom(false)
        .show(ui, |plot_ui| {
            plot_ui.set_plot_bounds(bounds);

            for series in &spec.series {
                let color = state.color_map.color_for(&series.entity);
                let bars: Vec<Bar> = series
                    .points
                    .iter()
                    .map(|&(period, count)| Bar::new(period as f64, count as f64).width(1.8))
                    .collect();
                plot_ui.bar_chart(
                    BarChart::new(bars)
                        .name(&series.entity)
                        .color(color.gamma_multiply(0.65)),
                );
            }
        });
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Axis bounds from the selected period window, with the y range sized to
/// the tallest point in the data.
fn window_bounds(period_window: (i32, i32), series: &[EntitySeries]) -> PlotBounds {
    let (x0, x1) = period_window;
    let y_max = series
        .iter()
        .flat_map(|s| s.points.iter().map(|&(_, count)| count))
        .max()
        .unwrap_or(1) as f64;
    PlotBounds::from_min_max(
        [x0 as f64 - 1.0, 0.0],
        [x1 as f64 + 1.0, y_max * 1.05 + 0.5],
    )
}

fn no_data_hint(ui: &mut Ui) {
    ui.centered_and_justified(|ui: &mut Ui| {
        ui.heading("No data for the current selection. Pick at least one sport, country, and medal.");
    });
}
