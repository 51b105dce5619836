use std::collections::BTreeSet;

use eframe::egui::{self, RichText, ScrollArea, Ui};

use crate::color::ColorMap;
use crate::data::model::Tier;
use crate::state::{AppState, Tab};

// ---------------------------------------------------------------------------
// Top bar – tab strip and record counts
// ---------------------------------------------------------------------------

pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.strong("Podium");
        ui.separator();

        for tab in Tab::ALL {
            if ui
                .selectable_label(state.active_tab == tab, tab.label())
                .clicked()
            {
                state.active_tab = tab;
            }
        }

        ui.separator();
        ui.label(format!(
            "{} medal records, {} matching filters",
            state.dataset.len(),
            state.time_series.total_count()
        ));
    });
}

// ---------------------------------------------------------------------------
// Left side panel – filter widgets
// ---------------------------------------------------------------------------

/// Render the filter panel. Widgets mutate the selection directly; the
/// pipeline is re-run once at the end if anything changed.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Filters");
    ui.separator();

    let mut changed = false;
    let (min_period, max_period) = state.dataset.period_bounds();

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            // ---- Year range ----
            ui.strong("Years");
            let (mut from, mut to) = state.selection.period_range;
            changed |= ui
                .add(egui::Slider::new(&mut from, min_period..=max_period).text("From"))
                .changed();
            changed |= ui
                .add(egui::Slider::new(&mut to, min_period..=max_period).text("To"))
                .changed();
            state.selection.period_range = (from, to);
            ui.add_space(4.0);

            if ui.button("Clear All Filters").clicked() {
                state.clear_all();
            }
            ui.separator();

            // ---- Medal tiers ----
            ui.strong("Medals");
            ui.horizontal(|ui: &mut Ui| {
                for tier in Tier::ALL {
                    let mut checked = state.selection.tiers.contains(&tier);
                    if ui.checkbox(&mut checked, tier.as_str()).changed() {
                        if checked {
                            state.selection.tiers.insert(tier);
                        } else {
                            state.selection.tiers.remove(&tier);
                        }
                        changed = true;
                    }
                }
            });
            ui.separator();

            // ---- Sport and country checklists ----
            changed |= checklist(
                ui,
                "Sports",
                state.dataset.categories(),
                &mut state.selection.categories,
                None,
            );
            changed |= checklist(
                ui,
                "Countries",
                state.dataset.entities(),
                &mut state.selection.entities,
                Some(&state.color_map),
            );
        });

    if changed {
        state.refresh();
    }
}

/// One collapsible checklist with All/None shortcuts and a selected/total
/// count in the header. Country labels are tinted with their chart colour.
fn checklist(
    ui: &mut Ui,
    label: &str,
    options: &[String],
    selected: &mut BTreeSet<String>,
    colors: Option<&ColorMap>,
) -> bool {
    let mut changed = false;
    let header = format!("{label}  ({}/{})", selected.len(), options.len());

    egui::CollapsingHeader::new(RichText::new(header).strong())
        .id_salt(label)
        .default_open(false)
        .show(ui, |ui: &mut Ui| {
            ui.horizontal(|ui: &mut Ui| {
                if ui.small_button("All").clicked() {
                    selected.extend(options.iter().cloned());
                    changed = true;
                }
                if ui.small_button("None").clicked() {
                    selected.clear();
                    changed = true;
                }
            });

            for option in options {
                let mut checked = selected.contains(option);
                let mut text = RichText::new(option);
                if let Some(map) = colors {
                    text = text.color(map.color_for(option));
                }
                if ui.checkbox(&mut checked, text).changed() {
                    if checked {
                        selected.insert(option.clone());
                    } else {
                        selected.remove(option);
                    }
                    changed = true;
                }
            }
        });

    changed
}

// ---------------------------------------------------------------------------
// Instructions tab
// ---------------------------------------------------------------------------

pub fn instructions(ui: &mut Ui) {
    ScrollArea::vertical().show(ui, |ui: &mut Ui| {
        ui.heading("Olympic Medals Dashboard");
        ui.add_space(8.0);
        ui.label(
            "Explore Olympic medal data by selecting sports, countries, \
             medals, and years. Both charts update live as you change the \
             filters.",
        );
        ui.add_space(8.0);
        ui.strong("Instructions:");
        ui.label("• Open the Sports checklist and pick one or more sports to analyze.");
        ui.label("• Open the Countries checklist and pick the countries to include.");
        ui.label("• Use the Medals checkboxes to choose which ranks (Gold, Silver, Bronze) count.");
        ui.label("• Adjust the year sliders to focus the charts on the years of interest.");
        ui.label(
            "• The Medals Over Time tab shows a line chart of medal counts per country \
             for the selected filters.",
        );
        ui.label(
            "• The Histogram tab shows the distribution of medals per year for the same \
             selection.",
        );
        ui.add_space(8.0);
        ui.label(
            "A sport, a country, and at least one medal rank must be selected before \
             the charts show data. Clear All Filters resets every control.",
        );
    });
}
