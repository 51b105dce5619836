use crate::data::aggregate::{build_distribution, build_time_series};
use crate::data::filter::{filter_records, Selection};
use crate::data::model::{Dataset, Tier};

// ---------------------------------------------------------------------------
// Chart specs – everything the plot views need to render
// ---------------------------------------------------------------------------

/// Fixed title of the histogram view.
pub const HISTOGRAM_TITLE: &str = "Medal Count Histogram";

/// One plotted country: `(period, count)` pairs in ascending period order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntitySeries {
    pub entity: String,
    pub points: Vec<(i32, u32)>,
}

/// Render instruction for the medals-over-time line chart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeSeriesSpec {
    /// Empty when nothing is selected on some axis ("no title").
    pub title: String,
    /// One series per entity, in dataset encounter order.
    pub series: Vec<EntitySeries>,
    /// Displayed x-axis window. Crops the view only; the series may hold
    /// points outside it.
    pub period_window: (i32, i32),
}

impl TimeSeriesSpec {
    /// Total medal count across all series.
    pub fn total_count(&self) -> u32 {
        self.series
            .iter()
            .flat_map(|s| s.points.iter().map(|&(_, c)| c))
            .sum()
    }
}

/// Render instruction for the per-year histogram.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistogramSpec {
    pub title: String,
    /// One bar series per entity, in dataset encounter order.
    pub series: Vec<EntitySeries>,
    pub period_window: (i32, i32),
}

// ---------------------------------------------------------------------------
// Title formatting
// ---------------------------------------------------------------------------

/// English list join: `A`, `A and B`, `A, B, and C` (Oxford comma).
fn join_english(items: &[&str]) -> String {
    match items {
        [] => String::new(),
        [only] => (*only).to_string(),
        [a, b] => format!("{a} and {b}"),
        [init @ .., last] => format!("{}, and {last}", init.join(", ")),
    }
}

/// Compose the time-series chart title. Either list empty means "nothing
/// selected" and yields the empty string.
pub fn format_title(tiers: &[&str], categories: &[&str]) -> String {
    if tiers.is_empty() || categories.is_empty() {
        return String::new();
    }
    format!(
        "{} Medals Over Time for {}",
        join_english(tiers),
        join_english(categories)
    )
}

// ---------------------------------------------------------------------------
// The reactive pipeline entry point
// ---------------------------------------------------------------------------

/// Filter once, aggregate for both views, attach titles and the display
/// window. Pure: same selection in, same specs out.
pub fn chart_specs(dataset: &Dataset, selection: &Selection) -> (TimeSeriesSpec, HistogramSpec) {
    let indices = filter_records(dataset, selection);
    let window = normalize_window(selection.period_range);

    // Time series: pivot (period, entity) -> count into per-entity lines.
    let counts = build_time_series(dataset, &indices);
    let mut by_entity: Vec<EntitySeries> = Vec::new();
    for ((period, entity), count) in &counts {
        match by_entity.iter_mut().find(|s| s.entity == *entity) {
            Some(series) => series.points.push((*period, *count)),
            None => by_entity.push(EntitySeries {
                entity: entity.clone(),
                points: vec![(*period, *count)],
            }),
        }
    }
    let time_series = TimeSeriesSpec {
        title: format_title(&selected_tier_names(selection), &selected_category_names(selection)),
        series: order_by_encounter(dataset, by_entity),
        period_window: window,
    };

    // Histogram: pivot period -> entity -> count into per-entity bars.
    let distribution = build_distribution(dataset, &indices);
    let mut bars: Vec<EntitySeries> = Vec::new();
    for (period, per_entity) in &distribution {
        for (entity, count) in per_entity {
            match bars.iter_mut().find(|s| s.entity == *entity) {
                Some(series) => series.points.push((*period, *count)),
                None => bars.push(EntitySeries {
                    entity: entity.clone(),
                    points: vec![(*period, *count)],
                }),
            }
        }
    }
    let histogram = HistogramSpec {
        title: HISTOGRAM_TITLE.to_string(),
        series: order_by_encounter(dataset, bars),
        period_window: window,
    };

    (time_series, histogram)
}

/// Tier names in rank order, so the title reads Gold, Silver, Bronze no
/// matter the click order.
fn selected_tier_names(selection: &Selection) -> Vec<&str> {
    Tier::ALL
        .iter()
        .filter(|t| selection.tiers.contains(t))
        .map(|t| t.as_str())
        .collect()
}

fn selected_category_names(selection: &Selection) -> Vec<&str> {
    selection.categories.iter().map(String::as_str).collect()
}

/// A window with min > max comes from slider handles crossing; swap rather
/// than fail so both chosen endpoints stay visible.
fn normalize_window((lo, hi): (i32, i32)) -> (i32, i32) {
    if lo <= hi {
        (lo, hi)
    } else {
        (hi, lo)
    }
}

/// Re-order per-entity series to dataset encounter order so colors and
/// legend rows stay stable across filter changes.
fn order_by_encounter(dataset: &Dataset, mut series: Vec<EntitySeries>) -> Vec<EntitySeries> {
    let mut ordered = Vec::with_capacity(series.len());
    for entity in dataset.entities() {
        if let Some(pos) = series.iter().position(|s| s.entity == *entity) {
            ordered.push(series.swap_remove(pos));
        }
    }
    ordered
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::{Record, Tier};
    use std::collections::BTreeSet;

    #[test]
    fn title_is_empty_when_either_list_is_empty() {
        assert_eq!(format_title(&[], &["Swimming"]), "");
        assert_eq!(format_title(&["Gold"], &[]), "");
        assert_eq!(format_title(&[], &[]), "");
    }

    #[test]
    fn title_single_items() {
        assert_eq!(
            format_title(&["Gold"], &["Swimming"]),
            "Gold Medals Over Time for Swimming"
        );
    }

    #[test]
    fn title_two_items_use_and() {
        assert_eq!(
            format_title(&["Gold", "Silver"], &["Swimming", "Diving"]),
            "Gold and Silver Medals Over Time for Swimming and Diving"
        );
    }

    #[test]
    fn title_three_items_use_oxford_comma() {
        assert_eq!(
            format_title(&["Gold", "Silver", "Bronze"], &["Swimming"]),
            "Gold, Silver, and Bronze Medals Over Time for Swimming"
        );
    }

    fn rec(entity: &str, period: i32, category: &str, tier: Tier) -> Record {
        Record {
            entity: entity.to_string(),
            period,
            category: category.to_string(),
            tier,
        }
    }

    fn fixture() -> Dataset {
        Dataset::from_records(vec![
            rec("Norway", 1992, "Biathlon", Tier::Gold),
            rec("Norway", 1994, "Biathlon", Tier::Silver),
            rec("Italy", 1992, "Fencing", Tier::Gold),
        ])
    }

    fn full_selection(dataset: &Dataset) -> Selection {
        Selection {
            categories: dataset.categories().iter().cloned().collect(),
            entities: dataset.entities().iter().cloned().collect(),
            tiers: Tier::ALL.into_iter().collect(),
            period_range: dataset.period_bounds(),
        }
    }

    #[test]
    fn specs_carry_series_title_and_window() {
        let dataset = fixture();
        let (time_series, histogram) = chart_specs(&dataset, &full_selection(&dataset));

        assert_eq!(
            time_series.title,
            "Gold, Silver, and Bronze Medals Over Time for Biathlon and Fencing"
        );
        assert_eq!(histogram.title, HISTOGRAM_TITLE);
        assert_eq!(time_series.period_window, (1992, 1994));

        // Series follow dataset encounter order: Norway is listed before
        // Italy among the 1992 rows.
        assert_eq!(time_series.series[0].entity, "Norway");
        assert_eq!(time_series.series[0].points, vec![(1992, 1), (1994, 1)]);
        assert_eq!(time_series.series[1].entity, "Italy");
        assert_eq!(time_series.series[1].points, vec![(1992, 1)]);
        assert_eq!(time_series.series, histogram.series);
        assert_eq!(time_series.total_count(), 3);
    }

    #[test]
    fn empty_axis_yields_empty_specs_and_no_title() {
        let dataset = fixture();
        let mut selection = full_selection(&dataset);
        selection.entities = BTreeSet::new();

        let (time_series, histogram) = chart_specs(&dataset, &selection);
        assert!(time_series.series.is_empty());
        assert!(histogram.series.is_empty());
        assert_eq!(time_series.title, "");
        // The histogram keeps its fixed title even with nothing to draw.
        assert_eq!(histogram.title, HISTOGRAM_TITLE);
    }

    #[test]
    fn inverted_window_is_swapped_not_an_error() {
        let dataset = fixture();
        let mut selection = full_selection(&dataset);
        selection.period_range = (1994, 1992);

        let (time_series, _) = chart_specs(&dataset, &selection);
        assert_eq!(time_series.period_window, (1992, 1994));
        // Counting is unaffected by the window.
        assert_eq!(time_series.total_count(), 3);
    }

    #[test]
    fn window_crops_display_only() {
        let dataset = fixture();
        let mut selection = full_selection(&dataset);
        selection.period_range = (1994, 1994);

        let (time_series, _) = chart_specs(&dataset, &selection);
        assert_eq!(time_series.period_window, (1994, 1994));
        // The 1992 points are still in the series data.
        assert_eq!(time_series.total_count(), 3);
    }
}
