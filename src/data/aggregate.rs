use std::collections::BTreeMap;

use super::model::Dataset;

// ---------------------------------------------------------------------------
// Group-by-count aggregations over a filtered index set
// ---------------------------------------------------------------------------

/// Medal counts keyed by `(period, entity)`. Only combinations with at
/// least one matching record appear; absent combinations are not
/// zero-filled.
pub type AggregatedSeries = BTreeMap<(i32, String), u32>;

/// Per-period medal counts split by entity, for overlaid histogram bars.
pub type Distribution = BTreeMap<i32, BTreeMap<String, u32>>;

/// Count filtered records per `(period, entity)` for the time-series view.
pub fn build_time_series(dataset: &Dataset, indices: &[usize]) -> AggregatedSeries {
    let mut series = AggregatedSeries::new();
    for &i in indices {
        let r = &dataset.records()[i];
        *series.entry((r.period, r.entity.clone())).or_insert(0) += 1;
    }
    series
}

/// Bucket filtered records by period, partitioned by entity, for the
/// histogram view.
pub fn build_distribution(dataset: &Dataset, indices: &[usize]) -> Distribution {
    let mut distribution = Distribution::new();
    for &i in indices {
        let r = &dataset.records()[i];
        *distribution
            .entry(r.period)
            .or_default()
            .entry(r.entity.clone())
            .or_insert(0) += 1;
    }
    distribution
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::filter::{filter_records, Selection};
    use crate::data::model::{Record, Tier};

    fn rec(entity: &str, period: i32, category: &str, tier: Tier) -> Record {
        Record {
            entity: entity.to_string(),
            period,
            category: category.to_string(),
            tier,
        }
    }

    /// Five records across two periods and two entities.
    fn fixture() -> Dataset {
        Dataset::from_records(vec![
            rec("Norway", 1992, "Biathlon", Tier::Gold),
            rec("Norway", 1992, "Biathlon", Tier::Silver),
            rec("Norway", 1994, "Biathlon", Tier::Gold),
            rec("Italy", 1992, "Fencing", Tier::Gold),
            rec("Italy", 1994, "Fencing", Tier::Bronze),
        ])
    }

    fn select_all(dataset: &Dataset) -> Selection {
        Selection {
            categories: dataset.categories().iter().cloned().collect(),
            entities: dataset.entities().iter().cloned().collect(),
            tiers: Tier::ALL.into_iter().collect(),
            period_range: dataset.period_bounds(),
        }
    }

    #[test]
    fn time_series_counts_exactly_without_zero_fill() {
        let dataset = fixture();
        let indices = filter_records(&dataset, &select_all(&dataset));
        let series = build_time_series(&dataset, &indices);

        let expected: AggregatedSeries = [
            ((1992, "Norway".to_string()), 2),
            ((1992, "Italy".to_string()), 1),
            ((1994, "Norway".to_string()), 1),
            ((1994, "Italy".to_string()), 1),
        ]
        .into_iter()
        .collect();
        assert_eq!(series, expected);
    }

    #[test]
    fn aggregation_round_trip_preserves_record_count() {
        let dataset = fixture();
        let indices = filter_records(&dataset, &select_all(&dataset));
        let series = build_time_series(&dataset, &indices);
        let total: u32 = series.values().sum();
        assert_eq!(total as usize, indices.len());
    }

    #[test]
    fn distribution_buckets_by_period_then_entity() {
        let dataset = fixture();
        let indices = filter_records(&dataset, &select_all(&dataset));
        let distribution = build_distribution(&dataset, &indices);

        assert_eq!(distribution.len(), 2);
        assert_eq!(distribution[&1992]["Norway"], 2);
        assert_eq!(distribution[&1992]["Italy"], 1);
        assert_eq!(distribution[&1994]["Norway"], 1);
        assert_eq!(distribution[&1994]["Italy"], 1);
    }

    #[test]
    fn empty_indices_yield_empty_aggregates() {
        let dataset = fixture();
        assert!(build_time_series(&dataset, &[]).is_empty());
        assert!(build_distribution(&dataset, &[]).is_empty());
    }
}
