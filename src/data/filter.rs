use std::collections::BTreeSet;

use super::model::{Dataset, Tier};

// ---------------------------------------------------------------------------
// Selection – the full filter state across all four axes
// ---------------------------------------------------------------------------

/// Current filter state. Owned by the UI and handed to the pipeline by
/// reference on every change.
///
/// An empty set on any of the three set axes means "nothing selected" and
/// yields an empty result, not "show all". `period_range` crops only the
/// displayed axis window; it never excludes records from the counts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    pub categories: BTreeSet<String>,
    pub entities: BTreeSet<String>,
    pub tiers: BTreeSet<Tier>,
    pub period_range: (i32, i32),
}

impl Selection {
    /// Initial control state: every tier checked, no categories or entities
    /// picked yet, the full period range visible.
    pub fn initial(dataset: &Dataset) -> Self {
        Selection {
            categories: BTreeSet::new(),
            entities: BTreeSet::new(),
            tiers: Tier::ALL.into_iter().collect(),
            period_range: dataset.period_bounds(),
        }
    }

    /// The "all cleared" state produced by the clear-all action.
    pub fn cleared(dataset: &Dataset) -> Self {
        Selection {
            categories: BTreeSet::new(),
            entities: BTreeSet::new(),
            tiers: BTreeSet::new(),
            period_range: dataset.period_bounds(),
        }
    }
}

// ---------------------------------------------------------------------------
// Filtering
// ---------------------------------------------------------------------------

/// Return indices of records matching all three set axes simultaneously.
///
/// The period range is deliberately not consulted here: the range slider
/// crops the visible axis window of the charts, while the counts still
/// cover every matching year.
pub fn filter_records(dataset: &Dataset, selection: &Selection) -> Vec<usize> {
    if selection.categories.is_empty()
        || selection.entities.is_empty()
        || selection.tiers.is_empty()
    {
        return Vec::new();
    }

    dataset
        .records()
        .iter()
        .enumerate()
        .filter(|(_, r)| {
            selection.categories.contains(&r.category)
                && selection.entities.contains(&r.entity)
                && selection.tiers.contains(&r.tier)
        })
        .map(|(i, _)| i)
        .collect()
}

// ---------------------------------------------------------------------------
// Clear-all action
// ---------------------------------------------------------------------------

/// Outcome of the clear-all action. `Unchanged` tells the caller to leave
/// the current selection alone (initial render, button never pressed);
/// it is distinct from an intentionally empty selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResetOutcome {
    Unchanged,
    Cleared(Selection),
}

/// A positive trigger count clears every axis and restores the full period
/// range; a zero count means the button has never been pressed.
pub fn clear_filters(trigger_count: u32, dataset: &Dataset) -> ResetOutcome {
    if trigger_count == 0 {
        return ResetOutcome::Unchanged;
    }
    ResetOutcome::Cleared(Selection::cleared(dataset))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::Record;

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
            rec("Italy", 1994, "Fencing", Tier::Bronze),
            rec("Norway", 1994, "Fencing", Tier::Gold),
        ])
    }

    fn select(categories: &[&str], entities: &[&str], tiers: &[Tier]) -> Selection {
        Selection {
            categories: categories.iter().map(|s| s.to_string()).collect(),
            entities: entities.iter().map(|s| s.to_string()).collect(),
            tiers: tiers.iter().copied().collect(),
            period_range: (1992, 1994),
        }
    }

    #[test]
    fn any_empty_axis_selects_nothing() {
        let dataset = fixture();
        let empties = [
            select(&[], &["Norway"], &[Tier::Gold]),
            select(&["Biathlon"], &[], &[Tier::Gold]),
            select(&["Biathlon"], &["Norway"], &[]),
            select(&[], &[], &[]),
        ];
        for selection in &empties {
            assert!(filter_records(&dataset, selection).is_empty());
        }
    }

    #[test]
    fn all_three_axes_are_a_conjunction() {
        let dataset = fixture();
        let selection = select(&["Biathlon"], &["Norway"], &[Tier::Gold]);
        let indices = filter_records(&dataset, &selection);
        assert_eq!(indices.len(), 1);
        let r = &dataset.records()[indices[0]];
        assert_eq!((r.entity.as_str(), r.period), ("Norway", 1992));
    }

    #[test]
    fn period_range_does_not_restrict_matches() {
        let dataset = fixture();
        let mut selection = select(
            &["Biathlon", "Fencing"],
            &["Norway", "Italy"],
            &[Tier::Gold, Tier::Silver, Tier::Bronze],
        );
        selection.period_range = (1994, 1994);
        // All five records still match despite the narrowed window.
        assert_eq!(filter_records(&dataset, &selection).len(), 5);
    }

    #[test]
    fn clear_without_trigger_leaves_selection_alone() {
        assert_eq!(clear_filters(0, &fixture()), ResetOutcome::Unchanged);
    }

    #[test]
    fn clear_with_trigger_empties_every_axis() {
        let dataset = fixture();
        match clear_filters(1, &dataset) {
            ResetOutcome::Cleared(selection) => {
                assert!(selection.categories.is_empty());
                assert!(selection.entities.is_empty());
                assert!(selection.tiers.is_empty());
                assert_eq!(selection.period_range, dataset.period_bounds());
            }
            ResetOutcome::Unchanged => panic!("expected Cleared"),
        }
    }

    #[test]
    fn initial_selection_checks_all_tiers() {
        let dataset = fixture();
        let selection = Selection::initial(&dataset);
        assert_eq!(selection.tiers.len(), 3);
        assert!(selection.categories.is_empty());
        assert_eq!(selection.period_range, (1992, 1994));
    }
}
