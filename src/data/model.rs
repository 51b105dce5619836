use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use thiserror::Error;

// ---------------------------------------------------------------------------
// Tier – award rank
// ---------------------------------------------------------------------------

/// An award rank. The source data knows exactly three.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Tier {
    Gold,
    Silver,
    Bronze,
}

impl Tier {
    /// All tiers in rank order (also the order they appear in titles).
    pub const ALL: [Tier; 3] = [Tier::Gold, Tier::Silver, Tier::Bronze];

    pub fn as_str(&self) -> &'static str {
        match self {
            Tier::Gold => "Gold",
            Tier::Silver => "Silver",
            Tier::Bronze => "Bronze",
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unrecognized medal rank '{0}'")]
pub struct ParseTierError(pub String);

impl FromStr for Tier {
    type Err = ParseTierError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Gold" => Ok(Tier::Gold),
            "Silver" => Ok(Tier::Silver),
            "Bronze" => Ok(Tier::Bronze),
            other => Err(ParseTierError(other.to_string())),
        }
    }
}

// ---------------------------------------------------------------------------
// Record – one cleaned row of the source table
// ---------------------------------------------------------------------------

/// A single medal award. Post-cleaning every field is present and `entity`
/// is a recognized country name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    /// Country name.
    pub entity: String,
    /// Year of the games.
    pub period: i32,
    /// Sport discipline.
    pub category: String,
    /// Medal rank.
    pub tier: Tier,
}

// ---------------------------------------------------------------------------
// Dataset – the complete loaded table
// ---------------------------------------------------------------------------

/// The full cleaned dataset with pre-computed option lists.
/// Built once at startup and read-only afterwards.
#[derive(Debug, Clone)]
pub struct Dataset {
    /// All records, ordered ascending by `period` (stable for ties).
    records: Vec<Record>,
    /// Sorted distinct categories.
    categories: Vec<String>,
    /// Distinct entities in first-encounter order.
    entities: Vec<String>,
    /// (min, max) over all record periods.
    period_bounds: (i32, i32),
}

impl Dataset {
    /// Sort the records by period and derive the option lists.
    pub fn from_records(mut records: Vec<Record>) -> Self {
        records.sort_by_key(|r| r.period);

        let categories: Vec<String> = records
            .iter()
            .map(|r| r.category.clone())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect();

        let mut seen: BTreeSet<&str> = BTreeSet::new();
        let mut entities: Vec<String> = Vec::new();
        for r in &records {
            if seen.insert(r.entity.as_str()) {
                entities.push(r.entity.clone());
            }
        }

        let min = records.first().map(|r| r.period).unwrap_or(0);
        let max = records.last().map(|r| r.period).unwrap_or(0);

        Dataset {
            records,
            categories,
            entities,
            period_bounds: (min, max),
        }
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    pub fn entities(&self) -> &[String] {
        &self.entities
    }

    pub fn period_bounds(&self) -> (i32, i32) {
        self.period_bounds
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the dataset is empty.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rec(entity: &str, period: i32, category: &str, tier: Tier) -> Record {
        Record {
            entity: entity.to_string(),
            period,
            category: category.to_string(),
            tier,
        }
    }

    #[test]
    fn tier_parses_the_three_ranks() {
        assert_eq!("Gold".parse::<Tier>(), Ok(Tier::Gold));
        assert_eq!("Silver".parse::<Tier>(), Ok(Tier::Silver));
        assert_eq!("Bronze".parse::<Tier>(), Ok(Tier::Bronze));
    }

    #[test]
    fn tier_rejects_other_text() {
        assert_eq!(
            "Platinum".parse::<Tier>(),
            Err(ParseTierError("Platinum".to_string()))
        );
        assert!("gold".parse::<Tier>().is_err());
        assert!("".parse::<Tier>().is_err());
    }

    #[test]
    fn from_records_sorts_by_period_stably() {
        let dataset = Dataset::from_records(vec![
            rec("Norway", 1994, "Biathlon", Tier::Gold),
            rec("Italy", 1992, "Fencing", Tier::Silver),
            rec("Norway", 1992, "Biathlon", Tier::Bronze),
        ]);
        let periods: Vec<i32> = dataset.records().iter().map(|r| r.period).collect();
        assert_eq!(periods, vec![1992, 1992, 1994]);
        // Ties keep their original relative order.
        assert_eq!(dataset.records()[0].entity, "Italy");
        assert_eq!(dataset.records()[1].entity, "Norway");
    }

    #[test]
    fn derived_option_lists() {
        let dataset = Dataset::from_records(vec![
            rec("Norway", 1994, "Biathlon", Tier::Gold),
            rec("Italy", 1992, "Fencing", Tier::Silver),
            rec("Norway", 1992, "Alpine Skiing", Tier::Bronze),
            rec("Italy", 1994, "Fencing", Tier::Gold),
        ]);
        // Categories are sorted and distinct.
        assert_eq!(
            dataset.categories(),
            &["Alpine Skiing", "Biathlon", "Fencing"]
        );
        // Entities keep first-encounter order over the period-sorted records.
        assert_eq!(dataset.entities(), &["Italy", "Norway"]);
        assert_eq!(dataset.period_bounds(), (1992, 1994));
    }

    #[test]
    fn empty_dataset_has_zero_bounds() {
        let dataset = Dataset::from_records(Vec::new());
        assert!(dataset.is_empty());
        assert_eq!(dataset.period_bounds(), (0, 0));
    }
}
