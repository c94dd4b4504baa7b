//! Per-stat numeric range filters with inclusive bounds.

use rustc_hash::FxHashMap;

use crate::data::GameRecord;
use crate::stat::Stat;

/// An inclusive `[min, max]` constraint; either bound may be open.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct StatRange {
    pub min: Option<f64>,
    pub max: Option<f64>,
}
impl StatRange {
    pub fn at_least(min: f64) -> Self {
        Self {
            min: Some(min),
            max: None,
        }
    }

    pub fn at_most(max: f64) -> Self {
        Self {
            min: None,
            max: Some(max),
        }
    }

    pub fn between(min: f64, max: f64) -> Self {
        Self {
            min: Some(min),
            max: Some(max),
        }
    }

    pub fn contains(&self, value: f64) -> bool {
        self.min.map_or(true, |min| value >= min) && self.max.map_or(true, |max| value <= max)
    }

    pub fn is_unbounded(&self) -> bool {
        self.min.is_none() && self.max.is_none()
    }
}

/// The set of configured constraints; a stat with no entry is unconstrained.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RangeFilterSet {
    ranges: FxHashMap<Stat, StatRange>,
}
impl RangeFilterSet {
    /// Setting an unbounded range is equivalent to clearing the constraint.
    pub fn set(&mut self, stat: Stat, range: StatRange) {
        if range.is_unbounded() {
            self.ranges.remove(&stat);
        } else {
            self.ranges.insert(stat, range);
        }
    }

    pub fn clear(&mut self, stat: Stat) {
        self.ranges.remove(&stat);
    }

    pub fn get(&self, stat: Stat) -> Option<&StatRange> {
        self.ranges.get(&stat)
    }

    pub fn is_empty(&self) -> bool {
        self.ranges.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Stat, &StatRange)> {
        self.ranges.iter()
    }
}

impl FromIterator<(Stat, StatRange)> for RangeFilterSet {
    fn from_iter<I: IntoIterator<Item = (Stat, StatRange)>>(iter: I) -> Self {
        let mut set = RangeFilterSet::default();
        for (stat, range) in iter {
            set.set(stat, range);
        }
        set
    }
}

/// Keeps records satisfying every configured constraint. A record missing a
/// constrained stat fails that constraint.
pub fn apply(records: &[GameRecord], spec: &RangeFilterSet) -> Vec<GameRecord> {
    if spec.is_empty() {
        return records.to_vec();
    }
    records
        .iter()
        .filter(|record| {
            spec.iter().all(|(stat, range)| {
                stat.value(record).map_or(false, |value| range.contains(value))
            })
        })
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use crate::testing::{blank, scoring};

    use super::*;

    #[test]
    fn empty_spec_is_noop() {
        let records = vec![scoring(1, 20.0), scoring(2, 30.0)];
        assert_eq!(records, apply(&records, &RangeFilterSet::default()));
    }

    #[test]
    fn bounds_are_inclusive() {
        let records = vec![
            scoring(1, 19.9),
            scoring(2, 20.0),
            scoring(3, 30.0),
            scoring(4, 30.1),
        ];
        let spec: RangeFilterSet = [(Stat::Points, StatRange::between(20.0, 30.0))]
            .into_iter()
            .collect();
        assert_eq!(vec![scoring(2, 20.0), scoring(3, 30.0)], apply(&records, &spec));
    }

    #[test]
    fn open_bounds() {
        let records = vec![scoring(1, 15.0), scoring(2, 25.0)];
        let floor: RangeFilterSet = [(Stat::Points, StatRange::at_least(20.0))]
            .into_iter()
            .collect();
        assert_eq!(vec![scoring(2, 25.0)], apply(&records, &floor));

        let ceiling: RangeFilterSet = [(Stat::Points, StatRange::at_most(20.0))]
            .into_iter()
            .collect();
        assert_eq!(vec![scoring(1, 15.0)], apply(&records, &ceiling));
    }

    #[test]
    fn missing_stat_fails_the_constraint() {
        let records = vec![scoring(1, 25.0), blank(2)];
        let spec: RangeFilterSet = [(Stat::Points, StatRange::at_least(0.0))]
            .into_iter()
            .collect();
        assert_eq!(vec![scoring(1, 25.0)], apply(&records, &spec));
    }

    #[test]
    fn constraints_are_anded() {
        let mut big_minutes = scoring(1, 25.0);
        big_minutes.minutes = Some(36.0);
        let mut small_minutes = scoring(2, 28.0);
        small_minutes.minutes = Some(12.0);
        let records = vec![big_minutes.clone(), small_minutes];

        let spec: RangeFilterSet = [
            (Stat::Points, StatRange::at_least(20.0)),
            (Stat::Minutes, StatRange::at_least(30.0)),
        ]
        .into_iter()
        .collect();
        assert_eq!(vec![big_minutes], apply(&records, &spec));
    }

    #[test]
    fn unbounded_range_clears_entry() {
        let mut spec = RangeFilterSet::default();
        spec.set(Stat::Points, StatRange::at_least(10.0));
        spec.set(Stat::Points, StatRange::default());
        assert!(spec.is_empty());
    }
}
