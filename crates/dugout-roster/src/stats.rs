use std::{
    collections::BTreeMap,
    iter::Sum,
    ops::{Add, AddAssign, Mul},
};

use serde::{Deserialize, Serialize};

use crate::sport::Stat;

/// A stat line: stat → value.
///
/// Ratio stats are computed on demand from their components by [`Stats::value`].
/// Combining two lines with `+` keeps only summable stats, since a ratio of a sum
/// is not the sum of ratios.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(bound = "", transparent)]
pub struct Stats<T: Stat> {
    values: BTreeMap<T, f64>,
}

impl<T: Stat> Default for Stats<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Stat> Stats<T> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            values: BTreeMap::new(),
        }
    }

    /// Stored value of `stat`, or zero.
    #[must_use]
    pub fn get(&self, stat: T) -> f64 {
        self.values.get(&stat).copied().unwrap_or(0.0)
    }

    /// Stored value of `stat`, falling back to its derivation, or zero.
    #[must_use]
    pub fn value(&self, stat: T) -> f64 {
        self.values
            .get(&stat)
            .copied()
            .or_else(|| stat.derive(self))
            .unwrap_or(0.0)
    }

    pub fn insert(&mut self, stat: T, value: f64) {
        self.values.insert(stat, value);
    }

    #[must_use]
    pub fn contains(&self, stat: T) -> bool {
        self.values.contains_key(&stat)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (T, f64)> + '_ {
        self.values.iter().map(|(&stat, &value)| (stat, value))
    }

    /// Stores the current value of every stat in `stats`, computing derived ones.
    #[must_use]
    pub fn materialized<I>(&self, stats: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        let mut out = self.clone();
        for stat in stats {
            out.insert(stat, self.value(stat));
        }
        out
    }

    /// Rounds every stored value to its stat's rounding digits.
    #[must_use]
    pub fn rounded(&self) -> Self {
        self.values
            .iter()
            .map(|(&stat, &value)| (stat, round_to(value, stat.rounding_digits())))
            .collect()
    }
}

fn round_to(value: f64, digits: i32) -> f64 {
    let factor = 10f64.powi(digits);
    (value * factor).round() / factor
}

impl<T: Stat> FromIterator<(T, f64)> for Stats<T> {
    fn from_iter<I: IntoIterator<Item = (T, f64)>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().collect(),
        }
    }
}

impl<T: Stat> Extend<(T, f64)> for Stats<T> {
    fn extend<I: IntoIterator<Item = (T, f64)>>(&mut self, iter: I) {
        self.values.extend(iter);
    }
}

impl<T: Stat> AddAssign<&Stats<T>> for Stats<T> {
    fn add_assign(&mut self, rhs: &Stats<T>) {
        self.values.retain(|stat, _| stat.is_summable());
        for (&stat, &value) in &rhs.values {
            if stat.is_summable() {
                *self.values.entry(stat).or_insert(0.0) += value;
            }
        }
    }
}

impl<T: Stat> AddAssign for Stats<T> {
    fn add_assign(&mut self, rhs: Stats<T>) {
        *self += &rhs;
    }
}

impl<T: Stat> Add<&Stats<T>> for Stats<T> {
    type Output = Stats<T>;

    fn add(mut self, rhs: &Stats<T>) -> Stats<T> {
        self += rhs;
        self
    }
}

impl<T: Stat> Add for Stats<T> {
    type Output = Stats<T>;

    fn add(mut self, rhs: Stats<T>) -> Stats<T> {
        self += &rhs;
        self
    }
}

impl<T: Stat> Mul<f64> for &Stats<T> {
    type Output = Stats<T>;

    /// Scales summable stats; ratio stats are left as they are.
    fn mul(self, rhs: f64) -> Stats<T> {
        self.iter()
            .map(|(stat, value)| {
                if stat.is_summable() {
                    (stat, value * rhs)
                } else {
                    (stat, value)
                }
            })
            .collect()
    }
}

impl<T: Stat> Mul<f64> for Stats<T> {
    type Output = Stats<T>;

    fn mul(self, rhs: f64) -> Stats<T> {
        &self * rhs
    }
}

impl<T: Stat> Sum for Stats<T> {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::new(), |acc, stats| acc + stats)
    }
}

impl<'a, T: Stat> Sum<&'a Stats<T>> for Stats<T> {
    fn sum<I: Iterator<Item = &'a Stats<T>>>(iter: I) -> Self {
        iter.fold(Self::new(), |acc, stats| acc + stats)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sport::BaseballStat as B;

    #[test]
    fn test_add_keeps_only_summable_stats() {
        let a = Stats::from_iter([(B::Hits, 2.0), (B::AtBats, 4.0), (B::Average, 0.5)]);
        let b = Stats::from_iter([(B::Hits, 1.0), (B::HomeRuns, 1.0), (B::Average, 0.25)]);
        let total = a + b;
        assert_eq!(total.get(B::Hits), 3.0);
        assert_eq!(total.get(B::HomeRuns), 1.0);
        assert!(!total.contains(B::Average));
        assert!((total.value(B::Average) - 0.75).abs() < 1e-12);
    }

    #[test]
    fn test_sum_of_references() {
        let lines = [
            Stats::from_iter([(B::Runs, 1.0)]),
            Stats::from_iter([(B::Runs, 2.0)]),
        ];
        let total: Stats<B> = lines.iter().sum();
        assert_eq!(total.get(B::Runs), 3.0);
        let empty: Stats<B> = std::iter::empty::<Stats<B>>().sum();
        assert!(empty.is_empty());
    }

    #[test]
    fn test_scaling_leaves_ratios_alone() {
        let stats = Stats::from_iter([(B::Runs, 10.0), (B::Average, 0.3)]);
        let half = &stats * 0.5;
        assert_eq!(half.get(B::Runs), 5.0);
        assert_eq!(half.get(B::Average), 0.3);
    }

    #[test]
    fn test_stored_value_wins_over_derivation() {
        let stats = Stats::from_iter([(B::Average, 0.4), (B::Hits, 1.0), (B::AtBats, 4.0)]);
        assert_eq!(stats.value(B::Average), 0.4);
    }

    #[test]
    fn test_materialized_and_rounded() {
        let stats = Stats::from_iter([(B::Hits, 1.0), (B::AtBats, 3.0), (B::Runs, 1.004)]);
        let rounded = stats.materialized([B::Average]).rounded();
        assert_eq!(rounded.get(B::Average), 0.333);
        assert_eq!(rounded.get(B::Runs), 1.0);
    }

    #[test]
    fn test_serde_is_a_plain_map() {
        let stats = Stats::from_iter([(B::HomeRuns, 30.0)]);
        let json = serde_json::to_string(&stats).unwrap();
        assert_eq!(json, r#"{"HR":30.0}"#);
    }
}
