use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::{sport::Stat, stats::Stats};

/// One league scoring category.
///
/// Category (rotisserie) leagues use `reverse` to mark lower-is-better stats such as
/// ERA; points leagues weight every stat by `points`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct ScoringSetting<T: Stat> {
    pub stat: T,
    #[serde(default)]
    pub reverse: bool,
    #[serde(default)]
    pub points: f64,
}

impl<T: Stat> ScoringSetting<T> {
    #[must_use]
    pub fn new(stat: T, reverse: bool) -> Self {
        Self {
            stat,
            reverse,
            points: 0.0,
        }
    }

    #[must_use]
    pub fn with_points(mut self, points: f64) -> Self {
        self.points = points;
        self
    }

    /// Orders two values of this category so that the better one is greater.
    #[must_use]
    pub fn compare(&self, a: f64, b: f64) -> Ordering {
        let ord = a.total_cmp(&b);
        if self.reverse { ord.reverse() } else { ord }
    }

    /// Whether `a` is strictly better than `b` in this category.
    #[must_use]
    pub fn is_better(&self, a: f64, b: f64) -> bool {
        self.compare(a, b).is_gt()
    }
}

/// Fantasy points of one stat line: the sum of `points × value` over `scoring`.
#[must_use]
pub fn fantasy_points<T: Stat>(stats: &Stats<T>, scoring: &[ScoringSetting<T>]) -> f64 {
    scoring
        .iter()
        .map(|setting| setting.points * stats.value(setting.stat))
        .sum()
}
