use dugout_roster::{Lineup, ScoringSetting, Sport, Stat};
use tracing::{debug, info};

use crate::total::LineupTotal;

/// Candidates that stay within one threshold of every category's best value.
#[derive(Debug, Clone)]
pub struct ThresholdSelection<'a, S: Sport> {
    /// Threshold percentage all of `passing` satisfy.
    pub threshold_percent: u32,
    /// Best achieved value of each category.
    pub best_values: Vec<(S::Stat, f64)>,
    pub passing: Vec<&'a LineupTotal<S>>,
}

/// The total that is best for `setting`, breaking ties by fewest counted transitions
/// from `current` (the earliest one on a full tie).
///
/// # Panics
///
/// Panics if `totals` is empty.
pub fn best_for_stat<'a, S, I>(
    current: &Lineup<S>,
    totals: I,
    setting: &ScoringSetting<S::Stat>,
) -> &'a LineupTotal<S>
where
    S: Sport,
    I: IntoIterator<Item = &'a LineupTotal<S>>,
{
    let mut totals = totals.into_iter();
    let first = totals.next().expect("no candidate lineups to choose from");
    let mut best = (first, current.transition_count(first.lineup()));
    for total in totals {
        let value = total.value(setting.stat);
        let best_value = best.0.value(setting.stat);
        if setting.is_better(value, best_value) {
            best = (total, current.transition_count(total.lineup()));
        } else if setting.compare(value, best_value).is_eq() {
            let transitions = current.transition_count(total.lineup());
            if transitions < best.1 {
                best = (total, transitions);
            }
        }
    }
    best.0
}

/// Whether `value` is within `threshold` (a fraction) of `best`.
///
/// Lower-is-better categories pass when `value · threshold ≤ best`.
#[must_use]
pub fn passes_threshold<T: Stat>(
    setting: &ScoringSetting<T>,
    value: f64,
    best: f64,
    threshold: f64,
) -> bool {
    if setting.reverse {
        value * threshold <= best
    } else {
        value >= best * threshold
    }
}

/// Totals whose value for `setting` passes `threshold` of `best`.
pub fn above_threshold_for_stat<'a, S, I>(
    totals: I,
    setting: &ScoringSetting<S::Stat>,
    best: f64,
    threshold: f64,
) -> Vec<&'a LineupTotal<S>>
where
    S: Sport,
    I: IntoIterator<Item = &'a LineupTotal<S>>,
{
    totals
        .into_iter()
        .filter(|total| passes_threshold(setting, total.value(setting.stat), best, threshold))
        .collect()
}

/// Lowers a threshold from 100% in 1% steps until some candidate is within the threshold
/// of the best value of every category at once.
///
/// # Panics
///
/// Panics if `candidates` is empty, or if no candidate passes even at 0%.
pub fn best_lineups<'a, S: Sport>(
    current: &Lineup<S>,
    candidates: &[&'a LineupTotal<S>],
    scoring: &[ScoringSetting<S::Stat>],
) -> ThresholdSelection<'a, S> {
    let best_values: Vec<_> = scoring
        .iter()
        .map(|setting| {
            let best = best_for_stat(current, candidates.iter().copied(), setting);
            (setting.stat, best.value(setting.stat))
        })
        .collect();

    for threshold_percent in (0..=100).rev() {
        let threshold = f64::from(threshold_percent) / 100.0;
        let passing: Vec<_> = candidates
            .iter()
            .copied()
            .filter(|total| {
                scoring.iter().zip(&best_values).all(|(setting, &(_, best))| {
                    passes_threshold(setting, total.value(setting.stat), best, threshold)
                })
            })
            .collect();
        if passing.is_empty() {
            debug!(threshold_percent, "no candidate passes every category");
            continue;
        }
        info!(
            threshold_percent,
            passing = passing.len(),
            "candidates pass every category"
        );
        return ThresholdSelection {
            threshold_percent,
            best_values,
            passing,
        };
    }
    panic!("no candidate lineup passes every category even at a 0% threshold");
}
