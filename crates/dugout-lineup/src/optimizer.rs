use std::collections::HashSet;

use dugout_roster::{
    Baseball, BaseballSlot, BaseballStat, Lineup, LineupError, LineupSettings, PlayerId,
    Position as _, Projections, ScoringSetting, Stats, Transition,
};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::{
    pitching::pitching_transitions,
    search::{AssignmentStats, possible_lineups},
    selector::{above_threshold_for_stat, best_for_stat, best_lineups},
    total::LineupTotal,
};

#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum OptimizeError {
    #[display("no lineup can be built from the current roster")]
    NoCandidates,
    #[display("pitching move does not fit the chosen lineup")]
    Lineup(LineupError),
}

impl From<LineupError> for OptimizeError {
    fn from(err: LineupError) -> Self {
        Self::Lineup(err)
    }
}

fn default_volume_threshold() -> Option<f64> {
    Some(0.95)
}

fn default_primary_stat() -> BaseballStat {
    BaseballStat::PlateAppearances
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LineupOptimizerConfig {
    /// Keeps only candidates with at least this fraction of the best primary-stat value
    /// before the category selection; `None` keeps everything.
    #[serde(default = "default_volume_threshold")]
    pub volume_threshold: Option<f64>,
    /// Stat that picks the final lineup among the category survivors.
    #[serde(default = "default_primary_stat")]
    pub primary_stat: BaseballStat,
}

impl Default for LineupOptimizerConfig {
    fn default() -> Self {
        Self {
            volume_threshold: default_volume_threshold(),
            primary_stat: default_primary_stat(),
        }
    }
}

/// Outcome of one daily optimization.
#[derive(Debug, Clone, Serialize)]
pub struct LineupDecision {
    /// The chosen lineup, pitching moves included.
    pub lineup: Lineup<Baseball>,
    /// Projected hitting totals of the chosen lineup.
    pub totals: Stats<BaseballStat>,
    /// Hitting moves followed by pitching moves.
    pub transitions: Vec<Transition<Baseball>>,
    pub candidates: usize,
    pub threshold_percent: u32,
    pub search: AssignmentStats,
}

/// Daily baseball lineup optimizer.
#[derive(Debug, Clone, Default)]
pub struct LineupOptimizer {
    config: LineupOptimizerConfig,
}

impl LineupOptimizer {
    #[must_use]
    pub fn new(config: LineupOptimizerConfig) -> Self {
        Self { config }
    }

    #[must_use]
    pub fn config(&self) -> &LineupOptimizerConfig {
        &self.config
    }

    /// Chooses today's lineup.
    ///
    /// Every distinct hitting assignment is totaled from `projections`, optionally narrowed
    /// to the high-volume ones, and then narrowed to those close to the best value of every
    /// hitting category in `scoring`. The survivor with the best primary stat wins. Every
    /// must-start pitcher (`probable_starters` and relievers) is then swapped into a
    /// pitching slot.
    pub fn optimize(
        &self,
        current: &Lineup<Baseball>,
        settings: &LineupSettings<Baseball>,
        scoring: &[ScoringSetting<BaseballStat>],
        projections: &Projections<Baseball>,
        probable_starters: &HashSet<PlayerId>,
    ) -> Result<LineupDecision, OptimizeError> {
        let hitting: Vec<_> = scoring
            .iter()
            .filter(|setting| setting.stat.is_hitting())
            .copied()
            .collect();
        let primary = ScoringSetting::new(self.config.primary_stat, false);
        projections.warn_missing(
            current
                .players()
                .map(|(_, player)| player)
                .filter(|player| !player.position().is_pitcher()),
        );

        let possible = possible_lineups(current, settings, &BaseballSlot::HITTING, current);
        let mut totaled_stats: Vec<_> = hitting.clone();
        totaled_stats.push(primary);
        let totals: Vec<_> = possible
            .lineups
            .into_iter()
            .map(|lineup| LineupTotal::from_projections(lineup, projections, &totaled_stats))
            .collect();
        if totals.is_empty() {
            return Err(OptimizeError::NoCandidates);
        }

        let candidates = match self.config.volume_threshold {
            Some(threshold) => {
                let best = best_for_stat(current, &totals, &primary).value(primary.stat);
                let candidates = above_threshold_for_stat(&totals, &primary, best, threshold);
                info!(
                    candidates = candidates.len(),
                    best,
                    stat = %primary.stat,
                    "candidates within volume threshold"
                );
                candidates
            }
            None => totals.iter().collect(),
        };

        let (passing, threshold_percent) = if hitting.is_empty() {
            (candidates.clone(), 100)
        } else {
            let selection = best_lineups(current, &candidates, &hitting);
            (selection.passing, selection.threshold_percent)
        };
        let chosen = best_for_stat(current, passing.iter().copied(), &primary);

        let mut transitions = current.transitions_to(chosen.lineup());
        let pitching = pitching_transitions(current, probable_starters);
        let mut lineup = chosen.lineup().clone();
        for transition in &pitching {
            let player = transition.player();
            lineup = lineup
                .without_player(player.id())
                .with_player(transition.to(), player.clone())?;
        }
        transitions.extend(pitching);
        info!(
            transitions = transitions.len(),
            threshold_percent, "lineup chosen"
        );

        Ok(LineupDecision {
            lineup,
            totals: chosen.stats().clone(),
            transitions,
            candidates: candidates.len(),
            threshold_percent,
            search: possible.stats,
        })
    }
}
