use dugout_roster::{Lineup, Projections, ScoringSetting, Slot as _, Sport, Stats};
use serde::Serialize;

/// A lineup paired with the stats its starters are projected to accrue.
#[derive(Debug, Clone, Serialize)]
#[serde(bound = "")]
pub struct LineupTotal<S: Sport> {
    lineup: Lineup<S>,
    stats: Stats<S::Stat>,
}

impl<S: Sport> LineupTotal<S> {
    #[must_use]
    pub fn new(lineup: Lineup<S>, stats: Stats<S::Stat>) -> Self {
        Self { lineup, stats }
    }

    /// Sums the projections of the starters of `lineup`.
    ///
    /// Pitching slots are managed on their own and contribute nothing. The derived stats of
    /// `scoring` are stored alongside the sums and everything is rounded to the stat's
    /// rounding digits.
    #[must_use]
    pub fn from_projections(
        lineup: Lineup<S>,
        projections: &Projections<S>,
        scoring: &[ScoringSetting<S::Stat>],
    ) -> Self {
        let stats = projections
            .total_for(
                lineup
                    .players()
                    .filter(|(slot, _)| slot.is_starting() && !slot.is_pitching())
                    .map(|(_, player)| player),
            )
            .materialized(scoring.iter().map(|setting| setting.stat))
            .rounded();
        Self { lineup, stats }
    }

    #[must_use]
    pub fn lineup(&self) -> &Lineup<S> {
        &self.lineup
    }

    #[must_use]
    pub fn stats(&self) -> &Stats<S::Stat> {
        &self.stats
    }

    #[must_use]
    pub fn value(&self, stat: S::Stat) -> f64 {
        self.stats.value(stat)
    }

    #[must_use]
    pub fn into_lineup(self) -> Lineup<S> {
        self.lineup
    }
}
