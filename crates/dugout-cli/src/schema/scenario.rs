//! Scenario documents: already-fetched league data handed to one command.

use std::collections::HashSet;

use dugout_draft::{DraftEvaluatorConfig, DraftSport, ReplacementConfig};
use dugout_lineup::{LineupOptimizerConfig, SalaryCandidate, SalaryCapConfig};
use dugout_roster::{
    Baseball, BaseballStat, Basketball, BasketballStat, Football, Lineup, LineupSettings,
    PlayerId, Projections, ScoringSetting, SharedPlayer,
};
use serde::Deserialize;

/// A draft in progress.
#[derive(Debug, Clone, Deserialize)]
#[serde(bound = "")]
pub struct DraftScenario<S: DraftSport> {
    pub drafters: usize,
    pub settings: LineupSettings<S>,
    pub scoring: Vec<ScoringSetting<S::Stat>>,
    /// Draft pool, best player first unless `ranking` reorders it.
    pub players: Vec<SharedPlayer<S>>,
    pub projections: Projections<S>,
    /// Picks already made, in draft order.
    #[serde(default)]
    pub picks: Vec<PlayerId>,
    #[serde(default)]
    pub top_k: Option<usize>,
    #[serde(default)]
    pub evaluator: DraftEvaluatorConfig<S>,
    /// Ranks the pool by value above replacement instead of trusting its order.
    #[serde(default)]
    pub ranking: Option<ReplacementConfig<S>>,
}

/// A baseball team's day.
#[derive(Debug, Clone, Deserialize)]
pub struct LineupScenario {
    pub lineup: Lineup<Baseball>,
    pub settings: LineupSettings<Baseball>,
    pub scoring: Vec<ScoringSetting<BaseballStat>>,
    /// Hitter projections for today.
    pub projections: Projections<Baseball>,
    /// Pitchers scheduled to start today.
    #[serde(default)]
    pub probable_starters: HashSet<PlayerId>,
    #[serde(default)]
    pub optimizer: LineupOptimizerConfig,
}

/// A basketball points-league team's day.
#[derive(Debug, Clone, Deserialize)]
pub struct PointsScenario {
    pub lineup: Lineup<Basketball>,
    pub settings: LineupSettings<Basketball>,
    pub scoring: Vec<ScoringSetting<BasketballStat>>,
    pub projections: Projections<Basketball>,
}

/// A football salary-cap contest.
#[derive(Debug, Clone, Deserialize)]
pub struct SalaryCapScenario {
    pub settings: LineupSettings<Football>,
    pub candidates: Vec<SalaryCandidate<Football>>,
    pub config: SalaryCapConfig<Football>,
}
