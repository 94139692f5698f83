use dugout_roster::Sport;
use dugout_search::{Cutoff, GameState, MaxN, SearchStats, StateEvaluator, ValueVector};
use serde::Serialize;
use tracing::{debug, info};

use crate::state::{DraftError, DraftState, Pick};

/// The pick MAX-N prefers for the drafter on the clock.
#[derive(Debug, Clone, Serialize)]
#[serde(bound = "")]
pub struct Recommendation<S: Sport> {
    pub pick: Pick<S>,
    /// Value of the draft after this pick, one entry per drafter.
    pub value: ValueVector,
    /// Every evaluated candidate pick with its value, in candidate order.
    pub alternatives: Vec<(Pick<S>, ValueVector)>,
    pub stats: SearchStats,
}

/// Searches below every candidate pick of `state` and returns the one maximizing the
/// current drafter's value (the first one on ties).
pub fn recommend_pick<S, E, C>(
    state: &DraftState<S>,
    evaluator: &mut E,
    cutoff: C,
) -> Result<Recommendation<S>, DraftError>
where
    S: Sport,
    E: StateEvaluator<DraftState<S>>,
    C: Cutoff,
{
    if state.is_terminal() {
        return Err(DraftError::DraftComplete);
    }
    let drafter = state.current_drafter();
    let info = state.info().as_ref();
    let mut search = MaxN::new(info, evaluator, cutoff);

    let mut alternatives = vec![];
    for child in state.children() {
        let value = search.search(&child, child.current_drafter());
        let Some(pick) = child.last_pick().cloned() else {
            continue;
        };
        debug!(
            player = %pick.player,
            slot = %pick.slot,
            value = value[drafter],
            "evaluated candidate pick"
        );
        alternatives.push((pick, value));
    }

    let (pick, value) = alternatives
        .iter()
        .fold(None::<&(Pick<S>, ValueVector)>, |best, candidate| match best {
            Some(best) if best.1[drafter] >= candidate.1[drafter] => Some(best),
            _ => Some(candidate),
        })
        .cloned()
        .ok_or(DraftError::NoCandidates { drafter })?;

    let stats = search.into_stats();
    info!(
        drafter,
        player = %pick.player,
        slot = %pick.slot,
        value = value[drafter],
        nodes = stats.nodes_visited,
        "recommended pick"
    );
    Ok(Recommendation {
        pick,
        value,
        alternatives,
        stats,
    })
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use dugout_roster::{
        Baseball, BaseballSlot as Slot, BaseballStat as Stat, LineupSettings, PlayerId,
        ScoringSetting, SharedPlayer, Stats, testing,
    };
    use dugout_search::{DepthLimit, NoCutoff};

    use super::*;
    use crate::{
        evaluator::{DraftEvaluatorConfig, DraftStateEvaluator},
        game_info::DraftGameInfo,
    };

    fn pool() -> Vec<SharedPlayer<Baseball>> {
        vec![
            testing::outfielder(1),
            testing::catcher(2),
            testing::outfielder(3),
            testing::catcher(4),
            testing::outfielder(5),
            testing::catcher(6),
        ]
    }

    fn evaluator() -> DraftStateEvaluator<Baseball> {
        let pool = pool();
        let projections = testing::projections(&pool, |p| {
            let runs = match p.id().value() {
                1 => 90.0,
                2 => 50.0,
                3 => 85.0,
                4 => 20.0,
                5 => 80.0,
                _ => 10.0,
            };
            Stats::from_iter([(Stat::PlateAppearances, 600.0), (Stat::Runs, runs)])
        });
        DraftStateEvaluator::new(
            projections,
            vec![ScoringSetting::new(Stat::Runs, false)],
            DraftEvaluatorConfig::default(),
        )
    }

    fn state() -> DraftState<Baseball> {
        let settings = LineupSettings::from_iter([(Slot::Catcher, 1), (Slot::Outfield, 1)]);
        let info = Arc::new(DraftGameInfo::new(
            2,
            DraftGameInfo::<Baseball>::standings_max_value(1, 2),
            settings,
        ));
        DraftState::new(info, pool()).unwrap()
    }

    #[test]
    fn test_full_search_recommends_scarce_catcher() {
        // outfielders are deep, catchers fall off a cliff after #2
        let recommendation = recommend_pick(&state(), &mut evaluator(), NoCutoff).unwrap();
        assert_eq!(recommendation.pick.player.id(), PlayerId::new(2));
        assert_eq!(recommendation.pick.slot, Slot::Catcher);
        assert_eq!(recommendation.pick.drafter, 0);
        assert_eq!(recommendation.alternatives.len(), 6);
        assert!(recommendation.stats.terminal_evaluations > 0);
    }

    #[test]
    fn test_depth_limited_search_uses_heuristic() {
        let recommendation = recommend_pick(&state(), &mut evaluator(), DepthLimit(0)).unwrap();
        assert_eq!(recommendation.stats.terminal_evaluations, 0);
        assert_eq!(recommendation.stats.heuristic_evaluations, 6);
    }

    #[test]
    fn test_complete_draft_has_no_recommendation() {
        let done = [1, 2, 3, 4]
            .into_iter()
            .fold(state(), |state, id| state.draft_player(PlayerId::new(id)).unwrap());
        assert_eq!(
            recommend_pick(&done, &mut evaluator(), NoCutoff).unwrap_err(),
            DraftError::DraftComplete
        );
    }
}
