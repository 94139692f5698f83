use std::collections::{BTreeSet, HashSet};

use dugout_roster::{
    Baseball, BaseballPosition, BaseballSlot, Lineup, PlayerId, Position as _, SharedPlayer,
    Transition,
};
use tracing::{info, warn};

/// Pitchers that should start today: probable starters and every reliever.
///
/// Players in the injured slot or flagged injured are never must-starts.
#[must_use]
pub fn must_start_pitchers(
    lineup: &Lineup<Baseball>,
    probable_starters: &HashSet<PlayerId>,
) -> BTreeSet<SharedPlayer<Baseball>> {
    let injured: HashSet<PlayerId> = lineup.injured().map(|p| p.id()).collect();
    lineup
        .players()
        .map(|(_, player)| player)
        .filter(|p| p.can_play(BaseballSlot::Pitcher))
        .filter(|p| probable_starters.contains(&p.id()) || p.position().is_relief_pitcher())
        .filter(|p| !p.is_injured() && !injured.contains(&p.id()))
        .cloned()
        .collect()
}

/// Started starting pitchers that may give up their slot.
#[must_use]
pub fn benchable_pitchers(
    lineup: &Lineup<Baseball>,
    must_start: &BTreeSet<SharedPlayer<Baseball>>,
) -> BTreeSet<SharedPlayer<Baseball>> {
    lineup
        .starters()
        .filter(|p| p.position() == BaseballPosition::Starter && !must_start.contains(*p))
        .cloned()
        .collect()
}

/// Moves that start every must-start pitcher, each swapping places with a benchable one.
///
/// Must-starts that find no benchable partner stay where they are.
#[must_use]
pub fn pitching_transitions(
    lineup: &Lineup<Baseball>,
    probable_starters: &HashSet<PlayerId>,
) -> Vec<Transition<Baseball>> {
    let must_start = must_start_pitchers(lineup, probable_starters);
    let starters = lineup.starter_ids();
    let not_started: Vec<_> = must_start
        .iter()
        .filter(|p| !starters.contains(&p.id()))
        .collect();
    let mut benchable = benchable_pitchers(lineup, &must_start).into_iter();
    info!(
        must_start = must_start.len(),
        not_started = not_started.len(),
        "pitching must-starts"
    );

    let mut transitions = vec![];
    for pitcher in not_started {
        let Some(from) = lineup.slot_of(pitcher.id()) else {
            continue;
        };
        let Some(to_bench) = benchable.next() else {
            warn!(pitcher = %pitcher, "no benchable pitcher left to make room");
            break;
        };
        info!(start = %pitcher, bench = %to_bench, "swapping pitchers");
        transitions.push(Transition::new(pitcher.clone(), from, BaseballSlot::Pitcher));
        transitions.push(Transition::new(to_bench, BaseballSlot::Pitcher, from));
    }
    transitions
}
