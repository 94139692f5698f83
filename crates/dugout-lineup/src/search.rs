use std::collections::{BTreeMap, BTreeSet};

use dugout_roster::{Lineup, LineupSettings, PlayerId, SharedPlayer, Slot as _, Sport};
use serde::Serialize;
use tracing::debug;

use crate::combinations::combinations;

/// Progress counters of one roster-assignment search.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AssignmentStats {
    pub nodes_expanded: usize,
    /// Nodes that reached the end of the slot list.
    pub complete_assignments: usize,
    /// Complete assignments whose starter set had already been seen.
    pub duplicates_collapsed: usize,
}

/// Distinct starter sets reachable from one lineup, each with one representative lineup.
#[derive(Debug, Clone)]
pub struct PossibleLineups<S: Sport> {
    /// Representatives in starter-set order.
    pub lineups: Vec<Lineup<S>>,
    pub stats: AssignmentStats,
}

/// Partial assignment on the search frontier.
struct Node<S: Sport> {
    lineup: Lineup<S>,
    remaining: Vec<SharedPlayer<S>>,
    /// Index of the next slot to fill.
    next_slot: usize,
}

/// Enumerates every distinct set of starters for `slots_to_fill`.
///
/// The candidate pool is the current occupants of `slots_to_fill` plus the bench.
/// Injury-flagged players stay on the bench; every slot outside the pool is carried
/// unchanged into each result. Players left over once every slot is filled go to the
/// bench. When two assignments start the same players, the one needing fewer counted
/// transitions from `baseline` is kept (the first one found on ties).
pub fn possible_lineups<S: Sport>(
    lineup: &Lineup<S>,
    settings: &LineupSettings<S>,
    slots_to_fill: &[S::Slot],
    baseline: &Lineup<S>,
) -> PossibleLineups<S> {
    let mut slots: Vec<S::Slot> = slots_to_fill
        .iter()
        .copied()
        .filter(|slot| slot.is_starting())
        .collect();
    slots.sort_unstable();
    slots.dedup();

    let bench = S::Slot::ALL.iter().copied().find(|slot| slot.is_bench());

    let mut root = lineup.clone();
    let mut pool = vec![];
    for &slot in slots.iter().chain(&bench) {
        pool.extend(root.take_slot(slot));
    }
    let (sidelined, remaining): (Vec<_>, Vec<_>) = pool.into_iter().partition(|p| p.is_injured());
    if let Some(bench) = bench {
        root.set_slot(bench, sidelined);
    }

    let mut stats = AssignmentStats::default();
    let mut seen: BTreeMap<BTreeSet<PlayerId>, (Lineup<S>, usize)> = BTreeMap::new();
    let mut frontier = vec![Node {
        lineup: root,
        remaining,
        next_slot: 0,
    }];

    while let Some(node) = frontier.pop() {
        stats.nodes_expanded += 1;

        let Some(&slot) = slots.get(node.next_slot) else {
            let Some(lineup) = bench_leftovers(node.lineup, node.remaining, bench) else {
                continue;
            };
            stats.complete_assignments += 1;
            record(&mut seen, &mut stats, lineup, baseline);
            continue;
        };

        let eligible: Vec<_> = node
            .remaining
            .iter()
            .filter(|p| p.can_play(slot))
            .cloned()
            .collect();
        let count = settings.count(slot).min(eligible.len());

        for chosen in combinations(&eligible, count) {
            let mut lineup = node.lineup.clone();
            let remaining = node
                .remaining
                .iter()
                .filter(|p| !chosen.contains(p))
                .cloned()
                .collect();
            lineup.set_slot(slot, chosen);
            frontier.push(Node {
                lineup,
                remaining,
                next_slot: node.next_slot + 1,
            });
        }
    }

    debug!(
        nodes = stats.nodes_expanded,
        complete = stats.complete_assignments,
        distinct = seen.len(),
        "roster assignment search finished"
    );
    PossibleLineups {
        lineups: seen.into_values().map(|(lineup, _)| lineup).collect(),
        stats,
    }
}

fn bench_leftovers<S: Sport>(
    mut lineup: Lineup<S>,
    leftovers: Vec<SharedPlayer<S>>,
    bench: Option<S::Slot>,
) -> Option<Lineup<S>> {
    if leftovers.is_empty() {
        return Some(lineup);
    }
    // without a bench slot, leftovers cannot be placed
    let bench = bench?;
    let mut benched = lineup.take_slot(bench);
    benched.extend(leftovers);
    lineup.set_slot(bench, benched);
    Some(lineup)
}

fn record<S: Sport>(
    seen: &mut BTreeMap<BTreeSet<PlayerId>, (Lineup<S>, usize)>,
    stats: &mut AssignmentStats,
    lineup: Lineup<S>,
    baseline: &Lineup<S>,
) {
    let transitions = baseline.transition_count(&lineup);
    match seen.get_mut(&lineup.starter_ids()) {
        Some(existing) => {
            stats.duplicates_collapsed += 1;
            if transitions < existing.1 {
                *existing = (lineup, transitions);
            }
        }
        None => {
            seen.insert(lineup.starter_ids(), (lineup, transitions));
        }
    }
}

#[cfg(test)]
mod tests {
    use dugout_roster::{Baseball, BaseballPosition, BaseballSlot as Slot, testing};

    use super::*;

    fn ids(players: &[SharedPlayer<Baseball>]) -> Vec<u64> {
        players.iter().map(|p| p.id().value()).collect()
    }

    #[test]
    fn test_every_starter_set_is_generated() {
        let lineup = Lineup::from_slots([
            (Slot::Outfield, vec![testing::outfielder(1), testing::outfielder(2)]),
            (
                Slot::Bench,
                vec![
                    testing::outfielder(3),
                    testing::outfielder(4),
                    testing::outfielder(5),
                ],
            ),
        ])
        .unwrap();
        let settings = LineupSettings::from_iter([(Slot::Outfield, 2), (Slot::Bench, 3)]);

        let result = possible_lineups(&lineup, &settings, &[Slot::Outfield], &lineup);
        assert_eq!(result.lineups.len(), 10);
        assert_eq!(result.stats.complete_assignments, 10);
        assert_eq!(result.stats.duplicates_collapsed, 0);

        let starter_sets: BTreeSet<_> = result.lineups.iter().map(Lineup::starter_ids).collect();
        assert_eq!(starter_sets.len(), 10);
        for candidate in &result.lineups {
            assert_eq!(candidate.count_in(Slot::Outfield), 2);
            assert_eq!(candidate.count_in(Slot::Bench), 3);
        }
    }

    #[test]
    fn test_duplicates_keep_fewest_transitions() {
        let a = testing::outfielder(1);
        let b = testing::outfielder(2);
        let c = testing::outfielder(3);
        let lineup = Lineup::from_slots([
            (Slot::Outfield, vec![a.clone()]),
            (Slot::Util, vec![b.clone()]),
            (Slot::Bench, vec![c]),
        ])
        .unwrap();
        let settings =
            LineupSettings::from_iter([(Slot::Outfield, 1), (Slot::Util, 1), (Slot::Bench, 1)]);

        let result = possible_lineups(&lineup, &settings, &[Slot::Util, Slot::Outfield], &lineup);
        assert_eq!(result.lineups.len(), 3);
        assert_eq!(result.stats.complete_assignments, 6);
        assert_eq!(result.stats.duplicates_collapsed, 3);

        let current = result
            .lineups
            .iter()
            .find(|l| l.starter_ids() == lineup.starter_ids())
            .unwrap();
        assert_eq!(ids(current.players_in(Slot::Outfield)), [1]);
        assert_eq!(ids(current.players_in(Slot::Util)), [2]);
        assert_eq!(lineup.transition_count(current), 0);
    }

    #[test]
    fn test_injured_never_start_and_other_slots_carry_over() {
        let hurt = testing::injured(4, BaseballPosition::Catcher);
        let on_il = testing::catcher(5);
        let pitcher = testing::starter(6);
        let lineup = Lineup::from_slots([
            (Slot::Catcher, vec![testing::catcher(1)]),
            (Slot::Pitcher, vec![pitcher.clone()]),
            (Slot::Bench, vec![testing::catcher(2), hurt.clone()]),
            (Slot::Injured, vec![on_il.clone()]),
        ])
        .unwrap();
        let settings = LineupSettings::from_iter([
            (Slot::Catcher, 1),
            (Slot::Pitcher, 1),
            (Slot::Bench, 2),
            (Slot::Injured, 1),
        ]);

        let result = possible_lineups(&lineup, &settings, &Slot::HITTING, &lineup);
        assert_eq!(result.lineups.len(), 2);
        for candidate in &result.lineups {
            assert!(!candidate.starter_ids().contains(&hurt.id()));
            assert_eq!(candidate.slot_of(hurt.id()), Some(Slot::Bench));
            assert_eq!(candidate.players_in(Slot::Injured), [on_il.clone()]);
            assert_eq!(candidate.players_in(Slot::Pitcher), [pitcher.clone()]);
        }
    }

    #[test]
    fn test_short_slot_takes_every_eligible_player() {
        let lineup = Lineup::from_slots([(Slot::Bench, vec![testing::outfielder(1)])]).unwrap();
        let settings = LineupSettings::from_iter([(Slot::Outfield, 3), (Slot::Bench, 3)]);

        let result = possible_lineups(&lineup, &settings, &[Slot::Outfield], &lineup);
        assert_eq!(result.lineups.len(), 1);
        assert_eq!(ids(result.lineups[0].players_in(Slot::Outfield)), [1]);
        assert_eq!(result.lineups[0].count_in(Slot::Bench), 0);
    }
}
