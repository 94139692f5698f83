use std::collections::BTreeMap;

use dugout_roster::{
    Lineup, PlayerId, Projections, ScoringSetting, Sport, Transition, fantasy_points,
};
use serde::Serialize;
use tracing::info;

/// Points within this margin of each other count as a tie.
pub const POINTS_TOLERANCE: f64 = 0.1;

/// Lineup chosen for a points league.
#[derive(Debug, Clone, Serialize)]
#[serde(bound = "")]
pub struct PointsLineup<S: Sport> {
    pub lineup: Lineup<S>,
    /// Projected points of the starters.
    pub points: f64,
    pub transitions: Vec<Transition<S>>,
    /// Projected points of every rostered player.
    pub player_points: BTreeMap<PlayerId, f64>,
}

/// Picks the candidate whose starters project the most points.
///
/// Candidates within [`POINTS_TOLERANCE`] of the best so far replace it only when they
/// need fewer counted transitions from `current`. Returns `None` when there is no
/// candidate.
pub fn best_points_lineup<S: Sport>(
    current: &Lineup<S>,
    candidates: &[Lineup<S>],
    projections: &Projections<S>,
    scoring: &[ScoringSetting<S::Stat>],
) -> Option<PointsLineup<S>> {
    projections.warn_missing(current.players().map(|(_, player)| player));
    let player_points: BTreeMap<PlayerId, f64> = current
        .players()
        .map(|(_, player)| {
            let points = fantasy_points(&projections.for_player(player), scoring);
            (player.id(), points)
        })
        .collect();
    let starter_points = |lineup: &Lineup<S>| -> f64 {
        lineup
            .starters()
            .map(|p| player_points.get(&p.id()).copied().unwrap_or(0.0))
            .sum()
    };

    let mut best: Option<(&Lineup<S>, f64, usize)> = None;
    for candidate in candidates {
        let points = starter_points(candidate);
        let transitions = current.transition_count(candidate);
        best = match best {
            Some((_, best_points, _)) if points > best_points + POINTS_TOLERANCE => {
                Some((candidate, points, transitions))
            }
            Some((_, best_points, best_transitions))
                if (points - best_points).abs() < POINTS_TOLERANCE
                    && transitions < best_transitions =>
            {
                Some((candidate, points, transitions))
            }
            Some(best) => Some(best),
            None => Some((candidate, points, transitions)),
        };
    }

    let (lineup, points, _) = best?;
    info!(points, "best points lineup");
    Some(PointsLineup {
        lineup: lineup.clone(),
        points,
        transitions: current.transitions_to(lineup),
        player_points,
    })
}

#[cfg(test)]
mod tests {
    use dugout_roster::{
        Basketball, BasketballPosition as Position, BasketballSlot as Slot,
        BasketballStat as BStat, LineupSettings, SharedPlayer, Stats, testing,
    };

    use super::*;
    use crate::search::possible_lineups;

    fn guard(id: u64) -> SharedPlayer<Basketball> {
        testing::player(id, Position::PointGuard)
    }

    fn scoring() -> Vec<ScoringSetting<BStat>> {
        vec![
            ScoringSetting::new(BStat::Points, false).with_points(1.0),
            ScoringSetting::new(BStat::Rebounds, false).with_points(1.2),
            ScoringSetting::new(BStat::Turnovers, false).with_points(-1.0),
        ]
    }

    fn projections(
        players: &[&SharedPlayer<Basketball>],
        points: &[f64],
    ) -> Projections<Basketball> {
        players
            .iter()
            .zip(points)
            .map(|(p, &pts)| (p.id(), Stats::from_iter([(BStat::Points, pts)])))
            .collect()
    }

    fn two_guards(
        starter: &SharedPlayer<Basketball>,
        benched: &SharedPlayer<Basketball>,
    ) -> Lineup<Basketball> {
        Lineup::from_slots([
            (Slot::PointGuard, vec![starter.clone()]),
            (Slot::Bench, vec![benched.clone()]),
        ])
        .unwrap()
    }

    #[test]
    fn test_prefers_most_points() {
        let (a, b) = (guard(1), guard(2));
        let current = two_guards(&a, &b);
        let settings = LineupSettings::from_iter([(Slot::PointGuard, 1), (Slot::Bench, 1)]);
        let candidates =
            possible_lineups(&current, &settings, &[Slot::PointGuard], &current).lineups;

        let best = best_points_lineup(
            &current,
            &candidates,
            &projections(&[&a, &b], &[10.0, 20.0]),
            &scoring(),
        )
        .unwrap();
        assert_eq!(best.points, 20.0);
        assert_eq!(best.lineup.players_in(Slot::PointGuard), [b.clone()]);
        assert_eq!(best.transitions.len(), 2);
        assert_eq!(best.player_points[&a.id()], 10.0);
    }

    #[test]
    fn test_near_tie_keeps_fewer_transitions() {
        let (a, b) = (guard(1), guard(2));
        let current = two_guards(&a, &b);
        let swapped = two_guards(&b, &a);

        let best = best_points_lineup(
            &current,
            &[swapped, current.clone()],
            &projections(&[&a, &b], &[20.0, 20.05]),
            &scoring(),
        )
        .unwrap();
        assert_eq!(best.lineup, current);
        assert!(best.transitions.is_empty());
    }

    #[test]
    fn test_injured_slot_moves_do_not_count_in_tie_break() {
        let (a, b, c, d, e) = (guard(1), guard(2), guard(3), guard(4), guard(5));
        let current = Lineup::from_slots([
            (Slot::PointGuard, vec![a.clone()]),
            (Slot::Bench, vec![b.clone(), d.clone()]),
            (Slot::Injured, vec![c.clone(), e.clone()]),
        ])
        .unwrap();
        let swap_starter = Lineup::from_slots([
            (Slot::PointGuard, vec![b.clone()]),
            (Slot::Bench, vec![a.clone(), d.clone()]),
            (Slot::Injured, vec![c.clone(), e.clone()]),
        ])
        .unwrap();
        let shuffle_injured = Lineup::from_slots([
            (Slot::PointGuard, vec![a.clone()]),
            (Slot::Bench, vec![c.clone(), e.clone()]),
            (Slot::Injured, vec![b.clone(), d.clone()]),
        ])
        .unwrap();

        let best = best_points_lineup(
            &current,
            &[swap_starter, shuffle_injured.clone()],
            &projections(&[&a, &b], &[20.0, 20.05]),
            &scoring(),
        )
        .unwrap();
        // four moves in and out of the injured slot, none of them counted
        assert_eq!(best.lineup, shuffle_injured);
        assert_eq!(best.transitions.len(), 4);
        assert_eq!(current.transition_count(&best.lineup), 0);
    }

    #[test]
    fn test_no_candidates() {
        let current = Lineup::<Basketball>::new();
        assert!(best_points_lineup(&current, &[], &Projections::default(), &scoring()).is_none());
    }
}
