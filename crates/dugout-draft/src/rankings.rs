use std::collections::BTreeMap;

use dugout_roster::{Projections, ScoringSetting, SharedPlayer, Sport, fantasy_points};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// How a pre-draft pool is ranked by value above replacement.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct ReplacementConfig<S: Sport> {
    /// Average number of players of each position one team rosters.
    pub rostered_per_team: BTreeMap<S::Position, f64>,
    pub teams: usize,
    /// Points per stat used to turn projections into a single number.
    pub scoring: Vec<ScoringSetting<S::Stat>>,
}

/// A pool entry with its projected points and value above replacement.
#[derive(Debug, Clone, Serialize)]
#[serde(bound = "")]
pub struct RankedPlayer<S: Sport> {
    pub player: SharedPlayer<S>,
    pub points: f64,
    pub value: f64,
    /// 1-based rank among players of the same position.
    pub position_rank: usize,
}

/// Rank of the player at each position that is always available on waivers: the
/// average rostered count times the number of teams, rounded up.
#[expect(
    clippy::cast_possible_truncation,
    clippy::cast_precision_loss,
    clippy::cast_sign_loss
)]
#[must_use]
pub fn replacement_level<P: Ord + Copy>(
    rostered_per_team: &BTreeMap<P, f64>,
    teams: usize,
) -> BTreeMap<P, usize> {
    rostered_per_team
        .iter()
        .map(|(&position, &count)| (position, (count * teams as f64).ceil() as usize))
        .collect()
}

/// Players grouped by default position, best projection first.
pub fn ranked_by_position<S, I>(points: I) -> BTreeMap<S::Position, Vec<(SharedPlayer<S>, f64)>>
where
    S: Sport,
    I: IntoIterator<Item = (SharedPlayer<S>, f64)>,
{
    let mut by_position: BTreeMap<S::Position, Vec<(SharedPlayer<S>, f64)>> = BTreeMap::new();
    for (player, points) in points {
        by_position
            .entry(player.position())
            .or_default()
            .push((player, points));
    }
    for ranked in by_position.values_mut() {
        ranked.sort_by(|a, b| b.1.total_cmp(&a.1));
    }
    by_position
}

/// Projected points of the replacement-level player at each position.
///
/// A level past the end of a position's pool falls back to its last player; positions
/// with a zero level or no players have no replacement value.
#[must_use]
pub fn replacement_level_points<S: Sport>(
    levels: &BTreeMap<S::Position, usize>,
    by_position: &BTreeMap<S::Position, Vec<(SharedPlayer<S>, f64)>>,
) -> BTreeMap<S::Position, f64> {
    levels
        .iter()
        .filter(|&(_, &level)| level > 0)
        .filter_map(|(&position, &level)| {
            let ranked = by_position.get(&position)?;
            let (player, points) = ranked.get(level - 1).or_else(|| ranked.last())?;
            info!(%position, level, %player, points, "replacement level");
            Some((position, *points))
        })
        .collect()
}

/// Ranks `players` by projected points above the replacement level of their position.
///
/// Players at a position without a replacement value are valued at their full points.
/// Ties keep the order of `players`.
#[must_use]
pub fn rank_by_value<S: Sport>(
    players: &[SharedPlayer<S>],
    projections: &Projections<S>,
    config: &ReplacementConfig<S>,
) -> Vec<RankedPlayer<S>> {
    let points: Vec<_> = players
        .iter()
        .map(|player| {
            let points = fantasy_points(&projections.for_player(player), &config.scoring);
            (player.clone(), points)
        })
        .collect();
    let by_position = ranked_by_position(points.iter().cloned());
    let levels = replacement_level(&config.rostered_per_team, config.teams);
    let replacement = replacement_level_points(&levels, &by_position);

    let mut ranked: Vec<_> = points
        .into_iter()
        .map(|(player, points)| {
            let position = player.position();
            let value = points - replacement.get(&position).copied().unwrap_or(0.0);
            let position_rank = by_position[&position]
                .iter()
                .position(|(p, _)| p.id() == player.id())
                .map_or(0, |index| index + 1);
            RankedPlayer {
                player,
                points,
                value,
                position_rank,
            }
        })
        .collect();
    ranked.sort_by(|a, b| b.value.total_cmp(&a.value));

    for (rank, entry) in ranked.iter().enumerate().take(20) {
        debug!(
            rank = rank + 1,
            position = %entry.player.position(),
            position_rank = entry.position_rank,
            player = %entry.player,
            value = entry.value,
            points = entry.points,
            "ranked by value"
        );
    }
    ranked
}

#[cfg(test)]
mod tests {
    use dugout_roster::{
        Football, FootballPosition as Position, FootballStat as Stat, Stats, testing,
    };

    use super::*;

    fn player(id: u64, position: Position) -> SharedPlayer<Football> {
        testing::player(id, position)
    }

    fn config(rostered: &[(Position, f64)], teams: usize) -> ReplacementConfig<Football> {
        ReplacementConfig {
            rostered_per_team: rostered.iter().copied().collect(),
            teams,
            scoring: vec![ScoringSetting::new(Stat::PassYards, false).with_points(1.0)],
        }
    }

    fn projections(points: &[(&SharedPlayer<Football>, f64)]) -> Projections<Football> {
        points
            .iter()
            .map(|(p, pts)| (p.id(), Stats::from_iter([(Stat::PassYards, *pts)])))
            .collect()
    }

    #[test]
    fn test_replacement_level_rounds_up() {
        let levels = replacement_level(
            &BTreeMap::from([(Position::Quarterback, 1.3), (Position::TightEnd, 1.0)]),
            10,
        );
        assert_eq!(levels[&Position::Quarterback], 13);
        assert_eq!(levels[&Position::TightEnd], 10);
    }

    #[test]
    fn test_ranked_by_position_sorts_each_group() {
        let (qb1, qb2, rb) = (
            player(1, Position::Quarterback),
            player(2, Position::Quarterback),
            player(3, Position::RunningBack),
        );
        let by_position = ranked_by_position([(qb1, 200.0), (rb, 150.0), (qb2, 250.0)]);
        let qbs: Vec<_> = by_position[&Position::Quarterback]
            .iter()
            .map(|(p, _)| p.id().value())
            .collect();
        assert_eq!(qbs, [2, 1]);
        assert_eq!(by_position[&Position::RunningBack].len(), 1);
    }

    #[test]
    fn test_scarce_position_outranks_deep_one() {
        // one quarterback per team, two running backs per team, two teams
        let qbs = [
            player(1, Position::Quarterback),
            player(2, Position::Quarterback),
            player(3, Position::Quarterback),
        ];
        let rbs = [
            player(4, Position::RunningBack),
            player(5, Position::RunningBack),
            player(6, Position::RunningBack),
            player(7, Position::RunningBack),
        ];
        let projections = projections(&[
            (&qbs[0], 300.0),
            (&qbs[1], 290.0),
            (&qbs[2], 285.0),
            (&rbs[0], 250.0),
            (&rbs[1], 200.0),
            (&rbs[2], 150.0),
            (&rbs[3], 100.0),
        ]);
        let pool: Vec<_> = qbs.iter().chain(&rbs).cloned().collect();
        let config = config(
            &[(Position::Quarterback, 1.0), (Position::RunningBack, 2.0)],
            2,
        );

        let ranked = rank_by_value(&pool, &projections, &config);
        let order: Vec<_> = ranked.iter().map(|r| r.player.id().value()).collect();
        // replacement: QB2 at 290 points, RB4 at 100 points
        assert_eq!(order, [4, 5, 6, 1, 2, 7, 3]);
        assert!((ranked[0].value - 150.0).abs() < 1e-9);
        assert!((ranked[3].value - 10.0).abs() < 1e-9);
        assert_eq!(ranked[3].position_rank, 1);
        assert_eq!(ranked[6].position_rank, 3);
    }

    #[test]
    fn test_level_past_pool_uses_last_player() {
        let (k1, k2) = (player(1, Position::Kicker), player(2, Position::Kicker));
        let projections = projections(&[(&k1, 120.0), (&k2, 100.0)]);
        let config = config(&[(Position::Kicker, 1.0)], 10);

        let ranked = rank_by_value(&[k2, k1], &projections, &config);
        assert_eq!(ranked[0].player.id().value(), 1);
        assert!((ranked[0].value - 20.0).abs() < 1e-9);
        assert!(ranked[1].value.abs() < 1e-9);
    }

    #[test]
    fn test_position_without_level_keeps_full_points() {
        let te = player(1, Position::TightEnd);
        let projections = projections(&[(&te, 80.0)]);
        let ranked = rank_by_value(&[te], &projections, &config(&[], 10));
        assert!((ranked[0].value - 80.0).abs() < 1e-9);
    }
}
