//! Fixtures shared by the tests of the search crates.

use std::sync::Arc;

use crate::{
    Baseball, BaseballPosition, BaseballSlot, BaseballStat, LineupSettings, Player, PlayerId,
    Projections, SharedPlayer, Sport, Stats,
};

/// A player at `position` with default slots and a generated name.
#[must_use]
pub fn player<S: Sport>(id: u64, position: S::Position) -> SharedPlayer<S> {
    Arc::new(Player::with_default_slots(
        PlayerId::new(id),
        format!("{position}-{id}"),
        position,
    ))
}

#[must_use]
pub fn catcher(id: u64) -> SharedPlayer<Baseball> {
    player(id, BaseballPosition::Catcher)
}

#[must_use]
pub fn outfielder(id: u64) -> SharedPlayer<Baseball> {
    player(id, BaseballPosition::Center)
}

#[must_use]
pub fn starter(id: u64) -> SharedPlayer<Baseball> {
    player(id, BaseballPosition::Starter)
}

#[must_use]
pub fn reliever(id: u64) -> SharedPlayer<Baseball> {
    player(id, BaseballPosition::Reliever)
}

#[must_use]
pub fn injured(id: u64, position: BaseballPosition) -> SharedPlayer<Baseball> {
    Arc::new(
        Player::with_default_slots(PlayerId::new(id), format!("injured-{id}"), position)
            .with_injured(true),
    )
}

/// A hitting projection with the given plate appearances, runs and home runs.
#[must_use]
pub fn hitting_line(pa: f64, runs: f64, home_runs: f64) -> Stats<BaseballStat> {
    Stats::from_iter([
        (BaseballStat::PlateAppearances, pa),
        (BaseballStat::Runs, runs),
        (BaseballStat::HomeRuns, home_runs),
    ])
}

/// Projections for `players` built by `line`.
pub fn projections<'a, I, F>(players: I, mut line: F) -> Projections<Baseball>
where
    I: IntoIterator<Item = &'a SharedPlayer<Baseball>>,
    F: FnMut(&Player<Baseball>) -> Stats<BaseballStat>,
{
    players
        .into_iter()
        .map(|p| (p.id(), line(p)))
        .collect()
}

/// A small catcher/outfield/bench league.
#[must_use]
pub fn small_settings() -> LineupSettings<Baseball> {
    LineupSettings::from_iter([
        (BaseballSlot::Catcher, 1),
        (BaseballSlot::Outfield, 2),
        (BaseballSlot::Bench, 1),
        (BaseballSlot::Injured, 1),
    ])
}
