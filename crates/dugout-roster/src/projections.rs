use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tracing::{trace, warn};

use crate::{
    player::{Player, PlayerId, SharedPlayer},
    sport::Sport,
    stats::Stats,
};

/// Projected stats per player.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(bound = "", transparent)]
pub struct Projections<S: Sport> {
    by_player: HashMap<PlayerId, Stats<S::Stat>>,
}

impl<S: Sport> Default for Projections<S> {
    fn default() -> Self {
        Self {
            by_player: HashMap::new(),
        }
    }
}

impl<S: Sport> FromIterator<(PlayerId, Stats<S::Stat>)> for Projections<S> {
    fn from_iter<I: IntoIterator<Item = (PlayerId, Stats<S::Stat>)>>(iter: I) -> Self {
        Self {
            by_player: iter.into_iter().collect(),
        }
    }
}

impl<S: Sport> Projections<S> {
    pub fn insert(&mut self, id: PlayerId, stats: Stats<S::Stat>) {
        self.by_player.insert(id, stats);
    }

    #[must_use]
    pub fn get(&self, id: PlayerId) -> Option<&Stats<S::Stat>> {
        self.by_player.get(&id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.by_player.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.by_player.is_empty()
    }

    /// Projection of `player`; a missing projection is an empty line.
    ///
    /// A miss is only traced; report misses once with [`Projections::warn_missing`].
    #[must_use]
    pub fn for_player(&self, player: &Player<S>) -> Stats<S::Stat> {
        match self.get(player.id()) {
            Some(stats) => stats.clone(),
            None => {
                trace!(player = %player, id = %player.id(), "no projection for player");
                Stats::new()
            }
        }
    }

    /// Warns once per player in `players` that has no projection and returns how many
    /// were missing.
    pub fn warn_missing<'a, I>(&self, players: I) -> usize
    where
        I: IntoIterator<Item = &'a SharedPlayer<S>>,
    {
        let mut missing = 0;
        for player in players {
            if self.get(player.id()).is_none() {
                warn!(player = %player, id = %player.id(), "no projection for player");
                missing += 1;
            }
        }
        missing
    }

    /// Summed projection of `players`.
    pub fn total_for<'a, I>(&self, players: I) -> Stats<S::Stat>
    where
        I: IntoIterator<Item = &'a SharedPlayer<S>>,
    {
        players.into_iter().map(|p| self.for_player(p)).sum()
    }
}
