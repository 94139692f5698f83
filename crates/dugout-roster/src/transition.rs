use std::fmt;

use serde::Serialize;

use crate::{
    player::SharedPlayer,
    sport::{Slot as _, Sport},
};

/// A single player's move from one slot to another.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(bound = "")]
pub struct Transition<S: Sport> {
    player: SharedPlayer<S>,
    from: S::Slot,
    to: S::Slot,
}

impl<S: Sport> Transition<S> {
    #[must_use]
    pub fn new(player: SharedPlayer<S>, from: S::Slot, to: S::Slot) -> Self {
        Self { player, from, to }
    }

    #[must_use]
    pub fn player(&self) -> &SharedPlayer<S> {
        &self.player
    }

    #[must_use]
    pub fn from(&self) -> S::Slot {
        self.from
    }

    #[must_use]
    pub fn to(&self) -> S::Slot {
        self.to
    }

    /// Whether this move counts against a candidate lineup.
    ///
    /// Pitching and injured slots are managed separately and never count.
    #[must_use]
    pub fn is_counted(&self) -> bool {
        !(self.from.is_pitching()
            || self.to.is_pitching()
            || self.from.is_injured()
            || self.to.is_injured())
    }
}

impl<S: Sport> fmt::Display for Transition<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}\t{}\t{}", self.player.name(), self.from, self.to)
    }
}
