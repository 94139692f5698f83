use std::{
    cmp::Ordering,
    collections::BTreeSet,
    fmt,
    hash::{Hash, Hasher},
    sync::Arc,
};

use serde::{Deserialize, Serialize};

use crate::sport::{Position as _, Sport};

/// Stable identity of a player across every input document.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
    derive_more::From,
)]
#[serde(transparent)]
pub struct PlayerId(u64);

impl PlayerId {
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    #[must_use]
    pub const fn value(self) -> u64 {
        self.0
    }
}

/// A rostered or draftable player.
///
/// Equality, hashing and ordering consider the [`PlayerId`] only.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(bound = "", from = "PlayerRecord<S>")]
pub struct Player<S: Sport> {
    id: PlayerId,
    name: String,
    position: S::Position,
    eligible_slots: BTreeSet<S::Slot>,
    #[serde(default)]
    injured: bool,
}

/// Players are shared between lineups and search states.
pub type SharedPlayer<S> = Arc<Player<S>>;

/// Serialized form of a player; `eligible_slots` falls back to the position's defaults.
#[derive(Deserialize)]
#[serde(bound = "")]
struct PlayerRecord<S: Sport> {
    id: PlayerId,
    name: String,
    position: S::Position,
    #[serde(default)]
    eligible_slots: Option<BTreeSet<S::Slot>>,
    #[serde(default)]
    injured: bool,
}

impl<S: Sport> From<PlayerRecord<S>> for Player<S> {
    fn from(record: PlayerRecord<S>) -> Self {
        let eligible_slots = record
            .eligible_slots
            .unwrap_or_else(|| S::default_slots(record.position).iter().copied().collect());
        Self {
            id: record.id,
            name: record.name,
            position: record.position,
            eligible_slots,
            injured: record.injured,
        }
    }
}

impl<S: Sport> Player<S> {
    pub fn new<I>(id: PlayerId, name: impl Into<String>, position: S::Position, slots: I) -> Self
    where
        I: IntoIterator<Item = S::Slot>,
    {
        Self {
            id,
            name: name.into(),
            position,
            eligible_slots: slots.into_iter().collect(),
            injured: false,
        }
    }

    /// Creates a player eligible for the default slots of `position`.
    pub fn with_default_slots(id: PlayerId, name: impl Into<String>, position: S::Position) -> Self {
        Self::new(id, name, position, S::default_slots(position).iter().copied())
    }

    #[must_use]
    pub fn with_injured(mut self, injured: bool) -> Self {
        self.injured = injured;
        self
    }

    #[must_use]
    pub fn id(&self) -> PlayerId {
        self.id
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn position(&self) -> S::Position {
        self.position
    }

    #[must_use]
    pub fn eligible_slots(&self) -> &BTreeSet<S::Slot> {
        &self.eligible_slots
    }

    #[must_use]
    pub fn can_play(&self, slot: S::Slot) -> bool {
        self.eligible_slots.contains(&slot)
    }

    #[must_use]
    pub fn is_injured(&self) -> bool {
        self.injured
    }

    #[must_use]
    pub fn is_pitcher(&self) -> bool {
        self.position.is_pitcher()
    }
}

impl<S: Sport> PartialEq for Player<S> {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl<S: Sport> Eq for Player<S> {}

impl<S: Sport> Hash for Player<S> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl<S: Sport> PartialOrd for Player<S> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<S: Sport> Ord for Player<S> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.id.cmp(&other.id)
    }
}

impl<S: Sport> fmt::Display for Player<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.position)
    }
}
