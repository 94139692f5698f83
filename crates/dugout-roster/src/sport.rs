//! Sport abstraction: slots, positions and stats of one sport.

use std::{fmt, hash::Hash};

use serde::{Serialize, de::DeserializeOwned};

use crate::stats::Stats;

pub use self::{baseball::*, basketball::*, football::*};

mod baseball;
mod basketball;
mod football;

/// Binds the slot, position and stat enums of one sport.
///
/// Implementors are zero-sized marker types; every roster type is generic over
/// a `Sport` so a baseball lineup can never receive a basketball slot.
pub trait Sport:
    Copy + Eq + Ord + Hash + Default + fmt::Debug + Send + Sync + 'static
{
    type Slot: Slot;
    type Position: Position;
    type Stat: Stat;

    /// Slots a player at `position` is eligible for when no explicit list is given.
    fn default_slots(position: Self::Position) -> &'static [Self::Slot];
}

/// Role a slot plays in a lineup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::IsVariant)]
pub enum SlotKind {
    /// Dedicated positional slot (e.g. catcher, point guard).
    Positional,
    /// Flexible slot accepting several positions (e.g. utility, middle infield).
    Flex,
    Bench,
    Injured,
}

impl SlotKind {
    /// Starting slots are everything except bench and injured.
    #[must_use]
    pub const fn is_starting(self) -> bool {
        matches!(self, Self::Positional | Self::Flex)
    }

    /// Priority used when a drafted player could fill several open slots.
    ///
    /// Higher is filled first; injured slots are never drafted into.
    #[must_use]
    pub const fn draft_priority(self) -> u8 {
        match self {
            Self::Positional => 2,
            Self::Flex => 1,
            Self::Bench | Self::Injured => 0,
        }
    }
}

/// A roster slot of one sport.
///
/// The derived `Ord` (declaration order) is the fixed tie-break order used by every
/// search, so positional slots are declared before flexible ones.
pub trait Slot:
    Copy
    + Eq
    + Ord
    + Hash
    + fmt::Debug
    + fmt::Display
    + Serialize
    + DeserializeOwned
    + Send
    + Sync
    + 'static
{
    /// Every slot, in declaration order.
    const ALL: &'static [Self];

    fn kind(self) -> SlotKind;

    /// Whether occupants of this slot are pitchers (excluded from transition counting).
    fn is_pitching(self) -> bool {
        false
    }

    fn is_starting(self) -> bool {
        self.kind().is_starting()
    }

    fn is_bench(self) -> bool {
        self.kind().is_bench()
    }

    fn is_injured(self) -> bool {
        self.kind().is_injured()
    }

    fn draft_priority(self) -> u8 {
        self.kind().draft_priority()
    }

    fn starting_slots() -> impl Iterator<Item = Self> {
        Self::ALL.iter().copied().filter(|slot| slot.is_starting())
    }
}

/// A player's default position (role) in one sport.
pub trait Position:
    Copy
    + Eq
    + Ord
    + Hash
    + fmt::Debug
    + fmt::Display
    + Serialize
    + DeserializeOwned
    + Send
    + Sync
    + 'static
{
    /// Pitchers play on their own schedule and never compete for hitter starts.
    fn is_pitcher(self) -> bool {
        false
    }

    /// Relief pitchers may appear on any day.
    fn is_relief_pitcher(self) -> bool {
        false
    }
}

/// A statistical category of one sport.
pub trait Stat:
    Copy
    + Eq
    + Ord
    + Hash
    + fmt::Debug
    + fmt::Display
    + Serialize
    + DeserializeOwned
    + Send
    + Sync
    + 'static
{
    /// Summable (counting) stats add when stat lines are combined; derived stats do not.
    fn is_summable(self) -> bool;

    /// Number of decimal digits kept when rounding lineup totals.
    fn rounding_digits(self) -> i32 {
        2
    }

    /// Computes a derived stat from the components held in `stats`.
    ///
    /// Returns `None` for stats that are only ever stored.
    fn derive(self, stats: &Stats<Self>) -> Option<f64> {
        let _ = stats;
        None
    }
}

/// Ratio that is zero when the denominator is zero.
#[must_use]
pub fn safe_ratio(numerator: f64, denominator: f64) -> f64 {
    if denominator == 0.0 {
        0.0
    } else {
        numerator / denominator
    }
}
