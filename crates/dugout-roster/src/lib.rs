//! Roster domain model shared by the draft and lineup searches.
//!
//! This crate defines the typed inputs every search consumes:
//!
//! - [`Sport`] - marker types ([`Baseball`], [`Basketball`], [`Football`]) binding one
//!   sport's [`Slot`], [`Position`] and [`Stat`] enums together
//! - [`Player`] - identity, default position and the set of slots a player may fill
//! - [`Stats`] - stat → value map with on-demand derived (ratio) stats and additive
//!   combination restricted to summable stats
//! - [`Lineup`] - slot → ordered players, with starter/bench/injured views and
//!   [`Transition`]s between two lineups
//! - [`LineupSettings`] - slot → required count for a league
//! - [`ScoringSetting`] and [`Projections`] - league categories and per-player projections
//!
//! # Copy-on-write
//!
//! Searches branch by cloning a parent lineup and changing one slot. Players are shared
//! through [`SharedPlayer`] (`Arc<Player>`), so a lineup clone copies slot vectors of
//! pointers, never player data.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//!
//! use dugout_roster::{
//!     Baseball, BaseballPosition, BaseballSlot, Lineup, Player, PlayerId,
//! };
//!
//! let rizzo = Arc::new(Player::<Baseball>::with_default_slots(
//!     PlayerId::new(1),
//!     "Anthony Rizzo",
//!     BaseballPosition::First,
//! ));
//!
//! let mut lineup = Lineup::<Baseball>::new();
//! lineup.place(BaseballSlot::First, rizzo.clone()).unwrap();
//!
//! let moved = lineup
//!     .without_player(rizzo.id())
//!     .with_player(BaseballSlot::Bench, rizzo)
//!     .unwrap();
//! assert_eq!(lineup.transitions_to(&moved).len(), 1);
//! ```

pub use self::{
    lineup::*, player::*, projections::*, scoring::*, settings::*, sport::*, stats::*,
    transition::*,
};

mod lineup;
mod player;
mod projections;
mod scoring;
mod settings;
mod sport;
mod stats;
mod transition;

#[cfg(any(test, feature = "testing"))]
pub mod testing;
