//! Lineup search: enumerating roster assignments and choosing among them.
//!
//! - [`possible_lineups`] - every distinct set of starters reachable from a lineup, found by a
//!   depth-first search over the slots to fill, one representative lineup per starter set
//! - [`LineupTotal`] - a candidate lineup with its starters' summed projections
//! - [`best_lineups`] / [`best_for_stat`] - multi-category selection: relax a shared
//!   threshold until some candidate is close to the best of every category
//! - [`LineupOptimizer`] - the daily baseball flow, hitting selection plus pitching swaps
//! - [`best_points_lineup`] - points leagues, where one weighted sum decides
//! - [`best_salary_cap_lineup`] - fixed-budget contests, searched over a staged pool
//!
//! # Transitions as tie-breaker
//!
//! Whenever two candidates are equally good, the one reachable from the current lineup
//! with fewer counted [`Transition`](dugout_roster::Transition)s wins, so re-running an
//! optimization on an already optimal lineup proposes no moves.
//!
//! # Example
//!
//! ```
//! use dugout_lineup::possible_lineups;
//! use dugout_roster::{Baseball, BaseballPosition, BaseballSlot, Lineup, LineupSettings};
//! use dugout_roster::{Player, PlayerId};
//! use std::sync::Arc;
//!
//! let outfielder = |id| {
//!     Arc::new(Player::<Baseball>::with_default_slots(
//!         PlayerId::new(id),
//!         format!("of-{id}"),
//!         BaseballPosition::Left,
//!     ))
//! };
//! let lineup = Lineup::from_slots([
//!     (BaseballSlot::Outfield, vec![outfielder(1)]),
//!     (BaseballSlot::Bench, vec![outfielder(2), outfielder(3)]),
//! ])
//! .unwrap();
//! let settings = LineupSettings::from_iter([(BaseballSlot::Outfield, 1), (BaseballSlot::Bench, 2)]);
//!
//! let possible = possible_lineups(&lineup, &settings, &[BaseballSlot::Outfield], &lineup);
//! assert_eq!(possible.lineups.len(), 3);
//! ```

pub use self::{
    combinations::*, optimizer::*, pitching::*, points::*, salary_cap::*, search::*,
    selector::*, total::*,
};

mod combinations;
mod optimizer;
mod pitching;
mod points;
mod salary_cap;
mod search;
mod selector;
mod total;
