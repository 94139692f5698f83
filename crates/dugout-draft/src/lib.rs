//! Snake-draft simulation on top of MAX-N.
//!
//! - [`DraftState`] - one point of a snake draft: the ranked pool, who has been drafted,
//!   every drafter's partial lineup, and whose pick it is
//! - [`DraftStateEvaluator`] - projects each drafter's season totals and converts them
//!   into expected standings points, one entry per drafter
//! - [`recommend_pick`] - searches below every candidate pick and returns the best one for
//!   the drafter on the clock
//! - [`rank_by_value`] - orders a pre-draft pool by projected points above the
//!   replacement level of each position
//!
//! # Turn order
//!
//! Drafters pick in snake order: `0, 1, ..., n-1, n-1, ..., 1, 0, 0, 1, ...`. Each state
//! reports its drafter through [`GameState::player_to_move`](dugout_search::GameState), so
//! MAX-N follows the snake instead of a plain rotation.
//!
//! # Candidate moves
//!
//! Only the `top_k` highest-ranked undrafted players are considered at every node, each
//! placed in its single best open slot (positional before flexible before bench). This
//! window is the only bound on the branching factor; combine it with a depth [`Cutoff`]
//! to bound latency.
//!
//! [`Cutoff`]: dugout_search::Cutoff

pub use self::{evaluator::*, game_info::*, rankings::*, recommend::*, sport::*, state::*};

mod evaluator;
mod game_info;
mod rankings;
mod recommend;
mod sport;
mod state;
