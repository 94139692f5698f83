//! Generic N-player game-tree search.
//!
//! This crate provides the contracts a game must implement to be searched and the
//! MAX-N algorithm that searches it:
//!
//! - [`GameState`] - a node of the game tree: its legal successors and whether it is terminal
//! - [`StateEvaluator`] - exact values at terminal nodes and approximate (heuristic) values
//!   at cut-off nodes, one entry per player
//! - [`GameInfo`] - number of players and the upper bound of any single value entry
//! - [`Cutoff`] - depth-bounded search policies
//! - [`MaxN`] - the search driver, with [`SearchStats`] progress counters
//!
//! # MAX-N
//!
//! MAX-N generalizes minimax to N players who each maximize their own entry of a
//! [`ValueVector`]. The game is not zero-sum, but when every vector is non-negative and
//! sums to at most [`GameInfo::max_value`], a node may stop exploring siblings once the
//! acting player's best entry reaches the bound left over by its parent ("shallow pruning").
//! Pruning never changes the value returned for the acting player.
//!
//! # Example
//!
//! ```
//! use dugout_search::{BasicGameInfo, GameState, MaxN, NoCutoff, StateEvaluator, ValueVector};
//!
//! #[derive(Clone)]
//! enum Node {
//!     Leaf([f64; 2]),
//!     Inner(Vec<Node>),
//! }
//!
//! impl GameState for Node {
//!     type Info = BasicGameInfo;
//!
//!     fn children(&self) -> Vec<Self> {
//!         match self {
//!             Node::Leaf(_) => vec![],
//!             Node::Inner(children) => children.clone(),
//!         }
//!     }
//!
//!     fn is_terminal(&self) -> bool {
//!         matches!(self, Node::Leaf(_))
//!     }
//! }
//!
//! struct Leaves;
//!
//! impl StateEvaluator<Node> for Leaves {
//!     fn heuristic(&mut self, _: &Node, info: &BasicGameInfo) -> ValueVector {
//!         ValueVector::zeros(info.total_players)
//!     }
//!
//!     fn terminal_state_value(&mut self, state: &Node, _: &BasicGameInfo) -> ValueVector {
//!         match state {
//!             Node::Leaf(values) => values.to_vec().into(),
//!             Node::Inner(_) => unreachable!(),
//!         }
//!     }
//! }
//!
//! let info = BasicGameInfo::new(2, 10.0);
//! let root = Node::Inner(vec![Node::Leaf([4.0, 6.0]), Node::Leaf([7.0, 3.0])]);
//! let mut evaluator = Leaves;
//! let mut search = MaxN::new(&info, &mut evaluator, NoCutoff);
//! let value = search.search(&root, 0);
//! assert_eq!(value[0], 7.0);
//! ```

pub use self::{cutoff::*, game::*, max_n::*};

mod cutoff;
mod game;
mod max_n;
