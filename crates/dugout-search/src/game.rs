use std::ops::{Index, IndexMut};

use serde::{Deserialize, Serialize};

/// One value per player, index-aligned to player position.
#[derive(
    Debug, Clone, PartialEq, Serialize, Deserialize, derive_more::From, derive_more::Into,
)]
#[serde(transparent)]
pub struct ValueVector(Vec<f64>);

impl ValueVector {
    #[must_use]
    pub fn zeros(players: usize) -> Self {
        Self(vec![0.0; players])
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }

    pub fn iter(&self) -> impl Iterator<Item = f64> + '_ {
        self.0.iter().copied()
    }
}

impl Index<usize> for ValueVector {
    type Output = f64;

    fn index(&self, player: usize) -> &f64 {
        &self.0[player]
    }
}

impl IndexMut<usize> for ValueVector {
    fn index_mut(&mut self, player: usize) -> &mut f64 {
        &mut self.0[player]
    }
}

/// Static facts about a game shared by every node.
pub trait GameInfo {
    fn total_players(&self) -> usize;

    /// Upper bound on the sum of a value vector's entries.
    fn max_value(&self) -> f64;
}

/// A [`GameInfo`] with nothing but the two required facts.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BasicGameInfo {
    pub total_players: usize,
    pub max_value: f64,
}

impl BasicGameInfo {
    #[must_use]
    pub fn new(total_players: usize, max_value: f64) -> Self {
        Self {
            total_players,
            max_value,
        }
    }
}

impl GameInfo for BasicGameInfo {
    fn total_players(&self) -> usize {
        self.total_players
    }

    fn max_value(&self) -> f64 {
        self.max_value
    }
}

/// A node of a game tree.
pub trait GameState: Sized {
    type Info: GameInfo;

    /// Every legal successor state; empty only for terminal states.
    fn children(&self) -> Vec<Self>;

    fn is_terminal(&self) -> bool;

    /// The player acting at this node, when the state tracks turn order itself.
    ///
    /// Returning `None` lets the search rotate players in index order.
    fn player_to_move(&self) -> Option<usize> {
        None
    }
}

/// Values game states for every player.
///
/// Both methods take `&mut self` so implementations may memoize across calls.
pub trait StateEvaluator<G: GameState> {
    /// Approximate value of a non-terminal state where the search was cut off.
    fn heuristic(&mut self, state: &G, info: &G::Info) -> ValueVector;

    /// Exact value of a terminal state.
    fn terminal_state_value(&mut self, state: &G, info: &G::Info) -> ValueVector;
}
