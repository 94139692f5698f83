use serde::Serialize;
use tracing::debug;

use crate::{
    cutoff::Cutoff,
    game::{GameInfo, GameState, StateEvaluator, ValueVector},
};

/// Progress counters of one search driver.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SearchStats {
    pub nodes_visited: usize,
    pub terminal_evaluations: usize,
    pub heuristic_evaluations: usize,
    /// Siblings skipped by shallow pruning.
    pub pruned_siblings: usize,
}

/// MAX-N search driver.
///
/// One driver may run several searches (e.g. one per candidate move); its
/// [`SearchStats`] accumulate across them.
#[derive(Debug)]
pub struct MaxN<'a, G, E, C>
where
    G: GameState,
{
    info: &'a G::Info,
    evaluator: &'a mut E,
    cutoff: C,
    stats: SearchStats,
}

impl<'a, G, E, C> MaxN<'a, G, E, C>
where
    G: GameState,
    E: StateEvaluator<G>,
    C: Cutoff,
{
    pub fn new(info: &'a G::Info, evaluator: &'a mut E, cutoff: C) -> Self {
        Self {
            info,
            evaluator,
            cutoff,
            stats: SearchStats::default(),
        }
    }

    #[must_use]
    pub fn stats(&self) -> SearchStats {
        self.stats
    }

    #[must_use]
    pub fn into_stats(self) -> SearchStats {
        self.stats
    }

    /// Value of `node` with `player` to move, searched from depth 0.
    pub fn search(&mut self, node: &G, player: usize) -> ValueVector {
        let value = self.search_bounded(node, player, self.info.max_value(), 0);
        debug!(
            player,
            nodes = self.stats.nodes_visited,
            pruned = self.stats.pruned_siblings,
            "max-n search finished"
        );
        value
    }

    /// Value of `node` with `player` to move, where the parent no longer cares about
    /// any entry for `player` of at least `upper_bound`.
    ///
    /// # Panics
    ///
    /// Panics if a non-terminal node has no children.
    pub fn search_bounded(
        &mut self,
        node: &G,
        player: usize,
        upper_bound: f64,
        depth: usize,
    ) -> ValueVector {
        self.stats.nodes_visited += 1;

        if node.is_terminal() {
            self.stats.terminal_evaluations += 1;
            return self.evaluator.terminal_state_value(node, self.info);
        }
        if self.cutoff.should_cut(depth) {
            self.stats.heuristic_evaluations += 1;
            return self.evaluator.heuristic(node, self.info);
        }

        let children = node.children();
        let (first, rest) = children
            .split_first()
            .expect("non-terminal game state has no children");

        let max_value = self.info.max_value();
        let mut best =
            self.search_bounded(first, self.next_player(first, player), max_value, depth + 1);
        for (index, child) in rest.iter().enumerate() {
            if best[player] >= upper_bound {
                self.stats.pruned_siblings += rest.len() - index;
                break;
            }
            let value = self.search_bounded(
                child,
                self.next_player(child, player),
                max_value - best[player],
                depth + 1,
            );
            if value[player] > best[player] {
                best = value;
            }
        }
        best
    }

    fn next_player(&self, child: &G, player: usize) -> usize {
        child
            .player_to_move()
            .unwrap_or_else(|| (player + 1) % self.info.total_players())
    }
}

/// Runs a single MAX-N search and returns its value with the search statistics.
pub fn max_n<G, E, C>(
    node: &G,
    player: usize,
    info: &G::Info,
    evaluator: &mut E,
    cutoff: C,
) -> (ValueVector, SearchStats)
where
    G: GameState,
    E: StateEvaluator<G>,
    C: Cutoff,
{
    let mut search = MaxN::new(info, evaluator, cutoff);
    let value = search.search(node, player);
    (value, search.into_stats())
}
