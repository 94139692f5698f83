use std::{cmp::Reverse, collections::HashSet, sync::Arc};

use dugout_roster::{Lineup, LineupError, PlayerId, SharedPlayer, Slot as _, Sport};
use dugout_search::GameState;
use serde::Serialize;

use crate::game_info::DraftGameInfo;

#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum DraftError {
    #[display("a draft needs at least one drafter")]
    NoDrafters,
    #[display("the pool holds {players} players but the draft makes {picks} picks")]
    PoolTooSmall { players: usize, picks: usize },
    #[display("every roster spot has been drafted")]
    DraftComplete,
    #[display("player {player} is not in the draft pool")]
    UnknownPlayer { player: PlayerId },
    #[display("player {player} has already been drafted")]
    PlayerAlreadyDrafted { player: PlayerId },
    #[display("player {player} has no open slot on drafter {drafter}'s roster")]
    NoOpenSlot { player: PlayerId, drafter: usize },
    #[display("slot {slot} is not open for player {player}")]
    SlotUnavailable { player: PlayerId, slot: String },
    #[display("no draftable player is left for drafter {drafter}")]
    NoCandidates { drafter: usize },
    #[display("invalid lineup")]
    Lineup(LineupError),
}

impl From<LineupError> for DraftError {
    fn from(err: LineupError) -> Self {
        Self::Lineup(err)
    }
}

/// Direction the pick index is moving in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Direction {
    Forward,
    Backward,
}

/// A drafter taking a player into a slot.
#[derive(Debug, Clone, Serialize)]
#[serde(bound = "")]
pub struct Pick<S: Sport> {
    pub drafter: usize,
    pub player: SharedPlayer<S>,
    pub slot: S::Slot,
}

/// One point of a snake draft.
///
/// Successor states share the ranked pool and the untouched drafters' lineups with
/// their parent; only the picking drafter's lineup and the drafted set are copied.
#[derive(Debug, Clone)]
pub struct DraftState<S: Sport> {
    info: Arc<DraftGameInfo<S>>,
    ranked: Arc<[SharedPlayer<S>]>,
    drafted: HashSet<PlayerId>,
    lineups: Vec<Arc<Lineup<S>>>,
    current: usize,
    direction: Direction,
    last_pick: Option<Pick<S>>,
}

/// Drafter and direction following a pick by `current`.
#[must_use]
pub fn next_turn(current: usize, direction: Direction, drafters: usize) -> (usize, Direction) {
    if drafters <= 1 {
        return (0, direction);
    }
    match direction {
        Direction::Forward if current + 1 >= drafters => (current, Direction::Backward),
        Direction::Forward => (current + 1, Direction::Forward),
        Direction::Backward if current == 0 => (0, Direction::Forward),
        Direction::Backward => (current - 1, Direction::Backward),
    }
}

impl<S: Sport> DraftState<S> {
    /// The state before the first pick: empty rosters, drafter 0 on the clock.
    ///
    /// `ranked` is the pool from best to worst and must hold at least one player per
    /// pick of the whole draft.
    pub fn new<I>(info: Arc<DraftGameInfo<S>>, ranked: I) -> Result<Self, DraftError>
    where
        I: IntoIterator<Item = SharedPlayer<S>>,
    {
        if info.total_drafters == 0 {
            return Err(DraftError::NoDrafters);
        }
        let ranked: Arc<[SharedPlayer<S>]> = ranked.into_iter().collect();
        let picks = info.total_picks();
        if ranked.len() < picks {
            return Err(DraftError::PoolTooSmall {
                players: ranked.len(),
                picks,
            });
        }
        let lineups = vec![Arc::new(Lineup::new()); info.total_drafters];
        Ok(Self {
            info,
            ranked,
            drafted: HashSet::new(),
            lineups,
            current: 0,
            direction: Direction::Forward,
            last_pick: None,
        })
    }

    #[must_use]
    pub fn info(&self) -> &Arc<DraftGameInfo<S>> {
        &self.info
    }

    #[must_use]
    pub fn current_drafter(&self) -> usize {
        self.current
    }

    #[must_use]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    #[must_use]
    pub fn lineups(&self) -> &[Arc<Lineup<S>>] {
        &self.lineups
    }

    #[must_use]
    pub fn lineup(&self, drafter: usize) -> &Lineup<S> {
        &self.lineups[drafter]
    }

    #[must_use]
    pub fn drafted_count(&self) -> usize {
        self.drafted.len()
    }

    #[must_use]
    pub fn is_drafted(&self, id: PlayerId) -> bool {
        self.drafted.contains(&id)
    }

    /// The pick that produced this state.
    #[must_use]
    pub fn last_pick(&self) -> Option<&Pick<S>> {
        self.last_pick.as_ref()
    }

    /// Undrafted players, best first.
    pub fn available(&self) -> impl Iterator<Item = &SharedPlayer<S>> + '_ {
        self.ranked.iter().filter(|p| !self.drafted.contains(&p.id()))
    }

    /// Non-injured slots with room left on `drafter`'s roster.
    pub fn open_slots(&self, drafter: usize) -> impl Iterator<Item = S::Slot> + '_ {
        let lineup = &self.lineups[drafter];
        self.info
            .lineup_settings
            .iter()
            .filter(move |&(slot, count)| !slot.is_injured() && lineup.count_in(slot) < count)
            .map(|(slot, _)| slot)
    }

    /// Best open slot of `drafter` for `player`: positional slots first, then flexible
    /// slots, then bench, ties broken by slot order.
    #[must_use]
    pub fn best_open_slot(&self, drafter: usize, player: &SharedPlayer<S>) -> Option<S::Slot> {
        self.open_slots(drafter)
            .filter(|&slot| player.can_play(slot))
            .min_by_key(|&slot| (Reverse(slot.draft_priority()), slot))
    }

    /// Moves available to the drafter on the clock.
    ///
    /// Looks at the `top_k` best undrafted players; when none of them fits the roster,
    /// falls back to the best undrafted player beyond the window that does.
    #[must_use]
    pub fn candidate_picks(&self) -> Vec<(SharedPlayer<S>, S::Slot)> {
        let drafter = self.current;
        let fit = |player: &SharedPlayer<S>| {
            self.best_open_slot(drafter, player)
                .map(|slot| (player.clone(), slot))
        };
        let picks = self
            .available()
            .take(self.info.top_k)
            .filter_map(fit)
            .collect::<Vec<_>>();
        if !picks.is_empty() {
            return picks;
        }
        self.available()
            .skip(self.info.top_k)
            .find_map(fit)
            .into_iter()
            .collect()
    }

    /// Has the drafter on the clock take `id` into its best open slot.
    pub fn draft_player(&self, id: PlayerId) -> Result<Self, DraftError> {
        if self.is_terminal() {
            return Err(DraftError::DraftComplete);
        }
        let player = self.pool_player(id)?;
        let slot = self
            .best_open_slot(self.current, &player)
            .ok_or(DraftError::NoOpenSlot {
                player: id,
                drafter: self.current,
            })?;
        self.apply_pick(id, slot)
    }

    /// Has the drafter on the clock take `id` into `slot`.
    pub fn apply_pick(&self, id: PlayerId, slot: S::Slot) -> Result<Self, DraftError> {
        if self.is_terminal() {
            return Err(DraftError::DraftComplete);
        }
        let player = self.pool_player(id)?;
        if !player.can_play(slot) || !self.open_slots(self.current).any(|open| open == slot) {
            return Err(DraftError::SlotUnavailable {
                player: id,
                slot: slot.to_string(),
            });
        }
        let lineup = self.lineups[self.current].with_player(slot, player.clone())?;
        Ok(self.successor(player, slot, lineup))
    }

    fn pool_player(&self, id: PlayerId) -> Result<SharedPlayer<S>, DraftError> {
        if self.drafted.contains(&id) {
            return Err(DraftError::PlayerAlreadyDrafted { player: id });
        }
        self.ranked
            .iter()
            .find(|p| p.id() == id)
            .cloned()
            .ok_or(DraftError::UnknownPlayer { player: id })
    }

    fn successor(&self, player: SharedPlayer<S>, slot: S::Slot, lineup: Lineup<S>) -> Self {
        let mut lineups = self.lineups.clone();
        lineups[self.current] = Arc::new(lineup);
        let mut drafted = self.drafted.clone();
        drafted.insert(player.id());
        let (current, direction) =
            next_turn(self.current, self.direction, self.info.total_drafters);
        Self {
            info: Arc::clone(&self.info),
            ranked: Arc::clone(&self.ranked),
            drafted,
            lineups,
            current,
            direction,
            last_pick: Some(Pick {
                drafter: self.current,
                player,
                slot,
            }),
        }
    }
}

impl<S: Sport> GameState for DraftState<S> {
    type Info = DraftGameInfo<S>;

    fn children(&self) -> Vec<Self> {
        self.candidate_picks()
            .into_iter()
            .filter_map(|(player, slot)| {
                let lineup = self.lineups[self.current]
                    .with_player(slot, player.clone())
                    .ok()?;
                Some(self.successor(player, slot, lineup))
            })
            .collect()
    }

    fn is_terminal(&self) -> bool {
        self.drafted.len() == self.info.total_picks()
    }

    fn player_to_move(&self) -> Option<usize> {
        Some(self.current)
    }
}

#[cfg(test)]
mod tests {
    use dugout_roster::{
        Baseball, BaseballPosition as Pos, BaseballSlot as Slot, LineupSettings, testing,
    };

    use super::*;

    mod snake {
        use super::*;

        #[test]
        fn test_three_drafters() {
            let mut turn = (0, Direction::Forward);
            let mut order = vec![];
            for _ in 0..9 {
                order.push(turn.0);
                turn = next_turn(turn.0, turn.1, 3);
            }
            assert_eq!(order, [0, 1, 2, 2, 1, 0, 0, 1, 2]);
        }

        #[test]
        fn test_single_drafter_stays_on_the_clock() {
            let mut turn = (0, Direction::Forward);
            for _ in 0..4 {
                turn = next_turn(turn.0, turn.1, 1);
                assert_eq!(turn.0, 0);
            }
        }
    }

    const YELICH: u64 = 1;
    const DEGROM: u64 = 2;
    const SPRINGER: u64 = 3;
    const ROSARIO: u64 = 4;
    const SEGURA: u64 = 5;
    const BRAUN: u64 = 6;
    const SANTANA: u64 = 7;
    const RIZZO: u64 = 8;
    const PERAZA: u64 = 9;
    const CHOO: u64 = 10;
    const MORTON: u64 = 11;

    fn settings() -> LineupSettings<Baseball> {
        LineupSettings::from_iter([
            (Slot::Outfield, 2),
            (Slot::Short, 1),
            (Slot::Pitcher, 1),
            (Slot::Util, 1),
            (Slot::Bench, 1),
        ])
    }

    fn pool() -> Vec<SharedPlayer<Baseball>> {
        vec![
            testing::player(YELICH, Pos::Right),
            testing::player(DEGROM, Pos::Starter),
            testing::player(SPRINGER, Pos::Center),
            testing::player(ROSARIO, Pos::Left),
            testing::player(SEGURA, Pos::Short),
            testing::player(BRAUN, Pos::Left),
            testing::player(SANTANA, Pos::First),
            testing::player(RIZZO, Pos::First),
            testing::player(PERAZA, Pos::Short),
            testing::player(CHOO, Pos::DesignatedHitter),
            testing::player(MORTON, Pos::Starter),
        ]
        .into_iter()
        // depth for three full rosters, ranked below everyone above
        .chain((12..=18).map(testing::catcher))
        .collect()
    }

    fn initial(drafters: usize, settings: LineupSettings<Baseball>) -> DraftState<Baseball> {
        let info = Arc::new(DraftGameInfo::new(drafters, 100.0, settings).with_top_k(4));
        DraftState::new(info, pool()).unwrap()
    }

    /// Seven picks in: drafter 1 is on the clock with P and SS filled.
    fn mid_draft() -> DraftState<Baseball> {
        let picks = [
            (YELICH, Slot::Outfield),
            (DEGROM, Slot::Pitcher),
            (SPRINGER, Slot::Outfield),
            (ROSARIO, Slot::Outfield),
            (SEGURA, Slot::Short),
            (BRAUN, Slot::Outfield),
            (SANTANA, Slot::Util),
        ];
        picks
            .into_iter()
            .fold(initial(3, settings()), |state, (id, slot)| {
                state.apply_pick(PlayerId::new(id), slot).unwrap()
            })
    }

    fn ids(picks: &[(SharedPlayer<Baseball>, Slot)]) -> Vec<(u64, Slot)> {
        picks.iter().map(|(p, s)| (p.id().value(), *s)).collect()
    }

    #[test]
    fn test_candidate_picks_prefer_positional_slots() {
        let state = mid_draft();
        assert_eq!(state.current_drafter(), 1);
        assert_eq!(
            ids(&state.candidate_picks()),
            [
                (RIZZO, Slot::Util),
                (PERAZA, Slot::Util),
                (CHOO, Slot::Util),
                (MORTON, Slot::Bench),
            ]
        );
    }

    #[test]
    fn test_best_open_slot_per_drafter() {
        let state = mid_draft();
        let pool = pool();
        let choo = &pool[9];
        let peraza = &pool[8];
        let morton = &pool[10];
        // drafter 0: OF and UTIL filled
        assert_eq!(state.best_open_slot(0, choo), Some(Slot::Bench));
        assert_eq!(state.best_open_slot(0, peraza), Some(Slot::Short));
        assert_eq!(state.best_open_slot(0, morton), Some(Slot::Pitcher));
        // drafter 2: OF filled
        assert_eq!(state.best_open_slot(2, choo), Some(Slot::Util));
    }

    #[test]
    fn test_children_replace_only_the_picking_lineup() {
        let state = mid_draft();
        let children = state.children();
        assert_eq!(children.len(), 4);
        for child in &children {
            assert_ne!(child.lineup(1), state.lineup(1));
            assert!(Arc::ptr_eq(&child.lineups()[0], &state.lineups()[0]));
            assert!(Arc::ptr_eq(&child.lineups()[2], &state.lineups()[2]));
            assert_eq!(child.drafted_count(), state.drafted_count() + 1);
            assert_eq!(child.last_pick().unwrap().drafter, 1);
            assert_eq!(child.current_drafter(), 2);
        }
    }

    #[test]
    fn test_top_k_window_limits_children() {
        let info = Arc::new(DraftGameInfo::new(2, 100.0, settings()).with_top_k(2));
        let state = DraftState::new(info, pool()).unwrap();
        assert_eq!(state.children().len(), 2);
    }

    #[test]
    fn test_falls_back_beyond_window() {
        let only_pitcher = LineupSettings::from_iter([(Slot::Pitcher, 1)]);
        let info = Arc::new(DraftGameInfo::new(1, 100.0, only_pitcher).with_top_k(1));
        let state = DraftState::new(info, pool()).unwrap();
        // the window holds Yelich only; Degrom is the best pitcher beyond it
        assert_eq!(ids(&state.candidate_picks()), [(DEGROM, Slot::Pitcher)]);
    }

    #[test]
    fn test_terminal_once_every_non_injured_slot_is_filled() {
        let small = LineupSettings::from_iter([(Slot::Outfield, 1), (Slot::Injured, 1)]);
        let state = initial(3, small);
        assert!(!state.is_terminal());
        let done = [YELICH, SPRINGER, ROSARIO]
            .into_iter()
            .fold(state, |state, id| state.draft_player(PlayerId::new(id)).unwrap());
        assert!(done.is_terminal());
        assert!(done.children().is_empty());
        assert_eq!(
            done.draft_player(PlayerId::new(BRAUN)).unwrap_err(),
            DraftError::DraftComplete
        );
    }

    #[test]
    fn test_apply_pick_errors() {
        let state = mid_draft();
        assert_eq!(
            state.draft_player(PlayerId::new(YELICH)).unwrap_err(),
            DraftError::PlayerAlreadyDrafted {
                player: PlayerId::new(YELICH)
            }
        );
        assert_eq!(
            state.draft_player(PlayerId::new(99)).unwrap_err(),
            DraftError::UnknownPlayer {
                player: PlayerId::new(99)
            }
        );
        // drafter 1 already has a pitcher
        assert!(matches!(
            state.apply_pick(PlayerId::new(MORTON), Slot::Pitcher),
            Err(DraftError::SlotUnavailable { .. })
        ));
    }

    #[test]
    fn test_pool_must_cover_every_pick() {
        let outfield = LineupSettings::from_iter([(Slot::Outfield, 2)]);
        let info = Arc::new(DraftGameInfo::new(2, 100.0, outfield));
        let pool = (1..=3).map(testing::outfielder);
        assert_eq!(
            DraftState::new(info, pool).unwrap_err(),
            DraftError::PoolTooSmall {
                players: 3,
                picks: 4
            }
        );
    }

    #[test]
    fn test_no_drafters_is_rejected() {
        let info = Arc::new(DraftGameInfo::new(0, 1.0, settings()));
        assert_eq!(
            DraftState::new(info, pool()).unwrap_err(),
            DraftError::NoDrafters
        );
    }
}
