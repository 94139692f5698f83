use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize, Serializer};

use crate::{
    player::{PlayerId, SharedPlayer},
    sport::{Slot as _, Sport},
    transition::Transition,
};

#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum LineupError {
    #[display("player {player} is already placed in the lineup")]
    PlayerAlreadyPlaced { player: PlayerId },
}

/// Slot → ordered players.
///
/// A player appears in at most one slot. Lineups are values: searches derive a new
/// lineup from a parent with [`Lineup::with_player`] / [`Lineup::without_player`]
/// and never mutate a lineup another branch can see.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(bound = "", try_from = "BTreeMap<S::Slot, Vec<SharedPlayer<S>>>")]
pub struct Lineup<S: Sport> {
    slots: BTreeMap<S::Slot, Vec<SharedPlayer<S>>>,
}

impl<S: Sport> Default for Lineup<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: Sport> Serialize for Lineup<S> {
    fn serialize<Ser: Serializer>(&self, serializer: Ser) -> Result<Ser::Ok, Ser::Error> {
        self.slots.serialize(serializer)
    }
}

impl<S: Sport> TryFrom<BTreeMap<S::Slot, Vec<SharedPlayer<S>>>> for Lineup<S> {
    type Error = LineupError;

    fn try_from(slots: BTreeMap<S::Slot, Vec<SharedPlayer<S>>>) -> Result<Self, Self::Error> {
        Self::from_slots(slots)
    }
}

impl<S: Sport> Lineup<S> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            slots: BTreeMap::new(),
        }
    }

    pub fn from_slots<I>(slots: I) -> Result<Self, LineupError>
    where
        I: IntoIterator<Item = (S::Slot, Vec<SharedPlayer<S>>)>,
    {
        let mut lineup = Self::new();
        for (slot, players) in slots {
            for player in players {
                lineup.place(slot, player)?;
            }
        }
        Ok(lineup)
    }

    /// Appends `player` to `slot`.
    pub fn place(&mut self, slot: S::Slot, player: SharedPlayer<S>) -> Result<(), LineupError> {
        if self.contains(player.id()) {
            return Err(LineupError::PlayerAlreadyPlaced {
                player: player.id(),
            });
        }
        self.slots.entry(slot).or_default().push(player);
        Ok(())
    }

    /// Returns a copy of this lineup with `player` appended to `slot`.
    pub fn with_player(&self, slot: S::Slot, player: SharedPlayer<S>) -> Result<Self, LineupError> {
        let mut next = self.clone();
        next.place(slot, player)?;
        Ok(next)
    }

    /// Returns a copy of this lineup with the player removed from wherever it is.
    #[must_use]
    pub fn without_player(&self, id: PlayerId) -> Self {
        let mut next = self.clone();
        for players in next.slots.values_mut() {
            players.retain(|p| p.id() != id);
        }
        next.slots.retain(|_, players| !players.is_empty());
        next
    }

    /// Replaces the occupants of `slot`.
    ///
    /// The caller guarantees none of `players` is placed elsewhere in this lineup.
    pub fn set_slot(&mut self, slot: S::Slot, players: Vec<SharedPlayer<S>>) {
        debug_assert!(players.iter().all(|p| self.slot_of(p.id()).is_none_or(|s| s == slot)));
        if players.is_empty() {
            self.slots.remove(&slot);
        } else {
            self.slots.insert(slot, players);
        }
    }

    /// Removes and returns the occupants of `slot`.
    pub fn take_slot(&mut self, slot: S::Slot) -> Vec<SharedPlayer<S>> {
        self.slots.remove(&slot).unwrap_or_default()
    }

    #[must_use]
    pub fn players_in(&self, slot: S::Slot) -> &[SharedPlayer<S>] {
        self.slots.get(&slot).map_or(&[], Vec::as_slice)
    }

    #[must_use]
    pub fn count_in(&self, slot: S::Slot) -> usize {
        self.players_in(slot).len()
    }

    /// Occupied slots with their players, in slot order.
    pub fn slots(&self) -> impl Iterator<Item = (S::Slot, &[SharedPlayer<S>])> + '_ {
        self.slots
            .iter()
            .map(|(&slot, players)| (slot, players.as_slice()))
    }

    /// Every placed player with its slot.
    pub fn players(&self) -> impl Iterator<Item = (S::Slot, &SharedPlayer<S>)> + '_ {
        self.slots
            .iter()
            .flat_map(|(&slot, players)| players.iter().map(move |p| (slot, p)))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.values().map(Vec::len).sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn starters(&self) -> impl Iterator<Item = &SharedPlayer<S>> + '_ {
        self.players()
            .filter(|(slot, _)| slot.is_starting())
            .map(|(_, p)| p)
    }

    /// Identities of the players in starting slots.
    #[must_use]
    pub fn starter_ids(&self) -> BTreeSet<PlayerId> {
        self.starters().map(|p| p.id()).collect()
    }

    pub fn benched(&self) -> impl Iterator<Item = &SharedPlayer<S>> + '_ {
        self.players()
            .filter(|(slot, _)| slot.is_bench())
            .map(|(_, p)| p)
    }

    pub fn injured(&self) -> impl Iterator<Item = &SharedPlayer<S>> + '_ {
        self.players()
            .filter(|(slot, _)| slot.is_injured())
            .map(|(_, p)| p)
    }

    #[must_use]
    pub fn slot_of(&self, id: PlayerId) -> Option<S::Slot> {
        self.players()
            .find(|(_, p)| p.id() == id)
            .map(|(slot, _)| slot)
    }

    #[must_use]
    pub fn contains(&self, id: PlayerId) -> bool {
        self.slot_of(id).is_some()
    }

    /// Moves needed to turn this lineup into `target`.
    ///
    /// Players absent from `target` produce no transition.
    #[must_use]
    pub fn transitions_to(&self, target: &Self) -> Vec<Transition<S>> {
        self.players()
            .filter_map(|(from, player)| {
                let to = target.slot_of(player.id())?;
                (from != to).then(|| Transition::new(player.clone(), from, to))
            })
            .collect()
    }

    /// Number of counted moves (see [`Transition::is_counted`]) to reach `target`.
    #[must_use]
    pub fn transition_count(&self, target: &Self) -> usize {
        self.transitions_to(target)
            .iter()
            .filter(|t| t.is_counted())
            .count()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::{
        player::Player,
        sport::{Baseball, BaseballPosition, BaseballSlot},
    };

    fn player(id: u64, position: BaseballPosition) -> SharedPlayer<Baseball> {
        Arc::new(Player::with_default_slots(
            PlayerId::new(id),
            format!("p{id}"),
            position,
        ))
    }

    #[test]
    fn test_place_rejects_duplicates() {
        let p = player(1, BaseballPosition::Catcher);
        let mut lineup = Lineup::<Baseball>::new();
        lineup.place(BaseballSlot::Catcher, p.clone()).unwrap();
        let err = lineup.place(BaseballSlot::Bench, p).unwrap_err();
        assert_eq!(
            err,
            LineupError::PlayerAlreadyPlaced {
                player: PlayerId::new(1)
            }
        );
    }

    #[test]
    fn test_with_player_leaves_parent_untouched() {
        let parent = Lineup::<Baseball>::new();
        let child = parent
            .with_player(BaseballSlot::Catcher, player(1, BaseballPosition::Catcher))
            .unwrap();
        assert!(parent.is_empty());
        assert_eq!(child.len(), 1);
    }

    #[test]
    fn test_views() {
        let lineup = Lineup::<Baseball>::from_slots([
            (BaseballSlot::Catcher, vec![player(1, BaseballPosition::Catcher)]),
            (BaseballSlot::Bench, vec![player(2, BaseballPosition::Short)]),
            (BaseballSlot::Injured, vec![player(3, BaseballPosition::Left)]),
        ])
        .unwrap();
        assert_eq!(lineup.starter_ids(), BTreeSet::from([PlayerId::new(1)]));
        assert_eq!(lineup.benched().count(), 1);
        assert_eq!(lineup.injured().count(), 1);
        assert_eq!(lineup.slot_of(PlayerId::new(2)), Some(BaseballSlot::Bench));
        assert_eq!(lineup.slot_of(PlayerId::new(9)), None);
    }

    #[test]
    fn test_transitions_skip_pitching_and_injured_in_count() {
        let hitter = player(1, BaseballPosition::First);
        let pitcher = player(2, BaseballPosition::Starter);
        let current = Lineup::<Baseball>::from_slots([
            (BaseballSlot::First, vec![hitter.clone()]),
            (BaseballSlot::Pitcher, vec![pitcher.clone()]),
        ])
        .unwrap();
        let target = Lineup::<Baseball>::from_slots([
            (BaseballSlot::Bench, vec![hitter, pitcher]),
        ])
        .unwrap();
        let transitions = current.transitions_to(&target);
        assert_eq!(transitions.len(), 2);
        assert_eq!(current.transition_count(&target), 1);
        assert_eq!(transitions[0].to_string(), "p1\t1B\tBE");
    }

    #[test]
    fn test_deserialize_rejects_duplicates() {
        let json = r#"{
            "C": [{"id": 1, "name": "a", "position": "C"}],
            "BE": [{"id": 1, "name": "a", "position": "C"}]
        }"#;
        assert!(serde_json::from_str::<Lineup<Baseball>>(json).is_err());
    }
}
