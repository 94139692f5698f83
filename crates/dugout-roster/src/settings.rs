use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::{
    lineup::Lineup,
    sport::{Slot as _, Sport},
};

#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum SettingsError {
    #[display("slot {slot} holds {count} players but the league allows {limit}")]
    SlotOverfilled {
        slot: String,
        count: usize,
        limit: usize,
    },
}

/// League roster configuration: slot → required count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(bound = "", transparent)]
pub struct LineupSettings<S: Sport> {
    counts: BTreeMap<S::Slot, usize>,
}

impl<S: Sport> Default for LineupSettings<S> {
    fn default() -> Self {
        Self {
            counts: BTreeMap::new(),
        }
    }
}

impl<S: Sport> FromIterator<(S::Slot, usize)> for LineupSettings<S> {
    fn from_iter<I: IntoIterator<Item = (S::Slot, usize)>>(iter: I) -> Self {
        Self {
            counts: iter.into_iter().collect(),
        }
    }
}

impl<S: Sport> LineupSettings<S> {
    /// Required count for `slot`; zero when the league does not use it.
    #[must_use]
    pub fn count(&self, slot: S::Slot) -> usize {
        self.counts.get(&slot).copied().unwrap_or(0)
    }

    pub fn iter(&self) -> impl Iterator<Item = (S::Slot, usize)> + '_ {
        self.counts.iter().map(|(&slot, &count)| (slot, count))
    }

    /// Number of players one drafter rosters: every slot except injured.
    #[must_use]
    pub fn draftable_total(&self) -> usize {
        self.iter()
            .filter(|(slot, _)| !slot.is_injured())
            .map(|(_, count)| count)
            .sum()
    }

    /// Checks that no slot of `lineup` holds more players than allowed.
    pub fn check(&self, lineup: &Lineup<S>) -> Result<(), SettingsError> {
        for (slot, players) in lineup.slots() {
            let limit = self.count(slot);
            if players.len() > limit {
                return Err(SettingsError::SlotOverfilled {
                    slot: slot.to_string(),
                    count: players.len(),
                    limit,
                });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        sport::{Baseball, BaseballSlot},
        testing,
    };

    #[test]
    fn test_totals_exclude_injured() {
        let settings = LineupSettings::<Baseball>::from_iter([
            (BaseballSlot::Catcher, 1),
            (BaseballSlot::Outfield, 3),
            (BaseballSlot::Bench, 2),
            (BaseballSlot::Injured, 2),
        ]);
        assert_eq!(settings.draftable_total(), 6);
        assert_eq!(settings.count(BaseballSlot::Short), 0);
    }

    #[test]
    fn test_check_reports_overfilled_slot() {
        let settings = LineupSettings::<Baseball>::from_iter([(BaseballSlot::Catcher, 1)]);
        let lineup = Lineup::from_slots([(
            BaseballSlot::Catcher,
            vec![testing::catcher(1), testing::catcher(2)],
        )])
        .unwrap();
        let err = settings.check(&lineup).unwrap_err();
        assert_eq!(err.to_string(), "slot C holds 2 players but the league allows 1");
    }

    #[test]
    fn test_deserialize_from_slot_codes() {
        let settings: LineupSettings<Baseball> =
            serde_json::from_str(r#"{"C": 1, "OF": 3, "BE": 4}"#).unwrap();
        assert_eq!(settings.count(BaseballSlot::Outfield), 3);
        assert_eq!(settings.draftable_total(), 8);
    }
}
