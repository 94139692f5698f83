use serde::{Deserialize, Serialize};

use super::{Position, Slot, SlotKind, Sport, Stat, safe_ratio};
use crate::stats::Stats;

/// Head-to-head or points-league basketball.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Basketball;

impl Sport for Basketball {
    type Slot = BasketballSlot;
    type Position = BasketballPosition;
    type Stat = BasketballStat;

    fn default_slots(position: BasketballPosition) -> &'static [BasketballSlot] {
        use BasketballSlot as S;
        match position {
            BasketballPosition::PointGuard => &[S::PointGuard, S::Guard, S::Util, S::Bench],
            BasketballPosition::ShootingGuard => {
                &[S::ShootingGuard, S::Guard, S::Util, S::Bench]
            }
            BasketballPosition::SmallForward => {
                &[S::SmallForward, S::Forward, S::Util, S::Bench]
            }
            BasketballPosition::PowerForward => {
                &[S::PowerForward, S::Forward, S::Util, S::Bench]
            }
            BasketballPosition::Center => &[S::Center, S::Util, S::Bench],
        }
    }
}

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
)]
pub enum BasketballSlot {
    #[display("PG")]
    #[serde(rename = "PG")]
    PointGuard,
    #[display("SG")]
    #[serde(rename = "SG")]
    ShootingGuard,
    #[display("SF")]
    #[serde(rename = "SF")]
    SmallForward,
    #[display("PF")]
    #[serde(rename = "PF")]
    PowerForward,
    #[display("C")]
    #[serde(rename = "C")]
    Center,
    #[display("G")]
    #[serde(rename = "G")]
    Guard,
    #[display("F")]
    #[serde(rename = "F")]
    Forward,
    #[display("UTIL")]
    #[serde(rename = "UTIL")]
    Util,
    #[display("BE")]
    #[serde(rename = "BE")]
    Bench,
    #[display("INJ")]
    #[serde(rename = "INJ")]
    Injured,
}

impl Slot for BasketballSlot {
    const ALL: &'static [Self] = &[
        Self::PointGuard,
        Self::ShootingGuard,
        Self::SmallForward,
        Self::PowerForward,
        Self::Center,
        Self::Guard,
        Self::Forward,
        Self::Util,
        Self::Bench,
        Self::Injured,
    ];

    fn kind(self) -> SlotKind {
        match self {
            Self::PointGuard
            | Self::ShootingGuard
            | Self::SmallForward
            | Self::PowerForward
            | Self::Center => SlotKind::Positional,
            Self::Guard | Self::Forward | Self::Util => SlotKind::Flex,
            Self::Bench => SlotKind::Bench,
            Self::Injured => SlotKind::Injured,
        }
    }
}

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
)]
pub enum BasketballPosition {
    #[display("PG")]
    #[serde(rename = "PG")]
    PointGuard,
    #[display("SG")]
    #[serde(rename = "SG")]
    ShootingGuard,
    #[display("SF")]
    #[serde(rename = "SF")]
    SmallForward,
    #[display("PF")]
    #[serde(rename = "PF")]
    PowerForward,
    #[display("C")]
    #[serde(rename = "C")]
    Center,
}

impl Position for BasketballPosition {}

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
)]
pub enum BasketballStat {
    #[display("MIN")]
    #[serde(rename = "MIN")]
    Minutes,
    #[display("FGM")]
    #[serde(rename = "FGM")]
    FieldGoalsMade,
    #[display("FGA")]
    #[serde(rename = "FGA")]
    FieldGoalsAttempted,
    #[display("FG%")]
    #[serde(rename = "FG%")]
    FieldGoalPct,
    #[display("FTM")]
    #[serde(rename = "FTM")]
    FreeThrowsMade,
    #[display("FTA")]
    #[serde(rename = "FTA")]
    FreeThrowsAttempted,
    #[display("FT%")]
    #[serde(rename = "FT%")]
    FreeThrowPct,
    #[display("3PT")]
    #[serde(rename = "3PT")]
    Threes,
    #[display("REB")]
    #[serde(rename = "REB")]
    Rebounds,
    #[display("AST")]
    #[serde(rename = "AST")]
    Assists,
    #[display("STL")]
    #[serde(rename = "STL")]
    Steals,
    #[display("BLK")]
    #[serde(rename = "BLK")]
    Blocks,
    #[display("TO")]
    #[serde(rename = "TO")]
    Turnovers,
    #[display("PTS")]
    #[serde(rename = "PTS")]
    Points,
}

impl Stat for BasketballStat {
    fn is_summable(self) -> bool {
        !matches!(self, Self::FieldGoalPct | Self::FreeThrowPct)
    }

    fn rounding_digits(self) -> i32 {
        if self.is_summable() { 0 } else { 3 }
    }

    fn derive(self, stats: &Stats<Self>) -> Option<f64> {
        match self {
            Self::FieldGoalPct => Some(safe_ratio(
                stats.get(Self::FieldGoalsMade),
                stats.get(Self::FieldGoalsAttempted),
            )),
            Self::FreeThrowPct => Some(safe_ratio(
                stats.get(Self::FreeThrowsMade),
                stats.get(Self::FreeThrowsAttempted),
            )),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_percentages_are_derived() {
        let stats = Stats::from_iter([
            (BasketballStat::FieldGoalsMade, 9.0),
            (BasketballStat::FieldGoalsAttempted, 20.0),
        ]);
        assert!((stats.value(BasketballStat::FieldGoalPct) - 0.45).abs() < 1e-12);
        assert_eq!(stats.value(BasketballStat::FreeThrowPct), 0.0);
    }

    #[test]
    fn test_rounding_digits() {
        assert_eq!(BasketballStat::Points.rounding_digits(), 0);
        assert_eq!(BasketballStat::FieldGoalPct.rounding_digits(), 3);
    }

    #[test]
    fn test_guard_eligibility() {
        let slots = Basketball::default_slots(BasketballPosition::PointGuard);
        assert!(slots.contains(&BasketballSlot::Guard));
        assert!(!slots.contains(&BasketballSlot::Forward));
    }
}
