use serde::{Deserialize, Serialize};

use super::{Position, Slot, SlotKind, Sport, Stat, safe_ratio};
use crate::stats::Stats;

/// Rotisserie baseball.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Baseball;

impl Sport for Baseball {
    type Slot = BaseballSlot;
    type Position = BaseballPosition;
    type Stat = BaseballStat;

    fn default_slots(position: BaseballPosition) -> &'static [BaseballSlot] {
        use BaseballSlot as S;
        match position {
            BaseballPosition::Catcher => &[S::Catcher, S::Util, S::Bench],
            BaseballPosition::First => &[S::First, S::CornerInfield, S::Util, S::Bench],
            BaseballPosition::Second => &[S::Second, S::MiddleInfield, S::Util, S::Bench],
            BaseballPosition::Third => &[S::Third, S::CornerInfield, S::Util, S::Bench],
            BaseballPosition::Short => &[S::Short, S::MiddleInfield, S::Util, S::Bench],
            BaseballPosition::Left | BaseballPosition::Center | BaseballPosition::Right => {
                &[S::Outfield, S::Util, S::Bench]
            }
            BaseballPosition::DesignatedHitter => &[S::Util, S::Bench],
            BaseballPosition::Starter | BaseballPosition::Reliever => &[S::Pitcher, S::Bench],
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
pub enum BaseballSlot {
    #[display("C")]
    #[serde(rename = "C")]
    Catcher,
    #[display("1B")]
    #[serde(rename = "1B")]
    First,
    #[display("2B")]
    #[serde(rename = "2B")]
    Second,
    #[display("3B")]
    #[serde(rename = "3B")]
    Third,
    #[display("SS")]
    #[serde(rename = "SS")]
    Short,
    #[display("OF")]
    #[serde(rename = "OF")]
    Outfield,
    #[display("P")]
    #[serde(rename = "P")]
    Pitcher,
    #[display("2B/SS")]
    #[serde(rename = "2B/SS")]
    MiddleInfield,
    #[display("1B/3B")]
    #[serde(rename = "1B/3B")]
    CornerInfield,
    #[display("UTIL")]
    #[serde(rename = "UTIL")]
    Util,
    #[display("BE")]
    #[serde(rename = "BE")]
    Bench,
    #[display("IL")]
    #[serde(rename = "IL")]
    Injured,
}

impl BaseballSlot {
    /// Slots filled by hitters.
    pub const HITTING: [Self; 9] = [
        Self::Catcher,
        Self::First,
        Self::Second,
        Self::Third,
        Self::Short,
        Self::Outfield,
        Self::MiddleInfield,
        Self::CornerInfield,
        Self::Util,
    ];

    #[must_use]
    pub fn is_hitting(self) -> bool {
        Self::HITTING.contains(&self)
    }
}

impl Slot for BaseballSlot {
    const ALL: &'static [Self] = &[
        Self::Catcher,
        Self::First,
        Self::Second,
        Self::Third,
        Self::Short,
        Self::Outfield,
        Self::Pitcher,
        Self::MiddleInfield,
        Self::CornerInfield,
        Self::Util,
        Self::Bench,
        Self::Injured,
    ];

    fn kind(self) -> SlotKind {
        match self {
            Self::Catcher
            | Self::First
            | Self::Second
            | Self::Third
            | Self::Short
            | Self::Outfield
            | Self::Pitcher => SlotKind::Positional,
            Self::MiddleInfield | Self::CornerInfield | Self::Util => SlotKind::Flex,
            Self::Bench => SlotKind::Bench,
            Self::Injured => SlotKind::Injured,
        }
    }

    fn is_pitching(self) -> bool {
        self == Self::Pitcher
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
pub enum BaseballPosition {
    #[display("SP")]
    #[serde(rename = "SP")]
    Starter,
    #[display("C")]
    #[serde(rename = "C")]
    Catcher,
    #[display("1B")]
    #[serde(rename = "1B")]
    First,
    #[display("2B")]
    #[serde(rename = "2B")]
    Second,
    #[display("3B")]
    #[serde(rename = "3B")]
    Third,
    #[display("SS")]
    #[serde(rename = "SS")]
    Short,
    #[display("LF")]
    #[serde(rename = "LF")]
    Left,
    #[display("CF")]
    #[serde(rename = "CF")]
    Center,
    #[display("RF")]
    #[serde(rename = "RF")]
    Right,
    #[display("DH")]
    #[serde(rename = "DH")]
    DesignatedHitter,
    #[display("RP")]
    #[serde(rename = "RP")]
    Reliever,
}

impl Position for BaseballPosition {
    fn is_pitcher(self) -> bool {
        matches!(self, Self::Starter | Self::Reliever)
    }

    fn is_relief_pitcher(self) -> bool {
        self == Self::Reliever
    }
}

/// Baseball categories.
///
/// Pitching-side hits and walks are distinct stats from their hitting counterparts.
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
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BaseballStat {
    #[display("AB")]
    #[serde(rename = "AB")]
    AtBats,
    #[display("H")]
    #[serde(rename = "H")]
    Hits,
    #[display("AVG")]
    #[serde(rename = "AVG")]
    Average,
    #[display("HR")]
    #[serde(rename = "HR")]
    HomeRuns,
    #[display("BB")]
    #[serde(rename = "BB")]
    Walks,
    #[display("PA")]
    #[serde(rename = "PA")]
    PlateAppearances,
    #[display("OBP")]
    #[serde(rename = "OBP")]
    OnBase,
    #[display("R")]
    #[serde(rename = "R")]
    Runs,
    #[display("RBI")]
    #[serde(rename = "RBI")]
    RunsBattedIn,
    #[display("SB")]
    #[serde(rename = "SB")]
    StolenBases,
    #[display("OUTS")]
    Outs,
    #[display("P_H")]
    #[serde(rename = "P_H")]
    HitsAllowed,
    #[display("P_BB")]
    #[serde(rename = "P_BB")]
    WalksAllowed,
    #[display("WHIP")]
    Whip,
    #[display("ER")]
    #[serde(rename = "ER")]
    EarnedRuns,
    #[display("ERA")]
    Era,
    #[display("K")]
    #[serde(rename = "K")]
    Strikeouts,
    #[display("W")]
    #[serde(rename = "W")]
    Wins,
    #[display("SV")]
    #[serde(rename = "SV")]
    Saves,
}

impl BaseballStat {
    #[must_use]
    pub fn is_hitting(self) -> bool {
        matches!(
            self,
            Self::AtBats
                | Self::Hits
                | Self::Average
                | Self::HomeRuns
                | Self::Walks
                | Self::PlateAppearances
                | Self::OnBase
                | Self::Runs
                | Self::RunsBattedIn
                | Self::StolenBases
        )
    }
}

impl Stat for BaseballStat {
    fn is_summable(self) -> bool {
        !matches!(self, Self::Average | Self::OnBase | Self::Whip | Self::Era)
    }

    fn rounding_digits(self) -> i32 {
        match self {
            Self::Average | Self::OnBase => 3,
            _ => 2,
        }
    }

    fn derive(self, stats: &Stats<Self>) -> Option<f64> {
        let value = match self {
            Self::Average => safe_ratio(stats.get(Self::Hits), stats.get(Self::AtBats)),
            Self::OnBase => safe_ratio(
                stats.get(Self::Hits) + stats.get(Self::Walks),
                stats.get(Self::PlateAppearances),
            ),
            Self::Era => safe_ratio(stats.get(Self::EarnedRuns) * 27.0, stats.get(Self::Outs)),
            Self::Whip => safe_ratio(
                (stats.get(Self::WalksAllowed) + stats.get(Self::HitsAllowed)) * 3.0,
                stats.get(Self::Outs),
            ),
            _ => return None,
        };
        Some(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flex_slots_follow_positional_slots() {
        let positional_max = BaseballSlot::ALL
            .iter()
            .filter(|s| s.kind().is_positional())
            .max()
            .unwrap();
        let flex_min = BaseballSlot::ALL
            .iter()
            .filter(|s| s.kind().is_flex())
            .min()
            .unwrap();
        assert!(positional_max < flex_min);
    }

    #[test]
    fn test_starting_slots_exclude_bench_and_injured() {
        let starting = BaseballSlot::starting_slots().collect::<Vec<_>>();
        assert_eq!(starting.len(), 10);
        assert!(!starting.contains(&BaseballSlot::Bench));
        assert!(!starting.contains(&BaseballSlot::Injured));
    }

    #[test]
    fn test_slot_serde_uses_league_codes() {
        let json = serde_json::to_string(&BaseballSlot::MiddleInfield).unwrap();
        assert_eq!(json, "\"2B/SS\"");
        let slot: BaseballSlot = serde_json::from_str("\"IL\"").unwrap();
        assert_eq!(slot, BaseballSlot::Injured);
    }

    #[test]
    fn test_derived_ratio_stats() {
        let stats = Stats::from_iter([
            (BaseballStat::Hits, 10.0),
            (BaseballStat::AtBats, 40.0),
            (BaseballStat::Walks, 5.0),
            (BaseballStat::PlateAppearances, 50.0),
        ]);
        assert!((stats.value(BaseballStat::Average) - 0.25).abs() < 1e-12);
        assert!((stats.value(BaseballStat::OnBase) - 0.3).abs() < 1e-12);
    }

    #[test]
    fn test_derived_stats_with_zero_denominator_are_zero() {
        let stats = Stats::from_iter([(BaseballStat::EarnedRuns, 3.0)]);
        assert_eq!(stats.value(BaseballStat::Era), 0.0);
        assert_eq!(stats.value(BaseballStat::Whip), 0.0);
        assert_eq!(stats.value(BaseballStat::Average), 0.0);
    }

    #[test]
    fn test_pitcher_positions_only_fill_pitcher_or_bench() {
        let slots = Baseball::default_slots(BaseballPosition::Reliever);
        assert_eq!(slots, &[BaseballSlot::Pitcher, BaseballSlot::Bench]);
        assert!(BaseballPosition::Reliever.is_pitcher());
        assert!(!BaseballPosition::Catcher.is_pitcher());
    }
}
