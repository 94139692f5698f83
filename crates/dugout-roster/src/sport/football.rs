use serde::{Deserialize, Serialize};

use super::{Position, Slot, SlotKind, Sport, Stat};

/// Football, as used by salary-cap (daily fantasy) contests.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Football;

impl Sport for Football {
    type Slot = FootballSlot;
    type Position = FootballPosition;
    type Stat = FootballStat;

    fn default_slots(position: FootballPosition) -> &'static [FootballSlot] {
        use FootballSlot as S;
        match position {
            FootballPosition::Quarterback => &[S::Quarterback, S::Bench],
            FootballPosition::RunningBack => &[S::RunningBack, S::Flex, S::Bench],
            FootballPosition::WideReceiver => &[S::WideReceiver, S::Flex, S::Bench],
            FootballPosition::TightEnd => &[S::TightEnd, S::Flex, S::Bench],
            FootballPosition::Defense => &[S::Defense, S::Bench],
            FootballPosition::Kicker => &[S::Kicker, S::Bench],
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
pub enum FootballSlot {
    #[display("QB")]
    #[serde(rename = "QB")]
    Quarterback,
    #[display("RB")]
    #[serde(rename = "RB")]
    RunningBack,
    #[display("WR")]
    #[serde(rename = "WR")]
    WideReceiver,
    #[display("TE")]
    #[serde(rename = "TE")]
    TightEnd,
    #[display("D/ST")]
    #[serde(rename = "D/ST")]
    Defense,
    #[display("K")]
    #[serde(rename = "K")]
    Kicker,
    /// Accepts running backs, wide receivers and tight ends.
    #[display("FLEX")]
    #[serde(rename = "FLEX")]
    Flex,
    #[display("BE")]
    #[serde(rename = "BE")]
    Bench,
    #[display("IR")]
    #[serde(rename = "IR")]
    Injured,
}

impl Slot for FootballSlot {
    const ALL: &'static [Self] = &[
        Self::Quarterback,
        Self::RunningBack,
        Self::WideReceiver,
        Self::TightEnd,
        Self::Defense,
        Self::Kicker,
        Self::Flex,
        Self::Bench,
        Self::Injured,
    ];

    fn kind(self) -> SlotKind {
        match self {
            Self::Flex => SlotKind::Flex,
            Self::Bench => SlotKind::Bench,
            Self::Injured => SlotKind::Injured,
            _ => SlotKind::Positional,
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
pub enum FootballPosition {
    #[display("QB")]
    #[serde(rename = "QB")]
    Quarterback,
    #[display("RB")]
    #[serde(rename = "RB")]
    RunningBack,
    #[display("WR")]
    #[serde(rename = "WR")]
    WideReceiver,
    #[display("TE")]
    #[serde(rename = "TE")]
    TightEnd,
    #[display("DST")]
    #[serde(rename = "DST")]
    Defense,
    #[display("K")]
    #[serde(rename = "K")]
    Kicker,
}

impl FootballPosition {
    pub const ALL: [Self; 6] = [
        Self::Quarterback,
        Self::RunningBack,
        Self::WideReceiver,
        Self::TightEnd,
        Self::Defense,
        Self::Kicker,
    ];
}

impl Position for FootballPosition {}

/// Offensive football scoring stats. Every one is a counting stat.
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
pub enum FootballStat {
    #[display("PASS YDS")]
    #[serde(rename = "PASS YDS")]
    PassYards,
    #[display("PASS TD")]
    #[serde(rename = "PASS TD")]
    PassTouchdowns,
    #[display("INT")]
    #[serde(rename = "INT")]
    Interceptions,
    #[display("RUSH YDS")]
    #[serde(rename = "RUSH YDS")]
    RushYards,
    #[display("RUSH TD")]
    #[serde(rename = "RUSH TD")]
    RushTouchdowns,
    #[display("REC")]
    #[serde(rename = "REC")]
    Receptions,
    #[display("REC YDS")]
    #[serde(rename = "REC YDS")]
    ReceivingYards,
    #[display("REC TD")]
    #[serde(rename = "REC TD")]
    ReceivingTouchdowns,
    #[display("FUML")]
    #[serde(rename = "FUML")]
    FumblesLost,
}

impl Stat for FootballStat {
    fn is_summable(self) -> bool {
        true
    }

    fn rounding_digits(self) -> i32 {
        0
    }
}
