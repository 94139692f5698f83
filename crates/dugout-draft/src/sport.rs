use dugout_roster::{Baseball, BaseballStat, Basketball, BasketballStat, Sport};
use serde::{Deserialize, Serialize};

/// How likely a player is to be in the lineup on a given day.
///
/// A player's playing likelihood is `min(1, playing_time / full_time) * games / days`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AvailabilityModel {
    /// Season playing time of an everyday player.
    pub full_time: f64,
    pub games_per_season: f64,
    pub days_per_season: f64,
}

impl AvailabilityModel {
    #[must_use]
    pub fn likelihood(&self, playing_time: f64) -> f64 {
        (playing_time / self.full_time).min(1.0) * (self.games_per_season / self.days_per_season)
    }
}

/// A sport whose drafts can be evaluated.
pub trait DraftSport: Sport {
    /// Stat measuring playing time.
    const PLAYING_TIME: Self::Stat;

    fn availability() -> AvailabilityModel;
}

impl DraftSport for Baseball {
    const PLAYING_TIME: BaseballStat = BaseballStat::PlateAppearances;

    fn availability() -> AvailabilityModel {
        AvailabilityModel {
            full_time: 650.0,
            games_per_season: 162.0,
            days_per_season: 183.0,
        }
    }
}

impl DraftSport for Basketball {
    const PLAYING_TIME: BasketballStat = BasketballStat::Minutes;

    fn availability() -> AvailabilityModel {
        AvailabilityModel {
            full_time: 2600.0,
            games_per_season: 82.0,
            days_per_season: 174.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_likelihood_is_capped() {
        let model = Baseball::availability();
        let everyday = model.likelihood(700.0);
        assert!((everyday - 162.0 / 183.0).abs() < 1e-12);
        let half = model.likelihood(325.0);
        assert!((half - 0.5 * 162.0 / 183.0).abs() < 1e-12);
    }
}
