use std::{
    cmp::Reverse,
    collections::{BTreeMap, HashMap, HashSet},
    f64::consts::SQRT_2,
};

use dugout_roster::{
    Lineup, LineupSettings, Player, PlayerId, Projections, ScoringSetting, SharedPlayer,
    Slot as _, Sport, Stats,
};
use dugout_search::{StateEvaluator, ValueVector};
use dugout_stats::{descriptive::DescriptiveStats, normal::normal_cdf, ranking::rank_values};
use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::{
    game_info::DraftGameInfo,
    sport::{AvailabilityModel, DraftSport},
    state::DraftState,
};

/// How category totals become a drafter's value.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StandingsModel {
    /// Expected rotisserie points: one point plus the probability of beating each
    /// other drafter, per category.
    #[default]
    Expected,
    /// Tie-averaged rank per category, 1 for the worst total.
    Rank,
}

/// Tunables of [`DraftStateEvaluator`].
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(bound = "", default)]
pub struct DraftEvaluatorConfig<S: DraftSport> {
    /// Overrides the sport's default availability model.
    pub availability: Option<AvailabilityModel>,
    pub standings_model: StandingsModel,
    /// Standard deviation of each category's final total across a league.
    ///
    /// Categories missing here use the spread of the drafters' current totals.
    pub category_std_devs: BTreeMap<S::Stat, f64>,
}

impl<S: DraftSport> Default for DraftEvaluatorConfig<S> {
    fn default() -> Self {
        Self {
            availability: None,
            standings_model: StandingsModel::default(),
            category_std_devs: BTreeMap::new(),
        }
    }
}

type SlotFillKey<S> = (<S as Sport>::Slot, usize);

/// Values draft states as standings points per drafter.
///
/// Terminal states are valued from the drafted rosters alone. Heuristic values also
/// credit every open starting slot with the average projection of the best players
/// still available for it.
#[derive(Debug)]
pub struct DraftStateEvaluator<S: DraftSport> {
    projections: Projections<S>,
    scoring: Vec<ScoringSetting<S::Stat>>,
    availability: AvailabilityModel,
    standings_model: StandingsModel,
    category_std_devs: BTreeMap<S::Stat, f64>,
    slot_fill_cache: HashMap<SlotFillKey<S>, (Stats<S::Stat>, Vec<PlayerId>)>,
}

impl<S: DraftSport> DraftStateEvaluator<S> {
    #[must_use]
    pub fn new(
        projections: Projections<S>,
        scoring: Vec<ScoringSetting<S::Stat>>,
        config: DraftEvaluatorConfig<S>,
    ) -> Self {
        Self {
            projections,
            scoring,
            availability: config.availability.unwrap_or_else(S::availability),
            standings_model: config.standings_model,
            category_std_devs: config.category_std_devs,
            slot_fill_cache: HashMap::new(),
        }
    }

    /// Likelihood `player` is in a real lineup on a given day.
    fn playing_likelihood(&self, player: &Player<S>) -> f64 {
        let playing_time = self
            .projections
            .get(player.id())
            .map_or(0.0, |stats| stats.value(S::PLAYING_TIME));
        self.availability.likelihood(playing_time)
    }

    /// Share of the season a benched player is expected to start.
    ///
    /// A bench player starts when at least one occupant of the starting slots it can
    /// fill is out, and the player itself is available. Pitchers always count fully.
    #[must_use]
    pub fn start_likelihood(
        &self,
        player: &Player<S>,
        lineup: &Lineup<S>,
        settings: &LineupSettings<S>,
    ) -> f64 {
        if player.is_pitcher() {
            return 1.0;
        }
        let mut all_playing = 1.0;
        for slot in S::Slot::starting_slots().filter(|&slot| player.can_play(slot)) {
            let occupants = lineup.players_in(slot);
            if occupants.len() < settings.count(slot) {
                all_playing = 0.0;
                break;
            }
            for occupant in occupants {
                all_playing *= self.playing_likelihood(occupant);
            }
        }
        (1.0 - all_playing) * self.playing_likelihood(player)
    }

    /// Projected season totals of one roster, bench players weighted by their
    /// start likelihood.
    #[must_use]
    pub fn season_projection(
        &self,
        lineup: &Lineup<S>,
        settings: &LineupSettings<S>,
    ) -> Stats<S::Stat> {
        let mut total = self.projections.total_for(lineup.starters());
        for player in lineup.benched() {
            let weight = self.start_likelihood(player, lineup, settings);
            total += &self.projections.for_player(player) * weight;
        }
        total
    }

    /// Estimated value of filling `drafter`'s open starting slots from the remaining pool.
    fn slot_fill_estimate(&mut self, state: &DraftState<S>, drafter: usize) -> Stats<S::Stat> {
        let settings = &state.info().lineup_settings;
        let lineup = state.lineup(drafter);
        let mut open = settings
            .iter()
            .filter(|&(slot, count)| slot.is_starting() && lineup.count_in(slot) < count)
            .map(|(slot, count)| (slot, count - lineup.count_in(slot)))
            .collect::<Vec<_>>();
        open.sort_by_key(|&(slot, _)| (Reverse(slot.draft_priority()), slot));

        let mut claimed = HashSet::new();
        let mut estimate = Stats::new();
        for (slot, need) in open {
            let cached = self.slot_fill_cache.get(&(slot, need)).cloned();
            let (average, chosen) = match cached {
                Some(cached) => cached,
                None => {
                    let chosen = state
                        .available()
                        .filter(|p| p.can_play(slot) && !p.is_injured())
                        .filter(|p| !claimed.contains(&p.id()))
                        .take(need)
                        .collect::<Vec<_>>();
                    let average = self.average_projection(&chosen);
                    let chosen = chosen.iter().map(|p| p.id()).collect::<Vec<_>>();
                    self.slot_fill_cache
                        .insert((slot, need), (average.clone(), chosen.clone()));
                    (average, chosen)
                }
            };
            claimed.extend(chosen);
            #[expect(clippy::cast_precision_loss)]
            let need = need as f64;
            estimate += &average * need;
        }
        estimate
    }

    #[expect(clippy::cast_precision_loss)]
    fn average_projection(&self, players: &[&SharedPlayer<S>]) -> Stats<S::Stat> {
        if players.is_empty() {
            return Stats::new();
        }
        let total = self.projections.total_for(players.iter().copied());
        &total * (1.0 / players.len() as f64)
    }

    /// Converts per-drafter totals into standings points.
    #[must_use]
    pub fn standings(&self, totals: &[Stats<S::Stat>]) -> ValueVector {
        let mut points = ValueVector::zeros(totals.len());
        for setting in &self.scoring {
            let values = totals
                .iter()
                .map(|stats| stats.value(setting.stat))
                .collect::<Vec<_>>();
            match self.standings_model {
                StandingsModel::Expected => {
                    let std_dev = self.category_std_dev(setting.stat, &values);
                    for (i, points_i) in expected_points(&values, std_dev, setting.reverse)
                        .into_iter()
                        .enumerate()
                    {
                        points[i] += points_i;
                    }
                }
                StandingsModel::Rank => {
                    for (i, rank) in rank_values(&values, setting.reverse).into_iter().enumerate() {
                        points[i] += rank;
                    }
                }
            }
        }
        points
    }

    fn category_std_dev(&self, stat: S::Stat, values: &[f64]) -> f64 {
        self.category_std_devs.get(&stat).copied().unwrap_or_else(|| {
            DescriptiveStats::new(values.iter().copied()).map_or(0.0, |stats| stats.std_dev)
        })
    }

    fn value(&mut self, state: &DraftState<S>, with_slot_fill: bool) -> ValueVector {
        let settings = &state.info().lineup_settings;
        let mut totals = state
            .lineups()
            .iter()
            .map(|lineup| self.season_projection(lineup, settings))
            .collect::<Vec<_>>();
        if with_slot_fill {
            for (drafter, total) in totals.iter_mut().enumerate() {
                *total += self.slot_fill_estimate(state, drafter);
            }
        }
        let points = self.standings(&totals);
        trace!(?points, heuristic = with_slot_fill, "valued draft state");
        points
    }
}

/// Expected standings points of each value in one category.
///
/// The difference of two drafters' final totals is modelled as normal with variance
/// `2 * std_dev²`; each pair hands out one point split by win probability.
fn expected_points(values: &[f64], std_dev: f64, reverse: bool) -> Vec<f64> {
    let mut points = vec![1.0; values.len()];
    let spread = std_dev * SQRT_2;
    for i in 0..values.len() {
        for j in i + 1..values.len() {
            // probability j finishes above i
            let j_higher = normal_cdf(values[j] - values[i], 0.0, spread);
            let j_wins = if reverse { 1.0 - j_higher } else { j_higher };
            points[j] += j_wins;
            points[i] += 1.0 - j_wins;
        }
    }
    points
}

impl<S: DraftSport> StateEvaluator<DraftState<S>> for DraftStateEvaluator<S> {
    fn heuristic(&mut self, state: &DraftState<S>, _info: &DraftGameInfo<S>) -> ValueVector {
        self.value(state, true)
    }

    fn terminal_state_value(
        &mut self,
        state: &DraftState<S>,
        _info: &DraftGameInfo<S>,
    ) -> ValueVector {
        self.value(state, false)
    }
}
