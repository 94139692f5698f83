use std::collections::BTreeMap;

use dugout_roster::{Lineup, LineupSettings, SharedPlayer, Slot as _, Sport, safe_ratio};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// A player available for a salary-capped contest.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct SalaryCandidate<S: Sport> {
    pub player: SharedPlayer<S>,
    /// Projected fantasy points.
    pub projection: f64,
    pub salary: u32,
}

impl<S: Sport> SalaryCandidate<S> {
    #[must_use]
    pub fn new(player: SharedPlayer<S>, projection: f64, salary: u32) -> Self {
        Self {
            player,
            projection,
            salary,
        }
    }

    /// Projected points per thousand of salary.
    #[must_use]
    pub fn value(&self) -> f64 {
        safe_ratio(self.projection * 1000.0, f64::from(self.salary))
    }
}

fn default_initial_size() -> usize {
    1
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct SalaryCapConfig<S: Sport> {
    pub cap: u32,
    /// Candidates per position in the first search space.
    #[serde(default = "default_initial_size")]
    pub initial_size: usize,
    /// Minimum value a candidate at a position must exceed; unlisted positions keep
    /// every candidate.
    #[serde(default)]
    pub value_thresholds: BTreeMap<S::Position, f64>,
}

impl<S: Sport> SalaryCapConfig<S> {
    #[must_use]
    pub fn new(cap: u32) -> Self {
        Self {
            cap,
            initial_size: default_initial_size(),
            value_thresholds: BTreeMap::new(),
        }
    }
}

/// Best lineup found under the cap.
#[derive(Debug, Clone, Serialize)]
#[serde(bound = "")]
pub struct SalaryCapLineup<S: Sport> {
    pub lineup: Lineup<S>,
    pub points: f64,
    pub salary: u32,
    /// Candidates per position searched when the lineup was found.
    pub search_space: BTreeMap<S::Position, usize>,
    /// Expansions performed before a feasible lineup appeared.
    pub expansions: usize,
}

/// Builds the best lineup whose total salary fits under the cap.
///
/// Each position keeps a pool of its candidates ranked by projection and filtered by
/// value. The search starts from the top `initial_size` of every pool and adds one
/// candidate at a time, always the next-ranked candidate with the best value across all
/// positions, until some assignment of the searched candidates to the starting slots of
/// `settings` fits under the cap. Returns `None` when the pools run out first.
pub fn best_salary_cap_lineup<S: Sport>(
    candidates: &[SalaryCandidate<S>],
    settings: &LineupSettings<S>,
    config: &SalaryCapConfig<S>,
) -> Option<SalaryCapLineup<S>> {
    let pools = ranked_pools(candidates, config);
    let slots: Vec<S::Slot> = settings
        .iter()
        .filter(|(slot, _)| slot.is_starting())
        .flat_map(|(slot, count)| std::iter::repeat_n(slot, count))
        .collect();

    let mut space: BTreeMap<S::Position, usize> = pools
        .iter()
        .map(|(&position, pool)| (position, config.initial_size.min(pool.len())))
        .collect();
    let mut expansions = 0;
    loop {
        let searched: Vec<&SalaryCandidate<S>> = pools
            .iter()
            .flat_map(|(position, pool)| &pool[..space[position]])
            .copied()
            .collect();
        let mut search = Enumeration {
            slots: &slots,
            cap: config.cap,
            pool: &searched,
            chosen: Vec::with_capacity(slots.len()),
            best: None,
            best_points: 0.0,
            feasible: 0,
        };
        search.run(0, 0, 0.0);
        debug!(
            searched = searched.len(),
            feasible = search.feasible,
            "salary cap search level finished"
        );

        if let Some((assignment, salary)) = search.best {
            let mut lineup = Lineup::new();
            let mut points = 0.0;
            for (slot, index) in assignment {
                let candidate = searched[index];
                points += candidate.projection;
                // players are distinct within an assignment, so placement cannot collide
                lineup.place(slot, candidate.player.clone()).ok()?;
            }
            info!(points, salary, expansions, "salary cap lineup found");
            return Some(SalaryCapLineup {
                lineup,
                points,
                salary,
                search_space: space,
                expansions,
            });
        }

        let position = next_expansion(&pools, &space)?;
        if let Some(size) = space.get_mut(&position) {
            *size += 1;
        }
        expansions += 1;
    }
}

/// Candidates per position, ranked by projection, keeping those whose value exceeds the
/// position's threshold.
fn ranked_pools<'a, S: Sport>(
    candidates: &'a [SalaryCandidate<S>],
    config: &SalaryCapConfig<S>,
) -> BTreeMap<S::Position, Vec<&'a SalaryCandidate<S>>> {
    let mut pools: BTreeMap<S::Position, Vec<&SalaryCandidate<S>>> = BTreeMap::new();
    for candidate in candidates {
        let position = candidate.player.position();
        let passes = config
            .value_thresholds
            .get(&position)
            .is_none_or(|&threshold| candidate.value() > threshold);
        if passes {
            pools.entry(position).or_default().push(candidate);
        }
    }
    for pool in pools.values_mut() {
        pool.sort_by(|a, b| b.projection.total_cmp(&a.projection));
    }
    pools
}

/// Position whose next-ranked candidate has the best value, the first position on ties.
fn next_expansion<S: Sport>(
    pools: &BTreeMap<S::Position, Vec<&SalaryCandidate<S>>>,
    space: &BTreeMap<S::Position, usize>,
) -> Option<S::Position> {
    pools
        .iter()
        .filter_map(|(position, pool)| Some((*position, pool.get(space[position])?.value())))
        .fold(None, |best: Option<(S::Position, f64)>, (position, value)| match best {
            Some((_, best_value)) if best_value >= value => best,
            _ => Some((position, value)),
        })
        .map(|(position, _)| position)
}

/// Depth-first assignment of searched candidates to starting slots.
struct Enumeration<'a, S: Sport> {
    slots: &'a [S::Slot],
    cap: u32,
    pool: &'a [&'a SalaryCandidate<S>],
    chosen: Vec<(S::Slot, usize)>,
    /// Best assignment so far with its salary.
    best: Option<(Vec<(S::Slot, usize)>, u32)>,
    feasible: usize,
    best_points: f64,
}

impl<S: Sport> Enumeration<'_, S> {
    fn is_chosen(&self, candidate: &SalaryCandidate<S>) -> bool {
        let id = candidate.player.id();
        self.chosen
            .iter()
            .any(|&(_, index)| self.pool[index].player.id() == id)
    }

    fn run(&mut self, depth: usize, salary: u32, points: f64) {
        let Some(&slot) = self.slots.get(depth) else {
            self.feasible += 1;
            if self.best.is_none() || points > self.best_points {
                self.best = Some((self.chosen.clone(), salary));
                self.best_points = points;
            }
            return;
        };

        // repeated slots take candidates in increasing index order
        let start = match self.chosen.last() {
            Some(&(previous, index)) if previous == slot => index + 1,
            _ => 0,
        };
        for index in start..self.pool.len() {
            let candidate = self.pool[index];
            if !candidate.player.can_play(slot) || self.is_chosen(candidate) {
                continue;
            }
            let Some(salary) = salary
                .checked_add(candidate.salary)
                .filter(|&salary| salary <= self.cap)
            else {
                continue;
            };
            self.chosen.push((slot, index));
            self.run(depth + 1, salary, points + candidate.projection);
            self.chosen.pop();
        }
    }
}
