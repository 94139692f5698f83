use std::{path::PathBuf, sync::Arc};

use anyhow::Context as _;
use dugout_draft::{
    DraftGameInfo, DraftSport, DraftState, DraftStateEvaluator, Recommendation, rank_by_value,
    recommend_pick,
};
use dugout_roster::{Baseball, Basketball};
use dugout_search::{DepthLimit, NoCutoff};
use tracing::info;

use crate::{
    schema::{report::Report, scenario::DraftScenario},
    util::{Output, read_scenario_file},
};

#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, derive_more::FromStr)]
pub enum DraftSportKind {
    #[default]
    Baseball,
    Basketball,
}

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct DraftArg {
    /// Draft scenario JSON file
    #[arg(long)]
    scenario: PathBuf,
    #[arg(long, default_value = "baseball")]
    sport: DraftSportKind,
    /// Picks searched below each candidate before falling back to the heuristic
    /// (searches to the end of the draft when omitted)
    #[arg(long)]
    depth: Option<usize>,
    /// Undrafted players considered at each pick (overrides the scenario)
    #[arg(long)]
    top_k: Option<usize>,
    /// Output file path
    #[arg(long)]
    output: Option<PathBuf>,
}

pub(crate) fn run(arg: &DraftArg) -> anyhow::Result<()> {
    match arg.sport {
        DraftSportKind::Baseball => run_sport::<Baseball>(arg),
        DraftSportKind::Basketball => run_sport::<Basketball>(arg),
    }
}

fn run_sport<S: DraftSport>(arg: &DraftArg) -> anyhow::Result<()> {
    let DraftArg {
        scenario,
        sport: _,
        depth,
        top_k,
        output,
    } = arg;
    let scenario: DraftScenario<S> = read_scenario_file("draft", scenario)?;

    let max_value =
        DraftGameInfo::<S>::standings_max_value(scenario.scoring.len(), scenario.drafters);
    let mut game_info = DraftGameInfo::new(scenario.drafters, max_value, scenario.settings);
    if let Some(top_k) = top_k.or(scenario.top_k) {
        game_info = game_info.with_top_k(top_k);
    }

    scenario.projections.warn_missing(&scenario.players);
    let players = match &scenario.ranking {
        Some(ranking) => {
            let ranked = rank_by_value(&scenario.players, &scenario.projections, ranking);
            info!(players = ranked.len(), "pool ranked by value above replacement");
            ranked.into_iter().map(|entry| entry.player).collect()
        }
        None => scenario.players,
    };

    let mut state = DraftState::new(Arc::new(game_info), players)
        .context("Failed to set up the draft")?;
    for &player in &scenario.picks {
        state = state
            .draft_player(player)
            .with_context(|| format!("Failed to replay the pick of player {player}"))?;
    }
    info!(
        drafted = state.drafted_count(),
        drafter = state.current_drafter(),
        "draft replayed"
    );

    let mut evaluator =
        DraftStateEvaluator::new(scenario.projections, scenario.scoring, scenario.evaluator);
    let recommendation: Recommendation<S> = match depth {
        Some(depth) => recommend_pick(&state, &mut evaluator, DepthLimit(*depth)),
        None => recommend_pick(&state, &mut evaluator, NoCutoff),
    }
    .context("Failed to recommend a pick")?;

    Output::save_json(&Report::new(recommendation), output.clone())
}
