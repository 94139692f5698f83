use std::path::PathBuf;

use anyhow::Context as _;
use dugout_lineup::LineupOptimizer;
use tracing::info;

use crate::{
    schema::{report::Report, scenario::LineupScenario},
    util::{Output, read_scenario_file},
};

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct LineupArg {
    /// Lineup scenario JSON file
    #[arg(long)]
    scenario: PathBuf,
    /// Output file path
    #[arg(long)]
    output: Option<PathBuf>,
}

pub(crate) fn run(arg: &LineupArg) -> anyhow::Result<()> {
    let LineupArg { scenario, output } = arg;
    let scenario: LineupScenario = read_scenario_file("lineup", scenario)?;
    scenario
        .settings
        .check(&scenario.lineup)
        .context("Current lineup does not fit the league settings")?;

    let decision = LineupOptimizer::new(scenario.optimizer)
        .optimize(
            &scenario.lineup,
            &scenario.settings,
            &scenario.scoring,
            &scenario.projections,
            &scenario.probable_starters,
        )
        .context("Failed to optimize the lineup")?;
    for transition in &decision.transitions {
        info!(%transition, "move");
    }

    Output::save_json(&Report::new(decision), output.clone())
}
