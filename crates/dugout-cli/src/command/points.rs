use std::path::PathBuf;

use anyhow::Context as _;
use dugout_lineup::{best_points_lineup, possible_lineups};
use dugout_roster::{BasketballSlot, Slot as _};

use crate::{
    schema::{report::Report, scenario::PointsScenario},
    util::{Output, read_scenario_file},
};

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct PointsArg {
    /// Points-league scenario JSON file
    #[arg(long)]
    scenario: PathBuf,
    /// Output file path
    #[arg(long)]
    output: Option<PathBuf>,
}

pub(crate) fn run(arg: &PointsArg) -> anyhow::Result<()> {
    let PointsArg { scenario, output } = arg;
    let scenario: PointsScenario = read_scenario_file("points", scenario)?;
    scenario
        .settings
        .check(&scenario.lineup)
        .context("Current lineup does not fit the league settings")?;

    let slots: Vec<_> = BasketballSlot::starting_slots().collect();
    let possible = possible_lineups(&scenario.lineup, &scenario.settings, &slots, &scenario.lineup);
    let best = best_points_lineup(
        &scenario.lineup,
        &possible.lineups,
        &scenario.projections,
        &scenario.scoring,
    )
    .context("No lineup can be built from the current roster")?;

    Output::save_json(&Report::new(best), output.clone())
}
