use std::path::PathBuf;

use anyhow::Context as _;
use dugout_lineup::best_salary_cap_lineup;

use crate::{
    schema::{report::Report, scenario::SalaryCapScenario},
    util::{Output, read_scenario_file},
};

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct SalaryCapArg {
    /// Salary-cap contest scenario JSON file
    #[arg(long)]
    scenario: PathBuf,
    /// Output file path
    #[arg(long)]
    output: Option<PathBuf>,
}

pub(crate) fn run(arg: &SalaryCapArg) -> anyhow::Result<()> {
    let SalaryCapArg { scenario, output } = arg;
    let scenario: SalaryCapScenario = read_scenario_file("salary cap", scenario)?;

    let best = best_salary_cap_lineup(&scenario.candidates, &scenario.settings, &scenario.config)
        .with_context(|| {
            format!(
                "No lineup fits under the salary cap of {}",
                scenario.config.cap
            )
        })?;

    Output::save_json(&Report::new(best), output.clone())
}
