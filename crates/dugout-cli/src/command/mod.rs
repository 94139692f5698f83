use std::io;

use anyhow::anyhow;
use clap::{ArgAction, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use self::{draft::DraftArg, lineup::LineupArg, points::PointsArg, salary_cap::SalaryCapArg};

mod draft;
mod lineup;
mod points;
mod salary_cap;

#[derive(Debug, Clone, Parser)]
#[command(author, version, about, long_about = None)]
pub struct CommandArgs {
    /// Raise log verbosity (repeatable); `RUST_LOG` takes precedence
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,
    /// What to compute
    #[command(subcommand)]
    mode: Mode,
}

#[derive(Debug, Clone, Subcommand)]
enum Mode {
    /// Recommend the next pick of a snake draft
    Draft(#[clap(flatten)] DraftArg),
    /// Choose today's baseball lineup over the league categories
    Lineup(#[clap(flatten)] LineupArg),
    /// Choose today's basketball lineup for a points league
    Points(#[clap(flatten)] PointsArg),
    /// Build a football lineup under a salary cap
    SalaryCap(#[clap(flatten)] SalaryCapArg),
}

pub fn run() -> anyhow::Result<()> {
    let args = CommandArgs::parse();
    init_logging(args.verbose)?;
    match args.mode {
        Mode::Draft(arg) => draft::run(&arg)?,
        Mode::Lineup(arg) => lineup::run(&arg)?,
        Mode::Points(arg) => points::run(&arg)?,
        Mode::SalaryCap(arg) => salary_cap::run(&arg)?,
    }
    Ok(())
}

/// Logs to stderr so reports written to stdout stay parseable.
fn init_logging(verbose: u8) -> anyhow::Result<()> {
    let level = match verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(format!("dugout={level}"))?,
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init()
        .map_err(|err| anyhow!(err))
}
