//! Run projections for many rate scenarios
//!
//! Scenarios come from a CSV (`name,federal_pct,corporate_pct,capital_gains_pct`)
//! or, when none is given, from a grid over every slider range.
//! Writes one summary row per scenario.

use anyhow::{Context, Result};
use clap::Parser;
use log::info;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use std::time::Instant;

use tax_policy_simulator::{
    output::write_summaries_csv,
    rates::load_scenarios,
    scenario::{rate_grid, ScenarioRunner},
    SimulatorConfig,
};

#[derive(Parser, Debug)]
#[command(name = "rate_sweep", about = "Batch projections over tax rate scenarios")]
struct Args {
    /// Scenario CSV; defaults to a grid over the slider ranges
    #[arg(long)]
    scenarios: Option<PathBuf>,

    /// Grid spacing in percentage points
    #[arg(long, default_value_t = 5.0)]
    step: f64,

    /// Base seed; each scenario derives its own stream from it
    #[arg(long)]
    seed: Option<u64>,

    #[arg(long)]
    start_year: Option<i32>,

    /// Summary CSV path (stdout when omitted)
    #[arg(long)]
    output: Option<PathBuf>,
}

fn main() -> Result<()> {
    env_logger::init();

    let args = Args::parse();
    let mut config = SimulatorConfig::from_env().context("reading environment")?;
    config.apply_overrides(args.start_year, args.seed, args.output)?;
    let seed = config.seed.unwrap_or_else(rand::random);

    let start = Instant::now();
    let scenarios = match &args.scenarios {
        Some(path) => load_scenarios(path)?,
        None => rate_grid(args.step)?,
    };
    info!("Loaded {} scenarios in {:?}", scenarios.len(), start.elapsed());

    let runner = ScenarioRunner::with_config(config.projection_config(), seed);

    let run_start = Instant::now();
    let outcomes = runner.run_batch(&scenarios);
    info!("Projections complete in {:?} (seed {})", run_start.elapsed(), seed);

    let summaries: Vec<_> = outcomes.iter().map(|o| o.summary()).collect();

    let mut writer: Box<dyn Write> = match &config.output {
        Some(path) => Box::new(BufWriter::new(
            File::create(path).with_context(|| format!("creating {}", path.display()))?,
        )),
        None => Box::new(io::stdout().lock()),
    };
    write_summaries_csv(&mut writer, &summaries)?;
    writer.flush()?;

    if let Some(best) = summaries
        .iter()
        .max_by(|a, b| a.mean_revenue.total_cmp(&b.mean_revenue))
    {
        info!(
            "Highest mean revenue: {} ({:.3} trillion USD)",
            best.name, best.mean_revenue
        );
    }
    info!("Total time: {:?}", start.elapsed());
    Ok(())
}
