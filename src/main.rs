//! Tax Policy Simulator CLI
//!
//! Runs one ten-year projection and prints the dashboard, or writes the
//! yearly records as CSV/JSON.
//!
//! Environment (overridden by flags): TAXSIM_START_YEAR, TAXSIM_SEED, TAXSIM_OUTPUT

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use log::{info, warn};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use tax_policy_simulator::{
    dashboard::render_text,
    format::NumberLocale,
    output::{write_json, write_records_csv},
    projection::ProjectionEngine,
    rates::RateKind,
    SimulatorConfig, TaxRates,
};

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Csv,
    Json,
}

#[derive(Parser, Debug)]
#[command(
    name = "tax_policy_simulator",
    about = "US tax policy and economic impact simulator"
)]
struct Cli {
    /// Federal income tax rate in percent (slider range 10-40)
    #[arg(long, default_value_t = 25.0)]
    federal: f64,

    /// Corporate tax rate in percent (slider range 15-35)
    #[arg(long, default_value_t = 21.0)]
    corporate: f64,

    /// Capital gains tax rate in percent (slider range 0-30)
    #[arg(long, default_value_t = 15.0)]
    capital_gains: f64,

    /// Use the suggested rates (28% / 23% / 18%) instead of the rate flags
    #[arg(long)]
    optimize: bool,

    /// Pass rates through without snapping them to the slider ranges
    #[arg(long)]
    raw: bool,

    /// Seed for reproducible jitter
    #[arg(long)]
    seed: Option<u64>,

    /// First projection year
    #[arg(long)]
    start_year: Option<i32>,

    /// Print the noise-free expected trajectory
    #[arg(long)]
    expected: bool,

    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Write output to a file instead of stdout
    #[arg(long)]
    output: Option<PathBuf>,
}

impl Cli {
    fn rates(&self) -> TaxRates {
        if self.optimize {
            return TaxRates::suggested_optimum();
        }
        if self.raw {
            return TaxRates::from_percentages(self.federal, self.corporate, self.capital_gains);
        }

        for (kind, pct) in [
            (RateKind::Federal, self.federal),
            (RateKind::Corporate, self.corporate),
            (RateKind::CapitalGains, self.capital_gains),
        ] {
            let control = kind.control();
            if !control.contains(pct) {
                warn!(
                    "{} {:.1}% outside {:.0}-{:.0}%, clamping",
                    kind.label(),
                    pct,
                    control.min_pct,
                    control.max_pct
                );
            }
        }
        TaxRates::from_slider_percentages(self.federal, self.corporate, self.capital_gains)
    }
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let mut config = SimulatorConfig::from_env().context("reading environment")?;
    config.apply_overrides(cli.start_year, cli.seed, cli.output.clone())?;

    let rates = cli.rates();
    let engine = ProjectionEngine::new(config.projection_config());
    let result = if cli.expected {
        engine.expected(&rates)
    } else {
        match config.seed {
            Some(seed) => engine.project_seeded(&rates, seed),
            None => engine.project(&rates, &mut rand::rng()),
        }
    };
    info!(
        "Projected {} years with combined impact {:.4}",
        result.records.len(),
        result.combined_impact
    );

    let mut writer: Box<dyn Write> = match &config.output {
        Some(path) => Box::new(BufWriter::new(
            File::create(path).with_context(|| format!("creating {}", path.display()))?,
        )),
        None => Box::new(io::stdout().lock()),
    };

    match cli.format {
        OutputFormat::Text => {
            write!(writer, "{}", render_text(&result, &NumberLocale::en_us()))?;
        }
        OutputFormat::Csv => write_records_csv(&mut writer, &result)?,
        OutputFormat::Json => {
            write_json(&mut writer, &result)?;
            writeln!(writer)?;
        }
    }
    writer.flush()?;

    if let Some(path) = &config.output {
        info!("Output written to {}", path.display());
    }
    Ok(())
}
