//! Scenario runner for batch projections
//!
//! Runs many rate scenarios against one engine. Each scenario gets its own
//! RNG seeded from the runner's base seed and the scenario's position, so a
//! batch is reproducible no matter how rayon schedules it.

use log::info;
use rayon::prelude::*;
use serde::Serialize;

use crate::projection::{ProjectionConfig, ProjectionEngine, ProjectionResult};
use crate::error::{Result, SimulatorError};
use crate::rates::{RateControl, RateKind, Scenario, TaxRates};

/// Mix a base seed with a scenario index into an independent stream seed
pub fn derive_seed(base_seed: u64, index: usize) -> u64 {
    // splitmix64 finaliser
    let mut z = base_seed ^ (index as u64).wrapping_mul(0x9E37_79B9_7F4A_7C15);
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}

/// Batch runner holding one engine and a base seed
#[derive(Debug, Clone)]
pub struct ScenarioRunner {
    engine: ProjectionEngine,
    base_seed: u64,
}

impl ScenarioRunner {
    pub fn new(engine: ProjectionEngine, base_seed: u64) -> Self {
        Self { engine, base_seed }
    }

    pub fn with_config(config: ProjectionConfig, base_seed: u64) -> Self {
        Self::new(ProjectionEngine::new(config), base_seed)
    }

    /// Run a single scenario at position `index`
    pub fn run(&self, rates: &TaxRates, index: usize) -> ProjectionResult {
        self.engine.project_seeded(rates, derive_seed(self.base_seed, index))
    }

    /// Run every scenario in parallel, returning results in input order
    pub fn run_batch(&self, scenarios: &[Scenario]) -> Vec<ScenarioOutcome> {
        info!("Running {} scenarios", scenarios.len());
        scenarios
            .par_iter()
            .enumerate()
            .map(|(index, scenario)| ScenarioOutcome {
                name: scenario.name.clone(),
                result: self.run(&scenario.rates, index),
            })
            .collect()
    }

    pub fn engine(&self) -> &ProjectionEngine {
        &self.engine
    }
}

impl Default for ScenarioRunner {
    fn default() -> Self {
        Self::new(ProjectionEngine::default(), 0)
    }
}

/// A scenario's name paired with its projection
#[derive(Debug, Clone)]
pub struct ScenarioOutcome {
    pub name: String,
    pub result: ProjectionResult,
}

impl ScenarioOutcome {
    pub fn summary(&self) -> ScenarioSummary {
        let summary = self.result.summary();
        let first = self.result.records.first();
        ScenarioSummary {
            name: self.name.clone(),
            federal: self.result.rates.federal,
            corporate: self.result.rates.corporate,
            capital_gains: self.result.rates.capital_gains,
            combined_impact: self.result.combined_impact,
            first_revenue: first.map(|r| r.revenue).unwrap_or(0.0),
            first_growth: first.map(|r| r.growth).unwrap_or(0.0),
            final_revenue: summary.final_revenue,
            final_mobility: summary.final_mobility,
            mean_revenue: if summary.total_years == 0 {
                0.0
            } else {
                summary.total_revenue / summary.total_years as f64
            },
            mean_growth: summary.mean_growth,
        }
    }
}

/// Flat per-scenario row for CSV output
#[derive(Debug, Clone, Serialize)]
pub struct ScenarioSummary {
    pub name: String,
    pub federal: f64,
    pub corporate: f64,
    pub capital_gains: f64,
    pub combined_impact: f64,
    pub first_revenue: f64,
    pub first_growth: f64,
    pub final_revenue: f64,
    pub final_mobility: f64,
    pub mean_revenue: f64,
    pub mean_growth: f64,
}

/// Largest grid `rate_grid` will build
pub const MAX_GRID_SCENARIOS: usize = 100_000;

/// Percentages from `min` to `max` inclusive in `step` increments
///
/// `step` must be a finite whole multiple of the slider step so every
/// point lands on a distinct slider position.
fn percent_steps(min: f64, max: f64, step: f64) -> Result<Vec<f64>> {
    let slider_steps = (step / RateControl::STEP_PCT).round();
    if !step.is_finite()
        || slider_steps < 1.0
        || (step / RateControl::STEP_PCT - slider_steps).abs() > 1e-9
    {
        return Err(SimulatorError::InvalidConfig {
            key: "step".to_string(),
            value: step.to_string(),
            reason: format!(
                "must be a positive multiple of {} percentage points",
                RateControl::STEP_PCT
            ),
        });
    }

    let count = ((max - min) / step + 1e-9).floor().max(0.0) as usize;
    Ok((0..=count)
        .map(|i| ((min + i as f64 * step) * 10.0).round() / 10.0)
        .collect())
}

/// Cartesian grid over every slider range at `step_pct` spacing
pub fn rate_grid(step_pct: f64) -> Result<Vec<Scenario>> {
    let axes = RateKind::ALL
        .iter()
        .map(|kind| {
            let control = kind.control();
            percent_steps(control.min_pct, control.max_pct, step_pct)
        })
        .collect::<Result<Vec<_>>>()?;

    let total = axes
        .iter()
        .try_fold(1usize, |acc, axis| acc.checked_mul(axis.len()))
        .filter(|&n| n <= MAX_GRID_SCENARIOS)
        .ok_or_else(|| SimulatorError::InvalidConfig {
            key: "step".to_string(),
            value: step_pct.to_string(),
            reason: format!("grid would exceed {} scenarios", MAX_GRID_SCENARIOS),
        })?;

    let mut scenarios = Vec::with_capacity(total);
    for &federal in &axes[0] {
        for &corporate in &axes[1] {
            for &capital_gains in &axes[2] {
                scenarios.push(Scenario::new(
                    format!("F{:.1}-C{:.1}-G{:.1}", federal, corporate, capital_gains),
                    TaxRates::from_percentages(federal, corporate, capital_gains),
                ));
            }
        }
    }
    Ok(scenarios)
}
