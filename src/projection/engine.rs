//! Core projection engine for yearly economic indicator projections

use log::debug;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::impact::ImpactMultipliers;
use super::records::{Indicator, ProjectionResult, YearlyRecord};
use super::state::BaseValues;
use crate::rates::TaxRates;

/// First projection year
pub const DEFAULT_START_YEAR: i32 = 2023;

/// Number of yearly records in every projection (start year through start + 10)
pub const PROJECTION_YEARS: usize = 11;

/// Configuration for a projection run
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectionConfig {
    /// Year of the first record
    pub start_year: i32,
}

impl Default for ProjectionConfig {
    fn default() -> Self {
        Self {
            start_year: DEFAULT_START_YEAR,
        }
    }
}

/// Main projection engine
#[derive(Debug, Clone, Default)]
pub struct ProjectionEngine {
    config: ProjectionConfig,
}

impl ProjectionEngine {
    /// Create a new projection engine with the given config
    pub fn new(config: ProjectionConfig) -> Self {
        Self { config }
    }

    /// Run a projection, drawing jitter from `rng`
    ///
    /// Four uniform draws are taken per year in indicator order
    /// (revenue, growth, compliance, mobility), so a seeded generator
    /// reproduces the output exactly.
    pub fn project<R: Rng>(&self, rates: &TaxRates, rng: &mut R) -> ProjectionResult {
        self.build(rates, || rng.random::<f64>())
    }

    /// Run a projection with a fresh `StdRng` seeded from `seed`
    pub fn project_seeded(&self, rates: &TaxRates, seed: u64) -> ProjectionResult {
        let mut rng = StdRng::seed_from_u64(seed);
        self.project(rates, &mut rng)
    }

    /// Noise-free trajectory: every jitter term is zero
    pub fn expected(&self, rates: &TaxRates) -> ProjectionResult {
        self.build(rates, || 0.5)
    }

    fn build(&self, rates: &TaxRates, mut draw: impl FnMut() -> f64) -> ProjectionResult {
        let combined = ImpactMultipliers::from_rates(rates).combined();
        let inverse = 2.0 - combined;

        debug!(
            "Projecting {} years from {} with rates {:?} (combined impact {:.6})",
            PROJECTION_YEARS, self.config.start_year, rates, combined
        );

        let mut result = ProjectionResult::new(*rates, combined);
        let mut base = BaseValues::initial(self.config.start_year);

        for offset in 0..PROJECTION_YEARS {
            if offset > 0 {
                base.advance_year();
            }

            let revenue = base.revenue * combined * (1.0 + jitter(draw(), Indicator::Revenue));
            let growth = base.growth * inverse * (1.0 + jitter(draw(), Indicator::Growth));
            let compliance =
                base.compliance * inverse * (1.0 + jitter(draw(), Indicator::Compliance));
            let mobility = base.mobility * inverse * (1.0 + jitter(draw(), Indicator::Mobility));

            result.add_record(YearlyRecord {
                year: base.year,
                revenue,
                growth,
                compliance,
                mobility,
            });
        }

        result
    }
}

/// Map a uniform draw in [0, 1) to a perturbation in [-amplitude, amplitude)
fn jitter(unit: f64, indicator: Indicator) -> f64 {
    (unit - 0.5) * 2.0 * indicator.jitter_amplitude()
}

/// Generate a projection from the default start year using the thread RNG
pub fn generate(rates: &TaxRates) -> ProjectionResult {
    ProjectionEngine::default().project(rates, &mut rand::rng())
}

/// Generate a reproducible projection from the default start year
pub fn generate_seeded(rates: &TaxRates, seed: u64) -> ProjectionResult {
    ProjectionEngine::default().project_seeded(rates, seed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use proptest::prelude::{prop_assert, prop_assert_eq, proptest};

    fn assert_within_jitter(actual: f64, expected: f64, amplitude: f64) {
        let lo = expected * (1.0 - amplitude);
        let hi = expected * (1.0 + amplitude);
        assert!(
            actual >= lo.min(hi) && actual <= lo.max(hi),
            "expected {expected} ±{amplitude}, got {actual}"
        );
    }

    #[test]
    fn test_reference_scenario_first_year() {
        let result = generate(&TaxRates::reference());
        let first = result.current().unwrap();

        assert_eq!(first.year, 2023);
        assert_relative_eq!(result.combined_impact, 1.0);
        assert_within_jitter(first.revenue, 3.5, 0.05);
        assert_within_jitter(first.growth, 2.5, 0.10);
        assert_within_jitter(first.compliance, 83.0, 0.025);
        assert_within_jitter(first.mobility, 50.0, 0.05);
    }

    #[test]
    fn test_reference_scenario_tracks_baselines() {
        let result = generate_seeded(&TaxRates::reference(), 42);
        let bases = BaseValues::trajectory(DEFAULT_START_YEAR, PROJECTION_YEARS);

        for (record, base) in result.records.iter().zip(&bases) {
            assert_eq!(record.year, base.year);
            assert_within_jitter(record.revenue, base.revenue, 0.05);
            assert_within_jitter(record.growth, base.growth, 0.10);
            assert_within_jitter(record.compliance, base.compliance, 0.025);
            assert_within_jitter(record.mobility, base.mobility, 0.05);
        }
    }

    #[test]
    fn test_expected_equals_scaled_baselines() {
        let rates = TaxRates::new(0.35, 0.21, 0.15);
        let engine = ProjectionEngine::default();
        let result = engine.expected(&rates);
        let combined = result.combined_impact;
        assert_relative_eq!(combined, 1.0 + 0.05 / 3.0, epsilon = 1e-12);

        let bases = BaseValues::trajectory(DEFAULT_START_YEAR, PROJECTION_YEARS);
        for (record, base) in result.records.iter().zip(&bases) {
            assert_relative_eq!(record.revenue, base.revenue * combined, epsilon = 1e-12);
            assert_relative_eq!(record.growth, base.growth * (2.0 - combined), epsilon = 1e-12);
            assert_relative_eq!(
                record.compliance,
                base.compliance * (2.0 - combined),
                epsilon = 1e-12
            );
            assert_relative_eq!(
                record.mobility,
                base.mobility * (2.0 - combined),
                epsilon = 1e-12
            );
        }
    }

    #[test]
    fn test_same_seed_reproduces_output() {
        let rates = TaxRates::suggested_optimum();
        let a = generate_seeded(&rates, 7);
        let b = generate_seeded(&rates, 7);
        assert_eq!(a.records, b.records);
    }

    #[test]
    fn test_repeated_runs_differ_in_values_only() {
        let rates = TaxRates::reference();
        let a = generate(&rates);
        let b = generate(&rates);

        let years_a: Vec<i32> = a.records.iter().map(|r| r.year).collect();
        let years_b: Vec<i32> = b.records.iter().map(|r| r.year).collect();
        assert_eq!(years_a, years_b);
        assert_ne!(a.records, b.records);
    }

    #[test]
    fn test_custom_start_year() {
        let engine = ProjectionEngine::new(ProjectionConfig { start_year: 2030 });
        let result = engine.project_seeded(&TaxRates::reference(), 1);
        assert_eq!(result.records.first().unwrap().year, 2030);
        assert_eq!(result.records.last().unwrap().year, 2040);
    }

    #[test]
    fn test_latest_representable_start_year() {
        let engine = ProjectionEngine::new(ProjectionConfig {
            start_year: i32::MAX - 10,
        });
        let result = engine.expected(&TaxRates::reference());
        assert_eq!(result.records.len(), PROJECTION_YEARS);
        assert_eq!(result.records.last().unwrap().year, i32::MAX);
    }

    #[test]
    fn test_nan_rates_do_not_panic() {
        let result = generate(&TaxRates::new(f64::NAN, 0.21, 0.15));
        assert_eq!(result.records.len(), PROJECTION_YEARS);
        assert!(result.records.iter().all(|r| r.revenue.is_nan()));
    }

    #[test]
    fn test_jitter_bounds() {
        assert_relative_eq!(jitter(0.5, Indicator::Growth), 0.0);
        assert_relative_eq!(jitter(0.0, Indicator::Growth), -0.10);
        assert_relative_eq!(jitter(1.0, Indicator::Compliance), 0.025);
    }

    proptest! {
        #![proptest_config(proptest::test_runner::Config::with_cases(64))]

        #[test]
        fn prop_always_eleven_contiguous_years(
            seed in proptest::prelude::any::<u64>(),
            federal in -1.0f64..2.0,
            corporate in -1.0f64..2.0,
            capital_gains in -1.0f64..2.0
        ) {
            let result = generate_seeded(&TaxRates::new(federal, corporate, capital_gains), seed);
            prop_assert_eq!(result.records.len(), PROJECTION_YEARS);
            for (i, record) in result.records.iter().enumerate() {
                prop_assert_eq!(record.year, DEFAULT_START_YEAR + i as i32);
            }
        }

        #[test]
        fn prop_higher_federal_rate_shifts_expected_values(
            federal in 0.25f64..0.40,
            bump_bp in 1u32..1500,
            corporate in 0.15f64..0.35,
            capital_gains in 0.0f64..0.30
        ) {
            let engine = ProjectionEngine::default();
            let low = TaxRates::new(federal, corporate, capital_gains);
            let high = TaxRates::new(federal + bump_bp as f64 / 10_000.0, corporate, capital_gains);

            let low_result = engine.expected(&low);
            let high_result = engine.expected(&high);
            prop_assert!(high_result.combined_impact > low_result.combined_impact);

            for (lo, hi) in low_result.records.iter().zip(&high_result.records) {
                prop_assert!(hi.revenue > lo.revenue);
                prop_assert!(hi.growth < lo.growth);
                prop_assert!(hi.compliance < lo.compliance);
                prop_assert!(hi.mobility < lo.mobility);
            }
        }
    }
}
