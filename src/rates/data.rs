//! Tax rate inputs and their slider controls

use serde::{Deserialize, Serialize};

use crate::projection::{
    CAPITAL_GAINS_REFERENCE_RATE, CORPORATE_REFERENCE_RATE, FEDERAL_REFERENCE_RATE,
};

/// The three tax rates driving a projection, as fractions (0.25 = 25%)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TaxRates {
    pub federal: f64,
    pub corporate: f64,
    pub capital_gains: f64,
}

impl TaxRates {
    pub fn new(federal: f64, corporate: f64, capital_gains: f64) -> Self {
        Self {
            federal,
            corporate,
            capital_gains,
        }
    }

    /// Rates at which every impact multiplier is exactly 1.0
    pub fn reference() -> Self {
        Self::new(
            FEDERAL_REFERENCE_RATE,
            CORPORATE_REFERENCE_RATE,
            CAPITAL_GAINS_REFERENCE_RATE,
        )
    }

    /// Fixed suggestion behind the "Find Optimal Tax Rates" action.
    ///
    /// This is a preset, not the result of searching the model.
    pub fn suggested_optimum() -> Self {
        Self::new(0.28, 0.23, 0.18)
    }

    /// Build rates from whole-number percentages (25.0 -> 0.25)
    pub fn from_percentages(federal_pct: f64, corporate_pct: f64, capital_gains_pct: f64) -> Self {
        Self::new(
            federal_pct / 100.0,
            corporate_pct / 100.0,
            capital_gains_pct / 100.0,
        )
    }

    /// Build rates from percentages after snapping each into its slider range
    pub fn from_slider_percentages(
        federal_pct: f64,
        corporate_pct: f64,
        capital_gains_pct: f64,
    ) -> Self {
        Self::from_percentages(
            RateKind::Federal.control().clamp_percent(federal_pct),
            RateKind::Corporate.control().clamp_percent(corporate_pct),
            RateKind::CapitalGains.control().clamp_percent(capital_gains_pct),
        )
    }

    pub fn get(&self, kind: RateKind) -> f64 {
        match kind {
            RateKind::Federal => self.federal,
            RateKind::Corporate => self.corporate,
            RateKind::CapitalGains => self.capital_gains,
        }
    }

    /// Named rates for the rate comparison bar chart
    pub fn comparison_bars(&self) -> Vec<RateBar> {
        RateKind::ALL
            .iter()
            .map(|&kind| RateBar {
                name: kind.short_name(),
                rate: self.get(kind),
            })
            .collect()
    }
}

impl Default for TaxRates {
    fn default() -> Self {
        Self::reference()
    }
}

/// One bar of the rate comparison chart
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RateBar {
    pub name: &'static str,
    pub rate: f64,
}

/// Which of the three tax rates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RateKind {
    Federal,
    Corporate,
    CapitalGains,
}

impl RateKind {
    pub const ALL: [RateKind; 3] = [RateKind::Federal, RateKind::Corporate, RateKind::CapitalGains];

    pub fn label(self) -> &'static str {
        match self {
            RateKind::Federal => "Federal Income Tax Rate",
            RateKind::Corporate => "Corporate Tax Rate",
            RateKind::CapitalGains => "Capital Gains Tax Rate",
        }
    }

    pub fn short_name(self) -> &'static str {
        match self {
            RateKind::Federal => "Federal Income",
            RateKind::Corporate => "Corporate",
            RateKind::CapitalGains => "Capital Gains",
        }
    }

    /// Input range of the rate's slider
    pub fn control(self) -> RateControl {
        match self {
            RateKind::Federal => RateControl::new(10.0, 40.0),
            RateKind::Corporate => RateControl::new(15.0, 35.0),
            RateKind::CapitalGains => RateControl::new(0.0, 30.0),
        }
    }
}

/// Slider range in whole-number percent
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RateControl {
    pub min_pct: f64,
    pub max_pct: f64,
    pub step_pct: f64,
}

impl RateControl {
    pub const STEP_PCT: f64 = 0.1;

    pub fn new(min_pct: f64, max_pct: f64) -> Self {
        Self {
            min_pct,
            max_pct,
            step_pct: Self::STEP_PCT,
        }
    }

    /// Clamp into range and snap to the nearest step
    pub fn clamp_percent(&self, pct: f64) -> f64 {
        let clamped = pct.clamp(self.min_pct, self.max_pct);
        let steps = ((clamped - self.min_pct) / self.step_pct).round();
        // Round to the step's decimal precision so 25.000000000000004 reads as 25.0
        let snapped = ((self.min_pct + steps * self.step_pct) * 10.0).round() / 10.0;
        snapped.min(self.max_pct)
    }

    pub fn contains(&self, pct: f64) -> bool {
        pct >= self.min_pct && pct <= self.max_pct
    }
}
