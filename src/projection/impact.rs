//! Impact multipliers derived from tax rates
//!
//! Each multiplier is centered at 1.0 at its reference rate and moves
//! linearly with the rate's deviation, scaled by a sensitivity coefficient.

use crate::rates::TaxRates;

/// Reference federal income tax rate (multiplier = 1.0)
pub const FEDERAL_REFERENCE_RATE: f64 = 0.25;
/// Reference corporate tax rate
pub const CORPORATE_REFERENCE_RATE: f64 = 0.21;
/// Reference capital gains tax rate
pub const CAPITAL_GAINS_REFERENCE_RATE: f64 = 0.15;

/// Sensitivity of the economy to the federal rate
pub const FEDERAL_SENSITIVITY: f64 = 0.5;
/// Sensitivity of the economy to the corporate rate
pub const CORPORATE_SENSITIVITY: f64 = 0.3;
/// Sensitivity of the economy to the capital gains rate
pub const CAPITAL_GAINS_SENSITIVITY: f64 = 0.2;

/// The three per-rate multipliers for a set of rates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ImpactMultipliers {
    pub federal: f64,
    pub corporate: f64,
    pub capital_gains: f64,
}

impl ImpactMultipliers {
    /// Compute multipliers for the given rates
    ///
    /// No validation is performed: negative or NaN rates flow straight
    /// through the arithmetic.
    pub fn from_rates(rates: &TaxRates) -> Self {
        Self {
            federal: impact_multiplier(rates.federal, FEDERAL_REFERENCE_RATE, FEDERAL_SENSITIVITY),
            corporate: impact_multiplier(
                rates.corporate,
                CORPORATE_REFERENCE_RATE,
                CORPORATE_SENSITIVITY,
            ),
            capital_gains: impact_multiplier(
                rates.capital_gains,
                CAPITAL_GAINS_REFERENCE_RATE,
                CAPITAL_GAINS_SENSITIVITY,
            ),
        }
    }

    /// Unweighted average of the three multipliers
    pub fn combined(&self) -> f64 {
        (self.federal + self.corporate + self.capital_gains) / 3.0
    }
}

/// `1 + (rate - reference) * sensitivity`
pub fn impact_multiplier(rate: f64, reference: f64, sensitivity: f64) -> f64 {
    1.0 + (rate - reference) * sensitivity
}

/// Combined impact scalar driving all four indicator trajectories
pub fn combined_impact(rates: &TaxRates) -> f64 {
    ImpactMultipliers::from_rates(rates).combined()
}
