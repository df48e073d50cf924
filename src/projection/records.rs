//! Yearly output records for projections

use serde::{Deserialize, Serialize};

use crate::rates::TaxRates;

/// The four economic indicators tracked per year
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Indicator {
    Revenue,
    Growth,
    Compliance,
    Mobility,
}

impl Indicator {
    pub const ALL: [Indicator; 4] = [
        Indicator::Revenue,
        Indicator::Growth,
        Indicator::Compliance,
        Indicator::Mobility,
    ];

    /// Maximum relative jitter applied to this indicator each year
    pub fn jitter_amplitude(self) -> f64 {
        match self {
            Indicator::Revenue => 0.05,
            Indicator::Growth => 0.10,
            Indicator::Compliance => 0.025,
            Indicator::Mobility => 0.05,
        }
    }
}

/// A single year of projection output
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct YearlyRecord {
    pub year: i32,
    /// Government revenue (trillion USD)
    pub revenue: f64,
    /// Economic growth (%)
    pub growth: f64,
    /// Tax compliance (%)
    pub compliance: f64,
    /// Economic mobility index
    pub mobility: f64,
}

impl YearlyRecord {
    pub fn get(&self, indicator: Indicator) -> f64 {
        match indicator {
            Indicator::Revenue => self.revenue,
            Indicator::Growth => self.growth,
            Indicator::Compliance => self.compliance,
            Indicator::Mobility => self.mobility,
        }
    }
}

/// Complete projection result
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectionResult {
    /// Rates the projection was generated from
    pub rates: TaxRates,

    /// Average of the three impact multipliers
    pub combined_impact: f64,

    /// Yearly records in ascending year order
    pub records: Vec<YearlyRecord>,
}

impl ProjectionResult {
    pub fn new(rates: TaxRates, combined_impact: f64) -> Self {
        Self {
            rates,
            combined_impact,
            records: Vec::new(),
        }
    }

    /// Add a yearly record
    pub fn add_record(&mut self, record: YearlyRecord) {
        self.records.push(record);
    }

    /// First projection year, shown on the summary cards
    pub fn current(&self) -> Option<&YearlyRecord> {
        self.records.first()
    }

    /// Percent change between the first two records: `(first - second) / second * 100`
    ///
    /// Returns 0 when fewer than two records exist. A zero second value
    /// yields a non-finite trend.
    pub fn trend(&self, indicator: Indicator) -> f64 {
        if self.records.len() < 2 {
            return 0.0;
        }
        let current = self.records[0].get(indicator);
        let previous = self.records[1].get(indicator);
        (current - previous) / previous * 100.0
    }

    /// Values of one indicator across all years
    pub fn series(&self, indicator: Indicator) -> Vec<(i32, f64)> {
        self.records
            .iter()
            .map(|r| (r.year, r.get(indicator)))
            .collect()
    }

    /// Get summary statistics
    pub fn summary(&self) -> ProjectionSummary {
        let n = self.records.len();
        let mean = |indicator: Indicator| -> f64 {
            if n == 0 {
                0.0
            } else {
                self.records.iter().map(|r| r.get(indicator)).sum::<f64>() / n as f64
            }
        };

        ProjectionSummary {
            total_years: n as u32,
            first_year: self.records.first().map(|r| r.year).unwrap_or(0),
            last_year: self.records.last().map(|r| r.year).unwrap_or(0),
            combined_impact: self.combined_impact,
            total_revenue: self.records.iter().map(|r| r.revenue).sum(),
            mean_growth: mean(Indicator::Growth),
            mean_compliance: mean(Indicator::Compliance),
            mean_mobility: mean(Indicator::Mobility),
            final_revenue: self.records.last().map(|r| r.revenue).unwrap_or(0.0),
            final_mobility: self.records.last().map(|r| r.mobility).unwrap_or(0.0),
        }
    }
}

/// Summary statistics for a projection
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectionSummary {
    pub total_years: u32,
    pub first_year: i32,
    pub last_year: i32,
    pub combined_impact: f64,
    pub total_revenue: f64,
    pub mean_growth: f64,
    pub mean_compliance: f64,
    pub mean_mobility: f64,
    pub final_revenue: f64,
    pub final_mobility: f64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn record(year: i32, revenue: f64, growth: f64) -> YearlyRecord {
        YearlyRecord {
            year,
            revenue,
            growth,
            compliance: 80.0,
            mobility: 50.0,
        }
    }

    #[test]
    fn test_trend_compares_first_against_second() {
        let mut result = ProjectionResult::new(TaxRates::reference(), 1.0);
        result.add_record(record(2023, 3.5, 2.5));
        result.add_record(record(2024, 3.57, 2.5));

        assert_relative_eq!(
            result.trend(Indicator::Revenue),
            (3.5 - 3.57) / 3.57 * 100.0,
            epsilon = 1e-12
        );
        assert_relative_eq!(result.trend(Indicator::Growth), 0.0);
    }

    #[test]
    fn test_trend_needs_two_records() {
        let mut result = ProjectionResult::new(TaxRates::reference(), 1.0);
        assert_eq!(result.trend(Indicator::Revenue), 0.0);
        result.add_record(record(2023, 3.5, 2.5));
        assert_eq!(result.trend(Indicator::Revenue), 0.0);
    }

    #[test]
    fn test_trend_zero_denominator_is_not_finite() {
        let mut result = ProjectionResult::new(TaxRates::reference(), 1.0);
        result.add_record(record(2023, 3.5, 2.5));
        result.add_record(record(2024, 0.0, 2.5));
        assert!(!result.trend(Indicator::Revenue).is_finite());
    }

    #[test]
    fn test_summary() {
        let mut result = ProjectionResult::new(TaxRates::reference(), 1.0);
        result.add_record(record(2023, 1.0, 2.0));
        result.add_record(record(2024, 3.0, 4.0));

        let summary = result.summary();
        assert_eq!(summary.total_years, 2);
        assert_eq!(summary.first_year, 2023);
        assert_eq!(summary.last_year, 2024);
        assert_relative_eq!(summary.total_revenue, 4.0);
        assert_relative_eq!(summary.mean_growth, 3.0);
        assert_relative_eq!(summary.final_revenue, 3.0);
    }

    #[test]
    fn test_empty_summary() {
        let summary = ProjectionResult::new(TaxRates::reference(), 1.0).summary();
        assert_eq!(summary.total_years, 0);
        assert_eq!(summary.mean_growth, 0.0);
    }
}
