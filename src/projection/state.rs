//! Running baseline state for a projection

/// Starting government revenue (trillion USD)
pub const INITIAL_REVENUE: f64 = 3.5;
/// Starting economic growth (%)
pub const INITIAL_GROWTH: f64 = 2.5;
/// Starting tax compliance (%)
pub const INITIAL_COMPLIANCE: f64 = 83.0;
/// Starting economic mobility index
pub const INITIAL_MOBILITY: f64 = 50.0;

/// Year-over-year compounding factors applied after each emitted year
pub const REVENUE_GROWTH_FACTOR: f64 = 1.02;
pub const GROWTH_DECAY_FACTOR: f64 = 0.99;
pub const COMPLIANCE_GROWTH_FACTOR: f64 = 1.005;
pub const MOBILITY_GROWTH_FACTOR: f64 = 1.01;

/// Baseline values of the four indicators, independent of tax-rate impact
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BaseValues {
    /// Projection year these baselines apply to
    pub year: i32,

    pub revenue: f64,
    pub growth: f64,
    pub compliance: f64,
    pub mobility: f64,
}

impl BaseValues {
    /// Seed baselines for the first projection year
    pub fn initial(start_year: i32) -> Self {
        Self {
            year: start_year,
            revenue: INITIAL_REVENUE,
            growth: INITIAL_GROWTH,
            compliance: INITIAL_COMPLIANCE,
            mobility: INITIAL_MOBILITY,
        }
    }

    /// Compound every baseline by one year
    pub fn advance_year(&mut self) {
        self.year += 1;
        self.revenue *= REVENUE_GROWTH_FACTOR;
        self.growth *= GROWTH_DECAY_FACTOR;
        self.compliance *= COMPLIANCE_GROWTH_FACTOR;
        self.mobility *= MOBILITY_GROWTH_FACTOR;
    }

    /// Baselines for every year of a projection of `years` length
    pub fn trajectory(start_year: i32, years: usize) -> Vec<BaseValues> {
        let mut state = Self::initial(start_year);
        let mut out = Vec::with_capacity(years);
        for offset in 0..years {
            if offset > 0 {
                state.advance_year();
            }
            out.push(state);
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_advance_compounds_each_baseline() {
        let mut state = BaseValues::initial(2023);
        state.advance_year();
        assert_eq!(state.year, 2024);
        assert_relative_eq!(state.revenue, 3.57, epsilon = 1e-12);
        assert_relative_eq!(state.growth, 2.475, epsilon = 1e-12);
        assert_relative_eq!(state.compliance, 83.415, epsilon = 1e-12);
        assert_relative_eq!(state.mobility, 50.5, epsilon = 1e-12);
    }

    #[test]
    fn test_trajectory_final_year() {
        let path = BaseValues::trajectory(2023, 11);
        assert_eq!(path.len(), 11);
        let last = path.last().unwrap();
        assert_eq!(last.year, 2033);
        assert_relative_eq!(last.revenue, 3.5 * 1.02_f64.powi(10), epsilon = 1e-9);
        assert_relative_eq!(last.growth, 2.5 * 0.99_f64.powi(10), epsilon = 1e-9);
    }
}
