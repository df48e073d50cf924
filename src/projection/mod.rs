//! Projection engine for ten-year economic indicator projections

mod engine;
mod impact;
mod records;
mod state;

pub use engine::{
    generate, generate_seeded, ProjectionConfig, ProjectionEngine, DEFAULT_START_YEAR,
    PROJECTION_YEARS,
};
pub use impact::{
    combined_impact, impact_multiplier, ImpactMultipliers, CAPITAL_GAINS_REFERENCE_RATE,
    CORPORATE_REFERENCE_RATE, FEDERAL_REFERENCE_RATE,
};
pub use records::{Indicator, ProjectionResult, ProjectionSummary, YearlyRecord};
pub use state::BaseValues;
