//! Tax Policy Simulator - ten-year economic projections driven by tax rates
//!
//! This library provides:
//! - The projection generator (impact multipliers, compounding baselines, jitter)
//! - Rate inputs with slider ranges and the fixed suggested-rate preset
//! - Dashboard view models (metric cards, chart series) and pure formatters
//! - Parallel, reproducible batch runs over many rate scenarios

pub mod config;
pub mod dashboard;
pub mod error;
pub mod format;
pub mod output;
pub mod projection;
pub mod rates;
pub mod scenario;

// Re-export commonly used types
pub use config::SimulatorConfig;
pub use error::SimulatorError;
pub use projection::{generate, generate_seeded, ProjectionEngine, ProjectionResult, YearlyRecord};
pub use rates::{Scenario, TaxRates};
pub use scenario::ScenarioRunner;
