//! Tax rate inputs and scenario loading

mod data;
pub mod loader;

pub use data::{RateBar, RateControl, RateKind, TaxRates};
pub use loader::{load_scenarios, load_scenarios_from_reader, Scenario};
