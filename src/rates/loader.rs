//! Load rate scenarios from CSV
//!
//! Expected columns: `name,federal_pct,corporate_pct,capital_gains_pct`,
//! with rates given as whole-number percentages like the dashboard sliders.

use csv::Reader;
use log::debug;
use std::path::Path;

use super::TaxRates;
use crate::error::{Result, SimulatorError};

/// A named set of rates to project
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct Scenario {
    pub name: String,
    pub rates: TaxRates,
}

impl Scenario {
    pub fn new(name: impl Into<String>, rates: TaxRates) -> Self {
        Self {
            name: name.into(),
            rates,
        }
    }
}

/// Raw CSV row
#[derive(Debug, serde::Deserialize)]
struct CsvRow {
    name: String,
    federal_pct: f64,
    corporate_pct: f64,
    capital_gains_pct: f64,
}

impl CsvRow {
    fn into_scenario(self) -> Result<Scenario> {
        let pcts = [self.federal_pct, self.corporate_pct, self.capital_gains_pct];
        if pcts.iter().any(|p| !p.is_finite()) {
            return Err(SimulatorError::InvalidScenario { name: self.name });
        }

        Ok(Scenario {
            rates: TaxRates::from_percentages(
                self.federal_pct,
                self.corporate_pct,
                self.capital_gains_pct,
            ),
            name: self.name,
        })
    }
}

/// Load all scenarios from a CSV file
pub fn load_scenarios<P: AsRef<Path>>(path: P) -> Result<Vec<Scenario>> {
    let path = path.as_ref();
    let reader = Reader::from_path(path).map_err(|source| SimulatorError::ScenarioFile {
        path: path.to_path_buf(),
        source,
    })?;
    let scenarios = read_all(reader)?;
    debug!("Loaded {} scenarios from {}", scenarios.len(), path.display());
    Ok(scenarios)
}

/// Load scenarios from any reader (e.g., string buffer, stdin)
pub fn load_scenarios_from_reader<R: std::io::Read>(reader: R) -> Result<Vec<Scenario>> {
    read_all(Reader::from_reader(reader))
}

fn read_all<R: std::io::Read>(mut reader: Reader<R>) -> Result<Vec<Scenario>> {
    let mut scenarios = Vec::new();
    for result in reader.deserialize() {
        let row: CsvRow = result?;
        scenarios.push(row.into_scenario()?);
    }
    Ok(scenarios)
}
