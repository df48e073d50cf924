//! Environment-driven simulator settings
//!
//! Reads:
//!   TAXSIM_START_YEAR  first projection year (default 2023)
//!   TAXSIM_SEED        RNG seed; unset means a fresh thread RNG per run
//!   TAXSIM_OUTPUT      path for CSV output

use std::env;
use std::path::PathBuf;
use std::str::FromStr;

use crate::error::{Result, SimulatorError};
use crate::projection::{ProjectionConfig, DEFAULT_START_YEAR, PROJECTION_YEARS};

pub const START_YEAR_VAR: &str = "TAXSIM_START_YEAR";
pub const SEED_VAR: &str = "TAXSIM_SEED";
pub const OUTPUT_VAR: &str = "TAXSIM_OUTPUT";

#[derive(Debug, Clone, PartialEq)]
pub struct SimulatorConfig {
    pub start_year: i32,
    pub seed: Option<u64>,
    pub output: Option<PathBuf>,
}

impl Default for SimulatorConfig {
    fn default() -> Self {
        Self {
            start_year: DEFAULT_START_YEAR,
            seed: None,
            output: None,
        }
    }
}

impl SimulatorConfig {
    /// Load from the process environment
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load from any key lookup, so callers and tests can supply their own source
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(year) = parse_var::<i32, _>(&lookup, START_YEAR_VAR)? {
            config.start_year = validate_start_year(START_YEAR_VAR, year)?;
        }
        config.seed = parse_var::<u64, _>(&lookup, SEED_VAR)?;
        config.output = lookup(OUTPUT_VAR)
            .filter(|v| !v.trim().is_empty())
            .map(PathBuf::from);

        Ok(config)
    }

    /// Apply command-line values on top of the environment
    pub fn apply_overrides(
        &mut self,
        start_year: Option<i32>,
        seed: Option<u64>,
        output: Option<PathBuf>,
    ) -> Result<()> {
        if let Some(year) = start_year {
            self.start_year = validate_start_year("--start-year", year)?;
        }
        if seed.is_some() {
            self.seed = seed;
        }
        if output.is_some() {
            self.output = output;
        }
        Ok(())
    }

    pub fn projection_config(&self) -> ProjectionConfig {
        ProjectionConfig {
            start_year: self.start_year,
        }
    }
}

/// The final projection year must still fit in an `i32`
pub fn validate_start_year(key: &str, year: i32) -> Result<i32> {
    match year.checked_add(PROJECTION_YEARS as i32 - 1) {
        Some(_) => Ok(year),
        None => Err(SimulatorError::InvalidConfig {
            key: key.to_string(),
            value: year.to_string(),
            reason: format!("final year of a {}-year projection overflows", PROJECTION_YEARS),
        }),
    }
}

fn parse_var<T, L>(lookup: &L, key: &str) -> Result<Option<T>>
where
    L: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match lookup(key) {
        None => Ok(None),
        Some(raw) if raw.trim().is_empty() => Ok(None),
        Some(raw) => raw
            .trim()
            .parse::<T>()
            .map(Some)
            .map_err(|e| SimulatorError::InvalidConfig {
                key: key.to_string(),
                value: raw.clone(),
                reason: e.to_string(),
            }),
    }
}
