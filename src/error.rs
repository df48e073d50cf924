//! Error types for configuration and scenario I/O
//!
//! The projection itself cannot fail; these cover everything around it.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimulatorError {
    #[error("invalid value {value:?} for {key}: {reason}")]
    InvalidConfig {
        key: String,
        value: String,
        reason: String,
    },

    #[error("failed to read scenarios from {path}: {source}")]
    ScenarioFile {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("scenario {name:?} has a non-finite rate")]
    InvalidScenario { name: String },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, SimulatorError>;
