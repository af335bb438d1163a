// src/error.rs

//! Error types for the revenue simulator.

use thiserror::Error;

/// Result type alias for simulator operations.
pub type Result<T> = std::result::Result<T, SimulationError>;

#[derive(Error, Debug)]
pub enum SimulationError {
    /// A simulation parameter is outside its allowed range.
    #[error("Invalid parameter: {message}")]
    InvalidParameter { message: String },

    /// The parameter file could not be read or parsed.
    #[error("Invalid configuration: {message}")]
    Config { message: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

impl SimulationError {
    /// Create an invalid parameter error.
    pub fn invalid_parameter(message: impl Into<String>) -> Self {
        Self::InvalidParameter {
            message: message.into(),
        }
    }

    /// Create a configuration error.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }
}
