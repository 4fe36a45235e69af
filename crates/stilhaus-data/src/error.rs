//! Data layer error types.

use thiserror::Error;

/// Errors from catalog loading, configuration, and the simulated backend.
#[derive(Error, Debug)]
pub enum DataError {
    /// Reading the catalog or config file failed.
    #[error("Failed to read data file: {0}")]
    Io(#[from] std::io::Error),

    /// The catalog file is not valid JSON of the expected shape.
    #[error("Failed to parse catalog data: {0}")]
    Json(#[from] serde_json::Error),

    /// The configuration file is not valid TOML.
    #[error("Failed to parse configuration: {0}")]
    Config(#[from] toml::de::Error),

    /// A product record violates the catalog contract.
    #[error("Invalid product record {id}: {reason}")]
    InvalidRecord { id: u64, reason: &'static str },

    /// A newsletter address failed validation.
    #[error("Invalid email address: {0}")]
    InvalidEmail(String),
}
