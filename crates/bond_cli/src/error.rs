//! Error types for the bondpricer CLI.

use bond_models::BondError;
use bond_pricing::PricingError;
use thiserror::Error;

use crate::config::ConfigError;

/// CLI error type
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration file or environment problem
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Invalid bond parameters
    #[error(transparent)]
    Bond(#[from] BondError),

    /// Pricing engine failure
    #[error(transparent)]
    Pricing(#[from] PricingError),

    /// Invalid command-line argument
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Terminal or file IO failure
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON output failure
    #[error("Serialisation error: {0}")]
    Json(#[from] serde_json::Error),
}

impl CliError {
    /// Create an invalid argument error
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }
}

/// Result type for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;
