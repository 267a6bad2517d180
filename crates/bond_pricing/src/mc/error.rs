//! Error types for the Monte Carlo engine.
//!
//! Everything except [`PricingError::Cancelled`] is detected before the
//! first trial runs.

use bond_models::BondError;
use thiserror::Error;

/// Monte Carlo pricing error.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PricingError {
    /// Invalid engine argument (trial count, worker count).
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Invalid bond or model parameter.
    #[error(transparent)]
    Bond(#[from] BondError),

    /// The run was cancelled before all trials completed.
    #[error("Simulation cancelled")]
    Cancelled,

    /// The worker pool could not be created.
    #[error("Thread pool error: {0}")]
    ThreadPool(String),
}
