//! bondpricer configuration management.
//!
//! Handles loading of `bondpricer.toml` with environment variable override
//! support. Every field has a default, so a missing file or a file with
//! only some sections is valid.
//!
//! ```toml
//! [simulation]
//! trials = 50000
//! seed = 42
//! workers = 4
//! antithetic = true
//!
//! [equity]
//! initial_price = 100.0
//! drift = 0.05
//! volatility = 0.20
//! shock = "standard_normal"
//!
//! [convertible]
//! conversion_ratio = 10.0
//! ```

use std::path::Path;

use bond_models::{ConvertibleParams, EquityParams, ModelParams};
use bond_pricing::mc::{MonteCarloConfig, MAX_WORKERS};
use bond_pricing::{PricingError, VarianceReduction};
use serde::Deserialize;
use thiserror::Error;

/// Environment variable overriding `simulation.trials`.
pub const ENV_TRIALS: &str = "BONDPRICER_TRIALS";
/// Environment variable overriding `simulation.seed`.
pub const ENV_SEED: &str = "BONDPRICER_SEED";
/// Environment variable overriding `simulation.workers`.
pub const ENV_WORKERS: &str = "BONDPRICER_WORKERS";

/// Largest `simulation.trials` the command line accepts
pub const MAX_TRIALS: usize = 100_000_000;

/// Simulation settings
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct SimulationConfig {
    /// Number of trial indices per pricing run
    pub trials: usize,

    /// Base seed; 0 when unset
    pub seed: Option<u64>,

    /// Fixed worker count; one per CPU thread when unset
    pub workers: Option<usize>,

    /// Antithetic pairing of the two samples per trial
    pub antithetic: bool,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            trials: 10_000,
            seed: None,
            workers: None,
            antithetic: true,
        }
    }
}

/// bondpricer configuration
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct PricerConfig {
    /// Simulation settings
    pub simulation: SimulationConfig,

    /// Underlying equity for convertibles
    pub equity: EquityParams,

    /// Conversion terms for convertibles
    pub convertible: ConvertibleParams,
}

impl PricerConfig {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::Io(format!("{}: {}", path.display(), e)))?;

        toml::from_str(&content).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Load configuration from `path`, or the defaults if the file does not exist
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Apply environment variable overrides
    pub fn with_env_override(self) -> Result<Self, ConfigError> {
        self.with_overrides(|key| std::env::var(key).ok())
    }

    /// Apply overrides from an arbitrary variable lookup
    pub fn with_overrides<F>(mut self, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(trials) = lookup(ENV_TRIALS) {
            self.simulation.trials = parse_env(ENV_TRIALS, &trials)?;
        }

        if let Some(seed) = lookup(ENV_SEED) {
            self.simulation.seed = Some(parse_env(ENV_SEED, &seed)?);
        }

        if let Some(workers) = lookup(ENV_WORKERS) {
            self.simulation.workers = Some(parse_env(ENV_WORKERS, &workers)?);
        }

        Ok(self)
    }

    /// Validate the configuration, reporting every problem at once
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut errors = Vec::new();

        let trials = self.simulation.trials;
        if trials == 0 {
            errors.push("trials must be greater than 0".to_string());
        }
        if trials > MAX_TRIALS {
            errors.push(format!(
                "trials {} exceeds maximum allowed ({})",
                trials, MAX_TRIALS
            ));
        }

        if let Some(workers) = self.simulation.workers {
            if workers == 0 || workers > MAX_WORKERS {
                errors.push(format!(
                    "workers {} must be in range [1, {}]",
                    workers, MAX_WORKERS
                ));
            }
        }

        if let Err(e) = self.model().validate() {
            errors.push(e.to_string());
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(ConfigError::Validation(errors))
        }
    }

    /// Load from file with environment overrides and validate
    pub fn load_with_env_and_validate(path: &Path) -> Result<Self, ConfigError> {
        let config = Self::load_or_default(path)?.with_env_override()?;
        config.validate()?;
        Ok(config)
    }

    /// Model parameters for the pricing models
    pub fn model(&self) -> ModelParams {
        ModelParams {
            equity: self.equity,
            convertible: self.convertible,
        }
    }

    /// Variance reduction scheme selected by `simulation.antithetic`
    pub fn variance_reduction(&self) -> VarianceReduction {
        if self.simulation.antithetic {
            VarianceReduction::Antithetic
        } else {
            VarianceReduction::None
        }
    }

    /// Engine configuration for these settings
    pub fn monte_carlo(&self) -> Result<MonteCarloConfig, PricingError> {
        MonteCarloConfig::builder()
            .n_trials(self.simulation.trials)
            .maybe_seed(self.simulation.seed)
            .maybe_n_workers(self.simulation.workers)
            .variance_reduction(self.variance_reduction())
            .model(self.model())
            .build()
    }
}

fn parse_env<T: std::str::FromStr>(var: &'static str, value: &str) -> Result<T, ConfigError> {
    value.trim().parse().map_err(|_| ConfigError::Env {
        var,
        value: value.to_string(),
    })
}

/// Configuration error type
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ConfigError {
    /// IO error reading config file
    #[error("IO error: {0}")]
    Io(String),

    /// Parse error in config file
    #[error("Parse error: {0}")]
    Parse(String),

    /// Environment variable that does not parse
    #[error("Invalid value '{value}' for {var}")]
    Env {
        /// Variable name
        var: &'static str,
        /// Raw value
        value: String,
    },

    /// Validation error
    #[error("Validation errors: {}", .0.join("; "))]
    Validation(Vec<String>),
}
