//! Monte Carlo simulation configuration.
//!
//! This module provides configuration types and builders for bond pricing
//! runs.

use bond_models::ModelParams;

use super::error::PricingError;

/// Maximum number of workers allowed.
pub const MAX_WORKERS: usize = 1024;

/// Variance reduction applied to the second sample of each trial index.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum VarianceReduction {
    /// Second sample replays the first pass with every draw mirrored.
    #[default]
    Antithetic,
    /// Second sample is an independent plain draw.
    None,
}

/// Monte Carlo simulation configuration.
///
/// Immutable configuration specifying simulation parameters.
/// Use [`MonteCarloConfigBuilder`] to construct instances.
///
/// # Examples
///
/// ```rust
/// use bond_pricing::mc::{MonteCarloConfig, VarianceReduction};
///
/// let config = MonteCarloConfig::builder()
///     .n_trials(10_000)
///     .seed(42)
///     .n_workers(4)
///     .build()
///     .expect("valid configuration");
///
/// assert_eq!(config.n_trials(), 10_000);
/// assert_eq!(config.n_workers(), Some(4));
/// assert_eq!(config.variance_reduction(), VarianceReduction::Antithetic);
/// ```
#[derive(Clone, Debug)]
pub struct MonteCarloConfig {
    /// Number of trial indices (each yields two samples).
    n_trials: usize,
    /// Optional seed for reproducibility.
    seed: Option<u64>,
    /// Optional fixed worker count.
    n_workers: Option<usize>,
    /// Second-sample scheme.
    variance_reduction: VarianceReduction,
    /// Equity and conversion parameters.
    model: ModelParams,
}

impl MonteCarloConfig {
    /// Creates a new configuration builder.
    #[inline]
    pub fn builder() -> MonteCarloConfigBuilder {
        MonteCarloConfigBuilder::default()
    }

    /// Returns the number of trial indices.
    #[inline]
    pub fn n_trials(&self) -> usize {
        self.n_trials
    }

    /// Returns the optional seed.
    #[inline]
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Returns the fixed worker count, if any.
    #[inline]
    pub fn n_workers(&self) -> Option<usize> {
        self.n_workers
    }

    /// Returns the variance reduction scheme.
    #[inline]
    pub fn variance_reduction(&self) -> VarianceReduction {
        self.variance_reduction
    }

    /// Returns the model parameters.
    #[inline]
    pub fn model(&self) -> &ModelParams {
        &self.model
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns `PricingError` if:
    /// - `n_trials` is 0
    /// - `n_workers` is 0 or greater than [`MAX_WORKERS`]
    /// - the model parameters are invalid
    pub fn validate(&self) -> Result<(), PricingError> {
        if self.n_trials == 0 {
            return Err(PricingError::InvalidArgument(
                "n_trials must be at least 1".to_string(),
            ));
        }
        if let Some(n) = self.n_workers {
            if n == 0 || n > MAX_WORKERS {
                return Err(PricingError::InvalidArgument(format!(
                    "n_workers {} must be in range [1, {}]",
                    n, MAX_WORKERS
                )));
            }
        }
        self.model.validate()?;
        Ok(())
    }
}

/// Builder for [`MonteCarloConfig`].
///
/// Provides a fluent API with validation at build time.
#[derive(Clone, Debug, Default)]
pub struct MonteCarloConfigBuilder {
    n_trials: Option<usize>,
    seed: Option<u64>,
    n_workers: Option<usize>,
    variance_reduction: VarianceReduction,
    model: ModelParams,
}

impl MonteCarloConfigBuilder {
    /// Sets the number of trial indices.
    ///
    /// # Arguments
    ///
    /// * `n_trials` - Number of trials, at least 1
    #[inline]
    pub fn n_trials(mut self, n_trials: usize) -> Self {
        self.n_trials = Some(n_trials);
        self
    }

    /// Sets the seed for reproducibility.
    #[inline]
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Sets the seed if one is given.
    #[inline]
    pub fn maybe_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }

    /// Fixes the number of workers and runs them on a dedicated pool.
    ///
    /// Without this the global rayon pool is used with one worker per
    /// thread.
    #[inline]
    pub fn n_workers(mut self, n_workers: usize) -> Self {
        self.n_workers = Some(n_workers);
        self
    }

    /// Sets the worker count if one is given.
    #[inline]
    pub fn maybe_n_workers(mut self, n_workers: Option<usize>) -> Self {
        self.n_workers = n_workers;
        self
    }

    /// Sets the variance reduction scheme.
    #[inline]
    pub fn variance_reduction(mut self, variance_reduction: VarianceReduction) -> Self {
        self.variance_reduction = variance_reduction;
        self
    }

    /// Sets the model parameters.
    #[inline]
    pub fn model(mut self, model: ModelParams) -> Self {
        self.model = model;
        self
    }

    /// Builds the configuration.
    ///
    /// # Errors
    ///
    /// Returns `PricingError::InvalidArgument` if `n_trials` is not set or
    /// any value is out of range.
    pub fn build(self) -> Result<MonteCarloConfig, PricingError> {
        let n_trials = self.n_trials.ok_or_else(|| {
            PricingError::InvalidArgument("n_trials must be specified".to_string())
        })?;

        let config = MonteCarloConfig {
            n_trials,
            seed: self.seed,
            n_workers: self.n_workers,
            variance_reduction: self.variance_reduction,
            model: self.model,
        };

        config.validate()?;
        Ok(config)
    }
}
