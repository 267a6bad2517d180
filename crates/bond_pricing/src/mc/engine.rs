//! Trial engine and reduction.
//!
//! # Overview
//!
//! [`MonteCarloEngine`] coordinates:
//! 1. Partitioning `[0, n_trials)` into one contiguous range per worker
//! 2. Per-worker random streams (via [`PricerRng::for_worker`])
//! 3. Two samples per trial index through [`price_trial`]
//! 4. Per-worker accumulation in a private [`TrialAccumulator`]
//! 5. One ordered reduction after all workers return
//!
//! # Antithetic Pairing
//!
//! Before the plain pass the worker clones its generator. The clone replays
//! the same stream positions with every draw mirrored (`1 - u`), so draw `k`
//! of the antithetic pass pairs with draw `k` of the plain pass. The passes
//! can stop at different points (one defaults earlier), so the worker then
//! continues from whichever copy advanced further, keeping later trials on
//! fresh draws.
//!
//! # Reproducibility
//!
//! For a fixed seed and worker count the result is bit-for-bit
//! reproducible: partitions, streams and reduction order depend only on
//! those two values, never on thread scheduling. Without an explicit worker
//! count the engine uses one worker per thread of the global rayon pool, so
//! the result can differ between machines.

use std::ops::Range;
use std::time::Instant;

use bond_models::{price_trial, Bond};
use rayon::prelude::*;
use tracing::{debug, debug_span, info};

use super::accumulator::{reduce, TrialAccumulator};
use super::cancel::CancellationToken;
use super::config::{MonteCarloConfig, VarianceReduction};
use super::error::PricingError;
use super::result::PricingResult;
use crate::rng::PricerRng;

/// Monte Carlo bond pricing engine.
///
/// # Examples
///
/// ```rust
/// use bond_pricing::mc::{MonteCarloConfig, MonteCarloEngine};
/// use bond_pricing::{Bond, BondType};
///
/// let config = MonteCarloConfig::builder()
///     .n_trials(20_000)
///     .seed(42)
///     .n_workers(2)
///     .build()
///     .unwrap();
/// let engine = MonteCarloEngine::new(config).unwrap();
///
/// let bond = Bond::new(1000.0, 0.05, 5, 0.04, 0.01, BondType::Regular).unwrap();
/// let result = engine.price(&bond).unwrap();
/// println!("Price: {:.2} +/- {:.2}", result.price, result.confidence_95());
/// ```
pub struct MonteCarloEngine {
    config: MonteCarloConfig,
    pool: Option<rayon::ThreadPool>,
}

impl MonteCarloEngine {
    /// Creates an engine for the given configuration.
    ///
    /// A dedicated thread pool is built when the configuration fixes the
    /// worker count.
    ///
    /// # Errors
    ///
    /// Returns `PricingError` if the configuration is invalid or the pool
    /// cannot be created.
    pub fn new(config: MonteCarloConfig) -> Result<Self, PricingError> {
        config.validate()?;

        let pool = match config.n_workers() {
            Some(n) => Some(
                rayon::ThreadPoolBuilder::new()
                    .num_threads(n)
                    .thread_name(|i| format!("bondsim-worker-{}", i))
                    .build()
                    .map_err(|e| PricingError::ThreadPool(e.to_string()))?,
            ),
            None => None,
        };

        Ok(Self { config, pool })
    }

    /// Returns a reference to the configuration.
    #[inline]
    pub fn config(&self) -> &MonteCarloConfig {
        &self.config
    }

    /// Number of partitions a run is split into.
    ///
    /// Never more than the trial count.
    pub fn n_workers(&self) -> usize {
        let threads = match &self.pool {
            Some(pool) => pool.current_num_threads(),
            None => rayon::current_num_threads(),
        };
        threads.min(self.config.n_trials()).max(1)
    }

    /// Prices `bond`.
    ///
    /// All arguments are validated by [`new`](Self::new) and nothing can
    /// cancel this run, so the result is always `Ok` in practice.
    ///
    /// # Errors
    ///
    /// None at present; the `Result` matches
    /// [`price_with_cancel`](Self::price_with_cancel).
    pub fn price(&self, bond: &Bond) -> Result<PricingResult, PricingError> {
        self.price_with_cancel(bond, &CancellationToken::new())
    }

    /// Prices `bond`, stopping early if `cancel` is triggered.
    ///
    /// # Errors
    ///
    /// Returns [`PricingError::Cancelled`] if the token fires before every
    /// trial has run. No partial price is returned.
    pub fn price_with_cancel(
        &self,
        bond: &Bond,
        cancel: &CancellationToken,
    ) -> Result<PricingResult, PricingError> {
        let n_trials = self.config.n_trials();
        let n_workers = self.n_workers();
        let seed = self.config.seed().unwrap_or(0);

        let span = debug_span!(
            "price",
            bond_type = %bond.bond_type(),
            n_trials,
            n_workers,
            seed
        );
        let _enter = span.enter();
        let started = Instant::now();

        let fan_out = || {
            (0..n_workers)
                .into_par_iter()
                .map(|worker| {
                    let range = partition(n_trials, n_workers, worker);
                    self.run_worker(bond, range, worker, seed, cancel)
                })
                .collect::<Result<Vec<_>, _>>()
        };
        let partials = match &self.pool {
            Some(pool) => pool.install(fan_out),
            None => fan_out(),
        }?;

        let total = reduce(partials);
        let result = PricingResult {
            price: total.mean(),
            std_error: total.std_error(),
            n_trials,
            n_workers,
            variance_reduction: self.config.variance_reduction(),
        };

        info!(
            price = result.price,
            std_error = result.std_error,
            elapsed_ms = started.elapsed().as_millis() as u64,
            "pricing complete"
        );
        Ok(result)
    }

    /// Runs one worker's partition with its own stream and accumulator.
    fn run_worker(
        &self,
        bond: &Bond,
        range: Range<usize>,
        worker: usize,
        seed: u64,
        cancel: &CancellationToken,
    ) -> Result<TrialAccumulator, PricingError> {
        let params = self.config.model();
        let mut rng = PricerRng::for_worker(seed, worker as u64);
        let mut acc = TrialAccumulator::default();
        let trials = range.len();

        for _ in range {
            if cancel.is_cancelled() {
                debug!(worker, "worker cancelled");
                return Err(PricingError::Cancelled);
            }

            let (plain, second) = match self.config.variance_reduction() {
                VarianceReduction::Antithetic => {
                    let mut mirror = rng.clone();
                    let plain = price_trial(bond, params, &mut rng, false);
                    let antithetic = price_trial(bond, params, &mut mirror, true);
                    if mirror.draws() > rng.draws() {
                        rng = mirror;
                    }
                    (plain, antithetic)
                }
                VarianceReduction::None => {
                    let first = price_trial(bond, params, &mut rng, false);
                    let second = price_trial(bond, params, &mut rng, false);
                    (first, second)
                }
            };
            acc.add(plain, second);
        }

        debug!(worker, trials, draws = rng.draws(), "worker finished");
        Ok(acc)
    }
}

/// Contiguous slice of `[0, n_trials)` owned by `worker`.
///
/// The first `n_trials % n_workers` workers take one extra trial.
pub(crate) fn partition(n_trials: usize, n_workers: usize, worker: usize) -> Range<usize> {
    let base = n_trials / n_workers;
    let extra = n_trials % n_workers;
    let start = worker * base + worker.min(extra);
    let len = base + usize::from(worker < extra);
    start..start + len
}

/// Prices `bond` with `n_trials` antithetic trial pairs and default settings.
///
/// Uses seed 0, the global rayon pool and the default model parameters.
///
/// # Errors
///
/// Returns [`PricingError::InvalidArgument`] if `n_trials` is 0.
///
/// # Examples
///
/// ```rust
/// use bond_pricing::{calculate_price, Bond, BondType};
///
/// let bond = Bond::new(1000.0, 0.05, 3, 0.05, 0.0, BondType::Regular).unwrap();
/// let price = calculate_price(&bond, 1_000).unwrap();
/// assert!((price - 1000.0).abs() < 1e-6);
///
/// assert!(calculate_price(&bond, 0).is_err());
/// ```
pub fn calculate_price(bond: &Bond, n_trials: usize) -> Result<f64, PricingError> {
    let config = MonteCarloConfig::builder().n_trials(n_trials).build()?;
    let engine = MonteCarloEngine::new(config)?;
    Ok(engine.price(bond)?.price)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use bond_models::models::analytical::regular_risk_free_value;
    use bond_models::BondType;

    fn engine(n_trials: usize, n_workers: usize, seed: u64) -> MonteCarloEngine {
        let config = MonteCarloConfig::builder()
            .n_trials(n_trials)
            .n_workers(n_workers)
            .seed(seed)
            .build()
            .unwrap();
        MonteCarloEngine::new(config).unwrap()
    }

    #[test]
    fn test_partition_covers_range_exactly() {
        for (n_trials, n_workers) in [(10, 3), (7, 7), (100, 8), (5, 1), (1000, 13)] {
            let mut next = 0;
            for worker in 0..n_workers {
                let range = partition(n_trials, n_workers, worker);
                assert_eq!(range.start, next);
                next = range.end;
            }
            assert_eq!(next, n_trials);
        }
    }

    #[test]
    fn test_partition_balanced() {
        let sizes: Vec<usize> = (0..3).map(|w| partition(10, 3, w).len()).collect();
        assert_eq!(sizes, vec![4, 3, 3]);
    }

    #[test]
    fn test_workers_capped_by_trials() {
        let engine = engine(3, 8, 0);
        assert_eq!(engine.n_workers(), 3);
    }

    #[test]
    fn test_deterministic_par_bond() {
        let bond = Bond::new(1000.0, 0.05, 3, 0.05, 0.0, BondType::Regular).unwrap();
        let result = engine(500, 4, 1).price(&bond).unwrap();
        assert_relative_eq!(result.price, 1000.0, epsilon = 1e-6);
        assert!(result.std_error < 1e-9);
    }

    #[test]
    fn test_same_seed_same_price() {
        let bond = Bond::with_spread(1000.0, 0.0, 5, 0.03, 0.02, BondType::FloatingRate, 0.02)
            .unwrap();
        let a = engine(2000, 3, 9).price(&bond).unwrap();
        let b = engine(2000, 3, 9).price(&bond).unwrap();
        assert_eq!(a.price, b.price);
        assert_eq!(a.std_error, b.std_error);
    }

    #[test]
    fn test_different_seed_different_price() {
        let bond = Bond::with_spread(1000.0, 0.0, 5, 0.03, 0.0, BondType::FloatingRate, 0.02)
            .unwrap();
        let a = engine(500, 2, 1).price(&bond).unwrap();
        let b = engine(500, 2, 2).price(&bond).unwrap();
        assert_ne!(a.price, b.price);
    }

    #[test]
    fn test_certain_default_prices_to_zero() {
        for ty in [BondType::Regular, BondType::ZeroCoupon, BondType::FloatingRate] {
            let bond = Bond::with_spread(1000.0, 0.05, 5, 0.05, 1.0, ty, 0.01).unwrap();
            let result = engine(200, 2, 3).price(&bond).unwrap();
            assert_eq!(result.price, 0.0);
        }
    }

    #[test]
    fn test_antithetic_pairs_share_draws() {
        // single period at p = 0.5: exactly one side of each pair defaults
        let bond = Bond::new(1000.0, 0.05, 1, 0.05, 0.5, BondType::Regular).unwrap();
        let result = engine(1000, 2, 11).price(&bond).unwrap();
        assert_relative_eq!(
            result.price,
            0.5 * regular_risk_free_value(&bond),
            epsilon = 1e-9
        );
        assert!(result.std_error < 1e-9);
    }

    #[test]
    fn test_cancelled_run_returns_error() {
        let bond = Bond::new(1000.0, 0.05, 3, 0.05, 0.0, BondType::Regular).unwrap();
        let token = CancellationToken::new();
        token.cancel();
        let result = engine(10_000, 2, 0).price_with_cancel(&bond, &token);
        assert_eq!(result, Err(PricingError::Cancelled));
    }

    #[test]
    fn test_engine_accepts_trial_counts_above_one_hundred_million() {
        let config = MonteCarloConfig::builder()
            .n_trials(100_000_001)
            .n_workers(2)
            .build()
            .unwrap();
        let engine = MonteCarloEngine::new(config).unwrap();
        assert_eq!(engine.config().n_trials(), 100_000_001);
        assert_eq!(engine.n_workers(), 2);
    }

    #[test]
    fn test_calculate_price_rejects_zero_trials() {
        let bond = Bond::new(1000.0, 0.05, 3, 0.05, 0.0, BondType::Regular).unwrap();
        assert!(matches!(
            calculate_price(&bond, 0),
            Err(PricingError::InvalidArgument(_))
        ));
    }
}
