//! Monte Carlo pricing engine for bonds.
//!
//! # Architecture
//!
//! ```text
//! MonteCarloEngine
//! ├── MonteCarloConfig   (trials, seed, workers, variance reduction, model)
//! ├── PricerRng          (one stream per worker)
//! ├── TrialAccumulator   (one per worker, merged once)
//! └── CancellationToken  (checked between trials)
//! ```
//!
//! Each trial index produces two samples from
//! [`price_trial`](bond_models::price_trial): a plain pass and either its
//! antithetic mirror or an independent second draw. The estimate is the
//! mean over all `2 × n_trials` samples.
//!
//! # Examples
//!
//! ```rust
//! use bond_pricing::mc::{MonteCarloConfig, MonteCarloEngine, VarianceReduction};
//! use bond_pricing::{Bond, BondType};
//!
//! let config = MonteCarloConfig::builder()
//!     .n_trials(10_000)
//!     .seed(7)
//!     .variance_reduction(VarianceReduction::None)
//!     .build()
//!     .unwrap();
//! let engine = MonteCarloEngine::new(config).unwrap();
//!
//! let bond = Bond::new(1000.0, 0.0, 10, 0.05, 0.02, BondType::ZeroCoupon).unwrap();
//! let result = engine.price(&bond).unwrap();
//! assert!(result.price < 1000.0);
//! ```

mod accumulator;
mod cancel;
mod config;
mod engine;
mod error;
mod result;

pub use accumulator::{reduce, TrialAccumulator};
pub use cancel::CancellationToken;
pub use config::{MonteCarloConfig, MonteCarloConfigBuilder, VarianceReduction, MAX_WORKERS};
pub use engine::{calculate_price, MonteCarloEngine};
pub use error::PricingError;
pub use result::PricingResult;
