//! # Bond Pricing (E: Engine Layer)
//!
//! Parallel Monte Carlo pricing for the bonds described in `bond_models`.
//!
//! This crate provides:
//! - [`MonteCarloEngine`]: fork-join trial runner over a rayon pool
//! - [`PricerRng`]: seeded per-worker uniform streams
//! - Antithetic variance reduction with per-draw mirroring
//! - [`calculate_price`]: one-call pricing with default settings
//!
//! ## Design Principles
//!
//! - **No shared mutable state** while trials run: every worker owns its
//!   generator and accumulator
//! - **Deterministic reduction**: partial results merge in worker order
//! - **Validation up front**: bad arguments fail before any trial runs
//!
//! ## Example
//!
//! ```rust
//! use bond_pricing::{calculate_price, Bond, BondType};
//!
//! let bond = Bond::new(1000.0, 0.05, 10, 0.04, 0.01, BondType::Regular).unwrap();
//! let price = calculate_price(&bond, 10_000).unwrap();
//! assert!(price > 0.0 && price < 1100.0);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod mc;
pub mod rng;

pub use mc::{
    calculate_price, CancellationToken, MonteCarloConfig, MonteCarloEngine, PricingError,
    PricingResult, VarianceReduction,
};
pub use rng::PricerRng;

pub use bond_models::{Bond, BondError, BondType, ModelParams};
