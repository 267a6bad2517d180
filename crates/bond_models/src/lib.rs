//! # Bond Models (M: Model Layer)
//!
//! Bond descriptors and the per-trial pricing models used by the Monte Carlo
//! engine in `bond_pricing`.
//!
//! This crate provides:
//! - The immutable [`Bond`] descriptor and its [`BondType`] tag
//! - A [`UniformSource`] abstraction with per-draw antithetic mirroring
//! - One pricing model per bond type (regular, zero-coupon, floating-rate,
//!   convertible) plus the GBM terminal-value model for the equity leg
//! - The [`price_trial`] dispatcher that evaluates one trial
//!
//! ## Design Principles
//!
//! - **Enum dispatch** over a closed set of bond types, matched exhaustively
//! - **Pure models**: a model reads `&Bond` and consumes randomness, nothing else
//! - **No threads, no I/O**: parallelism lives in `bond_pricing`
//!
//! ## Example
//!
//! ```
//! use bond_models::{price_trial, Bond, BondType, ModelParams, UniformSource};
//!
//! struct Midpoint;
//!
//! impl UniformSource for Midpoint {
//!     fn next_uniform(&mut self) -> f64 {
//!         0.5
//!     }
//! }
//!
//! let bond = Bond::new(1000.0, 0.05, 3, 0.05, 0.0, BondType::Regular).unwrap();
//! let pv = price_trial(&bond, &ModelParams::default(), &mut Midpoint, false);
//! assert!((pv - 1000.0).abs() < 1e-9);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod draws;
pub mod error;
pub mod instruments;
pub mod models;
pub mod pricing;

pub use draws::{Draws, UniformSource};
pub use error::BondError;
pub use instruments::{Bond, BondType};
pub use models::{ConvertibleParams, EquityParams, ModelParams, ShockDistribution};
pub use pricing::price_trial;
