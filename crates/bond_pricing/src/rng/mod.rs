//! # Random Number Generation
//!
//! Seeded pseudo-random streams for the trial engine.
//!
//! ## Design Rationale
//!
//! - **Reproducibility**: every stream is derived from one 64-bit seed
//! - **Independence**: each worker gets its own stream, derived by folding
//!   the worker index into the seed, so no generator is shared across threads
//! - **Open interval**: uniforms are drawn from (0, 1) so that both `u` and
//!   its antithetic mirror `1 - u` stay strictly inside the unit interval
//!
//! ## Usage Example
//!
//! ```rust
//! use bond_pricing::rng::PricerRng;
//!
//! let mut worker0 = PricerRng::for_worker(42, 0);
//! let mut worker1 = PricerRng::for_worker(42, 1);
//!
//! let u0 = worker0.gen_uniform();
//! let u1 = worker1.gen_uniform();
//! assert!(u0 > 0.0 && u0 < 1.0);
//! assert_ne!(u0, u1);
//! ```

mod prng;

pub use prng::{split_seed, PricerRng};
