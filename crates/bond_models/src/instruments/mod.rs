//! Bond instrument definitions.
//!
//! A [`Bond`] is an immutable record of economic parameters tagged with a
//! [`BondType`]. It carries no behaviour of its own; the pricing models in
//! [`crate::models`] read it by shared reference.
//!
//! # Examples
//!
//! ```
//! use bond_models::instruments::{Bond, BondType};
//!
//! let frn = Bond::with_spread(1000.0, 0.0, 5, 0.03, 0.01, BondType::FloatingRate, 0.02).unwrap();
//! assert_eq!(frn.bond_type(), BondType::FloatingRate);
//! assert_eq!(frn.floating_rate_spread(), 0.02);
//! ```

mod bond;

pub use bond::{Bond, BondType};
