//! # bondpricer CLI (S: Service Layer)
//!
//! Command-line front end over `bond_pricing`.
//!
//! # Commands
//!
//! - `bondpricer price --type <t> ...` - Price one bond described by flags
//! - `bondpricer interactive` - Prompt for each field, then price
//!
//! Simulation settings come from `bondpricer.toml` (see [`config`]) and
//! `BONDPRICER_*` environment variables; flags on `price` override both.

pub mod commands;
pub mod config;
pub mod error;
pub mod format;

pub use error::{CliError, Result};
