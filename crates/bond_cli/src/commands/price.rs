//! Price command implementation
//!
//! Prices a single bond described entirely by command-line flags.

use std::io::Write;

use bond_models::{Bond, BondType, ShockDistribution};
use bond_pricing::{MonteCarloEngine, PricingResult};
use clap::{Args, ValueEnum};
use serde::Serialize;
use tracing::{debug, info};

use crate::config::PricerConfig;
use crate::format::price_line;
use crate::{CliError, Result};

/// Output format of the price command
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// `The bond price is: $1,000.00`
    #[default]
    Text,
    /// Bond, price, standard error and run statistics as JSON
    Json,
}

/// Arguments of `bondpricer price`
#[derive(Debug, Clone, Args)]
pub struct PriceArgs {
    /// Bond type (regular, zerocoupon, floatingrate, convertible)
    #[arg(short = 't', long = "type")]
    pub bond_type: BondType,

    /// Principal repaid at maturity
    #[arg(long)]
    pub face_value: f64,

    /// Maturity in whole years
    #[arg(short, long)]
    pub maturity: u32,

    /// Annual market (discount) rate as a decimal
    #[arg(long, allow_negative_numbers = true)]
    pub market_rate: f64,

    /// Per-period default probability as a decimal
    #[arg(short = 'p', long)]
    pub default_probability: f64,

    /// Annual coupon rate as a decimal (not used by zero-coupon bonds)
    #[arg(long)]
    pub coupon_rate: Option<f64>,

    /// Floating rate spread as a decimal (floating-rate bonds only)
    #[arg(short, long, allow_negative_numbers = true)]
    pub spread: Option<f64>,

    /// Number of Monte Carlo trials (overrides the config file)
    #[arg(short = 'n', long)]
    pub trials: Option<usize>,

    /// Random seed (overrides the config file)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Number of worker threads (overrides the config file)
    #[arg(short, long)]
    pub workers: Option<usize>,

    /// Use independent second samples instead of antithetic pairs
    #[arg(long)]
    pub no_antithetic: bool,

    /// Use a standard normal shock for the convertible's equity leg
    #[arg(long)]
    pub normal_shock: bool,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

impl PriceArgs {
    /// Builds the bond described by the flags
    pub fn bond(&self) -> Result<Bond> {
        let coupon_rate = if self.bond_type.uses_coupon() {
            self.coupon_rate.ok_or_else(|| {
                CliError::invalid_argument(format!(
                    "--coupon-rate is required for {} bonds",
                    self.bond_type
                ))
            })?
        } else {
            0.0
        };
        let spread = if self.bond_type.uses_spread() {
            self.spread.unwrap_or(0.0)
        } else {
            0.0
        };

        Ok(Bond::with_spread(
            self.face_value,
            coupon_rate,
            self.maturity,
            self.market_rate,
            self.default_probability,
            self.bond_type,
            spread,
        )?)
    }

    /// Applies the command-line overrides on top of the file configuration
    pub fn apply(&self, config: &PricerConfig) -> PricerConfig {
        let mut config = config.clone();
        if let Some(trials) = self.trials {
            config.simulation.trials = trials;
        }
        if self.seed.is_some() {
            config.simulation.seed = self.seed;
        }
        if self.workers.is_some() {
            config.simulation.workers = self.workers;
        }
        if self.no_antithetic {
            config.simulation.antithetic = false;
        }
        if self.normal_shock {
            config.equity.shock = ShockDistribution::StandardNormal;
        }
        config
    }
}

#[derive(Serialize)]
struct PriceReport<'a> {
    bond: &'a Bond,
    #[serde(flatten)]
    result: &'a PricingResult,
    confidence_95: f64,
    confidence_99: f64,
}

/// Prices `bond` under `config`
pub fn price_bond(bond: &Bond, config: &PricerConfig) -> Result<PricingResult> {
    config.validate()?;
    let engine = MonteCarloEngine::new(config.monte_carlo()?)?;
    let result = engine.price(bond)?;
    debug!(
        std_error = result.std_error,
        n_workers = result.n_workers,
        "simulation finished"
    );
    Ok(result)
}

/// Run the price command
pub fn run<W: Write>(args: &PriceArgs, config: &PricerConfig, out: &mut W) -> Result<()> {
    info!("Starting pricing...");
    info!("  Bond type: {}", args.bond_type);

    let bond = args.bond()?;
    let config = args.apply(config);
    info!("  Monte Carlo trials: {}", config.simulation.trials);

    let result = price_bond(&bond, &config)?;

    match args.format {
        OutputFormat::Text => writeln!(out, "{}", price_line(result.price))?,
        OutputFormat::Json => {
            let report = PriceReport {
                bond: &bond,
                result: &result,
                confidence_95: result.confidence_95(),
                confidence_99: result.confidence_99(),
            };
            writeln!(out, "{}", serde_json::to_string_pretty(&report)?)?;
        }
    }

    info!("Pricing complete");
    Ok(())
}
