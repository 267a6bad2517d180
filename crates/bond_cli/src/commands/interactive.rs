//! Interactive command implementation
//!
//! Prompts for each bond field in turn, re-prompting on unparseable input,
//! then prices the bond with the configured simulation settings.

use std::io::{BufRead, ErrorKind, Write};
use std::num::IntErrorKind;

use bond_models::{Bond, BondError, BondType};
use tracing::info;

use super::price::price_bond;
use crate::config::PricerConfig;
use crate::format::price_line;
use crate::{CliError, Result};

const INVALID_NUMBER: &str = "Invalid input. Please enter a valid number.";
const OUT_OF_RANGE: &str = "Input is too large or too small. Please enter a valid number.";
const INVALID_TYPE: &str = "Invalid input. Please enter one of the specified bond types.";

/// Line-oriented prompt over any reader/writer pair
struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    /// Writes `prompt` and reads one line, failing on end of input
    fn line(&mut self, prompt: &str) -> Result<String> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut buf = String::new();
        if self.input.read_line(&mut buf)? == 0 {
            return Err(std::io::Error::new(ErrorKind::UnexpectedEof, "input closed").into());
        }
        Ok(buf.trim().to_string())
    }

    fn say(&mut self, message: &str) -> Result<()> {
        writeln!(self.output, "{}", message)?;
        Ok(())
    }

    fn real(&mut self, prompt: &str) -> Result<f64> {
        loop {
            let line = self.line(prompt)?;
            match line.parse::<f64>() {
                Ok(v) if v.is_finite() => return Ok(v),
                Ok(v) if v.is_nan() => self.say(INVALID_NUMBER)?,
                Ok(_) => self.say(OUT_OF_RANGE)?,
                Err(_) => self.say(INVALID_NUMBER)?,
            }
        }
    }

    fn integer(&mut self, prompt: &str) -> Result<i32> {
        loop {
            let line = self.line(prompt)?;
            match line.parse::<i32>() {
                Ok(v) => return Ok(v),
                Err(e) => match e.kind() {
                    IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => {
                        self.say(OUT_OF_RANGE)?
                    }
                    _ => self.say(INVALID_NUMBER)?,
                },
            }
        }
    }

    fn bond_type(&mut self) -> Result<BondType> {
        loop {
            let line =
                self.line("Enter Bond Type (Regular, ZeroCoupon, FloatingRate, Convertible): ")?;
            match line.parse() {
                Ok(ty) => return Ok(ty),
                Err(_) => self.say(INVALID_TYPE)?,
            }
        }
    }
}

/// Run the interactive command against stdin/stdout
pub fn run_stdio(config: &PricerConfig) -> Result<()> {
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    run(config, stdin.lock(), stdout.lock())
}

/// Run the interactive command
pub fn run<R: BufRead, W: Write>(config: &PricerConfig, input: R, output: W) -> Result<()> {
    let mut prompt = Prompter { input, output };

    let face_value = prompt.real("Enter Face Value: ")?;
    let bond_type = prompt.bond_type()?;

    let coupon_rate = if bond_type.uses_coupon() {
        prompt.real("Enter Coupon Rate (as decimal, e.g., 0.05 for 5%): ")?
    } else {
        0.0
    };
    let spread = if bond_type.uses_spread() {
        prompt.real("Enter Floating Rate Spread (as decimal, e.g., 0.02 for 2%): ")?
    } else {
        0.0
    };

    let maturity = prompt.integer("Enter Maturity (in years): ")?;
    let market_rate = prompt.real("Enter Market Rate (as decimal, e.g., 0.03 for 3%): ")?;
    let default_probability =
        prompt.real("Enter Default Probability (as decimal, e.g., 0.02 for 2%): ")?;
    let trials = prompt.integer("Enter Number of Simulations: ")?;

    let maturity = u32::try_from(maturity).map_err(|_| {
        BondError::invalid(
            "maturity",
            format!("must be at least 1 period, got {}", maturity),
        )
    })?;
    let bond = Bond::with_spread(
        face_value,
        coupon_rate,
        maturity,
        market_rate,
        default_probability,
        bond_type,
        spread,
    )?;

    let mut config = config.clone();
    config.simulation.trials = usize::try_from(trials).map_err(|_| {
        CliError::invalid_argument(format!(
            "number of simulations must be positive, got {}",
            trials
        ))
    })?;

    info!(
        bond_type = %bond_type,
        trials = config.simulation.trials,
        "pricing interactively entered bond"
    );
    let result = price_bond(&bond, &config)?;

    prompt.say(&price_line(result.price))
}
