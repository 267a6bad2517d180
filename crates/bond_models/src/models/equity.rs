//! Terminal equity price under Geometric Brownian Motion.
//!
//! The convertible model needs one draw of the underlying stock price at
//! maturity. Using the exact log-space solution of
//! ```text
//! dS = μ S dt + σ S dW
//! ```
//! the terminal price after `T` years is
//! ```text
//! S(T) = S₀ × exp((μ - ½σ²)T + σ√T × X)
//! ```
//! where `X` is the shock built from a single uniform draw `u`.
//!
//! ## Shock Distribution
//!
//! [`ShockDistribution::Uniform`] feeds `u` itself into the formula. It is
//! the default, so existing prices stay unchanged, but it is not a true GBM
//! shock (a standard normal is expected there). [`ShockDistribution::StandardNormal`]
//! maps `u` through the normal quantile instead. Since `Φ⁻¹(1 - u) = -Φ⁻¹(u)`
//! the antithetic pass still sees the mirrored shock `-z`.

use statrs::distribution::{ContinuousCDF, Normal};

use crate::draws::{Draws, UniformSource};
use crate::error::BondError;

/// How the uniform draw is turned into the GBM shock.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ShockDistribution {
    /// Use the uniform draw directly.
    #[default]
    Uniform,
    /// Map the uniform draw through the standard normal quantile.
    StandardNormal,
}

impl ShockDistribution {
    /// Converts a uniform draw in (0, 1) into a shock.
    #[inline]
    pub fn shock(&self, u: f64) -> f64 {
        match self {
            ShockDistribution::Uniform => u,
            ShockDistribution::StandardNormal => Normal::standard().inverse_cdf(u),
        }
    }
}

/// GBM parameters for the underlying equity.
///
/// # Examples
///
/// ```
/// use bond_models::EquityParams;
///
/// let params = EquityParams::default();
/// assert_eq!(params.initial_price, 100.0);
/// assert_eq!(params.drift, 0.05);
/// assert_eq!(params.volatility, 0.20);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct EquityParams {
    /// Spot price today (S₀).
    pub initial_price: f64,
    /// Expected return (μ), annualised.
    pub drift: f64,
    /// Volatility (σ), annualised.
    pub volatility: f64,
    /// Shock construction.
    pub shock: ShockDistribution,
}

impl Default for EquityParams {
    fn default() -> Self {
        Self {
            initial_price: 100.0,
            drift: 0.05,
            volatility: 0.20,
            shock: ShockDistribution::Uniform,
        }
    }
}

impl EquityParams {
    /// Validates the parameters.
    ///
    /// # Errors
    ///
    /// Returns [`BondError::InvalidArgument`] for a non-positive spot, a
    /// non-finite drift or a negative volatility.
    pub fn validate(&self) -> Result<(), BondError> {
        if !(self.initial_price > 0.0 && self.initial_price.is_finite()) {
            return Err(BondError::invalid(
                "initial_price",
                format!("must be positive and finite, got {}", self.initial_price),
            ));
        }
        if !self.drift.is_finite() {
            return Err(BondError::invalid(
                "drift",
                format!("must be finite, got {}", self.drift),
            ));
        }
        if !(self.volatility >= 0.0 && self.volatility.is_finite()) {
            return Err(BondError::invalid(
                "volatility",
                format!("must be non-negative and finite, got {}", self.volatility),
            ));
        }
        Ok(())
    }

    /// Terminal price for a given shock value.
    #[inline]
    pub fn price_for_shock(&self, maturity: u32, shock: f64) -> f64 {
        let t = f64::from(maturity);
        let sigma = self.volatility;
        let exponent = (self.drift - 0.5 * sigma * sigma) * t + sigma * t.sqrt() * shock;
        self.initial_price * exponent.exp()
    }
}

/// Draws one terminal stock price at `maturity` years.
///
/// Consumes exactly one value from `draws`.
#[inline]
pub fn terminal_price<S: UniformSource + ?Sized>(
    params: &EquityParams,
    maturity: u32,
    draws: &mut Draws<'_, S>,
) -> f64 {
    let u = draws.next();
    params.price_for_shock(maturity, params.shock.shock(u))
}
