//! Per-trial pricing models.
//!
//! One module per bond type, plus the equity terminal-value model used by
//! the convertible leg and closed-form values for verification.
//!
//! Every model has the same shape: it reads a `&Bond`, pulls uniforms from
//! a [`Draws`](crate::Draws) handle and returns one discounted present
//! value. A simulated default ends the trial immediately with value 0.
//!
//! # Draw Order
//!
//! | Model | Draws per surviving period | After the loop |
//! |-------|----------------------------|----------------|
//! | Regular | default, rate noise (unused) | - |
//! | ZeroCoupon | - (one default + one noise, once) | - |
//! | FloatingRate | default, rate noise | - |
//! | Convertible | as Regular | one equity shock |

pub mod analytical;
pub mod convertible;
pub mod equity;
pub mod floating_rate;
pub mod regular;
pub mod zero_coupon;

pub use equity::{EquityParams, ShockDistribution};

use crate::error::BondError;

/// Default number of shares received per converted bond.
pub const DEFAULT_CONVERSION_RATIO: f64 = 10.0;

/// Terms of the conversion option on a convertible bond.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ConvertibleParams {
    /// Shares received per bond on conversion.
    pub conversion_ratio: f64,
}

impl Default for ConvertibleParams {
    fn default() -> Self {
        Self {
            conversion_ratio: DEFAULT_CONVERSION_RATIO,
        }
    }
}

/// Model parameters that are not part of the bond descriptor.
///
/// Only the convertible model reads these today.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ModelParams {
    /// Underlying equity dynamics.
    pub equity: EquityParams,
    /// Conversion terms.
    pub convertible: ConvertibleParams,
}

impl ModelParams {
    /// Validates the parameters.
    ///
    /// # Errors
    ///
    /// Returns [`BondError::InvalidArgument`] if:
    /// - `equity.initial_price` is not positive and finite
    /// - `equity.drift` is not finite
    /// - `equity.volatility` is negative or not finite
    /// - `convertible.conversion_ratio` is negative or not finite
    pub fn validate(&self) -> Result<(), BondError> {
        self.equity.validate()?;
        let ratio = self.convertible.conversion_ratio;
        if !(ratio >= 0.0 && ratio.is_finite()) {
            return Err(BondError::invalid(
                "conversion_ratio",
                format!("must be non-negative and finite, got {}", ratio),
            ));
        }
        Ok(())
    }
}

/// Present value of `amount` paid `periods` years from now at annual `rate`.
#[inline]
pub fn discount(amount: f64, rate: f64, periods: u32) -> f64 {
    amount / (1.0 + rate).powf(f64::from(periods))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_discount() {
        assert_relative_eq!(discount(110.0, 0.10, 1), 100.0, epsilon = 1e-12);
        assert_relative_eq!(discount(121.0, 0.10, 2), 100.0, epsilon = 1e-12);
        assert_eq!(discount(100.0, 0.05, 0), 100.0);
    }

    #[test]
    fn test_model_params_default() {
        let params = ModelParams::default();
        assert_eq!(params.convertible.conversion_ratio, 10.0);
        assert_eq!(params.equity.initial_price, 100.0);
        assert!(params.validate().is_ok());
    }

    #[test]
    fn test_model_params_rejects_bad_ratio() {
        let mut params = ModelParams::default();
        params.convertible.conversion_ratio = -1.0;
        assert!(matches!(
            params.validate(),
            Err(BondError::InvalidArgument {
                name: "conversion_ratio",
                ..
            })
        ));
    }
}
