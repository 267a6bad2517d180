//! Pricing result.

use super::config::VarianceReduction;

/// Monte Carlo price estimate for one bond.
///
/// # Examples
///
/// ```rust
/// use bond_pricing::mc::{PricingResult, VarianceReduction};
///
/// let result = PricingResult {
///     price: 987.65,
///     std_error: 1.2,
///     n_trials: 10_000,
///     n_workers: 4,
///     variance_reduction: VarianceReduction::Antithetic,
/// };
///
/// println!("Price: {} +/- {}", result.price, result.confidence_95());
/// ```
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct PricingResult {
    /// Present value estimate.
    pub price: f64,
    /// Standard error of the estimate.
    pub std_error: f64,
    /// Number of trial indices (samples = 2 × trials).
    pub n_trials: usize,
    /// Number of workers the trials were partitioned across.
    pub n_workers: usize,
    /// Second-sample scheme used.
    pub variance_reduction: VarianceReduction,
}

impl PricingResult {
    /// Returns the 95% confidence interval half-width.
    #[inline]
    pub fn confidence_95(&self) -> f64 {
        1.96 * self.std_error
    }

    /// Returns the 99% confidence interval half-width.
    #[inline]
    pub fn confidence_99(&self) -> f64 {
        2.576 * self.std_error
    }
}
