//! Closed-form values for verification of the simulated models.
//!
//! Defaults are independent across periods with probability `p`, and a
//! default anywhere wipes the whole trial, so the expected value of a regular
//! bond is the risk-free value scaled by the survival probability
//! `(1 - p)^n`. The zero-coupon bond is checked once, so its scale is
//! `(1 - p)`.

use super::discount;
use crate::instruments::Bond;

/// Risk-free value of the fixed coupons and principal.
pub fn regular_risk_free_value(bond: &Bond) -> f64 {
    let coupon = bond.coupon_payment();
    let rate = bond.market_rate();
    let coupons: f64 = (1..=bond.maturity())
        .map(|t| discount(coupon, rate, t))
        .sum();
    coupons + discount(bond.face_value(), rate, bond.maturity())
}

/// Expected simulated value of a regular bond.
///
/// # Examples
///
/// ```
/// use bond_models::models::analytical::regular_expected_value;
/// use bond_models::{Bond, BondType};
///
/// let bond = Bond::new(1000.0, 0.05, 3, 0.05, 0.0, BondType::Regular).unwrap();
/// assert!((regular_expected_value(&bond) - 1000.0).abs() < 1e-9);
/// ```
pub fn regular_expected_value(bond: &Bond) -> f64 {
    survival(bond.default_probability(), bond.maturity()) * regular_risk_free_value(bond)
}

/// Expected simulated value of a zero-coupon bond.
pub fn zero_coupon_expected_value(bond: &Bond) -> f64 {
    (1.0 - bond.default_probability())
        * discount(bond.face_value(), bond.market_rate(), bond.maturity())
}

/// Probability of surviving `periods` independent default checks.
#[inline]
pub fn survival(default_probability: f64, periods: u32) -> f64 {
    (1.0 - default_probability).powf(f64::from(periods))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::instruments::BondType;
    use approx::assert_relative_eq;

    #[test]
    fn test_par_bond() {
        let bond = Bond::new(1000.0, 0.05, 3, 0.05, 0.0, BondType::Regular).unwrap();
        assert_relative_eq!(regular_risk_free_value(&bond), 1000.0, epsilon = 1e-9);
    }

    #[test]
    fn test_survival_scaling() {
        let bond = Bond::new(1000.0, 0.05, 3, 0.05, 0.1, BondType::Regular).unwrap();
        assert_relative_eq!(regular_expected_value(&bond), 729.0, epsilon = 1e-9);
    }

    #[test]
    fn test_zero_coupon() {
        let bond = Bond::new(1000.0, 0.0, 2, 0.10, 0.2, BondType::ZeroCoupon).unwrap();
        assert_relative_eq!(
            zero_coupon_expected_value(&bond),
            0.8 * 1000.0 / 1.21,
            epsilon = 1e-9
        );
    }
}
