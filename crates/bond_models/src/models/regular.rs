//! Fixed-coupon bond with per-period default.
//!
//! ```text
//! PV = Σ_{t=1..n} C / (1+r)^t + F / (1+r)^n     if no default in 1..n
//! PV = 0                                         otherwise
//! ```
//!
//! A default in any period wipes out every cash flow of the trial, including
//! coupons already accrued.

use super::discount;
use crate::draws::{Draws, UniformSource};
use crate::instruments::Bond;

/// Simulates one trial of a regular bond.
///
/// Each period consumes two draws: the default indicator and a rate-noise
/// value. The noise has no pricing effect here; it keeps the stream layout
/// identical to the floating-rate model so plain and antithetic passes stay
/// aligned draw for draw.
pub fn simulate<S: UniformSource + ?Sized>(bond: &Bond, draws: &mut Draws<'_, S>) -> f64 {
    let coupon = bond.coupon_payment();
    let rate = bond.market_rate();
    let p = bond.default_probability();
    let mut pv = 0.0;

    for t in 1..=bond.maturity() {
        if draws.defaults(p) {
            return 0.0;
        }
        let _noise = draws.next();
        pv += discount(coupon, rate, t);
    }

    pv + discount(bond.face_value(), rate, bond.maturity())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draws::testing::Sequence;
    use crate::instruments::BondType;
    use approx::assert_relative_eq;

    fn bond(p: f64) -> Bond {
        Bond::new(1000.0, 0.05, 3, 0.05, p, BondType::Regular).unwrap()
    }

    #[test]
    fn test_par_bond_prices_to_face() {
        let mut src = Sequence::new(&[0.37, 0.81]);
        let mut draws = Draws::new(&mut src, false);
        assert_relative_eq!(simulate(&bond(0.0), &mut draws), 1000.0, epsilon = 1e-9);
    }

    #[test]
    fn test_consumes_two_draws_per_period() {
        let mut src = Sequence::new(&[0.5]);
        let mut draws = Draws::new(&mut src, false);
        simulate(&bond(0.0), &mut draws);
        assert_eq!(draws.consumed(), 6);
    }

    #[test]
    fn test_certain_default_is_zero_on_both_passes() {
        for antithetic in [false, true] {
            let mut src = Sequence::new(&[0.999, 0.001]);
            let mut draws = Draws::new(&mut src, antithetic);
            assert_eq!(simulate(&bond(1.0), &mut draws), 0.0);
            assert_eq!(draws.consumed(), 1);
        }
    }

    #[test]
    fn test_default_in_later_period_wipes_accrued_coupons() {
        // period 1 survives (0.9 >= 0.5), period 2 defaults (0.1 < 0.5)
        let mut src = Sequence::new(&[0.9, 0.5, 0.1, 0.5]);
        let mut draws = Draws::new(&mut src, false);
        assert_eq!(simulate(&bond(0.5), &mut draws), 0.0);
        assert_eq!(draws.consumed(), 3);
    }

    #[test]
    fn test_antithetic_mirrors_default_checks() {
        // plain: 0.1 < 0.2 defaults; mirrored: 0.9 survives every period
        let values = [0.1, 0.5];
        let mut src = Sequence::new(&values);
        let mut plain = Draws::new(&mut src, false);
        assert_eq!(simulate(&bond(0.2), &mut plain), 0.0);

        let mut src = Sequence::new(&values);
        let mut mirrored = Draws::new(&mut src, true);
        assert_relative_eq!(simulate(&bond(0.2), &mut mirrored), 1000.0, epsilon = 1e-9);
    }

    #[test]
    fn test_discount_premium_bond() {
        let bond = Bond::new(1000.0, 0.08, 2, 0.05, 0.0, BondType::Regular).unwrap();
        let expected = 80.0 / 1.05 + 80.0 / 1.05_f64.powi(2) + 1000.0 / 1.05_f64.powi(2);
        let mut src = Sequence::new(&[0.5]);
        let mut draws = Draws::new(&mut src, false);
        assert_relative_eq!(simulate(&bond, &mut draws), expected, epsilon = 1e-9);
    }
}
