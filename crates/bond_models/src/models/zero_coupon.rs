//! Zero-coupon bond.
//!
//! One default check for the whole life of the bond, then the discounted
//! face value. `coupon_rate` is ignored.

use super::discount;
use crate::draws::{Draws, UniformSource};
use crate::instruments::Bond;

/// Simulates one trial of a zero-coupon bond.
///
/// `default_probability` is applied once, not per period. A surviving trial
/// also consumes one rate-noise draw, the same layout as one regular period.
pub fn simulate<S: UniformSource + ?Sized>(bond: &Bond, draws: &mut Draws<'_, S>) -> f64 {
    if draws.defaults(bond.default_probability()) {
        return 0.0;
    }
    let _noise = draws.next();

    discount(bond.face_value(), bond.market_rate(), bond.maturity())
}
