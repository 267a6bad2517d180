//! Floating-rate bond.
//!
//! Each surviving period draws a rate-noise value `x` and resets
//! ```text
//! r_t = r + spread × x
//! ```
//! The period coupon `F × r_t` is discounted at `r_t` itself over `t`
//! periods. The principal is discounted at the base rate `r`, so it does not
//! move with the coupon noise.

use super::discount;
use crate::draws::{Draws, UniformSource};
use crate::instruments::Bond;

/// Simulates one trial of a floating-rate bond.
pub fn simulate<S: UniformSource + ?Sized>(bond: &Bond, draws: &mut Draws<'_, S>) -> f64 {
    let face = bond.face_value();
    let rate = bond.market_rate();
    let spread = bond.floating_rate_spread();
    let p = bond.default_probability();
    let mut pv = 0.0;

    for t in 1..=bond.maturity() {
        if draws.defaults(p) {
            return 0.0;
        }
        let adjusted = rate + spread * draws.next();
        pv += discount(face * adjusted, adjusted, t);
    }

    pv + discount(face, rate, bond.maturity())
}
