//! Pricing dispatcher.
//!
//! Routes one trial to the model matching the bond type. The match is
//! exhaustive, so a new [`BondType`] variant fails to compile until it has a
//! model.

use crate::draws::{Draws, UniformSource};
use crate::instruments::{Bond, BondType};
use crate::models::{convertible, floating_rate, regular, zero_coupon, ModelParams};

/// Computes one present-value sample for `bond`.
///
/// With `antithetic = true` every uniform drawn from `source` is mirrored to
/// `1 - u` before use. The result is non-negative whenever the inputs are
/// economically sane (non-negative rates and spreads).
///
/// # Arguments
///
/// * `bond` - Bond descriptor (read only)
/// * `params` - Equity and conversion parameters for the convertible model
/// * `source` - Uniform source in (0, 1)
/// * `antithetic` - Whether this is the mirrored pass
pub fn price_trial<S: UniformSource + ?Sized>(
    bond: &Bond,
    params: &ModelParams,
    source: &mut S,
    antithetic: bool,
) -> f64 {
    let mut draws = Draws::new(source, antithetic);
    match bond.bond_type() {
        BondType::Regular => regular::simulate(bond, &mut draws),
        BondType::ZeroCoupon => zero_coupon::simulate(bond, &mut draws),
        BondType::FloatingRate => floating_rate::simulate(bond, &mut draws),
        BondType::Convertible => convertible::simulate(bond, params, &mut draws),
    }
}
