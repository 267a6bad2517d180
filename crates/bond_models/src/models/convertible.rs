//! Convertible bond.
//!
//! The holder takes the better of the straight bond and the shares it
//! converts into:
//! ```text
//! PV = max(PV_regular, S(T) × conversion_ratio)
//! ```
//! The straight value runs the regular model first on the same draw handle,
//! then one more draw sets the terminal stock price.

use super::equity::terminal_price;
use super::{regular, ModelParams};
use crate::draws::{Draws, UniformSource};
use crate::instruments::Bond;

/// Simulates one trial of a convertible bond.
///
/// A default in the straight leg does not remove the conversion value.
pub fn simulate<S: UniformSource + ?Sized>(
    bond: &Bond,
    params: &ModelParams,
    draws: &mut Draws<'_, S>,
) -> f64 {
    let straight = regular::simulate(bond, draws);
    let stock = terminal_price(&params.equity, bond.maturity(), draws);
    let conversion = stock * params.convertible.conversion_ratio;

    straight.max(conversion)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draws::testing::Sequence;
    use crate::instruments::BondType;
    use crate::models::ConvertibleParams;
    use approx::assert_relative_eq;

    fn convertible(p: f64) -> Bond {
        Bond::new(1000.0, 0.05, 2, 0.05, p, BondType::Convertible).unwrap()
    }

    #[test]
    fn test_straight_value_dominates_with_small_ratio() {
        // 5 shares at ~122 is worth less than a par bond of 1000
        let params = ModelParams {
            convertible: ConvertibleParams {
                conversion_ratio: 5.0,
            },
            ..ModelParams::default()
        };
        let mut src = Sequence::new(&[0.5]);
        let mut draws = Draws::new(&mut src, false);
        let pv = simulate(&convertible(0.0), &params, &mut draws);
        assert_relative_eq!(pv, 1000.0, epsilon = 1e-9);
        assert_eq!(draws.consumed(), 5);
    }

    #[test]
    fn test_conversion_dominates_with_large_ratio() {
        let params = ModelParams {
            convertible: ConvertibleParams {
                conversion_ratio: 50.0,
            },
            ..ModelParams::default()
        };
        let mut src = Sequence::new(&[0.5]);
        let mut draws = Draws::new(&mut src, false);
        let pv = simulate(&convertible(0.0), &params, &mut draws);

        let stock = params.equity.price_for_shock(2, 0.5);
        assert_relative_eq!(pv, 50.0 * stock, epsilon = 1e-9);
        assert!(pv > 1000.0);
    }

    #[test]
    fn test_default_leaves_conversion_value() {
        let mut src = Sequence::new(&[0.4]);
        let mut draws = Draws::new(&mut src, false);
        let params = ModelParams::default();
        let pv = simulate(&convertible(1.0), &params, &mut draws);

        // default on the first draw, equity draw is the second value
        assert_relative_eq!(pv, 10.0 * params.equity.price_for_shock(2, 0.4), epsilon = 1e-9);
        assert_eq!(draws.consumed(), 2);
    }
}
