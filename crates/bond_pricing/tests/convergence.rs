//! Convergence tests for Monte Carlo bond pricing.
//!
//! These tests verify that engine prices converge to closed-form expected
//! values where they exist, and that antithetic pairing reduces the
//! standard error.
//!
//! # Test Categories
//!
//! 1. **Closed Form**: regular and zero-coupon bonds vs survival-scaled values
//! 2. **Variance Reduction**: antithetic vs independent second samples
//! 3. **Ordering**: convertible above straight, zero-coupon below face
//! 4. **Floating Rate**: seed dependence and the zero-spread limit

use approx::assert_relative_eq;
use bond_models::models::analytical::{
    regular_expected_value, regular_risk_free_value, zero_coupon_expected_value,
};
use bond_pricing::mc::{MonteCarloConfig, MonteCarloEngine, PricingResult, VarianceReduction};
use bond_pricing::{calculate_price, Bond, BondType};
use proptest::prelude::*;

fn run(bond: &Bond, n_trials: usize, seed: u64, scheme: VarianceReduction) -> PricingResult {
    let config = MonteCarloConfig::builder()
        .n_trials(n_trials)
        .seed(seed)
        .n_workers(4)
        .variance_reduction(scheme)
        .build()
        .unwrap();
    MonteCarloEngine::new(config).unwrap().price(bond).unwrap()
}

// ============================================================================
// Closed Form
// ============================================================================

#[test]
fn test_regular_converges_to_survival_scaled_value() {
    let bond = Bond::new(1000.0, 0.05, 5, 0.05, 0.02, BondType::Regular).unwrap();
    let expected = regular_expected_value(&bond);

    let result = run(&bond, 200_000, 42, VarianceReduction::Antithetic);

    assert_relative_eq!(result.price, expected, epsilon = 5.0);
    assert!((result.price - expected).abs() < 6.0 * result.std_error + 1e-9);
}

#[test]
fn test_zero_coupon_converges_to_survival_scaled_value() {
    let bond = Bond::new(1000.0, 0.0, 10, 0.05, 0.05, BondType::ZeroCoupon).unwrap();
    let expected = zero_coupon_expected_value(&bond);

    let result = run(&bond, 200_000, 7, VarianceReduction::Antithetic);

    assert_relative_eq!(result.price, expected, epsilon = 3.0);
}

#[test]
fn test_independent_samples_also_converge() {
    let bond = Bond::new(1000.0, 0.06, 4, 0.05, 0.03, BondType::Regular).unwrap();
    let expected = regular_expected_value(&bond);

    let result = run(&bond, 200_000, 3, VarianceReduction::None);

    assert_relative_eq!(result.price, expected, epsilon = 6.0);
}

#[test]
fn test_no_default_regular_is_exact() {
    let bond = Bond::new(1000.0, 0.07, 8, 0.04, 0.0, BondType::Regular).unwrap();
    let price = calculate_price(&bond, 1_000).unwrap();
    assert_relative_eq!(price, regular_risk_free_value(&bond), epsilon = 1e-6);
}

#[test]
fn test_worker_count_does_not_bias_estimate() {
    let bond = Bond::new(1000.0, 0.05, 5, 0.05, 0.02, BondType::Regular).unwrap();

    let single = MonteCarloConfig::builder()
        .n_trials(100_000)
        .seed(1)
        .n_workers(1)
        .build()
        .unwrap();
    let single = MonteCarloEngine::new(single).unwrap().price(&bond).unwrap();
    let many = run(&bond, 100_000, 1, VarianceReduction::Antithetic);

    assert_eq!(single.n_workers, 1);
    assert_eq!(many.n_workers, 4);
    assert_relative_eq!(single.price, many.price, epsilon = 8.0);
}

// ============================================================================
// Variance Reduction
// ============================================================================

#[test]
fn test_antithetic_reduces_standard_error() {
    // below p = 0.5 the two sides of a pair can never both default
    let bond = Bond::new(1000.0, 0.05, 1, 0.05, 0.3, BondType::Regular).unwrap();

    let antithetic = run(&bond, 50_000, 11, VarianceReduction::Antithetic);
    let independent = run(&bond, 50_000, 11, VarianceReduction::None);

    assert!(
        antithetic.std_error < 0.9 * independent.std_error,
        "antithetic {} vs independent {}",
        antithetic.std_error,
        independent.std_error
    );
}

#[test]
fn test_certain_outcomes_have_zero_error() {
    let bond = Bond::new(1000.0, 0.05, 5, 0.05, 1.0, BondType::Regular).unwrap();
    let result = run(&bond, 1_000, 0, VarianceReduction::Antithetic);
    assert_eq!(result.price, 0.0);
    assert_eq!(result.std_error, 0.0);
}

// ============================================================================
// Ordering
// ============================================================================

#[test]
fn test_convertible_above_regular() {
    let regular = Bond::new(1000.0, 0.05, 5, 0.05, 0.02, BondType::Regular).unwrap();
    let convertible = Bond::new(1000.0, 0.05, 5, 0.05, 0.02, BondType::Convertible).unwrap();

    let straight = run(&regular, 50_000, 5, VarianceReduction::Antithetic);
    let with_option = run(&convertible, 50_000, 5, VarianceReduction::Antithetic);

    assert!(with_option.price > straight.price);
}

#[test]
fn test_zero_coupon_below_face() {
    let bond = Bond::new(1000.0, 0.0, 3, 0.04, 0.0, BondType::ZeroCoupon).unwrap();
    let result = run(&bond, 1_000, 0, VarianceReduction::Antithetic);
    assert!(result.price < 1000.0);
    assert_relative_eq!(result.price, 1000.0 / 1.04_f64.powi(3), epsilon = 1e-6);
}

// ============================================================================
// Floating Rate
// ============================================================================

#[test]
fn test_floating_rate_depends_on_seed() {
    let bond =
        Bond::with_spread(1000.0, 0.0, 5, 0.03, 0.0, BondType::FloatingRate, 0.02).unwrap();

    let a = run(&bond, 1_000, 1, VarianceReduction::Antithetic);
    let b = run(&bond, 1_000, 1, VarianceReduction::Antithetic);
    let c = run(&bond, 1_000, 2, VarianceReduction::Antithetic);

    assert_eq!(a.price, b.price);
    assert_ne!(a.price, c.price);
}

#[test]
fn test_floating_rate_tends_to_par_as_spread_vanishes() {
    let bond =
        Bond::with_spread(1000.0, 0.0, 10, 0.05, 0.0, BondType::FloatingRate, 1e-7).unwrap();
    let result = run(&bond, 1_000, 9, VarianceReduction::Antithetic);
    assert_relative_eq!(result.price, 1000.0, epsilon = 0.01);

    let par = Bond::new(1000.0, 0.05, 10, 0.05, 0.0, BondType::Regular).unwrap();
    let par_result = run(&par, 1_000, 9, VarianceReduction::Antithetic);
    assert_relative_eq!(result.price, par_result.price, epsilon = 0.01);
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(24))]

    #[test]
    fn regular_price_within_risk_free_bounds(
        coupon in 0.0f64..0.12,
        maturity in 1u32..20,
        rate in 0.0f64..0.12,
        p in 0.0f64..=1.0,
        seed in any::<u64>(),
    ) {
        let bond = Bond::new(1000.0, coupon, maturity, rate, p, BondType::Regular).unwrap();
        let result = run(&bond, 200, seed, VarianceReduction::Antithetic);
        let upper = regular_risk_free_value(&bond);

        prop_assert!(result.price >= 0.0);
        prop_assert!(result.price <= upper + 1e-6);
    }
}
