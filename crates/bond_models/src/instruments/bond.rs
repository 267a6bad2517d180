//! Bond descriptor and bond type tag.

use std::fmt;
use std::str::FromStr;

use crate::error::BondError;

/// Bond type selecting the pricing model.
///
/// # Examples
///
/// ```
/// use bond_models::BondType;
///
/// let ty: BondType = "ZeroCoupon".parse().unwrap();
/// assert_eq!(ty, BondType::ZeroCoupon);
/// assert!(!ty.uses_coupon());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum BondType {
    /// Fixed-coupon bond with per-period default risk.
    Regular,
    /// Single payment of face value at maturity.
    ZeroCoupon,
    /// Coupon reset each period from a noisy floating rate.
    FloatingRate,
    /// Regular bond convertible into equity at maturity.
    Convertible,
}

impl BondType {
    /// All bond types in declaration order.
    pub const ALL: [BondType; 4] = [
        BondType::Regular,
        BondType::ZeroCoupon,
        BondType::FloatingRate,
        BondType::Convertible,
    ];

    /// Returns the canonical name.
    #[inline]
    pub fn name(&self) -> &'static str {
        match self {
            BondType::Regular => "Regular",
            BondType::ZeroCoupon => "ZeroCoupon",
            BondType::FloatingRate => "FloatingRate",
            BondType::Convertible => "Convertible",
        }
    }

    /// Returns `true` if the bond pays a coupon sized by `coupon_rate`.
    #[inline]
    pub fn uses_coupon(&self) -> bool {
        !matches!(self, BondType::ZeroCoupon)
    }

    /// Returns `true` if the bond reads `floating_rate_spread`.
    #[inline]
    pub fn uses_spread(&self) -> bool {
        matches!(self, BondType::FloatingRate)
    }
}

impl fmt::Display for BondType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for BondType {
    type Err = String;

    /// Parses a bond type (case-insensitive, `-`, `_` and spaces ignored).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace(['-', '_', ' '], "").as_str() {
            "regular" => Ok(BondType::Regular),
            "zerocoupon" | "zero" => Ok(BondType::ZeroCoupon),
            "floatingrate" | "floating" | "frn" => Ok(BondType::FloatingRate),
            "convertible" => Ok(BondType::Convertible),
            _ => Err(format!(
                "Unknown bond type: {} (expected Regular, ZeroCoupon, FloatingRate or Convertible)",
                s.trim()
            )),
        }
    }
}

/// Immutable bond descriptor.
///
/// Fields are private so a `Bond` can only exist in a validated state.
/// Construct with [`Bond::new`] or [`Bond::with_spread`].
///
/// # Examples
///
/// ```
/// use bond_models::{Bond, BondType, BondError};
///
/// let bond = Bond::new(1000.0, 0.05, 10, 0.04, 0.01, BondType::Regular).unwrap();
/// assert_eq!(bond.maturity(), 10);
///
/// let err = Bond::new(1000.0, 0.05, 0, 0.04, 0.01, BondType::Regular).unwrap_err();
/// assert!(matches!(err, BondError::InvalidArgument { name: "maturity", .. }));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Bond {
    face_value: f64,
    coupon_rate: f64,
    maturity: u32,
    market_rate: f64,
    default_probability: f64,
    bond_type: BondType,
    floating_rate_spread: f64,
}

impl Bond {
    /// Creates a bond with a zero floating-rate spread.
    ///
    /// # Errors
    ///
    /// Returns [`BondError::InvalidArgument`] if:
    /// - `face_value` is not a positive finite number
    /// - `coupon_rate` is negative or not finite
    /// - `maturity` is 0
    /// - `market_rate` is not finite
    /// - `default_probability` is outside [0, 1]
    pub fn new(
        face_value: f64,
        coupon_rate: f64,
        maturity: u32,
        market_rate: f64,
        default_probability: f64,
        bond_type: BondType,
    ) -> Result<Self, BondError> {
        Self::with_spread(
            face_value,
            coupon_rate,
            maturity,
            market_rate,
            default_probability,
            bond_type,
            0.0,
        )
    }

    /// Creates a bond with an explicit floating-rate spread.
    ///
    /// The spread is stored for every bond type but only the floating-rate
    /// model reads it.
    ///
    /// # Errors
    ///
    /// As [`Bond::new`], plus a non-finite `floating_rate_spread`.
    pub fn with_spread(
        face_value: f64,
        coupon_rate: f64,
        maturity: u32,
        market_rate: f64,
        default_probability: f64,
        bond_type: BondType,
        floating_rate_spread: f64,
    ) -> Result<Self, BondError> {
        if !(face_value > 0.0 && face_value.is_finite()) {
            return Err(BondError::invalid(
                "face_value",
                format!("must be positive and finite, got {}", face_value),
            ));
        }
        if !(coupon_rate >= 0.0 && coupon_rate.is_finite()) {
            return Err(BondError::invalid(
                "coupon_rate",
                format!("must be non-negative and finite, got {}", coupon_rate),
            ));
        }
        if maturity < 1 {
            return Err(BondError::invalid(
                "maturity",
                format!("must be at least 1 period, got {}", maturity),
            ));
        }
        if !market_rate.is_finite() {
            return Err(BondError::invalid(
                "market_rate",
                format!("must be finite, got {}", market_rate),
            ));
        }
        if !(0.0..=1.0).contains(&default_probability) {
            return Err(BondError::invalid(
                "default_probability",
                format!("must be in [0, 1], got {}", default_probability),
            ));
        }
        if !floating_rate_spread.is_finite() {
            return Err(BondError::invalid(
                "floating_rate_spread",
                format!("must be finite, got {}", floating_rate_spread),
            ));
        }

        Ok(Self {
            face_value,
            coupon_rate,
            maturity,
            market_rate,
            default_probability,
            bond_type,
            floating_rate_spread,
        })
    }

    /// Principal repaid at maturity.
    #[inline]
    pub fn face_value(&self) -> f64 {
        self.face_value
    }

    /// Annual coupon as a fraction of face value.
    #[inline]
    pub fn coupon_rate(&self) -> f64 {
        self.coupon_rate
    }

    /// Number of annual periods.
    #[inline]
    pub fn maturity(&self) -> u32 {
        self.maturity
    }

    /// Base discount rate.
    #[inline]
    pub fn market_rate(&self) -> f64 {
        self.market_rate
    }

    /// Per-period probability of default.
    #[inline]
    pub fn default_probability(&self) -> f64 {
        self.default_probability
    }

    /// Bond type tag.
    #[inline]
    pub fn bond_type(&self) -> BondType {
        self.bond_type
    }

    /// Volatility coefficient applied to the floating-rate noise draw.
    #[inline]
    pub fn floating_rate_spread(&self) -> f64 {
        self.floating_rate_spread
    }

    /// Annual coupon payment, `face_value × coupon_rate`.
    #[inline]
    pub fn coupon_payment(&self) -> f64 {
        self.face_value * self.coupon_rate
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn regular() -> Result<Bond, BondError> {
        Bond::new(1000.0, 0.05, 3, 0.05, 0.0, BondType::Regular)
    }

    #[test]
    fn test_new_valid() {
        let bond = regular().unwrap();
        assert_eq!(bond.face_value(), 1000.0);
        assert_eq!(bond.coupon_rate(), 0.05);
        assert_eq!(bond.maturity(), 3);
        assert_eq!(bond.market_rate(), 0.05);
        assert_eq!(bond.default_probability(), 0.0);
        assert_eq!(bond.bond_type(), BondType::Regular);
        assert_eq!(bond.floating_rate_spread(), 0.0);
        assert_eq!(bond.coupon_payment(), 50.0);
    }

    #[test]
    fn test_rejects_non_positive_face_value() {
        for face in [0.0, -100.0, f64::NAN, f64::INFINITY] {
            let err = Bond::new(face, 0.05, 3, 0.05, 0.0, BondType::Regular).unwrap_err();
            assert!(matches!(
                err,
                BondError::InvalidArgument {
                    name: "face_value",
                    ..
                }
            ));
        }
    }

    #[test]
    fn test_rejects_zero_maturity() {
        let err = Bond::new(1000.0, 0.05, 0, 0.05, 0.0, BondType::ZeroCoupon).unwrap_err();
        assert!(matches!(
            err,
            BondError::InvalidArgument {
                name: "maturity",
                ..
            }
        ));
    }

    #[test]
    fn test_rejects_probability_out_of_range() {
        for p in [-0.01, 1.01, f64::NAN] {
            let err = Bond::new(1000.0, 0.05, 3, 0.05, p, BondType::Regular).unwrap_err();
            assert!(matches!(
                err,
                BondError::InvalidArgument {
                    name: "default_probability",
                    ..
                }
            ));
        }
    }

    #[test]
    fn test_probability_bounds_inclusive() {
        assert!(Bond::new(1000.0, 0.05, 3, 0.05, 0.0, BondType::Regular).is_ok());
        assert!(Bond::new(1000.0, 0.05, 3, 0.05, 1.0, BondType::Regular).is_ok());
    }

    #[test]
    fn test_rejects_negative_coupon_and_bad_rates() {
        assert!(Bond::new(1000.0, -0.01, 3, 0.05, 0.0, BondType::Regular).is_err());
        assert!(Bond::new(1000.0, 0.05, 3, f64::NAN, 0.0, BondType::Regular).is_err());
        assert!(
            Bond::with_spread(1000.0, 0.05, 3, 0.05, 0.0, BondType::FloatingRate, f64::INFINITY)
                .is_err()
        );
    }

    #[test]
    fn test_negative_market_rate_allowed() {
        assert!(Bond::new(1000.0, 0.0, 2, -0.005, 0.0, BondType::ZeroCoupon).is_ok());
    }

    #[test]
    fn test_bond_type_from_str() {
        assert_eq!("regular".parse::<BondType>(), Ok(BondType::Regular));
        assert_eq!(" ZeroCoupon ".parse::<BondType>(), Ok(BondType::ZeroCoupon));
        assert_eq!("zero-coupon".parse::<BondType>(), Ok(BondType::ZeroCoupon));
        assert_eq!("FLOATING_RATE".parse::<BondType>(), Ok(BondType::FloatingRate));
        assert_eq!("Convertible".parse::<BondType>(), Ok(BondType::Convertible));
        assert!("perpetual".parse::<BondType>().is_err());
    }

    #[test]
    fn test_bond_type_display_round_trip() {
        for ty in BondType::ALL {
            assert_eq!(ty.to_string().parse::<BondType>(), Ok(ty));
        }
    }

    #[test]
    fn test_bond_type_flags() {
        assert!(BondType::Regular.uses_coupon());
        assert!(!BondType::ZeroCoupon.uses_coupon());
        assert!(BondType::FloatingRate.uses_spread());
        assert!(!BondType::Convertible.uses_spread());
    }
}
