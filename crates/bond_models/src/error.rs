//! Bond error types.
//!
//! Every error here is a caller contract violation detected before any
//! simulation work begins.

use thiserror::Error;

/// Bond construction and parameter errors.
///
/// # Examples
/// ```
/// use bond_models::BondError;
///
/// let err = BondError::invalid("face_value", "must be positive, got -1");
/// assert_eq!(
///     format!("{}", err),
///     "Invalid argument 'face_value': must be positive, got -1"
/// );
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
pub enum BondError {
    /// A bond or model parameter is malformed or out of range.
    #[error("Invalid argument '{name}': {reason}")]
    InvalidArgument {
        /// Parameter name.
        name: &'static str,
        /// Description of the violated constraint.
        reason: String,
    },
}

impl BondError {
    /// Creates an [`BondError::InvalidArgument`].
    pub fn invalid(name: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            name,
            reason: reason.into(),
        }
    }
}
