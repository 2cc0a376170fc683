//! Error types for quaternion and rotation operations.
//!
//! This module provides the unified error handling for the quat-rs workspace.
//!
//! # Overview
//!
//! The [`Error`] enum covers the failure modes of quaternion algebra:
//!
//! - Division by a zero-magnitude value (inversion, normalization, division,
//!   logarithms of the zero quaternion)
//! - Building a rotation from a zero-length axis
//! - Recovering axis-angle from a quaternion with no imaginary part
//!
//! Type mismatches have no runtime representation: operands are statically
//! `Quaternion` or `f64`, and the only coercion is the real-to-quaternion
//! embedding expressed through `From<f64>`.
//!
//! # Usage
//!
//! ```rust
//! use quat_core::{Error, Result};
//!
//! fn reciprocal(x: f64) -> Result<f64> {
//!     if x == 0.0 {
//!         return Err(Error::division_by_zero("invert"));
//!     }
//!     Ok(1.0 / x)
//! }
//! ```

use thiserror::Error;

/// Result type alias using [`Error`] as the error type.
///
/// Convenience alias for `std::result::Result<T, Error>`.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur during quaternion and rotation operations.
///
/// This enum uses [`thiserror`] for automatic [`std::error::Error`] and
/// [`std::fmt::Display`] implementations.
///
/// # Categories
///
/// - **Division errors**: [`DivisionByZero`](Error::DivisionByZero)
/// - **Rotation errors**: [`ZeroAxis`](Error::ZeroAxis),
///   [`DegenerateRotation`](Error::DegenerateRotation)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    /// An operation attempted to divide by a zero-magnitude value.
    ///
    /// Returned when inverting, normalizing, dividing by, or taking the
    /// logarithm of the zero quaternion (or normalizing the zero vector).
    /// The zero check happens before the arithmetic, so callers see this
    /// error rather than NaN components.
    #[error("division by zero: cannot {op} a value with zero magnitude")]
    DivisionByZero {
        /// The operation that required a nonzero operand
        op: &'static str,
    },

    /// A rotation was constructed from a zero-length axis.
    ///
    /// An axis-angle rotation needs a direction; the zero vector has none.
    #[error("rotation axis has zero length")]
    ZeroAxis,

    /// No unique rotation axis can be recovered from a quaternion.
    ///
    /// A quaternion with zero imaginary part represents a rotation by 0 (or
    /// 2π), for which every axis is equally valid. Recovering axis-angle
    /// from such a quaternion fails rather than inventing an axis.
    #[error("degenerate rotation: quaternion has zero imaginary part, no unique axis")]
    DegenerateRotation,
}

impl Error {
    /// Creates an [`Error::DivisionByZero`] error.
    ///
    /// `op` names the operation that needed a nonzero operand, e.g.
    /// `"invert"` or `"normalize"`.
    #[inline]
    pub fn division_by_zero(op: &'static str) -> Self {
        Self::DivisionByZero { op }
    }

    /// Returns `true` if this is a division-by-zero error.
    #[inline]
    pub fn is_division_by_zero(&self) -> bool {
        matches!(self, Self::DivisionByZero { .. })
    }

    /// Returns `true` if this is a rotation-related error.
    #[inline]
    pub fn is_rotation_error(&self) -> bool {
        matches!(self, Self::ZeroAxis | Self::DegenerateRotation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_division_by_zero() {
        let err = Error::division_by_zero("invert");
        assert!(err.to_string().contains("invert"));
        assert!(err.is_division_by_zero());
        assert!(!err.is_rotation_error());
    }

    #[test]
    fn test_zero_axis() {
        let err = Error::ZeroAxis;
        assert!(err.to_string().contains("zero length"));
        assert!(err.is_rotation_error());
    }

    #[test]
    fn test_degenerate_rotation() {
        let err = Error::DegenerateRotation;
        assert!(err.to_string().contains("no unique axis"));
        assert!(err.is_rotation_error());
        assert!(!err.is_division_by_zero());
    }
}
