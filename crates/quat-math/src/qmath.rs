//! Stateless math functions over quaternions.
//!
//! The quaternion analogue of the standard library's `f64` transcendental
//! methods: normalization, exponential, logarithm, power, multiplicative
//! inverse, and division.
//!
//! Everything here is a pure free function. Operations that can fail on
//! degenerate input return [`Result`]; the degenerate cases are checked
//! explicitly before any arithmetic that would otherwise produce NaN or
//! infinity.
//!
//! Parameters that accept "a real or a quaternion" are
//! `impl Into<Quaternion>`: the real-to-quaternion embedding is the only
//! coercion in the algebra, so `pow(2.0, q)` and `pow(p, q)` both work while
//! any other operand type is rejected at compile time.
//!
//! # Usage
//!
//! ```rust
//! use quat_math::{qmath, Quaternion};
//! use approx::assert_relative_eq;
//!
//! let q = Quaternion::new(0.0, 1.0, 1.0, 0.0);
//!
//! // exp and ln are inverse on non-degenerate input.
//! let back = qmath::ln(qmath::exp(q)).unwrap();
//! assert_relative_eq!(back, q, max_relative = 1e-12);
//!
//! // The zero quaternion has no inverse.
//! assert!(qmath::invert(Quaternion::ZERO).is_err());
//! ```

use crate::Quaternion;
use quat_core::{approx_zero, Error, Result};
use std::f64::consts::PI;

/// Returns `q / |q|`, the proportional quaternion with norm 1.
///
/// # Errors
///
/// [`Error::DivisionByZero`] if `q` is the zero quaternion.
///
/// # Example
///
/// ```rust
/// use quat_math::{qmath, Quaternion};
///
/// let unit = qmath::normalize(Quaternion::new(0.0, 3.0, 0.0, 4.0)).unwrap();
/// assert!((unit.norm() - 1.0).abs() < 1e-12);
/// ```
pub fn normalize(q: Quaternion) -> Result<Quaternion> {
    if q.is_zero() {
        return Err(Error::division_by_zero("normalize"));
    }
    Ok(q * (1.0 / q.norm()))
}

/// Returns `e` raised to the power `q`.
///
/// For `q = a + v` with imaginary part `v`:
///
/// ```text
/// exp(q) = e^a · (cos|v| + v̂·sin|v|)
/// ```
///
/// Total: when `|v| = 0` the rotation axis `v̂` is undefined (0/0), so the
/// function short-circuits to the scalar exponential `e^a` instead of
/// invoking normalization.
pub fn exp(q: Quaternion) -> Quaternion {
    let v = q.imag();
    let vn = v.norm();
    let ea = q.a.exp();
    if approx_zero(vn) {
        return Quaternion::from_real(ea);
    }
    let unit = v * (1.0 / vn);
    ea * (unit * vn.sin() + vn.cos())
}

/// Returns the natural logarithm of `q`.
///
/// For `q = a + v` with imaginary part `v`:
///
/// ```text
/// ln(q) = ln|q| + v̂·acos(a / |q|)
/// ```
///
/// The argument `a/|q|` always lies in `[-1, 1]` since `|a| ≤ |q|`, so the
/// `acos` is well defined for every nonzero quaternion.
///
/// Pure-real quaternions have no imaginary direction to normalize and are
/// special-cased on the principal branch: positive reals map to the scalar
/// `ln a`, negative reals to `ln|q| + i·π` (the axis `i` by convention,
/// matching the complex-plane embedding `a + b·i`).
///
/// # Errors
///
/// [`Error::DivisionByZero`] if `q` is the zero quaternion.
pub fn ln(q: Quaternion) -> Result<Quaternion> {
    if q.is_zero() {
        return Err(Error::division_by_zero("take the logarithm of"));
    }
    let n = q.norm();
    let v = q.imag();
    let vn = v.norm();
    if approx_zero(vn) {
        if q.a > 0.0 {
            return Ok(Quaternion::from_real(n.ln()));
        }
        return Ok(Quaternion::new(n.ln(), PI, 0.0, 0.0));
    }
    let unit = v * (1.0 / vn);
    Ok(unit * (q.a / n).acos() + n.ln())
}

/// Returns the logarithm of `q` to the given `base`.
///
/// Defined as `ln(q) / ln(base)`. The base may be a real number or a
/// quaternion.
///
/// # Errors
///
/// [`Error::DivisionByZero`] if `q` or `base` is zero, or if `ln(base)` is
/// zero (base 1 has no logarithms).
pub fn log(q: Quaternion, base: impl Into<Quaternion>) -> Result<Quaternion> {
    div(ln(q)?, ln(base.into())?)
}

/// Returns `base` raised to the power `exponent`.
///
/// Defined as `exp(ln(base) · exponent)`. Both arguments may be real numbers
/// or quaternions.
///
/// # Errors
///
/// [`Error::DivisionByZero`] if `base` is zero.
///
/// # Example
///
/// ```rust
/// use quat_math::{qmath, Quaternion};
/// use approx::assert_relative_eq;
///
/// let q = Quaternion::new(1.0, 2.0, 0.5, -1.0);
/// assert_relative_eq!(qmath::pow(q, 2.0).unwrap(), q * q, max_relative = 1e-12);
///
/// // (-1)^(1/2) = i on the principal branch.
/// let root = qmath::pow(-1.0, 0.5).unwrap();
/// assert_relative_eq!(root, Quaternion::I, epsilon = 1e-12);
/// ```
pub fn pow(base: impl Into<Quaternion>, exponent: impl Into<Quaternion>) -> Result<Quaternion> {
    Ok(exp(ln(base.into())? * exponent.into()))
}

/// Returns the multiplicative inverse `q⁻¹ = conjugate(q) / |q|²`.
///
/// The zero check runs before the arithmetic: dividing the conjugate by a
/// zero squared norm would yield NaN components, never a clean error.
///
/// # Errors
///
/// [`Error::DivisionByZero`] if `q` is the zero quaternion.
///
/// # Example
///
/// ```rust
/// use quat_math::{qmath, Quaternion};
/// use approx::assert_relative_eq;
///
/// let q = Quaternion::new(1.0, -1.0, 1.0, -1.0);
/// let inv = qmath::invert(q).unwrap();
/// assert_relative_eq!(q * inv, Quaternion::ONE, epsilon = 1e-12);
/// ```
pub fn invert(q: Quaternion) -> Result<Quaternion> {
    if q.is_zero() {
        return Err(Error::division_by_zero("invert"));
    }
    Ok(q.conjugate() * (1.0 / q.norm_squared()))
}

/// Returns the right division `p / q = p · q⁻¹`.
///
/// Algebraic in the sense that `(p / q) · q = p`. The divisor may be a real
/// number or a quaternion; a real divisor reduces to scaling by its
/// reciprocal.
///
/// # Errors
///
/// [`Error::DivisionByZero`] if the divisor is zero.
pub fn div(p: Quaternion, q: impl Into<Quaternion>) -> Result<Quaternion> {
    let q = q.into();
    if q.is_zero() {
        return Err(Error::division_by_zero("divide by"));
    }
    Ok(p * (q.conjugate() * (1.0 / q.norm_squared())))
}
