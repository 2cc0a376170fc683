//! Axis-angle rotation descriptors and vector rotation.
//!
//! [`Rotation`] is the canonical external representation of a 3D rotation:
//! an axis and an angle in radians, right-hand rule. [`Quaternion`] is the
//! internal computational representation; the two-way mapping lives here
//! ([`Quaternion::from_rotation`], [`Quaternion::to_rotation`]) together with
//! the [`rotate`] entry point.
//!
//! # Convention
//!
//! A positive angle rotates **counterclockwise** when looking down the axis
//! toward the origin (right-hand rule); a negative angle rotates clockwise.
//! Axes do not need to be pre-normalized — every function here normalizes
//! internally.
//!
//! # Usage
//!
//! ```rust
//! use quat_math::{rotate, Rotation, Vec3};
//! use std::f64::consts::FRAC_PI_2;
//! use approx::assert_relative_eq;
//!
//! // A quarter turn counterclockwise about +z takes +x to +y.
//! let r = Rotation::new(Vec3::Z, FRAC_PI_2);
//! let v = rotate(Vec3::X, &r).unwrap();
//! assert_relative_eq!(v, Vec3::Y, epsilon = 1e-12);
//! ```

use crate::{qmath, Quaternion, Vec3};
use quat_core::{Error, Result};

/// A rotation by `angle` radians about `axis`, following the right-hand
/// rule.
///
/// The axis may be any nonzero vector; functions consuming a `Rotation`
/// normalize it internally. The angle may be any real number — negative
/// angles rotate clockwise.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rotation {
    /// Rotation axis (not required to be unit length)
    pub axis: Vec3,
    /// Rotation angle in radians
    pub angle: f64,
}

impl Rotation {
    /// Creates a rotation from an axis and an angle in radians.
    #[inline]
    pub const fn new(axis: Vec3, angle: f64) -> Self {
        Self { axis, angle }
    }
}

impl Quaternion {
    /// Builds the unit quaternion representing a [`Rotation`].
    ///
    /// ```text
    /// q = cos(θ/2) + sin(θ/2)·normalize(axis)
    /// ```
    ///
    /// The result always has unit norm, which is what makes the conjugate
    /// sandwich in [`rotate`] a pure rotation.
    ///
    /// # Errors
    ///
    /// [`Error::ZeroAxis`] if the axis has zero length.
    ///
    /// # Example
    ///
    /// ```rust
    /// use quat_math::{Quaternion, Rotation, Vec3};
    /// use std::f64::consts::PI;
    ///
    /// let q = Quaternion::from_rotation(&Rotation::new(Vec3::Z, PI / 2.0)).unwrap();
    /// assert!((q.norm() - 1.0).abs() < 1e-12);
    /// ```
    pub fn from_rotation(rotation: &Rotation) -> Result<Self> {
        let axis = rotation.axis.normalize().map_err(|_| Error::ZeroAxis)?;
        let half = rotation.angle / 2.0;
        Ok(Self::from_imag(axis) * half.sin() + half.cos())
    }

    /// Recovers the [`Rotation`] represented by this quaternion.
    ///
    /// The axis is the normalized imaginary part; the angle is
    /// `2·atan2(|imag|, a)`, which lands in `[0, 2π]` and is consistent with
    /// the half-angle construction of [`Quaternion::from_rotation`]. The
    /// recovered axis always has unit length.
    ///
    /// Note the wrap convention: a negative input angle round-trips to its
    /// positive equivalent about the same axis (`-θ` about `n` comes back as
    /// `2π - θ` about `n` or `θ` about `-n`, the same rotation).
    ///
    /// # Errors
    ///
    /// [`Error::DegenerateRotation`] if the imaginary part is
    /// (approximately) zero — a rotation by 0 or 2π has no unique axis, and
    /// this method refuses to invent one.
    pub fn to_rotation(&self) -> Result<Rotation> {
        let v = self.imag();
        if v.is_zero() {
            return Err(Error::DegenerateRotation);
        }
        let axis = qmath::normalize(v)?.imag_vec();
        let angle = 2.0 * v.norm().atan2(self.a);
        Ok(Rotation::new(axis, angle))
    }
}

/// Rotates a vector by a [`Rotation`].
///
/// Builds the unit quaternion `q` for the rotation and computes the sandwich
/// product
///
/// ```text
/// q · (0, vec) · conjugate(q)
/// ```
///
/// which is pure imaginary; its imaginary components are the rotated vector.
/// Extracting them directly (rather than recovering an axis-angle pair from
/// the product) preserves the vector's magnitude: `|rotate(v, r)| = |v|`.
///
/// This is the primary entry point of the library.
///
/// # Errors
///
/// [`Error::ZeroAxis`] if the rotation axis has zero length.
///
/// # Example
///
/// ```rust
/// use quat_math::{rotate, Rotation, Vec3};
/// use std::f64::consts::FRAC_PI_2;
/// use approx::assert_relative_eq;
///
/// let clockwise = Rotation::new(Vec3::Z, -FRAC_PI_2);
/// let v = rotate(Vec3::new(1.0, 3.0, 0.0), &clockwise).unwrap();
/// assert_relative_eq!(v, Vec3::new(3.0, -1.0, 0.0), epsilon = 1e-12);
/// ```
pub fn rotate(vec: Vec3, rotation: &Rotation) -> Result<Vec3> {
    let q = Quaternion::from_rotation(rotation)?;
    let sandwich = q * Quaternion::from_imag(vec) * q.conjugate();
    Ok(sandwich.imag_vec())
}

/// Rotates a vector by an already-built quaternion.
///
/// Computes `(q · (0, vec)) / q` — the same sandwich as [`rotate`], with
/// right division in place of multiplication by the conjugate. For a unit
/// quaternion the two are identical since `conjugate(q) = q⁻¹`; for a
/// non-unit quaternion the division cancels the scale that the conjugate
/// form would introduce.
///
/// Useful when the caller already holds a rotation quaternion and wants to
/// skip the axis-angle construction.
///
/// # Errors
///
/// [`Error::DivisionByZero`] if `q` is the zero quaternion.
pub fn rotate_by_quaternion(vec: Vec3, q: Quaternion) -> Result<Vec3> {
    let sandwich = qmath::div(q * Quaternion::from_imag(vec), q)?;
    Ok(sandwich.imag_vec())
}
