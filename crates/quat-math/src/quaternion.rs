//! Quaternion value type.
//!
//! [`Quaternion`] is an immutable four-component value `a + b·i + c·j + d·k`
//! carrying the Hamilton algebra: componentwise addition, the non-commutative
//! Hamilton product, conjugation, and the Euclidean norm.
//!
//! Only total operations live here. Anything that can fail on degenerate
//! input (inversion, division, normalization, `exp`/`ln`/`pow`) is a free
//! function in [`qmath`](crate::qmath), and the axis-angle conversions live
//! in [`rotation`](crate::Rotation).
//!
//! # Usage
//!
//! ```rust
//! use quat_math::Quaternion;
//!
//! // The defining identities of the basis units.
//! assert_eq!(Quaternion::I * Quaternion::J, Quaternion::K);
//! assert_eq!(Quaternion::J * Quaternion::I, -Quaternion::K);
//! assert_eq!(
//!     Quaternion::I * Quaternion::J * Quaternion::K,
//!     -Quaternion::ONE
//! );
//! ```

use crate::Vec3;
use approx::{AbsDiffEq, RelativeEq, UlpsEq};
use quat_core::approx_zero;
use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};

/// A quaternion `a + b·i + c·j + d·k` over `f64`.
///
/// Immutable value type: every operation returns a new quaternion, no
/// instance is mutated after construction. Copied freely.
///
/// Structural equality (`==`) is derived for convenience, but algorithmic
/// comparisons use tolerance-based equality: [`Quaternion::is_zero`] for the
/// zero guard, and the [`approx`] traits
/// ([`AbsDiffEq`](approx::AbsDiffEq)/[`RelativeEq`](approx::RelativeEq)) for
/// value comparison in tests.
///
/// # Example
///
/// ```rust
/// use quat_math::Quaternion;
///
/// let q = Quaternion::new(1.0, 1.0, 1.0, 1.0);
/// assert_eq!(q.norm(), 2.0);
/// assert_eq!(q.conjugate(), Quaternion::new(1.0, -1.0, -1.0, -1.0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(C)]
pub struct Quaternion {
    /// Real (scalar) part
    pub a: f64,
    /// Coefficient of `i`
    pub b: f64,
    /// Coefficient of `j`
    pub c: f64,
    /// Coefficient of `k`
    pub d: f64,
}

impl Quaternion {
    /// The zero quaternion. Additive identity; has no multiplicative inverse.
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0, 0.0);

    /// The quaternion `1`. Multiplicative identity.
    pub const ONE: Self = Self::new(1.0, 0.0, 0.0, 0.0);

    /// The basis unit `i`.
    pub const I: Self = Self::new(0.0, 1.0, 0.0, 0.0);

    /// The basis unit `j`.
    pub const J: Self = Self::new(0.0, 0.0, 1.0, 0.0);

    /// The basis unit `k`.
    pub const K: Self = Self::new(0.0, 0.0, 0.0, 1.0);

    /// Creates a quaternion from four real coefficients.
    #[inline]
    pub const fn new(a: f64, b: f64, c: f64, d: f64) -> Self {
        Self { a, b, c, d }
    }

    /// Creates a quaternion with only the real part set.
    ///
    /// This is the canonical embedding of the reals, also available as
    /// `From<f64>`.
    #[inline]
    pub const fn from_real(a: f64) -> Self {
        Self::new(a, 0.0, 0.0, 0.0)
    }

    /// Creates a pure-imaginary quaternion `0 + x·i + y·j + z·k` from a
    /// vector.
    ///
    /// Used to embed a 3-vector for the rotation sandwich product.
    #[inline]
    pub const fn from_imag(v: Vec3) -> Self {
        Self::new(0.0, v.x, v.y, v.z)
    }

    /// Creates from an array `[a, b, c, d]`.
    #[inline]
    pub const fn from_array(q: [f64; 4]) -> Self {
        Self::new(q[0], q[1], q[2], q[3])
    }

    /// Converts to an array `[a, b, c, d]`.
    #[inline]
    pub const fn to_array(self) -> [f64; 4] {
        [self.a, self.b, self.c, self.d]
    }

    /// Returns the imaginary part as a quaternion with zero real part.
    ///
    /// `a + b·i + c·j + d·k` becomes `0 + b·i + c·j + d·k`.
    #[inline]
    pub const fn imag(self) -> Self {
        Self::new(0.0, self.b, self.c, self.d)
    }

    /// Returns the imaginary components `(b, c, d)` as a [`Vec3`].
    #[inline]
    pub const fn imag_vec(self) -> Vec3 {
        Vec3::new(self.b, self.c, self.d)
    }

    /// Returns the conjugate `a - b·i - c·j - d·k`.
    #[inline]
    pub fn conjugate(self) -> Self {
        Self::new(self.a, -self.b, -self.c, -self.d)
    }

    /// Returns the norm (absolute value) `sqrt(a² + b² + c² + d²)`.
    ///
    /// Nonnegative; zero iff the quaternion is the zero quaternion.
    #[inline]
    pub fn norm(self) -> f64 {
        self.norm_squared().sqrt()
    }

    /// Returns the squared norm `a² + b² + c² + d²` (avoids the sqrt).
    #[inline]
    pub fn norm_squared(self) -> f64 {
        self.a * self.a + self.b * self.b + self.c * self.c + self.d * self.d
    }

    /// Returns `true` if all four components are approximately zero.
    ///
    /// This is the truth test guarding inversion, division, and
    /// normalization: the zero quaternion has no multiplicative inverse.
    /// Uses the shared [`quat_core::EPSILON`] tolerance.
    #[inline]
    pub fn is_zero(self) -> bool {
        approx_zero(self.a) && approx_zero(self.b) && approx_zero(self.c) && approx_zero(self.d)
    }

    /// Returns true if all components are finite (not NaN or infinite).
    #[inline]
    pub fn is_finite(self) -> bool {
        self.a.is_finite() && self.b.is_finite() && self.c.is_finite() && self.d.is_finite()
    }

    /// Converts to a glam [`DQuat`](glam::DQuat).
    ///
    /// glam stores the scalar part last (`x, y, z, w` with `w` real).
    #[inline]
    pub fn to_glam(self) -> glam::DQuat {
        glam::DQuat::from_xyzw(self.b, self.c, self.d, self.a)
    }

    /// Creates from a glam [`DQuat`](glam::DQuat).
    #[inline]
    pub fn from_glam(q: glam::DQuat) -> Self {
        Self::new(q.w, q.x, q.y, q.z)
    }
}

impl fmt::Display for Quaternion {
    /// Formats as `a+bi+cj+dk` with explicit signs on all four coefficients.
    ///
    /// ```rust
    /// use quat_math::Quaternion;
    ///
    /// let q = Quaternion::new(1.0, -2.0, 0.0, 4.5);
    /// assert_eq!(q.to_string(), "1-2i+0j+4.5k");
    /// ```
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{:+}i{:+}j{:+}k", self.a, self.b, self.c, self.d)
    }
}

impl From<f64> for Quaternion {
    /// Embeds a real number as `(r, 0, 0, 0)`.
    ///
    /// The only implicit coercion in the algebra; everything else is a type
    /// error at compile time.
    #[inline]
    fn from(r: f64) -> Self {
        Self::from_real(r)
    }
}

impl From<[f64; 4]> for Quaternion {
    #[inline]
    fn from(q: [f64; 4]) -> Self {
        Self::from_array(q)
    }
}

impl From<Quaternion> for [f64; 4] {
    #[inline]
    fn from(q: Quaternion) -> [f64; 4] {
        q.to_array()
    }
}

impl From<glam::DQuat> for Quaternion {
    #[inline]
    fn from(q: glam::DQuat) -> Self {
        Self::from_glam(q)
    }
}

impl From<Quaternion> for glam::DQuat {
    #[inline]
    fn from(q: Quaternion) -> glam::DQuat {
        q.to_glam()
    }
}

// Quaternion + Quaternion
impl Add for Quaternion {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(
            self.a + rhs.a,
            self.b + rhs.b,
            self.c + rhs.c,
            self.d + rhs.d,
        )
    }
}

// Quaternion + f64
impl Add<f64> for Quaternion {
    type Output = Self;

    #[inline]
    fn add(self, rhs: f64) -> Self {
        self + Self::from_real(rhs)
    }
}

// f64 + Quaternion
impl Add<Quaternion> for f64 {
    type Output = Quaternion;

    #[inline]
    fn add(self, rhs: Quaternion) -> Quaternion {
        Quaternion::from_real(self) + rhs
    }
}

// -Quaternion
impl Neg for Quaternion {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        self * -1.0
    }
}

// Quaternion - Quaternion
impl Sub for Quaternion {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        self + (-rhs)
    }
}

// Quaternion - f64
impl Sub<f64> for Quaternion {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: f64) -> Self {
        self + Self::from_real(-rhs)
    }
}

// f64 - Quaternion
impl Sub<Quaternion> for f64 {
    type Output = Quaternion;

    #[inline]
    fn sub(self, rhs: Quaternion) -> Quaternion {
        Quaternion::from_real(self) + (-rhs)
    }
}

// Quaternion * Quaternion (Hamilton product)
impl Mul for Quaternion {
    type Output = Self;

    /// The Hamilton product. Non-commutative: `i·j = k` but `j·i = -k`.
    #[inline]
    fn mul(self, rhs: Self) -> Self {
        Self::new(
            self.a * rhs.a - self.b * rhs.b - self.c * rhs.c - self.d * rhs.d,
            self.a * rhs.b + self.b * rhs.a + self.c * rhs.d - self.d * rhs.c,
            self.a * rhs.c - self.b * rhs.d + self.c * rhs.a + self.d * rhs.b,
            self.a * rhs.d + self.b * rhs.c - self.c * rhs.b + self.d * rhs.a,
        )
    }
}

// Quaternion * f64
impl Mul<f64> for Quaternion {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: f64) -> Self {
        Self::new(self.a * rhs, self.b * rhs, self.c * rhs, self.d * rhs)
    }
}

// f64 * Quaternion
impl Mul<Quaternion> for f64 {
    type Output = Quaternion;

    #[inline]
    fn mul(self, rhs: Quaternion) -> Quaternion {
        rhs * self
    }
}

impl AbsDiffEq for Quaternion {
    type Epsilon = f64;

    #[inline]
    fn default_epsilon() -> f64 {
        f64::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: f64) -> bool {
        f64::abs_diff_eq(&self.a, &other.a, epsilon)
            && f64::abs_diff_eq(&self.b, &other.b, epsilon)
            && f64::abs_diff_eq(&self.c, &other.c, epsilon)
            && f64::abs_diff_eq(&self.d, &other.d, epsilon)
    }
}

impl RelativeEq for Quaternion {
    #[inline]
    fn default_max_relative() -> f64 {
        f64::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: f64, max_relative: f64) -> bool {
        f64::relative_eq(&self.a, &other.a, epsilon, max_relative)
            && f64::relative_eq(&self.b, &other.b, epsilon, max_relative)
            && f64::relative_eq(&self.c, &other.c, epsilon, max_relative)
            && f64::relative_eq(&self.d, &other.d, epsilon, max_relative)
    }
}

impl UlpsEq for Quaternion {
    #[inline]
    fn default_max_ulps() -> u32 {
        f64::default_max_ulps()
    }

    fn ulps_eq(&self, other: &Self, epsilon: f64, max_ulps: u32) -> bool {
        f64::ulps_eq(&self.a, &other.a, epsilon, max_ulps)
            && f64::ulps_eq(&self.b, &other.b, epsilon, max_ulps)
            && f64::ulps_eq(&self.c, &other.c, epsilon, max_ulps)
            && f64::ulps_eq(&self.d, &other.d, epsilon, max_ulps)
    }
}
