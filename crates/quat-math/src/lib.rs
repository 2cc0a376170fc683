//! # quat-math
//!
//! Quaternion algebra and axis-angle rotation of 3D vectors.
//!
//! This crate provides the mathematical core of quat-rs:
//!
//! - [`Quaternion`] - Immutable four-component value `a + b·i + c·j + d·k`
//!   with the full Hamilton algebra
//! - [`Vec3`] - 3D vector used for points and rotation axes
//! - [`Rotation`] - Axis-angle rotation descriptor (right-hand rule)
//! - [`qmath`] - Stateless functions over quaternions: normalization,
//!   exponential, logarithm, power, inversion, division
//! - [`rotate`], [`rotate_by_quaternion`] - Vector rotation via the
//!   quaternion sandwich product
//!
//! # Design
//!
//! `Quaternion` carries only the total operations (`+`, `-`, `*`, negation,
//! conjugation, norm) as operators and methods. Everything that can fail —
//! inversion, division, normalization, logarithm, power — lives in [`qmath`]
//! as free functions returning [`Result`](quat_core::Result), so degenerate
//! inputs surface as errors instead of NaN.
//!
//! Angles follow the right-hand rule: a positive angle rotates
//! counterclockwise when looking down the axis toward the origin.
//!
//! # Usage
//!
//! ```rust
//! use quat_math::{rotate, Rotation, Vec3};
//! use std::f64::consts::FRAC_PI_2;
//!
//! // Quarter turn clockwise about +z maps (1, 1, 0) to (1, -1, 0).
//! let rotation = Rotation::new(Vec3::Z, -FRAC_PI_2);
//! let rotated = rotate(Vec3::new(1.0, 1.0, 0.0), &rotation).unwrap();
//! assert!((rotated.x - 1.0).abs() < 1e-12);
//! assert!((rotated.y + 1.0).abs() < 1e-12);
//! ```
//!
//! # Dependencies
//!
//! - [`quat-core`](quat_core) - Error type and zero tolerance
//! - [`glam`] - Interop conversions ([`Quaternion::to_glam`],
//!   [`Vec3::to_glam`])
//! - [`approx`] - Tolerance-based equality on all value types
//!
//! # Feature Flags
//!
//! - `serde` - Enable serialization for [`Vec3`], [`Quaternion`] and
//!   [`Rotation`]

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod quaternion;
mod rotation;
mod vec3;

pub mod qmath;

pub use quaternion::*;
pub use rotation::*;
pub use vec3::*;
