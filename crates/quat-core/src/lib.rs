//! # quat-core
//!
//! Core types for quaternion rotation math.
//!
//! This crate provides the foundational pieces shared by the quat-rs
//! workspace:
//!
//! - [`Error`] / [`Result`] - Unified error type for all quaternion and
//!   rotation operations
//! - [`EPSILON`], [`approx_zero`] - The shared absolute tolerance used for
//!   zero detection
//!
//! ## Crate Structure
//!
//! This crate is the foundation of quat-rs and has no internal dependencies.
//! The other workspace crates depend on `quat-core`:
//!
//! ```text
//! quat-core (this crate)
//!    ^
//!    |
//!    +-- quat-math (quaternion algebra, axis-angle rotation)
//!    +-- quat-cli (demo command-line tool)
//! ```
//!
//! ## Error Philosophy
//!
//! Every degenerate input (zero quaternion, zero-length axis, zero imaginary
//! part) is checked explicitly before the arithmetic that would otherwise
//! produce NaN or infinity. Operations never return NaN as an error
//! substitute; they return [`Error`] through [`Result`].

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod error;
pub mod scalar;

pub use error::*;
pub use scalar::*;
