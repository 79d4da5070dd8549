//! # tristim-math
//!
//! Math utilities underpinning tristimulus color processing.
//!
//! This crate provides the numeric foundation for the rest of the workspace:
//!
//! - [`Mat3`] - 3x3 matrices for color space transformations, fully usable
//!   in `const` contexts so conversion matrices can be derived at compile time
//! - [`Channel`] - the scalar math provider: a sealed extension of
//!   [`num_traits::Float`] that adds the IEEE-754 functions the standard
//!   library does not expose (error/gamma functions, floating-point
//!   decomposition, remainder-with-quotient)
//! - Interpolation utilities ([`lerp`], [`lerp_sat`], [`bilerp`], [`Interval`])
//!
//! # Design
//!
//! All matrix operations assume **row-major** storage and **column vectors**:
//!
//! ```text
//! result = matrix * vector
//! ```
//!
//! Matrices are `f64`; per-channel color math is generic over [`Channel`]
//! (f32 or f64) and casts matrix entries down at the use site.
//!
//! # Dependencies
//!
//! - [`num_traits`] - Generic float bound
//! - [`libm`] - Scalar functions missing from std (erf, frexp, remquo, ...)
//!
//! # Used By
//!
//! - `tristim-primaries` - RGB/XYZ matrix generation
//! - `tristim-color` - Channel triples and conversions

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod interp;
mod mat3;
mod scalar;

pub use interp::*;
pub use mat3::*;
pub use scalar::*;
