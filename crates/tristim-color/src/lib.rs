//! # tristim-color
//!
//! Strongly-typed tristimulus triples with elementwise math and color-space
//! conversion.
//!
//! The central type is [`LinearRgb<T, S>`]: three channel values of type `T`
//! tagged at compile time with the RGB working space `S` they live in. The
//! tag is zero-sized, so a `LinearRgb<f32, SRgb>` is exactly three floats at
//! runtime, but adding an sRGB color to an Adobe RGB color is a type error.
//!
//! Three layers build on it:
//!
//! - **Broadcasting**: [`LinearRgb::map`], [`LinearRgb::zip_with`] and
//!   friends lift any scalar function over the channels, with every operand
//!   accepted either as a triple of the same space or as a bare scalar
//!   (see [`Operand`]).
//! - **Elementwise math**: the full IEEE-754 function surface as inherent
//!   methods ([`LinearRgb::sin`], [`LinearRgb::frexp`], ...) and mixed
//!   scalar/triple operator traits ([`Atan2`], [`Pow`], [`MulAdd`], ...).
//! - **Conversion**: [`LinearRgb::to_xyz`]/[`LinearRgb::from_xyz`] via the
//!   space's compile-time derived matrix, and [`GammaRgb`] for the
//!   gamma-encoded representation.
//!
//! # Example
//!
//! ```rust
//! use tristim_color::{LinearRgb, SRgb, Xyz};
//!
//! let c = LinearRgb::<f32, SRgb>::new(1.0, 0.0, 0.0);
//! let xyz: Xyz<f32> = c.to_xyz();
//! assert!((xyz.y - 0.212673).abs() < 1e-4);
//!
//! // Scalars broadcast across channels.
//! let half = c * 0.5 + 0.1;
//! assert_eq!(half.r, 0.6);
//! ```
//!
//! # Sixteen working spaces
//!
//! The Lindbloom set: [`SRgb`], [`AdobeRgb`], [`AppleRgb`], [`BestRgb`],
//! [`BetaRgb`], [`BruceRgb`], [`CieRgb`], [`ColorMatchRgb`], [`DonRgb4`],
//! [`EciRgbV2`], [`EktaSpacePs5`], [`NtscRgb`], [`PalSecamRgb`],
//! [`ProPhotoRgb`], [`SmpteC`], [`WideGamutRgb`]. Each carries its
//! primaries, conversion matrices and transfer curve as associated consts.
//!
//! # Dependencies
//!
//! - [`tristim_math`] - `Channel` scalar provider, `Mat3`
//! - [`tristim_primaries`] - working-space data and matrix derivation
//! - [`tristim_transfer`] - transfer curves for [`GammaRgb`]
//! - [`approx`] - componentwise approximate-equality impls

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod cmath;
mod convert;
mod cwise;
mod gamma;
mod interp;
mod rgb;
mod space;
mod xyz;

pub use cmath::*;
pub use cwise::*;
pub use gamma::*;
pub use interp::*;
pub use rgb::*;
pub use space::*;
pub use xyz::*;

pub use tristim_math::Channel;
pub use tristim_transfer::Transfer;
