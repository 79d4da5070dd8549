//! # tristim-transfer
//!
//! Transfer curves mapping between linear and nonlinear (gamma-encoded)
//! channel values.
//!
//! Three curve families are provided:
//!
//! - [`PowerLaw`] - the classic power-law gamma (1.0, 1.8, 2.2, or custom)
//! - [`Srgb`] - the IEC 61966-2-1 piecewise curve with a linear toe
//! - [`CieL`] - the CIE L* lightness curve
//!
//! # Sign handling
//!
//! Every curve is extended to negative inputs by odd symmetry:
//! `f(-v) == -f(v)`. Out-of-gamut channel values survive a round trip
//! through encoding instead of collapsing to NaN.
//!
//! # Conventions
//!
//! `to_linear` decodes a nonlinear value, `to_nonlinear` encodes a linear
//! one. Both operate on `f64`; generic channel types convert at the call
//! site. For well-formed curves `to_nonlinear(to_linear(v)) ≈ v`.
//!
//! # Example
//!
//! ```rust
//! use tristim_transfer::{Srgb, Transfer};
//!
//! let linear = Srgb.to_linear(0.5);
//! assert!((Srgb.to_nonlinear(linear) - 0.5).abs() < 1e-12);
//! ```
//!
//! # Used By
//!
//! - `tristim-color` - per-space gamma encoding and decoding

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod cie_l;
mod power;
mod srgb;

pub use cie_l::*;
pub use power::*;
pub use srgb::*;

/// A bidirectional transfer curve.
///
/// Implementors are small `Copy` value types so a curve can be stored as an
/// associated `const` on a color-space tag.
pub trait Transfer: Copy {
    /// Decodes a nonlinear (gamma-encoded) value to linear.
    fn to_linear(&self, v: f64) -> f64;

    /// Encodes a linear value to nonlinear.
    fn to_nonlinear(&self, v: f64) -> f64;
}

/// Extends a curve defined on `[0, ∞)` to negative inputs by odd symmetry.
#[inline]
pub(crate) fn mirror(v: f64, f: impl Fn(f64) -> f64) -> f64 {
    if v < 0.0 { -f(-v) } else { f(v) }
}
