//! sRGB piecewise transfer curve (IEC 61966-2-1).

use crate::{Transfer, mirror};

/// The sRGB transfer curve.
///
/// A linear segment of slope 1/12.92 near zero joined to a 2.4-power
/// segment, giving an effective gamma of roughly 2.2. Negative inputs are
/// mirrored.
///
/// # Example
///
/// ```rust
/// use tristim_transfer::{Srgb, Transfer};
///
/// // Inside the linear toe the curve is a plain scale.
/// assert!((Srgb.to_linear(0.02) - 0.02 / 12.92).abs() < 1e-15);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Srgb;

// Encoded-domain breakpoint: 0.0031308 * 12.92.
const ENCODED_KNEE: f64 = 0.04045;
const LINEAR_KNEE: f64 = 0.0031308;
const SLOPE: f64 = 12.92;
const OFFSET: f64 = 0.055;
const EXPONENT: f64 = 2.4;

impl Transfer for Srgb {
    #[inline]
    fn to_linear(&self, v: f64) -> f64 {
        mirror(v, |v| {
            if v <= ENCODED_KNEE {
                v / SLOPE
            } else {
                ((v + OFFSET) / (1.0 + OFFSET)).powf(EXPONENT)
            }
        })
    }

    #[inline]
    fn to_nonlinear(&self, v: f64) -> f64 {
        mirror(v, |v| {
            if v <= LINEAR_KNEE {
                v * SLOPE
            } else {
                (1.0 + OFFSET) * v.powf(1.0 / EXPONENT) - OFFSET
            }
        })
    }
}
