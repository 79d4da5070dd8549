//! Interpolation over triples.

use tristim_math::Channel;

use crate::cwise::Operand;
use crate::rgb::LinearRgb;
use crate::space::RgbSpace;

/// Channelwise linear interpolation between two triples.
///
/// The factor may be one scalar for all channels or a triple of
/// per-channel factors; it is not clamped.
///
/// ```rust
/// use tristim_color::{LinearRgb, SRgb, lerp};
///
/// let a = LinearRgb::<f64, SRgb>::new(0.0, 0.0, 0.0);
/// let b = LinearRgb::<f64, SRgb>::new(1.0, 2.0, 4.0);
/// assert_eq!(lerp(a, b, 0.5), LinearRgb::new(0.5, 1.0, 2.0));
/// ```
#[inline]
pub fn lerp<T: Channel, S: RgbSpace>(
    a: LinearRgb<T, S>,
    b: LinearRgb<T, S>,
    t: impl Operand<T, S>,
) -> LinearRgb<T, S> {
    a.zip3_with(b, t, |a, b, t| tristim_math::lerp(a, b, t))
}

/// Like [`lerp`], with each factor saturated to `[0, 1]`.
#[inline]
pub fn lerp_sat<T: Channel, S: RgbSpace>(
    a: LinearRgb<T, S>,
    b: LinearRgb<T, S>,
    t: impl Operand<T, S>,
) -> LinearRgb<T, S> {
    a.zip3_with(b, t, |a, b, t| tristim_math::lerp_sat(a, b, t))
}
