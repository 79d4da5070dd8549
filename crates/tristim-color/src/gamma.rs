//! Gamma-encoded triples.

use std::fmt;
use std::marker::PhantomData;

use tristim_math::Channel;
use tristim_transfer::Transfer;

use crate::rgb::LinearRgb;
use crate::space::RgbSpace;

/// A nonlinear (gamma-encoded) triple in working space `S`.
///
/// Encoding applies the space's transfer curve channelwise. The type is
/// deliberately inert: no arithmetic is defined on encoded values, since
/// sums and scales of gamma-encoded channels are not meaningful. Decode
/// to [`LinearRgb`], operate, re-encode.
///
/// ```rust
/// use tristim_color::{GammaRgb, LinearRgb, SRgb};
///
/// let linear = LinearRgb::<f64, SRgb>::new(0.214041, 0.0, 1.0);
/// let encoded = GammaRgb::encode(linear);
/// assert!((encoded.r - 0.5).abs() < 1e-5);
/// assert!((encoded.decode().r - linear.r).abs() < 1e-12);
/// ```
#[repr(C)]
#[derive(Clone, Copy, PartialEq, Default)]
pub struct GammaRgb<T, S: RgbSpace> {
    /// Encoded red channel.
    pub r: T,
    /// Encoded green channel.
    pub g: T,
    /// Encoded blue channel.
    pub b: T,
    _space: PhantomData<S>,
}

impl<T, S: RgbSpace> GammaRgb<T, S> {
    /// Creates an encoded triple from already-encoded channels.
    #[inline]
    pub const fn new(r: T, g: T, b: T) -> Self {
        Self { r, g, b, _space: PhantomData }
    }

    /// Returns the encoded channels as an array.
    #[inline]
    pub fn to_array(self) -> [T; 3] {
        [self.r, self.g, self.b]
    }
}

impl<T: Channel, S: RgbSpace> GammaRgb<T, S> {
    /// Encodes a linear triple with the space's transfer curve.
    #[inline]
    pub fn encode(linear: LinearRgb<T, S>) -> Self {
        Self::encode_with(linear, S::CURVE)
    }

    /// Encodes a linear triple with an explicit curve.
    #[inline]
    pub fn encode_with(linear: LinearRgb<T, S>, curve: impl Transfer) -> Self {
        let [r, g, b] = linear
            .map(|v| T::from_f64(curve.to_nonlinear(v.to_f64())))
            .to_array();
        Self::new(r, g, b)
    }

    /// Decodes back to linear with the space's transfer curve.
    #[inline]
    pub fn decode(self) -> LinearRgb<T, S> {
        self.decode_with(S::CURVE)
    }

    /// Decodes back to linear with an explicit curve.
    #[inline]
    pub fn decode_with(self, curve: impl Transfer) -> LinearRgb<T, S> {
        LinearRgb::new(
            T::from_f64(curve.to_linear(self.r.to_f64())),
            T::from_f64(curve.to_linear(self.g.to_f64())),
            T::from_f64(curve.to_linear(self.b.to_f64())),
        )
    }
}

impl<T: Channel, S: RgbSpace> From<LinearRgb<T, S>> for GammaRgb<T, S> {
    #[inline]
    fn from(linear: LinearRgb<T, S>) -> Self {
        Self::encode(linear)
    }
}

impl<T: Channel, S: RgbSpace> From<GammaRgb<T, S>> for LinearRgb<T, S> {
    #[inline]
    fn from(encoded: GammaRgb<T, S>) -> Self {
        encoded.decode()
    }
}

impl<T: fmt::Debug, S: RgbSpace> fmt::Debug for GammaRgb<T, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "GammaRgb<{}>({:?}, {:?}, {:?})", S::NAME, self.r, self.g, self.b)
    }
}

#[cfg(test)]
mod tests {
    use crate::{AdobeRgb, EciRgbV2, SRgb};

    use super::*;
    use approx::assert_relative_eq;
    use tristim_transfer::GAMMA_1_0;

    #[test]
    fn roundtrip_per_space_curve() {
        let linear = LinearRgb::<f64, SRgb>::new(0.6, 0.4, 0.8);
        let back = GammaRgb::encode(linear).decode();
        assert_relative_eq!(back, linear, max_relative = 1e-12);

        let linear = LinearRgb::<f64, EciRgbV2>::new(0.6, 0.4, 0.8);
        let back = GammaRgb::encode(linear).decode();
        assert_relative_eq!(back, linear, max_relative = 1e-4);
    }

    #[test]
    fn adobe_uses_power_law() {
        let linear = LinearRgb::<f64, AdobeRgb>::new(0.5, 0.5, 0.5);
        let encoded = GammaRgb::encode(linear);
        assert_relative_eq!(encoded.r, 0.5f64.powf(1.0 / 2.2), max_relative = 1e-12);
    }

    #[test]
    fn explicit_curve_overrides_space() {
        let linear = LinearRgb::<f64, SRgb>::new(0.25, 0.5, 0.75);
        let encoded = GammaRgb::encode_with(linear, GAMMA_1_0);
        assert_eq!(encoded.to_array(), [0.25, 0.5, 0.75]);
    }

    #[test]
    fn negative_channels_mirror() {
        let linear = LinearRgb::<f64, SRgb>::new(-0.5, 0.5, 0.0);
        let encoded = GammaRgb::encode(linear);
        assert_eq!(encoded.r, -encoded.g);
        assert_eq!(encoded.b, 0.0);
    }

    #[test]
    fn from_impls_match_named_methods() {
        let linear = LinearRgb::<f32, SRgb>::new(0.1, 0.2, 0.3);
        let encoded: GammaRgb<f32, SRgb> = linear.into();
        assert_eq!(encoded, GammaRgb::encode(linear));
        let back: LinearRgb<f32, SRgb> = encoded.into();
        assert_relative_eq!(back, linear, max_relative = 1e-6);
    }
}
