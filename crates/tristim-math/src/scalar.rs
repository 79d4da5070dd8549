//! Scalar math provider for channel values.
//!
//! [`Channel`] is the bound every per-channel operation in the workspace is
//! generic over. It extends [`num_traits::Float`] with the IEEE-754 functions
//! the standard library does not expose: the error and gamma functions,
//! floating-point decomposition (`frexp`, `modf`, `ilogb`), and
//! remainder-with-quotient. Those are supplied by [`libm`], so behavior is
//! identical across platforms.
//!
//! The trait is sealed; `f32` and `f64` are the only channel types.

use num_traits::Float;

mod private {
    pub trait Sealed {}
    impl Sealed for f32 {}
    impl Sealed for f64 {}
}

/// A floating-point channel value: `f32` or `f64`.
///
/// Extends [`Float`] with the libm-backed scalar functions needed for
/// elementwise color math. Decomposition functions return tuples instead of
/// writing through out-pointers.
pub trait Channel: Float + private::Sealed {
    /// Converts from `f64`, rounding if necessary.
    fn from_f64(v: f64) -> Self;

    /// Converts to `f64` exactly (both channel types embed in f64).
    fn to_f64(self) -> f64;

    /// Error function.
    fn erf(self) -> Self;

    /// Complementary error function.
    fn erfc(self) -> Self;

    /// Gamma function.
    fn tgamma(self) -> Self;

    /// Natural logarithm of the absolute value of the gamma function.
    fn lgamma(self) -> Self;

    /// Decomposes into a significand in `[0.5, 1)` and a power-of-two
    /// exponent, such that `self == significand * 2^exponent`.
    fn frexp(self) -> (Self, i32);

    /// Computes `self * 2^exp`.
    fn ldexp(self, exp: i32) -> Self;

    /// Extracts the unbiased binary exponent.
    fn ilogb(self) -> i32;

    /// Splits into integral and fractional parts, both carrying the sign
    /// of `self`. Returns `(fractional, integral)`.
    fn modf(self) -> (Self, Self);

    /// IEEE remainder of `self / rhs` (rounds the quotient to nearest,
    /// ties to even), unlike the truncating `%` operator.
    fn remainder(self, rhs: Self) -> Self;

    /// IEEE remainder plus the low bits of the rounded quotient.
    fn remquo(self, rhs: Self) -> (Self, i32);

    /// Positive difference: `self - rhs` if positive, otherwise `+0.0`.
    fn fdim(self, rhs: Self) -> Self;

    /// The next representable value after `self` in the direction of `toward`.
    fn next_after(self, toward: Self) -> Self;

    /// Rounds to the nearest integer, ties to even.
    fn round_ties_even(self) -> Self;
}

impl Channel for f32 {
    #[inline]
    fn from_f64(v: f64) -> Self {
        v as f32
    }

    #[inline]
    fn to_f64(self) -> f64 {
        self as f64
    }

    #[inline]
    fn erf(self) -> Self {
        libm::erff(self)
    }

    #[inline]
    fn erfc(self) -> Self {
        libm::erfcf(self)
    }

    #[inline]
    fn tgamma(self) -> Self {
        libm::tgammaf(self)
    }

    #[inline]
    fn lgamma(self) -> Self {
        libm::lgammaf(self)
    }

    #[inline]
    fn frexp(self) -> (Self, i32) {
        libm::frexpf(self)
    }

    #[inline]
    fn ldexp(self, exp: i32) -> Self {
        libm::ldexpf(self, exp)
    }

    #[inline]
    fn ilogb(self) -> i32 {
        libm::ilogbf(self)
    }

    #[inline]
    fn modf(self) -> (Self, Self) {
        libm::modff(self)
    }

    #[inline]
    fn remainder(self, rhs: Self) -> Self {
        libm::remainderf(self, rhs)
    }

    #[inline]
    fn remquo(self, rhs: Self) -> (Self, i32) {
        libm::remquof(self, rhs)
    }

    #[inline]
    fn fdim(self, rhs: Self) -> Self {
        libm::fdimf(self, rhs)
    }

    #[inline]
    fn next_after(self, toward: Self) -> Self {
        libm::nextafterf(self, toward)
    }

    #[inline]
    fn round_ties_even(self) -> Self {
        libm::rintf(self)
    }
}

impl Channel for f64 {
    #[inline]
    fn from_f64(v: f64) -> Self {
        v
    }

    #[inline]
    fn to_f64(self) -> f64 {
        self
    }

    #[inline]
    fn erf(self) -> Self {
        libm::erf(self)
    }

    #[inline]
    fn erfc(self) -> Self {
        libm::erfc(self)
    }

    #[inline]
    fn tgamma(self) -> Self {
        libm::tgamma(self)
    }

    #[inline]
    fn lgamma(self) -> Self {
        libm::lgamma(self)
    }

    #[inline]
    fn frexp(self) -> (Self, i32) {
        libm::frexp(self)
    }

    #[inline]
    fn ldexp(self, exp: i32) -> Self {
        libm::ldexp(self, exp)
    }

    #[inline]
    fn ilogb(self) -> i32 {
        libm::ilogb(self)
    }

    #[inline]
    fn modf(self) -> (Self, Self) {
        libm::modf(self)
    }

    #[inline]
    fn remainder(self, rhs: Self) -> Self {
        libm::remainder(self, rhs)
    }

    #[inline]
    fn remquo(self, rhs: Self) -> (Self, i32) {
        libm::remquo(self, rhs)
    }

    #[inline]
    fn fdim(self, rhs: Self) -> Self {
        libm::fdim(self, rhs)
    }

    #[inline]
    fn next_after(self, toward: Self) -> Self {
        libm::nextafter(self, toward)
    }

    #[inline]
    fn round_ties_even(self) -> Self {
        libm::rint(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn frexp_reconstructs() {
        let (sig, exp) = 6.5f64.frexp();
        assert!((0.5..1.0).contains(&sig));
        assert_eq!(sig.ldexp(exp), 6.5);

        let (sig, exp) = 6.5f32.frexp();
        assert_eq!(sig.ldexp(exp), 6.5);
    }

    #[test]
    fn modf_splits() {
        let (frac, int) = 3.75f64.modf();
        assert_eq!(int, 3.0);
        assert_relative_eq!(frac, 0.75);

        let (frac, int) = (-3.75f64).modf();
        assert_eq!(int, -3.0);
        assert_relative_eq!(frac, -0.75);
    }

    #[test]
    fn ilogb_matches_frexp() {
        // frexp normalizes to [0.5, 1), ilogb to [1, 2).
        let v = 100.9f64;
        let (_, exp) = v.frexp();
        assert_eq!(v.ilogb(), exp - 1);
    }

    #[test]
    fn remainder_rounds_to_nearest() {
        // 5.5 / 2 rounds to 3, so the IEEE remainder is negative.
        assert_relative_eq!(5.5f64.remainder(2.0), -0.5);
        // The truncating operator keeps it positive.
        assert_relative_eq!(5.5f64 % 2.0, 1.5);
    }

    #[test]
    fn remquo_quotient_bits() {
        let (rem, quot) = 7.0f64.remquo(2.0);
        assert_relative_eq!(rem, -1.0);
        assert_eq!(quot & 7, 4 & 7);
    }

    #[test]
    fn fdim_clamps_at_zero() {
        assert_eq!(5.0f64.fdim(3.0), 2.0);
        assert_eq!(3.0f64.fdim(5.0), 0.0);
    }

    #[test]
    fn erf_known_values() {
        assert_eq!(0.0f64.erf(), 0.0);
        assert_relative_eq!(1.0f64.erf(), 0.842700792949715, max_relative = 1e-12);
        assert_relative_eq!(1.0f64.erfc(), 1.0 - 0.842700792949715, max_relative = 1e-9);
    }

    #[test]
    fn tgamma_factorial() {
        assert_relative_eq!(5.0f64.tgamma(), 24.0, max_relative = 1e-12);
        assert_relative_eq!(5.0f64.lgamma(), 24.0f64.ln(), max_relative = 1e-12);
    }

    #[test]
    fn round_ties_even() {
        assert_eq!(2.5f64.round_ties_even(), 2.0);
        assert_eq!(3.5f64.round_ties_even(), 4.0);
        assert_eq!((-2.5f64).round_ties_even(), -2.0);
    }

    #[test]
    fn next_after_steps_one_ulp() {
        let up = 1.0f64.next_after(2.0);
        assert!(up > 1.0);
        assert_eq!(up.next_after(0.0), 1.0);
    }
}
