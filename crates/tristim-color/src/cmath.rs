//! Elementwise math over triples.
//!
//! Unary functions are inherent methods, named after the `f32`/`f64`
//! methods where std has a name and after the C function where it does not
//! (`frexp`, `ilogb`, `erf`, `tgamma`, ...). Binary and ternary functions
//! are operator-style traits so all scalar/triple operand placements work:
//! triple ⊗ triple, triple ⊗ scalar, and scalar ⊗ triple.
//!
//! Functions whose C forms write through out-pointers return tuples here:
//! [`frexp`](LinearRgb::frexp) and [`modf`](LinearRgb::modf) yield a pair
//! of triples, [`Remquo`] yields the remainder alongside the quotient bits.
//! Exponent- and rounding-valued functions return integer-channel triples.

use tristim_math::Channel;

use crate::cwise::Operand;
use crate::rgb::LinearRgb;
use crate::space::RgbSpace;

// ============================================================================
// Unary surface
// ============================================================================

macro_rules! channelwise_unary {
    ($($(#[$meta:meta])* $name:ident),+ $(,)?) => {
        $(
            $(#[$meta])*
            #[inline]
            #[must_use]
            pub fn $name(self) -> Self {
                self.map(|v| v.$name())
            }
        )+
    };
}

impl<T: Channel, S: RgbSpace> LinearRgb<T, S> {
    channelwise_unary!(
        /// Channelwise sine (radians).
        sin,
        /// Channelwise cosine (radians).
        cos,
        /// Channelwise tangent (radians).
        tan,
        /// Channelwise arcsine.
        asin,
        /// Channelwise arccosine.
        acos,
        /// Channelwise arctangent.
        atan,
        /// Channelwise hyperbolic sine.
        sinh,
        /// Channelwise hyperbolic cosine.
        cosh,
        /// Channelwise hyperbolic tangent.
        tanh,
        /// Channelwise inverse hyperbolic sine.
        asinh,
        /// Channelwise inverse hyperbolic cosine.
        acosh,
        /// Channelwise inverse hyperbolic tangent.
        atanh,
        /// Channelwise `e^v`.
        exp,
        /// Channelwise `2^v`.
        exp2,
        /// Channelwise `e^v - 1`, accurate near zero.
        exp_m1,
        /// Channelwise natural logarithm.
        ln,
        /// Channelwise `ln(1 + v)`, accurate near zero.
        ln_1p,
        /// Channelwise base-2 logarithm.
        log2,
        /// Channelwise base-10 logarithm.
        log10,
        /// Channelwise square root.
        sqrt,
        /// Channelwise cube root.
        cbrt,
        /// Channelwise absolute value.
        abs,
        /// Channelwise round toward positive infinity.
        ceil,
        /// Channelwise round toward negative infinity.
        floor,
        /// Channelwise round toward zero.
        trunc,
        /// Channelwise round to nearest, ties away from zero.
        round,
        /// Channelwise round to nearest, ties to even.
        round_ties_even,
        /// Channelwise error function.
        erf,
        /// Channelwise complementary error function.
        erfc,
        /// Channelwise gamma function.
        tgamma,
        /// Channelwise `ln |Γ(v)|`.
        lgamma,
    );

    /// Decomposes each channel into a significand in `[0.5, 1)` and a
    /// power-of-two exponent, so `self == significand.ldexp(exponent)`.
    #[inline]
    pub fn frexp(self) -> (Self, LinearRgb<i32, S>) {
        self.map_split(Channel::frexp)
    }

    /// Computes `self * 2^exp` channelwise; the exponent may be a single
    /// `i32` or an `i32` triple.
    #[inline]
    #[must_use]
    pub fn ldexp(self, exp: impl Operand<i32, S>) -> Self {
        self.zip_with(exp, Channel::ldexp)
    }

    /// Extracts each channel's unbiased binary exponent.
    #[inline]
    pub fn ilogb(self) -> LinearRgb<i32, S> {
        self.map(Channel::ilogb)
    }

    /// Splits each channel into fractional and integral parts, both with
    /// the channel's sign. Returns `(fractional, integral)`.
    #[inline]
    pub fn modf(self) -> (Self, Self) {
        self.map_split(Channel::modf)
    }

    /// Rounds each channel to the nearest integer, ties away from zero.
    #[inline]
    pub fn lround(self) -> LinearRgb<i64, S> {
        self.map(|v| v.round().to_f64() as i64)
    }

    /// Rounds each channel to the nearest integer, ties to even.
    #[inline]
    pub fn lrint(self) -> LinearRgb<i64, S> {
        self.map(|v| v.round_ties_even().to_f64() as i64)
    }
}

// ============================================================================
// Binary surface
// ============================================================================

macro_rules! cwise_binary {
    (
        $(#[$trait_meta:meta])* trait $Trait:ident;
        $(#[$fn_meta:meta])* fn $method:ident = $scalar:path;
    ) => {
        $(#[$trait_meta])*
        pub trait $Trait<Rhs = Self> {
            /// Result type.
            type Output;

            $(#[$fn_meta])*
            #[must_use]
            fn $method(self, rhs: Rhs) -> Self::Output;
        }

        impl<T: Channel, S: RgbSpace> $Trait for LinearRgb<T, S> {
            type Output = Self;

            #[inline]
            fn $method(self, rhs: Self) -> Self {
                self.zip_with(rhs, $scalar)
            }
        }

        impl<T: Channel, S: RgbSpace> $Trait<T> for LinearRgb<T, S> {
            type Output = Self;

            #[inline]
            fn $method(self, rhs: T) -> Self {
                self.map(|a| $scalar(a, rhs))
            }
        }

        impl<S: RgbSpace> $Trait<LinearRgb<f32, S>> for f32 {
            type Output = LinearRgb<f32, S>;

            #[inline]
            fn $method(self, rhs: LinearRgb<f32, S>) -> LinearRgb<f32, S> {
                rhs.map(|b| $scalar(self, b))
            }
        }

        impl<S: RgbSpace> $Trait<LinearRgb<f64, S>> for f64 {
            type Output = LinearRgb<f64, S>;

            #[inline]
            fn $method(self, rhs: LinearRgb<f64, S>) -> LinearRgb<f64, S> {
                rhs.map(|b| $scalar(self, b))
            }
        }
    };
}

cwise_binary! {
    /// Channelwise four-quadrant arctangent. `self` is the y operand.
    trait Atan2;
    /// Computes `atan2(self, rhs)` channelwise.
    fn atan2 = num_traits::Float::atan2;
}

cwise_binary! {
    /// Channelwise power with a real exponent.
    trait Pow;
    /// Raises `self` to `rhs` channelwise.
    fn pow = num_traits::Float::powf;
}

cwise_binary! {
    /// Channelwise Euclidean norm of two operands.
    trait Hypot;
    /// Computes `sqrt(self² + rhs²)` channelwise, avoiding overflow.
    fn hypot = num_traits::Float::hypot;
}

cwise_binary! {
    /// Channelwise IEEE remainder (quotient rounded to nearest), as opposed
    /// to the truncating `%` operator.
    trait Remainder;
    /// Computes the IEEE remainder of `self / rhs` channelwise.
    fn remainder = Channel::remainder;
}

cwise_binary! {
    /// Channelwise magnitude-with-sign composition.
    trait Copysign;
    /// Returns `self`'s magnitude with `rhs`'s sign, channelwise.
    fn copysign = num_traits::Float::copysign;
}

cwise_binary! {
    /// Channelwise next representable value.
    trait NextAfter;
    /// Steps each channel of `self` one ULP toward `rhs`.
    fn next_after = Channel::next_after;
}

cwise_binary! {
    /// Channelwise minimum with C `fmin` NaN semantics: if one operand is
    /// NaN, the other is returned.
    trait Min;
    /// Returns the channelwise minimum.
    fn min = num_traits::Float::min;
}

cwise_binary! {
    /// Channelwise maximum with C `fmax` NaN semantics: if one operand is
    /// NaN, the other is returned.
    trait Max;
    /// Returns the channelwise maximum.
    fn max = num_traits::Float::max;
}

cwise_binary! {
    /// Channelwise positive difference.
    trait Fdim;
    /// Returns `self - rhs` where positive and `+0.0` elsewhere.
    fn fdim = Channel::fdim;
}

/// Channelwise IEEE remainder together with the low bits of the rounded
/// quotient.
pub trait Remquo<Rhs = Self> {
    /// Remainder triple type.
    type Output;
    /// Quotient-bits triple type.
    type Quot;

    /// Computes the remainder and quotient bits channelwise.
    fn remquo(self, rhs: Rhs) -> (Self::Output, Self::Quot);
}

impl<T: Channel, S: RgbSpace> Remquo for LinearRgb<T, S> {
    type Output = Self;
    type Quot = LinearRgb<i32, S>;

    #[inline]
    fn remquo(self, rhs: Self) -> (Self, LinearRgb<i32, S>) {
        self.zip_split(rhs, Channel::remquo)
    }
}

impl<T: Channel, S: RgbSpace> Remquo<T> for LinearRgb<T, S> {
    type Output = Self;
    type Quot = LinearRgb<i32, S>;

    #[inline]
    fn remquo(self, rhs: T) -> (Self, LinearRgb<i32, S>) {
        self.map_split(|a| Channel::remquo(a, rhs))
    }
}

impl<S: RgbSpace> Remquo<LinearRgb<f32, S>> for f32 {
    type Output = LinearRgb<f32, S>;
    type Quot = LinearRgb<i32, S>;

    #[inline]
    fn remquo(self, rhs: LinearRgb<f32, S>) -> (LinearRgb<f32, S>, LinearRgb<i32, S>) {
        rhs.map_split(|b| Channel::remquo(self, b))
    }
}

impl<S: RgbSpace> Remquo<LinearRgb<f64, S>> for f64 {
    type Output = LinearRgb<f64, S>;
    type Quot = LinearRgb<i32, S>;

    #[inline]
    fn remquo(self, rhs: LinearRgb<f64, S>) -> (LinearRgb<f64, S>, LinearRgb<i32, S>) {
        rhs.map_split(|b| Channel::remquo(self, b))
    }
}

// ============================================================================
// Fused multiply-add
// ============================================================================

/// Channelwise fused `self * a + b` with a single rounding.
///
/// Every operand placement except all-scalar is provided, with the scalar
/// operands broadcasting.
pub trait MulAdd<A, B> {
    /// Result type.
    type Output;

    /// Computes `self * a + b` channelwise, fused.
    #[must_use]
    fn mul_add(self, a: A, b: B) -> Self::Output;
}

// Triple-valued self: the two trailing operands are triples or scalars.
impl<T, S, A, B> MulAdd<A, B> for LinearRgb<T, S>
where
    T: Channel,
    S: RgbSpace,
    A: Operand<T, S>,
    B: Operand<T, S>,
{
    type Output = Self;

    #[inline]
    fn mul_add(self, a: A, b: B) -> Self {
        self.zip3_with(a, b, num_traits::Float::mul_add)
    }
}

macro_rules! scalar_mul_add {
    ($($t:ty),+) => {
        $(
            // scalar * triple + (triple | scalar)
            impl<S: RgbSpace, B: Operand<$t, S>> MulAdd<LinearRgb<$t, S>, B> for $t {
                type Output = LinearRgb<$t, S>;

                #[inline]
                fn mul_add(self, a: LinearRgb<$t, S>, b: B) -> LinearRgb<$t, S> {
                    a.zip_with(b, |a, b| self.mul_add(a, b))
                }
            }

            // scalar * scalar + triple
            impl<S: RgbSpace> MulAdd<$t, LinearRgb<$t, S>> for $t {
                type Output = LinearRgb<$t, S>;

                #[inline]
                fn mul_add(self, a: $t, b: LinearRgb<$t, S>) -> LinearRgb<$t, S> {
                    b.map(|b| self.mul_add(a, b))
                }
            }
        )+
    };
}

scalar_mul_add!(f32, f64);

#[cfg(test)]
mod tests {
    use crate::SRgb;

    use super::*;
    use approx::assert_relative_eq;

    type Rgb = LinearRgb<f64, SRgb>;

    #[test]
    fn unary_matches_scalar() {
        let v = Rgb::new(0.6, 0.4, 0.8);
        assert_eq!(v.sin(), Rgb::new(0.6f64.sin(), 0.4f64.sin(), 0.8f64.sin()));
        assert_eq!(v.exp(), Rgb::new(0.6f64.exp(), 0.4f64.exp(), 0.8f64.exp()));
        assert_eq!(v.sqrt(), Rgb::new(0.6f64.sqrt(), 0.4f64.sqrt(), 0.8f64.sqrt()));
    }

    #[test]
    fn atan2_all_forms() {
        let v = Rgb::new(0.6, 0.4, 0.8);
        let w = Rgb::new(0.9, 0.2, 0.7);
        assert_eq!(
            v.atan2(w),
            Rgb::new(0.6f64.atan2(0.9), 0.4f64.atan2(0.2), 0.8f64.atan2(0.7))
        );
        assert_eq!(
            v.atan2(2.0),
            Rgb::new(0.6f64.atan2(2.0), 0.4f64.atan2(2.0), 0.8f64.atan2(2.0))
        );
        // UFCS: f64's inherent atan2 would otherwise shadow the trait.
        assert_eq!(
            Atan2::atan2(2.0, v),
            Rgb::new(2.0f64.atan2(0.6), 2.0f64.atan2(0.4), 2.0f64.atan2(0.8))
        );
    }

    #[test]
    fn pow_all_forms() {
        let x = Rgb::new(1.9, 4.0, 8.7);
        let e = Rgb::new(2.0, 0.5, 3.0);
        assert_eq!(x.pow(e), Rgb::new(1.9f64.powf(2.0), 2.0, 8.7f64.powf(3.0)));
        assert_relative_eq!(x.pow(2.0), x * x, max_relative = 1e-15);
        assert_relative_eq!(
            2.0.pow(x),
            Rgb::new(2.0f64.powf(1.9), 16.0, 2.0f64.powf(8.7)),
            max_relative = 1e-15
        );
    }

    #[test]
    fn frexp_reconstructs_via_ldexp() {
        let v = Rgb::new(0.6, 100.9, -0.7);
        let (sig, exp) = v.frexp();
        assert_eq!(sig.ldexp(exp), v);
        assert_eq!(v.ilogb(), exp.map(|e| e - 1));
    }

    #[test]
    fn ldexp_scalar_exponent() {
        let v = Rgb::new(1.0, 2.0, 3.0);
        assert_eq!(v.ldexp(3), v * 8.0);
    }

    #[test]
    fn modf_splits_with_sign() {
        let v = Rgb::new(3.75, -3.75, 0.5);
        let (frac, int) = v.modf();
        assert_eq!(int, Rgb::new(3.0, -3.0, 0.0));
        assert_relative_eq!(frac, Rgb::new(0.75, -0.75, 0.5));
    }

    #[test]
    fn rounding_families() {
        let v = Rgb::new(2.5, -2.5, 3.5);
        assert_eq!(v.round(), Rgb::new(3.0, -3.0, 4.0));
        assert_eq!(v.round_ties_even(), Rgb::new(2.0, -2.0, 4.0));
        assert_eq!(v.lround(), LinearRgb::new(3, -3, 4));
        assert_eq!(v.lrint(), LinearRgb::new(2, -2, 4));
    }

    #[test]
    fn remainder_vs_rem_operator() {
        let v = Rgb::new(5.5, 7.0, -5.5);
        let rem = v.remainder(2.0);
        assert_eq!(rem, Rgb::new(-0.5, -1.0, 0.5));
        assert_eq!(v % 2.0, Rgb::new(1.5, 1.0, -1.5));
    }

    #[test]
    fn remquo_matches_remainder() {
        let v = Rgb::new(7.0, 5.5, 9.0);
        let (rem, quot) = v.remquo(2.0);
        assert_eq!(rem, v.remainder(2.0));
        assert_eq!(quot.map(|q| q & 7), LinearRgb::new(4 & 7, 3 & 7, 4 & 7));
    }

    #[test]
    fn min_max_nan_semantics() {
        let v = Rgb::new(1.0, f64::NAN, 3.0);
        let m = v.min(2.0);
        assert_eq!(m.r, 1.0);
        assert_eq!(m.g, 2.0);
        assert_eq!(m.b, 2.0);
        let m = Max::max(2.0, v);
        assert_eq!(m.to_array(), [2.0, 2.0, 3.0]);
    }

    #[test]
    fn fdim_and_copysign() {
        let v = Rgb::new(5.0, 1.0, -3.0);
        assert_eq!(v.fdim(2.0), Rgb::new(3.0, 0.0, 0.0));
        assert_eq!(v.copysign(-1.0), Rgb::new(-5.0, -1.0, -3.0));
        assert_eq!(Copysign::copysign(1.0, v), Rgb::new(1.0, 1.0, -1.0));
    }

    #[test]
    fn hypot_triple_scalar() {
        let v = Rgb::new(3.0, 5.0, 8.0);
        assert_relative_eq!(v.hypot(4.0).r, 5.0);
        assert_relative_eq!(Hypot::hypot(4.0, v).r, 5.0);
    }

    #[test]
    fn next_after_direction() {
        let v = Rgb::new(1.0, 1.0, 1.0);
        let up = v.next_after(2.0);
        assert!(up.r > 1.0);
        assert_eq!(up.next_after(0.0), v);
    }

    #[test]
    fn mul_add_placements() {
        let v = Rgb::new(1.0, 2.0, 3.0);
        let w = Rgb::new(10.0, 10.0, 10.0);
        let u = Rgb::new(0.5, 0.5, 0.5);
        let expected = Rgb::new(10.5, 20.5, 30.5);
        assert_eq!(v.mul_add(w, u), expected);
        assert_eq!(v.mul_add(10.0, u), expected);
        assert_eq!(v.mul_add(w, 0.5), expected);
        assert_eq!(v.mul_add(10.0, 0.5), expected);
        assert_eq!(MulAdd::mul_add(10.0, v, u), expected);
        assert_eq!(MulAdd::mul_add(10.0, v, 0.5), expected);
        assert_eq!(MulAdd::mul_add(2.0, 0.5, v), v + 1.0);
    }

    #[test]
    fn erf_gamma_surface() {
        let v = Rgb::new(0.0, 1.0, 5.0);
        assert_eq!(v.erf().r, 0.0);
        assert_relative_eq!(v.tgamma().b, 24.0, max_relative = 1e-12);
        assert_relative_eq!(v.erf().g + v.erfc().g, 1.0, max_relative = 1e-12);
    }
}
