//! The linear tristimulus triple.

use std::fmt;
use std::marker::PhantomData;
use std::ops::{
    Add, AddAssign, Div, DivAssign, Index, Mul, MulAssign, Neg, Rem, RemAssign, Sub, SubAssign,
};

use approx::{AbsDiffEq, RelativeEq, UlpsEq};

use crate::space::RgbSpace;

/// Three linear channel values tagged with their working space.
///
/// `T` is the channel type, usually `f32` or `f64`; integer channel types
/// arise from exponent- and rounding-valued operations
/// ([`ilogb`](Self::ilogb), [`lround`](Self::lround)). `S` is a zero-sized
/// [`RgbSpace`] tag, so the struct is layout-identical to `[T; 3]`.
///
/// Arithmetic operators work channelwise. The right operand of a binary
/// operator may be a triple of the same space or a bare scalar, and `f32`
/// and `f64` scalars also work on the left:
///
/// ```rust
/// use tristim_color::{LinearRgb, SRgb};
///
/// let c = LinearRgb::<f64, SRgb>::new(1.0, 2.0, 4.0);
/// assert_eq!(c + c, c * 2.0);
/// assert_eq!(8.0 / c, LinearRgb::new(8.0, 4.0, 2.0));
/// ```
#[repr(C)]
#[derive(Clone, Copy, PartialEq, Default)]
pub struct LinearRgb<T, S: RgbSpace> {
    /// Red channel.
    pub r: T,
    /// Green channel.
    pub g: T,
    /// Blue channel.
    pub b: T,
    _space: PhantomData<S>,
}

impl<T, S: RgbSpace> LinearRgb<T, S> {
    /// Creates a triple from its channels.
    #[inline]
    pub const fn new(r: T, g: T, b: T) -> Self {
        Self { r, g, b, _space: PhantomData }
    }

    /// Creates a triple from a channel array.
    #[inline]
    pub fn from_array([r, g, b]: [T; 3]) -> Self {
        Self::new(r, g, b)
    }

    /// Returns the channels as an array.
    #[inline]
    pub fn to_array(self) -> [T; 3] {
        [self.r, self.g, self.b]
    }

    /// Returns the channel at `i`, or `None` if `i >= 3`.
    #[inline]
    pub fn get(&self, i: usize) -> Option<&T> {
        match i {
            0 => Some(&self.r),
            1 => Some(&self.g),
            2 => Some(&self.b),
            _ => None,
        }
    }

    /// Returns the channel at `i` without a bounds check.
    ///
    /// # Safety
    ///
    /// `i` must be less than 3.
    #[inline]
    pub unsafe fn get_unchecked(&self, i: usize) -> &T {
        match i {
            0 => &self.r,
            1 => &self.g,
            _ => &self.b,
        }
    }
}

impl<T: Copy, S: RgbSpace> LinearRgb<T, S> {
    /// Creates a triple with all channels set to `v`.
    #[inline]
    pub const fn splat(v: T) -> Self {
        Self::new(v, v, v)
    }
}

impl<T, S: RgbSpace> Index<usize> for LinearRgb<T, S> {
    type Output = T;

    #[inline]
    fn index(&self, i: usize) -> &T {
        match i {
            0 => &self.r,
            1 => &self.g,
            2 => &self.b,
            _ => panic!("channel index out of bounds: {i}"),
        }
    }
}

impl<T, S: RgbSpace> From<[T; 3]> for LinearRgb<T, S> {
    #[inline]
    fn from(a: [T; 3]) -> Self {
        Self::from_array(a)
    }
}

impl<T, S: RgbSpace> From<LinearRgb<T, S>> for [T; 3] {
    #[inline]
    fn from(c: LinearRgb<T, S>) -> [T; 3] {
        c.to_array()
    }
}

impl<T: fmt::Debug, S: RgbSpace> fmt::Debug for LinearRgb<T, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "LinearRgb<{}>({:?}, {:?}, {:?})", S::NAME, self.r, self.g, self.b)
    }
}

// ============================================================================
// Channelwise arithmetic
// ============================================================================

macro_rules! channelwise_op {
    ($Op:ident, $method:ident, $OpAssign:ident, $assign_method:ident) => {
        // triple <op> triple
        impl<T: $Op<Output = T>, S: RgbSpace> $Op for LinearRgb<T, S> {
            type Output = Self;

            #[inline]
            fn $method(self, rhs: Self) -> Self {
                Self::new(
                    self.r.$method(rhs.r),
                    self.g.$method(rhs.g),
                    self.b.$method(rhs.b),
                )
            }
        }

        // triple <op> scalar
        impl<T: $Op<Output = T> + Copy, S: RgbSpace> $Op<T> for LinearRgb<T, S> {
            type Output = Self;

            #[inline]
            fn $method(self, rhs: T) -> Self {
                Self::new(self.r.$method(rhs), self.g.$method(rhs), self.b.$method(rhs))
            }
        }

        impl<T: $Op<Output = T> + Copy, S: RgbSpace> $OpAssign for LinearRgb<T, S> {
            #[inline]
            fn $assign_method(&mut self, rhs: Self) {
                *self = (*self).$method(rhs);
            }
        }

        impl<T: $Op<Output = T> + Copy, S: RgbSpace> $OpAssign<T> for LinearRgb<T, S> {
            #[inline]
            fn $assign_method(&mut self, rhs: T) {
                *self = (*self).$method(rhs);
            }
        }
    };
}

channelwise_op!(Add, add, AddAssign, add_assign);
channelwise_op!(Sub, sub, SubAssign, sub_assign);
channelwise_op!(Mul, mul, MulAssign, mul_assign);
channelwise_op!(Div, div, DivAssign, div_assign);
channelwise_op!(Rem, rem, RemAssign, rem_assign);

// scalar <op> triple, for the concrete channel types
macro_rules! scalar_lhs_op {
    ($Op:ident, $method:ident, $($t:ty),+) => {
        $(
            impl<S: RgbSpace> $Op<LinearRgb<$t, S>> for $t {
                type Output = LinearRgb<$t, S>;

                #[inline]
                fn $method(self, rhs: LinearRgb<$t, S>) -> LinearRgb<$t, S> {
                    LinearRgb::new(
                        self.$method(rhs.r),
                        self.$method(rhs.g),
                        self.$method(rhs.b),
                    )
                }
            }
        )+
    };
}

scalar_lhs_op!(Add, add, f32, f64);
scalar_lhs_op!(Sub, sub, f32, f64);
scalar_lhs_op!(Mul, mul, f32, f64);
scalar_lhs_op!(Div, div, f32, f64);
scalar_lhs_op!(Rem, rem, f32, f64);

impl<T: Neg<Output = T>, S: RgbSpace> Neg for LinearRgb<T, S> {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Self::new(-self.r, -self.g, -self.b)
    }
}

// ============================================================================
// Approximate equality
// ============================================================================

impl<T, S> AbsDiffEq for LinearRgb<T, S>
where
    T: AbsDiffEq,
    T::Epsilon: Copy,
    S: RgbSpace,
{
    type Epsilon = T::Epsilon;

    fn default_epsilon() -> T::Epsilon {
        T::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: T::Epsilon) -> bool {
        self.r.abs_diff_eq(&other.r, epsilon)
            && self.g.abs_diff_eq(&other.g, epsilon)
            && self.b.abs_diff_eq(&other.b, epsilon)
    }
}

impl<T, S> RelativeEq for LinearRgb<T, S>
where
    T: RelativeEq,
    T::Epsilon: Copy,
    S: RgbSpace,
{
    fn default_max_relative() -> T::Epsilon {
        T::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: T::Epsilon, max_relative: T::Epsilon) -> bool {
        self.r.relative_eq(&other.r, epsilon, max_relative)
            && self.g.relative_eq(&other.g, epsilon, max_relative)
            && self.b.relative_eq(&other.b, epsilon, max_relative)
    }
}

impl<T, S> UlpsEq for LinearRgb<T, S>
where
    T: UlpsEq,
    T::Epsilon: Copy,
    S: RgbSpace,
{
    fn default_max_ulps() -> u32 {
        T::default_max_ulps()
    }

    fn ulps_eq(&self, other: &Self, epsilon: T::Epsilon, max_ulps: u32) -> bool {
        self.r.ulps_eq(&other.r, epsilon, max_ulps)
            && self.g.ulps_eq(&other.g, epsilon, max_ulps)
            && self.b.ulps_eq(&other.b, epsilon, max_ulps)
    }
}
