//! Scalar interpolation helpers.
//!
//! Generic over [`Float`] so they work for `f32` and `f64` alike. The
//! triple-valued variants live with the color types; these are the scalar
//! building blocks.

use num_traits::Float;

/// Linear interpolation between `a` and `b` by factor `t`.
///
/// `t` is not clamped; `t` outside `[0, 1]` extrapolates.
///
/// # Example
///
/// ```rust
/// use tristim_math::lerp;
///
/// assert_eq!(lerp(0.0, 10.0, 0.5), 5.0);
/// assert_eq!(lerp(0.0, 10.0, 1.5), 15.0);
/// ```
#[inline]
pub fn lerp<T: Float>(a: T, b: T, t: T) -> T {
    a + (b - a) * t
}

/// Linear interpolation with `t` saturated to `[0, 1]`.
#[inline]
pub fn lerp_sat<T: Float>(a: T, b: T, t: T) -> T {
    lerp(a, b, t.max(T::zero()).min(T::one()))
}

/// Inverse of [`lerp`]: the factor that maps `a..b` onto `v`.
///
/// Returns zero when `a == b`.
#[inline]
pub fn inverse_lerp<T: Float>(a: T, b: T, v: T) -> T {
    if a == b { T::zero() } else { (v - a) / (b - a) }
}

/// Bilinear interpolation over the quad `(a, b; c, d)` by `(s, t)`.
///
/// `s` blends within each row, `t` blends between the rows.
#[inline]
pub fn bilerp<T: Float>(a: T, b: T, c: T, d: T, s: T, t: T) -> T {
    lerp(lerp(a, b, s), lerp(c, d, s), t)
}

/// A closed interval `[min, max]`.
///
/// Construction enforces the ordering, so `min <= max` always holds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Interval<T> {
    min: T,
    max: T,
}

impl<T: Float> Interval<T> {
    /// Creates an interval from two endpoints, in either order.
    #[inline]
    pub fn new(a: T, b: T) -> Self {
        if a <= b {
            Self { min: a, max: b }
        } else {
            Self { min: b, max: a }
        }
    }

    /// Lower endpoint.
    #[inline]
    pub fn min(&self) -> T {
        self.min
    }

    /// Upper endpoint.
    #[inline]
    pub fn max(&self) -> T {
        self.max
    }

    /// Width of the interval.
    #[inline]
    pub fn length(&self) -> T {
        self.max - self.min
    }

    /// Interpolates within the interval by factor `t`.
    #[inline]
    pub fn at(&self, t: T) -> T {
        lerp(self.min, self.max, t)
    }

    /// Clamps `v` into the interval.
    #[inline]
    pub fn clamp(&self, v: T) -> T {
        v.max(self.min).min(self.max)
    }

    /// Returns true if `v` lies within the interval, endpoints included.
    #[inline]
    pub fn contains(&self, v: T) -> bool {
        self.min <= v && v <= self.max
    }
}
