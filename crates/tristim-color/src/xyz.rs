//! The CIE XYZ tristimulus type.

use std::ops::{Add, AddAssign, Div, DivAssign, Index, Mul, MulAssign, Neg, Sub, SubAssign};

use approx::{AbsDiffEq, RelativeEq, UlpsEq};

/// A CIE XYZ tristimulus value.
///
/// XYZ is the space-independent hub every working space converts through,
/// so it carries no space tag. Arithmetic is componentwise and linear in
/// the usual sense: addition models light mixing, scalar multiplication
/// models intensity scaling.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Xyz<T> {
    /// X component.
    pub x: T,
    /// Y (luminance) component.
    pub y: T,
    /// Z component.
    pub z: T,
}

impl<T> Xyz<T> {
    /// Creates an XYZ value from its components.
    #[inline]
    pub const fn new(x: T, y: T, z: T) -> Self {
        Self { x, y, z }
    }

    /// Creates an XYZ value from a component array.
    #[inline]
    pub fn from_array([x, y, z]: [T; 3]) -> Self {
        Self::new(x, y, z)
    }

    /// Returns the components as an array.
    #[inline]
    pub fn to_array(self) -> [T; 3] {
        [self.x, self.y, self.z]
    }

    /// Returns the component at `i`, or `None` if `i >= 3`.
    #[inline]
    pub fn get(&self, i: usize) -> Option<&T> {
        match i {
            0 => Some(&self.x),
            1 => Some(&self.y),
            2 => Some(&self.z),
            _ => None,
        }
    }
}

impl<T> Index<usize> for Xyz<T> {
    type Output = T;

    #[inline]
    fn index(&self, i: usize) -> &T {
        match i {
            0 => &self.x,
            1 => &self.y,
            2 => &self.z,
            _ => panic!("component index out of bounds: {i}"),
        }
    }
}

impl<T> From<[T; 3]> for Xyz<T> {
    #[inline]
    fn from(a: [T; 3]) -> Self {
        Self::from_array(a)
    }
}

impl<T> From<Xyz<T>> for [T; 3] {
    #[inline]
    fn from(v: Xyz<T>) -> [T; 3] {
        v.to_array()
    }
}

impl<T: Add<Output = T>> Add for Xyz<T> {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl<T: Sub<Output = T>> Sub for Xyz<T> {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl<T: Mul<Output = T> + Copy> Mul<T> for Xyz<T> {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: T) -> Self {
        Self::new(self.x * rhs, self.y * rhs, self.z * rhs)
    }
}

impl<T: Div<Output = T> + Copy> Div<T> for Xyz<T> {
    type Output = Self;

    #[inline]
    fn div(self, rhs: T) -> Self {
        Self::new(self.x / rhs, self.y / rhs, self.z / rhs)
    }
}

macro_rules! scalar_lhs_mul {
    ($($t:ty),+) => {
        $(
            impl Mul<Xyz<$t>> for $t {
                type Output = Xyz<$t>;

                #[inline]
                fn mul(self, rhs: Xyz<$t>) -> Xyz<$t> {
                    rhs * self
                }
            }
        )+
    };
}

scalar_lhs_mul!(f32, f64);

impl<T: Neg<Output = T>> Neg for Xyz<T> {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Self::new(-self.x, -self.y, -self.z)
    }
}

impl<T: Add<Output = T> + Copy> AddAssign for Xyz<T> {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl<T: Sub<Output = T> + Copy> SubAssign for Xyz<T> {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl<T: Mul<Output = T> + Copy> MulAssign<T> for Xyz<T> {
    #[inline]
    fn mul_assign(&mut self, rhs: T) {
        *self = *self * rhs;
    }
}

impl<T: Div<Output = T> + Copy> DivAssign<T> for Xyz<T> {
    #[inline]
    fn div_assign(&mut self, rhs: T) {
        *self = *self / rhs;
    }
}

impl<T> AbsDiffEq for Xyz<T>
where
    T: AbsDiffEq,
    T::Epsilon: Copy,
{
    type Epsilon = T::Epsilon;

    fn default_epsilon() -> T::Epsilon {
        T::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: T::Epsilon) -> bool {
        self.x.abs_diff_eq(&other.x, epsilon)
            && self.y.abs_diff_eq(&other.y, epsilon)
            && self.z.abs_diff_eq(&other.z, epsilon)
    }
}

impl<T> RelativeEq for Xyz<T>
where
    T: RelativeEq,
    T::Epsilon: Copy,
{
    fn default_max_relative() -> T::Epsilon {
        T::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: T::Epsilon, max_relative: T::Epsilon) -> bool {
        self.x.relative_eq(&other.x, epsilon, max_relative)
            && self.y.relative_eq(&other.y, epsilon, max_relative)
            && self.z.relative_eq(&other.z, epsilon, max_relative)
    }
}

impl<T> UlpsEq for Xyz<T>
where
    T: UlpsEq,
    T::Epsilon: Copy,
{
    fn default_max_ulps() -> u32 {
        T::default_max_ulps()
    }

    fn ulps_eq(&self, other: &Self, epsilon: T::Epsilon, max_ulps: u32) -> bool {
        self.x.ulps_eq(&other.x, epsilon, max_ulps)
            && self.y.ulps_eq(&other.y, epsilon, max_ulps)
            && self.z.ulps_eq(&other.z, epsilon, max_ulps)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn componentwise_arithmetic() {
        let a = Xyz::new(1.0, 2.0, 3.0);
        let b = Xyz::new(0.5, 0.5, 0.5);
        assert_eq!(a + b, Xyz::new(1.5, 2.5, 3.5));
        assert_eq!(a - b, Xyz::new(0.5, 1.5, 2.5));
        assert_eq!(a * 2.0, Xyz::new(2.0, 4.0, 6.0));
        assert_eq!(2.0 * a, a * 2.0);
        assert_eq!(a / 2.0, Xyz::new(0.5, 1.0, 1.5));
        assert_eq!(-a, Xyz::new(-1.0, -2.0, -3.0));
    }

    #[test]
    fn assign_ops() {
        let mut a = Xyz::new(1.0, 2.0, 3.0);
        a += Xyz::new(1.0, 1.0, 1.0);
        a *= 2.0;
        assert_eq!(a, Xyz::new(4.0, 6.0, 8.0));
    }

    #[test]
    fn indexing() {
        let a = Xyz::new(1.0, 2.0, 3.0);
        assert_eq!(a[1], 2.0);
        assert_eq!(a.get(3), None);
        assert_eq!(a.to_array(), [1.0, 2.0, 3.0]);
    }
}
