//! Linear RGB ↔ XYZ conversion.
//!
//! The matrices live on the space tag as compile-time consts; conversion
//! is a single matrix-vector product carried out in the triple's channel
//! type. Since XYZ is untagged, a round trip through it is also the way to
//! move a color between working spaces.

use tristim_math::Channel;

use crate::rgb::LinearRgb;
use crate::space::RgbSpace;
use crate::xyz::Xyz;

#[inline]
fn row_dot<T: Channel>(row: [f64; 3], v: [T; 3]) -> T {
    T::from_f64(row[0]) * v[0] + T::from_f64(row[1]) * v[1] + T::from_f64(row[2]) * v[2]
}

impl<T: Channel, S: RgbSpace> LinearRgb<T, S> {
    /// Converts to XYZ with the space's derived matrix.
    #[inline]
    pub fn to_xyz(self) -> Xyz<T> {
        let m = S::TO_XYZ;
        let v = self.to_array();
        Xyz::new(row_dot(m.m[0], v), row_dot(m.m[1], v), row_dot(m.m[2], v))
    }

    /// Converts from XYZ with the space's derived inverse matrix.
    #[inline]
    pub fn from_xyz(xyz: Xyz<T>) -> Self {
        let m = S::FROM_XYZ;
        let v = xyz.to_array();
        Self::new(row_dot(m.m[0], v), row_dot(m.m[1], v), row_dot(m.m[2], v))
    }
}

impl<T: Channel, S: RgbSpace> From<LinearRgb<T, S>> for Xyz<T> {
    #[inline]
    fn from(rgb: LinearRgb<T, S>) -> Self {
        rgb.to_xyz()
    }
}

impl<T: Channel, S: RgbSpace> From<Xyz<T>> for LinearRgb<T, S> {
    #[inline]
    fn from(xyz: Xyz<T>) -> Self {
        Self::from_xyz(xyz)
    }
}
