//! CIE L* lightness transfer curve.

use crate::{Transfer, mirror};

/// The CIE L* curve, as used by the ECI RGB v2 working space.
///
/// L* is defined on lightness in `[0, 100]`; here both domains are
/// normalized to `[0, 1]`. The linear toe uses the exact CIE constant
/// `903.3 / 100` rather than a truncated decimal, so the two branches
/// meet exactly at the junction. Negative inputs are mirrored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CieL;

// CIE: kappa = 903.3, epsilon = 0.008856; the encoded-domain knee is
// kappa * epsilon / 100 = 0.08.
const KAPPA: f64 = 903.3;
const EPSILON: f64 = 0.008856;
const ENCODED_KNEE: f64 = 0.08;

impl Transfer for CieL {
    #[inline]
    fn to_linear(&self, v: f64) -> f64 {
        mirror(v, |v| {
            if v <= ENCODED_KNEE {
                v * 100.0 / KAPPA
            } else {
                let t = (v + 0.16) / 1.16;
                t * t * t
            }
        })
    }

    #[inline]
    fn to_nonlinear(&self, v: f64) -> f64 {
        mirror(v, |v| {
            if v <= EPSILON {
                v * KAPPA / 100.0
            } else {
                1.16 * v.cbrt() - 0.16
            }
        })
    }
}
