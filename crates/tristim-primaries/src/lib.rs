//! # tristim-primaries
//!
//! Chromaticity coordinates of RGB working spaces and derivation of their
//! RGB ↔ XYZ conversion matrices.
//!
//! A [`Primaries`] value holds the CIE xy chromaticities of the red, green
//! and blue primaries together with the XYZ of the reference white. From
//! those, [`rgb_to_xyz_matrix`] derives the 3x3 matrix that takes linear RGB
//! to XYZ:
//!
//! 1. lift each primary's xy to an XYZ column with `Y = 1`
//! 2. solve `S = M⁻¹ · W` so the white point maps to the reference white
//! 3. scale each column by its component of `S`
//!
//! The derivation is entirely `const fn`, so every bundled working space
//! gets its forward and inverse matrix computed at compile time. For
//! user-supplied primaries, the `try_` variants return a [`Result`] instead
//! of panicking on degenerate (collinear) primaries.
//!
//! The sixteen bundled spaces use Bruce Lindbloom's published chromaticity
//! and reference-white values. White points are stored as XYZ from the
//! ASTM E308-01 tables; deriving them from rounded xy chromaticities loses
//! three to four significant digits in the matrices.
//!
//! # Example
//!
//! ```rust
//! use tristim_primaries::{SRGB, rgb_to_xyz_matrix};
//!
//! let m = rgb_to_xyz_matrix(&SRGB);
//! // Row 1 is the luminance weights of the sRGB primaries.
//! assert!((m[1][0] - 0.2126729).abs() < 1e-6);
//! ```
//!
//! # Dependencies
//!
//! - [`tristim_math`] - `Mat3` with const inversion
//! - `thiserror` - Error type for the fallible API
//!
//! # Used By
//!
//! - `tristim-color` - per-space compile-time conversion matrices

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

use thiserror::Error;
use tristim_math::Mat3;

// ============================================================================
// Types
// ============================================================================

/// A CIE xy chromaticity coordinate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Chromaticity {
    /// CIE x coordinate.
    pub x: f64,
    /// CIE y coordinate.
    pub y: f64,
}

impl Chromaticity {
    /// Creates a chromaticity from xy coordinates.
    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// The defining data of an RGB working space: three primaries and a
/// reference white.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Primaries {
    /// Red primary chromaticity.
    pub r: Chromaticity,
    /// Green primary chromaticity.
    pub g: Chromaticity,
    /// Blue primary chromaticity.
    pub b: Chromaticity,
    /// Reference white as XYZ, normalized to `Y = 1`.
    pub white: [f64; 3],
    /// Display name of the working space.
    pub name: &'static str,
}

impl Primaries {
    /// Creates a primaries set.
    pub const fn new(
        r: Chromaticity,
        g: Chromaticity,
        b: Chromaticity,
        white: [f64; 3],
        name: &'static str,
    ) -> Self {
        Self { r, g, b, white, name }
    }
}

/// Error deriving a conversion matrix from primaries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PrimariesError {
    /// A primary has `y = 0`, so it has no finite XYZ representation.
    #[error("primary chromaticity with y = 0 has no finite XYZ")]
    DegenerateChromaticity,
    /// The three primaries are collinear in xy; the matrix is singular.
    #[error("collinear primaries give a singular conversion matrix")]
    CollinearPrimaries,
}

// ============================================================================
// Reference whites (XYZ, Y = 1, ASTM E308-01 2° observer)
// ============================================================================

/// D65 daylight white.
pub const WHITE_D65: [f64; 3] = [0.95047, 1.0, 1.08883];

/// D50 daylight white.
pub const WHITE_D50: [f64; 3] = [0.96422, 1.0, 0.82521];

/// CIE Illuminant C.
pub const WHITE_C: [f64; 3] = [0.98074, 1.0, 1.18232];

/// CIE Illuminant E (equal energy).
pub const WHITE_E: [f64; 3] = [1.0, 1.0, 1.0];

// ============================================================================
// Matrix derivation
// ============================================================================

/// Lifts an xy chromaticity to XYZ with `Y = 1`.
#[inline]
pub const fn xy_to_xyz(c: Chromaticity) -> [f64; 3] {
    [c.x / c.y, 1.0, (1.0 - c.x - c.y) / c.y]
}

/// Derives the linear-RGB-to-XYZ matrix for a set of primaries.
///
/// Returns an error if a primary sits on the `y = 0` line or the three
/// primaries are collinear.
pub const fn try_rgb_to_xyz_matrix(p: &Primaries) -> Result<Mat3, PrimariesError> {
    if p.r.y == 0.0 || p.g.y == 0.0 || p.b.y == 0.0 {
        return Err(PrimariesError::DegenerateChromaticity);
    }

    let m = Mat3::from_cols([xy_to_xyz(p.r), xy_to_xyz(p.g), xy_to_xyz(p.b)]);
    let inv = match m.inverse() {
        Some(inv) => inv,
        None => return Err(PrimariesError::CollinearPrimaries),
    };

    // Scale each primary column so that RGB (1, 1, 1) lands on the white.
    let s = inv.transform(p.white);
    Ok(Mat3::from_cols([
        [m.m[0][0] * s[0], m.m[1][0] * s[0], m.m[2][0] * s[0]],
        [m.m[0][1] * s[1], m.m[1][1] * s[1], m.m[2][1] * s[1]],
        [m.m[0][2] * s[2], m.m[1][2] * s[2], m.m[2][2] * s[2]],
    ]))
}

/// Derives the XYZ-to-linear-RGB matrix for a set of primaries.
pub const fn try_xyz_to_rgb_matrix(p: &Primaries) -> Result<Mat3, PrimariesError> {
    let forward = match try_rgb_to_xyz_matrix(p) {
        Ok(m) => m,
        Err(e) => return Err(e),
    };
    match forward.inverse() {
        Some(inv) => Ok(inv),
        None => Err(PrimariesError::CollinearPrimaries),
    }
}

/// Const variant of [`try_rgb_to_xyz_matrix`] for known-good primaries.
///
/// Intended for `const` initializers; degenerate primaries fail the build
/// instead of returning an error.
pub const fn rgb_to_xyz_matrix(p: &Primaries) -> Mat3 {
    match try_rgb_to_xyz_matrix(p) {
        Ok(m) => m,
        Err(_) => panic!("degenerate primaries"),
    }
}

/// Const variant of [`try_xyz_to_rgb_matrix`] for known-good primaries.
pub const fn xyz_to_rgb_matrix(p: &Primaries) -> Mat3 {
    match try_xyz_to_rgb_matrix(p) {
        Ok(m) => m,
        Err(_) => panic!("degenerate primaries"),
    }
}

// ============================================================================
// Bundled working spaces (Lindbloom)
// ============================================================================

/// sRGB / Rec. 709 primaries, D65.
pub const SRGB: Primaries = Primaries::new(
    Chromaticity::new(0.6400, 0.3300),
    Chromaticity::new(0.3000, 0.6000),
    Chromaticity::new(0.1500, 0.0600),
    WHITE_D65,
    "sRGB",
);

/// Adobe RGB (1998) primaries, D65.
pub const ADOBE_RGB: Primaries = Primaries::new(
    Chromaticity::new(0.6400, 0.3300),
    Chromaticity::new(0.2100, 0.7100),
    Chromaticity::new(0.1500, 0.0600),
    WHITE_D65,
    "Adobe RGB (1998)",
);

/// Apple RGB primaries, D65.
pub const APPLE_RGB: Primaries = Primaries::new(
    Chromaticity::new(0.6250, 0.3400),
    Chromaticity::new(0.2800, 0.5950),
    Chromaticity::new(0.1550, 0.0700),
    WHITE_D65,
    "Apple RGB",
);

/// Best RGB primaries, D50.
pub const BEST_RGB: Primaries = Primaries::new(
    Chromaticity::new(0.7347, 0.2653),
    Chromaticity::new(0.2150, 0.7750),
    Chromaticity::new(0.1300, 0.0350),
    WHITE_D50,
    "Best RGB",
);

/// Beta RGB primaries, D50.
pub const BETA_RGB: Primaries = Primaries::new(
    Chromaticity::new(0.6888, 0.3112),
    Chromaticity::new(0.1986, 0.7551),
    Chromaticity::new(0.1265, 0.0352),
    WHITE_D50,
    "Beta RGB",
);

/// Bruce RGB primaries, D65.
pub const BRUCE_RGB: Primaries = Primaries::new(
    Chromaticity::new(0.6400, 0.3300),
    Chromaticity::new(0.2800, 0.6500),
    Chromaticity::new(0.1500, 0.0600),
    WHITE_D65,
    "Bruce RGB",
);

/// CIE RGB primaries, Illuminant E.
pub const CIE_RGB: Primaries = Primaries::new(
    Chromaticity::new(0.7350, 0.2650),
    Chromaticity::new(0.2740, 0.7170),
    Chromaticity::new(0.1670, 0.0090),
    WHITE_E,
    "CIE RGB",
);

/// ColorMatch RGB primaries, D50.
pub const COLORMATCH_RGB: Primaries = Primaries::new(
    Chromaticity::new(0.6300, 0.3400),
    Chromaticity::new(0.2950, 0.6050),
    Chromaticity::new(0.1500, 0.0750),
    WHITE_D50,
    "ColorMatch RGB",
);

/// Don RGB 4 primaries, D50.
pub const DON_RGB_4: Primaries = Primaries::new(
    Chromaticity::new(0.6960, 0.3000),
    Chromaticity::new(0.2150, 0.7650),
    Chromaticity::new(0.1300, 0.0350),
    WHITE_D50,
    "Don RGB 4",
);

/// ECI RGB v2 primaries, D50.
pub const ECI_RGB_V2: Primaries = Primaries::new(
    Chromaticity::new(0.6700, 0.3300),
    Chromaticity::new(0.2100, 0.7100),
    Chromaticity::new(0.1400, 0.0800),
    WHITE_D50,
    "ECI RGB v2",
);

/// Ekta Space PS5 primaries, D50.
pub const EKTA_SPACE_PS5: Primaries = Primaries::new(
    Chromaticity::new(0.6950, 0.3050),
    Chromaticity::new(0.2600, 0.7000),
    Chromaticity::new(0.1100, 0.0050),
    WHITE_D50,
    "Ekta Space PS5",
);

/// NTSC RGB primaries, Illuminant C.
pub const NTSC_RGB: Primaries = Primaries::new(
    Chromaticity::new(0.6700, 0.3300),
    Chromaticity::new(0.2100, 0.7100),
    Chromaticity::new(0.1400, 0.0800),
    WHITE_C,
    "NTSC RGB",
);

/// PAL/SECAM RGB primaries, D65.
pub const PAL_SECAM_RGB: Primaries = Primaries::new(
    Chromaticity::new(0.6400, 0.3300),
    Chromaticity::new(0.2900, 0.6000),
    Chromaticity::new(0.1500, 0.0600),
    WHITE_D65,
    "PAL/SECAM RGB",
);

/// ProPhoto RGB primaries, D50.
pub const PROPHOTO_RGB: Primaries = Primaries::new(
    Chromaticity::new(0.7347, 0.2653),
    Chromaticity::new(0.1596, 0.8404),
    Chromaticity::new(0.0366, 0.0001),
    WHITE_D50,
    "ProPhoto RGB",
);

/// SMPTE-C RGB primaries, D65.
pub const SMPTE_C_RGB: Primaries = Primaries::new(
    Chromaticity::new(0.6300, 0.3400),
    Chromaticity::new(0.3100, 0.5950),
    Chromaticity::new(0.1550, 0.0700),
    WHITE_D65,
    "SMPTE-C RGB",
);

/// Wide Gamut RGB primaries, D50.
pub const WIDE_GAMUT_RGB: Primaries = Primaries::new(
    Chromaticity::new(0.7350, 0.2650),
    Chromaticity::new(0.1150, 0.8260),
    Chromaticity::new(0.1570, 0.0180),
    WHITE_D50,
    "Wide Gamut RGB",
);

/// All bundled working spaces.
pub const ALL: [&Primaries; 16] = [
    &SRGB,
    &ADOBE_RGB,
    &APPLE_RGB,
    &BEST_RGB,
    &BETA_RGB,
    &BRUCE_RGB,
    &CIE_RGB,
    &COLORMATCH_RGB,
    &DON_RGB_4,
    &ECI_RGB_V2,
    &EKTA_SPACE_PS5,
    &NTSC_RGB,
    &PAL_SECAM_RGB,
    &PROPHOTO_RGB,
    &SMPTE_C_RGB,
    &WIDE_GAMUT_RGB,
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn srgb_matrix_matches_published_values() {
        let m = rgb_to_xyz_matrix(&SRGB);
        let expected = [
            [0.4124564, 0.3575761, 0.1804375],
            [0.2126729, 0.7151522, 0.0721750],
            [0.0193339, 0.1191920, 0.9503041],
        ];
        for i in 0..3 {
            for j in 0..3 {
                assert!(
                    (m[i][j] - expected[i][j]).abs() < 1e-6,
                    "m[{i}][{j}] = {} != {}",
                    m[i][j],
                    expected[i][j]
                );
            }
        }
    }

    #[test]
    fn white_maps_to_reference_white() {
        for p in ALL {
            let m = rgb_to_xyz_matrix(p);
            let w = m.transform([1.0, 1.0, 1.0]);
            for k in 0..3 {
                assert!(
                    (w[k] - p.white[k]).abs() < 1e-12,
                    "{}: white[{k}] = {} != {}",
                    p.name,
                    w[k],
                    p.white[k]
                );
            }
        }
    }

    #[test]
    fn forward_inverse_roundtrip() {
        for p in ALL {
            let m = rgb_to_xyz_matrix(p) * xyz_to_rgb_matrix(p);
            for i in 0..3 {
                for j in 0..3 {
                    let expected = if i == j { 1.0 } else { 0.0 };
                    assert!((m[i][j] - expected).abs() < 1e-10, "{}", p.name);
                }
            }
        }
    }

    #[test]
    fn matrices_are_const_derivable() {
        const M: Mat3 = rgb_to_xyz_matrix(&SRGB);
        assert!(M.is_finite());
    }

    #[test]
    fn degenerate_y_is_an_error() {
        let p = Primaries::new(
            Chromaticity::new(0.64, 0.0),
            Chromaticity::new(0.30, 0.60),
            Chromaticity::new(0.15, 0.06),
            WHITE_D65,
            "broken",
        );
        assert_eq!(
            try_rgb_to_xyz_matrix(&p),
            Err(PrimariesError::DegenerateChromaticity)
        );
    }

    #[test]
    fn collinear_primaries_are_an_error() {
        // Three points on the same line through xy space.
        let p = Primaries::new(
            Chromaticity::new(0.2, 0.2),
            Chromaticity::new(0.3, 0.3),
            Chromaticity::new(0.4, 0.4),
            WHITE_D65,
            "broken",
        );
        assert_eq!(
            try_rgb_to_xyz_matrix(&p),
            Err(PrimariesError::CollinearPrimaries)
        );
    }

    #[test]
    fn luminance_rows_sum_to_one() {
        for p in ALL {
            let m = rgb_to_xyz_matrix(p);
            let y_sum: f64 = m[1].iter().sum();
            assert!((y_sum - 1.0).abs() < 1e-12, "{}", p.name);
        }
    }
}
