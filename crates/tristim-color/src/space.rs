//! Compile-time RGB working-space tags.
//!
//! Each working space is a zero-sized type implementing [`RgbSpace`]. The
//! conversion matrices are associated consts derived from the primaries by
//! `const fn` at compile time, so tagging a triple with a space costs
//! nothing at runtime and mixing spaces is a type error.

use tristim_math::Mat3;
use tristim_primaries as primaries;
use tristim_primaries::Primaries;
use tristim_transfer::{CieL, GAMMA_1_8, GAMMA_2_2, PowerLaw, Srgb, Transfer};

/// An RGB working space known at compile time.
///
/// Carries the space's primaries, the RGB ↔ XYZ matrices derived from them,
/// and the transfer curve used by [`GammaRgb`](crate::GammaRgb).
pub trait RgbSpace: Copy + Clone + PartialEq + Eq + core::fmt::Debug + 'static {
    /// Transfer curve type of this space.
    type Curve: Transfer;

    /// The transfer curve value.
    const CURVE: Self::Curve;

    /// Primaries and reference white.
    const PRIMARIES: Primaries;

    /// Linear RGB to XYZ matrix, derived at compile time.
    const TO_XYZ: Mat3;

    /// XYZ to linear RGB matrix, derived at compile time.
    const FROM_XYZ: Mat3;

    /// Display name.
    const NAME: &'static str;
}

macro_rules! rgb_space {
    ($(#[$meta:meta])* $tag:ident, $prim:path, $curve_ty:ty, $curve:expr) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
        pub struct $tag;

        impl RgbSpace for $tag {
            type Curve = $curve_ty;
            const CURVE: Self::Curve = $curve;
            const PRIMARIES: Primaries = $prim;
            const TO_XYZ: Mat3 = primaries::rgb_to_xyz_matrix(&Self::PRIMARIES);
            const FROM_XYZ: Mat3 = primaries::xyz_to_rgb_matrix(&Self::PRIMARIES);
            const NAME: &'static str = Self::PRIMARIES.name;
        }
    };
}

rgb_space!(
    /// sRGB / Rec. 709 primaries, D65 white, sRGB piecewise curve.
    SRgb,
    primaries::SRGB,
    Srgb,
    Srgb
);

rgb_space!(
    /// Adobe RGB (1998), D65, γ 2.2.
    AdobeRgb,
    primaries::ADOBE_RGB,
    PowerLaw,
    GAMMA_2_2
);

rgb_space!(
    /// Apple RGB, D65, γ 1.8.
    AppleRgb,
    primaries::APPLE_RGB,
    PowerLaw,
    GAMMA_1_8
);

rgb_space!(
    /// Best RGB, D50, γ 2.2.
    BestRgb,
    primaries::BEST_RGB,
    PowerLaw,
    GAMMA_2_2
);

rgb_space!(
    /// Beta RGB, D50, γ 2.2.
    BetaRgb,
    primaries::BETA_RGB,
    PowerLaw,
    GAMMA_2_2
);

rgb_space!(
    /// Bruce RGB, D65, γ 2.2.
    BruceRgb,
    primaries::BRUCE_RGB,
    PowerLaw,
    GAMMA_2_2
);

rgb_space!(
    /// CIE RGB, Illuminant E, γ 2.2.
    CieRgb,
    primaries::CIE_RGB,
    PowerLaw,
    GAMMA_2_2
);

rgb_space!(
    /// ColorMatch RGB, D50, γ 1.8.
    ColorMatchRgb,
    primaries::COLORMATCH_RGB,
    PowerLaw,
    GAMMA_1_8
);

rgb_space!(
    /// Don RGB 4, D50, γ 2.2.
    DonRgb4,
    primaries::DON_RGB_4,
    PowerLaw,
    GAMMA_2_2
);

rgb_space!(
    /// ECI RGB v2, D50, CIE L* curve.
    EciRgbV2,
    primaries::ECI_RGB_V2,
    CieL,
    CieL
);

rgb_space!(
    /// Ekta Space PS5, D50, γ 2.2.
    EktaSpacePs5,
    primaries::EKTA_SPACE_PS5,
    PowerLaw,
    GAMMA_2_2
);

rgb_space!(
    /// NTSC RGB, Illuminant C, γ 2.2.
    NtscRgb,
    primaries::NTSC_RGB,
    PowerLaw,
    GAMMA_2_2
);

rgb_space!(
    /// PAL/SECAM RGB, D65, γ 2.2.
    PalSecamRgb,
    primaries::PAL_SECAM_RGB,
    PowerLaw,
    GAMMA_2_2
);

rgb_space!(
    /// ProPhoto RGB, D50, γ 1.8.
    ProPhotoRgb,
    primaries::PROPHOTO_RGB,
    PowerLaw,
    GAMMA_1_8
);

rgb_space!(
    /// SMPTE-C RGB, D65, γ 2.2.
    SmpteC,
    primaries::SMPTE_C_RGB,
    PowerLaw,
    GAMMA_2_2
);

rgb_space!(
    /// Wide Gamut RGB, D50, γ 2.2.
    WideGamutRgb,
    primaries::WIDE_GAMUT_RGB,
    PowerLaw,
    GAMMA_2_2
);
