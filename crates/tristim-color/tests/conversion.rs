//! Working-space conversion fixtures.
//!
//! Expected XYZ values for each bundled space come from Bruce Lindbloom's
//! published matrices, applied to a deliberately out-of-gamut triple so
//! every matrix entry contributes.

use approx::assert_relative_eq;
use tristim_color::{
    AdobeRgb, AppleRgb, BestRgb, BetaRgb, BruceRgb, CieRgb, ColorMatchRgb, DonRgb4, EciRgbV2,
    EktaSpacePs5, LinearRgb, NtscRgb, PalSecamRgb, ProPhotoRgb, SRgb, SmpteC, WideGamutRgb, Xyz,
};

macro_rules! space_fixture {
    ($name:ident, $space:ty, [$x:expr, $y:expr, $z:expr]) => {
        #[test]
        fn $name() {
            let rgb = LinearRgb::<f32, $space>::new(-999.0, 3.141, 1000.0);
            let expected = Xyz::new($x, $y, $z);
            assert_relative_eq!(rgb.to_xyz(), expected, max_relative = 1e-4);

            let back = LinearRgb::<f32, $space>::from_xyz(expected);
            assert_relative_eq!(back, rgb, max_relative = 1e-4);
        }
    };
}

space_fixture!(srgb, SRgb, [-230.483353, -138.038892, 931.363899]);
space_fixture!(adobe_rgb, AdobeRgb, [-387.386169, -219.834919, 964.323323]);
space_fixture!(apple_rgb, AppleRgb, [-263.793217, -158.977776, 897.746594]);
space_fixture!(best_rgb, BestRgb, [-504.399919, -191.721543, 815.725661]);
space_fixture!(beta_rgb, BetaRgb, [-551.651170, -267.943022, 784.636880]);
space_fixture!(bruce_rgb, BruceRgb, [-277.421270, -163.182383, 971.650055]);
space_fixture!(cie_rgb, CieRgb, [-286.651709, -162.663778, 989.827225]);
space_fixture!(colormatch_rgb, ColorMatchRgb, [-373.857482, -205.557380, 668.284937]);
space_fixture!(don_rgb_4, DonRgb4, [-519.420293, -242.230199, 799.861400]);
space_fixture!(eci_rgb_v2, EciRgbV2, [-513.056326, -240.359425, 757.584089]);
space_fixture!(ekta_space_ps5, EktaSpacePs5, [-495.091524, -253.634555, 783.344970]);
space_fixture!(ntsc_rgb, NtscRgb, [-405.391106, -182.290453, 1116.431941]);
space_fixture!(pal_secam_rgb, PalSecamRgb, [-250.806577, -148.272728, 919.336188]);
space_fixture!(prophoto_rgb, ProPhotoRgb, [-765.099278, -285.430536, 825.210000]);
space_fixture!(smpte_c, SmpteC, [-200.416979, -123.455612, 939.784298]);
space_fixture!(wide_gamut_rgb, WideGamutRgb, [-567.885614, -238.777336, 773.591371]);

#[test]
fn srgb_primaries_match_published_columns() {
    let red = LinearRgb::<f32, SRgb>::new(1.0, 0.0, 0.0).to_xyz();
    assert_relative_eq!(red, Xyz::new(0.412456, 0.212673, 0.019334), max_relative = 1e-4);

    let green = LinearRgb::<f32, SRgb>::new(0.0, 1.0, 0.0).to_xyz();
    assert_relative_eq!(green, Xyz::new(0.357576, 0.715152, 0.119192), max_relative = 1e-4);

    let blue = LinearRgb::<f32, SRgb>::new(0.0, 0.0, 10.0).to_xyz();
    assert_relative_eq!(blue, Xyz::new(1.804375, 0.721750, 9.503041), max_relative = 1e-4);
}

#[test]
fn conversion_is_linear() {
    let c = LinearRgb::<f64, SRgb>::new(0.3, -0.6, 1.2);
    let d = LinearRgb::<f64, SRgb>::new(0.9, 0.1, -0.4);

    // Additivity and homogeneity of the matrix transform.
    assert_relative_eq!((c + d).to_xyz(), c.to_xyz() + d.to_xyz(), max_relative = 1e-10);
    assert_relative_eq!((c * 7.5).to_xyz(), c.to_xyz() * 7.5, max_relative = 1e-10);
}

#[test]
fn every_space_roundtrips() {
    macro_rules! check {
        ($($space:ty),+ $(,)?) => {
            $(
                let c = LinearRgb::<f64, $space>::new(0.6, 0.4, 0.8);
                let back = LinearRgb::<f64, $space>::from_xyz(c.to_xyz());
                assert_relative_eq!(back, c, max_relative = 1e-10);
            )+
        };
    }
    check!(
        SRgb, AdobeRgb, AppleRgb, BestRgb, BetaRgb, BruceRgb, CieRgb, ColorMatchRgb, DonRgb4,
        EciRgbV2, EktaSpacePs5, NtscRgb, PalSecamRgb, ProPhotoRgb, SmpteC, WideGamutRgb,
    );
}
