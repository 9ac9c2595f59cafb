//! Property-based tests for the public color pipeline.

use momoto_core::color::Color;
use momoto_palette::{generate, mix, Appearance, Hue, Oklch, Rgb};
use proptest::prelude::*;

fn rgb_triple() -> impl Strategy<Value = (u8, u8, u8)> {
    (any::<u8>(), any::<u8>(), any::<u8>())
}

proptest! {
    #[test]
    fn prop_srgb_oklch_roundtrip_within_one_bit((r, g, b) in rgb_triple()) {
        let original = Color::from_srgb8(r, g, b);
        let oklch = Oklch::from_color(&original);
        let back = oklch.to_color();
        let [r2, g2, b2] = back.to_srgb8();
        prop_assert!((r as i16 - r2 as i16).abs() <= 1);
        prop_assert!((g as i16 - g2 as i16).abs() <= 1);
        prop_assert!((b as i16 - b2 as i16).abs() <= 1);
    }

    #[test]
    fn prop_delta_e_is_symmetric_and_nonnegative(
        (r1, g1, b1) in rgb_triple(),
        (r2, g2, b2) in rgb_triple(),
    ) {
        let a = Oklch::from_color(&Color::from_srgb8(r1, g1, b1));
        let b = Oklch::from_color(&Color::from_srgb8(r2, g2, b2));
        prop_assert!(a.delta_e(&b) >= 0.0);
        prop_assert!((a.delta_e(&b) - b.delta_e(&a)).abs() < 1e-9);
    }

    #[test]
    fn prop_delta_e_is_zero_on_diagonal((r, g, b) in rgb_triple()) {
        let a = Oklch::from_color(&Color::from_srgb8(r, g, b));
        prop_assert_eq!(a.delta_e(&a), 0.0);
    }

    #[test]
    fn prop_mix_returns_endpoints_at_zero_and_one(
        (r1, g1, b1) in rgb_triple(),
        (r2, g2, b2) in rgb_triple(),
    ) {
        let a = Oklch::from_color(&Color::from_srgb8(r1, g1, b1));
        let b = Oklch::from_color(&Color::from_srgb8(r2, g2, b2));
        prop_assert_eq!(mix(&a, &b, 0.0), a);
        prop_assert_eq!(mix(&a, &b, 1.0), b);
    }

    #[test]
    fn prop_mix_interpolates_lightness_and_chroma_linearly(
        (r1, g1, b1) in rgb_triple(),
        (r2, g2, b2) in rgb_triple(),
        t in 0.0f64..=1.0,
    ) {
        let a = Oklch::from_color(&Color::from_srgb8(r1, g1, b1));
        let b = Oklch::from_color(&Color::from_srgb8(r2, g2, b2));
        let mixed = mix(&a, &b, t);
        prop_assert!((mixed.l - (a.l + (b.l - a.l) * t)).abs() < 1e-9);
        prop_assert!((mixed.c - (a.c + (b.c - a.c) * t)).abs() < 1e-9);
    }
}

#[test]
fn mix_shortest_arc_crosses_zero_not_one_eighty() {
    let a = Oklch::new(0.5, 0.1, 10.0);
    let b = Oklch::new(0.5, 0.1, 350.0);
    let mid = mix(&a, &b, 0.5);
    assert!(mid.h.degrees() < 1.0 || mid.h.degrees() > 359.0);
}

#[test]
fn scenario_blue_accent_on_white_has_white_contrast() {
    let palette = generate(Appearance::Light, "#3D63DD", "#8B8D98", "#FFFFFF").unwrap();
    assert_eq!(palette.accent_contrast, Rgb::new(255, 255, 255));
}

#[test]
fn scenario_white_accent_equals_gray_scale() {
    let palette = generate(Appearance::Light, "#FFFFFF", "#8B8D98", "#FFFFFF").unwrap();
    assert_eq!(palette.accent_scale, palette.gray_scale);
}

#[test]
fn scenario_black_accent_equals_gray_scale() {
    let palette = generate(Appearance::Light, "#000000", "#8B8D98", "#FFFFFF").unwrap();
    assert_eq!(palette.accent_scale, palette.gray_scale);
}

#[test]
fn scenario_dark_appearance_step_zero_is_dark() {
    let palette = generate(Appearance::Dark, "#0090FF", "#8B8D98", "#111111").unwrap();
    let step0 = Oklch::from_color(&Color::from_srgb8(
        palette.accent_scale[0].r,
        palette.accent_scale[0].g,
        palette.accent_scale[0].b,
    ));
    assert!(step0.l < 0.2);
}

#[test]
fn scenario_chroma_cap_respected_in_dark_appearance() {
    let palette = generate(Appearance::Dark, "#0090FF", "#8B8D98", "#111111").unwrap();
    let chroma_of = |rgb: Rgb| Oklch::from_color(&Color::from_srgb8(rgb.r, rgb.g, rgb.b)).c;
    let c_max = chroma_of(palette.accent_scale[7]).max(chroma_of(palette.accent_scale[8]));
    assert!(chroma_of(palette.accent_scale[10]) <= c_max + 1e-9);
    assert!(chroma_of(palette.accent_scale[11]) <= c_max + 1e-9);
}

#[test]
fn alpha_variant_roundtrips_within_one_bit_of_opaque_step() {
    let palette = generate(Appearance::Light, "#3D63DD", "#8B8D98", "#FFFFFF").unwrap();
    for i in 0..12 {
        let alpha_color = palette.accent_scale_alpha[i];
        let bg = palette.background;
        let composite = |b: u8, f: u8| -> u8 {
            ((b as f64 * (1.0 - alpha_color.alpha)).round() + (f as f64 * alpha_color.alpha).round())
                .clamp(0.0, 255.0) as u8
        };
        let r = composite(bg.r, alpha_color.rgb.r);
        let g = composite(bg.g, alpha_color.rgb.g);
        let b = composite(bg.b, alpha_color.rgb.b);
        let target = palette.accent_scale[i];
        assert!((r as i16 - target.r as i16).abs() <= 1);
        assert!((g as i16 - target.g as i16).abs() <= 1);
        assert!((b as i16 - target.b as i16).abs() <= 1);
    }
}

#[test]
fn generation_is_deterministic_for_identical_inputs() {
    let a = generate(Appearance::Light, "#3D63DD", "#8B8D98", "#FFFFFF").unwrap();
    let b = generate(Appearance::Light, "#3D63DD", "#8B8D98", "#FFFFFF").unwrap();
    assert_eq!(a, b);
}

#[test]
fn achromatic_seed_produces_zero_hue_without_nan() {
    let gray_input = Oklch::new(0.6, 0.0, 0.0);
    assert_eq!(gray_input.h, Hue::Undefined);
    let palette = generate(Appearance::Light, "#808080", "#8B8D98", "#FFFFFF").unwrap();
    for rgb in palette.accent_scale {
        assert!(rgb.r <= 255 && rgb.g <= 255 && rgb.b <= 255);
    }
}
