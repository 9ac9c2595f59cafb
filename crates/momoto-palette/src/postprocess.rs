//! Post-processing applied to a freshly synthesized-and-transposed accent
//! scale: pure white/black substitution, the step-9 replacement rule, the
//! button-hover derivative, and the chroma cap on steps 10–11.
//!
//! Every comparison here re-derives OKLCH from the already-quantized 8-bit
//! RGB steps, deliberately reproducing the reference implementation's
//! double conversion (hex → RGB → OKLCH) rather than carrying forward
//! higher-precision intermediates — downstream thresholds were calibrated
//! against the quantized values.

use momoto_core::color::Color;

use crate::contrast::pick_text_color;
use crate::oklch::Oklch;
use crate::rgb::Rgb;

/// Step-9 closeness threshold (`ΔE_OK × 100`).
const STEP9_THRESHOLD: f64 = 25.0;
/// Button-hover chroma multiplier.
const HOVER_CHROMA_MULTIPLIER: f64 = 0.93;
/// Button-hover lightness step size numerator.
const HOVER_LIGHTNESS_NUMERATOR: f64 = 0.03;
/// Lightness pivot between "lighten" and "darken" hover direction.
const HOVER_LIGHTNESS_PIVOT: f64 = 0.4;

fn to_oklch(rgb: Rgb) -> Oklch {
    Oklch::from_color(&Color::from_srgb8(rgb.r, rgb.g, rgb.b))
}

fn to_rgb(oklch: Oklch) -> Rgb {
    let [r, g, b] = oklch.to_color().to_srgb8();
    Rgb::new(r, g, b)
}

/// Replaces `accent_scale` with `gray_scale` wholesale if the seed accent
/// color is pure white or pure black.
#[must_use]
pub fn substitute_pure_accent(source: Rgb, accent_scale: [Rgb; 12], gray_scale: [Rgb; 12]) -> [Rgb; 12] {
    if source.is_pure_black_or_white() {
        gray_scale
    } else {
        accent_scale
    }
}

/// Applies the step-9 replacement rule, writing the result into
/// `accent_scale[8]` and returning `(step9, contrast)`.
pub fn apply_step9(source_accent: Oklch, accent_scale: &mut [Rgb; 12]) -> (Oklch, Oklch) {
    let step0 = to_oklch(accent_scale[0]);
    let distance = source_accent.delta_e(&step0) * 100.0;

    let step9 = if distance < STEP9_THRESHOLD {
        to_oklch(accent_scale[8])
    } else {
        source_accent
    };

    accent_scale[8] = to_rgb(step9);
    let contrast = pick_text_color(&step9);
    (step9, contrast)
}

/// Computes and writes the button-hover derivative (step index 9) from the
/// step-9 color `g`, searching the *current* (already step-9-mutated)
/// accent scale for the nearest neighbor to steal chroma/hue from.
pub fn apply_hover(g: Oklch, accent_scale: &mut [Rgb; 12]) {
    let darken = g.l > HOVER_LIGHTNESS_PIVOT;
    let delta = HOVER_LIGHTNESS_NUMERATOR / (g.l + 0.1);
    let new_l = if darken { g.l - delta } else { g.l + delta };

    let new_c = if darken && g.h.is_defined() { g.c * HOVER_CHROMA_MULTIPLIER } else { g.c };

    let candidate = Oklch { l: new_l, c: new_c, h: g.h };

    let nearest = accent_scale
        .iter()
        .map(|&rgb| to_oklch(rgb))
        .min_by(|a, b| candidate.delta_e(a).partial_cmp(&candidate.delta_e(b)).unwrap())
        .unwrap();

    let hover = Oklch { l: new_l, c: nearest.c, h: nearest.h };
    accent_scale[9] = to_rgb(hover);
}

/// Caps the chroma of `accent_scale[10]` and `accent_scale[11]` at
/// `max(accentScale[8].C, accentScale[7].C)`.
pub fn apply_chroma_cap(accent_scale: &mut [Rgb; 12]) {
    let c_max = to_oklch(accent_scale[8]).c.max(to_oklch(accent_scale[7]).c);

    for i in [10usize, 11usize] {
        let step = to_oklch(accent_scale[i]);
        let capped = Oklch { l: step.l, c: c_max.min(step.c), h: step.h };
        accent_scale[i] = to_rgb(capped);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn flat_scale(rgb: Rgb) -> [Rgb; 12] {
        [rgb; 12]
    }

    #[test]
    fn substitutes_gray_scale_for_pure_white_accent() {
        let white = Rgb::new(255, 255, 255);
        let accent = flat_scale(Rgb::new(10, 20, 30));
        let gray = flat_scale(Rgb::new(40, 40, 40));
        let result = substitute_pure_accent(white, accent, gray);
        assert_eq!(result, gray);
    }

    #[test]
    fn substitutes_gray_scale_for_pure_black_accent() {
        let black = Rgb::new(0, 0, 0);
        let accent = flat_scale(Rgb::new(10, 20, 30));
        let gray = flat_scale(Rgb::new(40, 40, 40));
        let result = substitute_pure_accent(black, accent, gray);
        assert_eq!(result, gray);
    }

    #[test]
    fn leaves_accent_scale_untouched_for_chromatic_source() {
        let accent_seed = Rgb::new(61, 99, 221);
        let accent = flat_scale(Rgb::new(10, 20, 30));
        let gray = flat_scale(Rgb::new(40, 40, 40));
        let result = substitute_pure_accent(accent_seed, accent, gray);
        assert_eq!(result, accent);
    }

    #[test]
    fn step9_uses_source_when_far_from_background() {
        let source = Oklch::new(0.45, 0.2, 260.0);
        let mut scale = flat_scale(Rgb::new(250, 250, 250));
        let (step9, _contrast) = apply_step9(source, &mut scale);
        assert!((step9.l - source.l).abs() < 1e-9);
    }

    #[test]
    fn step9_keeps_existing_color_when_close_to_background() {
        let near_bg_rgb = Rgb::new(248, 248, 248);
        let source = to_oklch(near_bg_rgb);
        let mut scale = flat_scale(near_bg_rgb);
        scale[8] = Rgb::new(200, 50, 50);
        let (step9, _contrast) = apply_step9(source, &mut scale);
        let expected = to_oklch(Rgb::new(200, 50, 50));
        assert!(step9.delta_e(&expected) < 1e-6);
    }

    #[test]
    fn chroma_cap_bounds_tail_steps() {
        let mut scale = flat_scale(Rgb::new(120, 120, 120));
        scale[7] = to_rgb(Oklch::new(0.5, 0.1, 250.0));
        scale[8] = to_rgb(Oklch::new(0.5, 0.08, 250.0));
        scale[10] = to_rgb(Oklch::new(0.5, 0.3, 250.0));
        scale[11] = to_rgb(Oklch::new(0.5, 0.25, 250.0));
        apply_chroma_cap(&mut scale);
        let c10 = to_oklch(scale[10]).c;
        let c11 = to_oklch(scale[11]).c;
        assert!(c10 <= 0.1 + 1e-6);
        assert!(c11 <= 0.1 + 1e-6);
    }

    #[test]
    fn hover_writes_into_step_index_nine() {
        let g = Oklch::new(0.5, 0.15, 250.0);
        let mut scale = flat_scale(to_rgb(Oklch::new(0.5, 0.1, 250.0)));
        let before = scale[9];
        apply_hover(g, &mut scale);
        assert_ne!(scale[9], before);
    }
}
