//! Reverse-alpha blending: given a target color and a background, solves
//! for a translucent foreground that composites back to the target.

use crate::rgb::Rgb;

/// A solved translucent color: an opaque RGB tint plus the alpha at which
/// it should be painted over the background to recover the target.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AlphaColor {
    /// The opaque tint.
    pub rgb: Rgb,
    /// Opacity in `[0, 1]`.
    pub alpha: f64,
}

/// Solves for `(R, G, B, α)` such that compositing `(R,G,B)` at opacity `α`
/// over `background` recovers `target`, under 8-bit rounding.
///
/// `forced_alpha`, when given, is used instead of the per-channel maximum
/// (used for the surface color, whose alpha is a fixed design constant).
#[must_use]
pub fn reverse_alpha(target: Rgb, background: Rgb, forced_alpha: Option<f64>) -> AlphaColor {
    let t = [target.r as f64, target.g as f64, target.b as f64];
    let bg = [background.r as f64, background.g as f64, background.b as f64];

    let desired = if t[0] > bg[0] || t[1] > bg[1] || t[2] > bg[2] { 255.0 } else { 0.0 };

    let mut per_channel_alpha = [0.0; 3];
    for k in 0..3 {
        if desired - bg[k] != 0.0 {
            per_channel_alpha[k] = (t[k] - bg[k]) / (desired - bg[k]);
        } else if t[k] == bg[k] {
            per_channel_alpha[k] = 0.0;
        }
    }

    if target == background {
        return AlphaColor { rgb: Rgb::new(0, 0, 0), alpha: 0.0 };
    }

    let is_pure_gray =
        per_channel_alpha[0] == per_channel_alpha[1] && per_channel_alpha[1] == per_channel_alpha[2];

    if is_pure_gray {
        let d = desired as u8;
        return AlphaColor {
            rgb: Rgb::new(d, d, d),
            alpha: per_channel_alpha[0].clamp(0.0, 1.0),
        };
    }

    let alpha = forced_alpha
        .unwrap_or_else(|| per_channel_alpha.iter().cloned().fold(f64::MIN, f64::max).clamp(0.0, 1.0));

    let mut solved = [0.0_f64; 3];
    for k in 0..3 {
        let f = if alpha == 0.0 {
            0.0
        } else {
            ((-bg[k] * (1.0 - alpha)) + t[k]) / alpha
        };
        debug_assert!(
            (-1.0..=256.0).contains(&f),
            "solved channel far outside [0,255]: {f}"
        );
        solved[k] = f.round().clamp(0.0, 255.0);
    }

    // Rounding correction: nudge channels whose round-trip composite missed
    // the target, in the direction `desired` pushed them.
    for k in 0..3 {
        let blend = (bg[k] * (1.0 - alpha)).round() + (solved[k] * alpha).round();
        let needs_nudge = if desired == 0.0 { t[k] <= bg[k] } else { t[k] >= bg[k] };
        if needs_nudge && t[k] != blend {
            let step = if t[k] > blend { 1.0 } else { -1.0 };
            solved[k] = (solved[k] + step).clamp(0.0, 255.0);
        }
    }

    AlphaColor {
        rgb: Rgb::new(solved[0] as u8, solved[1] as u8, solved[2] as u8),
        alpha: alpha.clamp(0.0, 1.0),
    }
}
