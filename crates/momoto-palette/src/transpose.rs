//! Lightness transposition: reshapes a scale's lightness curve so its first
//! step lands on a target lightness (typically the background's), using a
//! cubic-Bézier easing solved by Newton's method.

use crate::oklch::Oklch;
use crate::rgb::Rgb;

/// Bézier control points `(p1x, p1y, p2x, p2y)`; endpoints are implicitly
/// `(0,0)` and `(1,1)`.
pub type Curve = (f64, f64, f64, f64);

/// Light-mode easing curve.
pub const LIGHT_CURVE: Curve = (0.0, 2.0, 0.0, 2.0);
/// Dark-mode base easing curve, before softening.
pub const DARK_CURVE: Curve = (1.0, 0.0, 1.0, 0.0);
/// Dark-mode softening ceiling on the background/reference lightness ratio.
pub const DARK_SOFTEN_MAX_RATIO: f64 = 1.5;

/// Evaluates the eased `y` for input `x ∈ [0, 1]` along `curve`, solving for
/// the Bézier parameter `t` with up to 8 Newton iterations.
fn ease(x: f64, curve: Curve) -> f64 {
    let (p1x, p1y, p2x, p2y) = curve;

    let cx = 3.0 * p1x;
    let bx = 3.0 * (p2x - p1x) - cx;
    let ax = 1.0 - cx - bx;

    let cy = 3.0 * p1y;
    let by = 3.0 * (p2y - p1y) - cy;
    let ay = 1.0 - cy - by;

    let sample_x = |t: f64| ((ax * t + bx) * t + cx) * t;
    let sample_dx = |t: f64| (3.0 * ax * t + 2.0 * bx) * t + cx;
    let sample_y = |t: f64| ((ay * t + by) * t + cy) * t;

    let mut t = x;
    for _ in 0..8 {
        let dx = sample_dx(t);
        if dx.abs() < 1e-6 {
            break;
        }
        let xt = sample_x(t) - x;
        t = (t - xt / dx).clamp(0.0, 1.0);
    }

    sample_y(t)
}

/// Shifts `l[0]` to `to`, and every subsequent entry by a diminishing amount
/// governed by `ease`. `l[0] == to` exactly in the result.
fn transpose_lightness(l: &[f64], to: f64, curve: Curve) -> Vec<f64> {
    let diff = l[0] - to;
    let n = (l.len() - 1) as f64;
    l.iter()
        .enumerate()
        .map(|(i, &li)| li - diff * ease(1.0 - (i as f64) / n, curve))
        .collect()
}

/// Applies §4.6's lightness transposition to a synthesized scale, then
/// quantizes every step to 8-bit sRGB.
///
/// Detects light- vs dark-mode by `adjusted[0].l > 0.5`.
#[must_use]
pub fn transpose(adjusted: &[Oklch; 12], background: Oklch) -> [Rgb; 12] {
    let new_l = if adjusted[0].l > 0.5 {
        let to = background.l.clamp(0.0, 1.0);
        let mut anchored = Vec::with_capacity(13);
        anchored.push(1.0);
        anchored.extend(adjusted.iter().map(|c| c.l));
        let transposed = transpose_lightness(&anchored, to, LIGHT_CURVE);
        transposed[1..].to_vec()
    } else {
        let ref_bg_l = adjusted[0].l;
        let bg_l = background.l.clamp(0.0, 1.0);
        let ratio_l = bg_l / ref_bg_l.max(1e-3);

        let curve = if ratio_l > 1.0 {
            let meta_ratio = (ratio_l - 1.0) * (DARK_SOFTEN_MAX_RATIO / (DARK_SOFTEN_MAX_RATIO - 1.0));
            let soften = |c: f64| {
                if ratio_l > DARK_SOFTEN_MAX_RATIO {
                    0.0
                } else {
                    (c * (1.0 - meta_ratio)).clamp(0.0, 1.0)
                }
            };
            (soften(DARK_CURVE.0), soften(DARK_CURVE.1), soften(DARK_CURVE.2), soften(DARK_CURVE.3))
        } else {
            DARK_CURVE
        };

        let ls: Vec<f64> = adjusted.iter().map(|c| c.l).collect();
        transpose_lightness(&ls, bg_l, curve)
    };

    let mut out = [Rgb::new(0, 0, 0); 12];
    for i in 0..12 {
        debug_assert!(
            (-0.5..=1.5).contains(&new_l[i]),
            "transposed lightness far outside [0,1]: {}",
            new_l[i]
        );
        let oklch = Oklch::new(new_l[i].clamp(0.0, 1.0), adjusted[i].c, adjusted[i].h.degrees());
        let [r, g, b] = oklch.to_color().to_srgb8();
        out[i] = Rgb::new(r, g, b);
    }
    out
}
