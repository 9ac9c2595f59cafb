//! Scale synthesis: locates the nearest template scale(s) to a seed color
//! and blends, re-chromas, and re-hues them into a 12-step scale carrying
//! the seed's own hue and chroma character.

use crate::catalog::TemplateCatalog;
use crate::oklch::{mix, Oklch};

/// Chroma cap multiplier applied against the seed's own chroma.
pub const CHROMA_CAP_MULTIPLIER: f64 = 1.5;
/// Blend-ratio damping factor from the law-of-cosines triangulation.
pub const BLEND_DAMPING: f64 = 0.5;

struct ScaleMatch<'a> {
    steps: &'a [Oklch; 12],
    gray_like: bool,
    nearest: Oklch,
    dist: f64,
}

fn nearest_per_scale<'a>(source: &Oklch, catalog: &'a TemplateCatalog) -> Vec<ScaleMatch<'a>> {
    let mut matches: Vec<ScaleMatch<'a>> = catalog
        .scales
        .iter()
        .map(|scale| {
            let (nearest, dist) = scale
                .steps
                .iter()
                .map(|c| (*c, source.delta_e(c)))
                .fold((scale.steps[0], f64::INFINITY), |best, cur| {
                    if cur.1 < best.1 {
                        cur
                    } else {
                        best
                    }
                });
            ScaleMatch { steps: &scale.steps, gray_like: scale.gray_like, nearest, dist }
        })
        .collect();

    matches.sort_by(|a, b| a.dist.partial_cmp(&b.dist).unwrap());
    matches
}

/// Produces the pre-transposition "adjusted" 12-step OKLCH scale for seed
/// color `source` from `catalog`.
#[must_use]
pub fn synthesize(source: &Oklch, catalog: &TemplateCatalog) -> [Oklch; 12] {
    let mut closest = nearest_per_scale(source, catalog);

    // De-duplicate grays: if not everything matched is gray-like, but the
    // single nearest entry is, drop the other gray entries that follow it.
    let all_gray = closest.iter().all(|m| m.gray_like);
    if !all_gray && closest.first().map(|m| m.gray_like).unwrap_or(false) {
        let mut i = 1;
        while i < closest.len() && closest[i].gray_like {
            closest.remove(i);
        }
    }

    if closest.len() < 2 {
        return *closest[0].steps;
    }

    let a = &closest[0];
    let b = &closest[1];

    let dist_a = a.dist;
    let dist_b = b.dist;
    let c = a.nearest.delta_e(&b.nearest);

    let ratio = blend_ratio(dist_b, dist_a, c);
    let ratio = match ratio {
        Some(r) => r,
        None => return *a.steps,
    };

    let mut mixed = [Oklch::new(0.0, 0.0, 0.0); 12];
    for i in 0..12 {
        mixed[i] = mix(&a.steps[i], &b.steps[i], ratio);
    }

    let base = mixed
        .iter()
        .min_by(|x, y| source.delta_e(x).partial_cmp(&source.delta_e(y)).unwrap())
        .copied()
        .unwrap();

    let ratio_c = source.c / base.c.max(1e-3);

    let mut adjusted = [Oklch::new(0.0, 0.0, 0.0); 12];
    for i in 0..12 {
        let capped_c = (source.c * CHROMA_CAP_MULTIPLIER).min(mixed[i].c * ratio_c);
        adjusted[i] = Oklch { l: mixed[i].l, c: capped_c, h: source.h };
    }

    adjusted
}

/// Law-of-cosines blend ratio between scale `A` (closest, distance `b`) and
/// scale `B` (second-closest, distance `a`), with `c` the distance between
/// the two candidate colors themselves. Returns `None` on a degenerate
/// (zero-sine) triangle.
fn blend_ratio(a: f64, b: f64, c: f64) -> Option<f64> {
    let cos_alpha = ((b * b + c * c - a * a) / (2.0 * b * c)).clamp(-1.0, 1.0);
    let alpha = cos_alpha.acos();
    let sin_alpha = alpha.sin();

    let cos_beta = ((a * a + c * c - b * b) / (2.0 * a * c)).clamp(-1.0, 1.0);
    let beta = cos_beta.acos();
    let sin_beta = beta.sin();

    if sin_alpha == 0.0 || sin_beta == 0.0 {
        return None;
    }

    let tan_gamma_1 = cos_alpha / sin_alpha;
    let tan_gamma_2 = cos_beta / sin_beta;

    Some((tan_gamma_1 / tan_gamma_2).max(0.0) * BLEND_DAMPING)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{catalog_for, Appearance};

    #[test]
    fn synthesize_produces_twelve_steps_with_seed_hue() {
        let catalog = catalog_for(Appearance::Light);
        let source = Oklch::new(0.55, 0.18, 257.0);
        let adjusted = synthesize(&source, catalog);
        assert_eq!(adjusted.len(), 12);
        for step in &adjusted {
            assert_eq!(step.h, source.h);
        }
    }

    #[test]
    fn achromatic_seed_matches_gray_templates() {
        let catalog = catalog_for(Appearance::Light);
        let source = Oklch::new(0.55, 0.0, 0.0);
        let adjusted = synthesize(&source, catalog);
        for step in &adjusted {
            assert!(step.c < 1e-6);
        }
    }

    #[test]
    fn blend_ratio_is_none_for_collinear_triangle() {
        // a == b == c/2 makes a degenerate flat "triangle".
        assert!(blend_ratio(1.0, 1.0, 2.0).is_none());
    }

    #[test]
    fn blend_ratio_is_nonnegative() {
        let r = blend_ratio(4.0, 5.0, 6.0).unwrap();
        assert!(r >= 0.0);
    }
}
