//! Text-color selection on top of `momoto_metrics`'s Lc contrast metric.

use momoto_metrics::LcMetric;

use crate::oklch::{Hue, Oklch};

/// Contrast magnitude threshold for choosing pure white text.
const WHITE_TEXT_THRESHOLD: f64 = 40.0;
/// Dark-tinted fallback text's fixed lightness.
const FALLBACK_LIGHTNESS: f64 = 0.25;
/// Minimum chroma for the dark-tinted fallback.
const FALLBACK_MIN_CHROMA: f64 = 0.04;
/// Chroma taken as a fraction of the step-9 color's chroma.
const FALLBACK_CHROMA_RATIO: f64 = 0.08;

/// Chooses a foreground text color for solid step-9 color `g`.
///
/// White if it clears `±40` Lc against `g`; otherwise a dark, lightly
/// tinted color that borrows `g`'s hue.
#[must_use]
pub fn pick_text_color(g: &Oklch) -> Oklch {
    let white = Oklch::new(1.0, 0.0, 0.0);
    let lc = LcMetric::lc(&white.to_color(), &g.to_color());

    if lc.abs() >= WHITE_TEXT_THRESHOLD {
        white
    } else {
        let hue = match g.h {
            Hue::Defined(h) => h,
            Hue::Undefined => 0.0,
        };
        Oklch::new(
            FALLBACK_LIGHTNESS,
            (FALLBACK_CHROMA_RATIO * g.c).max(FALLBACK_MIN_CHROMA),
            hue,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn picks_white_on_dark_solid_color() {
        let dark_blue = Oklch::new(0.3, 0.15, 260.0);
        let text = pick_text_color(&dark_blue);
        assert_eq!(text.l, 1.0);
        assert_eq!(text.c, 0.0);
    }

    #[test]
    fn picks_dark_tint_on_light_solid_color() {
        let light_yellow = Oklch::new(0.9, 0.15, 100.0);
        let text = pick_text_color(&light_yellow);
        assert_eq!(text.l, FALLBACK_LIGHTNESS);
        assert!(text.c >= FALLBACK_MIN_CHROMA);
    }

    #[test]
    fn fallback_inherits_source_hue() {
        let light_green = Oklch::new(0.85, 0.2, 145.0);
        let text = pick_text_color(&light_green);
        if let Hue::Defined(h) = text.h {
            assert!((h - 145.0).abs() < 1e-9);
        } else {
            panic!("expected a defined hue");
        }
    }

    #[test]
    fn fallback_uses_zero_hue_for_achromatic_source() {
        let gray = Oklch::new(0.8, 0.0, 0.0);
        let text = pick_text_color(&gray);
        assert_eq!(text.l, FALLBACK_LIGHTNESS);
    }
}
