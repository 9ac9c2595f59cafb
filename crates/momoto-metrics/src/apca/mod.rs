//! Perceptual contrast (Lc) between a text color and a background.
//!
//! This is a simplified, self-contained luminance-contrast formula in the
//! spirit of APCA: raw sRGB channels are raised directly to a fixed gamma
//! (no piecewise linear segment), weighted, soft-clamped near black, and
//! compared with separate exponent pairs depending on polarity. It is not
//! a drop-in replacement for the full APCA-W3 algorithm and should not be
//! used to claim APCA compliance.

use momoto_core::color::Color;
use momoto_core::perception::{ContrastMetric, PerceptualResult, Polarity};

/// Contrast algorithm constants, exposed for debugging and education.
///
/// # Feature Flag
///
/// Requires `internals` feature:
/// ```toml
/// momoto-metrics = { version = "7.0", features = ["internals"] }
/// ```
#[cfg(feature = "internals")]
pub mod constants {
    //! Luminance and contrast constants used by [`super::LcMetric`].

    /// Gamma applied directly to raw sRGB channels (no linear segment).
    pub const GAMMA: f64 = 2.4;

    /// Channel weights for the luminance sum.
    pub const R_CO: f64 = 0.2126;
    pub const G_CO: f64 = 0.7152;
    pub const B_CO: f64 = 0.0722;

    /// Soft clamp threshold and exponent for near-black luminance.
    pub const BLACK_THRESHOLD: f64 = 0.022;
    pub const BLACK_EXPONENT: f64 = 1.414;
    /// Scale of the soft clamp nudge — deliberately tiny.
    pub const BLACK_NUDGE: f64 = 1e-9;

    /// Normal-polarity (dark text on light background) exponents.
    pub const NORMAL_BG: f64 = 0.56;
    pub const NORMAL_TEXT: f64 = 0.57;

    /// Reverse-polarity (light text on dark background) exponents.
    pub const REVERSE_BG: f64 = 0.62;
    pub const REVERSE_TEXT: f64 = 0.65;

    /// Raw-value deadband below which contrast is reported as zero.
    pub const DEADBAND: f64 = 0.1;
    /// Flat offset applied after scaling to the 0-100 range.
    pub const OFFSET: f64 = 2.7;
}

const GAMMA: f64 = 2.4;
const R_CO: f64 = 0.2126;
const G_CO: f64 = 0.7152;
const B_CO: f64 = 0.0722;
const BLACK_THRESHOLD: f64 = 0.022;
const BLACK_EXPONENT: f64 = 1.414;
const BLACK_NUDGE: f64 = 1e-9;
const NORMAL_BG: f64 = 0.56;
const NORMAL_TEXT: f64 = 0.57;
const REVERSE_BG: f64 = 0.62;
const REVERSE_TEXT: f64 = 0.65;
const DEADBAND: f64 = 0.1;
const OFFSET: f64 = 2.7;

/// Perceptual contrast metric between a text/foreground color and a background.
///
/// Returns a signed Lc value:
/// - Positive: dark text on a light background
/// - Negative: light text on a dark background
/// - Zero: contrast falls inside the deadband
#[derive(Debug, Clone, Copy, Default)]
pub struct LcMetric;

impl LcMetric {
    /// Creates a new metric instance.
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    #[inline]
    fn luminance(color: &Color) -> f64 {
        let [r, g, b] = color.srgb;
        let y = R_CO * r.powf(GAMMA) + G_CO * g.powf(GAMMA) + B_CO * b.powf(GAMMA);
        if y < BLACK_THRESHOLD {
            y + (BLACK_THRESHOLD - y).powf(BLACK_EXPONENT) * BLACK_NUDGE
        } else {
            y
        }
    }

    /// Computes the signed Lc contrast value between `text` and `background`.
    pub fn lc(text: &Color, background: &Color) -> f64 {
        let text_y = Self::luminance(text);
        let back_y = Self::luminance(background);

        if back_y > text_y {
            let raw = back_y.powf(NORMAL_BG) - text_y.powf(NORMAL_TEXT);
            if raw < DEADBAND {
                0.0
            } else {
                raw * 100.0 - OFFSET
            }
        } else {
            let raw = back_y.powf(REVERSE_BG) - text_y.powf(REVERSE_TEXT);
            if raw.abs() < DEADBAND {
                0.0
            } else {
                -raw.abs() * 100.0 + OFFSET
            }
        }
    }
}

impl ContrastMetric for LcMetric {
    fn evaluate(&self, foreground: Color, background: Color) -> PerceptualResult {
        let lc = Self::lc(&foreground, &background);
        let polarity = if lc > 0.0 {
            Polarity::DarkOnLight
        } else if lc < 0.0 {
            Polarity::LightOnDark
        } else {
            Polarity::DarkOnLight
        };
        PerceptualResult::with_polarity(lc, polarity)
    }

    fn name(&self) -> &'static str {
        "Lc"
    }

    fn version(&self) -> &'static str {
        "1.0.0"
    }
}
