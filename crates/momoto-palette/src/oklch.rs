//! A polar OKLCH color with an explicit, tagged hue.
//!
//! `momoto_core::space::oklch::OKLCH` always carries a normalized numeric
//! hue, which is the right default for a general-purpose color type but
//! cannot represent "this color is perfectly gray, its hue is meaningless."
//! Near-zero chroma makes the angle numerically unstable and semantically
//! empty, so this module keeps the hue as a tagged value instead of folding
//! it into the float.

use momoto_core::color::Color;
use momoto_core::space::oklch::OKLab;

/// The chroma below which a hue angle is considered meaningless.
const ACHROMATIC_THRESHOLD: f64 = 1e-9;

/// A hue angle that may be undefined (for achromatic colors).
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Hue {
    /// A well-defined hue angle in degrees, normalized to `[0, 360)`.
    Defined(f64),
    /// No meaningful hue — the color is (numerically) gray.
    Undefined,
}

impl Hue {
    /// Returns the angle in degrees, or `0.0` for an undefined hue.
    #[must_use]
    pub fn degrees(self) -> f64 {
        match self {
            Hue::Defined(h) => h,
            Hue::Undefined => 0.0,
        }
    }

    /// True if this hue carries an angle.
    #[must_use]
    pub fn is_defined(self) -> bool {
        matches!(self, Hue::Defined(_))
    }

    fn new(degrees: f64) -> Self {
        Hue::Defined(normalize_degrees(degrees))
    }
}

fn normalize_degrees(h: f64) -> f64 {
    let wrapped = h % 360.0;
    if wrapped < 0.0 {
        wrapped + 360.0
    } else {
        wrapped
    }
}

/// A color in the OKLCH cylindrical space, with an explicit hue tag.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Oklch {
    /// Lightness, `0.0` (black) to `1.0` (white).
    pub l: f64,
    /// Chroma, `0.0` (gray) upward.
    pub c: f64,
    /// Hue, or `Hue::Undefined` when chroma is negligible.
    pub h: Hue,
}

impl Oklch {
    /// Builds an `Oklch` directly, normalizing the hue and tagging it
    /// undefined when `c` is below [`ACHROMATIC_THRESHOLD`].
    #[must_use]
    pub fn new(l: f64, c: f64, h: f64) -> Self {
        let h = if c < ACHROMATIC_THRESHOLD {
            Hue::Undefined
        } else {
            Hue::new(h)
        };
        Self { l, c, h }
    }

    /// Converts an sRGB color to OKLCH via the shared OKLab matrices.
    #[must_use]
    pub fn from_color(color: &Color) -> Self {
        let lab = OKLab::from_color(color);
        let c = (lab.a * lab.a + lab.b * lab.b).sqrt();

        let h = if c < ACHROMATIC_THRESHOLD {
            Hue::Undefined
        } else {
            Hue::new(lab.b.atan2(lab.a).to_degrees())
        };

        Self { l: lab.l, c, h }
    }

    /// Converts back to sRGB. An undefined hue contributes no chroma axis.
    #[must_use]
    pub fn to_color(&self) -> Color {
        let h_rad = self.h.degrees().to_radians();
        let lab = OKLab::new(self.l, self.c * h_rad.cos(), self.c * h_rad.sin());
        lab.to_color()
    }

    /// Perceptual distance between two OKLCH colors (`ΔE_OK`).
    ///
    /// Lightness and chroma contribute directly; hue contributes through
    /// its chord length on the chroma circle, `2·sqrt(c1·c2)·sin(Δh/2)`.
    /// Hue difference is zero whenever either color is achromatic.
    #[must_use]
    pub fn delta_e(&self, other: &Self) -> f64 {
        let dl = self.l - other.l;
        let dc = self.c - other.c;

        let dh_cart = match (self.h, other.h) {
            (Hue::Defined(h1), Hue::Defined(h2)) => {
                let mut dh = h2 - h1;
                dh = ((dh + 180.0).rem_euclid(360.0)) - 180.0;
                2.0 * (self.c * other.c).sqrt() * (dh.to_radians() / 2.0).sin()
            }
            _ => 0.0,
        };

        (dl * dl + dc * dc + dh_cart * dh_cart).sqrt()
    }

    /// True when two colors are within `threshold` of each other in `ΔE_OK`.
    #[must_use]
    pub fn is_similar_to(&self, other: &Self, threshold: f64) -> bool {
        self.delta_e(other) < threshold
    }
}

/// Blends two OKLCH colors at `t ∈ [0, 1]`, taking the shortest arc around
/// the hue circle.
///
/// If exactly one side is achromatic, its hue is treated as matching the
/// other side's (no rotation is introduced by a meaningless angle). If both
/// are achromatic the result is achromatic too.
#[must_use]
pub fn mix(a: &Oklch, b: &Oklch, t: f64) -> Oklch {
    let l = a.l + (b.l - a.l) * t;
    let c = a.c + (b.c - a.c) * t;

    let h = match (a.h, b.h) {
        (Hue::Defined(h1), Hue::Defined(h2)) => {
            let mut diff = h2 - h1;
            diff = ((diff + 180.0).rem_euclid(360.0)) - 180.0;
            Hue::new(h1 + diff * t)
        }
        (Hue::Defined(h1), Hue::Undefined) => Hue::new(h1),
        (Hue::Undefined, Hue::Defined(h2)) => Hue::new(h2),
        (Hue::Undefined, Hue::Undefined) => Hue::Undefined,
    };

    if c < ACHROMATIC_THRESHOLD {
        Oklch { l, c, h: Hue::Undefined }
    } else {
        Oklch { l, c, h }
    }
}
