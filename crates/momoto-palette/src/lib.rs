//! # Momoto Palette
//!
//! Synthesizes a perceptually uniform, contextually aware 12-step color
//! scale — plus translucent alpha variants, a contrast-checked foreground,
//! and a surface tint — from three seed colors: an accent, a neutral/gray,
//! and a background.
//!
//! The pipeline is a chain of pure functions over OKLCH: template matching
//! ([`synth`]) and lightness transposition ([`transpose`]) produce a raw
//! 12-step scale, which [`postprocess`] then refines (pure white/black
//! substitution, the solid step-9 color, its hover derivative, and a
//! chroma cap), before [`alpha`] solves translucent variants against the
//! background. [`generate`] runs the whole chain.
//!
//! ```
//! use momoto_palette::{generate, Appearance};
//!
//! let palette = generate(Appearance::Light, "#3D63DD", "#8B8D98", "#FFFFFF").unwrap();
//! let map = palette.to_map();
//! assert_eq!(map["background"], vec!["#FFFFFF".to_string()]);
//! ```
//!
//! ## Feature flags
//!
//! - `serde`: derives `Serialize`/`Deserialize` on [`Palette`].
//! - `internals`: exposes algorithm constants and the raw template tables
//!   for debugging and education.

#![warn(missing_docs, missing_debug_implementations, rust_2018_idioms, unreachable_pub)]

mod alpha;
mod catalog;
mod contrast;
mod error;
mod oklch;
mod palette;
mod postprocess;
mod rgb;
mod synth;
mod transpose;

pub use alpha::AlphaColor;
pub use catalog::catalog_for;
pub use error::PaletteError;
pub use oklch::{mix, Hue, Oklch};
pub use palette::{color_to_hex_with_alpha, generate, Palette};
pub use rgb::Rgb;

/// Which appearance mode the caller's UI is rendering: `light` or `dark`.
///
/// Distinct template catalogs and lightness-transposition curves apply to
/// each.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Appearance {
    /// Light backgrounds, dark-on-light content.
    Light,
    /// Dark backgrounds, light-on-dark content.
    Dark,
}

/// A caller-supplied color: either an already-parsed RGB triple or a hex
/// string to parse at the API boundary.
///
/// Per the crate's design, this is the single conversion point between
/// "stringly typed" caller input and the typed pipeline everything else
/// runs on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    /// An already-typed color.
    Rgb(Rgb),
    /// A hex string, parsed via [`Rgb::from_hex`].
    Hex(String),
}

impl From<Rgb> for Input {
    fn from(rgb: Rgb) -> Self {
        Input::Rgb(rgb)
    }
}

impl From<&str> for Input {
    fn from(hex: &str) -> Self {
        Input::Hex(hex.to_string())
    }
}

impl From<String> for Input {
    fn from(hex: String) -> Self {
        Input::Hex(hex)
    }
}

impl TryFrom<Input> for Rgb {
    type Error = PaletteError;

    fn try_from(input: Input) -> Result<Self, Self::Error> {
        match input {
            Input::Rgb(rgb) => Ok(rgb),
            Input::Hex(text) => Rgb::from_hex(&text),
        }
    }
}

#[cfg(feature = "internals")]
/// Internal algorithm constants and template data, exposed for debugging
/// and education. Not part of the crate's stability guarantees.
pub mod internals {
    pub use crate::catalog::internals as templates;
    pub use crate::synth::{BLEND_DAMPING, CHROMA_CAP_MULTIPLIER};
    pub use crate::transpose::{Curve, DARK_CURVE, DARK_SOFTEN_MAX_RATIO, LIGHT_CURVE};
}
