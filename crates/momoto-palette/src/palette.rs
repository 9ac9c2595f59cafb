//! The orchestrator: wires C1–C9 together into [`generate`], and the
//! [`Palette`] result type.

use std::collections::BTreeMap;

use crate::alpha::{reverse_alpha, AlphaColor};
use crate::catalog::catalog_for;
use crate::error::PaletteError;
use crate::oklch::Oklch;
use crate::postprocess;
use crate::rgb::Rgb;
use crate::synth::synthesize;
use crate::transpose::transpose;
use crate::{Appearance, Input};

/// Surface alpha applied to accent step 1 for the light appearance.
const SURFACE_ALPHA_LIGHT: f64 = 0.8;
/// Surface alpha applied to accent step 1 for the dark appearance.
const SURFACE_ALPHA_DARK: f64 = 0.5;

/// A complete generated palette: two opaque 12-step scales, their
/// translucent counterparts, a contrast-checked foreground, a surface
/// tint, and the background echo.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Palette {
    /// The 12-step accent scale, opaque.
    pub accent_scale: [Rgb; 12],
    /// The accent scale's translucent counterpart.
    pub accent_scale_alpha: [AlphaColor; 12],
    /// The 12-step neutral/gray scale, opaque.
    pub gray_scale: [Rgb; 12],
    /// The gray scale's translucent counterpart.
    pub gray_scale_alpha: [AlphaColor; 12],
    /// Foreground text color chosen for legibility against `accent_scale[8]`.
    pub accent_contrast: Rgb,
    /// A translucent surface tint derived from accent step 1.
    pub accent_surface: AlphaColor,
    /// The background color echoed back for convenience.
    pub background: Rgb,
}

impl Palette {
    /// Flattens the palette into a stable, string-keyed map of `#RRGGBB`
    /// hex colors. Scale entries hold all 12 steps; `accentContrast`,
    /// `accentSurface`, and `background` hold a single color.
    #[must_use]
    pub fn to_map(&self) -> BTreeMap<&'static str, Vec<String>> {
        let mut map = BTreeMap::new();
        map.insert("accentScale", hex_list(&self.accent_scale));
        map.insert("accentScaleAlpha", hex_list(&self.accent_scale_alpha.map(|a| a.rgb)));
        map.insert("grayScale", hex_list(&self.gray_scale));
        map.insert("grayScaleAlpha", hex_list(&self.gray_scale_alpha.map(|a| a.rgb)));
        map.insert("accentContrast", vec![self.accent_contrast.to_hex()]);
        map.insert("accentSurface", vec![self.accent_surface.rgb.to_hex()]);
        map.insert("background", vec![self.background.to_hex()]);
        map
    }
}

fn hex_list(scale: &[Rgb; 12]) -> Vec<String> {
    scale.iter().map(|c| c.to_hex()).collect()
}

/// Emits `#RRGGBBAA` for an [`AlphaColor`].
#[must_use]
pub fn color_to_hex_with_alpha(color: AlphaColor) -> String {
    color.rgb.to_hex_with_alpha(color.alpha)
}

fn resolve(input: impl Into<Input>) -> Result<Rgb, PaletteError> {
    Rgb::try_from(input.into())
}

/// Generates a complete [`Palette`] from three seed colors.
///
/// `accent`, `gray`, and `background` each accept anything convertible
/// into [`Input`] — a parsed [`Rgb`] or a hex string.
pub fn generate(
    appearance: Appearance,
    accent: impl Into<Input>,
    gray: impl Into<Input>,
    background: impl Into<Input>,
) -> Result<Palette, PaletteError> {
    let accent_rgb = resolve(accent)?;
    let gray_rgb = resolve(gray)?;
    let background_rgb = resolve(background)?;

    let accent_seed = Oklch::from_color(&momoto_core::color::Color::from_srgb8(
        accent_rgb.r,
        accent_rgb.g,
        accent_rgb.b,
    ));
    let gray_seed = Oklch::from_color(&momoto_core::color::Color::from_srgb8(
        gray_rgb.r,
        gray_rgb.g,
        gray_rgb.b,
    ));
    let background_oklch = Oklch::from_color(&momoto_core::color::Color::from_srgb8(
        background_rgb.r,
        background_rgb.g,
        background_rgb.b,
    ));

    let catalog = catalog_for(appearance);

    let accent_adjusted = synthesize(&accent_seed, catalog);
    let gray_adjusted = synthesize(&gray_seed, catalog);

    let mut accent_scale = transpose(&accent_adjusted, background_oklch);
    let gray_scale = transpose(&gray_adjusted, background_oklch);

    accent_scale = postprocess::substitute_pure_accent(accent_rgb, accent_scale, gray_scale);

    let (step9, accent_contrast_oklch) = postprocess::apply_step9(accent_seed, &mut accent_scale);
    postprocess::apply_hover(step9, &mut accent_scale);
    postprocess::apply_chroma_cap(&mut accent_scale);

    let accent_contrast = {
        let [r, g, b] = accent_contrast_oklch.to_color().to_srgb8();
        Rgb::new(r, g, b)
    };

    let accent_scale_alpha = accent_scale.map(|c| reverse_alpha(c, background_rgb, None));
    let gray_scale_alpha = gray_scale.map(|c| reverse_alpha(c, background_rgb, None));

    let surface_alpha = if appearance == Appearance::Light {
        SURFACE_ALPHA_LIGHT
    } else {
        SURFACE_ALPHA_DARK
    };
    let accent_surface = reverse_alpha(accent_scale[1], background_rgb, Some(surface_alpha));

    Ok(Palette {
        accent_scale,
        accent_scale_alpha,
        gray_scale,
        gray_scale_alpha,
        accent_contrast,
        accent_surface,
        background: background_rgb,
    })
}
