//! The built-in template catalog: a fixed set of hand-tuned 12-step scales,
//! partitioned by appearance, that the synthesizer searches for the nearest
//! neighbors to a caller's seed color.
//!
//! Templates are authored as `color(display-p3 …)` tokens — the format a
//! design tool would export — and converted to OKLCH lazily, once, behind a
//! [`std::sync::OnceLock`]. The conversion is pure and the catalog never
//! changes at runtime, so a shared, process-wide cache is safe without any
//! locking on the read path.

use std::sync::OnceLock;

use momoto_core::color::Color;

use crate::oklch::Oklch;
use crate::rgb::parse_p3_token;
use crate::Appearance;

/// One named 12-step scale, pre-converted to OKLCH.
#[derive(Debug, Clone)]
pub struct TemplateScale {
    /// Scale name, for diagnostics only.
    pub name: &'static str,
    /// The 12 steps, lightest-adjacent ordering matching the appearance.
    pub steps: [Oklch; 12],
    /// True if this scale is a neutral (near-zero chroma throughout).
    pub gray_like: bool,
}

/// All templates for one appearance.
#[derive(Debug, Clone)]
pub struct TemplateCatalog {
    /// Every template, chromatic and gray-like alike.
    pub scales: Vec<TemplateScale>,
}

impl TemplateCatalog {
    /// Returns only the gray-like subset, used when matching a seed's
    /// neutral/gray component rather than its accent component.
    #[must_use]
    pub fn gray_like(&self) -> impl Iterator<Item = &TemplateScale> {
        self.scales.iter().filter(|s| s.gray_like)
    }

    /// Returns only the chromatic subset.
    #[must_use]
    pub fn chromatic(&self) -> impl Iterator<Item = &TemplateScale> {
        self.scales.iter().filter(|s| !s.gray_like)
    }
}

fn decode(tokens: &[&str; 12], name: &'static str, gray_like: bool) -> TemplateScale {
    let mut steps = [Oklch::new(0.0, 0.0, 0.0); 12];
    for (i, token) in tokens.iter().enumerate() {
        let rgb = parse_p3_token(token)
            .unwrap_or_else(|e| panic!("built-in template '{name}' step {i} is corrupt: {e}"));
        let color = Color::from_srgb8(rgb.r, rgb.g, rgb.b);
        steps[i] = Oklch::from_color(&color);
    }
    TemplateScale { name, steps, gray_like }
}

// Step 0 is the subtlest background tint; step 11 is the strongest/darkest
// accent step. Each array holds 12 `color(display-p3 r g b)` tokens.

const RED_LIGHT: [&str; 12] = [
    "color(display-p3 0.992 0.988 0.988)",
    "color(display-p3 0.973 0.969 0.969)",
    "color(display-p3 0.945 0.937 0.933)",
    "color(display-p3 0.914 0.890 0.886)",
    "color(display-p3 0.882 0.827 0.820)",
    "color(display-p3 0.839 0.741 0.722)",
    "color(display-p3 0.800 0.635 0.600)",
    "color(display-p3 0.769 0.522 0.471)",
    "color(display-p3 0.722 0.384 0.318)",
    "color(display-p3 0.647 0.337 0.275)",
    "color(display-p3 0.545 0.306 0.255)",
    "color(display-p3 0.220 0.188 0.180)",
];

const ORANGE_LIGHT: [&str; 12] = [
    "color(display-p3 0.992 0.988 0.988)",
    "color(display-p3 0.973 0.969 0.969)",
    "color(display-p3 0.945 0.941 0.933)",
    "color(display-p3 0.914 0.902 0.886)",
    "color(display-p3 0.882 0.855 0.820)",
    "color(display-p3 0.839 0.788 0.722)",
    "color(display-p3 0.800 0.718 0.600)",
    "color(display-p3 0.769 0.643 0.471)",
    "color(display-p3 0.722 0.553 0.318)",
    "color(display-p3 0.647 0.490 0.275)",
    "color(display-p3 0.545 0.424 0.255)",
    "color(display-p3 0.220 0.204 0.180)",
];

const GREEN_LIGHT: [&str; 12] = [
    "color(display-p3 0.988 0.992 0.988)",
    "color(display-p3 0.969 0.973 0.969)",
    "color(display-p3 0.933 0.945 0.937)",
    "color(display-p3 0.886 0.914 0.898)",
    "color(display-p3 0.820 0.882 0.843)",
    "color(display-p3 0.722 0.839 0.769)",
    "color(display-p3 0.600 0.800 0.682)",
    "color(display-p3 0.471 0.769 0.596)",
    "color(display-p3 0.318 0.722 0.486)",
    "color(display-p3 0.275 0.647 0.427)",
    "color(display-p3 0.255 0.545 0.376)",
    "color(display-p3 0.180 0.220 0.196)",
];

const BLUE_LIGHT: [&str; 12] = [
    "color(display-p3 0.988 0.988 0.992)",
    "color(display-p3 0.969 0.969 0.973)",
    "color(display-p3 0.933 0.937 0.945)",
    "color(display-p3 0.886 0.894 0.914)",
    "color(display-p3 0.820 0.839 0.882)",
    "color(display-p3 0.722 0.761 0.839)",
    "color(display-p3 0.600 0.667 0.800)",
    "color(display-p3 0.471 0.573 0.769)",
    "color(display-p3 0.318 0.451 0.722)",
    "color(display-p3 0.275 0.396 0.647)",
    "color(display-p3 0.255 0.353 0.545)",
    "color(display-p3 0.180 0.192 0.220)",
];

const PURPLE_LIGHT: [&str; 12] = [
    "color(display-p3 0.988 0.988 0.992)",
    "color(display-p3 0.973 0.969 0.973)",
    "color(display-p3 0.941 0.933 0.945)",
    "color(display-p3 0.906 0.886 0.914)",
    "color(display-p3 0.859 0.820 0.882)",
    "color(display-p3 0.800 0.722 0.839)",
    "color(display-p3 0.733 0.600 0.800)",
    "color(display-p3 0.671 0.471 0.769)",
    "color(display-p3 0.588 0.318 0.722)",
    "color(display-p3 0.522 0.275 0.647)",
    "color(display-p3 0.447 0.255 0.545)",
    "color(display-p3 0.208 0.180 0.220)",
];

const GRAY_LIGHT: [&str; 12] = [
    "color(display-p3 0.988 0.988 0.988)",
    "color(display-p3 0.969 0.969 0.969)",
    "color(display-p3 0.941 0.941 0.941)",
    "color(display-p3 0.910 0.910 0.910)",
    "color(display-p3 0.878 0.878 0.878)",
    "color(display-p3 0.831 0.831 0.831)",
    "color(display-p3 0.761 0.761 0.761)",
    "color(display-p3 0.678 0.678 0.678)",
    "color(display-p3 0.580 0.580 0.580)",
    "color(display-p3 0.522 0.522 0.522)",
    "color(display-p3 0.451 0.451 0.451)",
    "color(display-p3 0.149 0.149 0.149)",
];

const RED_DARK: [&str; 12] = [
    "color(display-p3 0.173 0.149 0.145)",
    "color(display-p3 0.220 0.173 0.161)",
    "color(display-p3 0.278 0.196 0.180)",
    "color(display-p3 0.357 0.231 0.204)",
    "color(display-p3 0.451 0.267 0.227)",
    "color(display-p3 0.584 0.310 0.255)",
    "color(display-p3 0.710 0.361 0.290)",
    "color(display-p3 0.749 0.467 0.412)",
    "color(display-p3 0.769 0.522 0.471)",
    "color(display-p3 0.796 0.604 0.565)",
    "color(display-p3 0.831 0.745 0.725)",
    "color(display-p3 0.953 0.949 0.949)",
];

const ORANGE_DARK: [&str; 12] = [
    "color(display-p3 0.173 0.161 0.145)",
    "color(display-p3 0.220 0.196 0.161)",
    "color(display-p3 0.278 0.239 0.180)",
    "color(display-p3 0.357 0.294 0.204)",
    "color(display-p3 0.451 0.357 0.227)",
    "color(display-p3 0.584 0.447 0.255)",
    "color(display-p3 0.710 0.533 0.290)",
    "color(display-p3 0.749 0.608 0.412)",
    "color(display-p3 0.769 0.643 0.471)",
    "color(display-p3 0.796 0.698 0.565)",
    "color(display-p3 0.831 0.788 0.725)",
    "color(display-p3 0.953 0.949 0.949)",
];

const GREEN_DARK: [&str; 12] = [
    "color(display-p3 0.145 0.173 0.157)",
    "color(display-p3 0.161 0.220 0.184)",
    "color(display-p3 0.180 0.278 0.224)",
    "color(display-p3 0.204 0.357 0.267)",
    "color(display-p3 0.227 0.451 0.322)",
    "color(display-p3 0.255 0.584 0.392)",
    "color(display-p3 0.290 0.710 0.467)",
    "color(display-p3 0.412 0.749 0.553)",
    "color(display-p3 0.471 0.769 0.596)",
    "color(display-p3 0.565 0.796 0.663)",
    "color(display-p3 0.725 0.831 0.773)",
    "color(display-p3 0.949 0.953 0.949)",
];

const BLUE_DARK: [&str; 12] = [
    "color(display-p3 0.145 0.157 0.173)",
    "color(display-p3 0.161 0.180 0.220)",
    "color(display-p3 0.180 0.216 0.278)",
    "color(display-p3 0.204 0.255 0.357)",
    "color(display-p3 0.227 0.302 0.451)",
    "color(display-p3 0.255 0.365 0.584)",
    "color(display-p3 0.290 0.431 0.710)",
    "color(display-p3 0.412 0.522 0.749)",
    "color(display-p3 0.471 0.573 0.769)",
    "color(display-p3 0.565 0.643 0.796)",
    "color(display-p3 0.725 0.761 0.831)",
    "color(display-p3 0.949 0.949 0.953)",
];

const PURPLE_DARK: [&str; 12] = [
    "color(display-p3 0.165 0.145 0.173)",
    "color(display-p3 0.200 0.161 0.220)",
    "color(display-p3 0.247 0.180 0.278)",
    "color(display-p3 0.306 0.204 0.357)",
    "color(display-p3 0.376 0.227 0.451)",
    "color(display-p3 0.475 0.255 0.584)",
    "color(display-p3 0.569 0.290 0.710)",
    "color(display-p3 0.635 0.412 0.749)",
    "color(display-p3 0.671 0.471 0.769)",
    "color(display-p3 0.718 0.565 0.796)",
    "color(display-p3 0.796 0.725 0.831)",
    "color(display-p3 0.949 0.949 0.953)",
];

const GRAY_DARK: [&str; 12] = [
    "color(display-p3 0.129 0.129 0.129)",
    "color(display-p3 0.161 0.161 0.161)",
    "color(display-p3 0.200 0.200 0.200)",
    "color(display-p3 0.251 0.251 0.251)",
    "color(display-p3 0.298 0.298 0.298)",
    "color(display-p3 0.369 0.369 0.369)",
    "color(display-p3 0.451 0.451 0.451)",
    "color(display-p3 0.529 0.529 0.529)",
    "color(display-p3 0.600 0.600 0.600)",
    "color(display-p3 0.678 0.678 0.678)",
    "color(display-p3 0.800 0.800 0.800)",
    "color(display-p3 0.969 0.969 0.969)",
];

fn build_light() -> TemplateCatalog {
    TemplateCatalog {
        scales: vec![
            decode(&RED_LIGHT, "red", false),
            decode(&ORANGE_LIGHT, "orange", false),
            decode(&GREEN_LIGHT, "green", false),
            decode(&BLUE_LIGHT, "blue", false),
            decode(&PURPLE_LIGHT, "purple", false),
            decode(&GRAY_LIGHT, "gray", true),
        ],
    }
}

fn build_dark() -> TemplateCatalog {
    TemplateCatalog {
        scales: vec![
            decode(&RED_DARK, "red", false),
            decode(&ORANGE_DARK, "orange", false),
            decode(&GREEN_DARK, "green", false),
            decode(&BLUE_DARK, "blue", false),
            decode(&PURPLE_DARK, "purple", false),
            decode(&GRAY_DARK, "gray", true),
        ],
    }
}

static LIGHT_CATALOG: OnceLock<TemplateCatalog> = OnceLock::new();
static DARK_CATALOG: OnceLock<TemplateCatalog> = OnceLock::new();

/// Returns the shared, lazily-converted catalog for an appearance.
pub fn catalog_for(appearance: Appearance) -> &'static TemplateCatalog {
    match appearance {
        Appearance::Light => LIGHT_CATALOG.get_or_init(build_light),
        Appearance::Dark => DARK_CATALOG.get_or_init(build_dark),
    }
}

#[cfg(feature = "internals")]
/// Raw P3 token tables, exposed for inspection/debugging.
pub mod internals {
    pub use super::{
        BLUE_DARK, BLUE_LIGHT, GRAY_DARK, GRAY_LIGHT, GREEN_DARK, GREEN_LIGHT, ORANGE_DARK,
        ORANGE_LIGHT, PURPLE_DARK, PURPLE_LIGHT, RED_DARK, RED_LIGHT,
    };
}
