//! 8-bit sRGB triples and their text encodings.

use crate::error::PaletteError;

/// An 8-bit sRGB color, with optional alpha.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rgb {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
}

impl Rgb {
    /// Creates a new opaque RGB color.
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parses `#RGB`, `#RRGGBB`, or `#RRGGBBAA` (the leading `#` is optional,
    /// matching is case-insensitive, and alpha — if present — is discarded).
    ///
    /// Short (3-digit) forms expand by doubling each nibble: `#abc` → `#aabbcc`.
    pub fn from_hex(text: &str) -> Result<Self, PaletteError> {
        let stripped = text.strip_prefix('#').unwrap_or(text);

        let expanded = match stripped.len() {
            3 => stripped
                .chars()
                .flat_map(|c| [c, c])
                .collect::<String>(),
            6 | 8 => stripped.to_string(),
            _ => {
                return Err(PaletteError::InvalidHex {
                    input: text.to_string(),
                    reason: format!(
                        "expected 3, 6, or 8 hex digits, got {}",
                        stripped.len()
                    ),
                })
            }
        };

        let channel = |slice: &str| -> Result<u8, PaletteError> {
            u8::from_str_radix(slice, 16).map_err(|_| PaletteError::InvalidHex {
                input: text.to_string(),
                reason: format!("'{slice}' is not a hex byte"),
            })
        };

        let r = channel(&expanded[0..2])?;
        let g = channel(&expanded[2..4])?;
        let b = channel(&expanded[4..6])?;

        Ok(Self { r, g, b })
    }

    /// Emits an uppercase `#RRGGBB` string.
    #[must_use]
    pub fn to_hex(self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }

    /// Emits an uppercase `#RRGGBBAA` string for the given alpha in `[0, 1]`.
    #[must_use]
    pub fn to_hex_with_alpha(self, alpha: f64) -> String {
        let a = (alpha.clamp(0.0, 1.0) * 255.0).round() as u8;
        format!("#{:02X}{:02X}{:02X}{:02X}", self.r, self.g, self.b, a)
    }

    /// Returns true if this color's canonical hex is `000000` or `FFFFFF`
    /// (pure black or pure white, including the 3-digit spellings).
    #[must_use]
    pub fn is_pure_black_or_white(self) -> bool {
        matches!((self.r, self.g, self.b), (0, 0, 0) | (255, 255, 255))
    }
}

/// Parses a CSS Color 4 `color(display-p3 r g b)` token.
///
/// Each component matches `[0-9]*\.?[0-9]+`, is multiplied by 255, rounded
/// to the nearest integer, and clamped to `0..255`. The result is treated
/// directly as sRGB — this intentionally skips P3→sRGB gamut mapping, since
/// the built-in template tables were authored to survive it.
pub(crate) fn parse_p3_token(text: &str) -> Result<Rgb, PaletteError> {
    let inner = text
        .trim()
        .strip_prefix("color(display-p3")
        .and_then(|rest| rest.trim_end().strip_suffix(')'))
        .ok_or_else(|| PaletteError::InvalidP3Token {
            input: text.to_string(),
        })?;

    let mut components = inner.split_whitespace();
    let mut next = || -> Result<f64, PaletteError> {
        components
            .next()
            .ok_or_else(|| PaletteError::InvalidP3Token {
                input: text.to_string(),
            })
            .and_then(|s| {
                s.parse::<f64>().map_err(|_| PaletteError::InvalidP3Token {
                    input: text.to_string(),
                })
            })
    };

    let r = next()?;
    let g = next()?;
    let b = next()?;

    if components.next().is_some() {
        return Err(PaletteError::InvalidP3Token {
            input: text.to_string(),
        });
    }

    let to_byte = |c: f64| -> u8 { (c * 255.0).round().clamp(0.0, 255.0) as u8 };

    Ok(Rgb::new(to_byte(r), to_byte(g), to_byte(b)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_six_digit_with_hash() {
        assert_eq!(Rgb::from_hex("#3D63DD").unwrap(), Rgb::new(0x3D, 0x63, 0xDD));
    }

    #[test]
    fn parses_six_digit_without_hash() {
        assert_eq!(Rgb::from_hex("3D63DD").unwrap(), Rgb::new(0x3D, 0x63, 0xDD));
    }

    #[test]
    fn parses_three_digit_short_form() {
        assert_eq!(Rgb::from_hex("#abc").unwrap(), Rgb::new(0xAA, 0xBB, 0xCC));
    }

    #[test]
    fn parses_eight_digit_discarding_alpha() {
        assert_eq!(Rgb::from_hex("#3D63DDFF").unwrap(), Rgb::new(0x3D, 0x63, 0xDD));
    }

    #[test]
    fn rejects_bad_lengths() {
        assert!(Rgb::from_hex("#ABCD").is_err());
        assert!(Rgb::from_hex("").is_err());
    }

    #[test]
    fn rejects_non_hex_digits() {
        assert!(Rgb::from_hex("#GGGGGG").is_err());
    }

    #[test]
    fn to_hex_roundtrip() {
        let rgb = Rgb::new(61, 99, 221);
        assert_eq!(Rgb::from_hex(&rgb.to_hex()).unwrap(), rgb);
    }

    #[test]
    fn detects_pure_black_and_white() {
        assert!(Rgb::new(0, 0, 0).is_pure_black_or_white());
        assert!(Rgb::new(255, 255, 255).is_pure_black_or_white());
        assert!(!Rgb::new(1, 0, 0).is_pure_black_or_white());
    }

    #[test]
    fn parses_p3_token() {
        let rgb = parse_p3_token("color(display-p3 1 0.5 0)").unwrap();
        assert_eq!(rgb, Rgb::new(255, 128, 0));
    }

    #[test]
    fn rejects_malformed_p3_token() {
        assert!(parse_p3_token("display-p3 1 0 0)").is_err());
        assert!(parse_p3_token("color(display-p3 1 0)").is_err());
    }
}
