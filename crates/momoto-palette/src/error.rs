//! Error types returned at the public API boundary.

use core::fmt;

/// Failure modes for palette generation.
///
/// Every failure is validated once, at the API boundary; once a `generate`
/// call has accepted its inputs, every intermediate value is known-finite.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PaletteError {
    /// A hex color string had the wrong length or contained a non-hex digit.
    InvalidHex {
        /// The offending input string.
        input: String,
        /// Human-readable reason the string was rejected.
        reason: String,
    },
    /// A `color(display-p3 r g b)` token failed to parse.
    ///
    /// This can only happen during template-catalog construction from a
    /// corrupted built-in table, never from caller input.
    InvalidP3Token {
        /// The offending token.
        input: String,
    },
}

impl fmt::Display for PaletteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PaletteError::InvalidHex { input, reason } => {
                write!(f, "invalid hex color '{input}': {reason}")
            }
            PaletteError::InvalidP3Token { input } => {
                write!(f, "invalid display-p3 token '{input}'")
            }
        }
    }
}

impl std::error::Error for PaletteError {}
