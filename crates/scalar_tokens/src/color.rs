//! Hex color parsing and translucent color strings

use std::fmt::{Display, Formatter};

use crate::error::TokenError;

/// An sRGB color with 8-bit channels and an unclamped alpha
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f64,
}

impl Rgba {
    pub const fn new(r: u8, g: u8, b: u8, a: f64) -> Self {
        Self { r, g, b, a }
    }

    /// Parse a `#RRGGBB` string. Digits may be upper or lower case.
    pub fn from_hex(hex: &str, alpha: f64) -> Result<Self, TokenError> {
        let invalid = || TokenError::InvalidHexFormat(hex.to_string());

        let digits = hex.strip_prefix('#').ok_or_else(invalid)?;
        if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(invalid());
        }

        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&digits[range], 16).map_err(|_| invalid())
        };

        Ok(Self {
            r: channel(0..2)?,
            g: channel(2..4)?,
            b: channel(4..6)?,
            a: alpha,
        })
    }
}

impl Display for Rgba {
    /// CSS `rgba(r, g, b, a)` with the alpha in its shortest decimal form
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
    }
}

/// Convert a `#RRGGBB` color and an opacity into an `rgba(...)` string.
///
/// `alpha` is written out as given; values outside `0.0..=1.0` are not clamped.
///
/// ```
/// assert_eq!(
///     scalar_tokens::hex_to_rgba("#037DE8", 0.5).unwrap(),
///     "rgba(3, 125, 232, 0.5)"
/// );
/// ```
pub fn hex_to_rgba(hex: &str, alpha: f64) -> Result<String, TokenError> {
    Rgba::from_hex(hex, alpha).map(|c| c.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn converts_brand_blue() {
        assert_eq!(hex_to_rgba("#037DE8", 0.5).unwrap(), "rgba(3, 125, 232, 0.5)");
    }

    #[test]
    fn lower_case_digits() {
        assert_eq!(hex_to_rgba("#ffffff", 0.7).unwrap(), "rgba(255, 255, 255, 0.7)");
    }

    #[test]
    fn alpha_is_not_clamped() {
        assert_eq!(hex_to_rgba("#000000", 1.5).unwrap(), "rgba(0, 0, 0, 1.5)");
        assert_eq!(hex_to_rgba("#000000", -0.25).unwrap(), "rgba(0, 0, 0, -0.25)");
        assert_eq!(hex_to_rgba("#000000", 1.0).unwrap(), "rgba(0, 0, 0, 1)");
    }

    #[test]
    fn rejects_malformed_hex() {
        for bad in ["037DE8", "#037DE", "#037DE80", "#03ZDE8", "", "#", "#+37DE8"] {
            assert_eq!(
                hex_to_rgba(bad, 0.5),
                Err(TokenError::InvalidHexFormat(bad.to_string())),
                "input {bad:?}"
            );
        }
    }

    #[test]
    fn rejects_multibyte_input() {
        // Six bytes but not six hex digits
        assert!(hex_to_rgba("#éé12", 0.5).is_err());
    }
}
