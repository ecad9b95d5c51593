//! Reference string grammar
//!
//! Semantic and composite tables point at primitives through reference strings:
//!
//! - `{Color/<family>/<shade>}`: matched case-sensitively against the color table
//! - `{Typography/<Property>/<Value>}`: `<Property>` is one of `Family`, `Size`,
//!   `Weight`, `Line Height`, `Letter Spacing`; `<Value>` is matched
//!   case-insensitively against the primitive keys
//!
//! Parsing borrows from the reference; nothing is allocated unless it fails.

use crate::error::TokenError;
use crate::tokens::TypographyProperty;

/// Parsed `{Color/<family>/<shade>}` reference
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ColorReference<'a> {
    pub family: &'a str,
    pub shade: &'a str,
}

impl<'a> ColorReference<'a> {
    pub fn parse(reference: &'a str) -> Result<Self, TokenError> {
        let (family, shade) = body(reference, "Color")
            .and_then(|path| path.split_once('/'))
            .filter(|(family, shade)| !family.is_empty() && !shade.is_empty())
            .ok_or_else(|| TokenError::MalformedReference(reference.to_string()))?;

        Ok(Self { family, shade })
    }
}

/// Parsed `{Typography/<Property>/<Value>}` reference
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TypographyReference<'a> {
    pub property: TypographyProperty,
    pub value: &'a str,
}

impl<'a> TypographyReference<'a> {
    pub fn parse(reference: &'a str) -> Result<Self, TokenError> {
        let malformed = || TokenError::MalformedReference(reference.to_string());

        let (label, value) = body(reference, "Typography")
            .and_then(|path| path.split_once('/'))
            .filter(|(_, value)| !value.is_empty() && !value.contains('/'))
            .ok_or_else(malformed)?;
        let property = TypographyProperty::from_reference_label(label).ok_or_else(malformed)?;

        Ok(Self { property, value })
    }
}

/// Strip `{<kind>/` and `}` and return the path in between
fn body<'a>(reference: &'a str, kind: &str) -> Option<&'a str> {
    let path = reference
        .strip_prefix('{')?
        .strip_suffix('}')?
        .strip_prefix(kind)?
        .strip_prefix('/')?;
    (!path.contains(['{', '}'])).then_some(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_color_reference() {
        assert_eq!(
            ColorReference::parse("{Color/neutral/900}"),
            Ok(ColorReference {
                family: "neutral",
                shade: "900"
            })
        );
        assert_eq!(
            ColorReference::parse("{Color/neutral/black}").map(|r| r.shade),
            Ok("black")
        );
    }

    #[test]
    fn color_shade_keeps_trailing_path() {
        // Only the first separator splits family from shade
        assert_eq!(
            ColorReference::parse("{Color/neutral/9/0}").map(|r| r.shade),
            Ok("9/0")
        );
    }

    #[test]
    fn malformed_color_references() {
        for bad in [
            "",
            "Color/neutral/900",
            "{Color/neutral}",
            "{Color//900}",
            "{Color/neutral/}",
            "{Colour/neutral/900}",
            "{Typography/Size/XS}",
            "{Color/neutral/900}x",
            "{Color/neutral/{900}}",
        ] {
            assert_eq!(
                ColorReference::parse(bad),
                Err(TokenError::MalformedReference(bad.to_string())),
                "reference {bad:?}"
            );
        }
    }

    #[test]
    fn parse_typography_reference() {
        assert_eq!(
            TypographyReference::parse("{Typography/Line Height/2XL}"),
            Ok(TypographyReference {
                property: TypographyProperty::LineHeight,
                value: "2XL"
            })
        );
        assert_eq!(
            TypographyReference::parse("{Typography/Letter Spacing/None}").map(|r| r.property),
            Ok(TypographyProperty::LetterSpacing)
        );
    }

    #[test]
    fn malformed_typography_references() {
        for bad in [
            "{Typography/LineHeight/XS}",
            "{Typography/Size}",
            "{Typography/Size/}",
            "{Typography/Size/X/S}",
            "{Color/Size/XS}",
        ] {
            assert!(TypographyReference::parse(bad).is_err(), "reference {bad:?}");
        }
    }
}
