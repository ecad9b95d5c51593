//! Token resolution
//!
//! [`Resolver`] layers the lookups over an injected [`TokenSet`]:
//!
//! ```text
//! get_semantic_color ──► SemanticPalette::reference ──► resolve_color_reference ──► ColorPrimitives
//! get_overlay_color  ──► (same path) ──► hex_to_rgba(opacity)
//! get_typography_style ──► CompositeTypography::style ──► 4 × TypographyReference ──► TypographyPrimitives
//! ```
//!
//! Errors are returned from the layer where the lookup missed and pass through
//! the upper layers unchanged.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::{trace, warn};

use crate::color::hex_to_rgba;
use crate::error::TokenError;
use crate::mode::ThemeMode;
use crate::reference::{ColorReference, TypographyReference};
use crate::set::TokenSet;
use crate::tokens::*;

/// What composite typography does with a reference that doesn't resolve
#[derive(Clone, Copy, Debug, Default, Hash, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FallbackPolicy {
    /// Substitute the value derived from the requested scale and weight
    /// (`letterSpacing` falls back to `none`) and log a warning
    #[default]
    Lenient,
    /// Fail with `MalformedReference` or `UnknownValue`
    Strict,
}

impl FallbackPolicy {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Lenient => "lenient",
            Self::Strict => "strict",
        }
    }
}

impl Display for FallbackPolicy {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FallbackPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "lenient" => Ok(Self::Lenient),
            "strict" => Ok(Self::Strict),
            other => Err(format!("unknown fallback policy `{other}` (expected lenient or strict)")),
        }
    }
}

/// Resolves token requests against a borrowed [`TokenSet`]
#[derive(Clone, Copy, Debug)]
pub struct Resolver<'a> {
    tokens: &'a TokenSet,
    fallback: FallbackPolicy,
}

impl<'a> Resolver<'a> {
    pub fn new(tokens: &'a TokenSet) -> Self {
        Self {
            tokens,
            fallback: FallbackPolicy::default(),
        }
    }

    pub fn with_fallback(mut self, fallback: FallbackPolicy) -> Self {
        self.fallback = fallback;
        self
    }

    pub fn tokens(&self) -> &'a TokenSet {
        self.tokens
    }

    pub fn fallback(&self) -> FallbackPolicy {
        self.fallback
    }

    // ========== Colors ==========

    /// Resolve `{Color/<family>/<shade>}` to the hex string stored in the table
    pub fn resolve_color_reference(&self, reference: &str) -> Result<&'a str, TokenError> {
        let ColorReference { family, shade } = ColorReference::parse(reference)?;
        self.tokens.colors.get(family, shade)
    }

    /// Primitive color by family and shade
    pub fn get_color_primitive(&self, family: &str, shade: &str) -> Result<&'a str, TokenError> {
        self.tokens.colors.get(family, shade)
    }

    /// Resolve a semantic color for a theme mode
    pub fn resolve_semantic_color(
        &self,
        category: SemanticCategory,
        token: &str,
        mode: ThemeMode,
    ) -> Result<&'a str, TokenError> {
        let reference = self
            .tokens
            .semantic
            .palette(mode)
            .reference(category.as_str(), token)?;
        trace!("semantic {mode}/{category}/{token} -> {reference}");
        self.resolve_color_reference(reference)
    }

    pub fn get_semantic_color(
        &self,
        category: SemanticCategory,
        token: &str,
        mode: ThemeMode,
    ) -> Result<&'a str, TokenError> {
        self.resolve_semantic_color(category, token, mode)
    }

    /// Resolve an overlay level to an `rgba(...)` string at the level's opacity
    pub fn resolve_overlay_color(
        &self,
        level: OverlayLevel,
        mode: ThemeMode,
    ) -> Result<String, TokenError> {
        let overlay = self
            .tokens
            .semantic
            .palette(mode)
            .category(SemanticCategory::Overlay.as_str())?;
        let reference = overlay
            .get(level.as_str())
            .ok_or_else(|| TokenError::UnknownOverlayLevel(level.as_str().to_string()))?;

        let base = self.resolve_color_reference(reference)?;
        hex_to_rgba(base, level.opacity())
    }

    pub fn get_overlay_color(
        &self,
        level: OverlayLevel,
        mode: ThemeMode,
    ) -> Result<String, TokenError> {
        self.resolve_overlay_color(level, mode)
    }

    // ========== Typography ==========

    /// Resolve a composite typography style into concrete values.
    ///
    /// `medium` is looked up as `regular` since composite tables carry no
    /// medium variant.
    pub fn resolve_composite_typography(
        &self,
        breakpoint: &str,
        category: &str,
        scale: &str,
        weight: FontWeight,
    ) -> Result<TypographyStyle, TokenError> {
        let weight = weight.composite_variant();
        let refs = self
            .tokens
            .composite
            .style(breakpoint, category, scale, weight.as_str())?;
        self.assemble(refs, scale, weight)
    }

    pub fn get_typography_style(
        &self,
        breakpoint: &str,
        category: &str,
        scale: &str,
        weight: FontWeight,
    ) -> Result<TypographyStyle, TokenError> {
        self.resolve_composite_typography(breakpoint, category, scale, weight.composite_variant())
    }

    /// Single typography primitive by exact key
    pub fn get_typography_primitive(
        &self,
        property: TypographyProperty,
        value: &str,
    ) -> Result<TypographyValue, TokenError> {
        self.tokens.typography.get(property, value)
    }

    /// Resolve the references of one composite leaf.
    ///
    /// `scale` and `weight` are the defaults substituted under
    /// [`FallbackPolicy::Lenient`].
    pub fn assemble(
        &self,
        refs: &CompositeStyleRefs,
        scale: &str,
        weight: FontWeight,
    ) -> Result<TypographyStyle, TokenError> {
        let primitives = &self.tokens.typography;

        let numeric = |property: TypographyProperty, default_key: &str| {
            self.resolve_part(refs, property, default_key, |value| {
                primitives.find_numeric(property, value)
            })
        };

        Ok(TypographyStyle {
            family: primitives.font_family()?.to_string(),
            size: numeric(TypographyProperty::Size, scale)?,
            weight: self.resolve_part(refs, TypographyProperty::Weight, weight.as_str(), |value| {
                primitives.find_weight(value)
            })?,
            line_height: numeric(TypographyProperty::LineHeight, scale)?,
            letter_spacing: numeric(TypographyProperty::LetterSpacing, "none")?,
        })
    }

    fn resolve_part<T>(
        &self,
        refs: &CompositeStyleRefs,
        property: TypographyProperty,
        default_key: &str,
        find: impl Fn(&str) -> Option<T>,
    ) -> Result<T, TokenError> {
        let reference = refs.reference(property);
        let parsed = TypographyReference::parse(reference)
            .ok()
            .filter(|parsed| parsed.property == property);

        if let Some(value) = parsed.and_then(|parsed| find(parsed.value)) {
            return Ok(value);
        }

        match (self.fallback, parsed) {
            (FallbackPolicy::Strict, Some(parsed)) => {
                Err(TokenError::unknown_value(property.as_str(), parsed.value))
            }
            (FallbackPolicy::Strict, None) => {
                Err(TokenError::MalformedReference(reference.to_string()))
            }
            (FallbackPolicy::Lenient, _) => {
                warn!(
                    "unresolved typography reference `{reference}`, falling back to {}/{default_key}",
                    property.as_str()
                );
                find(default_key)
                    .ok_or_else(|| TokenError::unknown_value(property.as_str(), default_key))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn semantic_color_resolves_through_primitives() {
        let tokens = TokenSet::default();
        let resolver = Resolver::new(&tokens);
        assert_eq!(
            resolver.resolve_semantic_color(SemanticCategory::Background, "brand", ThemeMode::Light),
            Ok("#037DE8")
        );
        assert_eq!(
            resolver.resolve_semantic_color(SemanticCategory::Text, "primary", ThemeMode::Dark),
            Ok("#E5E5E5")
        );
    }

    #[test]
    fn overlay_uses_table_reference() {
        let mut tokens = TokenSet::default();
        tokens
            .semantic
            .light
            .insert("overlay", "50", "{Color/brand/500}");
        let resolver = Resolver::new(&tokens);
        assert_eq!(
            resolver.resolve_overlay_color(OverlayLevel::L50, ThemeMode::Light),
            Ok("rgba(3, 125, 232, 0.5)".to_string())
        );
    }

    #[test]
    fn bold_heading() {
        let tokens = TokenSet::default();
        let style = Resolver::new(&tokens)
            .resolve_composite_typography("desktopLarge", "heading", "xl", FontWeight::Bold)
            .unwrap();
        assert_eq!(style.size, 18.0);
        assert_eq!(style.weight, 700);
        assert_eq!(style.line_height, 26.0);
        assert_eq!(style.letter_spacing, 0.0);
    }

    #[test]
    fn semi_bold_reference_matches_camel_case_key() {
        let tokens = TokenSet::default();
        let style = Resolver::new(&tokens)
            .with_fallback(FallbackPolicy::Strict)
            .resolve_composite_typography("desktopLarge", "heading", "s", FontWeight::SemiBold)
            .unwrap();
        assert_eq!(style.weight, 600);
    }

    fn broken_refs() -> CompositeStyleRefs {
        CompositeStyleRefs {
            family: "{Typography/Family/Inter}".into(),
            size: "{Typography/Size/Huge}".into(),
            weight: "SemiBold".into(),
            line_height: "{Typography/Size/M}".into(),
            letter_spacing: "{Typography/Letter Spacing/Loose}".into(),
        }
    }

    #[test]
    fn lenient_fallback_uses_request_defaults() {
        let tokens = TokenSet::default();
        let style = Resolver::new(&tokens)
            .assemble(&broken_refs(), "l", FontWeight::Bold)
            .unwrap();
        assert_eq!(style.size, 16.0);
        assert_eq!(style.weight, 700);
        // Line height reference names the wrong property, so it falls back too
        assert_eq!(style.line_height, 24.0);
        assert_eq!(style.letter_spacing, 0.0);
    }

    #[test]
    fn strict_fallback_fails_loudly() {
        let tokens = TokenSet::default();
        let resolver = Resolver::new(&tokens).with_fallback(FallbackPolicy::Strict);
        assert_eq!(
            resolver.assemble(&broken_refs(), "l", FontWeight::Bold),
            Err(TokenError::UnknownValue {
                property: "size".into(),
                value: "Huge".into()
            })
        );
    }

    #[test]
    fn lenient_fallback_with_missing_default() {
        let tokens = TokenSet::default();
        assert_eq!(
            Resolver::new(&tokens).assemble(&broken_refs(), "9xl", FontWeight::Bold),
            Err(TokenError::UnknownValue {
                property: "size".into(),
                value: "9xl".into()
            })
        );
    }

    #[test]
    fn policy_from_str() {
        assert_eq!("strict".parse::<FallbackPolicy>(), Ok(FallbackPolicy::Strict));
        assert!("loose".parse::<FallbackPolicy>().is_err());
    }
}
