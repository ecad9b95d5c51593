//! Composite typography tokens
//!
//! Path: breakpoint → category → scale → weight variant. Each leaf bundles
//! `{Typography/...}` references that are resolved against
//! [`TypographyPrimitives`](super::TypographyPrimitives) on demand.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::typography::{FontWeight, TypographyProperty, TYPE_SCALES};
use crate::error::TokenError;

/// Reference bundle for one composite style
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompositeStyleRefs {
    pub family: String,
    pub size: String,
    pub weight: String,
    pub line_height: String,
    pub letter_spacing: String,
}

impl CompositeStyleRefs {
    /// Reference stored for one property
    pub fn reference(&self, property: TypographyProperty) -> &str {
        match property {
            TypographyProperty::Family => &self.family,
            TypographyProperty::Size => &self.size,
            TypographyProperty::Weight => &self.weight,
            TypographyProperty::LineHeight => &self.line_height,
            TypographyProperty::LetterSpacing => &self.letter_spacing,
        }
    }
}

/// Weight variant (`regular`, `semiBold`, `bold`) → references
pub type CompositeWeights = IndexMap<String, CompositeStyleRefs>;

type Scales = IndexMap<String, CompositeWeights>;
type Categories = IndexMap<String, Scales>;

/// A fully resolved typography style
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TypographyStyle {
    pub family: String,
    pub size: f64,
    pub weight: u16,
    pub line_height: f64,
    pub letter_spacing: f64,
}

/// Composite typography table
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CompositeTypography {
    breakpoints: IndexMap<String, Categories>,
}

impl CompositeTypography {
    /// Weight variants for `breakpoint/category/scale`
    pub fn entry(
        &self,
        breakpoint: &str,
        category: &str,
        scale: &str,
    ) -> Result<&CompositeWeights, TokenError> {
        self.breakpoints
            .get(breakpoint)
            .and_then(|categories| categories.get(category))
            .and_then(|scales| scales.get(scale))
            .ok_or_else(|| TokenError::CompositeNotFound {
                breakpoint: breakpoint.to_string(),
                category: category.to_string(),
                scale: scale.to_string(),
            })
    }

    /// References for one weight variant
    pub fn style(
        &self,
        breakpoint: &str,
        category: &str,
        scale: &str,
        weight: &str,
    ) -> Result<&CompositeStyleRefs, TokenError> {
        self.entry(breakpoint, category, scale)?
            .get(weight)
            .ok_or_else(|| TokenError::WeightVariantNotFound {
                breakpoint: breakpoint.to_string(),
                category: category.to_string(),
                scale: scale.to_string(),
                weight: weight.to_string(),
            })
    }

    /// Visit every leaf as `(breakpoint, category, scale, weight, refs)`
    pub fn leaves(&self) -> impl Iterator<Item = (&str, &str, &str, &str, &CompositeStyleRefs)> {
        self.breakpoints.iter().flat_map(|(breakpoint, categories)| {
            categories.iter().flat_map(move |(category, scales)| {
                scales.iter().flat_map(move |(scale, weights)| {
                    weights.iter().map(move |(weight, refs)| {
                        (
                            breakpoint.as_str(),
                            category.as_str(),
                            scale.as_str(),
                            weight.as_str(),
                            refs,
                        )
                    })
                })
            })
        })
    }

    pub fn insert(
        &mut self,
        breakpoint: &str,
        category: &str,
        scale: &str,
        weight: &str,
        refs: CompositeStyleRefs,
    ) {
        self.breakpoints
            .entry(breakpoint.to_string())
            .or_default()
            .entry(category.to_string())
            .or_default()
            .entry(scale.to_string())
            .or_default()
            .insert(weight.to_string(), refs);
    }
}

/// `{Typography/<label>/<value>}`
fn typography_ref(property: TypographyProperty, value: &str) -> String {
    format!("{{Typography/{}/{}}}", property.reference_label(), value)
}

/// Display form of a weight key: `semiBold` → `SemiBold`
fn weight_label(weight: FontWeight) -> String {
    let key = weight.as_str();
    let mut chars = key.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

impl Default for CompositeTypography {
    fn default() -> Self {
        let mut table = Self {
            breakpoints: IndexMap::new(),
        };

        for scale in TYPE_SCALES {
            let scale_label = scale.to_uppercase();
            for weight in [FontWeight::Regular, FontWeight::SemiBold, FontWeight::Bold] {
                let refs = CompositeStyleRefs {
                    family: typography_ref(TypographyProperty::Family, "Inter"),
                    size: typography_ref(TypographyProperty::Size, &scale_label),
                    weight: typography_ref(TypographyProperty::Weight, &weight_label(weight)),
                    line_height: typography_ref(TypographyProperty::LineHeight, &scale_label),
                    letter_spacing: typography_ref(TypographyProperty::LetterSpacing, "None"),
                };
                table.insert("desktopLarge", "heading", scale, weight.as_str(), refs);
            }
        }

        table
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn builtin_references() {
        let table = CompositeTypography::default();
        let refs = table.style("desktopLarge", "heading", "2xl", "semiBold").unwrap();
        assert_eq!(
            refs,
            &CompositeStyleRefs {
                family: "{Typography/Family/Inter}".into(),
                size: "{Typography/Size/2XL}".into(),
                weight: "{Typography/Weight/SemiBold}".into(),
                line_height: "{Typography/Line Height/2XL}".into(),
                letter_spacing: "{Typography/Letter Spacing/None}".into(),
            }
        );
    }

    #[test]
    fn builtin_has_no_medium_variant() {
        let table = CompositeTypography::default();
        assert_eq!(table.leaves().count(), TYPE_SCALES.len() * 3);
        assert!(table.leaves().all(|(_, _, _, weight, _)| weight != "medium"));
    }

    #[test]
    fn missing_paths() {
        let table = CompositeTypography::default();
        assert_eq!(
            table.entry("mobile", "heading", "m"),
            Err(TokenError::CompositeNotFound {
                breakpoint: "mobile".into(),
                category: "heading".into(),
                scale: "m".into()
            })
        );
        assert!(matches!(
            table.style("desktopLarge", "heading", "m", "medium"),
            Err(TokenError::WeightVariantNotFound { .. })
        ));
    }

    #[test]
    fn style_serializes_with_camel_case_keys() {
        let style = TypographyStyle {
            family: "Inter".into(),
            size: 16.0,
            weight: 600,
            line_height: 24.0,
            letter_spacing: -0.5,
        };
        assert_eq!(
            serde_json::to_value(&style).unwrap(),
            serde_json::json!({
                "family": "Inter",
                "size": 16.0,
                "weight": 600,
                "lineHeight": 24.0,
                "letterSpacing": -0.5
            })
        );
    }
}
