//! Typography primitive tokens

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::TokenError;

/// The five typography primitive tables
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub enum TypographyProperty {
    Family,
    Size,
    Weight,
    LineHeight,
    LetterSpacing,
}

impl TypographyProperty {
    /// Table name as used by the facade (`lineHeight`, `letterSpacing`, ...)
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Family => "family",
            Self::Size => "size",
            Self::Weight => "weight",
            Self::LineHeight => "lineHeight",
            Self::LetterSpacing => "letterSpacing",
        }
    }

    /// Path segment used inside `{Typography/<label>/<value>}` references
    pub fn reference_label(self) -> &'static str {
        match self {
            Self::Family => "Family",
            Self::Size => "Size",
            Self::Weight => "Weight",
            Self::LineHeight => "Line Height",
            Self::LetterSpacing => "Letter Spacing",
        }
    }

    pub fn from_reference_label(label: &str) -> Option<Self> {
        Self::all()
            .iter()
            .copied()
            .find(|property| property.reference_label() == label)
    }

    pub fn all() -> &'static [TypographyProperty] {
        const PROPERTIES: [TypographyProperty; 5] = [
            TypographyProperty::Family,
            TypographyProperty::Size,
            TypographyProperty::Weight,
            TypographyProperty::LineHeight,
            TypographyProperty::LetterSpacing,
        ];
        &PROPERTIES
    }
}

impl Display for TypographyProperty {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TypographyProperty {
    type Err = TokenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::all()
            .iter()
            .copied()
            .find(|property| property.as_str() == s)
            .ok_or_else(|| TokenError::UnknownProperty(s.to_string()))
    }
}

/// Font weight names accepted by typography lookups
#[derive(Clone, Copy, Debug, Default, Hash, Eq, PartialEq)]
pub enum FontWeight {
    #[default]
    Regular,
    Medium,
    SemiBold,
    Bold,
}

impl FontWeight {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Regular => "regular",
            Self::Medium => "medium",
            Self::SemiBold => "semiBold",
            Self::Bold => "bold",
        }
    }

    /// Weight variant used for composite lookups.
    ///
    /// Composite tables carry no `medium` variant; it reads as `regular`.
    pub fn composite_variant(self) -> FontWeight {
        match self {
            Self::Medium => Self::Regular,
            other => other,
        }
    }

    pub fn all() -> &'static [FontWeight] {
        const WEIGHTS: [FontWeight; 4] = [
            FontWeight::Regular,
            FontWeight::Medium,
            FontWeight::SemiBold,
            FontWeight::Bold,
        ];
        &WEIGHTS
    }
}

impl Display for FontWeight {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FontWeight {
    type Err = TokenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::all()
            .iter()
            .copied()
            .find(|weight| weight.as_str() == s)
            .ok_or_else(|| TokenError::unknown_value(TypographyProperty::Weight.as_str(), s))
    }
}

/// A typography primitive: the font family is text, everything else a number
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum TypographyValue {
    Text(String),
    Number(f64),
}

impl TypographyValue {
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            Self::Text(_) => None,
        }
    }
}

impl Display for TypographyValue {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Text(text) => f.write_str(text),
            Self::Number(n) => write!(f, "{n}"),
        }
    }
}

/// Typography primitive tables
///
/// Sizes, line heights and letter spacings are in pixels. `size` and
/// `line_height` share a key set so a scale always pairs up.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TypographyPrimitives {
    pub family: IndexMap<String, String>,
    pub size: IndexMap<String, f64>,
    pub weight: IndexMap<String, u16>,
    pub line_height: IndexMap<String, f64>,
    pub letter_spacing: IndexMap<String, f64>,
}

impl TypographyPrimitives {
    /// Exact-key lookup of a single primitive
    pub fn get(&self, property: TypographyProperty, key: &str) -> Result<TypographyValue, TokenError> {
        let value = match property {
            TypographyProperty::Family => self
                .family
                .get(key)
                .map(|family| TypographyValue::Text(family.clone())),
            TypographyProperty::Weight => self
                .weight
                .get(key)
                .map(|weight| TypographyValue::Number(f64::from(*weight))),
            TypographyProperty::Size => self.size.get(key).copied().map(TypographyValue::Number),
            TypographyProperty::LineHeight => {
                self.line_height.get(key).copied().map(TypographyValue::Number)
            }
            TypographyProperty::LetterSpacing => {
                self.letter_spacing.get(key).copied().map(TypographyValue::Number)
            }
        };

        value.ok_or_else(|| TokenError::unknown_value(property.as_str(), key))
    }

    /// Numeric lookup comparing lower-cased keys, as reference values are
    /// written in display case (`XS`, `SemiBold`, `None`)
    pub fn find_numeric(&self, property: TypographyProperty, value: &str) -> Option<f64> {
        let needle = value.to_lowercase();
        match property {
            TypographyProperty::Family => None,
            TypographyProperty::Weight => self.find_weight(value).map(f64::from),
            TypographyProperty::Size => find_ci(&self.size, &needle).copied(),
            TypographyProperty::LineHeight => find_ci(&self.line_height, &needle).copied(),
            TypographyProperty::LetterSpacing => find_ci(&self.letter_spacing, &needle).copied(),
        }
    }

    /// Case-insensitive weight lookup keeping the integer weight
    pub fn find_weight(&self, value: &str) -> Option<u16> {
        find_ci(&self.weight, &value.to_lowercase()).copied()
    }

    /// The configured font family: the first (and normally only) family entry
    pub fn font_family(&self) -> Result<&str, TokenError> {
        self.family
            .values()
            .next()
            .map(String::as_str)
            .ok_or_else(|| TokenError::unknown_value(TypographyProperty::Family.as_str(), ""))
    }
}

fn find_ci<'a, V>(table: &'a IndexMap<String, V>, lowered: &str) -> Option<&'a V> {
    table
        .iter()
        .find(|(key, _)| key.to_lowercase() == lowered)
        .map(|(_, value)| value)
}

/// Scale keys shared by `size` and `line_height`
pub const TYPE_SCALES: [&str; 9] = ["xs", "s", "m", "l", "xl", "2xl", "3xl", "4xl", "5xl"];

impl Default for TypographyPrimitives {
    fn default() -> Self {
        let pairs = |keys: &[&str], values: &[f64]| -> IndexMap<String, f64> {
            keys.iter()
                .zip(values)
                .map(|(key, value)| (key.to_string(), *value))
                .collect()
        };

        let mut family = IndexMap::new();
        family.insert(
            "inter".to_string(),
            "Inter, -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif".to_string(),
        );

        Self {
            family,
            size: pairs(
                &TYPE_SCALES,
                &[10.0, 12.0, 14.0, 16.0, 18.0, 20.0, 24.0, 28.0, 32.0],
            ),
            weight: FontWeight::all()
                .iter()
                .zip([400, 500, 600, 700])
                .map(|(weight, value)| (weight.as_str().to_string(), value))
                .collect(),
            line_height: pairs(
                &TYPE_SCALES,
                &[14.0, 16.0, 20.0, 24.0, 26.0, 28.0, 32.0, 36.0, 40.0],
            ),
            letter_spacing: pairs(&["none", "tight", "wide"], &[0.0, -0.5, 0.5]),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn size_and_line_height_share_keys() {
        let t = TypographyPrimitives::default();
        assert!(t.size.keys().eq(t.line_height.keys()));
    }

    #[test]
    fn exact_lookup() {
        let t = TypographyPrimitives::default();
        assert_eq!(t.get(TypographyProperty::Size, "m"), Ok(TypographyValue::Number(14.0)));
        assert_eq!(
            t.get(TypographyProperty::Weight, "semiBold"),
            Ok(TypographyValue::Number(600.0))
        );
        assert_eq!(
            t.get(TypographyProperty::Weight, "semibold"),
            Err(TokenError::UnknownValue {
                property: "weight".into(),
                value: "semibold".into()
            })
        );
    }

    #[test]
    fn case_insensitive_lookup() {
        let t = TypographyPrimitives::default();
        assert_eq!(t.find_numeric(TypographyProperty::Weight, "SemiBold"), Some(600.0));
        assert_eq!(t.find_numeric(TypographyProperty::LineHeight, "2XL"), Some(28.0));
        assert_eq!(t.find_numeric(TypographyProperty::LetterSpacing, "None"), Some(0.0));
        assert_eq!(t.find_numeric(TypographyProperty::Size, "6XL"), None);
        assert_eq!(t.find_numeric(TypographyProperty::Family, "Inter"), None);
    }

    #[test]
    fn font_family_is_first_entry() {
        let t = TypographyPrimitives::default();
        assert!(t.font_family().unwrap().starts_with("Inter, "));
    }

    #[test]
    fn property_names() {
        assert_eq!("lineHeight".parse::<TypographyProperty>(), Ok(TypographyProperty::LineHeight));
        assert_eq!(
            "line-height".parse::<TypographyProperty>(),
            Err(TokenError::UnknownProperty("line-height".into()))
        );
        assert_eq!(
            TypographyProperty::from_reference_label("Letter Spacing"),
            Some(TypographyProperty::LetterSpacing)
        );
    }

    #[test]
    fn medium_reads_as_regular() {
        assert_eq!(FontWeight::Medium.composite_variant(), FontWeight::Regular);
        assert_eq!(FontWeight::Bold.composite_variant(), FontWeight::Bold);
    }

    #[test]
    fn value_display() {
        assert_eq!(TypographyValue::Number(-0.5).to_string(), "-0.5");
        assert_eq!(TypographyValue::Number(14.0).to_string(), "14");
        assert_eq!(TypographyValue::Text("Inter".into()).to_string(), "Inter");
    }
}
