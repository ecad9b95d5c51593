//! Primitive color tokens

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::TokenError;

/// Color families shipped with the built-in palette
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub enum ColorFamily {
    Neutral,
    Brand,
    Accent,
    Purple,
    Blue,
    Green,
    Orange,
    Red,
    Yellow,
}

impl ColorFamily {
    /// Table key for this family
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Neutral => "neutral",
            Self::Brand => "brand",
            Self::Accent => "accent",
            Self::Purple => "purple",
            Self::Blue => "blue",
            Self::Green => "green",
            Self::Orange => "orange",
            Self::Red => "red",
            Self::Yellow => "yellow",
        }
    }

    pub fn all() -> &'static [ColorFamily] {
        const FAMILIES: [ColorFamily; 9] = [
            ColorFamily::Neutral,
            ColorFamily::Brand,
            ColorFamily::Accent,
            ColorFamily::Purple,
            ColorFamily::Blue,
            ColorFamily::Green,
            ColorFamily::Orange,
            ColorFamily::Red,
            ColorFamily::Yellow,
        ];
        &FAMILIES
    }
}

impl Display for ColorFamily {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ColorFamily {
    type Err = TokenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::all()
            .iter()
            .copied()
            .find(|family| family.as_str() == s)
            .ok_or_else(|| TokenError::UnknownFamily(s.to_string()))
    }
}

/// Shade key → `#RRGGBB`
pub type Shades = IndexMap<String, String>;

/// Primitive color table: family → shade → hex color
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ColorPrimitives {
    families: IndexMap<String, Shades>,
}

impl ColorPrimitives {
    pub fn new(families: IndexMap<String, Shades>) -> Self {
        Self { families }
    }

    /// Look up a hex color by family and shade (both case-sensitive)
    pub fn get(&self, family: &str, shade: &str) -> Result<&str, TokenError> {
        let shades = self
            .families
            .get(family)
            .ok_or_else(|| TokenError::UnknownFamily(family.to_string()))?;

        shades
            .get(shade)
            .map(String::as_str)
            .ok_or_else(|| TokenError::UnknownShade {
                family: family.to_string(),
                shade: shade.to_string(),
            })
    }

    pub fn family(&self, family: &str) -> Option<&Shades> {
        self.families.get(family)
    }

    /// Iterate families in table order
    pub fn families(&self) -> impl Iterator<Item = (&str, &Shades)> {
        self.families.iter().map(|(name, shades)| (name.as_str(), shades))
    }
}

const NUMERIC_SHADES: [&str; 9] = ["100", "200", "300", "400", "500", "600", "700", "800", "900"];

fn scale(hexes: [&str; 9]) -> Shades {
    NUMERIC_SHADES
        .iter()
        .zip(hexes)
        .map(|(shade, hex)| (shade.to_string(), hex.to_string()))
        .collect()
}

impl Default for ColorPrimitives {
    fn default() -> Self {
        let mut neutral = Shades::new();
        neutral.insert("white".into(), "#ffffff".into());
        neutral.extend(scale([
            "#E5E5E5", "#CCCCCC", "#B3B3B3", "#999999", "#808080", "#666666", "#4C4C4C", "#333333",
            "#1A1A1A",
        ]));
        neutral.insert("black".into(), "#000000".into());

        let mut families = IndexMap::new();
        families.insert(ColorFamily::Neutral.as_str().to_string(), neutral);
        for (family, hexes) in [
            (
                ColorFamily::Brand,
                [
                    "#CDE5FA", "#9ACBF6", "#68B1F1", "#3597ED", "#037DE8", "#0268C1", "#02539A",
                    "#013E73", "#01294C",
                ],
            ),
            (
                ColorFamily::Accent,
                [
                    "#CEF3E6", "#9CE8CD", "#6BDCB3", "#39D19A", "#08C581", "#07A46B", "#058355",
                    "#046140", "#03402A",
                ],
            ),
            (
                ColorFamily::Purple,
                [
                    "#DFCFFF", "#C2A8FF", "#A77FFF", "#8A58FF", "#6E2FFF", "#5826D6", "#441DA3",
                    "#2E1571", "#1A0B3E",
                ],
            ),
            (
                ColorFamily::Blue,
                [
                    "#CED3FD", "#9EA7FA", "#6D7BF8", "#3D4FF5", "#2A3EF4", "#0A1CC2", "#071592",
                    "#050E61", "#020731",
                ],
            ),
            (
                ColorFamily::Green,
                [
                    "#BBE8CE", "#7ED6A5", "#31C37B", "#00B04F", "#009C1C", "#007E17", "#006012",
                    "#00420F", "#002409",
                ],
            ),
            (
                ColorFamily::Orange,
                [
                    "#FFE0C4", "#FFC790", "#FFAC5C", "#FF9211", "#FF7700", "#D26000", "#A04900",
                    "#6F3300", "#3C1B00",
                ],
            ),
            (
                ColorFamily::Red,
                [
                    "#FFC8C9", "#FF999C", "#FF686E", "#FF2F3D", "#FB0000", "#CB0000", "#9C0000",
                    "#6C0003", "#3B0104",
                ],
            ),
            (
                ColorFamily::Yellow,
                [
                    "#FFEECC", "#FFDD99", "#FFCC66", "#FFBB33", "#FFAA00", "#CC8800", "#996600",
                    "#664400", "#332200",
                ],
            ),
        ] {
            families.insert(family.as_str().to_string(), scale(hexes));
        }

        Self { families }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_has_every_family() {
        let colors = ColorPrimitives::default();
        for family in ColorFamily::all() {
            assert!(colors.family(family.as_str()).is_some(), "{family}");
        }
        assert_eq!(colors.families().count(), ColorFamily::all().len());
    }

    #[test]
    fn only_neutral_has_white_and_black() {
        let colors = ColorPrimitives::default();
        assert_eq!(colors.get("neutral", "white"), Ok("#ffffff"));
        assert_eq!(colors.get("neutral", "black"), Ok("#000000"));
        assert_eq!(
            colors.get("brand", "white"),
            Err(TokenError::UnknownShade {
                family: "brand".into(),
                shade: "white".into()
            })
        );
    }

    #[test]
    fn lookup_is_case_sensitive() {
        let colors = ColorPrimitives::default();
        assert_eq!(colors.get("brand", "500"), Ok("#037DE8"));
        assert_eq!(
            colors.get("Brand", "500"),
            Err(TokenError::UnknownFamily("Brand".into()))
        );
    }

    #[test]
    fn family_from_str() {
        assert_eq!("purple".parse::<ColorFamily>(), Ok(ColorFamily::Purple));
        assert_eq!(
            "chartreuse".parse::<ColorFamily>(),
            Err(TokenError::UnknownFamily("chartreuse".into()))
        );
    }
}
