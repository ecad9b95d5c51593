//! Semantic color tokens
//!
//! Mode-aware names (`text/primary`, `background/brand`, `overlay/50`) that
//! point at primitive colors through `{Color/<family>/<shade>}` references.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::TokenError;
use crate::mode::ThemeMode;

/// Semantic color categories
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub enum SemanticCategory {
    Text,
    Background,
    Overlay,
}

impl SemanticCategory {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Background => "background",
            Self::Overlay => "overlay",
        }
    }

    pub fn all() -> &'static [SemanticCategory] {
        const CATEGORIES: [SemanticCategory; 3] = [
            SemanticCategory::Text,
            SemanticCategory::Background,
            SemanticCategory::Overlay,
        ];
        &CATEGORIES
    }
}

impl Display for SemanticCategory {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SemanticCategory {
    type Err = TokenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::all()
            .iter()
            .copied()
            .find(|category| category.as_str() == s)
            .ok_or_else(|| TokenError::UnknownCategory(s.to_string()))
    }
}

/// Overlay (scrim) levels with their fixed opacity
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub enum OverlayLevel {
    L30,
    L50,
    L70,
}

impl OverlayLevel {
    /// Token name inside the `overlay` category
    pub fn as_str(self) -> &'static str {
        match self {
            Self::L30 => "30",
            Self::L50 => "50",
            Self::L70 => "70",
        }
    }

    pub fn opacity(self) -> f64 {
        match self {
            Self::L30 => 0.3,
            Self::L50 => 0.5,
            Self::L70 => 0.7,
        }
    }

    pub fn all() -> &'static [OverlayLevel] {
        const LEVELS: [OverlayLevel; 3] = [OverlayLevel::L30, OverlayLevel::L50, OverlayLevel::L70];
        &LEVELS
    }
}

impl Display for OverlayLevel {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OverlayLevel {
    type Err = TokenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::all()
            .iter()
            .copied()
            .find(|level| level.as_str() == s)
            .ok_or_else(|| TokenError::UnknownOverlayLevel(s.to_string()))
    }
}

impl TryFrom<u8> for OverlayLevel {
    type Error = TokenError;

    fn try_from(level: u8) -> Result<Self, Self::Error> {
        match level {
            30 => Ok(Self::L30),
            50 => Ok(Self::L50),
            70 => Ok(Self::L70),
            other => Err(TokenError::UnknownOverlayLevel(other.to_string())),
        }
    }
}

/// Token name → color reference
pub type SemanticGroup = IndexMap<String, String>;

/// One mode's semantic table: category → token → reference
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SemanticPalette {
    categories: IndexMap<String, SemanticGroup>,
}

impl SemanticPalette {
    pub fn new(categories: IndexMap<String, SemanticGroup>) -> Self {
        Self { categories }
    }

    pub fn category(&self, category: &str) -> Result<&SemanticGroup, TokenError> {
        self.categories
            .get(category)
            .ok_or_else(|| TokenError::UnknownCategory(category.to_string()))
    }

    /// The reference string stored for `category/token`
    pub fn reference(&self, category: &str, token: &str) -> Result<&str, TokenError> {
        self.category(category)?
            .get(token)
            .map(String::as_str)
            .ok_or_else(|| TokenError::UnknownToken {
                category: category.to_string(),
                token: token.to_string(),
            })
    }

    /// Add or replace a single reference
    pub fn insert(&mut self, category: &str, token: &str, reference: &str) {
        self.categories
            .entry(category.to_string())
            .or_default()
            .insert(token.to_string(), reference.to_string());
    }

    pub fn categories(&self) -> impl Iterator<Item = (&str, &SemanticGroup)> {
        self.categories.iter().map(|(name, group)| (name.as_str(), group))
    }
}

/// Semantic color tables for both theme modes
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SemanticColors {
    pub light: SemanticPalette,
    pub dark: SemanticPalette,
}

impl SemanticColors {
    pub fn palette(&self, mode: ThemeMode) -> &SemanticPalette {
        match mode {
            ThemeMode::Light => &self.light,
            ThemeMode::Dark => &self.dark,
        }
    }
}

fn group(entries: &[(&str, &str)]) -> SemanticGroup {
    entries
        .iter()
        .map(|(token, reference)| (token.to_string(), reference.to_string()))
        .collect()
}

fn palette(text: SemanticGroup, background: SemanticGroup, overlay: &str) -> SemanticPalette {
    let overlay = OverlayLevel::all()
        .iter()
        .map(|level| (level.as_str().to_string(), overlay.to_string()))
        .collect();

    let mut categories = IndexMap::new();
    categories.insert(SemanticCategory::Text.as_str().to_string(), text);
    categories.insert(SemanticCategory::Background.as_str().to_string(), background);
    categories.insert(SemanticCategory::Overlay.as_str().to_string(), overlay);
    SemanticPalette { categories }
}

impl Default for SemanticColors {
    fn default() -> Self {
        let light = palette(
            group(&[
                ("primary", "{Color/neutral/900}"),
                ("secondary", "{Color/neutral/800}"),
                ("tertiary", "{Color/neutral/600}"),
                ("disabled", "{Color/neutral/300}"),
                ("link", "{Color/blue/500}"),
                ("linkHover", "{Color/blue/600}"),
                ("linkPressed", "{Color/blue/700}"),
                ("warning", "{Color/yellow/600}"),
                ("warningHover", "{Color/yellow/700}"),
                ("warningPressed", "{Color/yellow/800}"),
                ("positive", "{Color/green/600}"),
                ("positiveHover", "{Color/green/700}"),
                ("positivePressed", "{Color/green/800}"),
                ("negative", "{Color/red/600}"),
                ("negativeHover", "{Color/red/700}"),
                ("negativePressed", "{Color/red/800}"),
                ("readable", "{Color/neutral/800}"),
                ("sourced", "{Color/green/600}"),
                ("editable", "{Color/brand/500}"),
            ]),
            group(&[
                ("brand", "{Color/brand/500}"),
                ("hover", "{Color/brand/600}"),
                ("pressed", "{Color/brand/700}"),
                ("disabled", "{Color/neutral/300}"),
                ("positive", "{Color/green/600}"),
                ("positiveHover", "{Color/green/700}"),
                ("positivePressed", "{Color/green/800}"),
                ("warning", "{Color/yellow/600}"),
                ("warningHover", "{Color/yellow/700}"),
                ("warningPressed", "{Color/yellow/800}"),
                ("negative", "{Color/red/600}"),
                ("negativeHover", "{Color/red/700}"),
                ("negativePressed", "{Color/red/800}"),
                ("page", "{Color/neutral/100}"),
            ]),
            "{Color/neutral/black}",
        );

        let dark = palette(
            group(&[
                ("primary", "{Color/neutral/100}"),
                ("secondary", "{Color/neutral/200}"),
                ("tertiary", "{Color/neutral/400}"),
                ("disabled", "{Color/neutral/700}"),
                ("link", "{Color/blue/400}"),
                ("linkHover", "{Color/blue/300}"),
                ("linkPressed", "{Color/blue/200}"),
                ("warning", "{Color/yellow/400}"),
                ("warningHover", "{Color/yellow/300}"),
                ("warningPressed", "{Color/yellow/200}"),
                ("positive", "{Color/green/400}"),
                ("positiveHover", "{Color/green/300}"),
                ("positivePressed", "{Color/green/200}"),
                ("negative", "{Color/red/400}"),
                ("negativeHover", "{Color/red/300}"),
                ("negativePressed", "{Color/red/200}"),
                ("readable", "{Color/neutral/200}"),
                ("sourced", "{Color/green/400}"),
                ("editable", "{Color/brand/400}"),
            ]),
            group(&[
                ("brand", "{Color/brand/400}"),
                ("hover", "{Color/brand/300}"),
                ("pressed", "{Color/brand/200}"),
                ("disabled", "{Color/neutral/700}"),
                ("positive", "{Color/green/400}"),
                ("positiveHover", "{Color/green/300}"),
                ("positivePressed", "{Color/green/200}"),
                ("warning", "{Color/yellow/400}"),
                ("warningHover", "{Color/yellow/300}"),
                ("warningPressed", "{Color/yellow/200}"),
                ("negative", "{Color/red/400}"),
                ("negativeHover", "{Color/red/300}"),
                ("negativePressed", "{Color/red/200}"),
                ("page", "{Color/neutral/900}"),
            ]),
            "{Color/neutral/white}",
        );

        Self { light, dark }
    }
}
