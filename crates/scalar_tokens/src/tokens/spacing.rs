//! Spacing tokens for component padding, icon layout and corner radii

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::TokenError;

/// Component size used to pick spacing and sizing values
#[derive(Clone, Copy, Debug, Default, Hash, Eq, PartialEq)]
pub enum ControlSize {
    Sm,
    #[default]
    Md,
    Lg,
}

impl ControlSize {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Sm => "sm",
            Self::Md => "md",
            Self::Lg => "lg",
        }
    }

    pub fn all() -> &'static [ControlSize] {
        const SIZES: [ControlSize; 3] = [ControlSize::Sm, ControlSize::Md, ControlSize::Lg];
        &SIZES
    }
}

impl Display for ControlSize {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ControlSize {
    type Err = TokenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::all()
            .iter()
            .copied()
            .find(|size| size.as_str() == s)
            .ok_or_else(|| TokenError::unknown_value("size", s))
    }
}

/// One value per [`ControlSize`]
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct PerSize<T> {
    pub sm: T,
    pub md: T,
    pub lg: T,
}

impl<T: Copy> PerSize<T> {
    pub const fn new(sm: T, md: T, lg: T) -> Self {
        Self { sm, md, lg }
    }

    pub fn get(&self, size: ControlSize) -> T {
        match size {
            ControlSize::Sm => self.sm,
            ControlSize::Md => self.md,
            ControlSize::Lg => self.lg,
        }
    }
}

/// Horizontal and vertical padding in pixels
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Padding {
    pub horizontal: f32,
    pub vertical: f32,
}

impl Padding {
    pub const fn new(horizontal: f32, vertical: f32) -> Self {
        Self {
            horizontal,
            vertical,
        }
    }
}

/// Complete set of spacing tokens
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SpacingTokens {
    pub button: PerSize<Padding>,
    pub icon_size: PerSize<f32>,
    pub icon_gap: PerSize<f32>,
    pub radius: PerSize<f32>,
}

impl SpacingTokens {
    pub fn button_padding(&self, size: ControlSize) -> Padding {
        self.button.get(size)
    }

    pub fn icon_size(&self, size: ControlSize) -> f32 {
        self.icon_size.get(size)
    }

    pub fn icon_gap(&self, size: ControlSize) -> f32 {
        self.icon_gap.get(size)
    }

    pub fn radius(&self, size: ControlSize) -> f32 {
        self.radius.get(size)
    }
}

impl Default for SpacingTokens {
    fn default() -> Self {
        Self {
            button: PerSize::new(
                Padding::new(12.0, 4.0),
                Padding::new(16.0, 8.0),
                Padding::new(20.0, 12.0),
            ),
            icon_size: PerSize::new(16.0, 24.0, 28.0),
            icon_gap: PerSize::new(6.0, 8.0, 10.0),
            radius: PerSize::new(4.0, 6.0, 8.0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn button_padding_grows_with_size() {
        let spacing = SpacingTokens::default();
        assert_eq!(spacing.button_padding(ControlSize::Sm), Padding::new(12.0, 4.0));
        assert_eq!(spacing.button_padding(ControlSize::Lg), Padding::new(20.0, 12.0));
    }

    #[test]
    fn icon_and_radius() {
        let spacing = SpacingTokens::default();
        assert_eq!(spacing.icon_size(ControlSize::Md), 24.0);
        assert_eq!(spacing.icon_gap(ControlSize::Lg), 10.0);
        assert_eq!(spacing.radius(ControlSize::Md), 6.0);
    }

    #[test]
    fn parse_control_size() {
        assert_eq!("lg".parse::<ControlSize>(), Ok(ControlSize::Lg));
        assert!("xl".parse::<ControlSize>().is_err());
    }
}
