//! Sizing tokens
//!
//! The 8px spacing scale, component dimensions and the raw pixel scale.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::spacing::{ControlSize, PerSize};

/// Input field dimensions
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InputSizing {
    pub height: f32,
    pub min_width: f32,
}

/// Button dimensions per control size
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ButtonSizing {
    pub height: PerSize<f32>,
    pub min_width: PerSize<f32>,
}

/// Complete set of sizing tokens
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SizingTokens {
    pub spacing: IndexMap<String, f32>,
    pub icon: PerSize<f32>,
    pub button: ButtonSizing,
    pub input: InputSizing,
    pub scale: IndexMap<String, f32>,
}

impl SizingTokens {
    /// Spacing step by name (`xs`, `md`, `12xl`, ...)
    pub fn spacing(&self, key: &str) -> Option<f32> {
        self.spacing.get(key).copied()
    }

    /// Raw pixel scale by its decimal key (`"2"`, `"120"`, ...)
    pub fn scale(&self, key: &str) -> Option<f32> {
        self.scale.get(key).copied()
    }

    pub fn icon(&self, size: ControlSize) -> f32 {
        self.icon.get(size)
    }

    pub fn button_height(&self, size: ControlSize) -> f32 {
        self.button.height.get(size)
    }

    pub fn button_min_width(&self, size: ControlSize) -> f32 {
        self.button.min_width.get(size)
    }
}

const SPACING_STEPS: [&str; 16] = [
    "xs", "sm", "md", "lg", "xl", "2xl", "3xl", "4xl", "5xl", "6xl", "7xl", "8xl", "9xl", "10xl",
    "11xl", "12xl",
];

const PIXEL_SCALE: [u16; 25] = [
    2, 4, 8, 10, 12, 14, 16, 18, 20, 24, 26, 28, 32, 36, 40, 48, 56, 64, 72, 80, 88, 96, 104, 112,
    120,
];

impl Default for SizingTokens {
    fn default() -> Self {
        // xs and sm are 4 and 8; from md on the scale grows by 8px
        let spacing = SPACING_STEPS
            .iter()
            .enumerate()
            .map(|(i, key)| {
                let px = match i {
                    0 => 4.0,
                    1 => 8.0,
                    n => 16.0 + 8.0 * (n as f32 - 2.0),
                };
                (key.to_string(), px)
            })
            .collect();

        let scale = PIXEL_SCALE
            .iter()
            .map(|px| (px.to_string(), f32::from(*px)))
            .collect();

        Self {
            spacing,
            icon: PerSize::new(16.0, 24.0, 28.0),
            button: ButtonSizing {
                height: PerSize::new(24.0, 40.0, 60.0),
                min_width: PerSize::new(64.0, 96.0, 128.0),
            },
            input: InputSizing {
                height: 40.0,
                min_width: 200.0,
            },
            scale,
        }
    }
}
