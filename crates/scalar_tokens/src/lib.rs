//! Scalar Design Tokens
//!
//! Token tables and the resolution engine behind the Scalar design system.
//!
//! # Overview
//!
//! Tokens are layered:
//!
//! - **Primitive tokens**: raw values. Colors are `#RRGGBB` strings grouped by
//!   family and shade; typography primitives are font sizes, weights, line
//!   heights and letter spacings.
//! - **Semantic tokens**: mode-aware names (`text/primary`, `background/brand`)
//!   pointing at a primitive through a reference string such as
//!   `{Color/neutral/900}`.
//! - **Composite tokens**: typography styles bundling several
//!   `{Typography/...}` references, resolved into a flat [`TypographyStyle`].
//!
//! # Quick Start
//!
//! ```rust
//! use scalar_tokens::{FontWeight, OverlayLevel, SemanticCategory, ThemeMode};
//!
//! let brand = scalar_tokens::get_semantic_color(SemanticCategory::Background, "brand", ThemeMode::Light)?;
//! assert_eq!(brand, "#037DE8");
//!
//! let scrim = scalar_tokens::get_overlay_color(OverlayLevel::L50, ThemeMode::Dark)?;
//! assert_eq!(scrim, "rgba(255, 255, 255, 0.5)");
//!
//! let heading = scalar_tokens::get_typography_style("desktopLarge", "heading", "xl", FontWeight::Bold)?;
//! assert_eq!((heading.size, heading.weight), (18.0, 700));
//! # Ok::<(), scalar_tokens::TokenError>(())
//! ```
//!
//! # Injected tables
//!
//! The free functions read the process-wide [`TokenState`]. Code that needs
//! its own tables (tests, previews, alternative brands) builds a [`Resolver`]
//! over a [`TokenSet`]:
//!
//! ```rust
//! use scalar_tokens::{FallbackPolicy, TokenSet};
//!
//! let tokens = TokenSet::from_toml_str(r#"
//! [semantic.light.text]
//! primary = "{Color/brand/900}"
//! "#)?;
//! let resolver = tokens.resolver().with_fallback(FallbackPolicy::Strict);
//! assert_eq!(resolver.resolve_color_reference("{Color/brand/900}")?, "#01294C");
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod color;
pub mod error;
pub mod mode;
pub mod reference;
pub mod resolver;
pub mod set;
pub mod state;
pub mod tokens;

// Re-export commonly used types
pub use color::{hex_to_rgba, Rgba};
pub use error::{LoadError, TokenError};
pub use mode::ThemeMode;
pub use reference::{ColorReference, TypographyReference};
pub use resolver::{FallbackPolicy, Resolver};
pub use set::{IntegrityFailure, IntegrityReport, TokenSet};
pub use state::TokenState;
pub use tokens::*;

/// Primitive color by family and shade, e.g. `("brand", "500")`
pub fn get_color_primitive(family: &str, shade: &str) -> Result<&'static str, TokenError> {
    TokenState::get().resolver().get_color_primitive(family, shade)
}

/// Semantic color for a theme mode
pub fn get_semantic_color(
    category: SemanticCategory,
    token: &str,
    mode: ThemeMode,
) -> Result<&'static str, TokenError> {
    TokenState::get()
        .resolver()
        .get_semantic_color(category, token, mode)
}

/// Overlay color as an `rgba(...)` string
pub fn get_overlay_color(level: OverlayLevel, mode: ThemeMode) -> Result<String, TokenError> {
    TokenState::get().resolver().get_overlay_color(level, mode)
}

/// Composite typography style (`medium` reads as `regular`)
pub fn get_typography_style(
    breakpoint: &str,
    category: &str,
    scale: &str,
    weight: FontWeight,
) -> Result<TypographyStyle, TokenError> {
    TokenState::get()
        .resolver()
        .get_typography_style(breakpoint, category, scale, weight)
}

/// Typography primitive by property and exact key
pub fn get_typography_primitive(
    property: TypographyProperty,
    value: &str,
) -> Result<TypographyValue, TokenError> {
    TokenState::get()
        .resolver()
        .get_typography_primitive(property, value)
}

/// Resolve a `{Color/<family>/<shade>}` reference
pub fn resolve_color_reference(reference: &str) -> Result<&'static str, TokenError> {
    TokenState::get().resolver().resolve_color_reference(reference)
}

pub fn resolve_semantic_color(
    category: SemanticCategory,
    token: &str,
    mode: ThemeMode,
) -> Result<&'static str, TokenError> {
    TokenState::get()
        .resolver()
        .resolve_semantic_color(category, token, mode)
}

pub fn resolve_overlay_color(level: OverlayLevel, mode: ThemeMode) -> Result<String, TokenError> {
    TokenState::get().resolver().resolve_overlay_color(level, mode)
}

pub fn resolve_composite_typography(
    breakpoint: &str,
    category: &str,
    scale: &str,
    weight: FontWeight,
) -> Result<TypographyStyle, TokenError> {
    TokenState::get()
        .resolver()
        .resolve_composite_typography(breakpoint, category, scale, weight)
}

/// Spacing tokens of the active token set
pub fn spacing() -> &'static SpacingTokens {
    &TokenState::get().tokens().spacing
}

/// Sizing tokens of the active token set
pub fn sizing() -> &'static SizingTokens {
    &TokenState::get().tokens().sizing
}
