//! Command execution
//!
//! Commands render to a string so they can be exercised against an injected
//! token set; `main` only prints and maps the exit status.

use std::fmt::Write;

use anyhow::{Context, Result};
use clap::{Subcommand, ValueEnum};
use scalar_tokens::{
    hex_to_rgba, FontWeight, OverlayLevel, Resolver, SemanticCategory, ThemeMode,
    TypographyProperty,
};

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print a primitive color
    Color {
        /// Color family (e.g. brand, neutral)
        family: String,
        /// Shade (e.g. 500, white)
        shade: String,
    },

    /// Resolve a semantic color for the active mode
    Semantic {
        /// text, background or overlay
        category: SemanticCategory,
        /// Token name within the category
        token: String,
    },

    /// Resolve an overlay color as rgba
    Overlay {
        /// 30, 50 or 70
        level: OverlayLevel,
    },

    /// Resolve a composite typography style
    Typography {
        /// Breakpoint (e.g. desktopLarge)
        breakpoint: String,
        /// Style category (e.g. heading)
        category: String,
        /// Type scale (xs .. 5xl)
        scale: String,
        /// regular, medium, semiBold or bold
        #[arg(default_value = "regular")]
        weight: FontWeight,
        /// Print the style as JSON
        #[arg(long)]
        json: bool,
    },

    /// Look up a typography primitive
    Primitive {
        /// family, size, weight, lineHeight or letterSpacing
        property: TypographyProperty,
        /// Primitive key (exact match)
        value: String,
    },

    /// Convert a hex color to rgba
    Rgba {
        /// Color as #RRGGBB
        hex: String,
        /// Alpha component
        #[arg(allow_negative_numbers = true)]
        alpha: f64,
    },

    /// Verify that every table entry resolves
    Check,

    /// List table contents
    List {
        #[arg(value_enum)]
        what: ListTarget,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum ListTarget {
    /// Color families and their shades
    Families,
    /// Semantic tokens for the active mode
    Tokens,
    /// Composite typography styles
    Styles,
}

/// Rendered command output
#[derive(Debug, PartialEq)]
pub struct Output {
    pub text: String,
    pub success: bool,
}

impl Output {
    fn ok(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            success: true,
        }
    }
}

pub fn execute(command: &Command, resolver: &Resolver<'_>, mode: ThemeMode) -> Result<Output> {
    match command {
        Command::Color { family, shade } => {
            let hex = resolver
                .get_color_primitive(family, shade)
                .with_context(|| format!("Failed to look up color {family}/{shade}"))?;
            Ok(Output::ok(hex))
        }

        Command::Semantic { category, token } => {
            let hex = resolver
                .get_semantic_color(*category, token, mode)
                .with_context(|| format!("Failed to resolve {category}/{token} ({mode})"))?;
            Ok(Output::ok(hex))
        }

        Command::Overlay { level } => {
            let rgba = resolver
                .get_overlay_color(*level, mode)
                .with_context(|| format!("Failed to resolve overlay {level} ({mode})"))?;
            Ok(Output::ok(rgba))
        }

        Command::Typography {
            breakpoint,
            category,
            scale,
            weight,
            json,
        } => {
            let style = resolver
                .get_typography_style(breakpoint, category, scale, *weight)
                .with_context(|| {
                    format!("Failed to resolve {breakpoint}/{category}/{scale}/{weight}")
                })?;
            if *json {
                let text =
                    serde_json::to_string_pretty(&style).context("Failed to serialize style")?;
                return Ok(Output::ok(text));
            }
            let mut text = String::new();
            writeln!(text, "family:        {}", style.family)?;
            writeln!(text, "size:          {}", style.size)?;
            writeln!(text, "weight:        {}", style.weight)?;
            writeln!(text, "lineHeight:    {}", style.line_height)?;
            write!(text, "letterSpacing: {}", style.letter_spacing)?;
            Ok(Output::ok(text))
        }

        Command::Primitive { property, value } => {
            let primitive = resolver
                .get_typography_primitive(*property, value)
                .with_context(|| format!("Failed to look up {property}/{value}"))?;
            Ok(Output::ok(primitive.to_string()))
        }

        Command::Rgba { hex, alpha } => {
            let rgba = hex_to_rgba(hex, *alpha).context("Failed to convert color")?;
            Ok(Output::ok(rgba))
        }

        Command::Check => {
            let report = resolver.tokens().validate();
            if report.is_ok() {
                return Ok(Output::ok("All tokens resolve"));
            }
            let count = report.failures.len();
            tracing::debug!("integrity check found {count} failure(s)");
            Ok(Output {
                text: format!("{}{count} token(s) failed to resolve", report),
                success: false,
            })
        }

        Command::List { what } => list(*what, resolver, mode),
    }
}

fn list(what: ListTarget, resolver: &Resolver<'_>, mode: ThemeMode) -> Result<Output> {
    let tokens = resolver.tokens();
    let mut text = String::new();

    match what {
        ListTarget::Families => {
            for (family, shades) in tokens.colors.families() {
                let keys: Vec<&str> = shades.keys().map(String::as_str).collect();
                writeln!(text, "{family:<10} {}", keys.join(" "))?;
            }
        }
        ListTarget::Tokens => {
            for (category, group) in tokens.semantic.palette(mode).categories() {
                for (token, reference) in group {
                    // Unresolvable entries are listed rather than aborting the listing
                    let value = match category.parse::<SemanticCategory>() {
                        Ok(SemanticCategory::Overlay) => token
                            .parse::<OverlayLevel>()
                            .and_then(|level| resolver.resolve_overlay_color(level, mode))
                            .unwrap_or_else(|err| format!("<{err}>")),
                        _ => resolver
                            .resolve_color_reference(reference)
                            .map(str::to_string)
                            .unwrap_or_else(|err| format!("<{err}>")),
                    };
                    writeln!(text, "{category}/{token:<20} {reference:<24} {value}")?;
                }
            }
        }
        ListTarget::Styles => {
            for (breakpoint, category, scale, weight, _) in tokens.composite.leaves() {
                writeln!(text, "{breakpoint}/{category}/{scale}/{weight}")?;
            }
        }
    }

    Ok(Output::ok(text.trim_end()))
}
