//! The complete token set
//!
//! A [`TokenSet`] owns every table. It is built once (from the built-in tables
//! or a TOML file) and only read afterwards.

use std::fmt::{Display, Formatter};
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::color::Rgba;
use crate::error::{LoadError, TokenError};
use crate::mode::ThemeMode;
use crate::resolver::{FallbackPolicy, Resolver};
use crate::tokens::*;

/// All token tables
///
/// Deserializing fills sections missing from the document with the built-in
/// tables, so a TOML file only needs the sections it replaces:
///
/// ```toml
/// [semantic.light.text]
/// primary = "{Color/brand/900}"
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TokenSet {
    pub colors: ColorPrimitives,
    pub semantic: SemanticColors,
    pub typography: TypographyPrimitives,
    pub composite: CompositeTypography,
    pub spacing: SpacingTokens,
    pub sizing: SizingTokens,
}

impl TokenSet {
    /// Parse a token set from a TOML document
    pub fn from_toml_str(src: &str) -> Result<Self, LoadError> {
        Ok(toml::from_str(src)?)
    }

    /// Read and parse a TOML token file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, LoadError> {
        let path = path.as_ref();
        let src = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        debug!("TokenSet::load - reading tokens from {}", path.display());
        Self::from_toml_str(&src)
    }

    pub fn resolver(&self) -> Resolver<'_> {
        Resolver::new(self)
    }

    /// Check the referential integrity of every shipped table.
    ///
    /// Resolution itself stays lazy; this walks every primitive color, every
    /// semantic reference and every composite leaf (with strict fallback) and
    /// collects all failures instead of stopping at the first.
    pub fn validate(&self) -> IntegrityReport {
        let resolver = Resolver::new(self).with_fallback(FallbackPolicy::Strict);
        let mut report = IntegrityReport::default();

        for (family, shades) in self.colors.families() {
            for (shade, hex) in shades {
                if let Err(error) = Rgba::from_hex(hex, 1.0) {
                    report.push(format!("colors.{family}.{shade}"), error);
                }
            }
        }

        for mode in ThemeMode::all() {
            for (category, group) in self.semantic.palette(*mode).categories() {
                for (token, reference) in group {
                    if let Err(error) = resolver.resolve_color_reference(reference) {
                        report.push(format!("semantic.{mode}.{category}.{token}"), error);
                    }
                }
            }
        }

        for (breakpoint, category, scale, weight, refs) in self.composite.leaves() {
            let path = format!("composite.{breakpoint}.{category}.{scale}.{weight}");
            let resolved = weight
                .parse::<FontWeight>()
                .and_then(|weight| resolver.assemble(refs, scale, weight));
            if let Err(error) = resolved {
                report.push(path, error);
            }
        }

        debug!(
            "TokenSet::validate - {} integrity failure(s)",
            report.failures.len()
        );
        report
    }
}

/// A token path that failed the integrity check
#[derive(Clone, Debug, PartialEq)]
pub struct IntegrityFailure {
    pub path: String,
    pub error: TokenError,
}

/// Result of [`TokenSet::validate`]
#[derive(Clone, Debug, Default, PartialEq)]
pub struct IntegrityReport {
    pub failures: Vec<IntegrityFailure>,
}

impl IntegrityReport {
    fn push(&mut self, path: String, error: TokenError) {
        self.failures.push(IntegrityFailure { path, error });
    }

    pub fn is_ok(&self) -> bool {
        self.failures.is_empty()
    }
}

impl Display for IntegrityReport {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        for failure in &self.failures {
            writeln!(f, "{}: {}", failure.path, failure.error)?;
        }
        Ok(())
    }
}
