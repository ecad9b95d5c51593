use std::path::PathBuf;

use thiserror::Error;

/// Failure to resolve a token.
///
/// Every variant names the key or reference that missed. Resolvers fail at the
/// layer where the lookup misses and upper layers return the error untouched,
/// so a broken semantic reference surfaces as [`TokenError::UnknownShade`] (or
/// [`TokenError::UnknownFamily`]) naming the primitive that is actually absent.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum TokenError {
    #[error("invalid reference format: {0}")]
    MalformedReference(String),

    #[error("color family not found: {0}")]
    UnknownFamily(String),

    #[error("color shade not found: {family}/{shade}")]
    UnknownShade { family: String, shade: String },

    #[error("typography property not found: {0}")]
    UnknownProperty(String),

    #[error("typography value not found: {property}/{value}")]
    UnknownValue { property: String, value: String },

    #[error("color category not found: {0}")]
    UnknownCategory(String),

    #[error("semantic color token not found: {category}/{token}")]
    UnknownToken { category: String, token: String },

    #[error("overlay level not found: {0}")]
    UnknownOverlayLevel(String),

    #[error("theme mode not found: {0}")]
    UnknownMode(String),

    #[error("composite typography not found: {breakpoint}/{category}/{scale}")]
    CompositeNotFound {
        breakpoint: String,
        category: String,
        scale: String,
    },

    #[error("typography weight not found: {breakpoint}/{category}/{scale}/{weight}")]
    WeightVariantNotFound {
        breakpoint: String,
        category: String,
        scale: String,
        weight: String,
    },

    #[error("invalid hex color `{0}` (expected #RRGGBB)")]
    InvalidHexFormat(String),
}

impl TokenError {
    pub(crate) fn unknown_value(property: impl Into<String>, value: impl Into<String>) -> Self {
        Self::UnknownValue {
            property: property.into(),
            value: value.into(),
        }
    }
}

/// Failure to load a token set from disk or from a TOML document.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read token file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Toml(#[from] toml::de::Error),
}
