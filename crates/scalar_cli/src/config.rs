//! Scalar configuration file handling

use anyhow::{Context, Result};
use scalar_tokens::{FallbackPolicy, ThemeMode};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// File looked up in the working directory when no `--config` is given
pub const CONFIG_FILE: &str = "scalar.toml";

/// Top-level Scalar configuration (scalar.toml)
#[derive(Debug, Default, Deserialize, Serialize)]
pub struct ScalarConfig {
    #[serde(default)]
    pub tokens: TokensConfig,
    #[serde(default)]
    pub log: LogConfig,
}

/// Token table selection and resolution defaults
#[derive(Debug, Default, Deserialize, Serialize)]
pub struct TokensConfig {
    /// TOML token file replacing built-in tables (relative to the config file)
    #[serde(default)]
    pub path: Option<PathBuf>,
    /// Theme mode used when a command doesn't pass `--mode`
    #[serde(default)]
    pub mode: ThemeMode,
    /// Handling of unresolved composite typography references
    #[serde(default)]
    pub fallback: FallbackPolicy,
}

/// Logging configuration
#[derive(Debug, Deserialize, Serialize)]
pub struct LogConfig {
    /// Default filter when RUST_LOG is unset
    #[serde(default = "default_log_level")]
    pub level: String,
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

impl ScalarConfig {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;

        let mut config = Self::from_toml(&content)
            .with_context(|| format!("Failed to parse {}", path.display()))?;

        // Token paths are relative to the config file
        if let (Some(tokens), Some(dir)) = (config.tokens.path.as_mut(), path.parent()) {
            if tokens.is_relative() {
                *tokens = dir.join(&*tokens);
            }
        }

        Ok(config)
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        toml::from_str(content).context("Invalid scalar configuration")
    }

    /// Load `explicit` if given, else `./scalar.toml` if present, else defaults
    pub fn discover(explicit: Option<&Path>) -> Result<Self> {
        match explicit {
            Some(path) => {
                if !path.exists() {
                    anyhow::bail!("Config file {} does not exist", path.display());
                }
                Self::load(path)
            }
            None => {
                let local = Path::new(CONFIG_FILE);
                if local.exists() {
                    Self::load(local)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    /// Serialize to TOML string
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize config")
    }
}
