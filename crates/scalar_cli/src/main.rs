//! Scalar CLI
//!
//! Query, convert and check Scalar design tokens.

mod commands;
mod config;

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use scalar_tokens::{FallbackPolicy, ThemeMode, TokenSet, TokenState};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use crate::commands::{execute, Command};
use crate::config::ScalarConfig;

#[derive(Parser, Debug)]
#[command(name = "scalar")]
#[command(about = "Scalar design tokens - query, convert and check tokens")]
#[command(version)]
struct Cli {
    /// Config file (defaults to ./scalar.toml when present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Token table file, overrides the config
    #[arg(long, global = true)]
    tokens: Option<PathBuf>,

    /// Theme mode, overrides the config
    #[arg(long, global = true)]
    mode: Option<ThemeMode>,

    /// Composite fallback policy (lenient or strict), overrides the config
    #[arg(long, global = true)]
    fallback: Option<FallbackPolicy>,

    /// Enable verbose output (-v debug, -vv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    let config = ScalarConfig::discover(cli.config.as_deref())?;

    init_logging(cli.verbose, &config.log.level);

    let tokens = match cli.tokens.as_ref().or(config.tokens.path.as_ref()) {
        Some(path) => TokenSet::load(path)
            .with_context(|| format!("Failed to load tokens from {}", path.display()))?,
        None => TokenSet::default(),
    };
    let fallback = cli.fallback.unwrap_or(config.tokens.fallback);
    let mode = cli.mode.unwrap_or(config.tokens.mode);

    TokenState::init(tokens, fallback);
    debug!("resolving in {mode} mode");

    let output = execute(&cli.command, &TokenState::get().resolver(), mode)?;
    if !output.text.is_empty() {
        println!("{}", output.text);
    }

    Ok(if output.success {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

fn init_logging(verbose: u8, configured: &str) {
    let filter = match verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(configured)),
        1 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
