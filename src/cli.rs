//! Command-line interface definitions and parsing
//!
//! This module defines the CLI structure for instacaption using the `clap` crate.
//!
//! # Commands
//!
//! - **interactive**: Prompt-driven session: upload, pick a style, launch, copy (default)
//! - **generate**: One-shot caption generation for an image
//! - **styles**: List the available caption styles
//! - **config**: Read and change settings
//!
//! # Examples
//!
//! ```bash
//! # Start an interactive session
//! instacaption
//!
//! # Caption an image in the inspirational style and copy the first caption
//! instacaption generate beach.jpg -s inspirational --copy 1
//!
//! # Machine-readable output against another API
//! instacaption --api-url https://captions.example.com generate cat.png --json
//! ```

use crate::style::CaptionStyle;
use clap::{ArgAction, Args, Parser, Subcommand};
use std::path::PathBuf;

/// Generate captions and hashtags for an image
#[derive(Parser, Debug)]
#[command(name = "instacaption", version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Suppress informational output (only print results)
    #[arg(short = 'q', long = "quiet", global = true)]
    pub quiet: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Base URL of the captioning API (overrides config and environment)
    #[arg(long = "api-url", value_name = "URL", global = true)]
    pub api_url: Option<String>,
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Interactive session (default)
    #[command(visible_alias = "i")]
    Interactive {
        /// Style to start with (overrides config)
        #[arg(short = 's', long = "style", value_enum)]
        style: Option<CaptionStyle>,
    },

    /// Generate captions for one image
    #[command(visible_alias = "g")]
    Generate(GenerateArgs),

    /// List the available caption styles
    Styles,

    /// Manage configuration settings
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

/// Arguments for the generate command
#[derive(Args, Debug, Clone)]
pub struct GenerateArgs {
    /// Image to caption
    #[arg(value_name = "IMAGE")]
    pub image: PathBuf,

    /// Caption style (defaults to the configured style)
    #[arg(short = 's', long = "style", value_enum)]
    pub style: Option<CaptionStyle>,

    /// Copy caption N (1-based) to the clipboard
    #[arg(short = 'c', long = "copy", value_name = "N", value_parser = clap::value_parser!(u16).range(1..))]
    pub copy: Option<u16>,

    /// Open the image in the system viewer before launching
    #[arg(short = 'p', long = "preview")]
    pub preview: bool,

    /// Print the raw result as JSON
    #[arg(long = "json")]
    pub json: bool,
}

/// Configuration management subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum ConfigCommands {
    /// Set a configuration value
    Set {
        /// Configuration key=value (e.g., default_style=inspirational)
        #[arg(value_name = "KEY=VALUE")]
        setting: String,
    },

    /// Get a configuration value
    Get {
        /// Configuration key to retrieve (e.g., api_url)
        #[arg(value_name = "KEY")]
        key: String,
    },

    /// Show every setting
    Show,

    /// Print the config file location
    Path,
}

impl Cli {
    /// Parse command line arguments
    #[must_use]
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Get the command, defaulting to Interactive if none specified
    #[must_use]
    pub fn get_command(&self) -> Commands {
        self.command
            .clone()
            .unwrap_or(Commands::Interactive { style: None })
    }

    /// Default log filter for the requested verbosity
    #[must_use]
    pub const fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}

/// Split a `key=value` setting
///
/// # Errors
///
/// Returns `CaptionError::InvalidInput` if there is no `=`.
pub fn parse_setting(setting: &str) -> crate::Result<(&str, &str)> {
    setting
        .split_once('=')
        .map(|(k, v)| (k.trim(), v.trim()))
        .ok_or_else(|| {
            crate::CaptionError::InvalidInput(
                "Invalid format. Use: instacaption config set key=value".into(),
            )
        })
}
