//! instacaption CLI application entry point
//!
//! Generates captions and hashtags for an image by sending it to a
//! captioning API.
//!
//! # Usage
//!
//! ```bash
//! # Interactive session (default command)
//! instacaption
//!
//! # One-shot generation
//! instacaption generate photo.jpg --style inspirational
//!
//! # Only print captions and hashtags
//! instacaption -q generate photo.jpg
//!
//! # Point at another API for one run
//! instacaption --api-url http://gpu-box:8000 generate photo.jpg
//! ```
//!
//! # Configuration
//!
//! Settings live in the user's config directory
//! (`~/.config/instacaption/config.toml` on Linux) and can be overridden with
//! `INSTACAPTION_*` environment variables. Logging goes to stderr and follows
//! `RUST_LOG` when set, `-v` otherwise.

use instacaption::{
    Result,
    cli::{Cli, Commands},
    commands,
    config::CaptionConfig,
    output,
};
use std::process::ExitCode;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

fn init_tracing(level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("warn,instacaption={level}")));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .init();
}

/// Load configuration and dispatch to the command handler
///
/// # Errors
///
/// Returns `CaptionError` if configuration loading fails or the command fails.
fn run(cli: &Cli) -> Result<()> {
    let command = cli.get_command();

    let config = match &command {
        Commands::Interactive { .. } => CaptionConfig::load_or_setup()?,
        _ => CaptionConfig::load()?,
    };
    let quiet = cli.quiet || config.quiet;
    let api_url = cli.api_url.as_deref();

    match &command {
        Commands::Interactive { style } => commands::interactive(&config, *style, api_url, quiet),
        Commands::Generate(args) => commands::generate(&config, args, api_url, quiet),
        Commands::Styles => {
            commands::styles(quiet);
            Ok(())
        }
        Commands::Config { command } => commands::settings(config, command, quiet),
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse_args();
    init_tracing(cli.log_level());

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            output::error(&e.to_string());
            ExitCode::FAILURE
        }
    }
}
