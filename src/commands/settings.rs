//! Configuration commands

use crate::cli::{ConfigCommands, parse_setting};
use crate::config::{CaptionConfig, KEYS};
use crate::{Result, output};

/// Execute a config subcommand
///
/// # Errors
///
/// Returns `CaptionError::InvalidInput` for malformed settings and
/// `CaptionError::ConfigError` for unknown keys, bad values, or save failures.
pub fn execute(mut config: CaptionConfig, command: &ConfigCommands, quiet: bool) -> Result<()> {
    match command {
        ConfigCommands::Set { setting } => {
            let (key, value) = parse_setting(setting)?;
            config.set(key, value)?;
            config.save()?;
            output::success(&format!("Set {key} = {}", config.get(key)?), quiet);
        }
        ConfigCommands::Get { key } => {
            println!("{}", config.get(key)?);
        }
        ConfigCommands::Show => {
            for key in KEYS {
                println!("{}", output::setting(key, &config.get(key)?));
            }
        }
        ConfigCommands::Path => {
            println!("{}", CaptionConfig::config_path()?.display());
        }
    }
    Ok(())
}
