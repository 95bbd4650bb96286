//! Interactive setup wizard for first-time configuration
//!
//! Runs when an interactive session starts and no config file exists yet.

use super::{CaptionConfig, build_time_api_url};
use crate::style::CaptionStyle;
use config::ConfigError;
use dialoguer::{Input, Select, theme::ColorfulTheme};

/// Interactive first-time setup - prompts for the API location and default style
///
/// 1. Prompts for the captioning API base URL (default: the build-time value)
/// 2. Prompts for the style new sessions start with
/// 3. Creates and saves the configuration
///
/// # Errors
///
/// Returns `ConfigError` if:
/// - User input cannot be read
/// - The entered URL is not usable
/// - The configuration cannot be saved
pub fn first_time_setup() -> Result<CaptionConfig, ConfigError> {
    println!("Welcome to instacaption! Let's point it at a captioning API.\n");

    let theme = ColorfulTheme::default();

    let api_url: String = Input::with_theme(&theme)
        .with_prompt("Captioning API URL")
        .default(build_time_api_url().to_string())
        .validate_with(|input: &String| validate_api_url(input))
        .interact_text()
        .map_err(|e| ConfigError::Message(format!("Failed to read input: {e}")))?;

    let labels: Vec<&str> = CaptionStyle::ALL.iter().map(|s| s.label()).collect();
    let style_index = Select::with_theme(&theme)
        .with_prompt("Default caption style")
        .items(&labels)
        .default(CaptionStyle::default().index())
        .interact()
        .map_err(|e| ConfigError::Message(format!("Failed to read input: {e}")))?;

    let config = CaptionConfig {
        api_url: Some(api_url),
        default_style: CaptionStyle::ALL[style_index],
        ..CaptionConfig::default()
    };

    config.save()?;

    println!("\nConfiguration saved successfully!");
    Ok(config)
}

/// Check that an entered API base yields a usable caption endpoint
fn validate_api_url(input: &str) -> Result<(), String> {
    crate::api::endpoint_url(input).map(|_| ()).map_err(|e| e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_api_url_accepts_http_bases() {
        assert!(validate_api_url("http://localhost:8000").is_ok());
        assert!(validate_api_url("https://captions.example.com/").is_ok());
    }

    #[test]
    fn test_validate_api_url_rejects_unusable_input() {
        assert!(validate_api_url("").is_err());
        assert!(validate_api_url("localhost:8000").is_err());
        assert!(validate_api_url("ftp://files.example.com").is_err());
    }
}
