//! Configuration module for instacaption
//!
//! Settings are layered, lowest priority first:
//!
//! 1. Built-in defaults (API base captured at build time from
//!    `INSTACAPTION_API_URL`, otherwise `http://localhost:8000`)
//! 2. `config.toml` in the user's config directory
//! 3. `INSTACAPTION_*` environment variables at run time
//! 4. Command-line flags (applied by the caller)

mod setup;

pub use setup::first_time_setup;

use crate::style::CaptionStyle;
use config::{Config, ConfigError, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// API base used when nothing else is configured
pub const DEFAULT_API_URL: &str = "http://localhost:8000";

/// Prefix of the environment variables read at run time
pub const ENV_PREFIX: &str = "INSTACAPTION";

/// Keys accepted by `config get` and `config set`
pub const KEYS: &[&str] = &["api_url", "default_style", "timeout_secs", "quiet"];

/// API base baked in at build time, if any
#[must_use]
pub fn build_time_api_url() -> &'static str {
    option_env!("INSTACAPTION_API_URL").unwrap_or(DEFAULT_API_URL)
}

/// Application configuration structure
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq, Eq)]
pub struct CaptionConfig {
    /// Base URL of the captioning API
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_url: Option<String>,

    /// Style preselected for new sessions
    #[serde(default)]
    pub default_style: CaptionStyle,

    /// Request timeout in seconds (unset = no explicit timeout)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,

    /// Suppress informational output by default
    #[serde(default)]
    pub quiet: bool,
}

impl CaptionConfig {
    /// Get the path to the config file
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the system config directory cannot be determined.
    pub fn config_path() -> Result<PathBuf, ConfigError> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| ConfigError::Message("Could not determine config directory".to_string()))?;

        Ok(config_dir.join("instacaption").join("config.toml"))
    }

    /// Load configuration from the user's config file and the environment
    ///
    /// A missing config file is not an error.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the config file or an environment variable
    /// cannot be parsed.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::config_path()?, Environment::with_prefix(ENV_PREFIX).try_parsing(true))
    }

    /// Load configuration from `path` layered under `env`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a source cannot be parsed.
    pub fn load_from(path: &Path, env: Environment) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::from(path).format(FileFormat::Toml).required(false))
            .add_source(env)
            .build()?;

        settings.try_deserialize()
    }

    /// Load configuration, running first-time setup if no config file exists
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if loading or creating the configuration fails.
    pub fn load_or_setup() -> Result<Self, ConfigError> {
        if Self::config_path()?.exists() {
            Self::load()
        } else {
            first_time_setup()
        }
    }

    /// Save configuration to the user's config file
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the file cannot be written.
    pub fn save(&self) -> Result<(), ConfigError> {
        self.save_to(&Self::config_path()?)
    }

    /// Save configuration to `path`, creating parent directories
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the config directory cannot be created, the configuration
    /// cannot be serialized to TOML, or the file cannot be written.
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .map_err(|e| ConfigError::Message(format!("Failed to create config directory: {e}")))?;
        }

        let toml_string = toml::to_string_pretty(self)
            .map_err(|e| ConfigError::Message(format!("Failed to serialize config: {e}")))?;

        fs::write(path, toml_string)
            .map_err(|e| ConfigError::Message(format!("Failed to write config file: {e}")))?;

        Ok(())
    }

    /// Resolve the API base, letting `flag` (from the command line) win
    #[must_use]
    pub fn api_url(&self, flag: Option<&str>) -> String {
        flag.or(self.api_url.as_deref())
            .map_or_else(|| build_time_api_url().to_string(), str::to_string)
    }

    /// Request timeout, if one is configured
    #[must_use]
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.filter(|s| *s > 0).map(Duration::from_secs)
    }

    /// Read a setting by key
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::NotFound` for unknown keys.
    pub fn get(&self, key: &str) -> Result<String, ConfigError> {
        match key {
            "api_url" => Ok(self.api_url(None)),
            "default_style" => Ok(self.default_style.wire_value().to_string()),
            "timeout_secs" => Ok(self.timeout_secs.map_or_else(|| "none".to_string(), |s| s.to_string())),
            "quiet" => Ok(self.quiet.to_string()),
            _ => Err(unknown_key(key)),
        }
    }

    /// Change a setting from its string form (does not save)
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::NotFound` for unknown keys and
    /// `ConfigError::Message` for values that do not parse.
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), ConfigError> {
        let value = value.trim();
        match key {
            "api_url" => {
                crate::api::endpoint_url(value)
                    .map_err(|e| ConfigError::Message(e.to_string()))?;
                self.api_url = Some(value.to_string());
            }
            "default_style" => {
                self.default_style = value
                    .parse()
                    .map_err(|e: crate::style::UnknownStyle| ConfigError::Message(e.to_string()))?;
            }
            "timeout_secs" => {
                self.timeout_secs = match value {
                    "" | "none" => None,
                    secs => Some(secs.parse().map_err(|_| {
                        ConfigError::Message(format!(
                            "Invalid value for timeout_secs: '{secs}'. Use a whole number of seconds or 'none'"
                        ))
                    })?),
                };
            }
            "quiet" => {
                self.quiet = value.parse().map_err(|_| {
                    ConfigError::Message(format!("Invalid value for quiet: '{value}'. Use 'true' or 'false'"))
                })?;
            }
            _ => return Err(unknown_key(key)),
        }
        Ok(())
    }
}

fn unknown_key(key: &str) -> ConfigError {
    ConfigError::NotFound(format!(
        "Unknown configuration key: '{key}'. Available keys: {}",
        KEYS.join(", ")
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use tempfile::TempDir;

    fn no_env() -> Environment {
        Environment::with_prefix(ENV_PREFIX).source(Some(HashMap::new()))
    }

    fn env(vars: &[(&str, &str)]) -> Environment {
        let map = vars
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect::<HashMap<_, _>>();
        Environment::with_prefix(ENV_PREFIX).try_parsing(true).source(Some(map))
    }

    #[test]
    fn test_default_config() {
        let config = CaptionConfig::default();
        assert!(config.api_url.is_none());
        assert_eq!(config.default_style, CaptionStyle::Funny);
        assert!(config.timeout().is_none());
        assert!(!config.quiet);
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = TempDir::new().unwrap();
        let config = CaptionConfig::load_from(&dir.path().join("config.toml"), no_env()).unwrap();
        assert_eq!(config, CaptionConfig::default());
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let config = CaptionConfig {
            api_url: Some("https://captions.example.com".into()),
            default_style: CaptionStyle::ShortAndPunchy,
            timeout_secs: Some(30),
            quiet: true,
        };
        config.save_to(&path).unwrap();

        let loaded = CaptionConfig::load_from(&path, no_env()).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_environment_overrides_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "api_url = \"http://file:1\"\ndefault_style = \"Funny\"\n").unwrap();

        let loaded = CaptionConfig::load_from(
            &path,
            env(&[("INSTACAPTION_API_URL", "http://env:2"), ("INSTACAPTION_TIMEOUT_SECS", "5")]),
        )
        .unwrap();

        assert_eq!(loaded.api_url.as_deref(), Some("http://env:2"));
        assert_eq!(loaded.timeout(), Some(Duration::from_secs(5)));
        assert_eq!(loaded.default_style, CaptionStyle::Funny);
    }

    #[test]
    fn test_api_url_priority() {
        let mut config = CaptionConfig::default();
        assert_eq!(config.api_url(None), build_time_api_url());

        config.api_url = Some("http://configured:9000".into());
        assert_eq!(config.api_url(None), "http://configured:9000");
        assert_eq!(config.api_url(Some("http://flag:1")), "http://flag:1");
    }

    #[test]
    fn test_set_and_get() {
        let mut config = CaptionConfig::default();

        config.set("default_style", "inspirational").unwrap();
        assert_eq!(config.get("default_style").unwrap(), "Inspirational");

        config.set("timeout_secs", "12").unwrap();
        assert_eq!(config.get("timeout_secs").unwrap(), "12");
        config.set("timeout_secs", "none").unwrap();
        assert_eq!(config.get("timeout_secs").unwrap(), "none");

        config.set("quiet", "true").unwrap();
        assert!(config.quiet);

        config.set("api_url", "http://localhost:8080/").unwrap();
        assert_eq!(config.get("api_url").unwrap(), "http://localhost:8080/");
    }

    #[test]
    fn test_set_rejects_bad_values() {
        let mut config = CaptionConfig::default();
        assert!(config.set("quiet", "maybe").is_err());
        assert!(config.set("timeout_secs", "soon").is_err());
        assert!(config.set("default_style", "Sarcastic").is_err());
        assert!(config.set("api_url", "not a url").is_err());
        assert!(matches!(config.set("colour", "red"), Err(ConfigError::NotFound(_))));
        assert!(matches!(config.get("colour"), Err(ConfigError::NotFound(_))));
    }

    #[test]
    fn test_zero_timeout_means_none() {
        let config = CaptionConfig {
            timeout_secs: Some(0),
            ..CaptionConfig::default()
        };
        assert!(config.timeout().is_none());
    }
}
