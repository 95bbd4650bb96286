//! Command implementations
//!
//! Each command is a module with an execute function that takes parsed CLI
//! args and the loaded configuration.

pub mod generate;
pub mod interactive;
pub mod settings;
pub mod styles;

// Re-export execute functions for convenience
pub use generate::execute as generate;
pub use interactive::execute as interactive;
pub use settings::execute as settings;
pub use styles::execute as styles;

use crate::Result;
use crate::api::HttpCaptionClient;
use crate::config::CaptionConfig;

/// Build the HTTP client described by the configuration and `--api-url`
///
/// # Errors
///
/// Returns `CaptionError::ApiError` if the API URL is invalid or the client
/// cannot be created.
pub fn http_client(config: &CaptionConfig, api_url_flag: Option<&str>) -> Result<HttpCaptionClient> {
    let api_url = config.api_url(api_url_flag);
    tracing::debug!(api_url = %api_url, timeout = ?config.timeout(), "using captioning API");
    Ok(HttpCaptionClient::new(&api_url, config.timeout())?)
}
