//! Captioning API errors
//!
//! Every failure of a submission ends up as one of these. The controller only
//! ever shows the [`ApiError::user_message`] of an error, which collapses all
//! HTTP status failures into a single fixed message.

use thiserror::Error;

/// Message shown for any non-success HTTP status
pub const GENERATE_FAILED: &str = "Failed to generate captions";

/// Message shown when a failure carries no message of its own
pub const FALLBACK_MESSAGE: &str = "An error occurred";

/// Errors that can occur while talking to the captioning API
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// The API answered with a non-2xx status
    #[error("Failed to generate captions (HTTP {0})")]
    Status(u16),

    /// The request never produced a response
    #[error("Request failed: {0}")]
    Transport(String),

    /// The response body was not a caption result
    #[error("Invalid response: {0}")]
    Decode(String),

    /// The configured API base is not a usable URL
    #[error("Invalid API URL '{0}'")]
    InvalidUrl(String),
}

impl ApiError {
    /// Message to display for this failure
    ///
    /// Status failures never expose the status code or body. Other failures
    /// surface their own message, falling back to [`FALLBACK_MESSAGE`].
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::Status(_) => GENERATE_FAILED.to_string(),
            Self::Transport(msg) | Self::Decode(msg) if msg.trim().is_empty() => FALLBACK_MESSAGE.to_string(),
            Self::Transport(msg) | Self::Decode(msg) => msg.clone(),
            Self::InvalidUrl(_) => self.to_string(),
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            Self::Decode(err.to_string())
        } else {
            Self::Transport(err.to_string())
        }
    }
}

/// Result type for API operations
pub type Result<T> = std::result::Result<T, ApiError>;
