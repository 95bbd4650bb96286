//! instacaption - AI captions and hashtags for your images
//!
//! Pick an image, pick a tone, and let a remote captioning API come up with
//! captions and hashtags for it. The library holds the form logic
//! ([`controller`]), the single API call ([`api`]) and a terminal rendering
//! of the result ([`render`]); the binary wraps them in a CLI.
//!
//! ```no_run
//! use instacaption::api::HttpCaptionClient;
//! use instacaption::controller::CaptionController;
//! use instacaption::selection::Selection;
//! use instacaption::style::CaptionStyle;
//!
//! let client = HttpCaptionClient::new("http://localhost:8000", None)?;
//! let mut controller = CaptionController::new(client, CaptionStyle::Funny);
//! controller.select_file(Selection::from_path("beach.jpg")?);
//! controller.submit();
//! println!("{}", instacaption::render::render(&controller));
//! # Ok::<(), instacaption::CaptionError>(())
//! ```

use thiserror::Error;

pub mod api;
pub mod cli;
pub mod clipboard;
pub mod commands;
pub mod config;
pub mod controller;
pub mod output;
pub mod render;
pub mod selection;
pub mod style;

#[cfg(test)]
pub mod testing;

/// Error enum, contains all failure states of the program
#[derive(Debug, Error)]
pub enum CaptionError {
    /// Captioning API error
    #[error("API error: {0}")]
    ApiError(#[from] api::ApiError),
    /// The image could not be selected
    #[error("{0}")]
    SelectionError(#[from] selection::SelectionError),
    /// Clipboard error
    #[error("{0}")]
    ClipboardError(#[from] clipboard::ClipboardError),
    /// A submission finished with an error message
    #[error("Caption generation failed: {0}")]
    GenerationFailed(String),
    /// Represents a configuration error
    #[error("Configuration error: {0}")]
    ConfigError(#[from] ::config::ConfigError),
    /// Interactive prompt error
    #[error("Prompt error: {0}")]
    PromptError(#[from] dialoguer::Error),
    /// Serialization error
    #[error("Serialization error: {0}")]
    JsonError(#[from] serde_json::Error),
    /// Represents an I/O error
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
    /// Invalid input error
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Result type used across the crate
pub type Result<T> = std::result::Result<T, CaptionError>;
