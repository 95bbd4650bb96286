//! Captioning API
//!
//! The whole remote surface is one call: a multipart `POST` carrying the
//! image (`file`) and the style (`style`), answered by a JSON object with
//! ordered `captions` and `hashtags`.
//!
//! # Architecture
//!
//! - [`CaptionService`] is the seam the controller depends on
//! - [`HttpCaptionClient`] implements it over HTTP with `reqwest`
//! - [`MockCaptionService`] replays canned responses for tests

pub mod client;
pub mod error;
pub mod mock;
pub mod traits;
pub mod types;

pub use client::{HttpCaptionClient, endpoint_url};
pub use error::{ApiError, FALLBACK_MESSAGE, GENERATE_FAILED};
pub use mock::MockCaptionService;
pub use traits::CaptionService;
pub use types::{CaptionRequest, CaptionResult, GENERATE_CAPTION_PATH};
