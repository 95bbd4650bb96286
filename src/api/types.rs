//! Request and response shapes of the captioning API

use crate::selection::Selection;
use crate::style::CaptionStyle;
use serde::{Deserialize, Serialize};

/// Path of the caption endpoint, relative to the API base
pub const GENERATE_CAPTION_PATH: &str = "/api/generate_caption";

/// Captions and hashtags returned by the API, in the order received
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaptionResult {
    pub captions: Vec<String>,
    pub hashtags: Vec<String>,
}

impl CaptionResult {
    /// Create a new result
    #[must_use]
    pub const fn new(captions: Vec<String>, hashtags: Vec<String>) -> Self {
        Self { captions, hashtags }
    }

    /// Caption at `index`, if any
    #[must_use]
    pub fn caption(&self, index: usize) -> Option<&str> {
        self.captions.get(index).map(String::as_str)
    }
}

/// Snapshot of everything one submission sends
///
/// Taken when the submission starts, so later changes to the controller do
/// not leak into a request already in flight.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaptionRequest {
    pub file: Selection,
    pub style: CaptionStyle,
}

impl CaptionRequest {
    #[must_use]
    pub const fn new(file: Selection, style: CaptionStyle) -> Self {
        Self { file, style }
    }
}
