//! Service abstraction for caption generation

use super::error::Result;
use super::types::{CaptionRequest, CaptionResult};

/// Something that turns an image and a style into captions
///
/// The controller only talks to this trait, so the HTTP client can be
/// swapped for [`MockCaptionService`](super::mock::MockCaptionService) in
/// tests or for another backend.
pub trait CaptionService {
    /// Submit one request and wait for its single response
    ///
    /// # Errors
    ///
    /// Returns an `ApiError` if the request cannot be sent, the API answers
    /// with a non-success status, or the response is not a caption result.
    fn generate(&self, request: &CaptionRequest) -> Result<CaptionResult>;
}

impl<S: CaptionService + ?Sized> CaptionService for &S {
    fn generate(&self, request: &CaptionRequest) -> Result<CaptionResult> {
        (**self).generate(request)
    }
}

impl<S: CaptionService + ?Sized> CaptionService for Box<S> {
    fn generate(&self, request: &CaptionRequest) -> Result<CaptionResult> {
        (**self).generate(request)
    }
}
