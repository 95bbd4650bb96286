//! Mock caption service for testing

use super::error::{ApiError, Result};
use super::traits::CaptionService;
use super::types::{CaptionRequest, CaptionResult};
use std::cell::RefCell;
use std::collections::VecDeque;

/// Mock service that replays predetermined responses
///
/// Responses are handed out in order; once the queue is empty every call
/// fails with a transport error. Every request received is recorded.
#[derive(Debug, Default)]
pub struct MockCaptionService {
    responses: RefCell<VecDeque<Result<CaptionResult>>>,
    requests: RefCell<Vec<CaptionRequest>>,
}

impl MockCaptionService {
    /// Create a mock with an empty response queue
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a mock that answers once with `result`
    #[must_use]
    pub fn succeeding(result: CaptionResult) -> Self {
        let mock = Self::new();
        mock.push(Ok(result));
        mock
    }

    /// Create a mock that answers once with `error`
    #[must_use]
    pub fn failing(error: ApiError) -> Self {
        let mock = Self::new();
        mock.push(Err(error));
        mock
    }

    /// Queue another response
    pub fn push(&self, response: Result<CaptionResult>) {
        self.responses.borrow_mut().push_back(response);
    }

    /// Requests received so far
    #[must_use]
    pub fn requests(&self) -> Vec<CaptionRequest> {
        self.requests.borrow().clone()
    }

    /// Number of requests received so far
    #[must_use]
    pub fn call_count(&self) -> usize {
        self.requests.borrow().len()
    }
}

impl CaptionService for MockCaptionService {
    fn generate(&self, request: &CaptionRequest) -> Result<CaptionResult> {
        self.requests.borrow_mut().push(request.clone());
        self.responses
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Err(ApiError::Transport("no mock response queued".into())))
    }
}
