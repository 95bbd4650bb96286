//! Upload & submit controller
//!
//! Owns everything the caption page shows: the selected image, its preview,
//! the chosen style and the [`SubmissionState`]. All changes go through the
//! operations below; rendering is a read-only projection (see
//! [`crate::render`]).

mod state;

pub use state::SubmissionState;

use crate::api::{ApiError, CaptionRequest, CaptionResult, CaptionService, FALLBACK_MESSAGE};
use crate::clipboard::{TextClipboard, copy_fire_and_forget};
use crate::selection::{Preview, Selection};
use crate::style::CaptionStyle;

/// Identifies one submission attempt
///
/// Every file selection and every started submission moves the controller to
/// a new attempt, so an outcome can only settle the attempt it was issued for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket(u64);

/// A started submission: the request to send and the ticket to settle it with
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    pub ticket: Ticket,
    pub request: CaptionRequest,
}

/// Form controller bound to one caption service
pub struct CaptionController<S> {
    service: S,
    selection: Option<Selection>,
    preview: Option<Preview>,
    style: CaptionStyle,
    state: SubmissionState,
    attempt: u64,
}

impl<S: CaptionService> CaptionController<S> {
    /// Create a controller with nothing selected
    #[must_use]
    pub fn new(service: S, style: CaptionStyle) -> Self {
        Self {
            service,
            selection: None,
            preview: None,
            style,
            state: SubmissionState::Idle,
            attempt: 0,
        }
    }

    /// Select a new image
    ///
    /// Replaces the previous selection and preview and clears any result or
    /// error. Nothing is sent. A submission still in flight is abandoned: its
    /// outcome will be dropped by [`complete`](Self::complete).
    pub fn select_file(&mut self, selection: Selection) {
        tracing::debug!(file = selection.name(), size = selection.len(), "file selected");
        self.preview = Some(Preview::of(&selection));
        self.selection = Some(selection);
        self.state = SubmissionState::Idle;
        self.attempt += 1;
    }

    /// Choose the style for the next submission
    pub fn set_style(&mut self, style: CaptionStyle) {
        self.style = style;
    }

    /// Whether [`submit`](Self::submit) would do anything right now
    #[must_use]
    pub const fn can_submit(&self) -> bool {
        self.selection.is_some() && !self.state.is_loading()
    }

    /// Start a submission and hand back the request to send
    ///
    /// Returns `None` (and changes nothing) when no file is selected or a
    /// submission is already loading. The returned request is a snapshot, so
    /// style changes made afterwards only affect the next submission.
    pub fn begin_submit(&mut self) -> Option<Submission> {
        if !self.can_submit() {
            return None;
        }
        let file = self.selection.clone()?;

        self.attempt += 1;
        self.state = std::mem::take(&mut self.state).begin();
        Some(Submission {
            ticket: Ticket(self.attempt),
            request: CaptionRequest::new(file, self.style),
        })
    }

    /// Settle the submission identified by `ticket` with its outcome
    ///
    /// Returns `false` and drops the outcome if nothing is loading or the
    /// ticket belongs to an earlier attempt (the file was reselected or a
    /// newer submission started).
    pub fn complete(&mut self, ticket: Ticket, outcome: Result<CaptionResult, ApiError>) -> bool {
        if !self.state.is_loading() || ticket != Ticket(self.attempt) {
            tracing::debug!("dropping outcome of a submission that is no longer current");
            return false;
        }
        self.state = settle(std::mem::take(&mut self.state), outcome);
        true
    }

    /// Submit the selected image with the current style and wait for the answer
    ///
    /// Returns `false` without touching the network when no file is selected
    /// or a submission is already loading. Loading always ends when this
    /// returns, including when the service panics.
    pub fn submit(&mut self) -> bool {
        let Some(Submission { request, .. }) = self.begin_submit() else {
            return false;
        };

        let in_flight = InFlight {
            state: &mut self.state,
            settled: false,
        };
        let outcome = self.service.generate(&request);
        in_flight.settle(outcome);
        true
    }

    /// Copy the caption at `index` to the clipboard
    ///
    /// Fire-and-forget: clipboard failures are only logged. Returns `false` if
    /// there is no caption at that index.
    pub fn copy_caption(&self, index: usize, clipboard: &mut dyn TextClipboard) -> bool {
        match self.state.result().and_then(|r| r.caption(index)) {
            Some(caption) => {
                copy_fire_and_forget(clipboard, caption);
                true
            }
            None => false,
        }
    }

    /// Currently selected image
    #[must_use]
    pub const fn selection(&self) -> Option<&Selection> {
        self.selection.as_ref()
    }

    /// Preview of the selected image
    #[must_use]
    pub const fn preview(&self) -> Option<&Preview> {
        self.preview.as_ref()
    }

    /// Style the next submission will use
    #[must_use]
    pub const fn style(&self) -> CaptionStyle {
        self.style
    }

    /// Submission state
    #[must_use]
    pub const fn state(&self) -> &SubmissionState {
        &self.state
    }

    /// Whether a submission is in flight
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        self.state.is_loading()
    }

    /// Most recent successful result
    #[must_use]
    pub const fn result(&self) -> Option<&CaptionResult> {
        self.state.result()
    }

    /// Error of the last submission, if it failed
    #[must_use]
    pub fn error(&self) -> Option<&str> {
        self.state.error()
    }

    /// The underlying caption service
    #[must_use]
    pub const fn service(&self) -> &S {
        &self.service
    }
}

fn settle(state: SubmissionState, outcome: Result<CaptionResult, ApiError>) -> SubmissionState {
    match outcome {
        Ok(result) => {
            tracing::info!(
                captions = result.captions.len(),
                hashtags = result.hashtags.len(),
                "captions generated"
            );
            SubmissionState::succeed(result)
        }
        Err(e) => {
            tracing::info!(error = %e, "caption generation failed");
            state.fail(e.user_message())
        }
    }
}

/// Loading guard: settles the state when dropped without an outcome
struct InFlight<'a> {
    state: &'a mut SubmissionState,
    settled: bool,
}

impl InFlight<'_> {
    fn settle(mut self, outcome: Result<CaptionResult, ApiError>) {
        *self.state = settle(std::mem::take(self.state), outcome);
        self.settled = true;
    }
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        if !self.settled {
            tracing::warn!("caption request aborted before settling");
            *self.state = std::mem::take(self.state).fail(FALLBACK_MESSAGE.to_string());
        }
    }
}
