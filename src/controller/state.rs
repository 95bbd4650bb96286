//! Submission state machine
//!
//! ```text
//! Idle ──begin──▶ Loading ──succeed──▶ Succeeded
//!                    │
//!                    └────fail───────▶ Failed
//! ```
//!
//! Any settled state may begin again. Selecting a new file resets to `Idle`.
//! Loading and failure carry the result of the last successful attempt along,
//! since neither clears it.

use crate::api::CaptionResult;

/// State of the current (or last) submission
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SubmissionState {
    /// Nothing submitted since the last file selection
    #[default]
    Idle,
    /// A request is in flight
    Loading { previous: Option<CaptionResult> },
    /// The last request returned captions
    Succeeded(CaptionResult),
    /// The last request failed
    Failed {
        message: String,
        previous: Option<CaptionResult>,
    },
}

impl SubmissionState {
    /// Start a submission, clearing any error
    #[must_use]
    pub fn begin(self) -> Self {
        Self::Loading {
            previous: self.into_result(),
        }
    }

    /// Settle with a fresh result
    #[must_use]
    pub const fn succeed(result: CaptionResult) -> Self {
        Self::Succeeded(result)
    }

    /// Settle with an error, keeping whatever result was held
    #[must_use]
    pub fn fail(self, message: String) -> Self {
        Self::Failed {
            message,
            previous: self.into_result(),
        }
    }

    /// Whether a request is in flight
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        matches!(self, Self::Loading { .. })
    }

    /// Most recent successful result, if one is held
    #[must_use]
    pub const fn result(&self) -> Option<&CaptionResult> {
        match self {
            Self::Idle => None,
            Self::Succeeded(result) => Some(result),
            Self::Loading { previous } | Self::Failed { previous, .. } => previous.as_ref(),
        }
    }

    /// Error message of a failed attempt
    #[must_use]
    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Failed { message, .. } => Some(message),
            _ => None,
        }
    }

    /// Whether the held result comes from an earlier attempt than the current one
    #[must_use]
    pub const fn result_is_stale(&self) -> bool {
        matches!(
            self,
            Self::Loading { previous: Some(_) } | Self::Failed { previous: Some(_), .. }
        )
    }

    fn into_result(self) -> Option<CaptionResult> {
        match self {
            Self::Idle => None,
            Self::Succeeded(result) => Some(result),
            Self::Loading { previous } | Self::Failed { previous, .. } => previous,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> CaptionResult {
        CaptionResult::new(vec!["cap".into()], vec!["tag".into()])
    }

    #[test]
    fn test_idle_has_nothing() {
        let state = SubmissionState::default();
        assert!(!state.is_loading());
        assert!(state.result().is_none());
        assert!(state.error().is_none());
    }

    #[test]
    fn test_begin_clears_error_keeps_result() {
        let failed = SubmissionState::succeed(sample()).fail("boom".into());
        let loading = failed.begin();

        assert!(loading.is_loading());
        assert!(loading.error().is_none());
        assert_eq!(loading.result(), Some(&sample()));
        assert!(loading.result_is_stale());
    }

    #[test]
    fn test_fail_keeps_previous_result() {
        let state = SubmissionState::succeed(sample()).begin().fail("nope".into());

        assert_eq!(state.error(), Some("nope"));
        assert_eq!(state.result(), Some(&sample()));
        assert!(!state.is_loading());
    }

    #[test]
    fn test_fail_from_idle_has_no_result() {
        let state = SubmissionState::Idle.begin().fail("nope".into());
        assert!(state.result().is_none());
        assert!(!state.result_is_stale());
    }

    #[test]
    fn test_succeed_replaces_result() {
        let other = CaptionResult::new(vec!["new".into()], vec![]);
        let state = SubmissionState::succeed(sample()).begin();
        let state = match state {
            SubmissionState::Loading { .. } => SubmissionState::succeed(other.clone()),
            _ => unreachable!(),
        };

        assert_eq!(state.result(), Some(&other));
        assert!(!state.result_is_stale());
    }
}
