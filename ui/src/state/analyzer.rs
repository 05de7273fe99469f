//! Image Analyzer Section State
//!
//! Holds the URL field and the last analysis payload. Submissions are not
//! cancelled: if two overlap, whichever response resolves last wins.

use serde_json::{json, Value};

use crate::client::AgentError;

/// State for the image analysis section
#[derive(Debug, Clone, Default)]
pub struct AnalyzerState {
    /// URL field contents; submitted as-is, blank included
    pub image_url: String,

    /// Last analysis payload, or a synthetic `{"error": ...}` object
    pub analysis: Option<Value>,

    /// True while a request is in flight; disables the trigger
    pub submitting: bool,
}

impl AnalyzerState {
    /// Mark a submission as started and return the URL to send.
    pub fn begin_submit(&mut self) -> String {
        self.submitting = true;
        self.image_url.clone()
    }

    /// Apply a resolved submission.
    ///
    /// Later responses overwrite earlier ones, and the trigger is
    /// re-enabled whatever the outcome.
    pub fn finish_submit(&mut self, outcome: Result<Value, AgentError>) {
        self.analysis = Some(match outcome {
            Ok(payload) => payload,
            Err(e) => json!({ "error": e.to_string() }),
        });
        self.submitting = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_begin_submit_disables_trigger_and_returns_url() {
        let mut state = AnalyzerState {
            image_url: "https://cdn.example.com/junction.jpg".to_string(),
            ..Default::default()
        };

        let url = state.begin_submit();

        assert!(state.submitting);
        assert_eq!(url, "https://cdn.example.com/junction.jpg");
    }

    #[test]
    fn test_blank_url_is_still_submitted() {
        let mut state = AnalyzerState::default();
        assert_eq!(state.begin_submit(), "");
        assert!(state.submitting);
    }

    #[test]
    fn test_success_stores_payload_verbatim() {
        let payload = json!({
            "helmet_violation": true,
            "number_plate": "TN00DEMO",
            "nested": { "scores": [0.9, 0.1] },
        });

        let mut state = AnalyzerState::default();
        state.begin_submit();
        state.finish_submit(Ok(payload.clone()));

        assert_eq!(state.analysis, Some(payload));
        assert!(!state.submitting);
    }

    #[test]
    fn test_failure_stores_error_object() {
        let err = AgentError::ConnectionFailed("network unreachable".to_string());
        let message = err.to_string();

        let mut state = AnalyzerState::default();
        state.begin_submit();
        state.finish_submit(Err(err));

        assert_eq!(state.analysis, Some(json!({ "error": message })));
        assert!(!state.submitting);
    }

    #[test]
    fn test_overlapping_submissions_last_resolved_wins() {
        let mut state = AnalyzerState::default();

        // Two submissions in flight; the first resolves after the second
        state.begin_submit();
        state.begin_submit();
        state.finish_submit(Ok(json!({ "request": "second" })));
        state.finish_submit(Ok(json!({ "request": "first" })));

        assert_eq!(state.analysis, Some(json!({ "request": "first" })));
        assert!(!state.submitting);
    }
}
