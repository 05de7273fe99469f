//! Violations Section State
//!
//! Lifecycle: one read request on first display, then render. There is no
//! retry and no refresh loop.

use trafficwatch_shared::Violation;

use crate::client::AgentError;

/// State for the violations list section
#[derive(Debug, Clone)]
pub struct ViolationsState {
    /// Records as returned by the Agent
    pub records: Vec<Violation>,

    /// True from first display until the load request resolves
    pub loading: bool,
}

impl Default for ViolationsState {
    fn default() -> Self {
        Self {
            records: Vec::new(),
            loading: true,
        }
    }
}

impl ViolationsState {
    /// Apply the result of the one-shot load request.
    ///
    /// A failed load is logged and rendered as the empty state; the user
    /// cannot tell it apart from "no data yet".
    pub fn finish_load(&mut self, outcome: Result<Vec<Violation>, AgentError>) {
        match outcome {
            Ok(records) => self.records = records,
            Err(e) => tracing::error!("Failed to load violations: {}", e),
        }
        self.loading = false;
    }

    /// Whether the empty state should be shown
    pub fn is_empty(&self) -> bool {
        !self.loading && self.records.is_empty()
    }
}
