//! View State Management
//!
//! Each dashboard section owns its state as a plain struct with
//! synchronous transition methods; components hold the struct in a signal
//! and apply transitions inside `update()`. Sections are independent:
//! three requests can be in flight at once with no ordering or shared
//! state between them, and each follows the same lifecycle
//! (idle, pending, resolved) on the single UI thread.

use leptos::*;

use crate::client::{AgentApi, AgentClient};
use crate::config::AgentConfig;

mod analyzer;
mod registrar;
mod violations;

pub use analyzer::AnalyzerState;
pub use registrar::{RegistrarState, RegistrationMessage, UserForm};
pub use violations::ViolationsState;

/// Global application state
#[derive(Clone)]
pub struct AppState {
    /// The Agent client, built once from injected configuration
    pub client: AgentClient,

    /// Whether the Agent answered its last health probe
    /// (None until the first probe resolves)
    pub agent_online: RwSignal<Option<bool>>,
}

impl AppState {
    /// Create the app state from resolved configuration
    pub fn new(config: &AgentConfig) -> Self {
        Self {
            client: AgentClient::new(&config.base_url),
            agent_online: create_rw_signal(None),
        }
    }

    /// Probe the Agent's health endpoint and record the outcome
    pub async fn refresh_health(&self) {
        let online = self.client.health().await.is_ok();
        if !online {
            tracing::warn!("Agent health probe failed");
        }
        self.agent_online.set(Some(online));
    }
}
