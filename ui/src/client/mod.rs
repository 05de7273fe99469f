//! Agent Client Layer
//!
//! This module provides the HTTP interface to the Agent - the external
//! service that owns violation detection, image analysis, and user
//! persistence. The dashboard only ever issues one-shot request/response
//! calls; there is no streaming or subscription channel, and nothing is
//! retried.

mod http;

pub use http::AgentClient;

use async_trait::async_trait;
use serde_json::Value;
use trafficwatch_shared::{RegisterUserRequest, Violation};

/// Error type for Agent requests
///
/// Classification is deliberately coarse: callers only distinguish
/// "request failed" from "request succeeded".
#[derive(Debug, thiserror::Error)]
pub enum AgentError {
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    #[error("Request failed: {0}")]
    RequestFailed(String),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

/// Trait for Agent client implementations
#[async_trait(?Send)]
pub trait AgentApi {
    /// Check whether the Agent is reachable
    async fn health(&self) -> Result<(), AgentError>;

    /// Fetch the violation collection
    async fn violations(&self) -> Result<Vec<Violation>, AgentError>;

    /// Submit an image URL for remote analysis and return the raw payload
    async fn analyze_url(&self, url: &str) -> Result<Value, AgentError>;

    /// Register a dummy user record
    async fn register_user(&self, req: &RegisterUserRequest) -> Result<(), AgentError>;
}
