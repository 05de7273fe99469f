//! Agent HTTP Client
//!
//! Connects to the Agent's REST endpoints over gloo-net. One client is
//! constructed from the injected configuration and shared through
//! application state.

use gloo_net::http::Request;
use serde_json::Value;
use trafficwatch_shared::{
    AnalyzeRequest, AnalyzeResponse, RegisterUserRequest, Violation, ViolationsResponse,
};

use super::{AgentApi, AgentError};

/// HTTP client for a single Agent instance
#[derive(Debug, Clone)]
pub struct AgentClient {
    /// Agent base URL
    base_url: String,
}

impl AgentClient {
    /// Create a new client
    pub fn new(url: &str) -> Self {
        // Normalize URL (remove trailing slash)
        let base_url = url.trim_end_matches('/').to_string();
        Self { base_url }
    }

    fn health_url(&self) -> String {
        format!("{}/health", self.base_url)
    }

    fn violations_url(&self) -> String {
        format!("{}/violations", self.base_url)
    }

    fn analyze_url_endpoint(&self) -> String {
        format!("{}/analyze_url", self.base_url)
    }

    fn register_user_url(&self) -> String {
        format!("{}/register_user", self.base_url)
    }
}

#[async_trait::async_trait(?Send)]
impl AgentApi for AgentClient {
    async fn health(&self) -> Result<(), AgentError> {
        let response = Request::get(&self.health_url())
            .send()
            .await
            .map_err(|e| AgentError::ConnectionFailed(e.to_string()))?;

        if response.ok() {
            Ok(())
        } else {
            Err(AgentError::ConnectionFailed(format!(
                "Health check failed: HTTP {}",
                response.status()
            )))
        }
    }

    async fn violations(&self) -> Result<Vec<Violation>, AgentError> {
        let response = Request::get(&self.violations_url())
            .send()
            .await
            .map_err(|e| AgentError::ConnectionFailed(e.to_string()))?;

        if !response.ok() {
            return Err(AgentError::RequestFailed(format!(
                "HTTP {}: {}",
                response.status(),
                response.status_text()
            )));
        }

        let body: ViolationsResponse = response
            .json()
            .await
            .map_err(|e| AgentError::InvalidResponse(e.to_string()))?;

        Ok(body.violations)
    }

    async fn analyze_url(&self, url: &str) -> Result<Value, AgentError> {
        let request = AnalyzeRequest {
            url: url.to_string(),
        };

        let response = Request::post(&self.analyze_url_endpoint())
            .header("Content-Type", "application/json")
            .json(&request)
            .map_err(|e| AgentError::RequestFailed(e.to_string()))?
            .send()
            .await
            .map_err(|e| AgentError::ConnectionFailed(e.to_string()))?;

        if !response.ok() {
            return Err(AgentError::RequestFailed(format!(
                "HTTP {}: {}",
                response.status(),
                response.status_text()
            )));
        }

        let body: AnalyzeResponse = response
            .json()
            .await
            .map_err(|e| AgentError::InvalidResponse(e.to_string()))?;

        Ok(body.vision_result)
    }

    async fn register_user(&self, req: &RegisterUserRequest) -> Result<(), AgentError> {
        let response = Request::post(&self.register_user_url())
            .header("Content-Type", "application/json")
            .json(req)
            .map_err(|e| AgentError::RequestFailed(e.to_string()))?
            .send()
            .await
            .map_err(|e| AgentError::ConnectionFailed(e.to_string()))?;

        // Success is opaque; any non-2xx is failure with no parsed detail
        if response.ok() {
            Ok(())
        } else {
            Err(AgentError::RequestFailed(format!(
                "HTTP {}: {}",
                response.status(),
                response.status_text()
            )))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_normalized() {
        let client = AgentClient::new("https://agent.example.com/");
        assert_eq!(
            client.violations_url(),
            "https://agent.example.com/violations"
        );
        assert_eq!(
            client.analyze_url_endpoint(),
            "https://agent.example.com/analyze_url"
        );
    }
}
