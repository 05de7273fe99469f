//! Agent Endpoint Configuration
//!
//! The Agent base URL is injected rather than baked into the view layer.
//! A `<meta name="agent-base-url">` tag in the host document wins; when it
//! is absent the window origin is used (the dashboard served behind the
//! Agent itself).

/// Name of the meta tag carrying the Agent base URL.
const META_NAME: &str = "agent-base-url";

/// Fallback when neither the meta tag nor a window origin is available.
const DEFAULT_BASE_URL: &str = "http://localhost:8080";

/// Resolved Agent endpoint configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AgentConfig {
    /// Agent base URL, without a trailing slash
    pub base_url: String,
}

impl AgentConfig {
    /// Build a config from an explicit base URL.
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Resolve the config from the current document.
    pub fn from_document() -> Self {
        let injected = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| {
                d.query_selector(&format!("meta[name='{}']", META_NAME))
                    .ok()
                    .flatten()
            })
            .and_then(|el| el.get_attribute("content"));

        match injected {
            Some(url) if !url.is_empty() => Self::new(&url),
            _ => Self::new(&origin_fallback()),
        }
    }
}

fn origin_fallback() -> String {
    web_sys::window()
        .and_then(|w| w.location().origin().ok())
        .unwrap_or_else(|| DEFAULT_BASE_URL.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trailing_slash_normalized() {
        let config = AgentConfig::new("https://agent.example.com/");
        assert_eq!(config.base_url, "https://agent.example.com");
    }

    #[test]
    fn test_plain_url_kept_as_is() {
        let config = AgentConfig::new("https://agent.example.com");
        assert_eq!(config.base_url, "https://agent.example.com");
    }
}
